use sea_orm::DatabaseConnection;
use serenity::all::{Context, EventHandler, Message, Ready};
use serenity::async_trait;

pub mod message;
pub mod ready;

use crate::{config::Config, service::mirror::guard::ProvisionLocks};

/// Discord bot event handler
pub struct Handler {
    pub db: DatabaseConnection,
    /// The only guild whose messages are relayed.
    pub source_guild_id: u64,
    /// Webhook endpoints created per newly provisioned channel.
    pub webhooks_per_channel: usize,
    /// Per-channel locks serializing first-sight provisioning.
    pub provision_locks: ProvisionLocks,
}

impl Handler {
    pub fn new(db: DatabaseConnection, config: &Config) -> Self {
        Self {
            db,
            source_guild_id: config.source_guild_id,
            webhooks_per_channel: config.webhooks_per_channel,
            provision_locks: ProvisionLocks::new(),
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(ctx, ready).await;
    }

    /// Called when a message is sent in a channel
    async fn message(&self, ctx: Context, message: Message) {
        message::handle_message(self, ctx, message).await;
    }
}
