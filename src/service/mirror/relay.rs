//! Message relaying into the mirror guild.
//!
//! For each inbound message the relay loads the channel's webhook mapping,
//! provisions the channel on first sight (serialized per channel via
//! `ProvisionLocks`), then posts the formatted body through one endpoint
//! chosen uniformly at random with all mention notifications suppressed.

use std::collections::HashMap;
use std::sync::Arc;

use rand::seq::IndexedRandom;
use sea_orm::DatabaseConnection;
use serenity::all::{CreateAllowedMentions, ExecuteWebhook, Message, Role, RoleId, Webhook};
use serenity::http::Http;

use crate::{
    data::{channel_webhook::ChannelWebhookRepository, mirror_guild::MirrorGuildRepository},
    error::AppError,
    service::mirror::{
        format::{self, MessageBody},
        guard::ProvisionLocks,
        provision::{ChannelProvisioner, ProvisionRequest},
    },
    util::parse::parse_u64_from_string,
};

/// Source channel metadata snapshotted from the gateway cache before relaying.
///
/// Captured in the event handler while the cache reference is held; the relay
/// itself only works with owned data across its await points.
pub struct SourceChannel {
    /// Source channel name, mirrored on provisioning.
    pub channel_name: String,
    /// Name of the source channel's parent category, if it has one.
    pub category_name: Option<String>,
    /// The source guild's role registry, for mention rewriting.
    pub roles: HashMap<RoleId, Role>,
}

/// Service relaying one message into the mirror guild.
pub struct MessageRelay<'a> {
    /// Database connection for mapping lookups
    db: &'a DatabaseConnection,
    /// Discord HTTP client for webhook execution and provisioning
    http: Arc<Http>,
    /// Webhook endpoints created per newly provisioned channel
    webhooks_per_channel: usize,
}

impl<'a> MessageRelay<'a> {
    /// Creates a new MessageRelay instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `http` - Arc-wrapped Discord HTTP client
    /// - `webhooks_per_channel` - Endpoints to create when provisioning
    ///
    /// # Returns
    /// - `MessageRelay` - New relay instance
    pub fn new(db: &'a DatabaseConnection, http: Arc<Http>, webhooks_per_channel: usize) -> Self {
        Self {
            db,
            http,
            webhooks_per_channel,
        }
    }

    /// Relays a message into its channel's mirror.
    ///
    /// Looks up the channel's webhook list; when empty, acquires the channel's
    /// provision lock, re-checks the mapping, and provisions only if it is
    /// still empty, so concurrent first-messages share one provisioning
    /// attempt. The body is then posted to one endpoint chosen at random.
    ///
    /// A source guild without a mirror record is skipped with a warning; the
    /// relay core never writes mirror guild configuration.
    ///
    /// # Arguments
    /// - `locks` - Per-channel provisioning locks
    /// - `guild_id` - The source guild the message came from
    /// - `source` - Channel metadata snapshotted from the cache
    /// - `message` - The inbound message
    ///
    /// # Returns
    /// - `Ok(())` - Message relayed, or skipped because no mirror is configured
    /// - `Err(AppError)` - Mapping lookup, provisioning, formatting, or the send failed
    pub async fn relay_message(
        &self,
        locks: &ProvisionLocks,
        guild_id: u64,
        source: &SourceChannel,
        message: &Message,
    ) -> Result<(), AppError> {
        let mirror_repo = MirrorGuildRepository::new(self.db);

        let Some(mirror) = mirror_repo.find_by_guild_id(&guild_id.to_string()).await? else {
            tracing::warn!("No mirror guild configured for guild {}", guild_id);
            return Ok(());
        };

        let channel_id = message.channel_id.get();
        let webhook_repo = ChannelWebhookRepository::new(self.db);

        let mut urls = webhook_repo
            .get_urls_by_channel_id(&channel_id.to_string())
            .await?;

        if urls.is_empty() {
            let lock = locks.acquire(channel_id).await;
            let _provisioning = lock.lock().await;

            // Another event may have provisioned while we waited on the lock
            urls = webhook_repo
                .get_urls_by_channel_id(&channel_id.to_string())
                .await?;

            if urls.is_empty() {
                let provisioner = ChannelProvisioner::new(self.db, self.http.clone());
                urls = provisioner
                    .provision(ProvisionRequest {
                        mirror_guild_id: parse_u64_from_string(mirror.mirror_guild_id)?,
                        channel_id,
                        channel_name: &source.channel_name,
                        category_name: source.category_name.as_deref(),
                        webhook_count: self.webhooks_per_channel,
                    })
                    .await?;
            }
        }

        let url = urls.choose(&mut rand::rng()).ok_or_else(|| {
            AppError::NotFound(format!("No webhook endpoints for channel {channel_id}"))
        })?;

        let body = format::prepare_message_body(message, &source.roles).await?;

        self.send(url, body).await
    }

    /// Executes one webhook send with every mention class suppressed.
    async fn send(&self, url: &str, body: MessageBody) -> Result<(), AppError> {
        let webhook = Webhook::from_url(&self.http, url).await?;

        let mut execute = ExecuteWebhook::new()
            .username(body.username)
            .avatar_url(body.avatar_url)
            .content(body.content)
            .allowed_mentions(
                CreateAllowedMentions::new()
                    .everyone(false)
                    .all_users(false)
                    .all_roles(false),
            );

        if !body.embeds.is_empty() {
            execute = execute.embeds(body.embeds);
        }
        execute = execute.add_files(body.files);

        webhook.execute(&self.http, false, execute).await?;

        Ok(())
    }
}
