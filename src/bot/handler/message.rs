use serenity::all::{Context, Message};

use super::Handler;
use crate::service::mirror::relay::{MessageRelay, SourceChannel};

/// Handle message creation in a channel
pub async fn handle_message(handler: &Handler, ctx: Context, message: Message) {
    // Only relay guild messages from the configured source guild (not DMs).
    // No other filtering: bot messages and every channel type pass through.
    if !should_relay(
        message.guild_id.map(|id| id.get()),
        handler.source_guild_id,
    ) {
        return;
    }

    // Snapshot channel metadata and the role registry before the first await;
    // the cache reference cannot be held across one.
    let Some(source) = snapshot_source_channel(&ctx, &message) else {
        tracing::warn!(
            "Channel {} not in the gateway cache, skipping relay",
            message.channel_id
        );
        return;
    };

    let relay = MessageRelay::new(&handler.db, ctx.http.clone(), handler.webhooks_per_channel);

    if let Err(e) = relay
        .relay_message(
            &handler.provision_locks,
            handler.source_guild_id,
            &source,
            &message,
        )
        .await
    {
        tracing::error!(
            "Failed to relay message {} from channel {}: {:?}",
            message.id,
            message.channel_id,
            e
        );
    }
}

/// Whether a message originates from the configured source guild.
fn should_relay(message_guild_id: Option<u64>, source_guild_id: u64) -> bool {
    message_guild_id == Some(source_guild_id)
}

/// Resolves the message's channel name, parent category name, and the guild's
/// role registry from the gateway cache.
fn snapshot_source_channel(ctx: &Context, message: &Message) -> Option<SourceChannel> {
    let guild = ctx.cache.guild(message.guild_id?)?;
    let channel = guild.channels.get(&message.channel_id)?;

    let category_name = channel
        .parent_id
        .and_then(|parent_id| guild.channels.get(&parent_id))
        .map(|category| category.name.clone());

    Some(SourceChannel {
        channel_name: channel.name.clone(),
        category_name,
        roles: guild.roles.clone(),
    })
}
