//! First-sight channel provisioning.
//!
//! When a source channel has no stored webhook mapping, the provisioner
//! mirrors it into the destination guild: the source channel's category is
//! looked up by name among the mirror guild's existing categories (created if
//! absent), a new text channel is created under it, webhook endpoint(s) are
//! created on that channel, and the resulting URL list is persisted keyed by
//! the source channel id.

use std::sync::Arc;

use sea_orm::DatabaseConnection;
use serenity::all::{ChannelId, ChannelType, CreateChannel, CreateWebhook, GuildId};
use serenity::http::Http;

use crate::{data::channel_webhook::ChannelWebhookRepository, error::AppError};

/// What to mirror and where.
pub struct ProvisionRequest<'a> {
    /// Destination guild the channel is mirrored into.
    pub mirror_guild_id: u64,
    /// Source channel ID the mapping is keyed by.
    pub channel_id: u64,
    /// Source channel name, reused for the mirror channel.
    pub channel_name: &'a str,
    /// Source category name; `None` creates the mirror channel at the guild root.
    pub category_name: Option<&'a str>,
    /// Number of webhook endpoints to create on the mirror channel.
    pub webhook_count: usize,
}

/// Service creating mirror-side channels and webhooks for newly seen source
/// channels.
pub struct ChannelProvisioner<'a> {
    /// Database connection for persisting the webhook mapping
    db: &'a DatabaseConnection,
    /// Discord HTTP client for mirror guild API calls
    http: Arc<Http>,
}

impl<'a> ChannelProvisioner<'a> {
    /// Creates a new ChannelProvisioner instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `http` - Arc-wrapped Discord HTTP client for API requests
    ///
    /// # Returns
    /// - `ChannelProvisioner` - New provisioner instance
    pub fn new(db: &'a DatabaseConnection, http: Arc<Http>) -> Self {
        Self { db, http }
    }

    /// Mirrors a source channel into the destination guild.
    ///
    /// Ensures a category named after the source channel's category exists in
    /// the mirror guild, always creates a fresh text channel named after the
    /// source channel (no dedup against same-named mirror channels), creates
    /// the requested number of webhooks on it, and stores the URL list for
    /// the source channel id.
    ///
    /// # Arguments
    /// - `request` - Source channel details and the destination guild
    ///
    /// # Returns
    /// - `Ok(Vec<String>)` - The created webhook URLs in position order
    /// - `Err(AppError::DiscordErr)` - Category, channel, or webhook creation failed
    /// - `Err(AppError::DbErr)` - Persisting the mapping failed
    pub async fn provision(&self, request: ProvisionRequest<'_>) -> Result<Vec<String>, AppError> {
        tracing::info!(
            "Detected new channel {} ({})",
            request.channel_name,
            request.channel_id
        );

        let mirror_guild = GuildId::new(request.mirror_guild_id);

        let mut builder = CreateChannel::new(request.channel_name).kind(ChannelType::Text);
        if let Some(category_name) = request.category_name {
            let category_id = self
                .ensure_category(mirror_guild, category_name)
                .await?;
            builder = builder.category(category_id);
        }

        let channel = mirror_guild.create_channel(&self.http, builder).await?;

        let mut urls = Vec::with_capacity(request.webhook_count);
        for index in 0..request.webhook_count {
            let webhook = channel
                .create_webhook(
                    &self.http,
                    CreateWebhook::new(format!("Webhook {} {}", channel.name, index)),
                )
                .await?;
            urls.push(webhook.url()?);
        }

        let repo = ChannelWebhookRepository::new(self.db);
        repo.set_webhooks(&request.channel_id.to_string(), &urls)
            .await?;

        tracing::info!(
            "Added {} webhook(s) for channel {} ({}):\n{}",
            urls.len(),
            request.channel_name,
            request.channel_id,
            urls.join("\n")
        );

        Ok(urls)
    }

    /// Finds the mirror guild's category with the given name, creating it if
    /// none exists.
    async fn ensure_category(
        &self,
        mirror_guild: GuildId,
        category_name: &str,
    ) -> Result<ChannelId, AppError> {
        let channels = mirror_guild.channels(&self.http).await?;

        if let Some(category) = channels
            .values()
            .find(|channel| channel.kind == ChannelType::Category && channel.name == category_name)
        {
            return Ok(category.id);
        }

        let category = mirror_guild
            .create_channel(
                &self.http,
                CreateChannel::new(category_name).kind(ChannelType::Category),
            )
            .await?;

        Ok(category.id)
    }
}
