//! Channel webhook data repository for database operations.
//!
//! This module provides the `ChannelWebhookRepository` for managing the webhook
//! endpoint lists of mirrored channels. Each source channel maps to an ordered
//! list of webhook URLs; the list is written as a whole when a channel is
//! provisioned and read as a whole when relaying.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::model::channel_webhook::ChannelWebhook;

/// Repository providing database operations for channel webhook mappings.
pub struct ChannelWebhookRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ChannelWebhookRepository<'a> {
    /// Creates a new ChannelWebhookRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `ChannelWebhookRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the webhook records for a channel, ordered by position.
    ///
    /// # Arguments
    /// - `channel_id` - Source channel ID as a string slice
    ///
    /// # Returns
    /// - `Ok(Vec<ChannelWebhook>)` - Webhook records, empty if the channel has
    ///   not been provisioned
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_channel_id(&self, channel_id: &str) -> Result<Vec<ChannelWebhook>, DbErr> {
        let entities = entity::prelude::ChannelWebhook::find()
            .filter(entity::channel_webhook::Column::ChannelId.eq(channel_id))
            .order_by_asc(entity::channel_webhook::Column::Position)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(ChannelWebhook::from_entity)
            .collect())
    }

    /// Gets just the webhook URLs for a channel, ordered by position.
    ///
    /// Convenience over `get_by_channel_id` for the relay path, which only
    /// needs the URL list.
    ///
    /// # Arguments
    /// - `channel_id` - Source channel ID as a string slice
    ///
    /// # Returns
    /// - `Ok(Vec<String>)` - Webhook URLs, empty if the channel has not been provisioned
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_urls_by_channel_id(&self, channel_id: &str) -> Result<Vec<String>, DbErr> {
        let webhooks = self.get_by_channel_id(channel_id).await?;

        Ok(webhooks.into_iter().map(|webhook| webhook.url).collect())
    }

    /// Replaces the webhook list for a channel.
    ///
    /// Deletes any existing records for the channel and inserts the provided
    /// URLs in order, making the overwrite idempotent: writing the same list
    /// twice leaves the same mapping.
    ///
    /// # Arguments
    /// - `channel_id` - Source channel ID as a string slice
    /// - `urls` - Webhook URLs in position order
    ///
    /// # Returns
    /// - `Ok(Vec<ChannelWebhook>)` - The stored webhook records in position order
    /// - `Err(DbErr)` - Database error during delete or insert
    pub async fn set_webhooks(
        &self,
        channel_id: &str,
        urls: &[String],
    ) -> Result<Vec<ChannelWebhook>, DbErr> {
        entity::prelude::ChannelWebhook::delete_many()
            .filter(entity::channel_webhook::Column::ChannelId.eq(channel_id))
            .exec(self.db)
            .await?;

        let now = Utc::now();
        let mut webhooks = Vec::with_capacity(urls.len());

        for (position, url) in urls.iter().enumerate() {
            let entity = entity::channel_webhook::ActiveModel {
                id: ActiveValue::NotSet,
                channel_id: ActiveValue::Set(channel_id.to_string()),
                position: ActiveValue::Set(position as i32),
                url: ActiveValue::Set(url.clone()),
                created_at: ActiveValue::Set(now),
            }
            .insert(self.db)
            .await?;

            webhooks.push(ChannelWebhook::from_entity(entity));
        }

        Ok(webhooks)
    }
}
