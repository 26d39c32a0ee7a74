//! Channel webhook factory for creating test webhook mapping entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test channel webhook records with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::channel_webhook::ChannelWebhookFactory;
///
/// let webhook = ChannelWebhookFactory::new(&db)
///     .channel_id("123456789")
///     .position(1)
///     .url("https://discord.com/api/webhooks/1/token")
///     .build()
///     .await?;
/// ```
pub struct ChannelWebhookFactory<'a> {
    db: &'a DatabaseConnection,
    channel_id: String,
    position: i32,
    url: String,
}

impl<'a> ChannelWebhookFactory<'a> {
    /// Creates a new ChannelWebhookFactory with default values.
    ///
    /// Defaults: unique auto-incremented channel id, position 0, and a
    /// webhook URL derived from the channel id.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `ChannelWebhookFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            channel_id: id.to_string(),
            position: 0,
            url: format!("https://discord.com/api/webhooks/{id}/token{id}"),
        }
    }

    /// Sets the source channel ID.
    pub fn channel_id(mut self, channel_id: impl Into<String>) -> Self {
        self.channel_id = channel_id.into();
        self
    }

    /// Sets the position within the channel's webhook list.
    pub fn position(mut self, position: i32) -> Self {
        self.position = position;
        self
    }

    /// Sets the webhook URL.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Builds and inserts the channel webhook entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::channel_webhook::Model)` - Created channel webhook entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::channel_webhook::Model, DbErr> {
        entity::channel_webhook::ActiveModel {
            id: ActiveValue::NotSet,
            channel_id: ActiveValue::Set(self.channel_id),
            position: ActiveValue::Set(self.position),
            url: ActiveValue::Set(self.url),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a channel webhook record with default values.
///
/// Shorthand for `ChannelWebhookFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::channel_webhook::Model)` - Created channel webhook entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_channel_webhook(
    db: &DatabaseConnection,
) -> Result<entity::channel_webhook::Model, DbErr> {
    ChannelWebhookFactory::new(db).build().await
}
