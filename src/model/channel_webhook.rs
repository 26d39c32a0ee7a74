//! Domain models for channel webhook mappings.

use chrono::{DateTime, Utc};

/// One webhook endpoint of a mirrored channel's mapping.
///
/// A channel's full mapping is all of its records ordered by `position`;
/// relaying picks one endpoint uniformly at random.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelWebhook {
    /// Unique identifier for the webhook record.
    pub id: i32,
    /// Source channel ID (stored as String).
    pub channel_id: String,
    /// Order of this endpoint within the channel's webhook list.
    pub position: i32,
    /// Webhook URL for posting into the mirror channel.
    pub url: String,
    /// Timestamp when the record was created.
    pub created_at: DateTime<Utc>,
}

impl ChannelWebhook {
    /// Converts an entity model to a channel webhook domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `ChannelWebhook` - The converted channel webhook domain model
    pub fn from_entity(entity: entity::channel_webhook::Model) -> Self {
        Self {
            id: entity.id,
            channel_id: entity.channel_id,
            position: entity.position,
            url: entity.url,
            created_at: entity.created_at,
        }
    }
}
