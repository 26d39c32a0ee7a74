//! Domain models for mirror guild configuration.

use chrono::{DateTime, Utc};

/// Mirror configuration for a source guild.
///
/// Records which destination guild a source guild's channels are mirrored
/// into. One record exists per configured source guild; the relay only reads
/// it, operators seed and update it.
#[derive(Debug, Clone, PartialEq)]
pub struct MirrorGuild {
    /// Unique identifier for the mirror guild record.
    pub id: i32,
    /// Source guild ID (stored as String).
    pub guild_id: String,
    /// Destination guild ID channels are mirrored into (stored as String).
    pub mirror_guild_id: String,
    /// Timestamp when the record was created.
    pub created_at: DateTime<Utc>,
    /// Timestamp when the record was last updated.
    pub updated_at: DateTime<Utc>,
}

impl MirrorGuild {
    /// Converts an entity model to a mirror guild domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `MirrorGuild` - The converted mirror guild domain model
    pub fn from_entity(entity: entity::mirror_guild::Model) -> Self {
        Self {
            id: entity.id,
            guild_id: entity.guild_id,
            mirror_guild_id: entity.mirror_guild_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Parameters for upserting a mirror guild record.
///
/// Creates a new record if none exists for the source guild, or updates the
/// existing record with the new destination guild.
#[derive(Debug, Clone)]
pub struct UpsertMirrorGuildParam {
    /// Source guild ID.
    pub guild_id: String,
    /// Destination guild ID channels are mirrored into.
    pub mirror_guild_id: String,
}
