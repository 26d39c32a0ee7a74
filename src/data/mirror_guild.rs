//! Mirror guild data repository for database operations.
//!
//! This module provides the `MirrorGuildRepository` for managing mirror guild
//! records in the database. A mirror guild record associates a source guild with
//! the destination guild its channels are mirrored into. The relay path only
//! reads these records; upserts happen when a mirror is configured.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
};

use crate::model::mirror_guild::{MirrorGuild, UpsertMirrorGuildParam};

/// Repository providing database operations for mirror guild configuration.
pub struct MirrorGuildRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MirrorGuildRepository<'a> {
    /// Creates a new MirrorGuildRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `MirrorGuildRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the mirror configuration for a source guild.
    ///
    /// # Arguments
    /// - `guild_id` - Source guild ID as a string slice
    ///
    /// # Returns
    /// - `Ok(Some(MirrorGuild))` - Mirror record found for the guild
    /// - `Ok(None)` - No mirror is configured for this guild
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_guild_id(&self, guild_id: &str) -> Result<Option<MirrorGuild>, DbErr> {
        let entity = entity::prelude::MirrorGuild::find()
            .filter(entity::mirror_guild::Column::GuildId.eq(guild_id))
            .one(self.db)
            .await?;

        Ok(entity.map(MirrorGuild::from_entity))
    }

    /// Creates or updates the mirror configuration for a source guild.
    ///
    /// Performs an upsert operation: if a record already exists for the guild,
    /// updates the destination guild and the `updated_at` timestamp; otherwise,
    /// creates a new record.
    ///
    /// # Arguments
    /// - `param` - Upsert parameters containing guild_id and mirror_guild_id
    ///
    /// # Returns
    /// - `Ok(MirrorGuild)` - The created or updated mirror guild record
    /// - `Err(DbErr)` - Database error during upsert operation
    pub async fn upsert(&self, param: UpsertMirrorGuildParam) -> Result<MirrorGuild, DbErr> {
        let existing = self.find_by_guild_id(&param.guild_id).await?;

        let now = Utc::now();

        let entity = if let Some(existing) = existing {
            let active = entity::mirror_guild::ActiveModel {
                id: ActiveValue::Set(existing.id),
                guild_id: ActiveValue::Set(existing.guild_id),
                mirror_guild_id: ActiveValue::Set(param.mirror_guild_id),
                created_at: ActiveValue::Set(existing.created_at),
                updated_at: ActiveValue::Set(now),
            };
            active.update(self.db).await?
        } else {
            let new_record = entity::mirror_guild::ActiveModel {
                id: ActiveValue::NotSet,
                guild_id: ActiveValue::Set(param.guild_id),
                mirror_guild_id: ActiveValue::Set(param.mirror_guild_id),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
            };
            new_record.insert(self.db).await?
        };

        Ok(MirrorGuild::from_entity(entity))
    }
}
