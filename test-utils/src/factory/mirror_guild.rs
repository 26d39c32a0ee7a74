//! Mirror guild factory for creating test mirror configuration entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test mirror guild records with customizable fields.
///
/// Provides a builder pattern for creating mirror guild entities with default
/// values that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::mirror_guild::MirrorGuildFactory;
///
/// let mirror = MirrorGuildFactory::new(&db)
///     .guild_id("987654321")
///     .mirror_guild_id("123456789")
///     .build()
///     .await?;
/// ```
pub struct MirrorGuildFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    mirror_guild_id: String,
}

impl<'a> MirrorGuildFactory<'a> {
    /// Creates a new MirrorGuildFactory with default values.
    ///
    /// Defaults: unique auto-incremented ids for both the source and the
    /// mirror guild.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `MirrorGuildFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            guild_id: id.to_string(),
            mirror_guild_id: (id + 1_000_000).to_string(),
        }
    }

    /// Sets the source guild ID.
    pub fn guild_id(mut self, guild_id: impl Into<String>) -> Self {
        self.guild_id = guild_id.into();
        self
    }

    /// Sets the destination mirror guild ID.
    pub fn mirror_guild_id(mut self, mirror_guild_id: impl Into<String>) -> Self {
        self.mirror_guild_id = mirror_guild_id.into();
        self
    }

    /// Builds and inserts the mirror guild entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::mirror_guild::Model)` - Created mirror guild entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::mirror_guild::Model, DbErr> {
        let now = Utc::now();
        entity::mirror_guild::ActiveModel {
            id: ActiveValue::NotSet,
            guild_id: ActiveValue::Set(self.guild_id),
            mirror_guild_id: ActiveValue::Set(self.mirror_guild_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a mirror guild record with default values.
///
/// Shorthand for `MirrorGuildFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::mirror_guild::Model)` - Created mirror guild entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_mirror_guild(
    db: &DatabaseConnection,
) -> Result<entity::mirror_guild::Model, DbErr> {
    MirrorGuildFactory::new(db).build().await
}
