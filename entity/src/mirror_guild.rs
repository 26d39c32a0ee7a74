//! Mirror guild entity.
//!
//! One row per configured source guild, recording which guild its channels
//! are mirrored into.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "mirror_guild")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Source guild ID (snowflake stored as String).
    pub guild_id: String,
    /// Destination guild ID the source guild's channels are mirrored into.
    pub mirror_guild_id: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
