//! Channel webhook entity.
//!
//! Ordered webhook endpoint list for a mirrored source channel. The mapping
//! value for a channel is all of its rows ordered by `position`.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "channel_webhook")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Source channel ID (snowflake stored as String).
    pub channel_id: String,
    /// Order of this endpoint within the channel's webhook list.
    pub position: i32,
    /// Webhook URL accepting unauthenticated POSTs into the mirror channel.
    pub url: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
