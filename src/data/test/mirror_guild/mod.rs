use crate::{
    data::mirror_guild::MirrorGuildRepository, error::AppError,
    model::mirror_guild::UpsertMirrorGuildParam,
};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::builder::TestBuilder;

mod find_by_guild_id;
mod upsert;
