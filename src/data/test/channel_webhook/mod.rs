use crate::{data::channel_webhook::ChannelWebhookRepository, error::AppError};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::builder::TestBuilder;
use test_utils::factory::channel_webhook::ChannelWebhookFactory;

mod get_by_channel_id;
mod set_webhooks;
