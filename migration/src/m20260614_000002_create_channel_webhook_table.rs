use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ChannelWebhook::Table)
                    .if_not_exists()
                    .col(pk_auto(ChannelWebhook::Id))
                    .col(string(ChannelWebhook::ChannelId))
                    .col(integer(ChannelWebhook::Position))
                    .col(string(ChannelWebhook::Url))
                    .col(timestamp(ChannelWebhook::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_channel_webhook_channel_id_position")
                    .table(ChannelWebhook::Table)
                    .col(ChannelWebhook::ChannelId)
                    .col(ChannelWebhook::Position)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_channel_webhook_channel_id_position")
                    .table(ChannelWebhook::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ChannelWebhook::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ChannelWebhook {
    Table,
    Id,
    ChannelId,
    Position,
    Url,
    CreatedAt,
}
