use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MirrorGuild::Table)
                    .if_not_exists()
                    .col(pk_auto(MirrorGuild::Id))
                    .col(string(MirrorGuild::GuildId))
                    .col(string(MirrorGuild::MirrorGuildId))
                    .col(timestamp(MirrorGuild::CreatedAt))
                    .col(timestamp(MirrorGuild::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        // One mirror configuration per source guild
        manager
            .create_index(
                Index::create()
                    .name("idx_mirror_guild_guild_id")
                    .table(MirrorGuild::Table)
                    .col(MirrorGuild::GuildId)
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
                    .name("idx_mirror_guild_guild_id")
                    .table(MirrorGuild::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(MirrorGuild::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum MirrorGuild {
    Table,
    Id,
    GuildId,
    MirrorGuildId,
    CreatedAt,
    UpdatedAt,
}
