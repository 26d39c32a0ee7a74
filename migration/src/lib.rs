pub use sea_orm_migration::prelude::*;

mod m20260614_000001_create_mirror_guild_table;
mod m20260614_000002_create_channel_webhook_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260614_000001_create_mirror_guild_table::Migration),
            Box::new(m20260614_000002_create_channel_webhook_table::Migration),
        ]
    }
}
