use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Fluent builder assembling a [`TestContext`] with the tables a test needs.
///
/// Each `with_table` call records a CREATE TABLE statement derived from a
/// SeaORM entity; `build` connects to a fresh in-memory SQLite database and
/// executes them in order.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{ChannelWebhook, MirrorGuild};
///
/// let test = TestBuilder::new()
///     .with_table(MirrorGuild)
///     .with_table(ChannelWebhook)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements queued for execution during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Queues a table derived from the given entity's schema.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity to derive the CREATE TABLE statement from
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Queues both tables the relay path touches: `MirrorGuild` and
    /// `ChannelWebhook`.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_mirror_tables(self) -> Self {
        self.with_table(MirrorGuild).with_table(ChannelWebhook)
    }

    /// Connects to a fresh in-memory database and creates the queued tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Database connected with all tables created
    /// - `Err(TestError::Database)` - Connection or table creation failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
