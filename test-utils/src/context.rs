use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::error::TestError;

/// Holds the in-memory SQLite connection backing one test.
///
/// The connection is opened lazily on first use and lives until the context
/// is dropped, which discards the database with it.
pub struct TestContext {
    /// Connection to the test database, `None` until first accessed.
    pub db: Option<DatabaseConnection>,
}

impl TestContext {
    pub fn new() -> Self {
        Self { db: None }
    }

    /// Returns the database connection, opening it on first call.
    ///
    /// # Returns
    /// - `Ok(&DatabaseConnection)` - Live connection to the test database
    /// - `Err(TestError::Database)` - Opening the in-memory database failed
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        match self.db {
            Some(ref db) => Ok(db),
            None => {
                let db = Database::connect("sqlite::memory:").await?;

                Ok(&*self.db.insert(db))
            }
        }
    }

    /// Executes the given CREATE TABLE statements against the test database.
    ///
    /// Normally reached through `TestBuilder::build` rather than called
    /// directly.
    ///
    /// # Arguments
    /// - `stmts` - Statements to execute, in order
    ///
    /// # Returns
    /// - `Ok(())` - All tables created
    /// - `Err(TestError::Database)` - A statement failed
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(())
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
