use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::{config::Config, error::AppError};

/// Opens the SQLite database and brings its schema up to date.
///
/// Every pending SeaORM migration runs right after connecting; the bot must
/// not start consuming gateway events before this completes.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Ready connection with the schema migrated
/// - `Err(AppError)` - Connection or migration failure
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    let mut options = ConnectOptions::new(&config.database_url);
    options.sqlx_logging(false);

    let db = Database::connect(options).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}
