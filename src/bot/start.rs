use sea_orm::DatabaseConnection;
use serenity::all::{Client, GatewayIntents};

use crate::bot::handler::Handler;
use crate::config::Config;
use crate::error::AppError;

/// Builds the Discord client and runs it until shutdown.
///
/// # Arguments
/// - `config` - Application configuration
/// - `db` - Database connection shared with the event handler
///
/// # Returns
/// - `Ok(())` - The client ran and shut down cleanly
/// - `Err(AppError)` - Client construction or the gateway connection failed
pub async fn start_bot(config: &Config, db: DatabaseConnection) -> Result<(), AppError> {
    // MESSAGE_CONTENT is privileged; without it enabled in the developer
    // portal every message arrives with empty content
    let intents =
        GatewayIntents::GUILDS | GatewayIntents::GUILD_MESSAGES | GatewayIntents::MESSAGE_CONTENT;

    let handler = Handler::new(db, config);

    let mut client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(handler)
        .await?;

    tracing::info!("Starting Discord bot...");

    // Blocks until the gateway connection ends
    client.start().await?;

    Ok(())
}
