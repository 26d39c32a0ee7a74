use crate::error::{config::ConfigError, AppError};

/// Number of webhooks provisioned per mirrored channel when the environment
/// does not override it.
const DEFAULT_WEBHOOKS_PER_CHANNEL: usize = 1;

pub struct Config {
    pub database_url: String,

    pub discord_bot_token: String,

    /// The single guild whose channels are mirrored. Messages from any other
    /// guild are ignored.
    pub source_guild_id: u64,

    /// How many webhook endpoints to create per mirrored channel. The mapping
    /// format supports any count; relaying picks one at random.
    pub webhooks_per_channel: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let source_guild_id = std::env::var("SOURCE_GUILD_ID")
            .map_err(|_| ConfigError::MissingEnvVar("SOURCE_GUILD_ID".to_string()))?;
        let source_guild_id =
            source_guild_id
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidEnvVar {
                    name: "SOURCE_GUILD_ID".to_string(),
                    value: source_guild_id,
                })?;

        let webhooks_per_channel = match std::env::var("WEBHOOKS_PER_CHANNEL") {
            Ok(value) => value
                .parse::<usize>()
                .ok()
                .filter(|count| *count > 0)
                .ok_or_else(|| ConfigError::InvalidEnvVar {
                    name: "WEBHOOKS_PER_CHANNEL".to_string(),
                    value,
                })?,
            Err(_) => DEFAULT_WEBHOOKS_PER_CHANNEL,
        };

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            discord_bot_token: std::env::var("DISCORD_BOT_TOKEN")
                .map_err(|_| ConfigError::MissingEnvVar("DISCORD_BOT_TOKEN".to_string()))?,
            source_guild_id,
            webhooks_per_channel,
        })
    }
}
