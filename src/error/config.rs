use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required environment variable is not set.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// An environment variable is set but its value does not parse, such as
    /// a non-numeric guild id or a zero webhook count.
    #[error("Invalid value for environment variable {name}: '{value}'")]
    InvalidEnvVar {
        /// Name of the environment variable
        name: String,
        /// The value that failed to parse
        value: String,
    },
}
