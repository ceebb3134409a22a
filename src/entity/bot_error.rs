#[derive(Debug, thiserror::Error)]
pub enum BotError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Malformed history snapshot: {0}")]
    MalformedState(String),

    #[error("Failed to persist history snapshot: {0}")]
    Persistence(#[from] std::io::Error),

    #[error("Notification delivery failed: {0}")]
    Delivery(String),

    #[error("Missing configuration: {0}")]
    ConfigurationMissing(&'static str),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
