use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Invalid server address: {0}")]
    InvalidServerAddress(String),

    #[error("Invalid interface id: {0}")]
    InvalidInterfaceId(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}
