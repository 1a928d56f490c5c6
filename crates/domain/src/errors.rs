use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Invalid CIDR format: {0}")]
    InvalidCidr(String),

    #[error("Invalid SELECT record: {0}")]
    InvalidSelectRecord(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<crate::config::ConfigError> for DomainError {
    fn from(err: crate::config::ConfigError) -> Self {
        DomainError::ConfigError(err.to_string())
    }
}
