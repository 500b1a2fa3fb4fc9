use thiserror::Error;

/// Every failure the client surfaces is classified into exactly one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// Endpoint or store configuration is unusable. Fatal at startup.
    #[error("configuration error: {0}")]
    Configuration(String),
    /// User input rejected before any network call.
    #[error("{0}")]
    Validation(String),
    /// The scraping service rejected the request or could not be reached.
    #[error("{0}")]
    RemoteService(String),
    /// The record store could not be read.
    #[error("{0}")]
    Store(String),
}

impl ClientError {
    /// The human-readable message without the kind prefix.
    pub fn message(&self) -> &str {
        match self {
            ClientError::Configuration(msg)
            | ClientError::Validation(msg)
            | ClientError::RemoteService(msg)
            | ClientError::Store(msg) => msg,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ClientError::Configuration(_) => "configuration",
            ClientError::Validation(_) => "validation",
            ClientError::RemoteService(_) => "remote_service",
            ClientError::Store(_) => "store",
        }
    }
}
