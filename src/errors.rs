use thiserror::Error;

/// Application-wide error type - single point of truth
#[derive(Error, Debug)]
pub enum AppError {
    /// Signer inspection failures (invalid input, resolver failure)
    #[error("Inspection error: {0}")]
    Inspect(#[from] InspectError),

    /// Horizon account lookups
    #[error("Horizon error: {0}")]
    Resolve(#[from] ResolveError),

    /// File I/O operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration issues
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data validation/parsing
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Errors raised while composing or querying a signature schema
#[derive(Error, Debug)]
pub enum InspectError {
    /// Identifier is not a valid ed25519 account public key
    #[error("{id} is not a valid account public key")]
    InvalidAccountId { id: String },

    /// Empty or otherwise unusable extra signer key
    #[error("\"{key}\" is not a valid signer key")]
    InvalidSignerKey { key: String },

    /// Threshold level name outside of low/med/high
    #[error("\"{level}\" is not a valid threshold. Expected one of 'low', 'med' or 'high'")]
    InvalidThresholdLevel { level: String },

    /// Threshold argument that is neither a level name nor a number
    #[error("Invalid threshold level: \"{value}\"")]
    InvalidThreshold { value: String },

    /// Account-mode query on a transaction schema or the other way round
    #[error("Query expects a {expected} schema, got a {actual} schema")]
    SchemaKindMismatch {
        expected: &'static str,
        actual: &'static str,
    },

    /// Account state could not be loaded
    #[error("Failed to load account {id}: {source}")]
    Resolve {
        id: String,
        #[source]
        source: ResolveError,
    },
}

/// Account resolution error types
#[derive(Error, Debug)]
pub enum ResolveError {
    /// Account does not exist on the ledger (HTTP 404)
    #[error("Account not found: {id}")]
    NotFound { id: String },

    /// Failed to reach the Horizon server
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request reached the server but failed (non-404 status, transport error)
    #[error("Request failed: {url} - {message}")]
    RequestFailed { url: String, message: String },

    /// Failed to deserialise the account record
    #[error("Deserialisation failed: {0}")]
    DeserialisationFailed(String),

    /// Retry limit exceeded
    #[error("Max retries exceeded: {operation}")]
    MaxRetriesExceeded { operation: String },

    /// Request timed out on every attempt
    #[error("Request timeout: {timeout_seconds}s for {operation}")]
    Timeout {
        timeout_seconds: u64,
        operation: String,
    },
}

impl ResolveError {
    /// True for the "account does not exist" signal
    pub fn is_not_found(&self) -> bool {
        matches!(self, ResolveError::NotFound { .. })
    }
}

/// Application-wide result type - single point of truth
pub type AppResult<T> = Result<T, AppError>;

/// Result type for schema composition and queries
pub type InspectResult<T> = Result<T, InspectError>;

/// Result type for account resolution
pub type ResolveResult<T> = Result<T, ResolveError>;

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InvalidData(format!("JSON error: {}", err))
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}
