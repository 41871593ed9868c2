use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum ActivityError {
    /// The origin reported that the requested user does not exist
    #[error("User Not Found: {0}")]
    UserNotFound(String),

    /// Network/connectivity issues reaching the origin
    #[error("Network Error: {0}")]
    NetworkError(String),

    /// Cache/Redis errors, including a failed write after a successful fetch
    #[error("Cache Error: {0}")]
    CacheError(String),

    /// Parsing errors for the event feed body
    #[error("Parse Error: {0}")]
    ParseError(String),

    /// Configuration errors
    #[error("Config Error: {0}")]
    ConfigError(String),
}

impl From<serde_json::Error> for ActivityError {
    fn from(err: serde_json::Error) -> Self {
        ActivityError::ParseError(format!("JSON deserialization error: {}", err))
    }
}

impl From<reqwest::Error> for ActivityError {
    fn from(err: reqwest::Error) -> Self {
        ActivityError::NetworkError(format!("HTTP request error: {}", err))
    }
}

impl From<redis::RedisError> for ActivityError {
    fn from(err: redis::RedisError) -> Self {
        ActivityError::CacheError(format!("Redis error: {}", err))
    }
}

impl From<anyhow::Error> for ActivityError {
    fn from(err: anyhow::Error) -> Self {
        ActivityError::ConfigError(format!("{}", err))
    }
}

impl ActivityError {
    /// True for failures caused by the request itself rather than the
    /// infrastructure around it. None of these are retried either way.
    pub fn is_terminal_input(&self) -> bool {
        matches!(
            self,
            ActivityError::UserNotFound(_) | ActivityError::ConfigError(_)
        )
    }
}

// Convenience type alias
pub type Result<T> = std::result::Result<T, ActivityError>;
