/// Crate-wide result type.
pub type RavenResult<T> = Result<T, RavenError>;

/// Errors surfaced while configuring the transition or picking image files.
#[derive(thiserror::Error, Debug)]
pub enum RavenError {
    /// Input failed validation (config values, image file filter).
    #[error("validation error: {0}")]
    Validation(String),

    /// JSON (de)serialization failed.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Any other error, typically IO with context attached.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RavenError {
    /// Build a [`RavenError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`RavenError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for RavenError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
