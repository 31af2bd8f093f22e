/// Convenience result type used across genart.
pub type GenartResult<T> = Result<T, GenartError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Rendering itself never fails past the session boundary; these variants cover parameter
/// validation, (de)serialization, and collaborators that perform external I/O.
#[derive(thiserror::Error, Debug)]
pub enum GenartError {
    /// Invalid user-provided parameters or misuse of a session.
    #[error("validation error: {0}")]
    Validation(String),

    /// Surface allocation or encoding failures.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Failures reported by an external collaborator (share backend, clipboard, filesystem).
    #[error("external error: {0}")]
    External(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GenartError {
    /// Build a [`GenartError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`GenartError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`GenartError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Build a [`GenartError::External`] value.
    pub fn external(msg: impl Into<String>) -> Self {
        Self::External(msg.into())
    }
}

impl From<serde_json::Error> for GenartError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serde(e.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
