//! Error types for cosmodex.
//!
//! The shaping engine itself has no recoverable-error taxonomy: malformed
//! search fragments degrade to permissive matches, missing options mean
//! "no constraint", and progress percentages are guarded against zero
//! totals. The only engine-level failures are caller contract violations,
//! surfaced as [`CosmodexError::Precondition`]. Everything else here
//! belongs to the collaborators (snapshot loading, config parsing).

use std::path::PathBuf;

/// Error type for the application.
#[derive(Debug, thiserror::Error)]
pub enum CosmodexError {
    /// Caller contract violation, e.g. a serial sort against a
    /// catalog-only snapshot or a group direction without a group key.
    /// Never silently "fixed" by guessing intent.
    #[error("precondition violated: {0}")]
    Precondition(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Snapshot JSON that does not match the expected objekt shape.
    #[error("failed to parse snapshot {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias.
pub type Result<T> = std::result::Result<T, CosmodexError>;

impl CosmodexError {
    pub fn precondition(message: impl Into<String>) -> Self {
        CosmodexError::Precondition(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precondition_message_is_preserved() {
        let err = CosmodexError::precondition("serial sort requires owned objekts");
        assert_eq!(
            err.to_string(),
            "precondition violated: serial sort requires owned objekts"
        );
    }
}
