//! Error types for ConfigScout.
//!
//! Library crates use [`ConfigScoutError`] via `thiserror`.
//! App crates (cli) wrap this with `color-eyre` for rich diagnostics.
//!
//! Note that probe failures are deliberately *not* represented here: the
//! file-provider boundary normalizes transport and content errors to an
//! absent result, so they never surface as errors to the inference engine.

use std::path::PathBuf;

/// Top-level error type for all ConfigScout operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigScoutError {
    /// Configuration loading or validation error.
    #[error("config error: {message}")]
    Config { message: String },

    /// File-provider construction or usage error (bad root, etc.).
    #[error("provider error: {0}")]
    Provider(String),

    /// Manifest parsing error inside a detector rule (malformed package.json
    /// and the like). Caught per-rule by the engine, never propagated.
    #[error("parse error: {message}")]
    Parse { message: String },

    /// Filesystem I/O error.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, ConfigScoutError>;

impl ConfigScoutError {
    /// Create a config error from any displayable message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Create a parse error from any displayable message.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse {
            message: msg.into(),
        }
    }

    /// Wrap a `std::io::Error` with a path for context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_formatting() {
        let err = ConfigScoutError::config("missing home directory");
        assert_eq!(err.to_string(), "config error: missing home directory");

        let err = ConfigScoutError::parse("package.json: expected object");
        assert!(err.to_string().contains("package.json"));
    }
}
