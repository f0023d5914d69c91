use thiserror::Error;

/// Unified error type for changelog generation
#[derive(Error, Debug)]
pub enum ChangelogError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Malformed commit line: '{line}'")]
    MalformedCommit { line: String },

    #[error("Package metadata error: {0}")]
    Metadata(String),

    #[error("External command failed: {0}")]
    Command(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results in debchangelog
pub type Result<T> = std::result::Result<T, ChangelogError>;

impl ChangelogError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ChangelogError::Config(msg.into())
    }

    /// Create a malformed commit error for the offending log line
    pub fn malformed(line: impl Into<String>) -> Self {
        ChangelogError::MalformedCommit { line: line.into() }
    }

    /// Create a metadata error with context
    pub fn metadata(msg: impl Into<String>) -> Self {
        ChangelogError::Metadata(msg.into())
    }

    /// Create a command error with context
    pub fn command(msg: impl Into<String>) -> Self {
        ChangelogError::Command(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ChangelogError::config("missing maintainer");
        assert_eq!(err.to_string(), "Configuration error: missing maintainer");
    }

    #[test]
    fn test_malformed_commit_includes_line() {
        let err = ChangelogError::malformed("abc1 fix:");
        assert_eq!(err.to_string(), "Malformed commit line: 'abc1 fix:'");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: ChangelogError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: ChangelogError = json_err.into();
        assert!(err.to_string().starts_with("JSON parsing error"));
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (ChangelogError::config("x"), "Configuration error"),
            (ChangelogError::metadata("x"), "Package metadata error"),
            (ChangelogError::command("x"), "External command failed"),
            (ChangelogError::malformed("x"), "Malformed commit line"),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }
}
