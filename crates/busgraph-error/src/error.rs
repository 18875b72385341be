//! The main Error type for busgraph.

use crate::ErrorKind;
use std::fmt;

/// Unified error type for all busgraph operations.
pub struct Error {
    kind: ErrorKind,
    message: String,
    operation: &'static str,
    context: Vec<(&'static str, String)>,
    source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
}

impl Error {
    /// Create a new error with the given kind and message.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            operation: "",
            context: Vec::new(),
            source: None,
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the operation that caused this error
    pub fn operation(&self) -> &'static str {
        self.operation
    }

    /// Get the context key-value pairs
    pub fn context(&self) -> &[(&'static str, String)] {
        &self.context
    }

    /// Get the source error (if any).
    pub fn source_ref(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        self.source.as_ref().map(|e| e.as_ref())
    }

    /// Set the operation that caused this error.
    ///
    /// If an operation was already set, the previous one is moved to context
    /// as "called" to preserve the call chain.
    pub fn with_operation(mut self, operation: &'static str) -> Self {
        if !self.operation.is_empty() {
            self.context.push(("called", self.operation.to_string()));
        }
        self.operation = operation;
        self
    }

    /// Add context to the error
    pub fn with_context(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.context.push((key, value.into()));
        self
    }

    /// Set the source error.
    ///
    /// # Panics (debug only)
    /// Panics in debug mode if source was already set.
    pub fn set_source<E>(mut self, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        debug_assert!(self.source.is_none(), "source error already set");
        self.source = Some(Box::new(source));
        self
    }

    /// Check whether this error was caused by bad caller configuration.
    pub fn is_configuration(&self) -> bool {
        self.kind.is_configuration()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.kind, self.operation)?;

        if !self.context.is_empty() {
            write!(f, ", context {{ ")?;
            for (i, (key, value)) in self.context.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}: {}", key, value)?;
            }
            write!(f, " }}")?;
        }

        if !self.message.is_empty() {
            write!(f, " => {}", self.message)?;
        }

        Ok(())
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} at {}", self.kind, self.operation)?;

        if !self.message.is_empty() {
            writeln!(f)?;
            writeln!(f, "    Message: {}", self.message)?;
        }

        if !self.context.is_empty() {
            writeln!(f)?;
            writeln!(f, "    Context:")?;
            for (key, value) in &self.context {
                writeln!(f, "        {}: {}", key, value)?;
            }
        }

        if let Some(source) = &self.source {
            writeln!(f)?;
            writeln!(f, "    Source: {:?}", source)?;
        }

        Ok(())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        let kind = match err.kind() {
            std::io::ErrorKind::NotFound => ErrorKind::FileNotFound,
            std::io::ErrorKind::PermissionDenied => ErrorKind::PermissionDenied,
            _ => ErrorKind::IoFailed,
        };
        Error::new(kind, err.to_string())
            .with_operation("io")
            .set_source(err)
    }
}

impl From<String> for Error {
    fn from(msg: String) -> Self {
        Error::new(ErrorKind::Unexpected, msg)
    }
}

impl From<&str> for Error {
    fn from(msg: &str) -> Self {
        Error::new(ErrorKind::Unexpected, msg)
    }
}

impl Error {
    /// Create an Unexpected error.
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unexpected, message)
    }

    /// Create an Unsupported error
    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unsupported, message)
    }

    /// Create an InvalidArgument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument, message)
    }

    /// Create a ConfigInvalid error
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ConfigInvalid, message)
    }

    /// Create a PatternInvalid error
    pub fn pattern_invalid(pattern: impl Into<String>) -> Self {
        let pattern = pattern.into();
        Self::new(
            ErrorKind::PatternInvalid,
            format!("filter pattern '{}' is not a valid regex", pattern),
        )
        .with_context("pattern", pattern)
    }

    /// Create an UnknownMode error
    pub fn unknown_mode(mode: impl Into<String>) -> Self {
        let mode = mode.into();
        Self::new(
            ErrorKind::UnknownMode,
            format!("graph mode '{}' is not recognized", mode),
        )
        .with_context("mode", mode)
    }

    /// Create a SnapshotInvalid error
    pub fn snapshot_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::SnapshotInvalid, message)
    }

    /// Create a FileNotFound error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        let path = path.into();
        Self::new(
            ErrorKind::FileNotFound,
            format!("file '{}' not found", path),
        )
        .with_context("path", path)
    }

    /// Create an AssertionFailed error
    pub fn assertion_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::AssertionFailed, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = Error::new(ErrorKind::PatternInvalid, "unclosed group");
        assert_eq!(err.kind(), ErrorKind::PatternInvalid);
        assert_eq!(err.message(), "unclosed group");
    }

    #[test]
    fn test_error_with_context() {
        let err = Error::new(ErrorKind::PatternInvalid, "unclosed group")
            .with_operation("filter::parse")
            .with_context("pattern", "/sensors/(")
            .with_context("position", "9");

        assert_eq!(err.operation(), "filter::parse");
        assert_eq!(err.context().len(), 2);
        assert_eq!(err.context()[0], ("pattern", "/sensors/(".to_string()));
    }

    #[test]
    fn test_operation_chaining() {
        let err = Error::new(ErrorKind::ConfigInvalid, "failed")
            .with_operation("filter::parse")
            .with_operation("generator::generate");

        assert_eq!(err.operation(), "generator::generate");
        assert_eq!(err.context().len(), 1);
        assert_eq!(err.context()[0], ("called", "filter::parse".to_string()));
    }

    #[test]
    fn test_display() {
        let err = Error::new(ErrorKind::PatternInvalid, "unclosed group")
            .with_operation("filter::parse")
            .with_context("pattern", "/sensors/(");

        let display = format!("{}", err);
        assert!(display.contains("PatternInvalid"));
        assert!(display.contains("filter::parse"));
        assert!(display.contains("pattern: /sensors/("));
    }

    #[test]
    fn test_convenience_constructors() {
        let err = Error::pattern_invalid("/sensors/(");
        assert_eq!(err.kind(), ErrorKind::PatternInvalid);
        assert!(err.message().contains("/sensors/("));
        assert!(err.is_configuration());

        let err = Error::unknown_mode("node_everything");
        assert_eq!(err.kind(), ErrorKind::UnknownMode);

        let err = Error::file_not_found("graph.json");
        assert_eq!(err.kind(), ErrorKind::FileNotFound);
        assert!(!err.is_configuration());
    }

    #[test]
    fn test_set_source() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = Error::new(ErrorKind::FileNotFound, "graph.json not found").set_source(io_err);

        assert!(err.source_ref().is_some());
    }
}
