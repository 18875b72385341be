//! Error kinds for busgraph operations

use strum_macros::{Display, IntoStaticStr};

/// The kind of error that occurred.
///
/// This enum categorizes errors to help users write clear error handling logic.
/// Users can match on ErrorKind to decide how to handle specific error cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr, Display)]
#[non_exhaustive]
pub enum ErrorKind {
    // =========================================================================
    // General errors
    // =========================================================================
    /// An unexpected error occurred - catch-all for unhandled cases
    Unexpected,

    /// The requested feature or operation is not supported
    Unsupported,

    /// Invalid argument passed to function
    InvalidArgument,

    // =========================================================================
    // Configuration errors
    // =========================================================================
    /// Invalid configuration or parameters
    ConfigInvalid,

    /// A filter token failed to compile as a regular expression
    PatternInvalid,

    /// Unrecognized graph mode name
    UnknownMode,

    // =========================================================================
    // Graph errors
    // =========================================================================
    /// Snapshot data is malformed or inconsistent
    SnapshotInvalid,

    /// Graph generation failed
    GenerationFailed,

    /// Render backend rejected an operation
    RenderFailed,

    // =========================================================================
    // File/IO errors
    // =========================================================================
    /// File not found
    FileNotFound,

    /// Permission denied
    PermissionDenied,

    /// IO operation failed
    IoFailed,

    // =========================================================================
    // Serialization errors
    // =========================================================================
    /// Serialization failed
    SerializationFailed,

    /// Deserialization failed
    DeserializationFailed,

    /// Invalid format
    InvalidFormat,

    // =========================================================================
    // Validation errors
    // =========================================================================
    /// Assertion failed
    AssertionFailed,

    /// Invariant violation
    InvariantViolation,
}

impl ErrorKind {
    /// Returns the error kind as a static string
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }

    /// Check whether this kind describes bad caller-supplied configuration,
    /// as opposed to an internal or environmental failure.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            ErrorKind::ConfigInvalid | ErrorKind::PatternInvalid | ErrorKind::UnknownMode
        )
    }
}
