//! # busgraph-error
//!
//! Unified error handling for busgraph.
//!
//! ## Design Philosophy
//!
//! - **ErrorKind**: Know what error occurred (e.g., PatternInvalid, UnknownMode)
//! - **Error Context**: Assist in locating the cause with rich context
//! - **Error Source**: Wrap underlying errors without leaking raw types
//!
//! ## Usage
//!
//! ```rust
//! use busgraph_error::{Error, ErrorKind};
//!
//! fn example() -> Result<(), Error> {
//!     Err(Error::new(ErrorKind::PatternInvalid, "unclosed group")
//!         .with_operation("filter::parse")
//!         .with_context("pattern", "/sensors/("))
//! }
//! ```
//!
//! ## Principles
//!
//! - All fallible functions return `Result<T, busgraph_error::Error>`
//! - External errors are wrapped with `set_source(err)`
//! - Same error handled once, subsequent ops only append context
//! - Don't abuse `From<OtherError>` to prevent raw error leakage

mod error;
mod kind;

pub use error::Error;
pub use kind::ErrorKind;

/// Result type alias using busgraph Error
pub type Result<T> = std::result::Result<T, Error>;
