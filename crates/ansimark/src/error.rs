//! Error types for markup configuration and parsing.

use thiserror::Error;

/// Errors raised while configuring or running the markup engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MarkupError {
    /// The separator option is not a usable pair, reported at build time.
    #[error("invalid tag separators {0:?}: expected two distinct characters, neither a backslash")]
    Configuration(String),

    /// A closing tag with no corresponding open tag, or (in strict mode) a
    /// tag still open at end of input.
    #[error("{0}")]
    MismatchedTag(String),

    /// A closing tag that matches an open ancestor while an inner tag is
    /// still open.
    #[error("{0}")]
    UnbalancedTag(String),
}
