//! Error taxonomy.
//!
//! Only two conditions are real errors: invalid caller input and a missing
//! backing resource. Everything else the core can encounter — no synonyms for
//! a word, no contraction match, a single-sentence standard deviation — is a
//! defined, non-error outcome. Blank input is not an error either; the
//! orchestrator short-circuits it with an empty result.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, HumanizerError>;

#[derive(Debug, Error)]
pub enum HumanizerError {
    /// The caller handed us something unusable: an out-of-range option or
    /// unreadable input at the process boundary. Fatal, surfaced as-is.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A backing annotation or lexical resource is missing. This is a setup
    /// failure and should abort startup, not be retried per request.
    #[error("resource unavailable: {0}")]
    ResourceUnavailable(String),
}
