//! Errors raised by store operations that validate their input.
//!
//! Lookup misses are not errors: toggles and merges against unknown
//! identifiers are silent no-ops. Only out-of-domain values are rejected.

use thiserror::Error;

/// Errors that can occur when feeding values into a store slice.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    /// Language code outside the supported set (`ja`, `en`).
    #[error("Unsupported language code '{code}' (expected 'ja' or 'en')")]
    UnsupportedLanguage { code: String },

    /// Innings value whose fractional digit is not 0, 1 or 2.
    #[error("Invalid innings pitched '{value}': fractional part must be .0, .1 or .2")]
    InvalidInnings { value: String },

    /// Well-formed innings value with more outs than the counter holds.
    #[error("Innings pitched '{value}' is too large to record")]
    InningsOutOfRange { value: String },
}
