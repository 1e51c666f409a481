//! # Error Types
//!
//! This module defines the error type used throughout the library.
//! All operations return [`Result<T, RencError>`](RencError).

use thiserror::Error;

/// The error type for all encode/decode operations.
///
/// The three variants map onto the three terminal failure classes of the
/// container format: I/O failures, malformed containers, and cryptographic
/// setup failures. Every error aborts the current invocation; there is no
/// retry and no partial-result recovery.
#[derive(Error, Debug)]
pub enum RencError {
    /// I/O error on the input, output, or keyfile.
    ///
    /// Wraps [`std::io::Error`] and is created automatically when an open,
    /// create, read, or write fails.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The input does not look like a valid container.
    ///
    /// Covers version mismatches, truncated or misaligned metadata, and
    /// content shorter than the declared length.
    #[error("Format error: {0}")]
    Format(String),

    /// Cryptographic setup failed.
    ///
    /// Covers key material that is not exactly 32 bytes, a missing keyfile
    /// path, and failure to obtain random bytes for the session key.
    #[error("Crypto error: {0}")]
    Crypto(String),
}
