//! Cipher and codec error types
//!
//! This module defines the error types surfaced by the cipher strategies and
//! the text codecs. All errors implement the standard Error trait for proper
//! error propagation and handling. Nothing is retried inside the library;
//! callers decide how to recover.

use std::fmt;
use std::fmt::Display;

/// Result type used throughout the library.
pub type Result<T> = std::result::Result<T, CipherError>;

/// Errors produced by cipher construction, configuration and text transforms
///
/// Validation happens eagerly at the boundary (constructors and setters), so
/// `encrypt`/`decrypt` on an already-constructed cipher can only fail on
/// malformed text supplied at call time or on a fault inside the block-cipher
/// engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    /// An argument failed validation
    ///
    /// Occurs when:
    /// - An input or output mode is outside {0, 1, 2}
    /// - A Vigenere key is empty or contains non-alphabetic characters
    /// - An AES IV is not exactly 16 bytes
    /// - Base64 or hex text given at call time is malformed
    Argument(String),

    /// An AES key of an unsupported length was supplied or requested
    ///
    /// Carries the offending length in bits. Valid keys are 16, 24 or
    /// 32 bytes (AES-128/192/256).
    KeyLength(usize),

    /// The underlying block-cipher engine failed
    ///
    /// Covers bad padding, corrupt ciphertext and wrong key/IV material.
    /// Deliberately generic: an engine failure is not distinguished from
    /// internal misconfiguration, and the message never leaks plaintext
    /// or key bytes.
    Engine(String),
}

impl std::error::Error for CipherError {}

impl Display for CipherError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CipherError::Argument(msg) => msg.fmt(fmt),
            CipherError::KeyLength(bits) => write!(
                fmt,
                "invalid AES key length: {} bits (valid key sizes are 16, 24, or 32 bytes)",
                bits
            ),
            CipherError::Engine(msg) => write!(fmt, "cipher engine failure: {}", msg),
        }
    }
}
