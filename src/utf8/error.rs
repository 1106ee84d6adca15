//! Error types reported by the incremental UTF-8 decoder.

use thiserror::Error;

/// Byte-level UTF-8 grammar violation detected while consuming input.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum Utf8Error {
    /// The byte cannot start a sequence: a lone continuation byte, an
    /// overlong two-byte lead (`0xC0`/`0xC1`), or a lead beyond U+10FFFF.
    #[error("invalid UTF-8 lead byte {byte:#04x}")]
    InvalidLeadByte {
        /// Offending byte.
        byte: u8,
    },
    /// The byte falls outside the continuation range the open sequence
    /// expects. Overlong forms, surrogates, and out-of-range code points
    /// surface here on their first continuation byte.
    #[error("invalid UTF-8 continuation byte {byte:#04x}")]
    InvalidContinuationByte {
        /// Offending byte.
        byte: u8,
    },
}

/// Strict extraction found an unterminated multi-byte sequence.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("truncated UTF-8 sequence: {pending} byte(s) still buffered")]
pub struct TruncatedUtf8 {
    /// Number of bytes buffered toward the incomplete code point.
    pub pending: usize,
}
