//! Error taxonomy surfaced through the completion signal.

use thiserror::Error;

use crate::{
    policy::SizeLimitExceeded,
    sink::SinkError,
    utf8::{TruncatedUtf8, Utf8Error},
};

/// Terminal failure for the text message currently being reassembled.
///
/// All variants flow through the same completion channel and none are
/// retried locally; retry is the fragment source's decision. Decode state is
/// discarded whichever variant is raised, so a later fragment starts a fresh
/// message. The variants stay distinct so consumers can separate bad input
/// from application failure when logging or deciding whether to retry.
#[derive(Debug, Error)]
pub enum ReassemblyError {
    /// Cumulative payload size exceeded the policy cap, detected before
    /// decoding any byte of the rejected fragment.
    #[error("message too large: {0}")]
    MessageTooLarge(#[from] SizeLimitExceeded),
    /// A payload byte violated UTF-8 grammar.
    #[error("invalid text encoding: {0}")]
    InvalidEncoding(#[from] Utf8Error),
    /// The final fragment ended with an incomplete multi-byte sequence.
    #[error("truncated text encoding: {0}")]
    TruncatedEncoding(#[from] TruncatedUtf8),
    /// The application sink rejected a delivery.
    #[error("sink delivery failed: {0}")]
    Sink(#[source] SinkError),
}
