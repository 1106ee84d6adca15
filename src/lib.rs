#![doc(html_root_url = "https://docs.rs/textframe/latest")]
//! Streaming reassembly of fragmented UTF-8 text messages.
//!
//! This crate turns an ordered stream of frame fragments into partial and
//! final text deliveries. Payloads may be split at arbitrary byte offsets,
//! including in the middle of a multi-byte code point, so decoding is
//! stateful across fragment boundaries. A size policy is consulted before
//! any byte is decoded, malformed encoding fails fast, and every fragment is
//! acknowledged exactly once through a single-use completion signal the
//! fragment source uses as its backpressure gate.

pub mod policy;
pub mod reassembler;
pub mod sink;
pub mod utf8;

pub use policy::{MaxTextSize, SizeLimitExceeded, SizePolicy, Unlimited};
pub use reassembler::{
    Completion,
    CompletionReceiver,
    CompletionResult,
    Fragment,
    ReassemblyError,
    TextReassembler,
};
pub use sink::{SinkError, TextSink};
pub use utf8::{TruncatedUtf8, Utf8Decoder, Utf8Error};
