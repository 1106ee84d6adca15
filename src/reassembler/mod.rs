//! Streaming text reassembler driving the incremental decoder.
//!
//! [`TextReassembler`] consumes the ordered fragments of one logical text
//! message. Each non-final fragment emits the maximal fully decoded prefix
//! to the application sink; the final fragment takes the strict extraction
//! path so an unterminated sequence is rejected instead of silently dropped.
//! The size policy is queried with raw byte counts before any decoding. Each
//! fragment is acknowledged exactly once through [`Completion`], the
//! fragment source's backpressure gate.

pub mod completion;
pub mod error;
pub mod fragment;

pub use completion::{Completion, CompletionReceiver, CompletionResult};
pub use error::ReassemblyError;
pub use fragment::Fragment;

use crate::{policy::SizePolicy, sink::TextSink, utf8::Utf8Decoder};

/// Decode state for one in-progress logical message.
///
/// Present on the reassembler if and only if a message is being
/// reconstructed; discarded on final delivery and on every failure.
#[derive(Debug, Default)]
struct DecodeState {
    decoder: Utf8Decoder,
    cumulative_bytes: usize,
}

/// Stateful reassembler for one connection's text-message stream.
///
/// Fragments of one message must arrive strictly in order, one at a time;
/// the fragment source is expected to await the completion signal before
/// delivering the next fragment. Instances are connection-scoped and never
/// shared across concurrent messages.
#[derive(Debug)]
pub struct TextReassembler<P, S> {
    policy: P,
    sink: S,
    state: Option<DecodeState>,
}

impl<P: SizePolicy, S: TextSink> TextReassembler<P, S> {
    /// Create a reassembler delivering to `sink` under `policy`.
    #[must_use]
    pub fn new(policy: P, sink: S) -> Self {
        Self {
            policy,
            sink,
            state: None,
        }
    }

    /// Whether a logical message is currently being reassembled.
    #[must_use]
    pub const fn in_progress(&self) -> bool { self.state.is_some() }

    /// Borrow the application sink.
    #[must_use]
    pub const fn sink(&self) -> &S { &self.sink }

    /// Process one fragment and resolve `completion` exactly once.
    ///
    /// Equivalent to [`accept`](Self::accept) with the outcome routed
    /// through the completion signal instead of returned.
    pub async fn on_fragment(&mut self, fragment: Fragment, completion: Completion) {
        match self.accept(fragment).await {
            Ok(()) => completion.succeeded(),
            Err(error) => completion.failed(error),
        }
    }

    /// Process one fragment of the current logical message.
    ///
    /// Starts a new message when none is in progress. Any failure is
    /// terminal for the current message: decode state is discarded and the
    /// next call starts fresh. Partial text already delivered to the sink is
    /// never retracted.
    ///
    /// # Errors
    ///
    /// Returns [`ReassemblyError::MessageTooLarge`] when the cumulative
    /// payload size exceeds policy (checked before decoding),
    /// [`ReassemblyError::InvalidEncoding`] when a byte violates UTF-8
    /// grammar, [`ReassemblyError::TruncatedEncoding`] when a final fragment
    /// ends mid code point, and [`ReassemblyError::Sink`] when the
    /// application sink rejects a delivery.
    pub async fn accept(&mut self, fragment: Fragment) -> Result<(), ReassemblyError> {
        match self.process(fragment).await {
            Ok(()) => Ok(()),
            Err(error) => {
                log::debug!("discarding decode state after failure: {error}");
                self.state = None;
                Err(error)
            }
        }
    }

    async fn process(&mut self, fragment: Fragment) -> Result<(), ReassemblyError> {
        let state = self.state.get_or_insert_with(DecodeState::default);

        if !fragment.is_empty() {
            let attempted = state.cumulative_bytes.saturating_add(fragment.len());
            self.policy.check_text_size(attempted)?;
            state.cumulative_bytes = attempted;
            log::debug!(
                "accepted {} payload byte(s), {attempted} cumulative",
                fragment.len(),
            );
            state.decoder.push(fragment.payload())?;
        }

        if fragment.is_final() {
            let text = state.decoder.take_final()?;
            self.state = None;
            self.sink
                .deliver(text, true)
                .await
                .map_err(ReassemblyError::Sink)?;
        } else {
            // Empty prefixes are still delivered so the flow-control
            // contract stays uniform across fragments.
            let text = state.decoder.take_partial();
            self.sink
                .deliver(text, false)
                .await
                .map_err(ReassemblyError::Sink)?;
        }

        Ok(())
    }
}
