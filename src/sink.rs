//! Application sink receiving decoded text.

use async_trait::async_trait;

/// Failure reported by a [`TextSink`] delivery.
pub type SinkError = Box<dyn std::error::Error + Send + Sync>;

/// Opaque application callable receiving decoded text.
///
/// Non-final deliveries carry the maximal fully decoded prefix produced by a
/// fragment and may be empty; the final delivery carries the strictly
/// validated suffix since the last emission. A delivery failure is treated
/// by the reassembler exactly like a local decode failure: the current
/// message is aborted and the fragment is acknowledged as failed.
#[async_trait]
pub trait TextSink: Send {
    /// Deliver `text` to the application.
    ///
    /// # Errors
    ///
    /// Returns a [`SinkError`] when the application rejects the delivery.
    async fn deliver(&mut self, text: String, is_final: bool) -> Result<(), SinkError>;
}
