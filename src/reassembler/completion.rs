//! Single-use completion signal acknowledging one fragment.
//!
//! The fragment source withholds the next fragment until the current one is
//! acknowledged. [`Completion`] models that acknowledgment as a
//! consumed-on-use oneshot sender so the exactly-once contract is enforced
//! by the type rather than by convention.

use tokio::sync::oneshot;

use super::error::ReassemblyError;

/// Outcome reported to the fragment source for one fragment.
pub type CompletionResult = Result<(), ReassemblyError>;

/// Receiving half awaited by the fragment source before sending more data.
pub type CompletionReceiver = oneshot::Receiver<CompletionResult>;

/// Single-use acknowledgment for one
/// [`on_fragment`](super::TextReassembler::on_fragment) call.
#[derive(Debug)]
pub struct Completion {
    tx: oneshot::Sender<CompletionResult>,
}

impl Completion {
    /// Create a completion signal and the receiver the fragment source
    /// waits on.
    ///
    /// # Examples
    ///
    /// ```
    /// use textframe::Completion;
    ///
    /// let (completion, mut receiver) = Completion::channel();
    /// completion.succeeded();
    /// assert!(receiver.try_recv().expect("resolved").is_ok());
    /// ```
    #[must_use]
    pub fn channel() -> (Self, CompletionReceiver) {
        let (tx, rx) = oneshot::channel();
        (Self { tx }, rx)
    }

    /// Acknowledge the fragment as processed.
    pub fn succeeded(self) { self.resolve(Ok(())); }

    /// Report the fragment as failed.
    pub fn failed(self, error: ReassemblyError) { self.resolve(Err(error)); }

    fn resolve(self, result: CompletionResult) {
        if self.tx.send(result).is_err() {
            log::debug!("fragment source dropped its completion receiver");
        }
    }
}
