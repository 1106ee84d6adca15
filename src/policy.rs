//! Size-policy collaborator bounding cumulative text-message size.
//!
//! The reassembler consults the policy with the raw cumulative byte count
//! before decoding a fragment's payload, so an oversized message is rejected
//! without spending work on its bytes.

use std::num::NonZeroUsize;

use thiserror::Error;

/// Raised when a cumulative byte count exceeds the configured cap.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("text message exceeds size limit: {attempted} bytes > {limit} bytes")]
pub struct SizeLimitExceeded {
    /// Cumulative byte count that triggered the rejection.
    pub attempted: usize,
    /// Configured cap.
    pub limit: NonZeroUsize,
}

/// Pure query bounding the cumulative byte size of one text message.
///
/// Implementations must be side-effect free: the reassembler may query the
/// policy once per fragment and expects consistent answers for one message.
pub trait SizePolicy: Send + Sync {
    /// Check whether `cumulative_bytes` is still within policy.
    ///
    /// # Errors
    ///
    /// Returns [`SizeLimitExceeded`] when the count is over the cap.
    fn check_text_size(&self, cumulative_bytes: usize) -> Result<(), SizeLimitExceeded>;
}

/// Fixed cap on the cumulative byte size of a text message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MaxTextSize {
    limit: NonZeroUsize,
}

impl MaxTextSize {
    /// Create a policy capping messages at `limit` bytes.
    #[must_use]
    pub const fn new(limit: NonZeroUsize) -> Self { Self { limit } }

    /// Configured cap in bytes.
    #[must_use]
    pub const fn limit(&self) -> NonZeroUsize { self.limit }
}

impl SizePolicy for MaxTextSize {
    fn check_text_size(&self, cumulative_bytes: usize) -> Result<(), SizeLimitExceeded> {
        if cumulative_bytes > self.limit.get() {
            return Err(SizeLimitExceeded {
                attempted: cumulative_bytes,
                limit: self.limit,
            });
        }
        Ok(())
    }
}

/// Policy that accepts any message size.
#[derive(Clone, Copy, Debug, Default)]
pub struct Unlimited;

impl SizePolicy for Unlimited {
    fn check_text_size(&self, _cumulative_bytes: usize) -> Result<(), SizeLimitExceeded> { Ok(()) }
}
