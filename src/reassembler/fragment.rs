//! Fragment unit consumed by the reassembler.

use bytes::Bytes;

/// One unit of a segmented text message: a byte payload plus a finality
/// flag marking the last fragment of the logical message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fragment {
    payload: Bytes,
    is_final: bool,
}

impl Fragment {
    /// Construct a fragment from payload bytes and a finality flag.
    #[must_use]
    pub fn new(payload: impl Into<Bytes>, is_final: bool) -> Self {
        Self {
            payload: payload.into(),
            is_final,
        }
    }

    /// Non-final fragment carrying `payload`.
    #[must_use]
    pub fn partial(payload: impl Into<Bytes>) -> Self { Self::new(payload, false) }

    /// Final fragment carrying `payload`.
    #[must_use]
    pub fn last(payload: impl Into<Bytes>) -> Self { Self::new(payload, true) }

    /// Borrow the payload bytes.
    #[must_use]
    pub fn payload(&self) -> &[u8] { self.payload.as_ref() }

    /// Whether this fragment terminates the logical message.
    #[must_use]
    pub const fn is_final(&self) -> bool { self.is_final }

    /// Payload length in bytes.
    #[must_use]
    pub fn len(&self) -> usize { self.payload.len() }

    /// Whether the payload is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.payload.is_empty() }
}
