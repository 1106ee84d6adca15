//! Incremental UTF-8 decoding across fragment boundaries.
//!
//! A naive per-fragment decode corrupts any code point whose bytes straddle
//! a fragment boundary. [`Utf8Decoder`] buffers the unterminated tail of a
//! multi-byte sequence between calls so decoding resumes exactly where the
//! previous fragment stopped, and rejects malformed input on the offending
//! byte rather than at message end.

pub mod error;

pub use error::{TruncatedUtf8, Utf8Error};

/// Longest UTF-8 sequence in bytes.
const MAX_SEQUENCE_LEN: usize = 4;

/// Stateful UTF-8 decoder fed one byte slice at a time.
///
/// The decoder moves between two states: empty (no open sequence) and
/// awaiting one to three continuation bytes of an open multi-byte sequence.
/// Completed code points accumulate in an internal buffer drained by
/// [`take_partial`](Self::take_partial) (lenient, pending bytes stay
/// buffered) or [`take_final`](Self::take_final) (strict, pending bytes are
/// an error). Strictness is a distinct method rather than a mode flag so the
/// difference is visible in the call site's types.
///
/// # Examples
///
/// ```
/// use textframe::Utf8Decoder;
///
/// let mut decoder = Utf8Decoder::new();
/// decoder.push(&[0x68, 0xC3]).expect("valid prefix");
/// assert_eq!(decoder.take_partial(), "h");
///
/// decoder.push(&[0xA9]).expect("continuation completes");
/// assert_eq!(decoder.take_final().expect("no pending bytes"), "é");
/// ```
#[derive(Debug, Default)]
pub struct Utf8Decoder {
    decoded: String,
    pending: [u8; MAX_SEQUENCE_LEN],
    pending_len: usize,
    awaiting: usize,
}

impl Utf8Decoder {
    /// Create an empty decoder.
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Consume payload bytes, committing each completed code point.
    ///
    /// # Errors
    ///
    /// Returns [`Utf8Error::InvalidLeadByte`] when a byte cannot start a
    /// sequence and [`Utf8Error::InvalidContinuationByte`] when a byte falls
    /// outside the range the open sequence expects. The error identifies the
    /// first offending byte; bytes before it remain committed or pending.
    pub fn push(&mut self, bytes: &[u8]) -> Result<(), Utf8Error> {
        for &byte in bytes {
            self.push_byte(byte)?;
        }
        Ok(())
    }

    /// Drain the text decoded so far, leaving any open sequence pending.
    ///
    /// Bytes consumed toward an incomplete code point are not part of the
    /// returned text; they complete (or fail) with later input.
    #[must_use]
    pub fn take_partial(&mut self) -> String { std::mem::take(&mut self.decoded) }

    /// Drain the text decoded so far, requiring no open sequence.
    ///
    /// # Errors
    ///
    /// Returns [`TruncatedUtf8`] when continuation bytes are still
    /// outstanding. The decoder is left unchanged so the caller can inspect
    /// [`pending_len`](Self::pending_len).
    pub fn take_final(&mut self) -> Result<String, TruncatedUtf8> {
        if self.awaiting > 0 {
            return Err(TruncatedUtf8 {
                pending: self.pending_len,
            });
        }
        Ok(std::mem::take(&mut self.decoded))
    }

    /// Number of bytes buffered toward an incomplete code point (0–3).
    #[must_use]
    pub const fn pending_len(&self) -> usize { self.pending_len }

    /// Whether the decoder holds neither committed text nor pending bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.awaiting == 0 && self.decoded.is_empty() }

    fn push_byte(&mut self, byte: u8) -> Result<(), Utf8Error> {
        if self.awaiting == 0 {
            self.begin_sequence(byte)
        } else {
            self.continue_sequence(byte)
        }
    }

    fn begin_sequence(&mut self, byte: u8) -> Result<(), Utf8Error> {
        match byte {
            0x00..=0x7F => {
                self.decoded.push(char::from(byte));
                Ok(())
            }
            0xC2..=0xDF => {
                self.open(byte, 1);
                Ok(())
            }
            0xE0..=0xEF => {
                self.open(byte, 2);
                Ok(())
            }
            0xF0..=0xF4 => {
                self.open(byte, 3);
                Ok(())
            }
            // 0x80–0xBF lone continuation, 0xC0/0xC1 overlong lead,
            // 0xF5–0xFF beyond U+10FFFF.
            _ => Err(Utf8Error::InvalidLeadByte { byte }),
        }
    }

    fn open(&mut self, lead: u8, awaiting: usize) {
        self.pending[0] = lead;
        self.pending_len = 1;
        self.awaiting = awaiting;
    }

    fn continue_sequence(&mut self, byte: u8) -> Result<(), Utf8Error> {
        let (low, high) = if self.pending_len == 1 {
            first_continuation_range(self.pending[0])
        } else {
            (0x80, 0xBF)
        };

        if !(low..=high).contains(&byte) {
            return Err(Utf8Error::InvalidContinuationByte { byte });
        }

        self.pending[self.pending_len] = byte;
        self.pending_len += 1;
        self.awaiting -= 1;

        if self.awaiting == 0 {
            self.commit_sequence(byte)?;
        }
        Ok(())
    }

    fn commit_sequence(&mut self, last_byte: u8) -> Result<(), Utf8Error> {
        let sequence = &self.pending[..self.pending_len];
        // Every byte was range-checked on entry, so the sequence decodes.
        let text = std::str::from_utf8(sequence)
            .map_err(|_| Utf8Error::InvalidContinuationByte { byte: last_byte })?;
        self.decoded.push_str(text);
        self.pending_len = 0;
        Ok(())
    }
}

/// Allowed range for the first continuation byte of a sequence.
///
/// The range is restricted per lead byte so overlong forms, surrogate code
/// points, and values above U+10FFFF are rejected on their first
/// continuation byte instead of after the sequence completes.
const fn first_continuation_range(lead: u8) -> (u8, u8) {
    match lead {
        0xE0 => (0xA0, 0xBF),
        0xED => (0x80, 0x9F),
        0xF0 => (0x90, 0xBF),
        0xF4 => (0x80, 0x8F),
        _ => (0x80, 0xBF),
    }
}
