//! Shared sink doubles for behavioural tests.

// Items in this shared module may not be used by all test binaries that import it.
#![allow(
    dead_code,
    reason = "shared test utilities are not used by all test binaries"
)]

use async_trait::async_trait;
use textframe::{SinkError, TextSink};

/// Sink that records every delivery for later inspection.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub deliveries: Vec<(String, bool)>,
}

impl RecordingSink {
    /// Concatenation of all delivered text, partial and final.
    #[must_use]
    pub fn joined(&self) -> String {
        self.deliveries.iter().map(|(text, _)| text.as_str()).collect()
    }
}

#[async_trait]
impl TextSink for RecordingSink {
    async fn deliver(&mut self, text: String, is_final: bool) -> Result<(), SinkError> {
        self.deliveries.push((text, is_final));
        Ok(())
    }
}
