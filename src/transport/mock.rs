//! # Mock Printer Link
//!
//! An in-memory [`PrinterLink`] that records every write and can inject a
//! failure at any transport state. Used by the test suites to verify
//! chunking, ordering, and the disconnect guarantee without a radio.

use async_trait::async_trait;

use crate::error::QuetzalError;
use crate::transport::PrinterLink;

/// Where the mock injects its failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailAt {
    /// `connect` fails (discovery / service resolution).
    Connect,
    /// The n-th chunk write fails (0-based).
    Chunk(usize),
}

/// Scriptable in-memory printer link.
#[derive(Debug, Default)]
pub struct MockLink {
    /// Failure to inject, if any.
    pub fail_at: Option<FailAt>,
    /// Additionally fail the disconnect call itself.
    pub also_fail_disconnect: bool,
    /// Every successfully-written chunk, in order.
    pub writes: Vec<Vec<u8>>,
    /// Whether a handle is currently held.
    pub connected: bool,
    pub connect_calls: usize,
    pub disconnect_calls: usize,
}

impl MockLink {
    /// A link that succeeds at everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// A link that fails at the given state.
    pub fn failing_at(fail_at: FailAt) -> Self {
        Self {
            fail_at: Some(fail_at),
            ..Self::default()
        }
    }
}

#[async_trait]
impl PrinterLink for MockLink {
    async fn connect(&mut self) -> Result<(), QuetzalError> {
        self.connect_calls += 1;
        if self.fail_at == Some(FailAt::Connect) {
            // a partial handle is held, as a real radio might after a
            // failed characteristic resolution
            self.connected = true;
            return Err(QuetzalError::Discovery("no printer selected".to_string()));
        }
        self.connected = true;
        Ok(())
    }

    async fn write_chunk(&mut self, chunk: &[u8]) -> Result<(), QuetzalError> {
        if !self.connected {
            return Err(QuetzalError::Transmission("not connected".to_string()));
        }
        if self.fail_at == Some(FailAt::Chunk(self.writes.len())) {
            return Err(QuetzalError::Transmission("chunk write rejected".to_string()));
        }
        self.writes.push(chunk.to_vec());
        Ok(())
    }

    async fn disconnect(&mut self) -> Result<(), QuetzalError> {
        self.disconnect_calls += 1;
        self.connected = false;
        if self.also_fail_disconnect {
            return Err(QuetzalError::Connection("disconnect failed".to_string()));
        }
        Ok(())
    }
}
