//! # Printer Transport Layer
//!
//! Delivers a composed [`Document`] to a physical printer.
//!
//! ## Shape
//!
//! - [`PrinterLink`]: the capability interface over the radio. The BLE
//!   implementation lives in [`ble`]; tests substitute [`mock::MockLink`]
//!   without touching real hardware.
//! - [`Sender`]: the chunked streaming state machine, generic over any
//!   link.
//!
//! ## State Machine
//!
//! ```text
//! Idle → Discovering → Connected → ServiceBound → Streaming → Disconnected
//! ```
//!
//! Discovery through service binding happen inside `PrinterLink::connect`;
//! the sender drives streaming and owns the disconnect guarantee: every
//! path that acquires a device handle reaches `disconnect` exactly once,
//! on success and on every failure.
//!
//! ## Chunking and Pacing
//!
//! Segments are written in 50-byte chunks, strictly in sequence (chunk
//! N+1 is never issued before chunk N's write is acknowledged), with a
//! pacing delay between writes. The pacing is a hard requirement of the
//! target hardware class: unpaced writes overrun the printer's internal
//! buffer and silently corrupt output.

pub mod ble;
pub mod mock;

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::error::QuetzalError;
use crate::render::Document;

pub use ble::BleLink;

/// Chunk size for characteristic writes (bytes).
pub const CHUNK_SIZE: usize = 50;

/// Pacing delay between chunk writes.
pub const CHUNK_DELAY: Duration = Duration::from_millis(30);

/// Grace delay before disconnect, so the final chunk physically drains
/// before the link closes.
pub const DISCONNECT_GRACE: Duration = Duration::from_millis(500);

/// Capability interface over a wireless printer connection.
///
/// One implementor handle covers exactly one print job: acquired by
/// `connect`, released by `disconnect`, never cached across jobs.
#[async_trait]
pub trait PrinterLink {
    /// Discover a printer, open the connection, and resolve the write
    /// characteristic (Discovering → Connected → ServiceBound).
    ///
    /// On failure the link may hold a partially-acquired handle; the
    /// caller must still invoke [`disconnect`](Self::disconnect).
    async fn connect(&mut self) -> Result<(), QuetzalError>;

    /// Write one chunk and wait for its acknowledgment.
    async fn write_chunk(&mut self, chunk: &[u8]) -> Result<(), QuetzalError>;

    /// Release the device handle. Safe to call in any state.
    async fn disconnect(&mut self) -> Result<(), QuetzalError>;
}

/// # Chunked Document Sender
///
/// Streams a composed document over a [`PrinterLink`] with bounded chunk
/// size and inter-chunk pacing.
///
/// ## Example
///
/// ```no_run
/// use quetzal::transport::{BleLink, Sender};
/// use quetzal::render::Document;
///
/// # async fn example(document: Document) -> Result<(), quetzal::QuetzalError> {
/// let mut link = BleLink::new();
/// Sender::default().send(&mut link, &document).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Sender {
    chunk_size: usize,
    chunk_delay: Duration,
    disconnect_grace: Duration,
}

impl Default for Sender {
    fn default() -> Self {
        Self {
            chunk_size: CHUNK_SIZE,
            chunk_delay: CHUNK_DELAY,
            disconnect_grace: DISCONNECT_GRACE,
        }
    }
}

impl Sender {
    /// Set the chunk size for characteristic writes.
    ///
    /// Larger chunks are faster but overflow the receiver's buffer.
    /// Default is 50 bytes.
    pub fn set_chunk_size(&mut self, size: usize) {
        self.chunk_size = size.max(1);
    }

    /// Set the pacing delay between chunks.
    ///
    /// Longer delays give the printer more time to drain its buffer.
    /// Default is 30ms.
    pub fn set_chunk_delay(&mut self, delay: Duration) {
        self.chunk_delay = delay;
    }

    /// Set the grace delay before disconnect. Default is 500ms.
    pub fn set_disconnect_grace(&mut self, delay: Duration) {
        self.disconnect_grace = delay;
    }

    /// Send a document: connect, stream every segment in order, disconnect.
    ///
    /// The device handle is released exactly once on every path. A
    /// mid-stream failure is terminal for the whole receipt: the document
    /// is never partially retried; the caller re-composes and re-sends.
    pub async fn send<L>(&self, link: &mut L, document: &Document) -> Result<(), QuetzalError>
    where
        L: PrinterLink + ?Sized,
    {
        if let Err(e) = link.connect().await {
            // connect may have left a partially-acquired handle behind
            let _ = link.disconnect().await;
            return Err(e);
        }

        let streamed = self.stream(link, document).await;
        if streamed.is_ok() {
            tokio::time::sleep(self.disconnect_grace).await;
        }
        let disconnected = link.disconnect().await;

        match (streamed, disconnected) {
            (Ok(()), Ok(())) => {
                info!(bytes = document.len(), "receipt delivered");
                Ok(())
            }
            // A streaming failure is the interesting one; a disconnect
            // failure on top of it changes nothing for the caller.
            (Err(e), _) => Err(e),
            (Ok(()), Err(e)) => Err(e),
        }
    }

    /// Streaming phase: sequential acknowledged chunk writes with pacing.
    async fn stream<L>(&self, link: &mut L, document: &Document) -> Result<(), QuetzalError>
    where
        L: PrinterLink + ?Sized,
    {
        for segment in document.segments() {
            debug!(bytes = segment.len(), "streaming segment");
            for chunk in segment.chunks(self.chunk_size) {
                link.write_chunk(chunk).await?;
                if !self.chunk_delay.is_zero() {
                    tokio::time::sleep(self.chunk_delay).await;
                }
            }
        }
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::mock::{FailAt, MockLink};
    use super::*;

    fn doc_of(bytes: Vec<u8>) -> Document {
        let mut doc = Document::new();
        doc.push_segment(bytes);
        doc
    }

    fn fast_sender() -> Sender {
        let mut sender = Sender::default();
        sender.set_chunk_delay(Duration::ZERO);
        sender.set_disconnect_grace(Duration::ZERO);
        sender
    }

    #[tokio::test]
    async fn test_chunking_is_exact() {
        let mut link = MockLink::new();
        let doc = doc_of(vec![0xAB; 500]);
        fast_sender().send(&mut link, &doc).await.unwrap();

        assert_eq!(link.writes.len(), 10);
        assert!(link.writes.iter().all(|w| w.len() == 50));
    }

    #[tokio::test]
    async fn test_short_final_chunk() {
        let mut link = MockLink::new();
        let doc = doc_of(vec![0x01; 120]);
        fast_sender().send(&mut link, &doc).await.unwrap();

        assert_eq!(link.writes.len(), 3);
        assert_eq!(link.writes[2].len(), 20);
    }

    #[tokio::test]
    async fn test_segments_stream_in_order() {
        let mut link = MockLink::new();
        let mut doc = Document::new();
        doc.push_segment(vec![0x01; 10]);
        doc.push_segment(vec![0x02; 10]);
        fast_sender().send(&mut link, &doc).await.unwrap();

        let flat: Vec<u8> = link.writes.concat();
        assert_eq!(&flat[..10], &[0x01; 10]);
        assert_eq!(&flat[10..], &[0x02; 10]);
    }

    #[tokio::test]
    async fn test_disconnects_on_success() {
        let mut link = MockLink::new();
        fast_sender().send(&mut link, &doc_of(vec![0; 10])).await.unwrap();
        assert!(!link.connected);
        assert_eq!(link.disconnect_calls, 1);
    }

    #[tokio::test]
    async fn test_disconnects_when_connect_fails() {
        let mut link = MockLink::failing_at(FailAt::Connect);
        let err = fast_sender()
            .send(&mut link, &doc_of(vec![0; 10]))
            .await
            .unwrap_err();
        assert!(matches!(err, QuetzalError::Discovery(_)));
        assert_eq!(link.disconnect_calls, 1);
        assert!(link.writes.is_empty());
    }

    #[tokio::test]
    async fn test_disconnects_when_a_chunk_write_fails() {
        for failing_chunk in [0, 1, 5] {
            let mut link = MockLink::failing_at(FailAt::Chunk(failing_chunk));
            let err = fast_sender()
                .send(&mut link, &doc_of(vec![0; 500]))
                .await
                .unwrap_err();
            assert!(matches!(err, QuetzalError::Transmission(_)));
            assert!(!link.connected);
            assert_eq!(link.disconnect_calls, 1);
            // Nothing written after the failure
            assert_eq!(link.writes.len(), failing_chunk);
        }
    }

    #[tokio::test]
    async fn test_stream_error_wins_over_disconnect_error() {
        let mut link = MockLink::failing_at(FailAt::Chunk(0));
        link.also_fail_disconnect = true;
        let err = fast_sender()
            .send(&mut link, &doc_of(vec![0; 10]))
            .await
            .unwrap_err();
        assert!(matches!(err, QuetzalError::Transmission(_)));
        assert_eq!(link.disconnect_calls, 1);
    }

    #[tokio::test]
    async fn test_empty_document_still_connects_and_disconnects() {
        let mut link = MockLink::new();
        fast_sender().send(&mut link, &Document::new()).await.unwrap();
        assert_eq!(link.connect_calls, 1);
        assert_eq!(link.disconnect_calls, 1);
        assert!(link.writes.is_empty());
    }
}
