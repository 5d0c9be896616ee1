//! # Command Buffer
//!
//! An append-only byte builder for composing ESC/POS command streams, and
//! the [`Document`] of flushed segments it produces.
//!
//! The composer flushes twice on receipts with a logo: once after the
//! raster block and once after the text body. Segment boundaries bound the
//! size of a single transport write, which matters because the raster block
//! alone can dwarf the rest of the receipt. A flushed segment is handed to
//! the transport exactly once and never replayed.

use crate::protocol::{commands, encoding};

/// Append-only builder for one receipt's command stream.
///
/// ## Example
///
/// ```
/// use quetzal::render::CommandBuffer;
///
/// let mut buf = CommandBuffer::new();
/// buf.cmd(&[0x1B, 0x40]);
/// buf.line("Hola");
/// let segment = buf.flush();
/// assert_eq!(segment, vec![0x1B, 0x40, b'H', b'o', b'l', b'a', 0x0A]);
/// assert!(buf.is_empty());
/// ```
#[derive(Debug, Default)]
pub struct CommandBuffer {
    bytes: Vec<u8>,
}

impl CommandBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append raw command bytes.
    pub fn cmd(&mut self, bytes: &[u8]) {
        self.bytes.extend_from_slice(bytes);
    }

    /// Append text, routed through the printable-ASCII encoder. No line
    /// terminator is added.
    pub fn text(&mut self, s: &str) {
        self.bytes.extend(encoding::encode(s));
    }

    /// Append an encoded text line followed by LF.
    pub fn line(&mut self, s: &str) {
        self.text(s);
        self.bytes.push(commands::LF);
    }

    /// Append a bare LF.
    pub fn newline(&mut self) {
        self.bytes.push(commands::LF);
    }

    /// Yield the accumulated bytes and clear the buffer.
    pub fn flush(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.bytes)
    }

    /// Whether anything has accumulated since the last flush.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Accumulated byte count since the last flush.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }
}

/// One composed receipt: the ordered segments produced by the composer's
/// flush points, consumed exactly once by the transport.
#[derive(Debug, Default)]
pub struct Document {
    segments: Vec<Vec<u8>>,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a non-empty segment; empty flushes are dropped.
    pub fn push_segment(&mut self, segment: Vec<u8>) {
        if !segment.is_empty() {
            self.segments.push(segment);
        }
    }

    /// The ordered segments.
    pub fn segments(&self) -> &[Vec<u8>] {
        &self.segments
    }

    /// Total byte count across all segments.
    pub fn len(&self) -> usize {
        self.segments.iter().map(Vec::len).sum()
    }

    /// Whether the document carries no bytes.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// All segments concatenated, for inspection and byte dumps.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.len());
        for segment in &self.segments {
            out.extend_from_slice(segment);
        }
        out
    }
}

// ============================================================================
// TESTS
// ============================================================================
