//! # ESC/POS Protocol Commands
//!
//! This module implements the core ESC/POS command protocol spoken by the
//! generic Bluetooth thermal printers this crate targets (58mm and 80mm
//! receipt printers sold under many labels).
//!
//! ## Protocol Overview
//!
//! ESC/POS is a byte-oriented protocol where commands are short escape
//! sequences interleaved with printable text:
//!
//! - Single byte: `LF`
//! - Two bytes: `ESC @`
//! - Multi-byte with parameters: `ESC t n`, `GS V m n`
//!
//! ## Byte Order
//!
//! Multi-byte integers use **little-endian** encoding:
//! - `u16` value 0x1234 is sent as bytes `[0x34, 0x12]`
//!
//! ## Reference
//!
//! Based on the Epson ESC/POS Application Programming Guide; the subset
//! here is the profile implemented by the target hardware class.

// ============================================================================
// ESCAPE SEQUENCE CONSTANTS
// ============================================================================

/// ESC (Escape) - Command prefix byte
///
/// Most ESC/POS commands begin with ESC (0x1B). This byte signals the start
/// of a control sequence rather than printable text.
pub const ESC: u8 = 0x1B;

/// GS (Group Separator) - Extended command prefix
///
/// Prefix for graphics, character sizing, and cutter commands:
/// - Hex: 0x1D, Decimal: 29
pub const GS: u8 = 0x1D;

/// LF (Line Feed) - Print and advance one line
///
/// Prints any data in the line buffer and advances paper by the current
/// line spacing amount.
pub const LF: u8 = 0x0A;

// ============================================================================
// INITIALIZATION COMMANDS
// ============================================================================

/// # Initialize Printer (ESC @)
///
/// Resets the printer to its power-on default state. Issued at the start of
/// every receipt so no formatting leaks in from a previous job.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC @ |
/// | Hex     | 1B 40 |
/// | Decimal | 27 64 |
///
/// ## What Gets Reset
///
/// - Print buffer is cleared
/// - Text formatting (bold, size) disabled
/// - Alignment reset to left
/// - Character code table reset to the printer default
///
/// ## Example
///
/// ```
/// use quetzal::protocol::commands;
///
/// let init = commands::init();
/// assert_eq!(init, vec![0x1B, 0x40]);
/// ```
#[inline]
pub fn init() -> Vec<u8> {
    vec![ESC, b'@']
}

/// # Select Character Code Table (ESC t n)
///
/// Selects the single-byte character table used for bytes 0x80–0xFF.
///
/// ## Protocol Details
///
/// | Format  | Bytes    |
/// |---------|----------|
/// | ASCII   | ESC t n  |
/// | Hex     | 1B 74 n  |
/// | Decimal | 27 116 n |
///
/// Text produced by this crate is always ≤ 0x7F after encoding, so the
/// table choice only pins down hardware state; `n = 0` (PC437) is issued
/// alongside [`init`] at the start of every receipt.
#[inline]
pub fn charset(n: u8) -> Vec<u8> {
    vec![ESC, b't', n]
}

// ============================================================================
// PAPER CONTROL COMMANDS
// ============================================================================

/// # Print and Feed n Lines (ESC d n)
///
/// Prints any pending data and feeds paper forward by `n` text lines.
///
/// ## Protocol Details
///
/// | Format  | Bytes    |
/// |---------|----------|
/// | ASCII   | ESC d n  |
/// | Hex     | 1B 64 n  |
/// | Decimal | 27 100 n |
///
/// Used for the trailing blank space before the cut, so the printed total
/// clears the tear bar.
#[inline]
pub fn feed_lines(n: u8) -> Vec<u8> {
    vec![ESC, b'd', n]
}

/// # Feed to Cut Position, Then Partial Cut (GS V 66 0)
///
/// Feeds paper forward to the cutter position, then performs a partial cut
/// (leaves a small hinge so the receipt does not fall). This is the cut
/// issued once at the end of every receipt.
///
/// ## Protocol Details
///
/// | Format  | Bytes       |
/// |---------|-------------|
/// | ASCII   | GS V B 0    |
/// | Hex     | 1D 56 42 00 |
/// | Decimal | 29 86 66 0  |
#[inline]
pub fn cut() -> Vec<u8> {
    vec![GS, b'V', 66, 0]
}

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Encode a u16 value as little-endian bytes [low, high]
///
/// ESC/POS uses little-endian encoding for all multi-byte integers.
///
/// ## Example
///
/// ```
/// use quetzal::protocol::commands::u16_le;
///
/// assert_eq!(u16_le(0x1234), [0x34, 0x12]);
/// assert_eq!(u16_le(384), [0x80, 0x01]); // logo raster width
/// ```
#[inline]
pub const fn u16_le(value: u16) -> [u8; 2] {
    [value as u8, (value >> 8) as u8]
}

// ============================================================================
// TESTS
// ============================================================================
