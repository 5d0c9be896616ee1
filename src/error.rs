//! # Error Types
//!
//! This module defines error types used throughout the quetzal library.
//!
//! The taxonomy follows the transport state machine: every variant carries a
//! human-readable reason string that callers are expected to surface as-is.
//! Logo fetch/decode failures never appear here; the rasterizer recovers
//! them locally by omitting the logo block.

use thiserror::Error;

/// Main error type for quetzal operations
#[derive(Debug, Error)]
pub enum QuetzalError {
    /// No Bluetooth adapter on this platform. Not retryable without a
    /// platform change.
    #[error("Bluetooth unavailable: {0}")]
    BluetoothUnavailable(String),

    /// No compatible printer was found during the scan window, or the scan
    /// itself failed. Retryable by re-invoking the whole print operation.
    #[error("Discovery failed: {0}")]
    Discovery(String),

    /// Device unreachable, or the print service / write characteristic
    /// could not be resolved (wrong device paired, firmware mismatch).
    /// Retryable; no automatic retry is performed here.
    #[error("Connection failed: {0}")]
    Connection(String),

    /// A chunk write was rejected mid-stream. Terminal for the whole
    /// receipt: already-sent bytes cannot be un-sent, so a retry means a
    /// fresh compose-and-send cycle.
    #[error("Transmission failed: {0}")]
    Transmission(String),

    /// Image processing error
    #[error("Image error: {0}")]
    Image(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
