//! # ESC/POS Protocol Implementation
//!
//! This module provides low-level command builders for the ESC/POS profile
//! spoken by generic Bluetooth thermal receipt printers.
//!
//! ## Module Structure
//!
//! - [`commands`]: Basic printer commands (init, charset, feed, cut)
//! - [`text`]: Text styling (alignment, bold, double height)
//! - [`graphics`]: Raster bit-image command
//! - [`encoding`]: Unicode → printable-ASCII transliteration
//!
//! ## Usage Example
//!
//! ```
//! use quetzal::protocol::{commands, encoding, text};
//!
//! // Build a simple print sequence
//! let mut data = Vec::new();
//!
//! // Initialize printer
//! data.extend(commands::init());
//! data.extend(commands::charset(0));
//!
//! // Set text style
//! data.extend(text::align_center());
//! data.extend(text::bold_on());
//! data.extend(encoding::encode("COMPROBANTE"));
//! data.push(0x0A);
//! data.extend(text::bold_off());
//! data.extend(text::align_left());
//!
//! // Feed and cut
//! data.extend(commands::feed_lines(4));
//! data.extend(commands::cut());
//!
//! // Send `data` to printer via transport...
//! ```

pub mod commands;
pub mod encoding;
pub mod graphics;
pub mod text;
