//! # ESC/POS Raster Graphics
//!
//! This module implements the raster bit-image command used to print the
//! business logo at the top of a receipt.
//!
//! ## Bit Packing
//!
//! Image data is packed as bytes where each bit represents one dot:
//! - Bit 7 (MSB) = leftmost dot
//! - Bit 0 (LSB) = rightmost dot
//! - 1 = black (print), 0 = white (no print)
//!
//! ```text
//! Byte value 0xF0 = 11110000 = ████░░░░
//! Byte value 0x0F = 00001111 = ░░░░████
//! Byte value 0xAA = 10101010 = █░█░█░█░
//! ```
//!
//! Rows are packed left to right, top to bottom; the final byte of each row
//! is padded with clear bits when the width is not a multiple of 8.

use super::commands::{GS, u16_le};

// ============================================================================
// RASTER BIT IMAGE (GS v 0)
// ============================================================================

/// # Print Raster Bit Image (GS v 0 m xL xH yL yH d1...dk)
///
/// Prints a monochrome image of arbitrary height at the current position.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | GS v 0 m xL xH yL yH d1...dk |
/// | Hex     | 1D 76 30 m xL xH yL yH d1...dk |
/// | Decimal | 29 118 48 m xL xH yL yH d1...dk |
///
/// ## Parameters
///
/// - `m`: Mode (0 = normal density)
/// - `xL, xH`: Width in **bytes**, little-endian
/// - `yL, yH`: Height in **dots**, little-endian
/// - `d1...dk`: Image data, k = width_bytes × height bytes
///
/// ## Width and Height Encoding
///
/// ```text
/// width_bytes = xL + (xH × 256)
/// height_dots = yL + (yH × 256)
///
/// Example: 48 bytes wide (384 dots) = [0x30, 0x00]
/// Example: 120 rows high = [0x78, 0x00]
/// ```
///
/// ## Example
///
/// ```
/// use quetzal::protocol::graphics;
///
/// // 384 dots wide (48 bytes), 2 rows
/// let data = vec![0xFF; 48 * 2];
/// let cmd = graphics::raster(384, 2, &data);
///
/// assert_eq!(&cmd[0..8], &[0x1D, 0x76, 0x30, 0x00, 48, 0, 2, 0]);
/// assert_eq!(cmd.len(), 8 + 48 * 2);
/// ```
pub fn raster(width_dots: u16, height: u16, data: &[u8]) -> Vec<u8> {
    let width_bytes = width_dots.div_ceil(8);
    debug_assert!(
        data.len() == width_bytes as usize * height as usize,
        "Raster data must be exactly width_bytes * height bytes. Expected {}, got {}",
        width_bytes as usize * height as usize,
        data.len()
    );

    let mut cmd = Vec::with_capacity(8 + data.len());
    cmd.push(GS);
    cmd.push(b'v');
    cmd.push(b'0');
    cmd.push(0); // m: normal density
    cmd.extend(u16_le(width_bytes));
    cmd.extend(u16_le(height));
    cmd.extend_from_slice(data);
    cmd
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raster_header() {
        let data = vec![0x00; 48];
        let cmd = raster(384, 1, &data);
        // GS v 0, m=0, width 48 bytes LE, height 1 LE
        assert_eq!(&cmd[0..8], &[0x1D, 0x76, 0x30, 0x00, 0x30, 0x00, 0x01, 0x00]);
    }

    #[test]
    fn test_raster_data_appended() {
        let data = vec![0xAA, 0x55];
        let cmd = raster(16, 1, &data);
        assert_eq!(&cmd[8..], &[0xAA, 0x55]);
        assert_eq!(cmd.len(), 8 + 2);
    }

    #[test]
    fn test_raster_rounds_width_up_to_bytes() {
        // 12 dots -> 2 bytes per row
        let data = vec![0xFF, 0xF0, 0xFF, 0xF0];
        let cmd = raster(12, 2, &data);
        assert_eq!(&cmd[4..6], &[0x02, 0x00]);
        assert_eq!(&cmd[6..8], &[0x02, 0x00]);
    }

    #[test]
    fn test_raster_tall_image_height_le() {
        let data = vec![0x00; 48 * 300];
        let cmd = raster(384, 300, &data);
        // 300 = 0x012C
        assert_eq!(&cmd[6..8], &[0x2C, 0x01]);
    }
}
