//! # Logo Rasterizer
//!
//! Fetches the store logo, converts it to a monochrome bitmap, and packs it
//! into the raster bit-image command.
//!
//! ## Pipeline
//!
//! 1. HTTP fetch of the logo URL
//! 2. Decode (any format the `image` crate recognizes)
//! 3. Proportional downscale to the fixed raster width
//!    ([`LOGO_WIDTH_DOTS`], 384 dots, the narrowest paper, so one asset
//!    serves every profile)
//! 4. Binarize: a pixel prints ink when its RGB average is below the
//!    brightness threshold and it is not significantly transparent
//! 5. Pack 8 pixels per byte, row-major, final byte of each row padded
//!    with clear bits
//! 6. Prepend the `GS v 0` header
//!
//! ## Failure Policy
//!
//! Every failure (unreachable URL, HTTP error status, undecodable body)
//! collapses to `None`. The composer treats `None` as "no logo section";
//! a missing logo never fails a print.

use image::DynamicImage;
use tracing::{debug, warn};

use crate::error::QuetzalError;
use crate::printer::LOGO_WIDTH_DOTS;
use crate::protocol::graphics;

/// RGB-average threshold below which a pixel prints ink.
const BRIGHTNESS_THRESHOLD: u16 = 128;

/// Alpha threshold below which a pixel counts as transparent (no ink).
const ALPHA_OPAQUE_MIN: u8 = 128;

/// Fetch a logo and render it to raster bit-image command bytes.
///
/// Returns `None` on any fetch or decode failure; the caller omits the
/// logo section and continues.
pub async fn fetch_logo(url: &str) -> Option<Vec<u8>> {
    match try_fetch(url).await {
        Ok(block) => {
            debug!(url, bytes = block.len(), "logo rasterized");
            Some(block)
        }
        Err(e) => {
            warn!(url, error = %e, "logo unavailable, printing without it");
            None
        }
    }
}

async fn try_fetch(url: &str) -> Result<Vec<u8>, QuetzalError> {
    let response = reqwest::get(url)
        .await
        .map_err(|e| QuetzalError::Image(format!("Fetch failed: {}", e)))?
        .error_for_status()
        .map_err(|e| QuetzalError::Image(format!("Fetch failed: {}", e)))?;

    let body = response
        .bytes()
        .await
        .map_err(|e| QuetzalError::Image(format!("Fetch failed: {}", e)))?;

    let img = image::load_from_memory(&body)
        .map_err(|e| QuetzalError::Image(format!("Decode failed: {}", e)))?;

    rasterize(&img)
}

/// Render a decoded image to raster bit-image command bytes.
///
/// Downscales to [`LOGO_WIDTH_DOTS`] wide (height preserves aspect ratio),
/// binarizes, packs, and frames with the `GS v 0` header.
pub fn rasterize(img: &DynamicImage) -> Result<Vec<u8>, QuetzalError> {
    let (orig_w, orig_h) = (img.width(), img.height());
    if orig_w == 0 || orig_h == 0 {
        return Err(QuetzalError::Image("Empty image".to_string()));
    }

    let height = ((orig_h as u64 * LOGO_WIDTH_DOTS as u64) / orig_w as u64).max(1);
    if height > u16::MAX as u64 {
        return Err(QuetzalError::Image(format!(
            "Logo too tall after scaling: {} rows",
            height
        )));
    }
    let height = height as u32;

    let scaled = img
        .resize_exact(LOGO_WIDTH_DOTS, height, image::imageops::FilterType::Lanczos3)
        .to_rgba8();

    let packed = pack_monochrome(&scaled);
    Ok(graphics::raster(LOGO_WIDTH_DOTS as u16, height as u16, &packed))
}

/// Binarize an RGBA image and pack it 8 pixels per byte, row-major.
///
/// Bit 7 of each byte is the leftmost pixel. Rows whose width is not a
/// multiple of 8 are padded with clear bits.
fn pack_monochrome(img: &image::RgbaImage) -> Vec<u8> {
    let width = img.width() as usize;
    let height = img.height() as usize;
    let row_bytes = width.div_ceil(8);

    let mut out = vec![0u8; row_bytes * height];
    for (y, row) in img.rows().enumerate() {
        for (x, pixel) in row.enumerate() {
            let [r, g, b, a] = pixel.0;
            let avg = (r as u16 + g as u16 + b as u16) / 3;
            if avg < BRIGHTNESS_THRESHOLD && a >= ALPHA_OPAQUE_MIN {
                out[y * row_bytes + x / 8] |= 0x80 >> (x % 8);
            }
        }
    }
    out
}

// ============================================================================
// TESTS
// ============================================================================
