//! # Paper Profiles
//!
//! This module defines the paper-width profiles of supported thermal
//! printers.
//!
//! ## Supported Papers
//!
//! | Paper | Columns | Raster width |
//! |-------|---------|--------------|
//! | 58mm  | 32      | 384 dots     |
//! | 80mm  | 48      | 576 dots     |
//!
//! The column count parameterizes every layout decision. It is supplied by
//! the caller per print request and never persisted.

use serde::{Deserialize, Serialize};

/// Raster width for logo images, in dots.
///
/// Fixed to the narrowest supported paper so a single logo asset prints on
/// every profile; wider paper centers it.
pub const LOGO_WIDTH_DOTS: u32 = 384;

/// # Paper Profile
///
/// The usable width of the loaded paper, in monospaced text columns at the
/// printer's fixed font.
///
/// ## Example
///
/// ```
/// use quetzal::printer::PaperProfile;
///
/// let narrow = PaperProfile::NARROW;
/// assert_eq!(narrow.columns, 32);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperProfile {
    /// Usable width in text columns.
    pub columns: usize,
}

impl PaperProfile {
    /// 58mm paper: 32 columns, the common hand-held printer size.
    pub const NARROW: Self = Self { columns: 32 };

    /// 80mm paper: 48 columns, the common counter-top printer size.
    pub const WIDE: Self = Self { columns: 48 };

    /// A profile with an explicit column count.
    pub fn new(columns: usize) -> Self {
        Self { columns }
    }

    /// Parse a profile string (CLI args).
    ///
    /// Formats:
    /// - `"58mm"` or `"narrow"` → 32 columns
    /// - `"80mm"` or `"wide"` → 48 columns
    /// - a bare number → that many columns
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "58mm" | "narrow" => Ok(Self::NARROW),
            "80mm" | "wide" => Ok(Self::WIDE),
            other => other
                .parse::<usize>()
                .map(Self::new)
                .map_err(|_| format!("Unknown paper '{}'. Use '58mm', '80mm' or a column count", s)),
        }
    }
}

impl Default for PaperProfile {
    fn default() -> Self {
        Self::NARROW
    }
}

// ============================================================================
// TESTS
// ============================================================================
