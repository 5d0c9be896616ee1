//! # Receipt Composer
//!
//! Assembles a [`ReceiptData`] record into the full ESC/POS command stream
//! for one warranty receipt.
//!
//! Composition is a strictly sequential pass over the receipt's sections;
//! nothing loops back. Optional sections whose data is absent are
//! suppressed entirely, never printed as empty placeholders. Every section
//! re-asserts its alignment and emphasis directives at each boundary where
//! they differ from the previous section, rather than trusting printer
//! state to persist.
//!
//! The whole document is built in memory before any device interaction
//! begins: the composer has no failure modes of its own, and the transport
//! never holds a device handle while composition runs.

use crate::layout;
use crate::printer::PaperProfile;
use crate::protocol::{commands, text};
use crate::receipt::{ReceiptData, money};
use crate::render::buffer::{CommandBuffer, Document};

/// Title printed bold between the header separators.
const TITLE: &str = "COMPROBANTE DE GARANTIA";

/// Footer used when the receipt carries no message of its own.
const DEFAULT_FOOTER: &str = "Gracias por su compra";

/// Blank lines fed before the cut so the total clears the tear bar.
const TRAILING_FEED_LINES: u8 = 4;

/// Compose a receipt into its printable document.
///
/// `logo` is the pre-rasterized `GS v 0` block from
/// [`crate::render::logo::fetch_logo`], or `None` to omit the logo section.
/// The raster block is flushed as its own segment to bound the size of a
/// single transport write; the text body forms the second segment.
pub fn compose(data: &ReceiptData, paper: PaperProfile, logo: Option<&[u8]>) -> Document {
    let w = paper.columns;
    let mut doc = Document::new();
    let mut buf = CommandBuffer::new();

    // 1. Reset printer state, select the character table.
    buf.cmd(&commands::init());
    buf.cmd(&commands::charset(0));

    // 2. Logo block, flushed separately.
    if let Some(block) = logo {
        buf.cmd(&text::align_center());
        buf.cmd(block);
        doc.push_segment(buf.flush());
    }

    // 3. Centered header: address, phone, title between separators.
    buf.cmd(&text::align_center());
    if let Some(address) = &data.address {
        for line in layout::wrap(address, w) {
            buf.line(&line);
        }
    }
    if let Some(phone) = &data.phone {
        for line in layout::wrap(phone, w) {
            buf.line(&line);
        }
    }
    buf.line(&layout::rule(w));
    buf.cmd(&text::bold_on());
    buf.line(TITLE);
    buf.cmd(&text::bold_off());
    buf.line(&layout::rule(w));

    // 4. Metadata pairs.
    buf.cmd(&text::align_left());
    if data.date.is_some() || data.sequence.is_some() {
        if let Some(date) = &data.date {
            for line in layout::pad_pair("Fecha:", date, w) {
                buf.line(&line);
            }
        }
        if let Some(sequence) = data.sequence {
            for line in layout::pad_pair("Correlativo:", &sequence.to_string(), w) {
                buf.line(&line);
            }
        }
        buf.line(&layout::rule(w));
    }

    // 5. Customer block.
    if data.customer_name.is_some() || data.customer_id.is_some() {
        buf.line("Cliente:");
        if let Some(name) = &data.customer_name {
            for line in layout::wrap(name, w) {
                buf.line(&line);
            }
        }
        if let Some(id) = &data.customer_id {
            for line in layout::wrap(&format!("DPI: {}", id), w) {
                buf.line(&line);
            }
        }
        buf.line(&layout::rule(w));
    }

    // 6. Line items.
    buf.cmd(&text::bold_on());
    for line in layout::pad_pair("Producto", "Total", w) {
        buf.line(&line);
    }
    buf.cmd(&text::bold_off());
    for line in layout::wrap_with_price(&data.product, &money(data.product_price), w) {
        buf.line(&line);
    }
    if let Some(imei) = &data.imei {
        for line in layout::wrap(&format!("IMEI: {}", imei), w) {
            buf.line(&line);
        }
    }
    if let Some(icc) = &data.icc {
        for line in layout::wrap(&format!("ICC: {}", icc), w) {
            buf.line(&line);
        }
    }
    if let (Some(phone), Some(amount)) = (&data.activation_phone, data.activation_amount) {
        for line in layout::pad_pair(&format!("Recarga {}", phone), &money(amount), w) {
            buf.line(&line);
        }
    }
    buf.line(&layout::rule(w));

    // 7. Discount, only when one applies.
    if data.discount > 0.0 {
        buf.cmd(&text::bold_on());
        for line in layout::pad_pair("Descuento:", &format!("-{}", money(data.discount)), w) {
            buf.line(&line);
        }
        buf.cmd(&text::bold_off());
        buf.line(&layout::rule(w));
    }

    // 8. Total, double height, then restore normal text mode.
    buf.cmd(&text::double_height_on());
    buf.cmd(&text::bold_on());
    for line in layout::pad_pair("TOTAL", &money(data.total), w) {
        buf.line(&line);
    }
    buf.cmd(&text::bold_off());
    buf.cmd(&text::double_height_off());
    buf.line(&layout::rule(w));

    // 9. Centered footer.
    buf.cmd(&text::align_center());
    let footer = data.footer.as_deref().unwrap_or(DEFAULT_FOOTER);
    for line in layout::wrap(footer, w) {
        buf.line(&line);
    }

    // 10. Clear the tear bar and cut.
    buf.cmd(&commands::feed_lines(TRAILING_FEED_LINES));
    buf.cmd(&commands::cut());

    doc.push_segment(buf.flush());
    doc
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::receipt::demo;

    fn minimal() -> ReceiptData {
        ReceiptData {
            logo_url: None,
            address: None,
            phone: None,
            footer: None,
            date: None,
            sequence: None,
            customer_name: None,
            customer_id: None,
            product: "Cargador Tipo C".to_string(),
            product_price: 75.0,
            imei: None,
            icc: None,
            activation_phone: None,
            activation_amount: None,
            discount: 0.0,
            total: 75.0,
        }
    }

    fn contains(haystack: &[u8], needle: &[u8]) -> bool {
        haystack.windows(needle.len()).any(|w| w == needle)
    }

    #[test]
    fn test_starts_with_init_and_charset() {
        let doc = compose(&minimal(), PaperProfile::NARROW, None);
        let bytes = doc.to_bytes();
        assert_eq!(&bytes[0..5], &[0x1B, 0x40, 0x1B, 0x74, 0x00]);
    }

    #[test]
    fn test_ends_with_feed_and_cut() {
        let doc = compose(&minimal(), PaperProfile::NARROW, None);
        let bytes = doc.to_bytes();
        assert!(bytes.ends_with(&[0x1B, 0x64, 0x04, 0x1D, 0x56, 0x42, 0x00]));
    }

    #[test]
    fn test_no_logo_means_single_segment() {
        let doc = compose(&minimal(), PaperProfile::NARROW, None);
        assert_eq!(doc.segments().len(), 1);
    }

    #[test]
    fn test_logo_is_its_own_leading_segment() {
        let block = vec![0x1D, 0x76, 0x30, 0x00, 0x01, 0x00, 0x01, 0x00, 0xFF];
        let doc = compose(&minimal(), PaperProfile::NARROW, Some(&block));
        assert_eq!(doc.segments().len(), 2);
        // First segment: init, charset, center, raster block
        assert!(doc.segments()[0].ends_with(&block));
        assert!(contains(&doc.segments()[0], &[0x1B, 0x61, 0x01]));
        // Second segment carries the title, not the raster
        assert!(contains(&doc.segments()[1], TITLE.as_bytes()));
        assert!(!contains(&doc.segments()[1], &block));
    }

    #[test]
    fn test_title_is_bold() {
        let doc = compose(&minimal(), PaperProfile::NARROW, None);
        let bytes = doc.to_bytes();
        let mut bold_title = Vec::new();
        bold_title.extend([0x1B, 0x45, 0x01]);
        bold_title.extend(TITLE.as_bytes());
        assert!(contains(&bytes, &bold_title));
    }

    #[test]
    fn test_zero_discount_suppresses_section() {
        let doc = compose(&minimal(), PaperProfile::NARROW, None);
        assert!(!contains(&doc.to_bytes(), b"Descuento:"));
    }

    #[test]
    fn test_positive_discount_prints_negative_signed() {
        let mut data = minimal();
        data.discount = 100.0;
        let doc = compose(&data, PaperProfile::NARROW, None);
        let bytes = doc.to_bytes();
        assert!(contains(&bytes, b"Descuento:"));
        assert!(contains(&bytes, b"-Q100.00"));
    }

    #[test]
    fn test_total_is_double_height_then_restored() {
        let doc = compose(&minimal(), PaperProfile::NARROW, None);
        let bytes = doc.to_bytes();
        let on = bytes
            .windows(3)
            .position(|w| w == [0x1D, 0x21, 0x01])
            .expect("double height on");
        let off = bytes
            .windows(3)
            .rposition(|w| w == [0x1D, 0x21, 0x00])
            .expect("double height off");
        let total = bytes
            .windows(5)
            .position(|w| w == b"TOTAL")
            .expect("total label");
        assert!(on < total && total < off);
    }

    #[test]
    fn test_absent_metadata_suppresses_pairs() {
        let doc = compose(&minimal(), PaperProfile::NARROW, None);
        let bytes = doc.to_bytes();
        assert!(!contains(&bytes, b"Fecha:"));
        assert!(!contains(&bytes, b"Correlativo:"));
        assert!(!contains(&bytes, b"Cliente:"));
    }

    #[test]
    fn test_default_footer_when_none_supplied() {
        let doc = compose(&minimal(), PaperProfile::NARROW, None);
        assert!(contains(&doc.to_bytes(), DEFAULT_FOOTER.as_bytes()));
    }

    #[test]
    fn test_full_receipt_prints_every_section() {
        let data = demo("01/06/24".to_string());
        let doc = compose(&data, PaperProfile::WIDE, None);
        let bytes = doc.to_bytes();
        for needle in [
            b"Fecha:".as_slice(),
            b"Correlativo:",
            b"Cliente:",
            b"DPI: 2987 65432 0101",
            b"IMEI: 354678901234567",
            b"ICC: 8950212345678901234",
            b"Recarga 5512-3456",
            b"Descuento:",
            b"TOTAL",
        ] {
            assert!(contains(&bytes, needle), "missing section {:?}", needle);
        }
    }

    #[test]
    fn test_text_is_transliterated() {
        let mut data = minimal();
        data.address = Some("Dirección Ñandú".to_string());
        let doc = compose(&data, PaperProfile::NARROW, None);
        let bytes = doc.to_bytes();
        assert!(contains(&bytes, b"Direccion Nandu"));
        assert!(!contains(&bytes, "ó".as_bytes()));
        assert!(!contains(&bytes, "Ñ".as_bytes()));
    }
}
