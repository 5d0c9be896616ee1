//! # Printable-ASCII Encoding
//!
//! Converts Unicode strings to the single-byte character set the target
//! printers render reliably.
//!
//! Receipt text arrives in Spanish, so the accented letters that actually
//! occur get transliterated to their unaccented ASCII counterparts instead
//! of being dropped. Anything else above 0x7F becomes a space: degraded
//! output, never an error.

/// Encode a Unicode string as printable-ASCII bytes.
///
/// - ASCII (U+0000–U+007F): passed through as-is
/// - Spanish accented letters: transliterated (á→a, Ñ→N, ü→u, ...)
/// - Everything else above 0x7F: replaced with a space (0x20)
///
/// Pure and infallible; encoding already-safe ASCII is the identity.
///
/// ## Example
///
/// ```
/// use quetzal::protocol::encoding::encode;
///
/// assert_eq!(encode("Dirección Ñandú"), b"Direccion Nandu");
/// ```
pub fn encode(s: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(s.len());
    for ch in s.chars() {
        if (ch as u32) < 0x80 {
            out.push(ch as u8);
        } else {
            out.push(transliterate(ch));
        }
    }
    out
}

/// Map an accented character to its unaccented ASCII byte.
///
/// Returns a space for characters outside the substitution table.
fn transliterate(ch: char) -> u8 {
    match ch {
        // Lowercase acute-accented vowels
        'á' => b'a', // U+00E1
        'é' => b'e', // U+00E9
        'í' => b'i', // U+00ED
        'ó' => b'o', // U+00F3
        'ú' => b'u', // U+00FA

        // Uppercase acute-accented vowels
        'Á' => b'A', // U+00C1
        'É' => b'E', // U+00C9
        'Í' => b'I', // U+00CD
        'Ó' => b'O', // U+00D3
        'Ú' => b'U', // U+00DA

        // Eñe
        'ñ' => b'n', // U+00F1
        'Ñ' => b'N', // U+00D1

        // Diaeresis u (güe/güi)
        'ü' => b'u', // U+00FC
        'Ü' => b'U', // U+00DC

        // No representation: blank it rather than guess
        _ => b' ',
    }
}

// ============================================================================
// TESTS
// ============================================================================
