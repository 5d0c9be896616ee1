//! # Fixed-Width Layout Engine
//!
//! Line-level text layout for a monospaced paper column grid. Every
//! operation is parameterized by the paper's column width, supplied per
//! print request via [`crate::printer::PaperProfile`].
//!
//! ## Invariant
//!
//! No produced line exceeds the column width: overflow is always resolved
//! by moving content to the next line, never by truncation. The single
//! documented exception is a word longer than the width itself: it is
//! emitted whole and allowed to overflow (the printer hard-wraps it).
//!
//! Layout operates on characters; after [`crate::protocol::encoding`] every
//! character maps to exactly one byte, so character counts equal printed
//! columns.

/// Character count of a string (printed columns, not bytes).
#[inline]
fn cols(s: &str) -> usize {
    s.chars().count()
}

/// A full-width dashed separator line.
///
/// ## Example
///
/// ```
/// use quetzal::layout::rule;
///
/// assert_eq!(rule(8), "--------");
/// ```
pub fn rule(width: usize) -> String {
    "-".repeat(width)
}

/// Right-justify `right` against `left` on one line.
///
/// If both fit (`left + right <= width`), produces a single line of exactly
/// `width` columns with the gap filled by spaces. If they do not fit,
/// degrades to two lines, `left` as-is and then `right` right-aligned on
/// the next line, so neither string is ever truncated.
///
/// ## Example
///
/// ```
/// use quetzal::layout::pad_pair;
///
/// let lines = pad_pair("Fecha:", "01/01/24", 32);
/// assert_eq!(lines, vec!["Fecha:                  01/01/24".to_string()]);
/// ```
pub fn pad_pair(left: &str, right: &str, width: usize) -> Vec<String> {
    if cols(left) + cols(right) <= width {
        let gap = width - cols(left) - cols(right);
        vec![format!("{}{}{}", left, " ".repeat(gap), right)]
    } else {
        vec![left.to_string(), right_align(right, width)]
    }
}

/// Right-align a string within `width` columns (as-is when it is wider).
fn right_align(s: &str, width: usize) -> String {
    let gap = width.saturating_sub(cols(s));
    format!("{}{}", " ".repeat(gap), s)
}

/// Greedy word-wrap.
///
/// Accumulates words onto the current line while the line stays within
/// `width`; on overflow the current line is flushed and the overflowing
/// word starts the next one. Words longer than `width` are emitted whole.
/// Empty input produces no lines.
///
/// ## Example
///
/// ```
/// use quetzal::layout::wrap;
///
/// let lines = wrap("Zona 1 Ciudad de Guatemala", 12);
/// assert_eq!(lines, vec!["Zona 1", "Ciudad de", "Guatemala"]);
/// ```
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if cols(&current) + 1 + cols(word) <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Word-wrap a product name with its price right-justified on the last line.
///
/// Wraps `name` like [`wrap`], then attempts to place `price` on the final
/// line (at least one space between them). When the price does not fit it
/// moves, right-aligned, to its own following line; the name is never
/// shortened to make room.
///
/// ## Example
///
/// ```
/// use quetzal::layout::wrap_with_price;
///
/// let lines = wrap_with_price("Cargador Tipo C", "Q75.00", 32);
/// assert_eq!(lines, vec!["Cargador Tipo C           Q75.00"]);
/// ```
pub fn wrap_with_price(name: &str, price: &str, width: usize) -> Vec<String> {
    let mut lines = wrap(name, width);

    match lines.pop() {
        None => {
            // Empty name: the price stands alone.
            lines.push(right_align(price, width));
        }
        Some(last) => {
            if cols(&last) + cols(price) + 1 <= width {
                let gap = width - cols(&last) - cols(price);
                lines.push(format!("{}{}{}", last, " ".repeat(gap), price));
            } else {
                lines.push(last);
                lines.push(right_align(price, width));
            }
        }
    }
    lines
}

// ============================================================================
// TESTS
// ============================================================================
