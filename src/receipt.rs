//! # Receipt Data
//!
//! The input record for one warranty receipt ("comprobante de garantía").
//!
//! A receipt is a flat record of mostly-optional fields assembled by the
//! point-of-sale caller. Absent optional fields suppress their receipt
//! section entirely; no empty placeholders are ever printed. The record is
//! immutable for the duration of one render.

use serde::{Deserialize, Serialize};

/// Data for a single warranty receipt.
///
/// Only the primary line item (`product`, `product_price`) and the computed
/// `total` are required; everything else is optional and omitted from the
/// printed receipt when absent.
///
/// Deserializes from the JSON the point-of-sale layer hands over:
///
/// ```
/// use quetzal::receipt::ReceiptData;
///
/// let data: ReceiptData = serde_json::from_str(r#"{
///     "product": "Cargador Tipo C",
///     "product_price": 75.0,
///     "total": 75.0
/// }"#).unwrap();
/// assert!(data.logo_url.is_none());
/// assert_eq!(data.discount, 0.0);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReceiptData {
    // ===== Business identity =====
    /// URL of the store logo; fetch/decode failure simply omits the logo.
    #[serde(default)]
    pub logo_url: Option<String>,
    /// Store address, word-wrapped in the centered header.
    #[serde(default)]
    pub address: Option<String>,
    /// Store phone line for the header.
    #[serde(default)]
    pub phone: Option<String>,
    /// Warranty/footer message; a default thank-you line prints when absent.
    #[serde(default)]
    pub footer: Option<String>,

    // ===== Transaction metadata =====
    /// Sale date, already formatted by the caller (e.g. "01/06/24").
    #[serde(default)]
    pub date: Option<String>,
    /// Receipt sequence number.
    #[serde(default)]
    pub sequence: Option<u32>,

    // ===== Customer =====
    #[serde(default)]
    pub customer_name: Option<String>,
    /// National ID (DPI).
    #[serde(default)]
    pub customer_id: Option<String>,

    // ===== Line items =====
    /// Primary item name. Required.
    pub product: String,
    /// Primary item unit price in quetzales. Required.
    pub product_price: f64,
    /// Device IMEI, printed as a detail line under the item.
    #[serde(default)]
    pub imei: Option<String>,
    /// SIM ICC, printed as a detail line under the item.
    #[serde(default)]
    pub icc: Option<String>,
    /// Phone number for an activation/recharge secondary item.
    #[serde(default)]
    pub activation_phone: Option<String>,
    /// Amount of the activation/recharge secondary item.
    #[serde(default)]
    pub activation_amount: Option<f64>,

    // ===== Amounts =====
    /// Discount already applied to the total; the discount section prints
    /// only when this is greater than zero.
    #[serde(default)]
    pub discount: f64,
    /// Grand total in quetzales. Required.
    pub total: f64,
}

/// Format an amount the way it prints on the receipt.
///
/// ## Example
///
/// ```
/// use quetzal::receipt::money;
///
/// assert_eq!(money(75.0), "Q75.00");
/// assert_eq!(money(1499.5), "Q1499.50");
/// ```
pub fn money(amount: f64) -> String {
    format!("Q{:.2}", amount)
}

/// A fully-populated sample receipt for the CLI and tests.
pub fn demo(date: String) -> ReceiptData {
    ReceiptData {
        logo_url: None,
        address: Some("4a Avenida 5-55 Zona 1, Ciudad de Guatemala".to_string()),
        phone: Some("Tel: 2232-1234".to_string()),
        footer: Some(
            "Garantia de 3 meses por defectos de fabrica. Conserve este comprobante.".to_string(),
        ),
        date: Some(date),
        sequence: Some(42),
        customer_name: Some("Maria Fernanda Lopez".to_string()),
        customer_id: Some("2987 65432 0101".to_string()),
        product: "Samsung Galaxy A06 128GB Negro".to_string(),
        product_price: 1500.0,
        imei: Some("354678901234567".to_string()),
        icc: Some("8950212345678901234".to_string()),
        activation_phone: Some("5512-3456".to_string()),
        activation_amount: Some(50.0),
        discount: 100.0,
        total: 1450.0,
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_json_deserializes() {
        let data: ReceiptData =
            serde_json::from_str(r#"{"product": "Mica de vidrio", "product_price": 35.0, "total": 35.0}"#)
                .unwrap();
        assert_eq!(data.product, "Mica de vidrio");
        assert_eq!(data.discount, 0.0);
        assert!(data.sequence.is_none());
        assert!(data.activation_phone.is_none());
    }

    #[test]
    fn test_missing_required_field_is_an_error() {
        let result: Result<ReceiptData, _> = serde_json::from_str(r#"{"total": 10.0}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_money_format() {
        assert_eq!(money(0.0), "Q0.00");
        assert_eq!(money(75.0), "Q75.00");
        assert_eq!(money(1234.567), "Q1234.57");
    }

    #[test]
    fn test_demo_is_complete() {
        let data = demo("01/06/24".to_string());
        assert!(data.address.is_some());
        assert!(data.imei.is_some());
        assert!(data.discount > 0.0);
        assert_eq!(data.total, data.product_price + 50.0 - data.discount);
    }
}
