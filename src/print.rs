//! # Print Orchestration
//!
//! The one call a point-of-sale caller makes: receipt data in, printed
//! receipt (or a reason string) out.
//!
//! Phases are strict: the logo is fetched and the document fully composed
//! in memory before any device interaction begins, so no composition
//! problem can ever strand an open device handle. The transport then owns
//! the handle for the rest of the call and releases it on every path.

use tracing::info;

use crate::error::QuetzalError;
use crate::printer::PaperProfile;
use crate::receipt::ReceiptData;
use crate::render::{compose, logo};
use crate::transport::{PrinterLink, Sender};

/// Print one receipt over the given link.
///
/// Atomic from the caller's perspective: either the whole receipt was
/// handed to the printer, or an error describes why. There is no partial
/// success, and a retry means calling this again from the top (the
/// already-sent bytes of a failed stream cannot be un-sent).
///
/// A logo that cannot be fetched or decoded is silently omitted; it never
/// fails the print.
pub async fn print_receipt<L>(
    data: &ReceiptData,
    paper: PaperProfile,
    link: &mut L,
) -> Result<(), QuetzalError>
where
    L: PrinterLink + ?Sized,
{
    let logo = match &data.logo_url {
        Some(url) => logo::fetch_logo(url).await,
        None => None,
    };

    let document = compose(data, paper, logo.as_deref());
    info!(
        bytes = document.len(),
        segments = document.segments().len(),
        columns = paper.columns,
        "receipt composed"
    );

    Sender::default().send(link, &document).await
}

// ============================================================================
// TESTS
// ============================================================================
