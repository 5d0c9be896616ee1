//! # Bluetooth LE Printer Link
//!
//! [`PrinterLink`] implementation over Bluetooth LE GATT.
//!
//! ## Service Profile
//!
//! Generic ESC/POS Bluetooth printers expose a fixed GATT profile:
//!
//! | Role | UUID |
//! |------|------|
//! | Print service | `000018f0-0000-1000-8000-00805f9b34fb` |
//! | Write characteristic | `00002af1-0000-1000-8000-00805f9b34fb` |
//!
//! Both identifiers are constants of the hardware class; compatible
//! firmware always carries them.
//!
//! ## Discovery
//!
//! These printers rarely advertise a consistent name, so the scan accepts
//! any discoverable device and selects the first one advertising the print
//! service (or the device matching an explicit name/address hint). Absence
//! of a Bluetooth adapter is a non-retryable capability error; an empty
//! scan is retryable by re-invoking the whole print operation.
//!
//! ## Writes
//!
//! Chunks are written with response so each write is acknowledged before
//! the next is issued; the characteristic itself guarantees no ordering.

use std::time::Duration;

use async_trait::async_trait;
use btleplug::api::{Central, Characteristic, Manager as _, Peripheral as _, ScanFilter, WriteType};
use btleplug::platform::{Manager, Peripheral};
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::QuetzalError;
use crate::transport::PrinterLink;

/// GATT print service advertised by compatible printers.
pub const PRINT_SERVICE_UUID: Uuid = Uuid::from_u128(0x000018f0_0000_1000_8000_00805f9b34fb);

/// GATT write characteristic for print data.
pub const WRITE_CHARACTERISTIC_UUID: Uuid = Uuid::from_u128(0x00002af1_0000_1000_8000_00805f9b34fb);

/// How long the scan collects advertisements before selecting a device.
const SCAN_WINDOW: Duration = Duration::from_secs(5);

/// # Bluetooth LE Printer Link
///
/// Owns the device handle for exactly one print job. Each job performs its
/// own discovery; handles are never cached or reused across calls.
pub struct BleLink {
    device_hint: Option<String>,
    scan_window: Duration,
    peripheral: Option<Peripheral>,
    write_char: Option<Characteristic>,
}

impl BleLink {
    /// A link that selects the first printer advertising the print service.
    pub fn new() -> Self {
        Self {
            device_hint: None,
            scan_window: SCAN_WINDOW,
            peripheral: None,
            write_char: None,
        }
    }

    /// A link that selects the device whose name or address matches `hint`.
    pub fn with_device(hint: impl Into<String>) -> Self {
        Self {
            device_hint: Some(hint.into()),
            ..Self::new()
        }
    }

    /// Set the scan window. Default is 5 seconds.
    pub fn set_scan_window(&mut self, window: Duration) {
        self.scan_window = window;
    }

    /// Whether `peripheral` is the device this link should print to.
    async fn matches(&self, peripheral: &Peripheral) -> bool {
        let Ok(Some(props)) = peripheral.properties().await else {
            return false;
        };
        match &self.device_hint {
            Some(hint) => {
                let hint = normalize_device_id(hint);
                let by_name = props
                    .local_name
                    .as_deref()
                    .is_some_and(|name| normalize_device_id(name) == hint);
                by_name || normalize_device_id(&props.address.to_string()) == hint
            }
            None => props.services.contains(&PRINT_SERVICE_UUID),
        }
    }
}

impl Default for BleLink {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PrinterLink for BleLink {
    async fn connect(&mut self) -> Result<(), QuetzalError> {
        // Discovering: an absent adapter is a capability error, not a
        // failed scan.
        let manager = Manager::new()
            .await
            .map_err(|e| QuetzalError::BluetoothUnavailable(e.to_string()))?;
        let adapter = manager
            .adapters()
            .await
            .map_err(|e| QuetzalError::BluetoothUnavailable(e.to_string()))?
            .into_iter()
            .next()
            .ok_or_else(|| {
                QuetzalError::BluetoothUnavailable("no Bluetooth adapter present".to_string())
            })?;

        info!(window_secs = self.scan_window.as_secs(), "scanning for printers");
        adapter
            .start_scan(ScanFilter::default())
            .await
            .map_err(|e| QuetzalError::Discovery(format!("Scan failed: {}", e)))?;
        tokio::time::sleep(self.scan_window).await;
        let _ = adapter.stop_scan().await;

        let peripherals = adapter
            .peripherals()
            .await
            .map_err(|e| QuetzalError::Discovery(format!("Scan failed: {}", e)))?;

        let mut target = None;
        for peripheral in peripherals {
            if self.matches(&peripheral).await {
                target = Some(peripheral);
                break;
            }
        }
        let peripheral = target.ok_or_else(|| {
            QuetzalError::Discovery(match &self.device_hint {
                Some(hint) => format!("Printer '{}' not found", hint),
                None => "No compatible printer found".to_string(),
            })
        })?;

        // Connected
        peripheral
            .connect()
            .await
            .map_err(|e| QuetzalError::Connection(format!("Connect failed: {}", e)))?;
        // Hold the handle from this point on, so a failed service
        // resolution still reaches disconnect.
        self.peripheral = Some(peripheral.clone());
        debug!("connected, resolving print service");

        // ServiceBound
        peripheral
            .discover_services()
            .await
            .map_err(|e| QuetzalError::Connection(format!("Service discovery failed: {}", e)))?;
        let write_char = peripheral
            .characteristics()
            .into_iter()
            .find(|c| c.uuid == WRITE_CHARACTERISTIC_UUID)
            .ok_or_else(|| {
                QuetzalError::Connection("Write characteristic 2AF1 not found".to_string())
            })?;

        info!("print service bound");
        self.write_char = Some(write_char);
        Ok(())
    }

    async fn write_chunk(&mut self, chunk: &[u8]) -> Result<(), QuetzalError> {
        let (peripheral, write_char) = match (&self.peripheral, &self.write_char) {
            (Some(p), Some(c)) => (p, c),
            _ => return Err(QuetzalError::Transmission("not connected".to_string())),
        };
        peripheral
            .write(write_char, chunk, WriteType::WithResponse)
            .await
            .map_err(|e| QuetzalError::Transmission(format!("Chunk write failed: {}", e)))
    }

    async fn disconnect(&mut self) -> Result<(), QuetzalError> {
        self.write_char = None;
        if let Some(peripheral) = self.peripheral.take() {
            peripheral
                .disconnect()
                .await
                .map_err(|e| QuetzalError::Connection(format!("Disconnect failed: {}", e)))?;
            info!("disconnected");
        }
        Ok(())
    }
}

/// Normalize a device name/address for comparison: alphanumerics only,
/// lowercased.
fn normalize_device_id(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

// ============================================================================
// TESTS
// ============================================================================
