//! Detection of the pstore region from the configuration text stored in `expdb`.
//!
//! The bootloader leaves strings such as `pstore_addr: 0x48090000` and
//! `pstore_size: 0xe0000` in the partition. They are looked up in the printable
//! strings of a fresh `expdb` dump.

use log::{error, info, warn};
use regex::Regex;
use std::fs;
use std::sync::LazyLock;
use tempfile::TempDir;

use super::region::{HexValue, PstoreHints};
use crate::constants::MIN_STRING_LEN;
use crate::extract::{ExtractionRequest, Extractor};
use crate::scanner::ascii_strings;
use crate::traits::CommandRunner;

static ADDR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)pstore_addr[:\s]*0x([0-9a-f]+)").expect("valid regex"));

static SIZE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)pstore_size[:\s]*0x([0-9a-f]+)").expect("valid regex"));

/// Returns the value captured by `pattern` in `s`, if any.
///
/// A value too large for 64 bits is reported and ignored.
fn capture_hex(pattern: &Regex, key: &str, s: &str) -> Option<HexValue> {
    let digits = pattern.captures(s)?.get(1)?.as_str();
    match u64::from_str_radix(digits, 16) {
        Ok(value) => Some(HexValue(value)),
        Err(e) => {
            warn!("Ignoring {key}: 0x{digits} ({e})");
            None
        }
    }
}

/// Searches the printable strings of `data` for the pstore address and size.
///
/// Every string is checked against both patterns; a later hit replaces an earlier one
/// for the same key. The search stops as soon as both keys have been seen.
pub fn find_pstore_hints(data: &[u8]) -> PstoreHints {
    let mut hints = PstoreHints::default();

    for s in ascii_strings(data, MIN_STRING_LEN) {
        if let Some(address) = capture_hex(&ADDR_PATTERN, "pstore_addr", s) {
            info!("Found pstore_addr: {address}");
            hints.address = Some(address);
        }
        if let Some(size) = capture_hex(&SIZE_PATTERN, "pstore_size", s) {
            info!("Found pstore_size: {size}");
            hints.size = Some(size);
        }

        if hints.is_complete() {
            break;
        }
    }

    hints
}

/// Dumps `expdb` into a temporary directory and searches it for pstore hints.
///
/// Any failure is logged and yields empty hints, leaving the caller to its defaults.
/// The temporary directory is removed on every path.
pub fn detect_from_expdb<R: CommandRunner>(extractor: &Extractor<R>) -> PstoreHints {
    let tmp = match TempDir::new() {
        Ok(tmp) => tmp,
        Err(e) => {
            error!("Failed to create a temporary directory: {e}");
            return PstoreHints::default();
        }
    };
    let raw_expdb = tmp.path().join("expdb.bin");
    info!("Extracting expdb partition to detect pstore configuration...");

    if !extractor.extract(&ExtractionRequest::ExpdbPartition, &raw_expdb) {
        error!("Failed to extract expdb for pstore detection");
        return PstoreHints::default();
    }

    let data = match fs::read(&raw_expdb) {
        Ok(data) => data,
        Err(e) => {
            error!("Error reading expdb file for pstore detection: {e}");
            return PstoreHints::default();
        }
    };

    let hints = find_pstore_hints(&data);
    match (hints.address, hints.size) {
        (Some(_), Some(_)) => info!("Successfully detected pstore configuration from expdb"),
        (Some(_), None) => info!("Found address but missing size, using default size"),
        (None, Some(_)) => info!("Found size but missing address, using default address"),
        (None, None) => info!("No pstore configuration found, using defaults"),
    }

    hints
}
