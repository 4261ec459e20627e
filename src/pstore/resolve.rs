//! Choice of the pstore region to peek.

use log::info;

use super::detect::detect_from_expdb;
use super::region::{PstoreConfig, PstoreHints};
use crate::extract::Extractor;
use crate::traits::CommandRunner;

/// Resolves the pstore region from command-line overrides, detection and defaults.
///
/// Detection runs only when `auto_detect` is set; otherwise no extraction happens at all.
/// Each field is resolved on its own, so a detected address can be paired with a
/// default size and the other way around.
pub fn resolve_pstore_config<R: CommandRunner>(
    extractor: &Extractor<R>,
    overrides: PstoreHints,
    auto_detect: bool,
    defaults: PstoreConfig,
) -> PstoreConfig {
    let detected = if auto_detect {
        detect_from_expdb(extractor)
    } else {
        PstoreHints::default()
    };

    let region = PstoreConfig::resolve(overrides, detected, defaults);
    info!("Extracting pstore from memory ({region})");
    region
}
