//! Sequencing of one invocation: extract raw data into a temporary directory, then write
//! its printable strings to the output file.

use log::{error, info, warn};
use std::path::Path;
use tempfile::TempDir;

use crate::commands::{Cli, Command};
use crate::config::Config;
use crate::extract::{ExtractionRequest, Extractor};
use crate::pstore::{PstoreHints, resolve_pstore_config};
use crate::scanner::save_ascii_strings;
use crate::traits::CommandRunner;

/// Runs the extraction selected on the command line.
///
/// Pstore-only flags given with `expdb` are reported and ignored.
pub fn run<R: CommandRunner>(cli: &Cli, runner: R) -> bool {
    for flag in cli.misplaced_flags() {
        warn!("{flag} is valid only with pstore command, ignoring");
    }

    info!("Output file: {}", cli.filename.display());
    let config = cli.config();
    let extractor = Extractor::new(runner, &config);

    match cli.command {
        Command::Expdb => extract_expdb(&extractor, &config, &cli.filename),
        Command::Pstore => extract_pstore(
            &extractor,
            &config,
            &cli.filename,
            cli.pstore_overrides(),
            cli.auto_detect_pstore,
            cli.peek_via_da(),
        ),
    }
}

/// Extracts the `expdb` partition and writes its strings to `output`.
pub fn extract_expdb<R: CommandRunner>(
    extractor: &Extractor<R>,
    config: &Config,
    output: &Path,
) -> bool {
    info!("Extracting expdb partition...");

    if extract_strings(extractor, config, &ExtractionRequest::ExpdbPartition, "expdb.bin", output) {
        true
    } else {
        error!("Failed to extract expdb partition");
        false
    }
}

/// Peeks the pstore region and writes its strings to `output`.
///
/// The region comes from `overrides`, detection in `expdb` when `auto_detect` is set,
/// and the configured defaults, in that order of precedence.
pub fn extract_pstore<R: CommandRunner>(
    extractor: &Extractor<R>,
    config: &Config,
    output: &Path,
    overrides: PstoreHints,
    auto_detect: bool,
    via_da: bool,
) -> bool {
    let region = resolve_pstore_config(extractor, overrides, auto_detect, config.pstore_defaults());
    let request = ExtractionRequest::PstoreMemory { region, via_da };

    if extract_strings(extractor, config, &request, "pstore.bin", output) {
        true
    } else {
        error!("Failed to extract pstore from memory");
        false
    }
}

/// Performs `request` into a scratch file named `raw_name`, then saves its strings.
///
/// The scratch directory is removed when this returns, whatever the outcome.
fn extract_strings<R: CommandRunner>(
    extractor: &Extractor<R>,
    config: &Config,
    request: &ExtractionRequest,
    raw_name: &str,
    output: &Path,
) -> bool {
    let tmp = match TempDir::new() {
        Ok(tmp) => tmp,
        Err(e) => {
            error!("Failed to create a temporary directory: {e}");
            return false;
        }
    };
    let raw = tmp.path().join(raw_name);

    if !extractor.extract(request, &raw) {
        return false;
    }

    match save_ascii_strings(&raw, output, config.min_string_len()) {
        Ok(count) => {
            info!("Extracted {count} strings");
            true
        }
        Err(err) => {
            error!("{err}");
            false
        }
    }
}
