//! Construction and execution of mtkclient extraction commands.
//!
//! Two reads are supported:
//! - A dump of the `expdb` partition, which holds the bootloader logs
//! - A peek of the pstore memory region, which holds the kernel logs

use log::{error, info};
use std::path::Path;

use crate::config::Config;
use crate::pstore::PstoreConfig;
use crate::traits::CommandRunner;

/// A single read to perform on the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionRequest {
    /// Dump the `expdb` partition.
    ExpdbPartition,
    /// Peek the pstore memory region.
    PstoreMemory {
        /// Where the region lives and how large it is.
        region: PstoreConfig,
        /// Whether the peek goes through the Download Agent.
        via_da: bool,
    },
}

/// Runs mtkclient reads and reports whether they succeeded.
pub struct Extractor<R: CommandRunner> {
    runner: R,
    client_cmd: String,
    client_args: String,
}

impl<R: CommandRunner> Extractor<R> {
    /// Creates an extractor invoking the client command and extra arguments of `config`.
    pub fn new(runner: R, config: &Config) -> Self {
        Extractor {
            runner,
            client_cmd: config.client_cmd().clone(),
            client_args: config.client_args().clone(),
        }
    }

    /// Builds the shell command line performing `request`, writing the raw data to `output`.
    ///
    /// # Returns
    /// - `<cmd> r expdb <output> <args>` for a partition dump
    /// - `<cmd> [da] peek <addr> <size> --filename <output> <args>` for a memory peek
    pub fn command_line(&self, request: &ExtractionRequest, output: &Path) -> String {
        let output = shell_quote(&output.to_string_lossy());
        let mut parts: Vec<String> = vec![self.client_cmd.clone()];

        match request {
            ExtractionRequest::ExpdbPartition => {
                parts.extend(["r".into(), "expdb".into(), output]);
            }
            ExtractionRequest::PstoreMemory { region, via_da } => {
                if *via_da {
                    parts.push("da".into());
                }
                parts.extend([
                    "peek".into(),
                    region.address().to_string(),
                    region.size().to_string(),
                    "--filename".into(),
                    output,
                ]);
            }
        }
        parts.push(self.client_args.clone());

        parts
            .iter()
            .map(|p| p.trim())
            .filter(|p| !p.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Performs `request`, writing the raw data to `output`.
    ///
    /// # Returns
    /// - `true` if mtkclient exited with status zero
    /// - `false` if it could not be launched or failed; the cause is logged
    pub fn extract(&self, request: &ExtractionRequest, output: &Path) -> bool {
        let cmd = self.command_line(request, output);
        info!("Executing command: {cmd}");

        match self.runner.run(&cmd) {
            Ok(()) => true,
            Err(err) => {
                error!("{err}");
                false
            }
        }
    }
}

/// Wraps `s` in single quotes for `sh`.
fn shell_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', r"'\''"))
}
