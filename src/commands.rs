//! This module defines the command-line interface of the log extraction tool.
//!
//! The `Command` enum selects what is read from the device, and `Cli` carries
//! the options shared by both commands as well as the pstore-only ones.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::Config;
use crate::constants::{MIN_STRING_LEN, MTK_CLIENT_ARGS, MTK_CLIENT_CMD};
use crate::pstore::{HexValue, PstoreHints};

/// Represents the extraction method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Command {
    /// Bootloader logs from the expdb partition.
    Expdb,
    /// Kernel logs from the pstore memory region.
    Pstore,
}

/// mtkclient wrapper for getting bootloader or kernel logs from a MediaTek device.
#[derive(Debug, Parser)]
#[command(name = "mtk-logs", version, about, long_about = None)]
pub struct Cli {
    /// Choose extraction method: expdb (partition) or pstore (memory)
    #[arg(value_enum)]
    pub command: Command,

    /// Output file to save ASCII strings
    pub filename: PathBuf,

    /// Command used to invoke mtkclient
    #[arg(long, env = "MTKCLIENT_CMD", default_value = MTK_CLIENT_CMD)]
    pub mtkclient_cmd: String,

    /// Extra mtkclient arguments, appended verbatim
    #[arg(long, env = "MTKCLIENT_ARGS", allow_hyphen_values = true)]
    pub mtkclient_args: Option<String>,

    /// Pstore memory address [default: 0x48090000]
    #[arg(long, value_name = "HEX")]
    pub pstore_address: Option<HexValue>,

    /// Pstore memory size [default: 0xe0000]
    #[arg(long, value_name = "HEX")]
    pub pstore_size: Option<HexValue>,

    /// Auto-detect pstore address and size from expdb partition (pstore only)
    #[arg(long)]
    pub auto_detect_pstore: bool,

    /// Don't do a peek via Download Agent (use in case of issues) (pstore only)
    #[arg(long)]
    pub dont_peek_via_da: bool,

    /// Minimum length of the strings written to the output file
    #[arg(long, default_value_t = MIN_STRING_LEN)]
    pub min_length: usize,

    /// Increase logging verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Silence all log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Prefix log records with a timestamp
    #[arg(long)]
    pub timestamps: bool,
}

impl Cli {
    /// Builds the run configuration from the parsed arguments.
    pub fn config(&self) -> Config {
        let client_args = self.mtkclient_args.as_deref().unwrap_or(MTK_CLIENT_ARGS);
        Config::new(self.mtkclient_cmd.clone(), client_args)
            .with_min_string_len(self.min_length)
    }

    /// The pstore address and size given on the command line.
    pub fn pstore_overrides(&self) -> PstoreHints {
        PstoreHints::new(self.pstore_address, self.pstore_size)
    }

    /// Whether the peek should go through the Download Agent.
    pub fn peek_via_da(&self) -> bool {
        !self.dont_peek_via_da
    }

    /// Lists the pstore-only flags given alongside a command that ignores them.
    ///
    /// # Returns
    /// - An empty list for `pstore`.
    /// - The long names of the pstore-only flags that were set, for `expdb`.
    pub fn misplaced_flags(&self) -> Vec<&'static str> {
        if self.command == Command::Pstore {
            return Vec::new();
        }

        [
            ("--pstore-address", self.pstore_address.is_some()),
            ("--pstore-size", self.pstore_size.is_some()),
            ("--auto-detect-pstore", self.auto_detect_pstore),
            ("--dont-peek-via-da", self.dont_peek_via_da),
        ]
        .into_iter()
        .filter_map(|(flag, set)| set.then_some(flag))
        .collect()
    }

    /// Verbosity level for `stderrlog`: 2 (info) by default, raised by each `-v`.
    pub fn log_verbosity(&self) -> usize {
        2 + self.verbose as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("mtk-logs").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_expdb_defaults() {
        let cli = parse(&["expdb", "out.txt"]);

        assert_eq!(cli.command, Command::Expdb);
        assert_eq!(cli.filename, PathBuf::from("out.txt"));
        assert_eq!(cli.min_length, 4);
        assert!(cli.peek_via_da());
        assert!(!cli.auto_detect_pstore);
        assert_eq!(cli.pstore_overrides(), PstoreHints::default());
        assert!(cli.misplaced_flags().is_empty());
        assert_eq!(cli.log_verbosity(), 2);
    }

    #[test]
    fn test_parse_pstore_options() {
        let cli = parse(&[
            "pstore",
            "kernel.txt",
            "--pstore-address",
            "0x48090000",
            "--pstore-size",
            "0xE0000",
            "--auto-detect-pstore",
            "--dont-peek-via-da",
            "--mtkclient-args",
            "--serialport /dev/ttyUSB0",
            "-vv",
        ]);

        assert_eq!(cli.command, Command::Pstore);
        assert_eq!(
            cli.pstore_overrides(),
            PstoreHints::new(Some(HexValue(0x4809_0000)), Some(HexValue(0xe_0000)))
        );
        assert!(cli.auto_detect_pstore);
        assert!(!cli.peek_via_da());
        assert_eq!(cli.config().client_args(), "--serialport /dev/ttyUSB0");
        assert!(cli.misplaced_flags().is_empty());
        assert_eq!(cli.log_verbosity(), 4);
    }

    #[test]
    fn test_misplaced_flags_under_expdb() {
        let cli = parse(&[
            "expdb",
            "out.txt",
            "--pstore-size",
            "0x100",
            "--auto-detect-pstore",
        ]);

        assert_eq!(
            cli.misplaced_flags(),
            vec!["--pstore-size", "--auto-detect-pstore"]
        );
    }

    #[test]
    fn test_rejects_invalid_address() {
        let result =
            Cli::try_parse_from(["mtk-logs", "pstore", "out.txt", "--pstore-address", "0xnope"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_unknown_command() {
        assert!(Cli::try_parse_from(["mtk-logs", "dump", "out.txt"]).is_err());
    }

    #[test]
    fn test_config_from_cli() {
        let cli = parse(&["expdb", "out.txt", "--mtkclient-cmd", "mtk", "--min-length", "6"]);
        let config = cli.config();

        assert_eq!(config.client_cmd(), "mtk");
        assert_eq!(config.min_string_len(), 6);
    }
}
