//! This is the main entry point for the MediaTek log extraction tool.
//!
//! The program dumps the requested partition or memory region with mtkclient and
//! saves the printable strings it contains to the given file.

use clap::Parser;
use mtk_logs::commands::Cli;
use mtk_logs::extract::{ConsoleObserver, ShellRunner};
use mtk_logs::pipeline;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let timestamp = if cli.timestamps {
        stderrlog::Timestamp::Second
    } else {
        stderrlog::Timestamp::Off
    };
    if let Err(e) = stderrlog::new()
        .module(module_path!())
        .module("mtk_logs")
        .verbosity(cli.log_verbosity())
        .quiet(cli.quiet)
        .timestamp(timestamp)
        .init()
    {
        eprintln!("Failed to initialize logging: {e}");
    }

    if pipeline::run(&cli, ShellRunner::new(ConsoleObserver)) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
