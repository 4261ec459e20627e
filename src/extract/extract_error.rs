//! Error types for running the external extraction program.

use std::io;

/// Represents errors that can occur while running mtkclient.
#[derive(thiserror::Error, Debug)]
pub enum ExtractError {
    /// The process could not be started or waited for.
    #[error("Exception while running command: {0}")]
    Launch(io::Error),
    /// Reading the process output failed.
    #[error("Failed to read command output: {0}")]
    Stream(io::Error),
    /// The process exited with a non-zero status.
    /// Contains the exit code, if the process was not terminated by a signal.
    #[error("Command failed with return code {}", describe_code(.0.as_ref()))]
    Failed(Option<i32>),
}

fn describe_code(code: Option<&i32>) -> String {
    match code {
        Some(code) => code.to_string(),
        None => String::from("none (terminated by signal)"),
    }
}
