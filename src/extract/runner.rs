//! Execution of mtkclient command lines through the system shell.

use std::io::{self, BufRead, BufReader, Read};
use std::process::Command;

use super::extract_error::ExtractError;
use crate::constants::{CLIENT_LINE_PREFIX, SHELL};
use crate::traits::{CommandRunner, LineObserver};

/// Prints every line of mtkclient output to stdout, tagged with [`CLIENT_LINE_PREFIX`].
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleObserver;

impl LineObserver for ConsoleObserver {
    fn on_line(&self, line: &str) {
        println!("{CLIENT_LINE_PREFIX} {line}");
    }
}

/// Runs command lines with `sh -c`, stdout and stderr sharing a single pipe.
///
/// The command line is handed to the shell untouched, so extra mtkclient arguments keep
/// their quoting. Both streams are merged at the descriptor level, so every command of a
/// compound line is captured.
pub struct ShellRunner<O: LineObserver> {
    observer: O,
}

impl<O: LineObserver> ShellRunner<O> {
    pub fn new(observer: O) -> Self {
        ShellRunner { observer }
    }
}

impl<O: LineObserver> CommandRunner for ShellRunner<O> {
    fn run(&self, command_line: &str) -> Result<(), ExtractError> {
        let (reader, writer) = io::pipe().map_err(ExtractError::Launch)?;
        let mut command = Command::new(SHELL);
        command
            .arg("-c")
            .arg(command_line)
            .stdout(writer.try_clone().map_err(ExtractError::Launch)?)
            .stderr(writer);
        let mut child = command.spawn().map_err(ExtractError::Launch)?;
        // Our copies of the write end must be closed for the reader to see end of stream.
        drop(command);

        let streamed = forward_lines(reader, &self.observer);

        // Reap the child even when its output could not be read.
        let status = child.wait().map_err(ExtractError::Launch)?;
        streamed.map_err(ExtractError::Stream)?;

        if status.success() {
            Ok(())
        } else {
            Err(ExtractError::Failed(status.code()))
        }
    }
}

/// Hands each line of `reader` to `observer` until end of stream.
///
/// Bytes that are not valid UTF-8 are replaced; trailing whitespace is stripped.
pub fn forward_lines<R: Read, O: LineObserver + ?Sized>(
    reader: R,
    observer: &O,
) -> io::Result<()> {
    let mut reader = BufReader::new(reader);
    let mut buffer = Vec::new();

    loop {
        buffer.clear();
        if reader.read_until(b'\n', &mut buffer)? == 0 {
            return Ok(());
        }
        let line = String::from_utf8_lossy(&buffer);
        observer.on_line(line.trim_end());
    }
}
