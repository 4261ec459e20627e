//! Declaration of traits reused across the code.

#[cfg(test)]
use std::cell::RefCell;

use crate::extract::extract_error::ExtractError;

/// Receives the output of the external program, one line at a time, as soon as it is produced.
pub trait LineObserver {
    fn on_line(&self, line: &str);
}

/// Runs a complete mtkclient command line.
///
/// Implementations forward every output line to their observer while the command runs
/// and report success only when the process exits with status zero.
pub trait CommandRunner {
    fn run(&self, command_line: &str) -> Result<(), ExtractError>;
}

#[cfg(test)]
impl LineObserver for RefCell<Vec<String>> {
    fn on_line(&self, line: &str) {
        self.borrow_mut().push(line.to_string());
    }
}

impl<T: LineObserver + ?Sized> LineObserver for &T {
    fn on_line(&self, line: &str) {
        (**self).on_line(line)
    }
}

impl<T: CommandRunner + ?Sized> CommandRunner for &T {
    fn run(&self, command_line: &str) -> Result<(), ExtractError> {
        (**self).run(command_line)
    }
}
