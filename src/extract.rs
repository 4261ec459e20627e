//! Retrieval of raw data from the device through mtkclient.

pub mod extract_error;
pub mod extractor;
pub mod runner;

pub use extract_error::ExtractError;
pub use extractor::{ExtractionRequest, Extractor};
pub use runner::{ConsoleObserver, ShellRunner};
