//! Printable ASCII string scanning, in the spirit of `strings(1)`.

pub mod ascii;
pub mod scan_error;

pub use ascii::{
    AsciiStrings, ascii_strings, extract_ascii_strings, render_report, save_ascii_strings,
};
pub use scan_error::ScanError;
