//! Extraction of printable ASCII runs from binary data.
//!
//! A run is a maximal sequence of bytes in `0x20..=0x7E`. Runs shorter than the minimum
//! length are dropped. Runs never overlap and are reported in the order they appear.

use log::info;
use std::fs;
use std::path::Path;

use super::scan_error::ScanError;

/// Whether `byte` is printable ASCII (space through tilde).
pub fn is_printable(byte: u8) -> bool {
    (0x20..=0x7E).contains(&byte)
}

/// Iterator over the printable runs of a buffer, left to right.
#[derive(Debug, Clone)]
pub struct AsciiStrings<'a> {
    data: &'a [u8],
    pos: usize,
    min_len: usize,
}

impl<'a> Iterator for AsciiStrings<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        while self.pos < self.data.len() {
            let rest = &self.data[self.pos..];
            let Some(skip) = rest.iter().position(|&b| is_printable(b)) else {
                self.pos = self.data.len();
                break;
            };

            let start = self.pos + skip;
            let len = self.data[start..]
                .iter()
                .position(|&b| !is_printable(b))
                .unwrap_or(self.data.len() - start);
            self.pos = start + len;

            if len < self.min_len {
                continue;
            }
            // Undecodable runs are skipped.
            if let Ok(s) = std::str::from_utf8(&self.data[start..start + len]) {
                return Some(s);
            }
        }

        None
    }
}

/// Lazily scans `data` for printable runs of at least `min_len` bytes.
pub fn ascii_strings(data: &[u8], min_len: usize) -> AsciiStrings<'_> {
    AsciiStrings {
        data,
        pos: 0,
        min_len,
    }
}

/// Collects the printable runs of at least `min_len` bytes found in `data`.
pub fn extract_ascii_strings(data: &[u8], min_len: usize) -> Vec<String> {
    ascii_strings(data, min_len).map(str::to_string).collect()
}

/// Formats the report written to the output file: a header naming `source`, then one
/// string per line.
pub fn render_report<S: AsRef<str>>(source: &Path, strings: &[S]) -> String {
    let header = format!("=== ASCII Strings from {} ===", source.display());

    std::iter::once(header.as_str())
        .chain(strings.iter().map(|s| s.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Scans the binary at `source` and writes the string report to `output`.
///
/// # Returns
/// - `Ok(n)`: the number of strings written
/// - `Err(ScanError)`: if `source` cannot be read or `output` cannot be written
pub fn save_ascii_strings(
    source: &Path,
    output: &Path,
    min_len: usize,
) -> Result<usize, ScanError> {
    let data = fs::read(source).map_err(|source_err| ScanError::Read {
        path: source.to_path_buf(),
        source: source_err,
    })?;

    let strings: Vec<&str> = ascii_strings(&data, min_len).collect();
    fs::write(output, render_report(source, &strings)).map_err(|err| ScanError::Write {
        path: output.to_path_buf(),
        source: err,
    })?;

    info!("ASCII strings saved to {}", output.display());
    Ok(strings.len())
}
