//!
//! mtk_logs: A library and CLI for retrieving logs from MediaTek devices through mtkclient.
//!
//! This crate provides tools for:
//! - Dumping the `expdb` partition, which holds the bootloader logs
//! - Peeking the pstore memory region, which holds the kernel logs
//! - Detecting the pstore region from the configuration text stored in `expdb`
//! - Extracting the printable ASCII strings of the retrieved binaries
//!
//! The external program is reached through the [`traits::CommandRunner`] seam, so the
//! library can be driven by the real shell runner or by a scripted one.
//!
//! # Re-exports
//! - [`Config`]: Settings of one invocation
//! - [`Extractor`]: Runs mtkclient reads
//! - [`PstoreConfig`]: A complete pstore region

pub mod commands;
pub mod config;
pub mod constants;
pub mod extract;
pub mod pipeline;
pub mod pstore;
pub mod scanner;
pub mod traits;

/// Settings of one invocation (see [`config::Config`]).
pub use crate::config::Config;
/// Runs mtkclient reads (see [`extract::Extractor`]).
pub use crate::extract::Extractor;
/// A complete pstore region (see [`pstore::PstoreConfig`]).
pub use crate::pstore::PstoreConfig;
