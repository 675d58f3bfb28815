//! Dowser - string-presence coverage checker
//!
//! Dowser reads a list of target strings (from a Google spreadsheet column or
//! a local manifest file) and reports the ones that appear in no source file
//! under a directory tree. Typical use: finding localization keys that were
//! defined but never used.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: String resolution, file enumeration, scanning and reporting
//! - `error`: Typed errors raised by the core engine
//! - `logging`: Diagnostic logging setup
//! - `mcp`: Model Context Protocol server implementation
//! - `sheets`: Google Sheets string provider

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod mcp;
pub mod sheets;
