//! # mews-tools
//!
//! Maintenance utilities for the MEWS frontend's lookup data. Two jobs, both
//! single-pass and stateless:
//!
//! - **lists**: print the hard-coded category → options tables with each
//!   options list sorted, for manual inspection.
//! - **normalize**: rewrite the fixed set of lookup data files on disk so
//!   their array contents (and object keys) are alphabetically sorted.
//!
//! ## Layering
//!
//! The crate follows a library-first split:
//!
//! - CLI layer (`main.rs` + `args.rs`): argument parsing and terminal
//!   output. The only place that knows about stdout or exit codes.
//! - Command layer ([`commands`]): the batch logic. Returns structured
//!   [`commands::CmdResult`] values; never prints.
//! - Core transforms ([`json`], [`script`], [`lists`]): pure functions over
//!   parsed JSON, raw text, and the static tables.
//!
//! "Sorted" always means ascending lexicographic, case-sensitive, comparing
//! by code point.
//!
//! ## Module overview
//!
//! - [`commands`]: the `lists` and `normalize` commands
//! - [`json`]: sorting transform for JSON lookup documents
//! - [`script`]: textual sorter for array literals embedded in JS source
//! - [`lists`]: the hard-coded category tables
//! - [`error`]: error types

pub mod commands;
pub mod error;
pub mod json;
pub mod lists;
pub mod script;
