//! # lidder-core
//!
//! Keeps a lid on discouraged code patterns.
//!
//! A configuration names content patterns ("lidded" patterns) and, for each,
//! the files where the pattern is allowed. This crate scans raw text lines
//! against those patterns and reconciles where each pattern was found with
//! where it is allowed:
//!
//! - [`LidConfig`] is the deserialized configuration (TOML or YAML)
//! - [`Definitions`] compiles it: a [`PathFilter`] and a list of [`LidRule`]s
//! - [`TreeWalker`] and [`LineScanner`] fill per-run [`Observations`]
//! - [`reconcile`] turns observations into a [`LidReport`]
//! - [`Auditor`] ties these together for tree and single-file runs
//!
//! ## Example
//!
//! ```ignore
//! use lidder_core::{Auditor, Definitions, LidConfig};
//! use std::path::Path;
//!
//! let config = LidConfig::from_file(Path::new("lidder.toml"))?;
//! let auditor = Auditor::new(Definitions::from_config(&config)?);
//!
//! let report = auditor.run(&auditor.plan(None, Path::new(".")))?;
//! print!("{}", report.format_text());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod auditor;
mod config;
mod definitions;
mod error;
mod filter;
mod reconcile;
mod report;
mod scanner;
mod walker;

/// Utility modules shared across the engine.
pub mod utils;

pub use auditor::{Auditor, ScanMode};
pub use config::{ConfigError, ConfigFormat, LidConfig, RuleSpec};
pub use definitions::{Definitions, LidRule};
pub use error::{LidderError, PatternKind};
pub use filter::{should_check, PathFilter};
pub use reconcile::{reconcile, Mismatches};
pub use report::{LidReport, ReportMode, RuleReport, FAILURE_MESSAGE, SUCCESS_MESSAGE};
pub use scanner::{LineScanner, Observations};
pub use walker::{SortOrder, TreeWalker};
