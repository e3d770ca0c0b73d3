//! Check command implementation.

use anyhow::{Context, Result};
use lidder_core::{Auditor, Definitions, SortOrder};
use std::path::Path;

use crate::config_resolver::ConfigSource;
use crate::OutputFormat;

/// Exit status when the audit completed and at least one rule failed.
pub const POLICY_FAILURE_EXIT_CODE: i32 = 2;

/// Runs the check command.
///
/// Returns whether every rule passed. Configuration and IO failures are
/// returned as errors.
pub fn run(
    file: Option<&Path>,
    root: &Path,
    format: OutputFormat,
    source: &ConfigSource,
) -> Result<bool> {
    let config = source.load()?;
    let definitions = Definitions::from_config(&config).context("Invalid configuration")?;
    let auditor = Auditor::new(definitions).sorted(SortOrder::Ascending);

    let mode = auditor.plan(file, root);
    tracing::info!(
        "Checking {:?} with {} rule(s)",
        mode,
        auditor.definitions().rules().len()
    );

    let report = auditor.run(&mode).context("Check failed")?;

    super::output::print(&report, format)?;

    Ok(report.passed())
}
