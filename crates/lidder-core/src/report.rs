//! Run results consumed by the reporting layer.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt::Write;

use crate::reconcile::Mismatches;

/// Message printed when every rule passes.
pub const SUCCESS_MESSAGE: &str = "ok\tlid on all the things, nothing to see here.";

/// Message printed after the breakdown when any rule fails.
pub const FAILURE_MESSAGE: &str = "lid test failed. sorry.";

/// How the run was scoped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReportMode {
    /// Every accepted file under a root was scanned.
    Tree,
    /// Only one target file was scanned, with narrowed expectations.
    SingleFile,
}

/// Outcome for one rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleReport {
    /// The rule's pattern as written.
    pub pattern: String,
    /// Files where the pattern was found but not expected.
    pub extra: BTreeSet<String>,
    /// Files where the pattern was expected but not found.
    pub missing: BTreeSet<String>,
}

impl RuleReport {
    /// Creates a rule report from reconciled mismatches.
    #[must_use]
    pub fn new(pattern: impl Into<String>, mismatches: Mismatches) -> Self {
        Self {
            pattern: pattern.into(),
            extra: mismatches.extra,
            missing: mismatches.missing,
        }
    }

    /// Returns true if the rule has no mismatches.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.extra.is_empty() && self.missing.is_empty()
    }
}

/// Result of one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LidReport {
    /// How the run was scoped.
    pub mode: ReportMode,
    /// One entry per rule, in configuration order.
    pub rules: Vec<RuleReport>,
    /// Number of files scanned.
    pub files_checked: usize,
}

impl LidReport {
    /// Returns true if every rule passed.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.rules.iter().all(RuleReport::passed)
    }

    /// Returns the rules with mismatches.
    #[must_use]
    pub fn failing(&self) -> Vec<&RuleReport> {
        self.rules.iter().filter(|r| !r.passed()).collect()
    }

    /// Formats the human-readable report.
    ///
    /// A passing run is the single success line. A failing run lists each
    /// failing rule and ends with the failure line.
    #[must_use]
    pub fn format_text(&self) -> String {
        if self.passed() {
            return format!("{SUCCESS_MESSAGE}\n");
        }

        let mut report = String::new();
        for rule in self.failing() {
            match self.mode {
                ReportMode::SingleFile => {
                    // A single file is either extra or missing, never both.
                    if rule.extra.is_empty() {
                        let _ = writeln!(
                            report,
                            "Lidded pattern '{}' expected but not found",
                            rule.pattern
                        );
                    } else {
                        let _ = writeln!(report, "Lidded pattern '{}' found", rule.pattern);
                    }
                }
                ReportMode::Tree => {
                    let _ = writeln!(report, "{}", rule.pattern);
                    write_paths(&mut report, "didn't expect to find:", &rule.extra);
                    write_paths(&mut report, "expected exceptions which were missing:", &rule.missing);
                }
            }
        }
        let _ = write!(report, "\n{FAILURE_MESSAGE}\n");
        report
    }
}

fn write_paths(report: &mut String, heading: &str, paths: &BTreeSet<String>) {
    if paths.is_empty() {
        return;
    }
    let _ = writeln!(report, "  {heading}");
    for path in paths {
        let _ = writeln!(report, "   - {path}");
    }
}
