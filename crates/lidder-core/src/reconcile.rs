//! Reconciliation of expected against observed occurrences.

use std::collections::BTreeSet;

use crate::definitions::{Definitions, LidRule};
use crate::report::{LidReport, ReportMode, RuleReport};
use crate::scanner::Observations;

/// Difference between where a rule's pattern is sanctioned and where it
/// was found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Mismatches {
    /// Observed but not sanctioned.
    pub extra: BTreeSet<String>,
    /// Sanctioned but not observed; the exception is stale.
    pub missing: BTreeSet<String>,
}

impl Mismatches {
    /// Returns true if both sets are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.extra.is_empty() && self.missing.is_empty()
    }
}

impl LidRule {
    /// Compares this rule's expected files with `actual`.
    #[must_use]
    pub fn mismatches(&self, actual: &BTreeSet<String>) -> Mismatches {
        Mismatches {
            extra: actual.difference(self.expected()).cloned().collect(),
            missing: self.expected().difference(actual).cloned().collect(),
        }
    }
}

/// Reconciles every rule of `definitions` against `observations`.
#[must_use]
pub fn reconcile(
    definitions: &Definitions,
    observations: &Observations,
    mode: ReportMode,
) -> LidReport {
    let empty = BTreeSet::new();
    let rules = definitions
        .rules()
        .iter()
        .enumerate()
        .map(|(index, rule)| {
            let actual = observations.actual(index).unwrap_or(&empty);
            RuleReport::new(rule.source(), rule.mismatches(actual))
        })
        .collect();

    LidReport {
        mode,
        rules,
        files_checked: observations.files_checked(),
    }
}
