//! Run orchestration: scope selection, scanning, reconciliation.

use std::path::{Path, PathBuf};
use tracing::info;

use crate::definitions::Definitions;
use crate::error::LidderError;
use crate::reconcile::reconcile;
use crate::report::{LidReport, ReportMode};
use crate::scanner::{LineScanner, Observations};
use crate::utils::path_key;
use crate::walker::{SortOrder, TreeWalker};

/// What a run scans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanMode {
    /// Every accepted file under `root`.
    Tree {
        /// Directory to walk.
        root: PathBuf,
    },
    /// Only `target`, with expectations narrowed to it.
    SingleFile {
        /// File to scan.
        target: PathBuf,
    },
}

/// Runs the audit described by a set of [`Definitions`].
///
/// The auditor never mutates its definitions: each run works on its own
/// [`Observations`] (and, in single-file mode, its own narrowed copy of
/// the definitions), so running twice over an unchanged tree yields the
/// same report.
#[derive(Debug, Clone)]
pub struct Auditor {
    definitions: Definitions,
    order: Option<SortOrder>,
}

impl Auditor {
    /// Creates an auditor.
    #[must_use]
    pub fn new(definitions: Definitions) -> Self {
        Self {
            definitions,
            order: None,
        }
    }

    /// Walks directories in a fixed entry order.
    #[must_use]
    pub fn sorted(mut self, order: SortOrder) -> Self {
        self.order = Some(order);
        self
    }

    /// Returns the definitions.
    #[must_use]
    pub fn definitions(&self) -> &Definitions {
        &self.definitions
    }

    /// Picks the scan mode for an optional target file.
    ///
    /// Single-file mode is used only when `target` is given and the path
    /// filter accepts it; otherwise the whole tree under `root` is scanned.
    #[must_use]
    pub fn plan(&self, target: Option<&Path>, root: &Path) -> ScanMode {
        match target {
            Some(target) if self.definitions.should_check(&path_key(target)) => {
                ScanMode::SingleFile {
                    target: target.to_path_buf(),
                }
            }
            Some(target) => {
                info!(
                    "{} is not in scope, scanning {} instead",
                    target.display(),
                    root.display()
                );
                ScanMode::Tree {
                    root: root.to_path_buf(),
                }
            }
            None => ScanMode::Tree {
                root: root.to_path_buf(),
            },
        }
    }

    /// Scans according to `mode` and reconciles the result.
    ///
    /// # Errors
    ///
    /// Returns [`LidderError::Io`] if any directory or file cannot be read.
    /// No report is produced in that case.
    pub fn run(&self, mode: &ScanMode) -> Result<LidReport, LidderError> {
        let report = match mode {
            ScanMode::Tree { root } => self.run_tree(root)?,
            ScanMode::SingleFile { target } => self.run_single_file(target)?,
        };

        info!(
            "Audit complete: {} of {} rule(s) failing in {} file(s)",
            report.failing().len(),
            report.rules.len(),
            report.files_checked
        );

        Ok(report)
    }

    /// Scans every accepted file under `root`.
    ///
    /// # Errors
    ///
    /// Returns [`LidderError::Io`] on the first read failure.
    pub fn run_tree(&self, root: &Path) -> Result<LidReport, LidderError> {
        info!("Starting audit at {}", root.display());

        let mut walker = TreeWalker::new(root);
        if let Some(order) = self.order {
            walker = walker.sorted(order);
        }

        let mut observations = Observations::for_definitions(&self.definitions);
        walker.explore(&self.definitions, &mut observations)?;

        Ok(reconcile(&self.definitions, &observations, ReportMode::Tree))
    }

    /// Scans only `target`, expecting each pattern at most in `target`.
    ///
    /// The caller decides whether `target` is in scope; see [`Self::plan`].
    ///
    /// # Errors
    ///
    /// Returns [`LidderError::Io`] if `target` cannot be read.
    pub fn run_single_file(&self, target: &Path) -> Result<LidReport, LidderError> {
        let key = path_key(target);
        info!("Starting single-file audit of {key}");

        let mut definitions = self.definitions.clone();
        definitions.narrow_expectations(&key);

        let mut observations = Observations::for_definitions(&definitions);
        LineScanner::new(&definitions).match_file(target, &key, &mut observations)?;

        Ok(reconcile(&definitions, &observations, ReportMode::SingleFile))
    }
}
