//! Compiled definitions: the path filter plus the tracked rules.
//!
//! Definitions are built once from a [`LidConfig`] and are read-only while
//! scanning. Observed occurrences live in [`crate::Observations`], owned by
//! whoever drives the scan.

use regex::bytes::Regex;
use std::collections::BTreeSet;
use tracing::debug;

use crate::config::LidConfig;
use crate::error::{LidderError, PatternKind};
use crate::filter::PathFilter;
use crate::utils::str_key;

/// One tracked pattern and the files where it is sanctioned.
#[derive(Debug, Clone)]
pub struct LidRule {
    source: String,
    pattern: Regex,
    expected: BTreeSet<String>,
}

impl LidRule {
    /// Compiles a rule. Expected paths are normalized with
    /// [`crate::utils::path_key`].
    ///
    /// # Errors
    ///
    /// Returns [`LidderError::InvalidPattern`] if `pattern` is not a valid regex.
    pub fn new<I, S>(index: usize, pattern: &str, expected: I) -> Result<Self, LidderError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let compiled = Regex::new(pattern).map_err(|source| LidderError::InvalidPattern {
            kind: PatternKind::Rule,
            index,
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self {
            source: pattern.to_string(),
            pattern: compiled,
            expected: expected.into_iter().map(|p| str_key(p.as_ref())).collect(),
        })
    }

    /// Returns the pattern as written in the configuration.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns true if the pattern occurs anywhere in `line`.
    #[must_use]
    pub fn matches(&self, line: &[u8]) -> bool {
        self.pattern.is_match(line)
    }

    /// Returns the files where the pattern is sanctioned.
    #[must_use]
    pub fn expected(&self) -> &BTreeSet<String> {
        &self.expected
    }

    /// Keeps only `target` in the expected set, and only if it was there.
    fn narrow_to(&mut self, target: &str) {
        let keep = self.expected.contains(target);
        self.expected.clear();
        if keep {
            self.expected.insert(target.to_string());
        }
    }
}

/// Fully compiled definitions for one run.
#[derive(Debug, Clone, Default)]
pub struct Definitions {
    filter: PathFilter,
    rules: Vec<LidRule>,
}

impl Definitions {
    /// Compiles every include, exclude and rule pattern of `config`.
    ///
    /// # Errors
    ///
    /// Returns the first [`LidderError::InvalidPattern`]; nothing is
    /// returned for a partially valid configuration.
    pub fn from_config(config: &LidConfig) -> Result<Self, LidderError> {
        let filter = PathFilter::new(&config.include, &config.exclude)?;
        let rules = config
            .rules
            .iter()
            .enumerate()
            .map(|(i, spec)| LidRule::new(i, &spec.pattern, &spec.expected))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            "Compiled {} include, {} exclude and {} rule pattern(s)",
            filter.include().len(),
            filter.exclude().len(),
            rules.len()
        );

        Ok(Self { filter, rules })
    }

    /// Returns true if the file at `path` is in scope for scanning.
    #[must_use]
    pub fn should_check(&self, path: &str) -> bool {
        self.filter.should_check(path)
    }

    /// Returns the path filter.
    #[must_use]
    pub fn filter(&self) -> &PathFilter {
        &self.filter
    }

    /// Returns the rules in configuration order.
    #[must_use]
    pub fn rules(&self) -> &[LidRule] {
        &self.rules
    }

    /// Narrows every rule's expectations to the single file `target`.
    ///
    /// A rule keeps `{target}` if `target` was already expected and
    /// becomes empty otherwise. Must be applied before the target is
    /// scanned.
    pub fn narrow_expectations(&mut self, target: &str) {
        let target = str_key(target);
        debug!("Narrowing expectations to {target}");
        for rule in &mut self.rules {
            rule.narrow_to(&target);
        }
    }
}
