//! Line scanning and the per-run occurrence state.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, trace};

use crate::definitions::Definitions;
use crate::error::LidderError;

/// Files where each rule's pattern was observed during one run.
///
/// Indexed by rule position in [`Definitions::rules`]. Sets only grow.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Observations {
    actual: Vec<BTreeSet<String>>,
    files_checked: usize,
}

impl Observations {
    /// Creates empty observations sized for `definitions`.
    #[must_use]
    pub fn for_definitions(definitions: &Definitions) -> Self {
        Self {
            actual: vec![BTreeSet::new(); definitions.rules().len()],
            files_checked: 0,
        }
    }

    /// Records that rule `rule` matched in `path`.
    pub fn record(&mut self, rule: usize, path: &str) {
        if let Some(files) = self.actual.get_mut(rule) {
            if !files.contains(path) {
                files.insert(path.to_string());
            }
        }
    }

    /// Returns the files where rule `rule` was observed.
    #[must_use]
    pub fn actual(&self, rule: usize) -> Option<&BTreeSet<String>> {
        self.actual.get(rule)
    }

    /// Returns the number of files scanned.
    #[must_use]
    pub fn files_checked(&self) -> usize {
        self.files_checked
    }
}

/// Matches file contents against every rule of a [`Definitions`].
#[derive(Debug, Clone, Copy)]
pub struct LineScanner<'a> {
    definitions: &'a Definitions,
}

impl<'a> LineScanner<'a> {
    /// Creates a scanner over `definitions`.
    #[must_use]
    pub fn new(definitions: &'a Definitions) -> Self {
        Self { definitions }
    }

    /// Tests every rule against one line, recording `key` for each match.
    ///
    /// Rules are independent: one rule matching does not stop the others.
    pub fn match_line(&self, key: &str, line: &[u8], observations: &mut Observations) {
        for (index, rule) in self.definitions.rules().iter().enumerate() {
            if rule.matches(line) {
                trace!("{key}: matched '{}'", rule.source());
                observations.record(index, key);
            }
        }
    }

    /// Scans a reader line by line.
    ///
    /// Line terminators (`\n`, `\r\n`) are stripped before matching. A
    /// final line without a terminator is still scanned.
    ///
    /// # Errors
    ///
    /// Returns the first read error.
    pub fn match_reader<R: BufRead>(
        &self,
        key: &str,
        mut reader: R,
        observations: &mut Observations,
    ) -> std::io::Result<()> {
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                return Ok(());
            }
            self.match_line(key, strip_terminator(&buf), observations);
        }
    }

    /// Opens and scans the file at `path`, recording matches under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`LidderError::Io`] if the file cannot be opened or read.
    pub fn match_file(
        &self,
        path: &Path,
        key: &str,
        observations: &mut Observations,
    ) -> Result<(), LidderError> {
        debug!("Scanning: {key}");
        let file = File::open(path).map_err(|e| LidderError::io(path, e))?;
        self.match_reader(key, BufReader::new(file), observations)
            .map_err(|e| LidderError::io(path, e))?;
        observations.files_checked += 1;
        Ok(())
    }
}

fn strip_terminator(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LidConfig, RuleSpec};

    fn definitions(rules: &[&str]) -> Definitions {
        let mut config = LidConfig::new();
        config.include.push(".*".into());
        for r in rules {
            config = config.with_rule(RuleSpec::new(*r, Vec::<String>::new()));
        }
        Definitions::from_config(&config).unwrap()
    }

    fn scan(defs: &Definitions, content: &[u8]) -> Observations {
        let mut obs = Observations::for_definitions(defs);
        LineScanner::new(defs)
            .match_reader("f.go", content, &mut obs)
            .unwrap();
        obs
    }

    fn hit(obs: &Observations, rule: usize) -> bool {
        obs.actual(rule).is_some_and(|s| s.contains("f.go"))
    }

    #[test]
    fn every_rule_is_tested_on_every_line() {
        let defs = definitions(&["TODO", "FIXME", "XXX"]);
        let obs = scan(&defs, b"// TODO FIXME\nclean\n");
        assert!(hit(&obs, 0));
        assert!(hit(&obs, 1));
        assert!(!hit(&obs, 2));
    }

    #[test]
    fn repeated_matches_record_path_once() {
        let defs = definitions(&["TODO"]);
        let obs = scan(&defs, b"TODO\nTODO\nTODO TODO\n");
        assert_eq!(obs.actual(0).map(BTreeSet::len), Some(1));
    }

    #[test]
    fn final_line_without_newline_is_scanned() {
        let defs = definitions(&["TODO"]);
        let obs = scan(&defs, b"first\nlast TODO");
        assert!(hit(&obs, 0));
    }

    #[test]
    fn empty_input_records_nothing() {
        let defs = definitions(&["^$"]);
        let obs = scan(&defs, b"");
        assert!(!hit(&obs, 0));
    }

    #[test]
    fn end_anchor_matches_before_terminator() {
        let defs = definitions(&["done$"]);
        assert!(hit(&scan(&defs, b"unix done\n"), 0));
        assert!(hit(&scan(&defs, b"dos done\r\n"), 0));
    }

    #[test]
    fn patterns_do_not_span_lines() {
        let defs = definitions(&["foo bar"]);
        let obs = scan(&defs, b"foo\nbar\n");
        assert!(!hit(&obs, 0));
    }

    #[test]
    fn record_ignores_unknown_rule_index() {
        let defs = definitions(&["x"]);
        let mut obs = Observations::for_definitions(&defs);
        obs.record(5, "a.go");
        assert!(obs.actual(5).is_none());
        assert!(obs.actual(0).is_some_and(BTreeSet::is_empty));
    }

    #[test]
    fn match_file_counts_scanned_files() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("f.go");
        std::fs::write(&path, "TODO\n").unwrap();

        let defs = definitions(&["TODO"]);
        let mut obs = Observations::for_definitions(&defs);
        LineScanner::new(&defs)
            .match_file(&path, "f.go", &mut obs)
            .unwrap();
        assert_eq!(obs.files_checked(), 1);
        assert!(hit(&obs, 0));
    }

    #[test]
    fn match_file_missing_is_io_error() {
        let defs = definitions(&["TODO"]);
        let mut obs = Observations::for_definitions(&defs);
        let err = LineScanner::new(&defs)
            .match_file(Path::new("/nonexistent/f.go"), "f.go", &mut obs)
            .unwrap_err();
        assert!(matches!(err, LidderError::Io { .. }));
        assert_eq!(obs.files_checked(), 0);
    }
}
