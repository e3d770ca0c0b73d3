//! Path filter deciding which files are scanned.

use regex::Regex;

use crate::error::{LidderError, PatternKind};

/// Compiled include and exclude path patterns.
///
/// Exclusion is authoritative: a path matched by any exclude pattern is
/// never scanned. Otherwise the path must match at least one include
/// pattern; files that are not explicitly included are skipped.
#[derive(Debug, Clone, Default)]
pub struct PathFilter {
    include: Vec<Regex>,
    exclude: Vec<Regex>,
}

impl PathFilter {
    /// Compiles include and exclude patterns.
    ///
    /// # Errors
    ///
    /// Returns [`LidderError::InvalidPattern`] for the first pattern that
    /// fails to compile.
    pub fn new<S: AsRef<str>>(include: &[S], exclude: &[S]) -> Result<Self, LidderError> {
        Ok(Self {
            include: compile_all(include, PatternKind::Include)?,
            exclude: compile_all(exclude, PatternKind::Exclude)?,
        })
    }

    /// Returns true if the file at `path` should be scanned.
    #[must_use]
    pub fn should_check(&self, path: &str) -> bool {
        should_check(&self.include, &self.exclude, path)
    }

    /// Returns the include patterns.
    #[must_use]
    pub fn include(&self) -> &[Regex] {
        &self.include
    }

    /// Returns the exclude patterns.
    #[must_use]
    pub fn exclude(&self) -> &[Regex] {
        &self.exclude
    }
}

/// Exclude-before-include decision over two ordered pattern lists.
#[must_use]
pub fn should_check(include: &[Regex], exclude: &[Regex], path: &str) -> bool {
    if exclude.iter().any(|p| p.is_match(path)) {
        return false;
    }
    include.iter().any(|p| p.is_match(path))
}

fn compile_all<S: AsRef<str>>(patterns: &[S], kind: PatternKind) -> Result<Vec<Regex>, LidderError> {
    patterns
        .iter()
        .enumerate()
        .map(|(index, p)| {
            Regex::new(p.as_ref()).map_err(|source| LidderError::InvalidPattern {
                kind,
                index,
                pattern: p.as_ref().to_string(),
                source,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter(include: &[&str], exclude: &[&str]) -> PathFilter {
        PathFilter::new(include, exclude).expect("patterns should compile")
    }

    #[test]
    fn included_path_is_checked() {
        let f = filter(&[r"\.go$"], &[]);
        assert!(f.should_check("cmd/main.go"));
        assert!(!f.should_check("README.md"));
    }

    #[test]
    fn exclude_overrides_include() {
        let f = filter(&[r"\.go$"], &["^vendor/"]);
        assert!(!f.should_check("vendor/lib/x.go"));
        assert!(f.should_check("src/vendor.go"));
    }

    #[test]
    fn default_deny_without_include_match() {
        let f = filter(&[r"\.rs$"], &["^never-matches$"]);
        assert!(!f.should_check("main.go"));

        let empty = filter(&[], &[]);
        assert!(!empty.should_check("main.go"));
    }

    #[test]
    fn exclude_order_does_not_matter() {
        let a = filter(&[".*"], &["gen", "vendor"]);
        let b = filter(&[".*"], &["vendor", "gen"]);
        for path in ["gen/a.go", "vendor/b.go", "src/c.go"] {
            assert_eq!(a.should_check(path), b.should_check(path), "{path}");
        }
    }

    #[test]
    fn patterns_are_unanchored_searches() {
        let f = filter(&["src"], &[]);
        assert!(f.should_check("a/src/b.go"));
    }

    #[test]
    fn invalid_exclude_reports_position() {
        let err = PathFilter::new(&[".*"], &["ok", "(unclosed"]).unwrap_err();
        match err {
            LidderError::InvalidPattern {
                kind,
                index,
                pattern,
                ..
            } => {
                assert_eq!(kind, PatternKind::Exclude);
                assert_eq!(index, 1);
                assert_eq!(pattern, "(unclosed");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn invalid_include_is_reported_before_exclude() {
        let err = PathFilter::new(&["["], &["("]).unwrap_err();
        assert!(matches!(
            err,
            LidderError::InvalidPattern {
                kind: PatternKind::Include,
                index: 0,
                ..
            }
        ));
    }
}
