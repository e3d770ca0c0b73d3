//! Error types for building definitions and scanning a tree.

use miette::Diagnostic;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Which list of the configuration a pattern came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
    /// A path pattern from `include`.
    Include,
    /// A path pattern from `exclude`.
    Exclude,
    /// A content pattern from `rules`.
    Rule,
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Include => write!(f, "include"),
            Self::Exclude => write!(f, "exclude"),
            Self::Rule => write!(f, "rules"),
        }
    }
}

/// Errors that abort a run.
///
/// Mismatches between expected and actual occurrences are not errors;
/// they are reported through [`crate::LidReport`].
#[derive(Debug, Error, Diagnostic)]
pub enum LidderError {
    /// A pattern failed to compile as a regular expression.
    #[error("invalid pattern `{pattern}` at {kind}[{index}]: {source}")]
    #[diagnostic(
        code(lidder::invalid_pattern),
        help("patterns use Rust `regex` syntax; escape literal metacharacters with `\\`")
    )]
    InvalidPattern {
        /// List the pattern was declared in.
        kind: PatternKind,
        /// Position within that list.
        index: usize,
        /// The pattern as written.
        pattern: String,
        /// Underlying compile error.
        #[source]
        source: regex::Error,
    },

    /// Reading a directory or file failed.
    #[error("failed to read {}: {source}", path.display())]
    #[diagnostic(code(lidder::io))]
    Io {
        /// Path being read when the error occurred.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
}

impl LidderError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn from_walk(root: &std::path::Path, err: walkdir::Error) -> Self {
        let path = err.path().map_or_else(|| root.to_path_buf(), PathBuf::from);
        let source = err
            .into_io_error()
            .unwrap_or_else(|| std::io::Error::other("filesystem loop detected"));
        Self::io(path, source)
    }
}
