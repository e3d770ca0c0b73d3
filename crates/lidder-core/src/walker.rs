//! Recursive tree walking.

use std::cmp::Ordering;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use crate::definitions::Definitions;
use crate::error::LidderError;
use crate::scanner::{LineScanner, Observations};
use crate::utils::path_key;

/// Order in which sibling directory entries are visited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Ascending by file name.
    Ascending,
    /// Descending by file name.
    Descending,
}

/// Walks every regular file under a root, scanning the ones the path
/// filter accepts.
///
/// Directories are always descended into; the filter applies to files
/// only. Symbolic links are not followed. Any read error stops the walk.
#[derive(Debug, Clone)]
pub struct TreeWalker {
    root: PathBuf,
    order: Option<SortOrder>,
}

impl TreeWalker {
    /// Creates a walker rooted at `root`, visiting entries in the order the
    /// filesystem returns them.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            order: None,
        }
    }

    /// Visits sibling entries in a fixed order.
    #[must_use]
    pub fn sorted(mut self, order: SortOrder) -> Self {
        self.order = Some(order);
        self
    }

    /// Returns the root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Scans every accepted file under the root.
    ///
    /// # Errors
    ///
    /// Returns [`LidderError::Io`] for the first directory or file that
    /// cannot be read; traversal stops there.
    pub fn explore(
        &self,
        definitions: &Definitions,
        observations: &mut Observations,
    ) -> Result<(), LidderError> {
        let scanner = LineScanner::new(definitions);

        for entry in self.walk() {
            let entry = entry.map_err(|e| LidderError::from_walk(&self.root, e))?;
            if !entry.file_type().is_file() {
                continue;
            }

            let key = path_key(entry.path());
            if !definitions.should_check(&key) {
                debug!("Skipping: {key}");
                continue;
            }

            scanner.match_file(entry.path(), &key, observations)?;
        }

        Ok(())
    }

    fn walk(&self) -> walkdir::IntoIter {
        let walk = WalkDir::new(&self.root).follow_links(false);
        match self.order {
            None => walk.into_iter(),
            Some(SortOrder::Ascending) => walk.sort_by(by_name).into_iter(),
            Some(SortOrder::Descending) => walk.sort_by(|a, b| by_name(b, a)).into_iter(),
        }
    }
}

fn by_name(a: &DirEntry, b: &DirEntry) -> Ordering {
    a.file_name().cmp(b.file_name())
}
