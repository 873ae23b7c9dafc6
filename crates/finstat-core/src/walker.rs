//! Depth-first enumeration of documents under a root directory.

use std::path::{Path, PathBuf};

use tracing::warn;
use walkdir::WalkDir;

use crate::error::TraversalError;
use crate::models::document::Document;

/// Lazy iterator over every regular file below a root.
///
/// Yields one [`Document`] per file. Symlinks are not followed; they are
/// logged and skipped. Directories passed to [`Walker::exclude`] are skipped
/// entirely, which keeps destination areas nested inside the root from being
/// walked again.
pub struct Walker {
    root: PathBuf,
    inner: walkdir::IntoIter,
    excluded: Vec<PathBuf>,
    failed: bool,
}

impl Walker {
    /// Start walking `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let inner = WalkDir::new(&root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter();

        Self {
            root,
            inner,
            excluded: Vec::new(),
            failed: false,
        }
    }

    /// Skip a directory (and everything below it).
    pub fn exclude(mut self, dir: impl Into<PathBuf>) -> Self {
        self.excluded.push(dir.into());
        self
    }

    fn is_excluded(&self, path: &Path) -> bool {
        self.excluded.iter().any(|dir| path == dir)
    }
}

impl Iterator for Walker {
    type Item = Result<Document, TraversalError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        loop {
            let entry = match self.inner.next()? {
                Ok(entry) => entry,
                Err(source) => {
                    self.failed = true;
                    return Some(Err(TraversalError::Walk {
                        root: self.root.clone(),
                        source,
                    }));
                }
            };

            let file_type = entry.file_type();

            if file_type.is_dir() {
                if entry.depth() > 0 && self.is_excluded(entry.path()) {
                    self.inner.skip_current_dir();
                }
                continue;
            }

            if file_type.is_file() {
                return Some(Ok(Document::from_path(entry.into_path())));
            }

            warn!(
                "Skipping {}: not a regular file, left in place",
                entry.path().display()
            );
        }
    }
}
