use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use ignore::WalkBuilder;
use log::{debug, trace, warn};

use crate::entry::Entry;
use crate::error::{FileQueryError, Result};
use crate::extractor::{entry_from_metadata, MetadataExtractor};
use crate::traits::Describe;

// ---------------------------------------------------------------------------
// DirectoryLister
// ---------------------------------------------------------------------------

/// Lists the immediate children of a directory.
///
/// One level only. Each child is described by the injected [`Describe`]
/// implementation, so the lister itself never interprets names or metadata.
#[derive(Clone)]
pub struct DirectoryLister {
    describer: Arc<dyn Describe>,
    base_dir:  PathBuf,
    sorted:    bool,
}

impl DirectoryLister {
    /// A lister that describes children with `extractor` and resolves
    /// relative directories against the extractor's base directory.
    pub fn new(extractor: MetadataExtractor) -> Self {
        let base_dir = extractor.base_dir().to_path_buf();
        Self {
            describer: Arc::new(extractor),
            base_dir,
            sorted: false,
        }
    }

    /// A lister using any [`Describe`] implementation for its children.
    ///
    /// A relative `base_dir` is made absolute against the current directory.
    pub fn with_describer(
        describer: Arc<dyn Describe>,
        base_dir: impl AsRef<Path>,
    ) -> Result<Self> {
        let base_dir = base_dir.as_ref();
        let base_dir = std::path::absolute(base_dir)
            .map_err(|e| FileQueryError::io(base_dir, e))?;
        Ok(Self {
            describer,
            base_dir,
            sorted: false,
        })
    }

    /// Sort children by file name instead of keeping enumeration order.
    pub fn sorted(mut self, yes: bool) -> Self {
        self.sorted = yes;
        self
    }

    /// Describe every immediate child of `dir`.
    ///
    /// A missing path and a path that is not a directory both yield an empty
    /// list, indistinguishable from an empty directory. A child the describer
    /// reports absent (a dangling symlink) is described from its own link
    /// metadata; a child gone altogether is a fault.
    pub fn list(&self, dir: &Path) -> Result<Vec<Entry>> {
        let root = if dir.is_absolute() {
            dir.to_path_buf()
        } else {
            self.base_dir.join(dir)
        };

        match fs::metadata(&root) {
            Ok(m) if m.is_dir() => {}
            Ok(_) => {
                debug!("not a directory, nothing to list: {}", root.display());
                return Ok(Vec::new());
            }
            Err(e) => {
                debug!("cannot stat {}, nothing to list: {}", root.display(), e);
                return Ok(Vec::new());
            }
        }

        let mut builder = WalkBuilder::new(&root);
        builder
            .standard_filters(false)
            .ignore(false)
            .parents(false)
            .hidden(false)
            .follow_links(false)
            .same_file_system(false)
            .max_depth(Some(1));

        if self.sorted {
            builder.sort_by_file_name(|a, b| a.cmp(b));
        }

        let mut entries = Vec::new();
        for res in builder.build() {
            let child = res.map_err(map_ignore_error)?;

            // Skip the root itself
            if child.depth() == 0 {
                continue;
            }

            let entry = match self.describer.describe(child.path())? {
                Some(entry) => entry,
                None => describe_unfollowed(child.path())?,
            };
            trace!("listed {} ({})", entry.name(), entry.kind());
            entries.push(entry);
        }

        Ok(entries)
    }
}

impl std::fmt::Debug for DirectoryLister {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DirectoryLister")
            .field("base_dir", &self.base_dir)
            .field("sorted", &self.sorted)
            .finish_non_exhaustive()
    }
}

/// Describe a child from `symlink_metadata`, without following it.
fn describe_unfollowed(path: &Path) -> Result<Entry> {
    let metadata = fs::symlink_metadata(path).map_err(|e| {
        warn!("{} vanished while listing", path.display());
        FileQueryError::io(path, e)
    })?;
    debug!("describing {} without following it", path.display());
    entry_from_metadata(path, &metadata)
}

// ---------------------------------------------------------------------------
// Map ignore::Error to FileQueryError
// ---------------------------------------------------------------------------

fn map_ignore_error(e: ignore::Error) -> FileQueryError {
    match e {
        ignore::Error::WithPath { path, err } => match *err {
            ignore::Error::Io(io_err) => FileQueryError::io(path, io_err),
            other => FileQueryError::Walk(format!("{}: {}", path.display(), other)),
        },
        ignore::Error::WithDepth { err, .. } => map_ignore_error(*err),
        ignore::Error::Io(io_err) => FileQueryError::io(PathBuf::new(), io_err),
        other => FileQueryError::Walk(other.to_string()),
    }
}
