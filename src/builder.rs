use std::path::PathBuf;

use crate::error::Result;
use crate::extractor::MetadataExtractor;
use crate::lister::DirectoryLister;
use crate::service::FileQueryService;

// ---------------------------------------------------------------------------
// QueryBuilder
// ---------------------------------------------------------------------------

/// Configures and builds a [`FileQueryService`].
///
/// Created via [`fsquery::query()`](crate::query). Configure with chained
/// builder methods, then call [`build()`](QueryBuilder::build).
///
/// # Example
///
/// ```rust,no_run
/// let service = fsquery::query()
///     .base_dir("/srv/shared")
///     .sorted(true)
///     .build()?;
///
/// for entry in service.list_directory_files("reports")? {
///     println!("{} {}", entry.kind(), entry.name());
/// }
/// # Ok::<(), fsquery::FileQueryError>(())
/// ```
#[derive(Debug, Default)]
pub struct QueryBuilder {
    base_dir: Option<PathBuf>,
    sorted:   bool,
}

impl QueryBuilder {
    // ── Path resolution ───────────────────────────────────────────────────

    /// Directory that relative query paths are resolved against.
    ///
    /// Defaults to the process's current directory, read once at
    /// [`build()`](QueryBuilder::build). A relative `dir` is made absolute
    /// against the current directory at that point too.
    pub fn base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    // ── Listing order ─────────────────────────────────────────────────────

    /// Sort directory listings by file name.
    ///
    /// Off by default: listings come back in whatever order the filesystem
    /// enumerates them.
    pub fn sorted(mut self, yes: bool) -> Self {
        self.sorted = yes;
        self
    }

    // ── Build ─────────────────────────────────────────────────────────────

    /// Assemble the extractor, lister and facade.
    ///
    /// Fails only when the current directory is needed and cannot be read.
    pub fn build(self) -> Result<FileQueryService> {
        let extractor = match self.base_dir {
            Some(dir) => MetadataExtractor::new(dir)?,
            None => MetadataExtractor::from_current_dir()?,
        };
        let lister = DirectoryLister::new(extractor.clone()).sorted(self.sorted);
        Ok(FileQueryService::new(extractor, lister))
    }
}
