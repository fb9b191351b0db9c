use std::path::Path;

use log::debug;

use crate::entry::Entry;
use crate::error::{FileQueryError, Result};
use crate::extractor::MetadataExtractor;
use crate::lister::DirectoryLister;
use crate::traits::Describe;

/// The query facade: validates caller input, then delegates.
///
/// Stateless apart from its two collaborators, so one value can be built
/// once and shared by any number of threads.
#[derive(Debug, Clone)]
pub struct FileQueryService {
    extractor: MetadataExtractor,
    lister:    DirectoryLister,
}

impl FileQueryService {
    pub fn new(extractor: MetadataExtractor, lister: DirectoryLister) -> Self {
        Self { extractor, lister }
    }

    /// Describe every immediate child of the directory at `path`.
    ///
    /// Missing paths and non-directories yield an empty list.
    pub fn list_directory_files<'a>(
        &self,
        path: impl Into<Option<&'a str>>,
    ) -> Result<Vec<Entry>> {
        let path = validate_path(path.into(), "directory path")?;
        debug!("list_directory_files: {}", path);
        self.lister.list(Path::new(path))
    }

    /// Describe the single object at `path`, or `None` when nothing is there.
    pub fn get_file_details<'a>(
        &self,
        path: impl Into<Option<&'a str>>,
    ) -> Result<Option<Entry>> {
        let path = validate_path(path.into(), "file path")?;
        debug!("get_file_details: {}", path);
        self.extractor.describe(Path::new(path))
    }
}

/// Trim `path`, rejecting a missing or blank value before any filesystem
/// access.
pub fn validate_path<'a>(path: Option<&'a str>, what: &str) -> Result<&'a str> {
    match path.map(str::trim) {
        Some(p) if !p.is_empty() => Ok(p),
        _ => Err(FileQueryError::InvalidArgument(format!("{what} must not be empty"))),
    }
}
