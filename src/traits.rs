use std::path::Path;

use crate::entry::Entry;
use crate::error::Result;

/// Produces an [`Entry`] for a single path.
///
/// [`MetadataExtractor`](crate::MetadataExtractor) is the filesystem
/// implementation. [`DirectoryLister`](crate::DirectoryLister) holds one of
/// these and calls it once per child, so a test double or a decorating
/// implementation can be injected there.
///
/// # Contract
///
/// - `Ok(None)` means nothing exists at `path`. That is a normal outcome,
///   not an error.
/// - `Err` is reserved for faults while reading metadata (permission denied,
///   I/O failure). Implementations must not retry.
///
/// # Thread Safety
///
/// `Send + Sync` are required because a single service value is shared by callers
/// on any thread.
///
/// # Example
///
/// ```rust
/// use std::path::Path;
/// use fsquery::{Describe, Entry, FileQueryError};
///
/// struct NothingThere;
///
/// impl Describe for NothingThere {
///     fn describe(&self, _path: &Path) -> Result<Option<Entry>, FileQueryError> {
///         Ok(None)
///     }
/// }
///
/// assert!(NothingThere.describe(Path::new("/anywhere")).unwrap().is_none());
/// ```
pub trait Describe: Send + Sync {
    /// Describe the object at `path`, or report that it is absent.
    fn describe(&self, path: &Path) -> Result<Option<Entry>>;
}
