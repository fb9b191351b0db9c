use std::fmt;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use serde::{Serialize, Serializer};

/// A description of one filesystem object, produced fresh on every query.
///
/// Fields are read-only. `is_directory` is computed from
/// [`Kind::Directory`] at construction, so a directory can never carry an
/// extension kind and a file can never report itself as a directory.
///
/// Serialises with the field names `name`, `type`, `isDirectory`, `size`,
/// `lastModified` and `path`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    name: String,

    #[serde(rename = "type")]
    kind: Kind,

    is_directory: bool,

    size: u64,

    last_modified: DateTime<Local>,

    path: PathBuf,
}

impl Entry {
    pub(crate) fn new(
        name: String,
        kind: Kind,
        size: u64,
        last_modified: DateTime<Local>,
        path: PathBuf,
    ) -> Self {
        let is_directory = kind.is_directory();
        Self {
            name,
            size: if is_directory { 0 } else { size },
            kind,
            is_directory,
            last_modified,
            path,
        }
    }

    /// Base name of the path.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &Kind {
        &self.kind
    }

    pub fn is_directory(&self) -> bool {
        self.is_directory
    }

    /// Byte length for files. Always 0 for directories.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Modification time in the local time zone.
    pub fn last_modified(&self) -> DateTime<Local> {
        self.last_modified
    }

    /// Absolute, normalised path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Classification token of an [`Entry`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Kind {
    /// The path is a directory.
    Directory,

    /// Lowercased text after the last `.` of a file name.
    Extension(String),

    /// A file whose name has no usable extension.
    Unknown,
}

impl Kind {
    pub fn is_directory(&self) -> bool {
        matches!(self, Self::Directory)
    }

    /// The wire token: `directory`, the extension, or `unknown`.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Directory => "directory",
            Self::Extension(ext) => ext,
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Kind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
