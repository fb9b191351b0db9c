use std::fs;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use chrono::{DateTime, Local};
use log::debug;

use crate::entry::{Entry, Kind};
use crate::error::{FileQueryError, Result};
use crate::traits::Describe;

// ---------------------------------------------------------------------------
// MetadataExtractor
// ---------------------------------------------------------------------------

/// Describes single filesystem paths.
///
/// Holds only the absolute directory that relative inputs are resolved
/// against. Every call stats the filesystem afresh; nothing is cached.
#[derive(Debug, Clone)]
pub struct MetadataExtractor {
    base_dir: PathBuf,
}

impl MetadataExtractor {
    /// Resolve relative paths against `base_dir`.
    ///
    /// A relative `base_dir` is made absolute against the current directory
    /// here, once.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref();
        let base_dir = std::path::absolute(base_dir)
            .map_err(|e| FileQueryError::io(base_dir, e))?;
        Ok(Self { base_dir })
    }

    /// Resolve relative paths against the process's current directory.
    pub fn from_current_dir() -> Result<Self> {
        let cwd = std::env::current_dir().map_err(|e| FileQueryError::io(".", e))?;
        Ok(Self { base_dir: cwd })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// `path` joined onto the base directory when relative, with trailing
    /// and repeated separators dropped. `..` is left for the filesystem.
    pub(crate) fn resolve(&self, path: &Path) -> PathBuf {
        let joined = if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        };
        joined.components().collect()
    }
}

impl Describe for MetadataExtractor {
    fn describe(&self, path: &Path) -> Result<Option<Entry>> {
        let resolved = self.resolve(path);

        let metadata = match fs::metadata(&resolved) {
            Ok(m) => m,
            Err(e) if is_absent(&e) => {
                debug!("no filesystem object at {}", resolved.display());
                return Ok(None);
            }
            Err(e) => return Err(FileQueryError::io(resolved, e)),
        };

        entry_from_metadata(&resolved, &metadata).map(Some)
    }
}

/// Build the entry for an absolute `path` from metadata already read.
///
/// Used directly for listed children that `fs::metadata` cannot follow,
/// such as dangling symlinks, with their `symlink_metadata`.
pub(crate) fn entry_from_metadata(path: &Path, metadata: &fs::Metadata) -> Result<Entry> {
    let absolute = normalize(path);
    let name = absolute
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| absolute.to_string_lossy().into_owned());

    // Branch on the object type queried once, never on the name, so a
    // directory called `release.v2` is still a directory.
    let kind = if metadata.is_dir() {
        Kind::Directory
    } else {
        kind_for_name(&name)
    };

    let modified = metadata
        .modified()
        .map_err(|e| FileQueryError::io(&absolute, e))?;

    Ok(Entry::new(
        name,
        kind,
        metadata.len(),
        DateTime::<Local>::from(modified),
        absolute,
    ))
}

pub(crate) fn is_absent(e: &std::io::Error) -> bool {
    matches!(e.kind(), ErrorKind::NotFound | ErrorKind::NotADirectory)
}

// ---------------------------------------------------------------------------
// Kind inference
// ---------------------------------------------------------------------------

/// Kind of a non-directory entry, from its base name.
///
/// The extension is the text after the last `.`, lowercased. A name whose
/// last `.` is its first or its final character has no extension.
pub fn kind_for_name(name: &str) -> Kind {
    match name.rfind('.') {
        Some(idx) if idx > 0 && idx + 1 < name.len() => {
            Kind::Extension(name[idx + 1..].to_lowercase())
        }
        _ => Kind::Unknown,
    }
}

// ---------------------------------------------------------------------------
// Path normalisation
// ---------------------------------------------------------------------------

/// Lexically normalise `path`: drop `.` components and fold `..` into its
/// parent. Symlinks are not consulted. `..` at the root stays at the root.
pub(crate) fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let at_root = matches!(
                    out.components().next_back(),
                    None | Some(Component::RootDir) | Some(Component::Prefix(_))
                );
                if at_root {
                    if !out.has_root() {
                        out.push("..");
                    }
                } else if out.ends_with("..") {
                    out.push("..");
                } else {
                    out.pop();
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_uses_last_extension() {
        assert_eq!(kind_for_name("a.txt"), Kind::Extension("txt".into()));
        assert_eq!(kind_for_name("archive.tar.gz"), Kind::Extension("gz".into()));
        assert_eq!(kind_for_name("Sample.JAVA"), Kind::Extension("java".into()));
    }

    #[test]
    fn kind_unknown_without_usable_extension() {
        assert_eq!(kind_for_name("a."), Kind::Unknown);
        assert_eq!(kind_for_name(".hidden"), Kind::Unknown);
        assert_eq!(kind_for_name("noext"), Kind::Unknown);
        assert_eq!(kind_for_name("."), Kind::Unknown);
        assert_eq!(kind_for_name(""), Kind::Unknown);
    }

    #[test]
    fn kind_for_dotted_hidden_file_uses_last_dot() {
        assert_eq!(kind_for_name(".env.local"), Kind::Extension("local".into()));
    }

    #[cfg(unix)]
    #[test]
    fn normalize_folds_dot_components() {
        assert_eq!(normalize(Path::new("/a/./b/../c")), PathBuf::from("/a/c"));
        assert_eq!(normalize(Path::new("/../x")), PathBuf::from("/x"));
        assert_eq!(normalize(Path::new("/a/b/")), PathBuf::from("/a/b"));
        assert_eq!(normalize(Path::new("/")), PathBuf::from("/"));
    }

    #[test]
    fn normalize_keeps_leading_parent_on_relative_paths() {
        assert_eq!(normalize(Path::new("../a")), PathBuf::from("../a"));
        assert_eq!(normalize(Path::new("a/../../b")), PathBuf::from("../b"));
    }

    #[test]
    fn resolve_joins_relative_paths_onto_base() {
        let base = std::env::temp_dir();
        let extractor = MetadataExtractor::new(&base).unwrap();
        assert_eq!(extractor.resolve(Path::new("x.txt")), base.join("x.txt"));
        assert_eq!(extractor.resolve(&base), base);
    }

    #[test]
    fn relative_base_dir_is_made_absolute() {
        let extractor = MetadataExtractor::new("some/relative/dir").unwrap();
        assert!(extractor.base_dir().is_absolute());
        assert!(extractor.base_dir().ends_with("some/relative/dir"));
    }

    #[cfg(unix)]
    #[test]
    fn resolve_drops_trailing_separator() {
        let extractor = MetadataExtractor::new("/srv").unwrap();
        assert_eq!(
            extractor.resolve(Path::new("/srv/data/a.txt/")),
            PathBuf::from("/srv/data/a.txt")
        );
        assert_eq!(
            extractor.resolve(Path::new("reports//q1")),
            PathBuf::from("/srv/reports/q1")
        );
    }
}
