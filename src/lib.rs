//! # fsquery
//!
//! Local filesystem metadata queries: directory listings and single-entry
//! details, ready to hand to a request/response transport.
//!
//! fsquery owns the introspection: classifying a path, deriving its kind,
//! and describing the immediate children of a directory. It does **not**
//! own routing, process bootstrap or a server. [`response::Reply`] maps
//! results onto status codes and JSON, and the caller does the rest.
//!
//! # Quick Start
//!
//! ```rust
//! use std::fs;
//!
//! let dir = tempfile::tempdir().unwrap();
//! fs::write(dir.path().join("config.properties"), "a=1").unwrap();
//! fs::create_dir(dir.path().join("subfolder")).unwrap();
//!
//! let service = fsquery::query()
//!     .base_dir(dir.path())
//!     .sorted(true)
//!     .build()
//!     .unwrap();
//!
//! let entries = service.list_directory_files(".").unwrap();
//! assert_eq!(entries.len(), 2);
//! assert_eq!(entries[0].kind().as_str(), "properties");
//! assert!(entries[1].is_directory());
//!
//! let missing = service.get_file_details("nope.txt").unwrap();
//! assert!(missing.is_none());
//! ```
//!
//! # Outcomes
//!
//! | Query                  | Blank path        | Missing path | Fault       |
//! |------------------------|-------------------|--------------|-------------|
//! | `list_directory_files` | `InvalidArgument` | `Ok(vec![])` | `Err(..)`   |
//! | `get_file_details`     | `InvalidArgument` | `Ok(None)`   | `Err(..)`   |
//!
//! A directory listing cannot tell a missing directory from an empty one.
//!
//! # Logging
//!
//! Diagnostics go through the [`log`] facade. Install any logger to see them.

#![forbid(unsafe_code)]

pub mod response;

mod builder;
mod entry;
mod error;
mod extractor;
mod lister;
mod service;
mod traits;

// ── Public re-exports ─────────────────────────────────────────────────────────

pub use builder::QueryBuilder;
pub use entry::{Entry, Kind};
pub use error::{FileQueryError, Result};
pub use extractor::{kind_for_name, MetadataExtractor};
pub use lister::DirectoryLister;
pub use service::{validate_path, FileQueryService};
pub use traits::Describe;

// ── Entry point ───────────────────────────────────────────────────────────────

/// Create a new [`QueryBuilder`] to configure a [`FileQueryService`].
///
/// # Example
///
/// ```rust
/// let service = fsquery::query().build().unwrap();
///
/// let err = service.list_directory_files("   ").unwrap_err();
/// assert!(err.is_invalid_argument());
/// ```
pub fn query() -> QueryBuilder {
    QueryBuilder::default()
}
