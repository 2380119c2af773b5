//! Host-owned note storage.
//!
//! Commands only ever hand the store a target name; legality and uniqueness of
//! that name are the store's business.

mod local;

pub use local::LocalVault;

use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Extension given to notes created from scratch.
pub const DEFAULT_NOTE_EXTENSION: &str = "md";

/// Handle to a note inside a vault.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteFile {
    /// Vault-relative path.
    pub path: PathBuf,
    /// File name without its extension.
    pub basename: String,
    /// Extension without the dot; empty when the file has none.
    pub extension: String,
}

impl NoteFile {
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let basename = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let extension = path
            .extension()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            path,
            basename,
            extension,
        }
    }
}

/// Joins a base name and an extension the way the host names files.
pub fn file_name(basename: &str, extension: &str) -> String {
    if extension.is_empty() {
        basename.to_string()
    } else {
        format!("{basename}.{extension}")
    }
}

/// Storage capability the commands depend on.
pub trait FileStore {
    /// Creates a new file holding `contents`. Fails if `name` is taken.
    fn create(&mut self, name: &str, contents: &[u8]) -> Result<NoteFile>;

    /// Duplicates `source`'s bytes under `name`. Fails if `name` is taken.
    fn copy(&mut self, source: &NoteFile, name: &str) -> Result<NoteFile>;

    /// Looks up an existing note by vault-relative name.
    fn resolve(&self, name: &str) -> Result<NoteFile>;
}

impl<S: FileStore + ?Sized> FileStore for &mut S {
    fn create(&mut self, name: &str, contents: &[u8]) -> Result<NoteFile> {
        (**self).create(name, contents)
    }

    fn copy(&mut self, source: &NoteFile, name: &str) -> Result<NoteFile> {
        (**self).copy(source, name)
    }

    fn resolve(&self, name: &str) -> Result<NoteFile> {
        (**self).resolve(name)
    }
}
