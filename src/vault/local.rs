use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Component, Path, PathBuf};

use anyhow::{bail, Context, Result};
use tempfile::NamedTempFile;

use super::{FileStore, NoteFile};

/// Vault backed by a directory on the local filesystem.
#[derive(Debug, Clone)]
pub struct LocalVault {
    root: PathBuf,
}

impl LocalVault {
    /// Opens (creating if needed) the vault directory at `root`.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)
            .with_context(|| format!("Failed to create vault directory {}", root.display()))?;
        Ok(Self { root })
    }

    /// Absolute location of a note.
    pub fn absolute_path(&self, note: &NoteFile) -> PathBuf {
        self.root.join(&note.path)
    }

    /// Writes `contents` to a temporary file next to the target and moves it
    /// into place only once fully written, so failures leave nothing behind.
    fn write_new(&self, name: &str, contents: &[u8]) -> Result<NoteFile> {
        let relative = vault_relative(name)?;
        let target = self.root.join(&relative);
        let parent = target.parent().unwrap_or(&self.root);
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create folder {}", parent.display()))?;
        if target.exists() {
            bail!("File already exists: {name}");
        }
        let mut staged = NamedTempFile::new_in(parent)
            .with_context(|| format!("Failed to stage {}", target.display()))?;
        staged
            .write_all(contents)
            .with_context(|| format!("Failed to write {}", target.display()))?;
        match staged.persist_noclobber(&target) {
            Ok(_) => Ok(NoteFile::from_path(relative)),
            Err(err) if err.error.kind() == ErrorKind::AlreadyExists => {
                bail!("File already exists: {name}")
            }
            Err(err) => {
                Err(err.error).with_context(|| format!("Failed to create {}", target.display()))
            }
        }
    }
}

/// Turns a host-supplied name into a path that stays under the vault root.
fn vault_relative(name: &str) -> Result<PathBuf> {
    let mut relative = PathBuf::new();
    for component in Path::new(name).components() {
        match component {
            Component::Normal(part) => relative.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                bail!("Name must stay inside the vault: {name}");
            }
        }
    }
    if relative.as_os_str().is_empty() {
        bail!("Name is empty: {name:?}");
    }
    Ok(relative)
}

impl FileStore for LocalVault {
    fn create(&mut self, name: &str, contents: &[u8]) -> Result<NoteFile> {
        self.write_new(name, contents)
    }

    fn copy(&mut self, source: &NoteFile, name: &str) -> Result<NoteFile> {
        let source_path = self.absolute_path(source);
        let data = fs::read(&source_path)
            .with_context(|| format!("Failed to read {}", source_path.display()))?;
        self.write_new(name, &data)
    }

    fn resolve(&self, name: &str) -> Result<NoteFile> {
        let note = NoteFile::from_path(vault_relative(name)?);
        let path = self.absolute_path(&note);
        if !path.is_file() {
            bail!("No note named {name} in vault {}", self.root.display());
        }
        Ok(note)
    }
}
