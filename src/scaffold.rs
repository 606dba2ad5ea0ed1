use crate::{
    errors::{FileOperation, IoError},
    layout::NEXT_APP_LAYOUT,
    vfs::{EntryKind, VirtualFS},
};
use colored::Colorize;
use miette::Diagnostic;
use std::{
    fmt, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum ScaffoldError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Io(#[from] IoError),
}

/// A filesystem entry that was actually created by a [`Scaffolder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Creation {
    Directory(PathBuf),
    File(PathBuf),
}
impl Creation {
    pub fn path(&self) -> &Path {
        match self {
            Self::Directory(path) | Self::File(path) => path,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Directory(_) => "Created directory:",
            Self::File(_) => "Created file:",
        }
    }
}
impl fmt::Display for Creation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.label(), self.path().display())
    }
}

/// Creates the directory at `path` unless something already exists there.
///
/// Returns `Ok(true)` when a directory was created. Missing intermediate directories are
/// created too. An existing entry is never inspected, so a regular file at `path` counts as
/// present. A dangling symlink at `path` also counts as present and is left as it is.
fn create_dir_if_missing(path: &Path) -> Result<bool, IoError> {
    match fs::create_dir(path) {
        Ok(()) => Ok(true),
        Err(error) if error.kind() == ErrorKind::AlreadyExists => Ok(false),
        Err(error) if error.kind() == ErrorKind::NotFound => {
            fs::create_dir_all(path)
                .map_err(|error| IoError::new(FileOperation::Mkdir, path.into(), error))?;

            Ok(true)
        }
        Err(error) => Err(IoError::new(FileOperation::Mkdir, path.into(), error)),
    }
}

/// Creates an empty file at `path` unless something already exists there.
///
/// `create_new` makes the existence check and the creation a single call, so an existing file
/// is never truncated. The parent directory must already exist. A dangling symlink at `path`
/// counts as present; its target is not created.
fn create_file_if_missing(path: &Path) -> Result<bool, IoError> {
    match fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
    {
        Ok(_) => Ok(true),
        Err(error) if error.kind() == ErrorKind::AlreadyExists => Ok(false),
        Err(error) => Err(IoError::new(FileOperation::Create, path.into(), error)),
    }
}

/// Ensures directories and placeholder files exist, reporting every creation on stdout.
///
/// Nothing is ever rolled back: when an operation fails, whatever was created before it stays
/// on disk and remains listed in [`Scaffolder::created`].
#[derive(Debug, Default)]
pub struct Scaffolder {
    journal: Vec<Creation>,
}
impl Scaffolder {
    pub fn new() -> Self {
        Self {
            journal: Vec::new(),
        }
    }
    /// Entries created so far, in creation order.
    pub fn created(&self) -> &[Creation] {
        &self.journal
    }

    fn record(&mut self, creation: Creation) {
        println!(
            "{} {}",
            creation.label().green(),
            creation.path().display()
        );

        self.journal.push(creation);
    }
    /// Ensures a directory exists at `path`, creating any missing intermediate directories.
    ///
    /// # Errors
    ///
    /// Returns a [`ScaffoldError`] if the directory cannot be created.
    pub fn ensure_directory(&mut self, path: &Path) -> Result<(), ScaffoldError> {
        if create_dir_if_missing(path)? {
            self.record(Creation::Directory(path.to_path_buf()));
        } else {
            log::debug!("skipping existing path: {}", path.display());
        }

        Ok(())
    }
    /// Ensures a file exists at `path`, creating it empty when missing.
    ///
    /// # Errors
    ///
    /// Returns a [`ScaffoldError`] if the parent directory is missing or not writable.
    pub fn ensure_file(&mut self, path: &Path) -> Result<(), ScaffoldError> {
        if create_file_if_missing(path)? {
            self.record(Creation::File(path.to_path_buf()));
        } else {
            log::debug!("skipping existing path: {}", path.display());
        }

        Ok(())
    }
    /// Ensures every entry of `vfs` exists beneath `base`, in the order the entries are listed.
    pub fn apply(&mut self, vfs: &VirtualFS, base: &Path) -> Result<(), ScaffoldError> {
        for entry in &vfs.entries {
            let path = base.join(&entry.destination);

            match entry.kind {
                EntryKind::Directory => self.ensure_directory(&path)?,
                EntryKind::File => self.ensure_file(&path)?,
            }
        }

        Ok(())
    }
    /// Builds the Next.js project skeleton under `base`, base directory first.
    ///
    /// # Errors
    ///
    /// Returns a [`ScaffoldError`] on the first entry that cannot be created; the run stops there.
    pub fn build_project_skeleton(&mut self, base: &Path) -> Result<(), ScaffoldError> {
        self.ensure_directory(base)?;

        let vfs = VirtualFS::from_layout(NEXT_APP_LAYOUT);

        self.apply(&vfs, base)?;

        println!("Next.js project structure created successfully!");

        Ok(())
    }
}
