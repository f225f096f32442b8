//! Error types for env file loading.
//!
//! Responsibilities:
//! - Define `FileError`, one failure tagged with the file it came from.
//! - Define `LoadError`, the combined result of a multi-file load.
//!
//! Invariants:
//! - Errors NEVER include values read from env files, only paths, line
//!   numbers and variable names, to prevent secret leakage.
//! - `LoadError` is never empty and keeps failures in the order they occurred.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::error::EnvError;

/// A single failure while loading one env file.
#[derive(Error, Debug)]
pub enum FileError {
    /// The file could not be opened.
    #[error("{}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading stopped at `line` (e.g. invalid UTF-8); later lines were not applied.
    #[error("{}:{line}: {source}", .path.display())]
    Read {
        path: PathBuf,
        line: usize,
        #[source]
        source: io::Error,
    },

    /// A non-comment line has no `=`.
    #[error("{}:{line}: missing '=' separator", .path.display())]
    MissingSeparator { path: PathBuf, line: usize },

    /// The environment rejected the variable on `line`.
    #[error("{}:{line}: {source}", .path.display())]
    Set {
        path: PathBuf,
        line: usize,
        #[source]
        source: EnvError,
    },
}

impl FileError {
    /// The file the failure belongs to.
    pub fn path(&self) -> &Path {
        match self {
            Self::Open { path, .. }
            | Self::Read { path, .. }
            | Self::MissingSeparator { path, .. }
            | Self::Set { path, .. } => path,
        }
    }

    /// Returns true if the file could not be opened because it does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Open { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}

/// All failures from one call to [`load`](super::load), in order.
///
/// Renders one failure per line.
#[derive(Debug)]
pub struct LoadError {
    errors: Vec<FileError>,
}

impl LoadError {
    /// Returns `Err` holding `errors`, or `Ok(())` if there are none.
    pub(crate) fn check(errors: Vec<FileError>) -> Result<(), LoadError> {
        if errors.is_empty() {
            Ok(())
        } else {
            Err(LoadError { errors })
        }
    }

    pub fn errors(&self) -> &[FileError] {
        &self.errors
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FileError> {
        self.errors.iter()
    }

    pub fn into_errors(self) -> Vec<FileError> {
        self.errors
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Always false for an error returned by the loader.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns true if any contributing failure satisfies `predicate`.
    pub fn contains(&self, predicate: impl FnMut(&FileError) -> bool) -> bool {
        self.errors.iter().any(predicate)
    }

    /// Returns true if any file could not be opened because it does not exist.
    pub fn is_not_found(&self) -> bool {
        self.contains(FileError::is_not_found)
    }

    /// Returns the failures that belong to `path`.
    pub fn for_path<'a>(&'a self, path: &'a Path) -> impl Iterator<Item = &'a FileError> + 'a {
        self.errors.iter().filter(move |e| e.path() == path)
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.errors
            .first()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

impl<'a> IntoIterator for &'a LoadError {
    type Item = &'a FileError;
    type IntoIter = std::slice::Iter<'a, FileError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}
