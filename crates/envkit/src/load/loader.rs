//! Env file loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `Loader` over an environment and a file system.
//! - Decide the effective file order and whether the default file is required.
//! - Apply every `NAME=VALUE` line to the environment and aggregate failures.
//!
//! Does NOT handle:
//! - Quoting, escapes or variable interpolation; values are taken verbatim after trimming.
//! - Error type definitions (see error.rs).
//!
//! Invariants / Assumptions:
//! - Files are processed strictly in effective order and each line is set
//!   immediately, so later files override earlier ones.
//! - A failure in one file never prevents attempts on the others.
//! - The default file may be skipped silently only when it was not requested
//!   explicitly and it does not exist.

use std::io::BufRead;
use std::path::{Path, PathBuf};

use super::error::{FileError, LoadError};
use crate::constants::{COMMENT_PREFIX, DEFAULT_ENV_FILE, KEY_VALUE_SEPARATOR};
use crate::env::{Environment, ProcessEnv};
use crate::fs::{OpenFile, SystemFs};

/// One entry of the effective load order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFile {
    pub path: PathBuf,
    /// Whether a missing file is reported as an error.
    pub required: bool,
}

/// Loads env files into an environment.
///
/// ```no_run
/// use envkit::Loader;
///
/// // Loads `.env` if present, then `local.env`.
/// Loader::new().load(["local.env"])?;
/// # Ok::<(), envkit::LoadError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Loader<E = ProcessEnv, F = SystemFs> {
    env: E,
    fs: F,
    default_file: PathBuf,
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

impl Loader {
    /// Create a loader over the process environment and the real file system.
    pub fn new() -> Self {
        Self {
            env: ProcessEnv,
            fs: SystemFs,
            default_file: PathBuf::from(DEFAULT_ENV_FILE),
        }
    }
}

impl<E: Environment, F: OpenFile> Loader<E, F> {
    /// Set the environment variables are written to.
    pub fn with_env<E2: Environment>(self, env: E2) -> Loader<E2, F> {
        Loader {
            env,
            fs: self.fs,
            default_file: self.default_file,
        }
    }

    /// Set the file system env files are read from.
    pub fn with_fs<F2: OpenFile>(self, fs: F2) -> Loader<E, F2> {
        Loader {
            env: self.env,
            fs,
            default_file: self.default_file,
        }
    }

    /// Override the default file name (`.env`).
    pub fn with_default_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.default_file = path.into();
        self
    }

    pub fn default_file(&self) -> &Path {
        &self.default_file
    }

    /// Returns the effective load order for `files`.
    ///
    /// The default file is required when `files` is empty or names it
    /// (with or without a leading `./`). Otherwise it is prepended and
    /// optional. Every other file is required.
    pub fn plan<I, P>(&self, files: I) -> Vec<PlannedFile>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut planned: Vec<PlannedFile> = files
            .into_iter()
            .map(|path| PlannedFile {
                path: path.as_ref().to_path_buf(),
                required: true,
            })
            .collect();

        let listed = planned.iter().any(|f| self.is_default(&f.path));
        if !listed {
            planned.insert(
                0,
                PlannedFile {
                    path: self.default_file.clone(),
                    required: planned.is_empty(),
                },
            );
        }
        planned
    }

    /// Loads `files` in order, see [`plan`](Self::plan) for how the default
    /// file is handled.
    ///
    /// # Errors
    ///
    /// Returns a [`LoadError`] holding every failure: files that could not be
    /// opened or read, lines without `=`, and variables the environment
    /// rejected. Lines that could be applied are applied regardless.
    pub fn load<I, P>(&self, files: I) -> Result<(), LoadError>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut errors = Vec::new();

        for file in self.plan(files) {
            match self.fs.open(&file.path) {
                Ok(reader) => {
                    let applied = self.apply_lines(&file.path, reader, &mut errors);
                    tracing::debug!(path = %file.path.display(), applied, "Loaded env file");
                }
                Err(e) if !file.required && e.kind() == std::io::ErrorKind::NotFound => {
                    tracing::debug!(
                        path = %file.path.display(),
                        "Default env file not found; skipping"
                    );
                }
                Err(source) => errors.push(FileError::Open {
                    path: file.path,
                    source,
                }),
            }
        }

        LoadError::check(errors)
    }

    fn is_default(&self, path: &Path) -> bool {
        strip_current_dir(path) == strip_current_dir(&self.default_file)
    }

    /// Applies every variable line of `reader`, returning how many were set.
    ///
    /// `reader` is consumed, so the file is closed on every return path.
    fn apply_lines<R: BufRead>(&self, path: &Path, reader: R, errors: &mut Vec<FileError>) -> usize {
        let mut applied = 0;

        for (index, line) in reader.lines().enumerate() {
            let line_no = index + 1;
            let line = match line {
                Ok(line) => line,
                Err(source) => {
                    errors.push(FileError::Read {
                        path: path.to_path_buf(),
                        line: line_no,
                        source,
                    });
                    break;
                }
            };

            let line = line.trim();
            if line.is_empty() || line.starts_with(COMMENT_PREFIX) {
                continue;
            }

            let Some((name, value)) = line.split_once(KEY_VALUE_SEPARATOR) else {
                errors.push(FileError::MissingSeparator {
                    path: path.to_path_buf(),
                    line: line_no,
                });
                continue;
            };

            match self.env.set(name.trim(), value.trim()) {
                Ok(()) => applied += 1,
                Err(source) => errors.push(FileError::Set {
                    path: path.to_path_buf(),
                    line: line_no,
                    source,
                }),
            }
        }

        applied
    }
}

/// `./.env` and `.env` name the same file.
fn strip_current_dir(path: &Path) -> &Path {
    path.strip_prefix(".").unwrap_or(path)
}

/// Loads `files` into the process environment from the real file system.
///
/// `.env` is always consulted: first and optionally when not listed, in its
/// listed position and required when listed or when `files` is empty.
///
/// ```no_run
/// // Requires `.env` to exist.
/// envkit::load(std::iter::empty::<&str>())?;
///
/// // Loads `.env` if present, then `test.env`.
/// envkit::load(["test.env"])?;
/// # Ok::<(), envkit::LoadError>(())
/// ```
pub fn load<I, P>(files: I) -> Result<(), LoadError>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    Loader::new().load(files)
}
