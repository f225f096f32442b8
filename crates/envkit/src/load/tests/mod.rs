//! Tests for the env file loader.
//!
//! Responsibilities:
//! - Test effective file order and default-file handling.
//! - Test line parsing, trimming and comment handling.
//! - Test failure aggregation across files and lines.
//!
//! Invariants:
//! - Tests run against `InMemoryEnv` and `MemFs` and never touch the process
//!   environment or the real file system (see `tests/` for those).

use crate::env::InMemoryEnv;
use crate::fs::MemFs;
use crate::load::Loader;

pub mod line_tests;

/// No caller-named files.
pub const NO_FILES: [&str; 0] = [];

/// Returns a loader wired to the given test doubles.
pub fn loader<'a>(env: &'a InMemoryEnv, fs: &'a MemFs) -> Loader<&'a InMemoryEnv, &'a MemFs> {
    Loader::new().with_env(env).with_fs(fs)
}
