//! Abstraction for opening env files.
//!
//! # Examples
//!
//! ```
//! use envkit::fs::{OpenFile, SystemFs};
//! use std::io::BufRead;
//! use std::path::Path;
//!
//! fn count_lines<F: OpenFile>(fs: &F, path: &Path) -> usize {
//!     fs.open(path)
//!         .map(|reader| reader.lines().count())
//!         .unwrap_or(0)
//! }
//!
//! let lines = count_lines(&SystemFs, Path::new(".env"));
//! ```

#[cfg(any(test, feature = "test-support"))]
mod mem;
mod system;

use std::io::{self, BufRead};
use std::path::Path;

#[cfg(any(test, feature = "test-support"))]
pub use mem::MemFs;
pub use system::SystemFs;

/// Opens a file for line-oriented reading.
///
/// The returned reader owns the underlying handle; dropping it closes the
/// file.
pub trait OpenFile {
    type Reader: BufRead;

    fn open(&self, path: &Path) -> io::Result<Self::Reader>;
}

impl<F: OpenFile + ?Sized> OpenFile for &F {
    type Reader = F::Reader;

    fn open(&self, path: &Path) -> io::Result<Self::Reader> {
        (**self).open(path)
    }
}
