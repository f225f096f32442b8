use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use super::OpenFile;

/// Zero-sized type that opens files on the real file system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemFs;

impl OpenFile for SystemFs {
    type Reader = BufReader<File>;

    fn open(&self, path: &Path) -> io::Result<Self::Reader> {
        File::open(path).map(BufReader::new)
    }
}
