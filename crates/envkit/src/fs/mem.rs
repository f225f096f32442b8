use std::cell::RefCell;
use std::collections::HashMap;
use std::io::{self, Cursor};
use std::path::{Path, PathBuf};

use super::OpenFile;

#[derive(Debug, Clone)]
enum Entry {
    Content(Vec<u8>),
    Fail(io::ErrorKind),
}

/// In-memory file system for tests.
///
/// Paths are matched exactly as given, so `.env` and `./.env` are different
/// entries. Every call to [`open`](OpenFile::open) is recorded, including
/// failed ones, so tests can assert the order in which files were tried.
#[derive(Debug, Default)]
pub struct MemFs {
    files: RefCell<HashMap<PathBuf, Entry>>,
    opened: RefCell<Vec<PathBuf>>,
}

impl MemFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a file with the given content.
    pub fn write(&self, path: impl AsRef<Path>, content: impl AsRef<[u8]>) {
        self.files.borrow_mut().insert(
            path.as_ref().to_path_buf(),
            Entry::Content(content.as_ref().to_vec()),
        );
    }

    /// Makes opening `path` fail with an error of the given kind.
    pub fn fail(&self, path: impl AsRef<Path>, kind: io::ErrorKind) {
        self.files
            .borrow_mut()
            .insert(path.as_ref().to_path_buf(), Entry::Fail(kind));
    }

    /// Paths passed to `open`, in call order.
    pub fn opened(&self) -> Vec<PathBuf> {
        self.opened.borrow().clone()
    }
}

impl OpenFile for MemFs {
    type Reader = Cursor<Vec<u8>>;

    fn open(&self, path: &Path) -> io::Result<Self::Reader> {
        self.opened.borrow_mut().push(path.to_path_buf());
        match self.files.borrow().get(path) {
            Some(Entry::Content(content)) => Ok(Cursor::new(content.clone())),
            Some(Entry::Fail(kind)) => Err(io::Error::new(*kind, "simulated failure")),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("file not found: {}", path.display()),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    #[test]
    fn test_mem_fs_write_and_open() {
        let fs = MemFs::new();
        fs.write("test.env", "A=1");

        let mut content = String::new();
        fs.open(Path::new("test.env"))
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();

        assert_eq!(content, "A=1");
    }

    #[test]
    fn test_mem_fs_missing_and_failing_files() {
        let fs = MemFs::new();
        fs.fail("locked.env", io::ErrorKind::PermissionDenied);

        assert_eq!(
            fs.open(Path::new("missing.env")).unwrap_err().kind(),
            io::ErrorKind::NotFound
        );
        assert_eq!(
            fs.open(Path::new("locked.env")).unwrap_err().kind(),
            io::ErrorKind::PermissionDenied
        );
        assert_eq!(
            fs.opened(),
            vec![PathBuf::from("missing.env"), PathBuf::from("locked.env")]
        );
    }
}
