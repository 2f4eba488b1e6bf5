use crate::error::{Error, Result};
use crate::filesystem::FileSystem;
use std::path::Path;

/// A precondition a command verifies right before it touches the filesystem.
#[derive(Debug, Clone, Copy)]
pub enum Check<'p> {
    Exists(&'p Path),
    Absent(&'p Path),
    Directory(&'p Path),
}

impl Check<'_> {
    pub fn run(&self, fs: &dyn FileSystem) -> Result<()> {
        match *self {
            Check::Exists(path) => {
                if !fs.exists(path) {
                    return Err(Error::NotFound(path.to_path_buf()));
                }
            }
            Check::Absent(path) => {
                if fs.exists(path) {
                    return Err(Error::AlreadyExists(path.to_path_buf()));
                }
            }
            Check::Directory(path) => {
                if !fs.exists(path) {
                    return Err(Error::NotFound(path.to_path_buf()));
                }
                if !fs.is_directory(path) {
                    return Err(Error::NotADirectory(path.to_path_buf()));
                }
            }
        }
        Ok(())
    }
}

/// Runs `checks` in order, stopping at the first failure.
pub fn verify(fs: &dyn FileSystem, checks: &[Check<'_>]) -> Result<()> {
    checks.iter().try_for_each(|check| check.run(fs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filesystem::RealFileSystem;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_verify_passes() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("a.txt");
        fs::write(&file, "").unwrap();
        let missing = dir.path().join("b.txt");

        let checks = [Check::Directory(dir.path()), Check::Exists(&file), Check::Absent(&missing)];
        assert!(verify(&RealFileSystem, &checks).is_ok());
    }

    #[test]
    fn test_verify_stops_at_first_failure() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("a.txt");
        fs::write(&file, "").unwrap();
        let missing = dir.path().join("ghost");

        // Absent(file) fails before Exists(missing) is ever looked at.
        let checks = [Check::Absent(&file), Check::Exists(&missing)];
        let err = verify(&RealFileSystem, &checks).unwrap_err();
        assert!(matches!(err, Error::AlreadyExists(p) if p == file));
    }

    #[test]
    fn test_directory_check() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("a.txt");
        fs::write(&file, "").unwrap();

        let err = Check::Directory(&file).run(&RealFileSystem).unwrap_err();
        assert!(matches!(err, Error::NotADirectory(_)));

        let err = Check::Directory(&dir.path().join("nope")).run(&RealFileSystem).unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }
}
