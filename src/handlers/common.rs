use anyhow::Result;
use colored::*;
use log::warn;
use std::path::{Path, PathBuf};
use crate::checks::{Check, verify};
use crate::filesystem::FileSystem;
use crate::utils::human_readable_size;

/// Size of a file as far as we could read it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeReading {
    Known(u64),
    Denied,
    Failed,
}

impl SizeReading {
    pub fn known(&self) -> Option<u64> {
        match self {
            SizeReading::Known(bytes) => Some(*bytes),
            _ => None,
        }
    }
}

/// Reads a file size without letting the failure escape.
pub fn read_size(fs: &dyn FileSystem, path: &Path) -> SizeReading {
    match fs.size(path) {
        Ok(bytes) => SizeReading::Known(bytes),
        Err(e) => {
            warn!("size unavailable: {}", e);
            if e.is_permission_denied() { SizeReading::Denied } else { SizeReading::Failed }
        }
    }
}

pub fn human_reading(reading: SizeReading) -> String {
    match reading {
        SizeReading::Known(bytes) => human_readable_size(bytes),
        SizeReading::Denied => "Нет прав".to_string(),
        SizeReading::Failed => "Ошибка".to_string(),
    }
}

pub fn dir_marker() -> ColoredString {
    "[DIR] ".blue().bold()
}

pub fn file_marker() -> ColoredString {
    "[FILE]".normal()
}

fn ends_with_separator(destination: &str) -> bool {
    destination.ends_with('/') || destination.ends_with('\\')
}

/// Works out where `source_name` ends up for a move or copy.
///
/// A destination ending in a separator names an existing directory and the
/// source keeps its basename inside it; anything else is the final path.
pub fn resolve_destination(fs: &dyn FileSystem, source_name: &str, destination: &str) -> Result<PathBuf> {
    if !ends_with_separator(destination) {
        return Ok(PathBuf::from(destination));
    }

    let trimmed = destination.trim_end_matches(['/', '\\']);
    let dir = if trimmed.is_empty() { Path::new("/") } else { Path::new(trimmed) };
    verify(fs, &[Check::Directory(dir)])?;

    let base = Path::new(source_name)
        .file_name()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(source_name));
    Ok(dir.join(base))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::filesystem::RealFileSystem;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_resolve_destination_verbatim() {
        let target = resolve_destination(&RealFileSystem, "a.txt", "elsewhere/b.txt").unwrap();
        assert_eq!(target, PathBuf::from("elsewhere/b.txt"));
    }

    #[test]
    fn test_resolve_destination_into_directory() {
        let dir = tempdir().unwrap();
        let dest = format!("{}/", dir.path().display());

        let target = resolve_destination(&RealFileSystem, "nested/a.txt", &dest).unwrap();
        assert_eq!(target, dir.path().join("a.txt"));
    }

    #[test]
    fn test_resolve_destination_requires_directory() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("plain.txt");
        fs::write(&file, "").unwrap();

        let err = resolve_destination(&RealFileSystem, "a.txt", &format!("{}/", file.display())).unwrap_err();
        assert!(matches!(err.downcast_ref::<Error>(), Some(Error::NotADirectory(_))));

        let missing = format!("{}\\", dir.path().join("ghost").display());
        let err = resolve_destination(&RealFileSystem, "a.txt", &missing).unwrap_err();
        assert!(matches!(err.downcast_ref::<Error>(), Some(Error::NotFound(_))));
    }
}
