use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures a command can report. Every variant names the offending path.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{} не существует", .0.display())]
    NotFound(PathBuf),
    #[error("{} уже существует", .0.display())]
    AlreadyExists(PathBuf),
    #[error("нет прав доступа к {}", .0.display())]
    PermissionDenied(PathBuf),
    #[error("{} не является директорией", .0.display())]
    NotADirectory(PathBuf),
    #[error("ошибка при работе с {}: {source}", .path.display())]
    Os {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// Classifies an OS error raised while operating on `path`.
    pub fn from_io(err: io::Error, path: &Path) -> Self {
        let path = path.to_path_buf();
        match err.kind() {
            io::ErrorKind::NotFound => Error::NotFound(path),
            io::ErrorKind::AlreadyExists => Error::AlreadyExists(path),
            io::ErrorKind::PermissionDenied => Error::PermissionDenied(path),
            io::ErrorKind::NotADirectory => Error::NotADirectory(path),
            _ => Error::Os { path, source: err },
        }
    }

    pub fn is_permission_denied(&self) -> bool {
        matches!(self, Error::PermissionDenied(_))
    }
}
