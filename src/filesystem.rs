use crate::error::{Error, Result};
use log::debug;
use std::ffi::OsString;
use std::fs::{self, File, FileTimes, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// One directory visited by [`FileSystem::walk`].
#[derive(Debug, Clone, PartialEq)]
pub struct WalkStep {
    pub dir: PathBuf,
    pub subdirs: Vec<OsString>,
    pub files: Vec<OsString>,
}

pub type Walk<'a> = Box<dyn Iterator<Item = Result<WalkStep>> + 'a>;

/// Host filesystem operations the commands are built from.
pub trait FileSystem {
    fn exists(&self, path: &Path) -> bool;
    fn is_directory(&self, path: &Path) -> bool;
    /// Names of the immediate children, sorted. Names are kept as the OS
    /// returns them so they can be joined back onto `path`.
    fn list_entries(&self, path: &Path) -> Result<Vec<OsString>>;
    fn size(&self, path: &Path) -> Result<u64>;
    fn create_file(&self, path: &Path) -> Result<()>;
    fn create_directory(&self, path: &Path) -> Result<()>;
    fn remove_file(&self, path: &Path) -> Result<()>;
    fn remove_empty_directory(&self, path: &Path) -> Result<()>;
    fn remove_directory_tree(&self, path: &Path) -> Result<()>;
    fn rename(&self, from: &Path, to: &Path) -> Result<()>;
    fn move_path(&self, from: &Path, to: &Path) -> Result<()>;
    fn copy_file(&self, from: &Path, to: &Path) -> Result<()>;
    fn copy_tree(&self, from: &Path, to: &Path) -> Result<()>;
    /// Pre-order traversal of every directory under `root`, `root` included.
    fn walk<'a>(&'a self, root: &Path) -> Walk<'a>;
}

pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn exists(&self, path: &Path) -> bool {
        // A dangling symlink still occupies the name.
        fs::symlink_metadata(path).is_ok()
    }

    fn is_directory(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn list_entries(&self, path: &Path) -> Result<Vec<OsString>> {
        let read_dir = fs::read_dir(path).map_err(|e| Error::from_io(e, path))?;

        let mut names = Vec::new();
        for entry in read_dir {
            let entry = entry.map_err(|e| Error::from_io(e, path))?;
            names.push(entry.file_name());
        }

        // Sort for consistent output
        names.sort();
        Ok(names)
    }

    fn size(&self, path: &Path) -> Result<u64> {
        fs::metadata(path)
            .map(|md| md.len())
            .map_err(|e| Error::from_io(e, path))
    }

    fn create_file(&self, path: &Path) -> Result<()> {
        debug!("create file {}", path.display());
        OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .map(drop)
            .map_err(|e| Error::from_io(e, path))
    }

    fn create_directory(&self, path: &Path) -> Result<()> {
        debug!("create directory {}", path.display());
        fs::create_dir_all(path).map_err(|e| Error::from_io(e, path))
    }

    fn remove_file(&self, path: &Path) -> Result<()> {
        debug!("remove file {}", path.display());
        fs::remove_file(path).map_err(|e| Error::from_io(e, path))
    }

    fn remove_empty_directory(&self, path: &Path) -> Result<()> {
        debug!("remove empty directory {}", path.display());
        fs::remove_dir(path).map_err(|e| Error::from_io(e, path))
    }

    fn remove_directory_tree(&self, path: &Path) -> Result<()> {
        debug!("remove directory tree {}", path.display());
        fs::remove_dir_all(path).map_err(|e| Error::from_io(e, path))
    }

    fn rename(&self, from: &Path, to: &Path) -> Result<()> {
        debug!("rename {} -> {}", from.display(), to.display());
        fs::rename(from, to).map_err(|e| blame(e, from, to, source_present(from)))
    }

    fn move_path(&self, from: &Path, to: &Path) -> Result<()> {
        debug!("move {} -> {}", from.display(), to.display());
        match fs::rename(from, to) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::CrossesDevices => {
                debug!("rename crosses devices, falling back to copy + remove");
                if from.is_dir() {
                    self.copy_tree(from, to)?;
                    self.remove_directory_tree(from)
                } else {
                    self.copy_file(from, to)?;
                    self.remove_file(from)
                }
            }
            Err(e) => Err(blame(e, from, to, source_present(from))),
        }
    }

    fn copy_file(&self, from: &Path, to: &Path) -> Result<()> {
        debug!("copy file {} -> {}", from.display(), to.display());
        copy_with_times(from, to).map_err(|e| blame(e, from, to, source_readable(from)))
    }

    fn copy_tree(&self, from: &Path, to: &Path) -> Result<()> {
        debug!("copy tree {} -> {}", from.display(), to.display());
        copy_dir_recursive(from, to)
    }

    fn walk<'a>(&'a self, root: &Path) -> Walk<'a> {
        walk_tree(self, root)
    }
}

/// Drives `walkdir` over `root` and describes each directory through `fs`.
/// Symlinked directories are reported as subdirectories but not entered.
pub fn walk_tree<'a>(fs: &'a dyn FileSystem, root: &Path) -> Walk<'a> {
    let steps = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_map(move |entry| match entry {
            Ok(entry) if entry.file_type().is_dir() => Some(walk_step(fs, entry.path())),
            Ok(_) => None,
            Err(err) => {
                let path = err.path().map(Path::to_path_buf).unwrap_or_default();
                Some(Err(Error::from_io(io::Error::from(err), &path)))
            }
        });
    Box::new(steps)
}

fn walk_step(fs: &dyn FileSystem, dir: &Path) -> Result<WalkStep> {
    let mut subdirs = Vec::new();
    let mut files = Vec::new();

    for name in fs.list_entries(dir)? {
        if fs.is_directory(&dir.join(&name)) {
            subdirs.push(name);
        } else {
            files.push(name);
        }
    }

    Ok(WalkStep {
        dir: dir.to_path_buf(),
        subdirs,
        files,
    })
}

/// Copies content and permissions, then the access/modification times.
fn copy_with_times(from: &Path, to: &Path) -> io::Result<()> {
    fs::copy(from, to)?;

    let md = fs::metadata(from)?;
    let mut times = FileTimes::new();
    if let Ok(accessed) = md.accessed() {
        times = times.set_accessed(accessed);
    }
    if let Ok(modified) = md.modified() {
        times = times.set_modified(modified);
    }
    // futimens needs ownership, not write access, so read-only copies work.
    File::open(to)?.set_times(times)
}

fn source_present(from: &Path) -> bool {
    fs::symlink_metadata(from).is_ok()
}

fn source_readable(from: &Path) -> bool {
    File::open(from).is_ok()
}

/// Attributes the failure of a two-path operation. While the source is
/// still usable the destination side failed; a NotFound there means its
/// parent directory is missing.
fn blame(err: io::Error, from: &Path, to: &Path, source_ok: bool) -> Error {
    if !source_ok {
        return Error::from_io(err, from);
    }
    if err.kind() == io::ErrorKind::NotFound {
        if let Some(parent) = to.parent().filter(|p| !p.as_os_str().is_empty() && !p.exists()) {
            return Error::NotFound(parent.to_path_buf());
        }
    }
    Error::from_io(err, to)
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> Result<()> {
    fs::create_dir_all(dst).map_err(|e| Error::from_io(e, dst))?;

    for entry in fs::read_dir(src).map_err(|e| Error::from_io(e, src))? {
        let entry = entry.map_err(|e| Error::from_io(e, src))?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            copy_with_times(&src_path, &dst_path)
                .map_err(|e| blame(e, &src_path, &dst_path, source_readable(&src_path)))?;
        }
    }
    Ok(())
}
