use anyhow::Result;
use colored::*;
use std::io::Write;
use std::path::Path;
use crate::checks::{Check, verify};
use crate::cli::EntryType;
use crate::context::Context;
use crate::handlers::Outcome;

pub fn handle_create(ctx: &mut Context<'_>, kind: EntryType, name: &str, path: &Path) -> Result<Outcome> {
    let target = path.join(name);
    verify(ctx.fs, &[Check::Absent(&target)])?;

    let what = match kind {
        EntryType::File => {
            ctx.fs.create_file(&target)?;
            "Файл успешно создан"
        }
        EntryType::Dir => {
            ctx.fs.create_directory(&target)?;
            "Директория успешно создана"
        }
    };

    writeln!(ctx.out, "{} {} в {}", "✔".green(), what, path.display())?;
    Ok(Outcome::Done)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::filesystem::RealFileSystem;
    use std::fs;
    use tempfile::tempdir;

    fn create(kind: EntryType, name: &str, path: &Path) -> Result<Outcome> {
        let mut out = Vec::new();
        let mut input: &[u8] = &[];
        let mut ctx = Context::new(&RealFileSystem, &mut out, &mut input);
        handle_create(&mut ctx, kind, name, path)
    }

    #[test]
    fn test_create_directory() {
        let dir = tempdir().unwrap();
        create(EntryType::Dir, "fresh", dir.path()).unwrap();
        assert!(dir.path().join("fresh").is_dir());
    }

    #[test]
    fn test_create_over_existing_directory_fails() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("taken")).unwrap();

        let err = create(EntryType::File, "taken", dir.path()).unwrap_err();
        assert!(matches!(err.downcast_ref::<Error>(), Some(Error::AlreadyExists(_))));
        assert!(dir.path().join("taken").is_dir());
    }

    #[test]
    fn test_create_file_in_missing_parent() {
        let dir = tempdir().unwrap();
        let err = create(EntryType::File, "a.txt", &dir.path().join("ghost")).unwrap_err();
        assert!(matches!(err.downcast_ref::<Error>(), Some(Error::NotFound(_))));
    }
}
