use anyhow::Result;
use colored::*;
use std::io::Write;
use std::path::Path;
use crate::checks::{Check, verify};
use crate::context::Context;
use crate::handlers::Outcome;
use crate::handlers::common::resolve_destination;

pub fn handle_move(ctx: &mut Context<'_>, name: &str, destination: &str, path: &Path) -> Result<Outcome> {
    let source = path.join(name);
    verify(ctx.fs, &[Check::Exists(&source)])?;

    let target = resolve_destination(ctx.fs, name, destination)?;
    verify(ctx.fs, &[Check::Absent(&target)])?;

    ctx.fs.move_path(&source, &target)?;

    writeln!(ctx.out, "{} Успешно перемещено: {} -> {}", "✔".green(), name, target.display())?;
    Ok(Outcome::Done)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::filesystem::RealFileSystem;
    use std::fs;
    use tempfile::tempdir;

    fn mv(name: &str, destination: &str, path: &Path) -> Result<Outcome> {
        let mut out = Vec::new();
        let mut input: &[u8] = &[];
        let mut ctx = Context::new(&RealFileSystem, &mut out, &mut input);
        handle_move(&mut ctx, name, destination, path)
    }

    #[test]
    fn test_move_into_directory_keeps_name() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("report.txt"), "r").unwrap();
        fs::create_dir(dir.path().join("archive")).unwrap();

        let dest = format!("{}/", dir.path().join("archive").display());
        mv("report.txt", &dest, dir.path()).unwrap();

        assert!(!dir.path().join("report.txt").exists());
        assert_eq!(fs::read_to_string(dir.path().join("archive/report.txt")).unwrap(), "r");
    }

    #[test]
    fn test_move_to_explicit_path() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("tree/leaf")).unwrap();

        let dest = dir.path().join("moved");
        mv("tree", &dest.to_string_lossy(), dir.path()).unwrap();
        assert!(dest.join("leaf").is_dir());
        assert!(!dir.path().join("tree").exists());
    }

    #[test]
    fn test_move_into_missing_directory() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), "").unwrap();

        let dest = format!("{}/", dir.path().join("nowhere").display());
        let err = mv("a.txt", &dest, dir.path()).unwrap_err();
        assert!(matches!(err.downcast_ref::<Error>(), Some(Error::NotFound(_))));
        assert!(dir.path().join("a.txt").exists());
    }
}
