use anyhow::Result;
use colored::*;
use log::info;
use std::io::Write;
use std::path::Path;
use crate::checks::{Check, verify};
use crate::confirm::confirm;
use crate::context::Context;
use crate::handlers::Outcome;

#[derive(Debug, Default, Clone, Copy)]
pub struct DeleteFlags {
    pub recursive: bool,
    pub force: bool,
}

/// What kind of removal a target needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removal {
    File,
    EmptyDir,
    Tree,
}

/// Decides how to remove `target`. `None` means a non-empty directory
/// without `--recursive`. A directory we cannot list is an error.
pub fn plan_removal(ctx: &Context<'_>, target: &Path, recursive: bool) -> Result<Option<Removal>> {
    if !ctx.fs.is_directory(target) {
        return Ok(Some(Removal::File));
    }
    if ctx.fs.list_entries(target)?.is_empty() {
        return Ok(Some(Removal::EmptyDir));
    }
    Ok(recursive.then_some(Removal::Tree))
}

pub fn handle_delete(ctx: &mut Context<'_>, name: &Path, path: &Path, flags: DeleteFlags) -> Result<Outcome> {
    let target = path.join(name);
    let shown = name.display().to_string();
    verify(ctx.fs, &[Check::Exists(&target)])?;

    let Some(removal) = plan_removal(ctx, &target, flags.recursive)? else {
        writeln!(
            ctx.out,
            "{} Невозможно удалить непустую директорию {} без ключа --recursive или -r",
            "⚠".yellow(),
            shown
        )?;
        return Ok(Outcome::Refused);
    };

    if !confirm(ctx, &shown, flags.force)? {
        info!("deletion of {} declined", target.display());
        return Ok(Outcome::Declined);
    }

    let message = match removal {
        Removal::File => {
            ctx.fs.remove_file(&target)?;
            "Файл успешно удален"
        }
        Removal::EmptyDir => {
            ctx.fs.remove_empty_directory(&target)?;
            "Директория успешно удалена"
        }
        Removal::Tree => {
            ctx.fs.remove_directory_tree(&target)?;
            "Директория успешно удалена (вместе с содержимым)"
        }
    };

    writeln!(ctx.out, "{} {}: {}", "✔".green(), message, shown)?;
    Ok(Outcome::Done)
}
