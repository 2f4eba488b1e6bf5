use anyhow::Result;
use colored::*;
use std::io::Write;
use std::path::Path;
use crate::checks::{Check, verify};
use crate::context::Context;
use crate::handlers::Outcome;
use crate::handlers::common::resolve_destination;

pub fn handle_copy(
    ctx: &mut Context<'_>,
    source: &str,
    destination: &str,
    path: &Path,
    recursive: bool,
) -> Result<Outcome> {
    let source_path = path.join(source);
    verify(ctx.fs, &[Check::Exists(&source_path)])?;

    let target = resolve_destination(ctx.fs, source, destination)?;
    verify(ctx.fs, &[Check::Absent(&target)])?;

    if ctx.fs.is_directory(&source_path) {
        if !recursive {
            writeln!(
                ctx.out,
                "{} Для копирования директории {} используйте ключ --recursive или -r",
                "⚠".yellow(),
                source
            )?;
            return Ok(Outcome::Refused);
        }
        ctx.fs.copy_tree(&source_path, &target)?;
    } else {
        ctx.fs.copy_file(&source_path, &target)?;
    }

    writeln!(ctx.out, "{} {} успешно скопирован в {}", "✔".green(), source, target.display())?;
    Ok(Outcome::Done)
}
