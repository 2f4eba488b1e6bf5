use anyhow::Result;
use colored::*;
use std::io::Write;
use std::path::Path;
use crate::checks::{Check, verify};
use crate::context::Context;
use crate::handlers::Outcome;

pub fn handle_rename(ctx: &mut Context<'_>, old_name: &str, new_name: &str, path: &Path) -> Result<Outcome> {
    let old_path = path.join(old_name);
    let new_path = path.join(new_name);

    verify(ctx.fs, &[Check::Exists(&old_path), Check::Absent(&new_path)])?;
    ctx.fs.rename(&old_path, &new_path)?;

    writeln!(ctx.out, "{} Успешно переименовано: {} -> {}", "✔".green(), old_name, new_name)?;
    Ok(Outcome::Done)
}
