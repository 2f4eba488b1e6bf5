use anyhow::Result;
use colored::*;
use glob::{MatchOptions, Pattern};
use std::ffi::OsStr;
use std::io::Write;
use std::path::{Path, PathBuf};
use crate::checks::{Check, verify};
use crate::context::Context;
use crate::filesystem::FileSystem;
use crate::handlers::Outcome;
use crate::handlers::common::{SizeReading, dir_marker, file_marker, read_size};
use crate::utils::{human_readable_size, pluralize};

#[derive(Debug, Clone, PartialEq)]
pub enum HitKind {
    Dir,
    File(SizeReading),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Hit {
    pub path: PathBuf,
    pub kind: HitKind,
}

/// Shell-style name matcher (`*`, `?`, `[seq]`, `[!seq]`), always case-sensitive.
pub struct NameMatcher {
    pattern: Pattern,
}

impl NameMatcher {
    pub fn new(raw: &str) -> Self {
        // `**` is a path wildcard to glob and gets rejected unless it stands
        // alone as a component; for a single name it means the same as `*`.
        let mut collapsed = String::with_capacity(raw.len());
        for c in raw.chars() {
            if c == '*' && collapsed.ends_with('*') {
                continue;
            }
            collapsed.push(c);
        }

        // Invalid pattern, match it literally
        let pattern = Pattern::new(&collapsed)
            .or_else(|_| Pattern::new(&Pattern::escape(raw)))
            .unwrap_or_default();
        Self { pattern }
    }

    pub fn matches(&self, name: impl AsRef<OsStr>) -> bool {
        self.pattern
            .matches_with(&name.as_ref().to_string_lossy(), MatchOptions::new())
    }
}

pub fn search_shallow(fs: &dyn FileSystem, root: &Path, matcher: &NameMatcher) -> Result<Vec<Hit>> {
    let mut hits = Vec::new();
    for name in fs.list_entries(root)? {
        if !matcher.matches(&name) {
            continue;
        }
        let path = root.join(&name);
        let kind = if fs.is_directory(&path) {
            HitKind::Dir
        } else {
            HitKind::File(read_size(fs, &path))
        };
        hits.push(Hit { path, kind });
    }
    Ok(hits)
}

/// Files are tested before subdirectories at every level.
pub fn search_recursive(fs: &dyn FileSystem, root: &Path, matcher: &NameMatcher) -> Result<Vec<Hit>> {
    let mut hits = Vec::new();
    for step in fs.walk(root) {
        let step = step?;

        for file in step.files.iter().filter(|f| matcher.matches(f)) {
            let path = step.dir.join(file);
            let kind = HitKind::File(read_size(fs, &path));
            hits.push(Hit { path, kind });
        }
        for sub in step.subdirs.iter().filter(|d| matcher.matches(d)) {
            hits.push(Hit { path: step.dir.join(sub), kind: HitKind::Dir });
        }
    }
    Ok(hits)
}

fn render_hit(out: &mut dyn Write, hit: &Hit) -> Result<()> {
    match hit.kind {
        HitKind::Dir => writeln!(out, "{} {}/", dir_marker(), hit.path.display())?,
        HitKind::File(SizeReading::Known(bytes)) => {
            writeln!(out, "{} {} ({})", file_marker(), hit.path.display(), human_readable_size(bytes))?
        }
        HitKind::File(_) => writeln!(
            out,
            "{} {} ({})",
            file_marker(),
            hit.path.display(),
            "не удалось получить размер".dimmed()
        )?,
    }
    Ok(())
}

pub fn handle_search(ctx: &mut Context<'_>, pattern: &str, root: &Path, recursive: bool) -> Result<Outcome> {
    verify(ctx.fs, &[Check::Exists(root)])?;

    let matcher = NameMatcher::new(pattern);
    let hits = if recursive {
        search_recursive(ctx.fs, root, &matcher)?
    } else {
        search_shallow(ctx.fs, root, &matcher)?
    };

    for hit in &hits {
        render_hit(ctx.out, hit)?;
    }

    let count = hits.len() as u64;
    if count > 0 {
        writeln!(
            ctx.out,
            "\nВсего {} найдено: {}",
            pluralize(count, "объект", "объекта", "объектов"),
            count.to_string().bold()
        )?;
    } else if recursive {
        writeln!(ctx.out, "Файлы по шаблону \"{}\" не найдены в \"{}\" и подпапках", pattern, root.display())?;
    } else {
        writeln!(ctx.out, "Файлы по шаблону \"{}\" не найдены в \"{}\"", pattern, root.display())?;
    }
    Ok(Outcome::Done)
}
