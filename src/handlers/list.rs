use anyhow::Result;
use colored::*;
use std::borrow::Cow;
use std::ffi::OsString;
use std::io::Write;
use std::path::Path;
use crate::checks::{Check, verify};
use crate::context::Context;
use crate::filesystem::FileSystem;
use crate::handlers::Outcome;
use crate::handlers::common::{SizeReading, dir_marker, file_marker, human_reading, read_size};
use crate::utils::{human_readable_size, pluralize};

const SIZE_COLUMN: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub enum EntryKind {
    Dir,
    File(SizeReading),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListedEntry {
    pub name: OsString,
    pub kind: EntryKind,
}

impl ListedEntry {
    pub fn display_name(&self) -> Cow<'_, str> {
        self.name.to_string_lossy()
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Totals {
    pub files: u64,
    pub dirs: u64,
    pub bytes: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub entries: Vec<ListedEntry>,
}

impl Listing {
    /// Files whose size could not be read are left out of both the file
    /// count and the byte total.
    pub fn totals(&self) -> Totals {
        let mut totals = Totals::default();
        for entry in &self.entries {
            match entry.kind {
                EntryKind::Dir => totals.dirs += 1,
                EntryKind::File(reading) => {
                    if let Some(bytes) = reading.known() {
                        totals.files += 1;
                        totals.bytes += bytes;
                    }
                }
            }
        }
        totals
    }

    pub fn name_width(&self) -> usize {
        self.entries.iter().map(|e| e.display_name().chars().count()).max().unwrap_or(0)
    }
}

pub fn collect_listing(fs: &dyn FileSystem, dir: &Path) -> Result<Listing> {
    verify(fs, &[Check::Directory(dir)])?;

    let entries = fs
        .list_entries(dir)?
        .into_iter()
        .map(|name| {
            let full = dir.join(&name);
            let kind = if fs.is_directory(&full) {
                EntryKind::Dir
            } else {
                EntryKind::File(read_size(fs, &full))
            };
            ListedEntry { name, kind }
        })
        .collect();

    Ok(Listing { entries })
}

pub fn render_listing(out: &mut dyn Write, listing: &Listing) -> Result<()> {
    let width = listing.name_width();

    for entry in &listing.entries {
        match entry.kind {
            EntryKind::Dir => writeln!(out, "{} {:<width$}/", dir_marker(), entry.display_name())?,
            EntryKind::File(reading) => writeln!(
                out,
                "{} {:<width$}{:>SIZE_COLUMN$}",
                file_marker(),
                entry.display_name(),
                human_reading(reading)
            )?,
        }
    }

    let totals = listing.totals();
    writeln!(
        out,
        "{} {} {}, {} {}, общий размер: {}",
        "Итого:".bold(),
        totals.files,
        pluralize(totals.files, "файл", "файла", "файлов"),
        totals.dirs,
        pluralize(totals.dirs, "папка", "папки", "папок"),
        human_readable_size(totals.bytes)
    )?;
    Ok(())
}

pub fn handle_list(ctx: &mut Context<'_>, path: &Path) -> Result<Outcome> {
    writeln!(ctx.out, "Вы находитесь в {}", path.display().to_string().cyan())?;

    let listing = collect_listing(ctx.fs, path)?;
    render_listing(ctx.out, &listing)?;
    Ok(Outcome::Done)
}
