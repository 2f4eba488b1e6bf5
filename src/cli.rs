use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fsx", version, about = "fsx: Minimalist File Explorer")]
pub struct Cli {
    /// Colorize output (overrides FSX_COLOR)
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorMode>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EntryType {
    File,
    Dir,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the contents of a directory
    #[command(visible_alias = "ls")]
    List {
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Create a file or a directory
    Create {
        #[arg(value_enum)]
        kind: EntryType,
        name: String,
        /// Where to create it
        #[arg(short, long, default_value = ".")]
        path: PathBuf,
    },

    /// Rename a file or a directory
    Rename {
        old_name: String,
        new_name: String,
        /// Directory holding the entry
        #[arg(short, long, default_value = ".")]
        path: PathBuf,
    },

    /// Delete a file or a directory
    #[command(visible_alias = "rm")]
    Delete {
        name: PathBuf,
        /// Delete a non-empty directory with its contents
        #[arg(short, long)]
        recursive: bool,
        /// Do not ask for confirmation
        #[arg(short, long)]
        force: bool,
        /// Directory holding the entry
        #[arg(short, long, default_value = ".")]
        path: PathBuf,
    },

    /// Move a file or a directory (a trailing '/' means "into this directory")
    #[command(visible_alias = "mv")]
    Move {
        name: String,
        destination: String,
        /// Directory holding the entry
        #[arg(short, long, default_value = ".")]
        path: PathBuf,
    },

    /// Copy a file or a directory (a trailing '/' means "into this directory")
    #[command(visible_alias = "cp")]
    Copy {
        source: String,
        destination: String,
        /// Copy directories with their contents
        #[arg(short, long)]
        recursive: bool,
        /// Directory holding the source
        #[arg(short, long, default_value = ".")]
        path: PathBuf,
    },

    /// Find entries by a shell-style pattern, e.g. '*.txt', 'report.*'
    Search {
        pattern: String,
        /// Where to search
        #[arg(short, long, default_value = ".")]
        path: PathBuf,
        /// Descend into subdirectories
        #[arg(short, long)]
        recursive: bool,
    },
}
