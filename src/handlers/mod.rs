pub mod common;
pub mod copy;
pub mod create;
pub mod delete;
pub mod list;
pub mod mv;
pub mod rename;
pub mod search;

use anyhow::Result;
use log::debug;
use crate::cli::Commands;
use crate::context::Context;

/// How a command finished when it did not fail. All of these exit with 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Done,
    /// The user answered "no" to a confirmation.
    Declined,
    /// The command refused to act without an extra flag (e.g. `--recursive`).
    Refused,
}

pub fn dispatch(command: Commands, ctx: &mut Context<'_>) -> Result<Outcome> {
    debug!("dispatching {:?}", command);

    match command {
        Commands::List { path } => list::handle_list(ctx, &path),
        Commands::Create { kind, name, path } => create::handle_create(ctx, kind, &name, &path),
        Commands::Rename { old_name, new_name, path } => {
            rename::handle_rename(ctx, &old_name, &new_name, &path)
        }
        Commands::Delete { name, recursive, force, path } => {
            delete::handle_delete(ctx, &name, &path, delete::DeleteFlags { recursive, force })
        }
        Commands::Move { name, destination, path } => mv::handle_move(ctx, &name, &destination, &path),
        Commands::Copy { source, destination, recursive, path } => {
            copy::handle_copy(ctx, &source, &destination, &path, recursive)
        }
        Commands::Search { pattern, path, recursive } => {
            search::handle_search(ctx, &pattern, &path, recursive)
        }
    }
}
