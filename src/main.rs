mod checks;
mod cli;
mod config;
mod confirm;
mod context;
mod error;
mod filesystem;
mod handlers;
mod utils;


use anyhow::{Context as _, Result};
use clap::Parser;
use cli::Cli;
use colored::*;
use config::load_settings;
use context::Context;
use filesystem::RealFileSystem;
use handlers::{Outcome, dispatch};
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(cli) {
        Ok(outcome) => {
            log::debug!("finished: {:?}", outcome);
            ExitCode::SUCCESS
        }
        Err(e) => {
            report(&e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<Outcome> {
    let settings = load_settings(cli.color)?;
    settings.apply();

    let mut out = io::stdout().lock();
    let mut input = io::stdin().lock();
    let mut ctx = Context::new(&RealFileSystem, &mut out, &mut input);

    let outcome = dispatch(cli.command, &mut ctx)?;
    out.flush().context("Failed to flush stdout")?;
    Ok(outcome)
}

fn report(e: &anyhow::Error) {
    let prefix = "❌ Ошибка:".red().bold();
    // Taxonomy errors already carry their cause in the message.
    if let Some(err) = e.downcast_ref::<error::Error>() {
        eprintln!("{} {}", prefix, err);
    } else {
        eprintln!("{} {:#}", prefix, e);
    }
}
