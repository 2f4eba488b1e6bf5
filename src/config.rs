use anyhow::{Result, bail};
use colored::*;
use std::env;
use crate::cli::ColorMode;

pub const COLOR_VAR: &str = "FSX_COLOR";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub color: ColorMode,
}

/// Resolves settings: `--color` flag, then `FSX_COLOR` (from the process
/// environment or a local `.env`), then `auto`.
pub fn load_settings(cli_color: Option<ColorMode>) -> Result<Settings> {
    // A missing .env is fine; a malformed one is reported but not fatal.
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            log::warn!("Ignoring unreadable .env: {}", e);
        }
    }

    let color = match cli_color {
        Some(mode) => mode,
        None => match env::var(COLOR_VAR) {
            Ok(raw) => parse_color(&raw)?,
            Err(_) => ColorMode::Auto,
        },
    };

    Ok(Settings { color })
}

pub fn parse_color(raw: &str) -> Result<ColorMode> {
    match raw.trim().to_lowercase().as_str() {
        "" | "auto" => Ok(ColorMode::Auto),
        "always" => Ok(ColorMode::Always),
        "never" => Ok(ColorMode::Never),
        other => bail!("❌ Configuration Error: {}='{}' (expected auto, always or never)", COLOR_VAR, other),
    }
}

impl Settings {
    pub fn apply(&self) {
        match self.color {
            ColorMode::Always => control::set_override(true),
            ColorMode::Never => control::set_override(false),
            ColorMode::Auto => control::unset_override(),
        }
    }
}
