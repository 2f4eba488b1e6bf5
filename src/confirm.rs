use crate::context::Context;
use anyhow::Result;
use colored::*;
use log::info;
use std::io::{BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Yes,
    No,
    Invalid,
}

/// Accepts `y`/`n` and their Cyrillic counterparts `д`/`н`.
pub fn parse_confirmation(raw: &str) -> Answer {
    match raw.trim().to_lowercase().as_str() {
        "y" | "д" => Answer::Yes,
        "n" | "н" => Answer::No,
        _ => Answer::Invalid,
    }
}

/// Asks before deleting `name`. `force` answers yes without prompting;
/// end of input counts as no.
pub fn confirm(ctx: &mut Context<'_>, name: &str, force: bool) -> Result<bool> {
    if force {
        return Ok(true);
    }

    writeln!(
        ctx.out,
        "Вы действительно хотите удалить {}? Введите y/n, д/н для подтверждения:",
        name.bold()
    )?;

    loop {
        ctx.out.flush()?;
        let mut line = String::new();
        if ctx.input.read_line(&mut line)? == 0 {
            info!("confirmation input closed, treating as 'no'");
            return Ok(false);
        }

        match parse_confirmation(&line) {
            Answer::Yes => return Ok(true),
            Answer::No => return Ok(false),
            Answer::Invalid => {
                writeln!(
                    ctx.out,
                    "{} Пожалуйста введите y/n, д/н",
                    "Введены некорректные данные!".yellow()
                )?;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filesystem::RealFileSystem;

    #[test]
    fn test_parse_confirmation() {
        assert_eq!(parse_confirmation("y\n"), Answer::Yes);
        assert_eq!(parse_confirmation("Д"), Answer::Yes);
        assert_eq!(parse_confirmation(" n "), Answer::No);
        assert_eq!(parse_confirmation("н"), Answer::No);
        assert_eq!(parse_confirmation("yes"), Answer::Invalid);
        assert_eq!(parse_confirmation(""), Answer::Invalid);
    }

    fn ask(input: &str, force: bool) -> (bool, String) {
        let mut out = Vec::new();
        let mut reader = input.as_bytes();
        let answer = {
            let mut ctx = Context::new(&RealFileSystem, &mut out, &mut reader);
            confirm(&mut ctx, "notes.txt", force).unwrap()
        };
        (answer, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_confirm_reprompts_until_valid() {
        let (answer, out) = ask("maybe\n???\nд\n", false);
        assert!(answer);
        assert_eq!(out.matches("Пожалуйста введите").count(), 2);
    }

    #[test]
    fn test_confirm_force_skips_prompt() {
        let (answer, out) = ask("", true);
        assert!(answer);
        assert!(out.is_empty());
    }

    #[test]
    fn test_confirm_eof_is_no() {
        let (answer, _) = ask("what\n", false);
        assert!(!answer);
    }
}
