use crossterm::{
    QueueableCommand,
    style::{Attribute, Print, ResetColor, SetAttribute, SetForegroundColor},
};
use std::io::{self, Write};

use crate::error::Result;
use crate::gitignore::Entry;
use crate::ui::theme::get_theme;

fn queue_line_prefix(stdout: &mut io::Stdout, dry_run: bool) -> Result<()> {
    if dry_run {
        stdout.queue(Print("[dry-run]"))?;
    }
    stdout.queue(Print("    "))?;
    Ok(())
}

/// One line per non-comment entry being added.
pub fn print_added(entries: &[Entry], dry_run: bool) -> Result<()> {
    let theme = get_theme();
    let mut stdout = io::stdout();

    for entry in entries.iter().filter(|entry| !entry.is_comment) {
        queue_line_prefix(&mut stdout, dry_run)?;
        stdout.queue(SetForegroundColor(theme.success))?;
        stdout.queue(SetAttribute(Attribute::Bold))?;
        stdout.queue(Print("Adding: "))?;
        stdout.queue(SetAttribute(Attribute::Reset))?;
        stdout.queue(SetForegroundColor(theme.detail))?;
        stdout.queue(Print(&entry.name))?;
        stdout.queue(ResetColor)?;
        stdout.queue(Print(" to .gitignore\n"))?;
    }

    stdout.flush()?;
    Ok(())
}

/// One line per non-comment entry that is already ignored.
pub fn print_skipped(entries: &[Entry], dry_run: bool) -> Result<()> {
    let theme = get_theme();
    let mut stdout = io::stdout();

    for entry in entries.iter().filter(|entry| !entry.is_comment) {
        queue_line_prefix(&mut stdout, dry_run)?;
        stdout.queue(SetForegroundColor(theme.warning))?;
        stdout.queue(SetAttribute(Attribute::Bold))?;
        stdout.queue(Print("Skipping: "))?;
        stdout.queue(SetAttribute(Attribute::Reset))?;
        stdout.queue(SetForegroundColor(theme.detail))?;
        stdout.queue(Print(&entry.name))?;
        stdout.queue(ResetColor)?;
        stdout.queue(Print(" is already ignored\n"))?;
    }

    stdout.flush()?;
    Ok(())
}

pub fn print_summary(add_count: usize, skip_count: usize) -> Result<()> {
    let theme = get_theme();
    let mut stdout = io::stdout();

    stdout.queue(SetForegroundColor(theme.success))?;
    stdout.queue(SetAttribute(Attribute::Bold))?;
    stdout.queue(Print("Done!"))?;
    stdout.queue(SetAttribute(Attribute::Reset))?;
    stdout.queue(Print(" Added "))?;
    stdout.queue(SetForegroundColor(theme.success))?;
    stdout.queue(Print(add_count.to_string()))?;
    stdout.queue(ResetColor)?;
    stdout.queue(Print(" new entries. Skipped "))?;
    stdout.queue(SetForegroundColor(theme.warning))?;
    stdout.queue(Print(skip_count.to_string()))?;
    stdout.queue(ResetColor)?;
    stdout.queue(Print(".\n"))?;

    stdout.flush()?;
    Ok(())
}

pub fn print_notice(message: &str) -> Result<()> {
    let theme = get_theme();
    let mut stdout = io::stdout();

    stdout.queue(SetForegroundColor(theme.warning))?;
    stdout.queue(Print(message))?;
    stdout.queue(ResetColor)?;
    writeln!(stdout)?;

    stdout.flush()?;
    Ok(())
}

pub fn print_error(message: &str) {
    let theme = get_theme();
    let mut stderr = io::stderr();

    let _ = stderr
        .queue(SetForegroundColor(theme.error))
        .and_then(|s| s.queue(SetAttribute(Attribute::Bold)))
        .and_then(|s| s.queue(Print("error: ")))
        .and_then(|s| s.queue(SetAttribute(Attribute::Reset)))
        .and_then(|s| s.queue(Print(message)))
        .and_then(|s| s.queue(Print("\n")))
        .and_then(|s| s.flush());
}
