use clap::Parser;
use std::io::{self, BufRead, IsTerminal};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone, Default)]
#[command(
    author,
    version,
    about = "Small command-line utility for adding new entries to .gitignore"
)]
pub struct Cli {
    /// Language/framework to fetch a template for (e.g. node, python, rust)
    #[arg(short, long, conflicts_with = "search")]
    pub lang: Option<String>,

    /// Interactively search through the available templates
    #[arg(short, long)]
    pub search: bool,

    /// Clear the cache before fetching the template
    #[arg(short = 'c', long = "clear-cache")]
    pub clear_cache: bool,

    /// Skip the confirmation prompt
    #[arg(short = 'y', long)]
    pub confirm: bool,

    /// Do not perform I/O operations, only report what would change
    #[arg(short, long, conflicts_with = "overwrite")]
    pub dry_run: bool,

    /// Overwrite the .gitignore file instead of appending to it
    #[arg(short, long)]
    pub overwrite: bool,

    /// Print the entries that are being added or skipped
    #[arg(short, long)]
    pub verbose: bool,

    /// Cache directory for fetched templates
    #[arg(long)]
    pub cache_dir: Option<PathBuf>,

    /// Entries to add to .gitignore
    pub entries: Vec<String>,
}

impl Cli {
    /// True when the invocation asks for no work at all.
    pub fn is_noop(&self) -> bool {
        !self.clear_cache && !self.search && self.lang.is_none() && self.entries.is_empty()
    }
}

/// Non-empty lines piped through stdin count as entries, ahead of the
/// positional ones.
pub fn merge_piped_entries(positional: Vec<String>) -> Vec<String> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        return positional;
    }

    let mut entries: Vec<String> = stdin
        .lock()
        .lines()
        .map_while(io::Result::ok)
        .filter(|line| !line.is_empty())
        .collect();
    entries.extend(positional);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_invocation_is_a_noop() {
        assert!(Cli::default().is_noop());
    }

    #[test]
    fn any_work_request_is_not_a_noop() {
        let lang = Cli {
            lang: Some("node".to_string()),
            ..Cli::default()
        };
        let clear = Cli {
            clear_cache: true,
            ..Cli::default()
        };
        let entries = Cli {
            entries: vec!["*.out".to_string()],
            ..Cli::default()
        };

        assert!(!lang.is_noop());
        assert!(!clear.is_noop());
        assert!(!entries.is_noop());
    }

    #[test]
    fn conflicting_flags_are_rejected_before_any_io() {
        assert!(Cli::try_parse_from(["gitignore", "--overwrite", "--dry-run"]).is_err());
        assert!(Cli::try_parse_from(["gitignore", "--search", "--lang", "node"]).is_err());
    }

    #[test]
    fn lang_flag_requires_a_value() {
        assert!(Cli::try_parse_from(["gitignore", "--lang"]).is_err());
    }
}
