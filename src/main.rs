mod app;
mod cache;
mod cli;
mod error;
mod gitignore;
mod template;
mod ui;

use clap::{CommandFactory, Parser};
use std::path::PathBuf;
use std::process::ExitCode;
use tokio::runtime::Runtime;

use app::App;
use cache::TemplateCache;
use cli::Cli;
use template::TemplateClient;
use ui::TermPrompter;
use ui::theme::{configure_theme, detect_theme_kind_from_env};

fn main() -> ExitCode {
    let mut args = Cli::parse();
    args.entries = cli::merge_piped_entries(args.entries);

    if args.is_noop() {
        let _ = Cli::command().print_help();
        return ExitCode::SUCCESS;
    }

    configure_theme(detect_theme_kind_from_env());

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            ui::print_error(&err.to_string());
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Cli) -> error::Result<()> {
    let cache = TemplateCache::load(args.cache_dir.clone());
    let templates = TemplateClient::new()?;
    let mut app = App::new(cache, templates, TermPrompter, PathBuf::from(".gitignore"));

    let rt = Runtime::new()?;
    rt.block_on(app.run(args))
}
