use indicatif::ProgressBar;
use std::path::PathBuf;
use std::time::Duration;

use crate::cache::TemplateCache;
use crate::cli::Cli;
use crate::error::Result;
use crate::gitignore::{self, WriteMode};
use crate::template::TemplateClient;
use crate::ui::{self, Prompter};

pub struct App<P> {
    cache: TemplateCache,
    templates: TemplateClient,
    prompter: P,
    ignore_path: PathBuf,
}

impl<P: Prompter> App<P> {
    pub fn new(
        cache: TemplateCache,
        templates: TemplateClient,
        prompter: P,
        ignore_path: PathBuf,
    ) -> Self {
        Self {
            cache,
            templates,
            prompter,
            ignore_path,
        }
    }

    /// One invocation, start to finish: optional cache clear, optional
    /// interactive selection, optional template fetch, reconciliation,
    /// write, summary.
    pub async fn run(&mut self, args: &Cli) -> Result<()> {
        if args.clear_cache {
            ui::print_notice("Clearing cache...")?;
            self.cache.clear()?;
            if !args.search && args.lang.is_none() && args.entries.is_empty() {
                ui::print_notice("Cache cleared. No entries to add.")?;
                return Ok(());
            }
        }

        let mut lang = args.lang.clone();
        if args.search || lang.as_deref() == Some("list") {
            lang = match self.pick_template(args.confirm).await? {
                Some(choice) => Some(choice),
                None => {
                    ui::print_notice("Aborted.")?;
                    return Ok(());
                }
            };
        }

        let mut entries = args.entries.clone();
        if let Some(name) = &lang {
            entries.extend(self.fetch_with_spinner(name).await?);
        }

        let existing = gitignore::read_ignore_file(&self.ignore_path)?;
        let result = gitignore::reconcile(&existing, &entries);

        if args.verbose || args.dry_run {
            ui::print_added(&result.added, args.dry_run)?;
            ui::print_skipped(&result.skipped, args.dry_run)?;
        }

        if !args.dry_run {
            let mode = if args.overwrite {
                WriteMode::Overwrite
            } else {
                WriteMode::Append
            };
            gitignore::apply(&self.ignore_path, &result.added, mode)?;
        }

        ui::print_summary(result.add_count, result.skip_count)
    }

    /// Fetches the template catalog and asks the user to pick a name.
    /// Returns `None` when the confirmation is declined.
    async fn pick_template(&mut self, skip_confirm: bool) -> Result<Option<String>> {
        let lines = self.templates.fetch("list", &mut self.cache).await?;
        let catalog: Vec<String> = lines
            .iter()
            .flat_map(|line| line.split(','))
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(String::from)
            .collect();

        let choice = self.prompter.select(&catalog)?;
        if !skip_confirm
            && !self
                .prompter
                .confirm(&format!("Fetch the {choice} template?"))?
        {
            return Ok(None);
        }
        Ok(Some(choice))
    }

    async fn fetch_with_spinner(&mut self, name: &str) -> Result<Vec<String>> {
        let spinner = ProgressBar::new_spinner();
        spinner.set_message(format!("Fetching a template for {name}"));
        spinner.enable_steady_tick(Duration::from_millis(80));

        match self.templates.fetch(name, &mut self.cache).await {
            Ok(template) => {
                spinner.finish_and_clear();
                Ok(template)
            }
            Err(err) => {
                spinner.abandon();
                Err(err)
            }
        }
    }
}
