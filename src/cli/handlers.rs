use std::path::PathBuf;

use tracing::{debug, info};

use crate::{
    cli::commands::{Cli, Command, FillArgs},
    host::{
        ConfigSource, EditorSettingsOpener, FileConfigSource, GitRepository, LabelPicker, Picker,
        PrefixConfig, Repository, SettingsOpener, TerminalPicker, render_items,
    },
    prefix::{Picklist, PrefixError, Selection, defaults::conventional_prefixes, rewrite_message},
};

/// How a fill invocation ended
#[derive(Debug, PartialEq)]
pub enum FillOutcome {
    /// The commit message was rewritten to this text
    Updated(String),
    /// The user dismissed the picklist
    Cancelled,
    SettingsOpened,
}

/// One fill invocation: pick a prefix and rewrite the commit message with it. Every failure
/// returns before the commit message is written.
pub async fn fill_commit_message<R, P, S>(
    repository: Option<&mut R>,
    config: &PrefixConfig,
    picker: &mut P,
    opener: &S,
) -> Result<FillOutcome, PrefixError>
where
    R: Repository,
    P: Picker + ?Sized,
    S: SettingsOpener,
{
    let repository = repository.ok_or(PrefixError::NoRepository)?;

    let active = config.active_prefixes();
    if active.is_empty() {
        return Err(PrefixError::NoActivePrefixes);
    }

    let picklist = Picklist::build(&active, config.label_style);
    let selection = Selection::from(picker.pick(&picklist)?.as_ref());
    debug!(?selection, "Picklist closed");

    match selection {
        Selection::NoSelection => Ok(FillOutcome::Cancelled),
        Selection::OpenSettings => {
            opener.open().await?;
            Ok(FillOutcome::SettingsOpened)
        }
        Selection::Prefix(entry) => {
            let selected = active
                .iter()
                .find(|active| **active == entry)
                .ok_or(PrefixError::SelectedPrefixNotFound)?;

            let message = rewrite_message(
                repository.commit_message(),
                &active,
                selected,
                config.rewrite_options(),
            )?;
            repository.set_commit_message(message.clone())?;

            info!(label = %selected.label, "Prefix applied");
            Ok(FillOutcome::Updated(message))
        }
    }
}

pub struct CommandHandler<'a> {
    cli_command: &'a Cli,
    stdin_str: String,
    source: FileConfigSource,
}

impl<'a> CommandHandler<'a> {
    pub fn new(cli_command: &'a Cli, stdin_str: String) -> Result<Self, PrefixError> {
        Ok(Self {
            cli_command,
            stdin_str,
            source: FileConfigSource::resolve(cli_command.config.as_deref())?,
        })
    }

    pub async fn execute(&self) -> Result<(), PrefixError> {
        match &self.cli_command.command {
            Some(Command::Fill(args)) => self.fill(args).await,
            None => self.fill(&FillArgs::default()).await,
            Some(Command::List { query }) => {
                let config = self.load_config()?;
                let picklist = Picklist::build(&config.prefixes, config.label_style);
                print!("{}", render_items(&picklist.visible_items(&query.join(" "))));
                Ok(())
            }
            Some(Command::Settings) => self.opener().open().await,
            Some(Command::Init { force }) => self.init(*force),
        }
    }

    fn load_config(&self) -> Result<PrefixConfig, PrefixError> {
        Ok(self.source.load()?.with_overrides(
            self.cli_command.style,
            self.cli_command.include_emoji,
            self.cli_command.append_emoji,
        ))
    }

    fn opener(&self) -> EditorSettingsOpener {
        EditorSettingsOpener::new(self.source.clone())
    }

    async fn fill(&self, args: &FillArgs) -> Result<(), PrefixError> {
        let mut repository = match &args.file {
            Some(file) => Some(GitRepository::from_message_file(file)?),
            None => {
                let dir = match &args.repo {
                    Some(repo) => PathBuf::from(repo),
                    None => std::env::current_dir()?,
                };
                GitRepository::discover(dir).await?
            }
        };

        if let Some(repository) = &repository {
            debug!(file = ?repository.message_file(), "Commit message file");
        }

        let config = self.load_config()?;

        // A label from the command line or piped stdin skips the interactive picker
        let label = args.label.clone().or_else(|| {
            self.stdin_str
                .lines()
                .map(str::trim)
                .find(|line| !line.is_empty())
                .map(str::to_string)
        });
        let mut picker: Box<dyn Picker> = match label {
            Some(label) => Box::new(LabelPicker::new(label)),
            None => Box::new(TerminalPicker::stdio()),
        };

        let outcome =
            fill_commit_message(repository.as_mut(), &config, picker.as_mut(), &self.opener())
                .await?;
        debug!(?outcome, "Fill finished");

        if let FillOutcome::Updated(message) = outcome {
            println!("{}", message.lines().next().unwrap_or_default());
        }
        Ok(())
    }

    fn init(&self, force: bool) -> Result<(), PrefixError> {
        if self.source.exists() && !force {
            return Err(PrefixError::Settings(format!(
                "{} already exists, use --force to overwrite it",
                self.source.path().display()
            )));
        }

        let config = PrefixConfig {
            prefixes: conventional_prefixes(),
            ..PrefixConfig::default()
        };
        self.source.save(&config)?;
        println!("Settings written to {}", self.source.path().display());
        Ok(())
    }
}
