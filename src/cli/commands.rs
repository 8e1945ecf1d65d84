use clap::{Args, Parser, Subcommand};

use crate::prefix::DisplayStyle;

/// Pick a commit prefix such as `feat:` or `fix:` and write it into the pending commit message.
#[derive(Parser, Debug)]
#[command(name = "commit-prefix", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Settings file, default: ~/.config/commit-prefix/settings.json
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Override the label style of the settings
    #[arg(short, long, value_enum, global = true)]
    pub style: Option<DisplayStyle>,

    /// Include the emoji in the commit message
    #[arg(long, global = true)]
    pub include_emoji: bool,

    /// Write the emoji at the end of the commit message instead of before the prefix
    #[arg(long, global = true)]
    pub append_emoji: bool,
}

#[derive(Debug, Subcommand, PartialEq)]
pub enum Command {
    /// Select a prefix and apply it to the pending commit message (default)
    Fill(FillArgs),
    /// Print the picklist for a query
    List {
        /// Text typed in the picklist; secondary prefixes show up when it is not empty
        #[arg(trailing_var_arg = true)]
        query: Vec<String>,
    },
    /// Open the prefix settings in the editor
    Settings,
    /// Write a settings file with the conventional commit prefixes
    Init {
        /// Overwrite an existing settings file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Debug, Args, Default, PartialEq)]
pub struct FillArgs {
    /// Select the prefix with this label instead of asking
    #[arg(short, long)]
    pub label: Option<String>,

    /// Commit message file, e.g. the first argument of the `prepare-commit-msg` hook
    #[arg(short, long)]
    pub file: Option<String>,

    /// Directory inside the repository, default: the current directory
    #[arg(short, long)]
    pub repo: Option<String>,
}
