//! Command-line interface definition

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::Parser;
use clap_complete::Shell;

use crate::config::Linux2BsdConfig;
use crate::data::DataSource;
use crate::models::{Direction, PatternSyntax};

/// Translate common commands between Linux and BSD equivalents
#[derive(Parser, Debug)]
#[command(name = "linux2bsd", version, about)]
pub struct Cli {
    /// Linux to BSD or BSD to Linux?
    #[arg(short, long, value_enum, env = "LINUX2BSD_TO")]
    pub to: Option<Direction>,

    /// Interpret the pattern as a regex
    #[arg(short = 'E', long, overrides_with = "shell")]
    pub regex: bool,

    /// Interpret the pattern as a shell-like glob (default)
    #[arg(short = 'g', long, overrides_with = "regex")]
    pub shell: bool,

    /// Print detailed info about the matches
    #[arg(short, long, overrides_with = "quiet")]
    pub verbose: bool,

    /// Print only the translated commands (default)
    #[arg(short, long, overrides_with = "verbose")]
    pub quiet: bool,

    /// Prompt to run the command or show its man page
    #[arg(short, long, overrides_with = "non_interactive")]
    pub interactive: bool,

    /// Never prompt
    #[arg(short, long, overrides_with = "interactive")]
    pub non_interactive: bool,

    /// Show a table for the given category (or categories, or `all`)
    #[arg(short, long)]
    pub show_category: bool,

    /// List all command categories
    #[arg(short, long)]
    pub list_categories: bool,

    /// Limit the number of returned results
    #[arg(long, env = "LINUX2BSD_LIMIT")]
    pub limit: Option<usize>,

    /// Path to command data files (defaults to the built-in dataset)
    #[arg(long, value_name = "DIR", env = "LINUX2BSD_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Print matches as JSON
    #[arg(long, conflicts_with = "show_category")]
    pub json: bool,

    /// Store the given --to, --regex/--shell, --limit, --data-dir and
    /// --interactive/--non-interactive as defaults in the config file
    #[arg(long)]
    pub save_config: bool,

    /// Print a shell completion script and exit
    #[arg(long, value_name = "SHELL", exclusive = true)]
    pub completions: Option<Shell>,

    /// Command to translate, or category names with --show-category
    #[arg(value_name = "COMMAND")]
    pub command: Vec<String>,
}

impl Cli {
    pub fn direction(&self, config: &Linux2BsdConfig) -> Direction {
        self.to.or(config.to).unwrap_or_default()
    }

    pub fn syntax(&self, config: &Linux2BsdConfig) -> PatternSyntax {
        if self.regex {
            PatternSyntax::Regex
        } else if self.shell {
            PatternSyntax::Shell
        } else {
            config.syntax.unwrap_or_default()
        }
    }

    pub fn limit(&self, config: &Linux2BsdConfig) -> usize {
        self.limit.unwrap_or_else(|| config.limit())
    }

    pub fn data_source(&self, config: &Linux2BsdConfig) -> DataSource {
        DataSource::from_option(self.data_dir.clone().or_else(|| config.data_dir.clone()))
    }

    /// `config` with every option given on the command line written over it
    pub fn merged_config(&self, config: &Linux2BsdConfig) -> Linux2BsdConfig {
        let syntax = if self.regex {
            Some(PatternSyntax::Regex)
        } else if self.shell {
            Some(PatternSyntax::Shell)
        } else {
            config.syntax
        };
        let interactive = if self.interactive {
            Some(true)
        } else if self.non_interactive {
            Some(false)
        } else {
            config.interactive
        };
        let data_dir = self
            .data_dir
            .as_ref()
            .map(|dir| std::path::absolute(dir).unwrap_or_else(|_| dir.clone()))
            .or_else(|| config.data_dir.clone());

        Linux2BsdConfig {
            data_dir,
            to: self.to.or(config.to),
            syntax,
            limit: self.limit.or(config.limit),
            interactive,
        }
    }

    /// Whether to number results and prompt afterwards
    ///
    /// Prompting needs a terminal on both ends, whatever the flags say.
    pub fn interactive(&self, config: &Linux2BsdConfig) -> bool {
        let tty = std::io::stdin().is_terminal() && std::io::stdout().is_terminal();
        let wanted = if self.interactive {
            true
        } else if self.non_interactive {
            false
        } else {
            config.interactive.unwrap_or(true)
        };
        wanted && tty && !self.json
    }
}
