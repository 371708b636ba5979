//! Things the user can do with a translated command
//!
//! Result strings look like `sockstat(1) -4l # listening sockets`: the first
//! word is the command, optionally tagged with its man page section, the
//! remaining words are arguments and anything after `#` is a comment.

use std::path::PathBuf;
use std::process::{Command, ExitStatus};
use std::sync::LazyLock;

use anyhow::{Context, Result};
use regex::Regex;
use tracing::debug;

static MAN_PAGE_REF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<name>.+)\((?P<section>[0-9]+[a-z]*)\)$").expect("valid man page regex")
});

/// A command parsed out of a translation result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandAction {
    pub command: String,
    pub args: Vec<String>,
    /// Man page section, when the result was written as `name(N)`
    pub section: Option<String>,
}

impl CommandAction {
    /// Parse a result string; `None` when it holds no command
    pub fn parse(result: &str) -> Option<Self> {
        let without_comment = result.split('#').next().unwrap_or_default();
        let mut words = without_comment.split_whitespace();
        let first = words.next()?;
        let args = words.map(String::from).collect();

        let (command, section) = match MAN_PAGE_REF.captures(first) {
            Some(caps) => (
                caps["name"].to_string(),
                Some(caps["section"].to_string()),
            ),
            None => (first.to_string(), None),
        };

        Some(Self {
            command,
            args,
            section,
        })
    }

    /// `(section, name)` of the man page, if known
    pub fn man_page(&self) -> Option<(&str, &str)> {
        self.section
            .as_deref()
            .map(|section| (section, self.command.as_str()))
    }

    /// Path of the command's executable, if it is installed
    pub fn executable(&self) -> Option<PathBuf> {
        which::which(&self.command).ok()
    }

    /// Command line as it would be typed in a shell
    pub fn command_line(&self) -> String {
        std::iter::once(self.command.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Open the man page in the user's pager
    pub fn open_man_page(&self) -> Result<ExitStatus> {
        let (section, name) = self
            .man_page()
            .context(format!("No man page known for '{}'", self.command))?;

        debug!(section, name, "opening man page");
        Command::new("man")
            .arg(section)
            .arg(name)
            .status()
            .context("Failed to run man")
    }

    /// Run the command with its arguments, inheriting the terminal
    pub fn run(&self) -> Result<ExitStatus> {
        debug!(command = %self.command_line(), "running command");
        Command::new(&self.command)
            .args(&self.args)
            .status()
            .with_context(|| format!("Failed to run {}", self.command))
    }
}
