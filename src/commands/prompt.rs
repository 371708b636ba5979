//! Interactive follow-up: open a man page or run a translated command

use anyhow::Result;
use colored::Colorize;
use dialoguer::Select;
use tracing::debug;

use crate::actions::CommandAction;
use crate::models::Candidate;

/// One entry of the action menu
#[derive(Debug, Clone, PartialEq)]
enum PromptChoice {
    ManPage(usize, CommandAction),
    Run(usize, CommandAction),
    Quit,
}

impl PromptChoice {
    /// Menu label; the result number is only shown when there are several
    fn label(&self, numbered: bool) -> String {
        let prefix = |n: &usize| {
            if numbered {
                format!("{:2} ", n)
            } else {
                String::new()
            }
        };

        match self {
            Self::ManPage(n, action) => {
                let (section, name) = action.man_page().unwrap_or_default();
                format!("{}[m]an page: {}({})", prefix(n), name, section)
            }
            Self::Run(n, action) => format!("{}[r]un: {}", prefix(n), action.command_line()),
            Self::Quit => "[q]uit".to_string(),
        }
    }
}

/// Actions available for the displayed results, `Quit` last
///
/// Empty when no result has a man page or an installed executable.
fn build_choices(candidates: &[Candidate]) -> Vec<PromptChoice> {
    let mut choices = Vec::new();

    for (i, candidate) in candidates.iter().enumerate() {
        let Some(action) = CommandAction::parse(&candidate.result) else {
            continue;
        };

        if action.man_page().is_some() {
            choices.push(PromptChoice::ManPage(i + 1, action.clone()));
        }
        if action.executable().is_some() {
            choices.push(PromptChoice::Run(i + 1, action));
        }
    }

    if !choices.is_empty() {
        choices.push(PromptChoice::Quit);
    }
    choices
}

/// Ask what to do with the displayed results and do it
pub fn prompt_for_action(candidates: &[Candidate]) -> Result<()> {
    let choices = build_choices(candidates);
    if choices.is_empty() {
        debug!("no actionable results, skipping prompt");
        return Ok(());
    }

    let numbered = candidates.len() > 1;
    let labels: Vec<String> = choices.iter().map(|c| c.label(numbered)).collect();

    let selection = Select::new()
        .with_prompt("Action")
        .items(&labels)
        .default(labels.len() - 1) // Default to quit
        .interact_opt()?;

    let status = match selection.map(|i| &choices[i]) {
        Some(PromptChoice::ManPage(_, action)) => action.open_man_page()?,
        Some(PromptChoice::Run(_, action)) => action.run()?,
        Some(PromptChoice::Quit) | None => return Ok(()),
    };

    if !status.success() {
        println!("{} Command exited with {}", "!".yellow(), status);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(result: &str) -> Candidate {
        Candidate {
            score: 1.0,
            matched_key: "key".to_string(),
            result: result.to_string(),
            category: "test".to_string(),
        }
    }

    #[test]
    fn test_no_choices_without_actions() {
        let choices = build_choices(&[candidate("definitely-not-installed-l2b")]);
        assert!(choices.is_empty());
    }

    #[test]
    fn test_man_page_choice_and_quit() {
        let choices = build_choices(&[candidate("definitely-not-installed-l2b(8) -x")]);
        assert_eq!(choices.len(), 2);
        assert!(matches!(choices[0], PromptChoice::ManPage(1, _)));
        assert_eq!(choices[1], PromptChoice::Quit);
    }

    #[test]
    fn test_labels() {
        let action = CommandAction::parse("sockstat(1) -4l").unwrap();
        assert_eq!(
            PromptChoice::ManPage(2, action.clone()).label(true),
            " 2 [m]an page: sockstat(1)"
        );
        assert_eq!(
            PromptChoice::Run(1, action).label(false),
            "[r]un: sockstat -4l"
        );
        assert_eq!(PromptChoice::Quit.label(true), "[q]uit");
    }
}
