//! The translate command: rank matches for a query and print them

use anyhow::{Context, Result};
use colored::Colorize;

use crate::data::DataSource;
use crate::matcher::{Query, dedup_results, translate};
use crate::models::{Candidate, Direction};

use super::prompt::prompt_for_action;

/// How ranked results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Distinct results, one per line
    Quiet,
    /// Every ranked match with its key and score
    Verbose,
    /// Ranked matches as a JSON array
    Json,
}

/// Translate `query` and print the results
///
/// The limit applies to the ranked matches; quiet output then drops repeated
/// results, so it may show fewer lines than the limit.
pub fn cmd_translate(
    source: &DataSource,
    query: &Query,
    direction: Direction,
    limit: usize,
    mode: OutputMode,
    interactive: bool,
) -> Result<()> {
    let candidates = translate(source, query, direction, limit)
        .with_context(|| format!("Failed to translate '{}'", query.as_str()))?;

    if mode == OutputMode::Json {
        println!("{}", serde_json::to_string_pretty(&candidates)?);
        return Ok(());
    }

    if candidates.is_empty() {
        eprintln!(
            "{} No {} equivalent found for '{}'",
            "!".yellow(),
            direction.to_label(),
            query.as_str()
        );
        return Ok(());
    }

    let shown = match mode {
        OutputMode::Verbose => candidates,
        _ => dedup_results(candidates),
    };

    for line in format_results(&shown, mode, interactive) {
        println!("{}", line);
    }

    if interactive {
        prompt_for_action(&shown)?;
    }

    Ok(())
}

/// Render result lines without color
fn format_results(candidates: &[Candidate], mode: OutputMode, numbered: bool) -> Vec<String> {
    candidates
        .iter()
        .enumerate()
        .map(|(i, c)| match mode {
            OutputMode::Verbose => {
                format!("{:<16}\t{:<16}\t{:2}", c.matched_key, c.result, c.score as u64)
            }
            _ if numbered => format!("{:2} {}", i + 1, c.result),
            _ => c.result.clone(),
        })
        .collect()
}
