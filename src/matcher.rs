//! Query compilation, scoring and ranking
//!
//! A key scores the character length of the leftmost span the query matches
//! in it, times [`PREFIX_BONUS`] when that span starts the key. Keys the query
//! does not match are dropped. Candidates are ranked by descending score;
//! equal scores keep dataset order.

use std::collections::HashSet;

use regex::Regex;
use tracing::debug;

use crate::data::{DataSource, load_entries};
use crate::error::{Error, Result};
use crate::glob::glob_to_regex;
use crate::models::{Candidate, Direction, Entry, PatternSyntax};

/// Score multiplier for matches at the start of the key
pub const PREFIX_BONUS: f64 = 1.5;

/// A compiled user query
#[derive(Debug, Clone)]
pub struct Query {
    raw: String,
    regex: Regex,
}

impl Query {
    /// Compile `pattern`, translating shell wildcards first when asked to
    pub fn new(pattern: &str, syntax: PatternSyntax) -> Result<Self> {
        let source = match syntax {
            PatternSyntax::Shell => glob_to_regex(pattern),
            PatternSyntax::Regex => pattern.to_string(),
        };

        let regex = Regex::new(&source).map_err(|source| Error::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;

        debug!(pattern, regex = regex.as_str(), "compiled query");
        Ok(Self {
            raw: pattern.to_string(),
            regex,
        })
    }

    /// Build a query from several words, joined by single spaces
    pub fn from_words<S: AsRef<str>>(words: &[S], syntax: PatternSyntax) -> Result<Self> {
        let joined = words
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(" ");
        Self::new(&joined, syntax)
    }

    /// The pattern as the user typed it
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn regex(&self) -> &Regex {
        &self.regex
    }
}

/// Score a single key against the query; 0 means no match
pub fn score_match(query: &Query, key: &str) -> f64 {
    match query.regex.find(key) {
        Some(m) => {
            let span = m.as_str().chars().count() as f64;
            if m.start() == 0 {
                span * PREFIX_BONUS
            } else {
                span
            }
        }
        None => 0.0,
    }
}

/// Score every entry's source and rank the matches
pub fn match_entries(query: &Query, entries: &[Entry]) -> Vec<Candidate> {
    let mut candidates: Vec<Candidate> = entries
        .iter()
        .filter_map(|entry| {
            let score = score_match(query, &entry.source);
            (score > 0.0).then(|| Candidate {
                score,
                matched_key: entry.source.clone(),
                result: entry.target.clone(),
                category: entry.category.clone(),
            })
        })
        .collect();

    // Stable: ties stay in dataset order
    candidates.sort_by(|a, b| b.score.total_cmp(&a.score));

    debug!(
        query = query.as_str(),
        entries = entries.len(),
        matches = candidates.len(),
        "ranked candidates"
    );
    candidates
}

/// Keep at most `limit` ranked candidates
pub fn truncate(mut candidates: Vec<Candidate>, limit: usize) -> Vec<Candidate> {
    candidates.truncate(limit);
    candidates
}

/// Drop candidates whose result was already produced, keeping first-seen order
pub fn dedup_results(candidates: Vec<Candidate>) -> Vec<Candidate> {
    let mut seen = HashSet::new();
    candidates
        .into_iter()
        .filter(|c| seen.insert(c.result.clone()))
        .collect()
}

/// Load the dataset oriented towards `direction`, rank matches for `query`
/// and keep the best `limit`
pub fn translate(
    source: &DataSource,
    query: &Query,
    direction: Direction,
    limit: usize,
) -> Result<Vec<Candidate>> {
    let entries = load_entries(source, direction.is_reverse())?;
    Ok(truncate(match_entries(query, &entries), limit))
}
