//! Core data types: entries, categories, candidates and query options

use serde::{Deserialize, Serialize};

/// One command mapping loaded from a category file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub source: String,
    pub target: String,
    /// Category the entry was loaded from (display only)
    pub category: String,
}

impl Entry {
    pub fn new(
        source: impl Into<String>,
        target: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            category: category.into(),
        }
    }

    /// Swap source and target, for lookups against the file orientation
    pub fn swapped(self) -> Self {
        Self {
            source: self.target,
            target: self.source,
            category: self.category,
        }
    }

    /// Orient the entry for a query towards `direction`
    pub fn oriented(self, direction: Direction) -> Self {
        if direction.is_reverse() {
            self.swapped()
        } else {
            self
        }
    }
}

/// A named group of entries, in file order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub entries: Vec<Entry>,
}

/// A scored match produced for a single query
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Candidate {
    pub score: f64,
    #[serde(rename = "match")]
    pub matched_key: String,
    pub result: String,
    pub category: String,
}

/// Which ecosystem the results should come from
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Linux command in, BSD command out (the orientation of the data files)
    #[default]
    Bsd,
    /// BSD command in, Linux command out
    Linux,
}

impl Direction {
    /// Whether entries have to be swapped relative to the data files
    pub fn is_reverse(self) -> bool {
        self != Self::Bsd
    }

    /// Ecosystem the query is written in
    pub fn from_label(self) -> &'static str {
        match self {
            Self::Bsd => "Linux",
            Self::Linux => "BSD",
        }
    }

    /// Ecosystem the results belong to
    pub fn to_label(self) -> &'static str {
        match self {
            Self::Bsd => "BSD",
            Self::Linux => "Linux",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bsd => write!(f, "bsd"),
            Self::Linux => write!(f, "linux"),
        }
    }
}

/// How the user's query is interpreted
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum PatternSyntax {
    /// Shell-like wildcards (`*`, `?`, `[...]`)
    #[default]
    Shell,
    /// Regular expression, used as-is
    Regex,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_oriented_bsd_keeps_file_order() {
        let entry = Entry::new("apt", "pkg", "packages").oriented(Direction::Bsd);
        assert_eq!(entry.source, "apt");
        assert_eq!(entry.target, "pkg");
    }

    #[test]
    fn test_entry_oriented_linux_swaps() {
        let entry = Entry::new("apt", "pkg", "packages").oriented(Direction::Linux);
        assert_eq!(entry.source, "pkg");
        assert_eq!(entry.target, "apt");
        assert_eq!(entry.category, "packages");
    }

    #[test]
    fn test_direction_labels() {
        assert_eq!(Direction::Bsd.to_string(), "bsd");
        assert_eq!(Direction::Linux.to_string(), "linux");
        assert_eq!(Direction::Bsd.from_label(), "Linux");
        assert_eq!(Direction::Linux.to_label(), "Linux");
        assert!(!Direction::Bsd.is_reverse());
        assert!(Direction::Linux.is_reverse());
    }
}
