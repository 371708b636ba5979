//! Translate common commands between Linux and BSD equivalents
//!
//! The dataset is a set of categories of `linux, bsd` command pairs. A query
//! (shell glob or regex) is scored against one side of every pair and the
//! other side is returned, best match first.
//!
//! ```
//! use linux2bsd::{DataSource, Direction, PatternSyntax, Query, translate};
//!
//! let query = Query::new("apt", PatternSyntax::Shell)?;
//! let candidates = translate(&DataSource::Builtin, &query, Direction::Bsd, 10)?;
//! assert_eq!(candidates[0].result, "pkg");
//! # Ok::<(), linux2bsd::Error>(())
//! ```

pub mod actions;
pub mod cli;
pub mod commands;
pub mod config;
pub mod data;
pub mod error;
pub mod glob;
pub mod matcher;
pub mod models;

pub use actions::CommandAction;
pub use config::Linux2BsdConfig;
pub use data::{DataSource, load_entries};
pub use error::{Error, Result};
pub use glob::glob_to_regex;
pub use matcher::{PREFIX_BONUS, Query, dedup_results, match_entries, score_match, translate, truncate};
pub use models::{Candidate, Category, Direction, Entry, PatternSyntax};
