//! Error types for dataset loading and query compilation

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the translation library
#[derive(Debug, Error)]
pub enum Error {
    /// A dataset line could not be split into `source, target`
    #[error("Cannot parse file {file}, line {line_number}: \"{line}\"")]
    DataFormat {
        file: String,
        line_number: usize,
        line: String,
    },

    /// The query pattern (after glob translation) is not a valid regex
    #[error("Invalid pattern '{pattern}'")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A requested category has no file in the dataset
    #[error("Category '{0}' not found")]
    CategoryNotFound(String),

    #[error("Failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file exists but is not valid TOML for our schema
    #[error("Invalid config file {}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
