//! Dataset loading
//!
//! A dataset is a set of categories, one `.csv` file each. Every line of a
//! category file is `source, target` written in Linux -> BSD orientation;
//! `#` starts a comment line. The built-in dataset is compiled into the
//! binary and parsed by the same code as an on-disk directory.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::models::{Category, Entry};

const DATA_EXTENSION: &str = "csv";

/// Categories shipped with the binary, sorted by name
const BUILTIN_CATEGORIES: &[(&str, &str)] = &[
    ("files", include_str!("../data/files.csv")),
    ("network", include_str!("../data/network.csv")),
    ("packages", include_str!("../data/packages.csv")),
    ("system", include_str!("../data/system.csv")),
    ("users", include_str!("../data/users.csv")),
];

/// Where command data is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// Dataset embedded in the binary
    Builtin,
    /// Directory holding one `<category>.csv` per category
    Directory(PathBuf),
}

impl DataSource {
    /// Use `dir` when given, otherwise the built-in dataset
    pub fn from_option(dir: Option<PathBuf>) -> Self {
        dir.map_or(Self::Builtin, Self::Directory)
    }

    /// Sorted names of all categories in this source
    pub fn list_categories(&self) -> Result<Vec<String>> {
        match self {
            Self::Builtin => Ok(BUILTIN_CATEGORIES
                .iter()
                .map(|(name, _)| (*name).to_string())
                .collect()),
            Self::Directory(dir) => Ok(category_files(dir)?
                .into_iter()
                .map(|(name, _)| name)
                .collect()),
        }
    }

    /// Load a single category by name
    pub fn load_category(&self, name: &str) -> Result<Category> {
        match self {
            Self::Builtin => BUILTIN_CATEGORIES
                .iter()
                .find(|(category, _)| *category == name)
                .map(|(category, content)| parse_builtin(category, content))
                .unwrap_or_else(|| Err(Error::CategoryNotFound(name.to_string()))),
            Self::Directory(dir) => {
                let path = dir.join(format!("{}.{}", name, DATA_EXTENSION));
                if !path.is_file() {
                    return Err(Error::CategoryNotFound(name.to_string()));
                }
                read_category_file(name, &path)
            }
        }
    }

    /// Load every category, ordered by name
    pub fn load_categories(&self) -> Result<Vec<Category>> {
        let categories = match self {
            Self::Builtin => BUILTIN_CATEGORIES
                .iter()
                .map(|(name, content)| parse_builtin(name, content))
                .collect::<Result<Vec<_>>>()?,
            Self::Directory(dir) => category_files(dir)?
                .into_iter()
                .map(|(name, path)| read_category_file(&name, &path))
                .collect::<Result<Vec<_>>>()?,
        };

        debug!(
            source = %self,
            categories = categories.len(),
            "loaded dataset"
        );
        Ok(categories)
    }
}

impl std::fmt::Display for DataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Builtin => write!(f, "built-in dataset"),
            Self::Directory(dir) => write!(f, "{}", dir.display()),
        }
    }
}

/// Load all entries of a dataset as one flat list
///
/// With `reverse` set every pair is swapped, so `source` is the BSD side.
/// Any malformed line aborts the whole load.
pub fn load_entries(source: &DataSource, reverse: bool) -> Result<Vec<Entry>> {
    let entries: Vec<Entry> = source
        .load_categories()?
        .into_iter()
        .flat_map(|category| category.entries)
        .map(|entry| if reverse { entry.swapped() } else { entry })
        .collect();

    debug!(entries = entries.len(), reverse, "flattened dataset");
    Ok(entries)
}

/// Parse the contents of one category file
///
/// `file` is only used to name the offending file in errors.
pub fn parse_category(name: &str, file: &str, content: &str) -> Result<Category> {
    let mut entries = Vec::new();

    for (index, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let (source, target) = parse_line(line).ok_or_else(|| Error::DataFormat {
            file: file.to_string(),
            line_number: index + 1,
            line: line.to_string(),
        })?;

        entries.push(Entry::new(source, target, name));
    }

    Ok(Category {
        name: name.to_string(),
        entries,
    })
}

/// Split `source, target` into its two trimmed fields
fn parse_line(line: &str) -> Option<(&str, &str)> {
    let mut fields = line.split(',');
    let source = fields.next()?.trim();
    let target = fields.next()?.trim();

    // Exactly one separator, no empty side
    if fields.next().is_some() || source.is_empty() || target.is_empty() {
        return None;
    }

    Some((source, target))
}

fn parse_builtin(name: &str, content: &str) -> Result<Category> {
    parse_category(name, &format!("<builtin>/{}.{}", name, DATA_EXTENSION), content)
}

fn read_category_file(name: &str, path: &Path) -> Result<Category> {
    let content = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_category(name, &path.display().to_string(), &content)
}

/// `(category, path)` for every `.csv` file in `dir`, sorted by category
fn category_files(dir: &Path) -> Result<Vec<(String, PathBuf)>> {
    let io_err = |source| Error::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for dir_entry in fs::read_dir(dir).map_err(io_err)? {
        let path = dir_entry.map_err(io_err)?.path();

        if path.extension().and_then(|ext| ext.to_str()) != Some(DATA_EXTENSION) {
            continue;
        }
        if !path.is_file() {
            warn!(path = %path.display(), "skipping non-file dataset entry");
            continue;
        }

        if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
            files.push((stem.to_string(), path.clone()));
        } else {
            warn!(path = %path.display(), "skipping dataset file with non UTF-8 name");
        }
    }

    files.sort();
    Ok(files)
}
