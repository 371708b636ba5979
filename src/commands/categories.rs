//! Category listing and tables

use anyhow::{Context, Result};
use colored::Colorize;
use comfy_table::{Table, presets::UTF8_BORDERS_ONLY};

use crate::data::DataSource;
use crate::models::{Category, Direction};

/// Keyword selecting every category
const ALL_CATEGORIES: &str = "all";

/// Print the name of every category, one per line
pub fn cmd_list_categories(source: &DataSource) -> Result<()> {
    let names = source
        .list_categories()
        .with_context(|| format!("Failed to list categories in {}", source))?;

    for name in names {
        println!("{}", name);
    }

    Ok(())
}

/// Print a table of translations for each named category
pub fn cmd_show_categories(
    source: &DataSource,
    names: &[String],
    direction: Direction,
) -> Result<()> {
    let categories = resolve_categories(source, names)?;

    if categories.is_empty() {
        println!(
            "{} No categories given. Use --list-categories to see them, or `all`.",
            "!".yellow()
        );
        return Ok(());
    }

    for category in &categories {
        println!("{}", category.name.to_uppercase().bold());
        println!("{}", category_table(category, direction));
        println!();
    }

    Ok(())
}

fn resolve_categories(source: &DataSource, names: &[String]) -> Result<Vec<Category>> {
    if names.iter().any(|name| name == ALL_CATEGORIES) {
        return source
            .load_categories()
            .with_context(|| format!("Failed to load {}", source));
    }

    names
        .iter()
        .map(|name| {
            source
                .load_category(name)
                .with_context(|| format!("Failed to load category '{}'", name))
        })
        .collect()
}

fn category_table(category: &Category, direction: Direction) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec![direction.from_label(), direction.to_label()]);

    for entry in &category.entries {
        let entry = entry.clone().oriented(direction);
        table.add_row(vec![entry.source, entry.target]);
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Entry;

    fn packages() -> Category {
        Category {
            name: "packages".to_string(),
            entries: vec![
                Entry::new("apt", "pkg", "packages"),
                Entry::new("rpm", "pkg", "packages"),
            ],
        }
    }

    #[test]
    fn test_category_table_orientation() {
        let forward = category_table(&packages(), Direction::Bsd).to_string();
        let apt = forward.find("apt").unwrap();
        let pkg = forward.find("pkg").unwrap();
        assert!(apt < pkg);
        assert!(forward.find("Linux").unwrap() < forward.find("BSD").unwrap());

        let reverse = category_table(&packages(), Direction::Linux).to_string();
        assert!(reverse.find("BSD").unwrap() < reverse.find("Linux").unwrap());
        assert!(reverse.find("pkg").unwrap() < reverse.find("apt").unwrap());
    }

    #[test]
    fn test_resolve_all_categories() {
        let all = resolve_categories(&DataSource::Builtin, &["all".to_string()]).unwrap();
        assert_eq!(all.len(), DataSource::Builtin.list_categories().unwrap().len());
    }

    #[test]
    fn test_resolve_unknown_category_fails() {
        assert!(resolve_categories(&DataSource::Builtin, &["nope".to_string()]).is_err());
    }
}
