//! Command implementations for the CLI

mod categories;
mod config;
mod prompt;
mod translate;

pub use categories::{cmd_list_categories, cmd_show_categories};
pub use config::cmd_save_config;
pub use translate::{OutputMode, cmd_translate};
