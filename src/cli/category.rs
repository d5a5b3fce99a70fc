//! Category CLI commands
//!
//! Implements `category list`, `category add` and `category delete`.

use clap::Subcommand;

use crate::display::format_category_list;
use crate::error::LedgerResult;
use crate::models::FALLBACK_CATEGORY;
use crate::services::CategoryService;
use crate::storage::Storage;

/// Category subcommands
#[derive(Subcommand, Debug)]
pub enum CategoryCommands {
    /// List all categories with their record counts
    List,

    /// Add a new category
    Add {
        /// Category name
        name: String,
    },

    /// Delete a category, moving its records to the fallback category
    Delete {
        /// Category name
        name: String,
    },
}

/// Handle a category command
pub fn handle_category_command(storage: &mut Storage, cmd: CategoryCommands) -> LedgerResult<()> {
    match cmd {
        CategoryCommands::List => {
            let counts: Vec<(String, usize)> = storage
                .categories
                .list()
                .iter()
                .map(|name| (name.clone(), storage.records.count_in_category(name)))
                .collect();
            print!("{}", format_category_list(&counts));
        }

        CategoryCommands::Add { name } => {
            let name = CategoryService::new(storage).add(&name)?;
            println!("Added category: {}", name);
        }

        CategoryCommands::Delete { name } => {
            let removal = CategoryService::new(storage).remove(&name)?;
            println!("Deleted category: {}", removal.category);
            if removal.reassigned_count > 0 {
                println!(
                    "  {} record(s) moved to {}",
                    removal.reassigned_count, FALLBACK_CATEGORY
                );
            }
        }
    }

    Ok(())
}
