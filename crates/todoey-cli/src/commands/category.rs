//! Category command
//!
//! Usage: todoey category <add|list|delete>

use clap::{Args, Subcommand};
use todoey_core::errors::Result;
use todoey_core::model::{Category, CategoryId};
use todoey_core::rules::DeletePolicy;
use todoey_engine::TodoService;

#[derive(Debug, Args)]
pub struct CategoryArgs {
    #[command(subcommand)]
    pub command: CategoryCommand,
}

#[derive(Debug, Subcommand)]
pub enum CategoryCommand {
    /// Create a category
    Add {
        /// Category name
        name: String,
    },
    /// List categories in creation order
    List,
    /// Delete a category
    Delete {
        /// Category ID
        category_id: String,

        /// Also delete the category's items
        #[arg(long)]
        cascade: bool,
    },
}

/// Execute category command
pub fn execute(args: CategoryArgs, service: &mut TodoService) -> Result<()> {
    match args.command {
        CategoryCommand::Add { name } => {
            let category = service.create_category(&name)?;
            println!("{}", format_category(&category));
        }
        CategoryCommand::List => {
            for category in service.list_categories()? {
                println!("{}", format_category(&category));
            }
        }
        CategoryCommand::Delete {
            category_id,
            cascade,
        } => {
            let id = CategoryId::from_string(category_id);
            if cascade {
                service.delete_category_with(&id, DeletePolicy::Cascade)?;
            } else {
                service.delete_category(&id)?;
            }
            println!("✓ Deleted category {}", id);
        }
    }
    Ok(())
}

fn format_category(category: &Category) -> String {
    format!("{}\t{}", category.id, category.name)
}
