//! Item command
//!
//! Usage: todoey item <add|list|toggle|delete>

use clap::{Args, Subcommand};
use todoey_core::errors::Result;
use todoey_core::model::{CategoryId, Item, ItemId};
use todoey_core::query::ItemQuery;
use todoey_engine::TodoService;

#[derive(Debug, Args)]
pub struct ItemArgs {
    #[command(subcommand)]
    pub command: ItemCommand,
}

#[derive(Debug, Subcommand)]
pub enum ItemCommand {
    /// Create an item in a category
    Add {
        /// Parent category ID
        category_id: String,

        /// Item title (may be empty)
        #[arg(default_value = "")]
        title: String,
    },
    /// List the items of a category
    List {
        /// Parent category ID
        category_id: String,

        /// Only items whose title contains this text (case and accents ignored)
        #[arg(short, long)]
        search: Option<String>,

        /// Sort by title instead of creation order
        #[arg(long)]
        sort_title: bool,
    },
    /// Flip an item's done flag
    Toggle {
        /// Item ID
        item_id: String,
    },
    /// Delete an item
    Delete {
        /// Item ID
        item_id: String,
    },
}

/// Execute item command
pub fn execute(args: ItemArgs, service: &mut TodoService) -> Result<()> {
    match args.command {
        ItemCommand::Add { category_id, title } => {
            let item = service.create_item(&CategoryId::from_string(category_id), &title)?;
            println!("{}", format_item(&item));
        }
        ItemCommand::List {
            category_id,
            search,
            sort_title,
        } => {
            let mut query = ItemQuery::for_category(CategoryId::from_string(category_id));
            if let Some(search) = search {
                query = query.with_title_filter(search);
            }
            if sort_title {
                query = query.sorted_by_title();
            }
            for item in service.list_items_with(&query)? {
                println!("{}", format_item(&item));
            }
        }
        ItemCommand::Toggle { item_id } => {
            let item = service.toggle_done(&ItemId::from_string(item_id))?;
            println!("{}", format_item(&item));
        }
        ItemCommand::Delete { item_id } => {
            let id = ItemId::from_string(item_id);
            service.delete_item(&id)?;
            println!("✓ Deleted item {}", id);
        }
    }
    Ok(())
}

fn format_item(item: &Item) -> String {
    let mark = if item.done { "x" } else { " " };
    format!("{}\t[{}] {}", item.id, mark, item.title)
}
