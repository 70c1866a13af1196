//! Category CLI commands

use clap::Subcommand;

use super::{finish, resolve_category};
use crate::actions::Actions;
use crate::display::{format_category_details, format_category_list};
use crate::error::TrackerResult;
use crate::models::CategoryInput;
use crate::store::Store;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// Create a new category
    Add {
        /// Category name
        name: String,
        /// Display color (e.g., "#ff6384")
        #[arg(short, long)]
        color: String,
        /// Icon name
        #[arg(short, long)]
        icon: String,
    },

    /// List all categories
    List,

    /// Show category details
    Show {
        /// Category name or ID
        category: String,
    },

    /// Edit a category
    Edit {
        /// Category name or ID
        category: String,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short, long)]
        color: Option<String>,
        #[arg(short, long)]
        icon: Option<String>,
    },

    /// Delete a category (its transactions become uncategorized)
    Delete {
        /// Category name or ID
        category: String,
    },
}

/// Handle a category command
pub fn handle_category_command(store: &Store, cmd: CategoryCommands) -> TrackerResult<()> {
    let actions = Actions::new(store);

    match cmd {
        CategoryCommands::Add { name, color, icon } => {
            finish(actions.create_category(&CategoryInput::new(name, color, icon)))?;
        }

        CategoryCommands::List => {
            print!("{}", format_category_list(&actions.get_categories()));
        }

        CategoryCommands::Show { category } => {
            let categories = actions.get_categories();
            let category = resolve_category(&categories, &category)?;
            print!("{}", format_category_details(category));
        }

        CategoryCommands::Edit {
            category,
            name,
            color,
            icon,
        } => {
            if name.is_none() && color.is_none() && icon.is_none() {
                println!("No changes specified. Use --name, --color, or --icon.");
                return Ok(());
            }

            let categories = actions.get_categories();
            let category = resolve_category(&categories, &category)?;

            let mut input = CategoryInput::from(category);
            if let Some(name) = name {
                input.name = name;
            }
            if let Some(color) = color {
                input.color = color;
            }
            if let Some(icon) = icon {
                input.icon = icon;
            }

            finish(actions.update_category(&category.id, &input))?;
        }

        CategoryCommands::Delete { category } => {
            let categories = actions.get_categories();
            let category = resolve_category(&categories, &category)?;
            finish(actions.delete_category(&category.id))?;
        }
    }

    Ok(())
}
