//! Category display formatting

use super::{fit, short_id};
use crate::models::Category;

/// Format a list of categories as a table
pub fn format_category_list(categories: &[Category]) -> String {
    if categories.is_empty() {
        return "No categories found.\n\nRun 'fintrack category add' to create one.\n"
            .to_string();
    }

    let name_width = categories
        .iter()
        .map(|c| c.name.chars().count())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:8} {} {:10} {}\n",
        "ID",
        fit("Name", name_width),
        "Color",
        "Icon"
    ));
    output.push_str(&"-".repeat(name_width + 32));
    output.push('\n');

    for category in categories {
        output.push_str(&format!(
            "{} {} {} {}\n",
            short_id(&category.id),
            fit(&category.name, name_width),
            fit(&category.color, 10),
            category.icon
        ));
    }

    output
}

/// Format category details for display
pub fn format_category_details(category: &Category) -> String {
    let mut output = String::new();

    output.push_str(&format!("Category: {}\n", category.name));
    output.push_str(&format!("  ID:      {}\n", category.id));
    output.push_str(&format!("  Color:   {}\n", category.color));
    output.push_str(&format!("  Icon:    {}\n", category.icon));
    output.push_str(&format!(
        "  Created: {}\n",
        category.created_at.format("%Y-%m-%d")
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryInput, ObjectId};
    use chrono::Utc;

    #[test]
    fn test_list_columns() {
        let record = CategoryInput::new("Groceries", "#00ff00", "cart").into_record(Utc::now());
        let category = Category::from_record(ObjectId::new(), &record);

        let output = format_category_list(&[category.clone()]);
        assert!(output.starts_with("ID"));
        assert!(output.contains("Groceries #00ff00    cart"));
        assert!(output.contains(&category.id[..8]));
    }

    #[test]
    fn test_empty_list_hint() {
        assert!(format_category_list(&[]).contains("fintrack category add"));
    }
}
