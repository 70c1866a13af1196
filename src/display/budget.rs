//! Budget display formatting

use super::{fit, short_id, CategoryNames};
use crate::config::settings::Settings;
use crate::models::{Budget, Category};

/// Format a list of budgets as a table
pub fn format_budget_list(
    budgets: &[Budget],
    categories: &[Category],
    settings: &Settings,
) -> String {
    if budgets.is_empty() {
        return "No budgets set.\n".to_string();
    }

    let names = CategoryNames::new(categories);
    let mut output = String::new();
    output.push_str(&format!(
        "{:8} {:24} {:10} {:>14}\n",
        "ID", "Category", "Period", "Amount"
    ));
    output.push_str(&"-".repeat(60));
    output.push('\n');

    for budget in budgets {
        output.push_str(&format!(
            "{} {} {} {:>14}\n",
            short_id(&budget.id),
            fit(names.resolve(Some(budget.category_id.as_str())), 24),
            fit(budget.period.as_str(), 10),
            budget.amount.format_with_symbol(&settings.currency_symbol)
        ));
    }

    output
}

/// Format budget details for display
pub fn format_budget_details(
    budget: &Budget,
    category: Option<&Category>,
    settings: &Settings,
) -> String {
    let mut output = String::new();

    output.push_str(&format!("Budget: {}\n", budget.id));
    match category {
        Some(category) => output.push_str(&format!("  Category: {}\n", category.name)),
        None => output.push_str(&format!(
            "  Category: (missing: {})\n",
            budget.category_id
        )),
    }
    output.push_str(&format!("  Period:   {}\n", budget.period));
    output.push_str(&format!(
        "  Amount:   {}\n",
        budget.amount.format_with_symbol(&settings.currency_symbol)
    ));
    output.push_str(&format!(
        "  Updated:  {}\n",
        budget.updated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetInput, CategoryInput, ObjectId};
    use chrono::Utc;

    #[test]
    fn test_list_and_details() {
        let now = Utc::now();
        let category_id = ObjectId::new();
        let category = Category::from_record(
            category_id,
            &CategoryInput::new("Rent", "#123", "home").into_record(now),
        );
        let budget = Budget::from_record(
            ObjectId::new(),
            &BudgetInput::monthly(category_id.to_string(), "15000")
                .validate()
                .unwrap()
                .into_record(now),
        );
        let settings = Settings::default();

        let list = format_budget_list(&[budget.clone()], &[category.clone()], &settings);
        assert!(list.contains("Rent"));
        assert!(list.contains("monthly"));
        assert!(list.contains("₹15,000.00"));

        let details = format_budget_details(&budget, None, &settings);
        assert!(details.contains(&format!("(missing: {})", category_id)));
    }
}
