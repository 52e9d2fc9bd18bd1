//! Expense display formatting
//!
//! Renders expenses as a table for listings and as a detail block for a
//! single expense.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::config::Settings;
use crate::models::Expense;

use super::{format_amount, truncate};

const DESCRIPTION_WIDTH: usize = 30;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

impl ExpenseRow {
    fn new(expense: &Expense, settings: &Settings) -> Self {
        Self {
            id: expense.id.value(),
            date: expense.date.format(&settings.date_format).to_string(),
            description: truncate(&expense.description, DESCRIPTION_WIDTH),
            category: expense.category.clone().unwrap_or_default(),
            amount: format_amount(expense.amount, settings),
        }
    }
}

/// Format expenses as a table
pub fn format_expense_table(expenses: &[Expense], settings: &Settings) -> String {
    if expenses.is_empty() {
        return "No expenses found.".to_string();
    }

    let rows = expenses.iter().map(|e| ExpenseRow::new(e, settings));
    let mut table = Table::new(rows);
    table.with(Style::psql());
    table.to_string()
}

/// Format a single expense for display
pub fn format_expense_details(expense: &Expense, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str(&format!("Expense:     #{}\n", expense.id));
    output.push_str(&format!(
        "Date:        {}\n",
        expense.date.format("%Y-%m-%d %H:%M:%S")
    ));
    output.push_str(&format!("Description: {}\n", expense.description));
    output.push_str(&format!(
        "Amount:      {}\n",
        format_amount(expense.amount, settings)
    ));
    output.push_str(&format!(
        "Category:    {}\n",
        expense.category.as_deref().unwrap_or("(uncategorized)")
    ));

    output
}
