//! Expense CLI commands
//!
//! Implements CLI commands for recording, querying and summarizing expenses.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{
    format_amount, format_expense_details, format_expense_table, format_statistics,
    format_summary,
};
use crate::error::{LedgerError, LedgerResult};
use crate::services::validation::{validate_days, validate_month, validate_year};
use crate::services::{ExpenseFilter, ExpenseService, ExpenseUpdate, NewExpense};

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// What the money was spent on
        #[arg(short = 'D', long)]
        description: String,
        /// Amount spent (e.g., "12.50")
        #[arg(short, long)]
        amount: String,
        /// Expense date (YYYY-MM-DD), defaults to now
        #[arg(short, long)]
        date: Option<String>,
        /// Category name
        #[arg(short, long)]
        category: Option<String>,
    },
    /// List expenses
    List {
        /// Month of year (1-12)
        #[arg(short, long)]
        month: Option<String>,
        /// Year
        #[arg(short, long)]
        year: Option<String>,
        /// Filter by category name
        #[arg(short, long)]
        category: Option<String>,
        /// Filter by description text
        #[arg(short, long)]
        search: Option<String>,
        /// Number of expenses to show
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Show expense details
    Show {
        /// Expense ID
        #[arg(long)]
        id: String,
    },
    /// Update an expense
    Update {
        /// Expense ID
        #[arg(long)]
        id: String,
        /// New description
        #[arg(short = 'D', long)]
        description: Option<String>,
        /// New amount
        #[arg(short, long)]
        amount: Option<String>,
        /// New date
        #[arg(short, long)]
        date: Option<String>,
        /// New category (an empty value clears it)
        #[arg(short, long, conflicts_with = "clear_category")]
        category: Option<String>,
        /// Remove the category
        #[arg(long)]
        clear_category: bool,
    },
    /// Delete an expense
    Delete {
        /// Expense ID
        #[arg(long)]
        id: String,
    },
    /// Show the total spent
    Summary {
        /// Month of year (1-12); with --year selects one calendar month
        #[arg(short, long, conflicts_with = "days")]
        month: Option<String>,
        /// Year
        #[arg(short, long, conflicts_with = "days")]
        year: Option<String>,
        /// Only the last N days
        #[arg(long, conflicts_with = "current_month")]
        days: Option<String>,
        /// Only the current calendar month
        #[arg(long, conflicts_with_all = ["month", "year"])]
        current_month: bool,
    },
    /// Show count, total, average, median, min and max
    Stats {
        /// Month of year (1-12)
        #[arg(short, long)]
        month: Option<String>,
        /// Year
        #[arg(short, long)]
        year: Option<String>,
    },
    /// Search descriptions
    Search {
        /// Text to look for (case-insensitive)
        query: String,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    service: &ExpenseService<'_>,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> LedgerResult<()> {
    match cmd {
        ExpenseCommands::Add {
            description,
            amount,
            date,
            category,
        } => {
            let mut input = NewExpense::new(description, amount);
            if let Some(date) = date {
                input = input.date(date);
            }
            if let Some(category) = category {
                input = input.category(category);
            }

            let expense = service.add_with(input)?;
            println!("Expense added successfully (ID: {})", expense.id);
        }

        ExpenseCommands::List {
            month,
            year,
            category,
            search,
            limit,
        } => {
            let mut filter = period_filter(month, year)?;
            if let Some(category) = category {
                filter = filter.category(category);
            }
            if let Some(search) = search {
                filter = filter.search(search);
            }
            if let Some(limit) = limit {
                filter = filter.limit(limit);
            }

            let expenses = service.list_filtered(&filter)?;
            println!("{}", format_expense_table(&expenses, settings));
            if !expenses.is_empty() {
                println!("\nShowing {} expenses", expenses.len());
            }
        }

        ExpenseCommands::Show { id } => {
            let expense = service.get(&id)?;
            print!("{}", format_expense_details(&expense, settings));
        }

        ExpenseCommands::Update {
            id,
            description,
            amount,
            date,
            category,
            clear_category,
        } => {
            let mut changes = ExpenseUpdate::new();
            if let Some(description) = description {
                changes = changes.description(description);
            }
            if let Some(amount) = amount {
                changes = changes.amount(amount);
            }
            if let Some(date) = date {
                changes = changes.date(date);
            }
            if let Some(category) = category {
                changes = changes.category(category);
            }
            if clear_category {
                changes = changes.clear_category();
            }

            if changes.is_empty() {
                println!("No changes specified.");
                return Ok(());
            }

            let updated = service.update(&id, changes)?;
            println!("Expense updated successfully (ID: {})", updated.id);
        }

        ExpenseCommands::Delete { id } => {
            let expense = service.get(&id)?;
            service.delete(expense.id)?;
            println!(
                "Expense deleted successfully (ID: {}, {} {})",
                expense.id,
                expense.description,
                format_amount(expense.amount, settings)
            );
        }

        ExpenseCommands::Summary {
            month,
            year,
            days,
            current_month,
        } => {
            let summary = match (days, year, month) {
                _ if current_month => service.current_month_summary()?,
                (Some(days), _, _) => service.last_n_days_summary(validate_days(days)?)?,
                (None, Some(year), Some(month)) => service.monthly_summary(year, month)?,
                (None, Some(year), None) => service.yearly_summary(year)?,
                (None, None, Some(month)) => service.summary(Some(validate_month(month)?))?,
                (None, None, None) => service.summary(None)?,
            };
            println!("{}", format_summary(&summary, settings));
        }

        ExpenseCommands::Stats { month, year } => {
            let stats = service.statistics_filtered(&period_filter(month, year)?)?;
            if stats.count == 0 {
                println!("No expenses found.");
            } else {
                print!("{}", format_statistics(&stats, settings));
            }
        }

        ExpenseCommands::Search { query } => {
            let expenses = service.search(&query)?;
            if expenses.is_empty() {
                println!("No expenses matching '{}'.", query);
            } else {
                println!("{}", format_expense_table(&expenses, settings));
            }
        }
    }

    Ok(())
}

/// Build a month/year filter from raw arguments
fn period_filter(month: Option<String>, year: Option<String>) -> Result<ExpenseFilter, LedgerError> {
    let mut filter = ExpenseFilter::new();
    if let Some(month) = month {
        filter = filter.month(validate_month(month)?);
    }
    if let Some(year) = year {
        filter = filter.year(validate_year(year)?);
    }
    Ok(filter)
}
