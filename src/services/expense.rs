//! Expense ledger service
//!
//! Orchestrates validation, the expense store and the calendar windows to
//! provide CRUD, search and aggregation. Every operation validates its input
//! before touching the store, so a partially invalid expense is never
//! persisted.

use std::fmt::Display;

use chrono::{Local, NaiveDateTime};

use crate::audit::{diff_of, AuditEntry, AuditLogger};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Expense, ExpenseId, Statistics, Summary, Window};
use crate::storage::ExpenseStore;

use super::validation::{
    parse_date, validate_amount, validate_category, validate_days, validate_description,
    validate_id, validate_month, validate_year,
};

/// Input for creating an expense with optional date and category
#[derive(Debug, Clone)]
pub struct NewExpense {
    pub description: String,
    pub amount: String,
    /// Defaults to the current local time
    pub date: Option<String>,
    pub category: Option<String>,
}

impl NewExpense {
    pub fn new(description: impl Into<String>, amount: impl Display) -> Self {
        Self {
            description: description.into(),
            amount: amount.to_string(),
            date: None,
            category: None,
        }
    }

    pub fn date(mut self, date: impl Display) -> Self {
        self.date = Some(date.to_string());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

/// Fields to change on an existing expense; `None` leaves a field untouched
#[derive(Debug, Clone, Default)]
pub struct ExpenseUpdate {
    pub description: Option<String>,
    pub amount: Option<String>,
    pub date: Option<String>,
    /// `Some(None)` clears the category
    pub category: Option<Option<String>>,
}

impl ExpenseUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn amount(mut self, amount: impl Display) -> Self {
        self.amount = Some(amount.to_string());
        self
    }

    pub fn date(mut self, date: impl Display) -> Self {
        self.date = Some(date.to_string());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(Some(category.into()));
        self
    }

    pub fn clear_category(mut self) -> Self {
        self.category = Some(None);
        self
    }

    /// True if no field would change
    pub fn is_empty(&self) -> bool {
        self.description.is_none()
            && self.amount.is_none()
            && self.date.is_none()
            && self.category.is_none()
    }
}

/// Options for filtering the expense listing
#[derive(Debug, Clone, Default)]
pub struct ExpenseFilter {
    /// Month of year; combined with `year` selects one calendar month,
    /// alone it matches that month in every year
    pub month: Option<u32>,
    pub year: Option<i32>,
    /// Case-insensitive category equality
    pub category: Option<String>,
    /// Case-insensitive substring of the description
    pub search: Option<String>,
    /// Maximum number of expenses to return
    pub limit: Option<usize>,
}

impl ExpenseFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn month(mut self, month: u32) -> Self {
        self.month = Some(month);
        self
    }

    pub fn year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn search(mut self, query: impl Into<String>) -> Self {
        self.search = Some(query.into());
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Service for expense management and reporting
pub struct ExpenseService<'a> {
    store: &'a dyn ExpenseStore,
    audit: Option<&'a AuditLogger>,
}

impl<'a> ExpenseService<'a> {
    /// Create a service over a store, without audit logging
    pub fn new(store: &'a dyn ExpenseStore) -> Self {
        Self { store, audit: None }
    }

    /// Record every mutation in the given audit log
    pub fn with_audit(mut self, audit: &'a AuditLogger) -> Self {
        self.audit = Some(audit);
        self
    }

    // ========================
    // CRUD
    // ========================

    /// Add an expense dated now
    pub fn add(&self, description: &str, amount: impl Display) -> LedgerResult<Expense> {
        self.add_with(NewExpense::new(description, amount))
    }

    /// Add an expense with optional explicit date and category
    pub fn add_with(&self, input: NewExpense) -> LedgerResult<Expense> {
        let description = validate_description(&input.description)?;
        let amount = validate_amount(&input.amount)?;
        let date = match input.date.as_deref() {
            Some(raw) => parse_date(raw)?,
            None => now(),
        };
        let category = match input.category.as_deref() {
            Some(raw) => validate_category(raw)?,
            None => None,
        };

        let existing = self.store.get_all()?;
        let id = ExpenseId::after_max(existing.iter().map(|e| e.id));

        let mut expense = Expense::new(id, description, amount, date);
        expense.category = category;

        let saved = self.store.save(expense)?;

        if let Some(audit) = self.audit {
            audit.log(&AuditEntry::create(&saved))?;
        }

        Ok(saved)
    }

    /// Get an expense by ID
    pub fn get(&self, id: impl Display) -> LedgerResult<Expense> {
        let id = validate_id(id)?;
        self.store.get(id)?.ok_or_else(|| LedgerError::not_found(id))
    }

    /// Every stored expense, as returned by the store
    pub fn list(&self) -> LedgerResult<Vec<Expense>> {
        self.store.get_all()
    }

    /// Expenses matching a filter, sorted by date then ID
    pub fn list_filtered(&self, filter: &ExpenseFilter) -> LedgerResult<Vec<Expense>> {
        let mut expenses = match (filter.year, filter.month) {
            (Some(year), Some(month)) => self.by_month(year, month)?,
            (Some(year), None) => self.by_year(year)?,
            (None, Some(month)) => {
                let month = validate_month(month)?;
                self.list()?
                    .into_iter()
                    .filter(|e| e.month() == month)
                    .collect()
            }
            (None, None) => self.list()?,
        };

        if let Some(category) = &filter.category {
            expenses.retain(|e| e.in_category(category));
        }
        if let Some(query) = &filter.search {
            expenses.retain(|e| e.matches_query(query));
        }

        expenses.sort_by(|a, b| a.date.cmp(&b.date).then(a.id.cmp(&b.id)));

        if let Some(limit) = filter.limit {
            expenses.truncate(limit);
        }

        Ok(expenses)
    }

    /// Update the given fields of an expense
    pub fn update(&self, id: impl Display, changes: ExpenseUpdate) -> LedgerResult<Expense> {
        let id = validate_id(id)?;
        let before = self.get(id)?;

        // Validate everything before mutating anything
        let description = changes
            .description
            .as_deref()
            .map(validate_description)
            .transpose()?;
        let amount = changes.amount.as_deref().map(validate_amount).transpose()?;
        let date = changes.date.as_deref().map(parse_date).transpose()?;
        let category = match changes.category {
            Some(Some(raw)) => Some(validate_category(&raw)?),
            Some(None) => Some(None),
            None => None,
        };

        let mut expense = before.clone();
        if let Some(description) = description {
            expense.description = description;
        }
        if let Some(amount) = amount {
            expense.amount = amount;
        }
        if let Some(date) = date {
            expense.date = date;
        }
        if let Some(category) = category {
            expense.category = category;
        }

        let updated = self.store.update(expense)?;

        if let Some(audit) = self.audit {
            let diff = diff_of(&before, &updated);
            audit.log(&AuditEntry::update(&before, &updated, diff))?;
        }

        Ok(updated)
    }

    /// Delete an expense
    pub fn delete(&self, id: impl Display) -> LedgerResult<()> {
        let id = validate_id(id)?;
        let expense = self.get(id)?;

        // The expense may vanish between the lookup and the delete
        if !self.store.delete(id)? {
            return Err(LedgerError::not_found(id));
        }

        if let Some(audit) = self.audit {
            audit.log(&AuditEntry::delete(&expense))?;
        }

        Ok(())
    }

    // ========================
    // Queries
    // ========================

    /// Expenses dated within `[start, end]`
    pub fn by_date_range(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> LedgerResult<Vec<Expense>> {
        self.in_window(&Window::new(start, end))
    }

    /// Expenses in one calendar month
    pub fn by_month(&self, year: impl Display, month: impl Display) -> LedgerResult<Vec<Expense>> {
        let window = month_window(year, month)?;
        self.in_window(&window)
    }

    /// Expenses in one calendar year
    pub fn by_year(&self, year: impl Display) -> LedgerResult<Vec<Expense>> {
        let window = year_window(year)?;
        self.in_window(&window)
    }

    /// Expenses from the last `days` calendar days, today included
    pub fn last_n_days(&self, days: impl Display) -> LedgerResult<Vec<Expense>> {
        let days = validate_days(days)?;
        let window = Window::last_n_days(days)
            .ok_or_else(|| LedgerError::validation("days", days.to_string(), "out of range"))?;
        self.in_window(&window)
    }

    /// Case-insensitive substring search on descriptions
    pub fn search(&self, query: &str) -> LedgerResult<Vec<Expense>> {
        Ok(self
            .list()?
            .into_iter()
            .filter(|e| e.matches_query(query))
            .collect())
    }

    fn in_window(&self, window: &Window) -> LedgerResult<Vec<Expense>> {
        Ok(self
            .list()?
            .into_iter()
            .filter(|e| window.contains(e.date))
            .collect())
    }

    // ========================
    // Aggregation
    // ========================

    /// Summary over everything, or over one month-of-year across all years
    pub fn summary(&self, month: Option<u32>) -> LedgerResult<Summary> {
        match month {
            Some(month) => {
                let month = validate_month(month)?;
                let expenses: Vec<Expense> = self
                    .list()?
                    .into_iter()
                    .filter(|e| e.month() == month)
                    .collect();
                Summary::from_expenses(&expenses, format!("Month {}", month))
            }
            None => Summary::from_expenses(&self.list()?, "All time"),
        }
    }

    /// Summary of one calendar month of one year
    pub fn monthly_summary(&self, year: impl Display, month: impl Display) -> LedgerResult<Summary> {
        let window = month_window(year, month)?;
        let expenses = self.in_window(&window)?;
        Summary::from_expenses(&expenses, window.label())
    }

    /// Summary of one calendar year
    pub fn yearly_summary(&self, year: impl Display) -> LedgerResult<Summary> {
        let year = validate_year(year)?;
        let expenses = self.by_year(year)?;
        Summary::from_expenses(&expenses, format!("Year {}", year))
    }

    /// Summary of the last `days` calendar days
    pub fn last_n_days_summary(&self, days: impl Display) -> LedgerResult<Summary> {
        let days = validate_days(days)?;
        let expenses = self.last_n_days(days)?;
        Summary::from_expenses(&expenses, format!("Last {} days", days))
    }

    /// Summary of the calendar month containing today
    pub fn current_month_summary(&self) -> LedgerResult<Summary> {
        let window = Window::current_month().ok_or_else(|| {
            LedgerError::validation("month", now().to_string(), "no such month")
        })?;
        let expenses = self.in_window(&window)?;
        Summary::from_expenses(&expenses, window.label())
    }

    /// Statistics over the given expenses, or over everything when `None`
    pub fn statistics(&self, expenses: Option<&[Expense]>) -> LedgerResult<Statistics> {
        match expenses {
            Some(expenses) => Statistics::from_expenses(expenses),
            None => Statistics::from_expenses(&self.list()?),
        }
    }

    /// Statistics over the expenses selected by a filter
    pub fn statistics_filtered(&self, filter: &ExpenseFilter) -> LedgerResult<Statistics> {
        let expenses = self.list_filtered(filter)?;
        self.statistics(Some(&expenses))
    }
}

fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

fn month_window(year: impl Display, month: impl Display) -> LedgerResult<Window> {
    let year = validate_year(year)?;
    let month = validate_month(month)?;
    Window::month(year, month).ok_or_else(|| {
        LedgerError::validation("month", format!("{}-{:02}", year, month), "no such month")
    })
}

fn year_window(year: impl Display) -> LedgerResult<Window> {
    let year = validate_year(year)?;
    Window::year(year)
        .ok_or_else(|| LedgerError::validation("year", year.to_string(), "no such year"))
}
