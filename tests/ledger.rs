//! End-to-end ledger scenarios run against every store backend

use chrono::NaiveDate;
use rust_decimal_macros::dec;
use tempfile::TempDir;

use expense_ledger::{
    ExpenseFilter, ExpenseService, ExpenseStore, ExpenseUpdate, JsonFileStore, LedgerError,
    MemoryStore, NewExpense,
};

fn with_each_store(scenario: impl Fn(&dyn ExpenseStore)) {
    let memory = MemoryStore::new();
    scenario(&memory);

    let temp_dir = TempDir::new().unwrap();
    let json = JsonFileStore::new(temp_dir.path().join("expenses.json"));
    scenario(&json);
}

fn seed(service: &ExpenseService<'_>) {
    service
        .add_with(NewExpense::new("Groceries", "10").date("2024-01-05"))
        .unwrap();
    service
        .add_with(NewExpense::new("Rent", "20").date("2024-02-01"))
        .unwrap();
    service
        .add_with(NewExpense::new("Grocery run", "30").date("2024-01-20"))
        .unwrap();
}

#[test]
fn monthly_and_yearly_totals() {
    with_each_store(|store| {
        let service = ExpenseService::new(store);
        seed(&service);

        let january = service.monthly_summary(2024, 1).unwrap();
        assert_eq!(january.total, dec!(40));
        assert_eq!(january.count, 2);
        assert_eq!(january.period, "January 2024");

        let year = service.yearly_summary(2024).unwrap();
        assert_eq!(year.total, dec!(60));
        assert_eq!(year.count, 3);

        let empty = service.monthly_summary(2023, 1).unwrap();
        assert_eq!(empty.total, dec!(0));
        assert_eq!(empty.count, 0);
    });
}

#[test]
fn search_is_case_insensitive() {
    with_each_store(|store| {
        let service = ExpenseService::new(store);
        seed(&service);

        let found = service.search("GROC").unwrap();
        let names: Vec<_> = found.iter().map(|e| e.description.as_str()).collect();
        assert_eq!(names, vec!["Groceries", "Grocery run"]);

        assert_eq!(service.search("rent").unwrap().len(), 1);
    });
}

#[test]
fn add_then_get_round_trips() {
    with_each_store(|store| {
        let service = ExpenseService::new(store);
        let added = service.add("Lunch", "12.75").unwrap();

        let fetched = service.get(added.id).unwrap();
        assert_eq!(fetched, added);
        assert_eq!(fetched.amount, dec!(12.75));
    });
}

#[test]
fn amounts_keep_every_digit() {
    with_each_store(|store| {
        let service = ExpenseService::new(store);

        for raw in ["1234567890123456.78", "1.000000000000000000001", "0.1", "19.99"] {
            let added = service.add("Precise", raw).unwrap();
            let fetched = service.get(added.id).unwrap();
            assert_eq!(fetched, added, "{}", raw);
            assert_eq!(fetched.amount.to_string(), raw);
        }
    });
}

#[test]
fn json_file_stores_amount_as_exact_number() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("expenses.json");
    let store = JsonFileStore::new(&path);
    let service = ExpenseService::new(&store);
    service.add("Wire transfer", "1234567890123456.78").unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.contains("\"amount\": 1234567890123456.78"));
}

#[test]
fn extreme_day_counts_are_rejected() {
    with_each_store(|store| {
        let service = ExpenseService::new(store);
        service.add("Coffee", "3").unwrap();

        assert_eq!(service.last_n_days(1_000_000_000u32).unwrap_err().field(), Some("days"));
        assert_eq!(service.last_n_days_summary(u32::MAX).unwrap_err().field(), Some("days"));
        assert_eq!(service.last_n_days(1).unwrap().len(), 1);
    });
}

#[test]
fn totals_past_decimal_range_are_errors() {
    with_each_store(|store| {
        let service = ExpenseService::new(store);
        let amount = "50000000000000000000000000000";
        service
            .add_with(NewExpense::new("First", amount).date("2024-01-05"))
            .unwrap();
        service
            .add_with(NewExpense::new("Second", amount).date("2024-01-06"))
            .unwrap();

        for err in [
            service.summary(None).unwrap_err(),
            service.monthly_summary(2024, 1).unwrap_err(),
            service.yearly_summary(2024).unwrap_err(),
            service.statistics(None).unwrap_err(),
        ] {
            assert_eq!(err.field(), Some("amount"));
        }

        let single = service
            .statistics_filtered(&ExpenseFilter::new().search("first"))
            .unwrap();
        assert_eq!(single.total, dec!(50000000000000000000000000000));
    });
}

#[test]
fn delete_then_get_is_not_found() {
    with_each_store(|store| {
        let service = ExpenseService::new(store);
        let added = service.add("Taxi", "18").unwrap();

        service.delete(added.id).unwrap();
        let err = service.get(added.id).unwrap_err();
        assert!(matches!(err, LedgerError::NotFound { id } if id == added.id));

        assert!(service.delete(added.id).unwrap_err().is_not_found());
    });
}

#[test]
fn rejected_update_leaves_record_untouched() {
    with_each_store(|store| {
        let service = ExpenseService::new(store);
        let added = service.add("Books", "25").unwrap();

        let changes = ExpenseUpdate::new().description("Novels").amount("-5");
        let err = service.update(added.id, changes).unwrap_err();
        assert_eq!(err.field(), Some("amount"));
        assert_eq!(service.get(added.id).unwrap(), added);
    });
}

#[test]
fn statistics_over_filtered_month() {
    with_each_store(|store| {
        let service = ExpenseService::new(store);
        seed(&service);

        let stats = service
            .statistics_filtered(&ExpenseFilter::new().year(2024).month(1))
            .unwrap();
        assert_eq!(stats.count, 2);
        assert_eq!(stats.average, dec!(20));
        assert_eq!(stats.median, dec!(20));
        assert_eq!(stats.min, dec!(10));
        assert_eq!(stats.max, dec!(30));
    });
}

#[test]
fn json_store_survives_reopen() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("expenses.json");

    let id = {
        let store = JsonFileStore::new(&path);
        let service = ExpenseService::new(&store);
        service
            .add_with(NewExpense::new("Gym", "40").date("2024-03-01").category("Health"))
            .unwrap()
            .id
    };

    let store = JsonFileStore::new(&path);
    let service = ExpenseService::new(&store);
    let expense = service.get(id).unwrap();
    assert_eq!(expense.category.as_deref(), Some("Health"));
    assert_eq!(
        expense.date,
        NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    );
}
