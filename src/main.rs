use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_ledger::audit::AuditLogger;
use expense_ledger::cli::{handle_expense_command, ExpenseCommands};
use expense_ledger::config::{ExpensePaths, Settings};
use expense_ledger::services::ExpenseService;
use expense_ledger::storage::JsonFileStore;

const RECENT_AUDIT_ENTRIES: usize = 5;

#[derive(Parser)]
#[command(
    name = "expense",
    author = "Kaylee Beyene",
    version,
    about = "Command-line expense ledger",
    long_about = "Record expenses from the command line and get totals per \
                  month, year or recent days, along with search and spending \
                  statistics."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Expense(ExpenseCommands),

    /// Show current configuration and paths
    Config,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = ExpensePaths::new()?;
    paths.ensure_directories()?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let store = JsonFileStore::new(paths.expenses_file());
    let audit = AuditLogger::new(paths.audit_log());
    let mut service = ExpenseService::new(&store);
    if settings.audit_enabled {
        service = service.with_audit(&audit);
    }

    match cli.command {
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&service, &settings, cmd)?;
        }
        Some(Commands::Config) => {
            println!("Expense Ledger Configuration");
            println!("============================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Expenses file:   {}", paths.expenses_file().display());
            println!("Audit log:       {}", audit.path().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Audit enabled:   {}", settings.audit_enabled);

            if audit.exists() {
                let recent = audit.read_recent(RECENT_AUDIT_ENTRIES)?;
                println!();
                println!(
                    "Recent activity ({} of {} entries):",
                    recent.len(),
                    audit.entry_count()?
                );
                for entry in recent {
                    println!("  {}", entry.format_human_readable().replace('\n', "\n  "));
                }
            }
        }
        None => {
            println!("Expense Ledger - track where your money goes");
            println!();
            println!("Run 'expense --help' for usage information.");
        }
    }

    Ok(())
}
