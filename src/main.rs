use clap::{Parser, Subcommand};
use splitview::config::CONFIG;
use splitview::core::filter::TransactionView;
use splitview::core::presentation::{
    SystemClock, balance_text, category_icon, format_money, relative_date, total_balance_text,
};
use splitview::infrastructure::source::file::FileSource;
use splitview::{
    ActivityStats, BalanceSheet, RefreshOutcome, SplitResolver, StatusFilter, TransactionFeed,
    TransactionFilterEngine, ViewState,
};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "splitview", about = "Inspect a saved expense-splitting transaction feed")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List transactions with status labels, filtered and searched
    Transactions {
        /// Saved `/transactions` response (defaults to SPLITVIEW_DATA)
        #[arg(long)]
        file: Option<PathBuf>,
        /// all, paid or owe
        #[arg(long, default_value = "all")]
        filter: StatusFilter,
        /// Case-insensitive match on name, counterparty or category
        #[arg(long, default_value = "")]
        search: String,
    },
    /// Show balances per counterparty and overall totals
    Dashboard {
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&CONFIG.log_level))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Transactions { file, filter, search } => {
            let feed = load_feed(file).await?;
            let batch = feed.snapshot().await;
            let state = ViewState::default().with_filter(filter).with_query(search);
            print_transactions(&TransactionFilterEngine::view(&batch, &state), &state);
        }
        Command::Dashboard { file } => {
            let feed = load_feed(file).await?;
            let batch = feed.snapshot().await;
            print_dashboard(&BalanceSheet::from_transactions(batch.transactions()));
            let stats = ActivityStats::from_transactions(batch.transactions());
            println!(
                "\nTotal expenses: {} • Friends: {} • Settled: {}",
                format_money(stats.total_expenses, &CONFIG.currency_symbol),
                stats.total_friends,
                stats.settled_expenses
            );
        }
    }
    Ok(())
}

async fn load_feed(file: Option<PathBuf>) -> Result<TransactionFeed<FileSource>, splitview::SplitviewError> {
    let path = file.unwrap_or_else(|| CONFIG.data_path.clone());
    let feed = TransactionFeed::new(FileSource::new(path));
    if let RefreshOutcome::Applied { records, skipped, .. } = feed.refresh().await? {
        info!("Loaded {} transactions ({} skipped)", records, skipped);
    }
    Ok(feed)
}

fn print_transactions(view: &TransactionView<'_>, state: &ViewState) {
    let symbol = &CONFIG.currency_symbol;
    let clock = SystemClock;

    println!(
        "All ({}) | You Paid ({}) | You Owe ({})   [showing: {}]",
        view.tab_counts.all, view.tab_counts.paid, view.tab_counts.owe, state.status_filter
    );

    if view.visible.is_empty() {
        println!("No transactions found");
        if state.query.trim().is_empty() {
            println!("Start by adding your first expense");
        } else {
            println!("Try adjusting your search");
        }
    }

    for tx in &view.visible {
        let resolution = SplitResolver::resolve(tx);
        let settled_badge = if tx.settled { "  ✓ Settled" } else { "" };
        println!(
            "{} {:<24} {:>12}{}",
            category_icon(&tx.category),
            tx.name,
            format_money(tx.amount, symbol),
            settled_badge
        );
        println!("   with {}", tx.counterparty_name());
        println!("   {} • {}", relative_date(tx.date, &clock), tx.category);
        println!("   {}", resolution.label);
    }

    if !view.visible.is_empty() {
        println!(
            "\nTotal transactions: {}   Total amount: {}{}",
            view.summary.count,
            symbol,
            view.summary.display_total()
        );
    }
    if view.skipped > 0 {
        println!("({} malformed records skipped)", view.skipped);
    }
}

fn print_dashboard(sheet: &BalanceSheet) {
    let symbol = &CONFIG.currency_symbol;

    println!("Overall balance: {}", total_balance_text(sheet.total_balance, symbol));
    println!(
        "You owe {}   You're owed {}",
        format_money(sheet.total_to_give, symbol),
        format_money(sheet.total_to_receive, symbol)
    );
    println!("\nBalances with friends ({} active)", sheet.active_count());

    if sheet.counterparties.is_empty() {
        println!("No balances with friends yet! Add an expense to start splitting.");
        return;
    }
    for c in &sheet.counterparties {
        println!(
            "{:<20} @{:<16} {:>12}  {}",
            c.full_name,
            c.username,
            format_money(c.balance.abs(), symbol),
            balance_text(c.balance, symbol)
        );
    }
}
