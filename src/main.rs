//! A small command line front-end that signs in a demo user, loads the
//! sample backing data, and prints day, week, and month summaries.

use std::sync::Arc;

use clap::Parser;
use time::{Date, OffsetDateTime, macros::format_description};
use tracing_subscriber::{Layer, filter, layer::SubscriberExt, util::SubscriberInitExt};

use khata::{Error, LedgerService, MemoryBacking, Session, Totals, month_of, week_of};

/// Print order/payment summaries from the sample ledger.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// The date to summarize (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = parse_date)]
    date: Option<Date>,
}

fn parse_date(text: &str) -> Result<Date, String> {
    Date::parse(text, format_description!("[year]-[month]-[day]"))
        .map_err(|error| format!("expected YYYY-MM-DD: {error}"))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_filter(filter::LevelFilter::WARN))
        .init();

    let args = Args::parse();
    let date = args
        .date
        .unwrap_or_else(|| OffsetDateTime::now_utc().date());

    let session = Session::sign_in("Demo User");
    let service = LedgerService::new(Arc::new(MemoryBacking::with_sample_data()));

    if session.is_authenticated() {
        service.load_initial().await?;
    }

    println!("Summary for {date}");
    print_totals(service.totals_on(date).await);

    let transactions = service.transactions_on(date).await;
    if transactions.is_empty() {
        println!("  no transactions");
    } else {
        let time_format = format_description!("[hour]:[minute]");
        for transaction in transactions {
            let time = transaction
                .created_at
                .time()
                .format(time_format)
                .unwrap_or_else(|_| String::from("--:--"));
            println!(
                "  {time}  {:<7}  {:>10}  {}",
                transaction.kind.label(),
                transaction.amount.to_string(),
                transaction.description
            );
        }
    }

    let week = week_of(date);
    println!("\nWeek {} - {}", week.start(), week.end());
    print_totals(service.totals_for_week(date).await);

    let month = month_of(date);
    println!("\nMonth {} - {}", month.start(), month.end());
    print_totals(service.totals_for_month(date).await);

    Ok(())
}

fn print_totals(totals: Totals) {
    println!("  orders:   {:.2}", totals.order_total);
    println!("  payments: {:.2}", totals.payment_total);
    println!("  balance:  {:.2}", totals.balance());
}
