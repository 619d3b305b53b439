use std::fmt::Display;
use std::str::FromStr;

use adspace::modules::pricing::service::ProrationService;
use adspace::modules::schedules::model::ScheduleFitRequest;
use adspace::modules::schedules::service::ScheduleFitService;
use adspace_core::money::format_currency;
use adspace_models::{MonthlyRate, VAT_RATE};
use anyhow::Context;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use dialoguer::Input;
use dotenvy::dotenv;

#[derive(Parser)]
#[command(name = "adspace-cli")]
#[command(about = "Adspace CLI - schedule fit checks and contract pricing", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check whether a spot/loop configuration fits a display's daily window
    Fit {
        /// Daily start time (HH:MM)
        #[arg(short = 's', long)]
        start: Option<String>,

        /// Daily end time (HH:MM); earlier than start crosses midnight
        #[arg(short = 'e', long)]
        end: Option<String>,

        /// Length of one spot in seconds
        #[arg(short = 'd', long)]
        spot_duration: Option<String>,

        /// Number of spots in one loop
        #[arg(short = 'n', long)]
        spots_per_loop: Option<String>,
    },
    /// Prorate a monthly rate across a contract period (30-day months, 12% VAT)
    Prorate {
        /// Monthly rate
        #[arg(short = 'r', long)]
        rate: Option<MonthlyRate>,

        /// First contract day (YYYY-MM-DD)
        #[arg(short = 's', long)]
        start: Option<NaiveDate>,

        /// Last contract day, inclusive (YYYY-MM-DD)
        #[arg(short = 'e', long)]
        end: Option<NaiveDate>,
    },
}

fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Fit {
            start,
            end,
            spot_duration,
            spots_per_loop,
        } => handle_fit(start, end, spot_duration, spots_per_loop),
        Commands::Prorate { rate, start, end } => handle_prorate(rate, start, end),
    }
}

/// Use the provided value or prompt for it interactively.
fn value_or_prompt<T>(value: Option<T>, prompt: &str) -> anyhow::Result<T>
where
    T: Clone + Display + FromStr,
    T::Err: Display,
{
    match value {
        Some(value) => Ok(value),
        None => Input::new()
            .with_prompt(prompt)
            .interact_text()
            .with_context(|| format!("Failed to read {}", prompt.to_lowercase())),
    }
}

fn handle_fit(
    start: Option<String>,
    end: Option<String>,
    spot_duration: Option<String>,
    spots_per_loop: Option<String>,
) -> anyhow::Result<()> {
    let request = ScheduleFitRequest::new(
        value_or_prompt(start, "Start time (HH:MM)")?,
        value_or_prompt(end, "End time (HH:MM)")?,
        value_or_prompt(spot_duration, "Spot duration (seconds)")?,
        value_or_prompt(spots_per_loop, "Spots per loop")?,
    );

    let result = ScheduleFitService::validate(&request);

    if result.is_valid {
        println!("\n✅ {}", result.message);
        Ok(())
    } else {
        eprintln!("\n❌ {}", result.message);
        std::process::exit(1);
    }
}

fn handle_prorate(
    rate: Option<MonthlyRate>,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> anyhow::Result<()> {
    let rate = value_or_prompt(rate, "Monthly rate")?;
    let start = value_or_prompt(start, "Start date (YYYY-MM-DD)")?;
    let end = value_or_prompt(end, "End date (YYYY-MM-DD)")?;

    if end < start {
        eprintln!("⚠️  End date is before start date; the contract is priced as zero days.");
    }

    let price = ProrationService::price_breakdown(rate, start, end);

    println!(
        "\nContract:      {} to {} ({} days, {})",
        price.start_date, price.end_date, price.duration.duration_days, price.duration_label
    );
    println!("Monthly rate:  {:>14}", format_currency(price.monthly_rate));
    println!("Total:         {:>14}", format_currency(price.total_amount));
    println!(
        "VAT ({:.0}%):     {:>14}",
        VAT_RATE * 100.0,
        format_currency(price.vat_amount)
    );
    println!("Grand total:   {:>14}", format_currency(price.grand_total));

    Ok(())
}
