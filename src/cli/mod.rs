use std::fs::File;
use std::io::Write;

use anyhow::{bail, Context, Result};
use chrono::{Datelike, NaiveDate};
use clap::{Parser, Subcommand};

use crate::application::ForecastRunner;
use crate::domain::{format_cents, format_signed_cents, Forecast, MoneySheet, Node};
use crate::io::export;

/// Moneysheet - personal cash flow forecaster
#[derive(Parser)]
#[command(name = "moneysheet")]
#[command(about = "Estimates how much money you would have in the near future")]
#[command(version)]
pub struct Cli {
    /// Sheet file describing the initial balance and all gains and dumps
    #[arg(short, long, default_value = "sheet.json")]
    pub input_file: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Simulate the balance over the coming months
    Forecast {
        /// Number of months for the forecast period
        #[arg(short, long, default_value = "3")]
        months: u32,

        /// Start date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        start_date: Option<String>,

        /// Output format: table, json, csv
        #[arg(short, long, default_value = "table")]
        format: String,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Show daily averages and the expected monthly balance
    Summary,

    /// Validate the sheet file
    Check,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let runner = ForecastRunner::from_system_clock();

        match self.command {
            Commands::Forecast {
                months,
                start_date,
                format,
                output,
            } => {
                let start = start_date
                    .map(|s| parse_date(&s))
                    .transpose()
                    .context("Invalid start date")?;
                let forecast = runner.run(&self.input_file, start, months)?;
                run_forecast_output(&forecast, &format, output)?;
            }

            Commands::Summary => {
                let sheet = runner.load_sheet(&self.input_file)?;
                run_summary_command(&sheet);
            }

            Commands::Check => {
                let sheet = runner.load_sheet(&self.input_file)?;
                println!(
                    "{}: {} transfers in {} groups, initial balance {}",
                    self.input_file,
                    sheet.portfolio.transfer_count(),
                    sheet.portfolio.group_count(),
                    format_cents(sheet.initial_balance)
                );
                println!("OK");
            }
        }

        Ok(())
    }
}

fn run_forecast_output(forecast: &Forecast, format: &str, output: Option<String>) -> Result<()> {
    match format {
        "table" => {
            let mut writer = open_output(output)?;
            print_forecast_table(forecast, &mut writer)?;
        }
        "json" => {
            let writer = open_output(output)?;
            export::write_forecast_json(forecast, writer)?;
        }
        "csv" => {
            let writer = open_output(output)?;
            export::write_forecast_csv(forecast, writer)?;
        }
        other => bail!("Unknown format '{}'. Use table, json or csv", other),
    }
    Ok(())
}

fn open_output(output: Option<String>) -> Result<Box<dyn Write>> {
    match output {
        Some(path) => {
            let file = File::create(&path)
                .with_context(|| format!("Cannot create output file '{}'", path))?;
            Ok(Box::new(file))
        }
        None => Ok(Box::new(std::io::stdout())),
    }
}

/// Render the forecast as aligned rows, with a heading whenever consecutive
/// entries cross into a new calendar month.
fn print_forecast_table<W: Write>(forecast: &Forecast, writer: &mut W) -> Result<()> {
    let mut previous: Option<NaiveDate> = None;
    for entry in &forecast.entries {
        if let Some(previous) = previous {
            if leaps_month(previous, entry.date) {
                writeln!(writer)?;
                writeln!(writer, "{}", entry.date.format("%B %Y"))?;
                writeln!(writer, "------------------------")?;
            }
        }
        writeln!(
            writer,
            "{} {:>12}  {:<20} | {:>10}",
            entry.date,
            format_signed_cents(entry.amount),
            entry.description,
            format_cents(entry.balance)
        )?;
        previous = Some(entry.date);
    }
    writer.flush()?;
    Ok(())
}

/// True when `next` falls in a later calendar month than `previous`.
/// Year-aware, so December to January of the following year counts.
fn leaps_month(previous: NaiveDate, next: NaiveDate) -> bool {
    if previous > next {
        return false;
    }
    (previous.year(), previous.month()) < (next.year(), next.month())
}

fn run_summary_command(sheet: &MoneySheet) {
    println!("Daily averages per entry:");
    for entry in &sheet.portfolio.entries {
        let (name, average) = match entry {
            Node::Group(group) => (group.name.as_str(), group.daily_average()),
            Node::Transfer(transfer) => (transfer.description.as_str(), transfer.daily_average()),
        };
        println!("  {:<20} {:>10}", name, format_average(average));
    }
    println!();
    println!("Monthly gains:   {:>10}", format_average(sheet.portfolio.monthly_gains()));
    println!("Monthly dumps:   {:>10}", format_average(sheet.portfolio.monthly_dumps()));
    println!("Monthly balance: {:>10}", format_average(sheet.portfolio.monthly_balance()));
}

fn format_average(cents: f64) -> String {
    format!("{:.2}", cents / 100.0)
}

fn parse_date(date_str: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").context("Date must be in YYYY-MM-DD format")
}
