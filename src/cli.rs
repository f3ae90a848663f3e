//! Command-line harness that runs report queries against the sample dataset.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;
use colored::Colorize;

use crate::config::{Config, ConfigManager};
use crate::domain::{ExpenseSubType, ExpenseType};
use crate::errors::Result;
use crate::report::{ExpenseReport, Report, ReportFilter};
use crate::sample;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("EXPENSE_REPORT_BUILD_HASH"),
    ", ",
    env!("EXPENSE_REPORT_BUILD_STATUS"),
    ", built ",
    env!("EXPENSE_REPORT_BUILD_TIMESTAMP"),
    " for ",
    env!("EXPENSE_REPORT_BUILD_TARGET"),
    ")"
);

#[derive(Debug, Parser)]
#[command(
    name = "expense_report_cli",
    version,
    long_version = LONG_VERSION,
    about = "Filter and total the sample expenses"
)]
pub struct Cli {
    /// Expense type, e.g. `meal` or `travel`
    #[arg(long = "type", value_name = "TYPE")]
    pub expense_type: Option<ExpenseType>,

    /// Expense subtype, e.g. `breakfast` or `car-rental`
    #[arg(long = "subtype", value_name = "SUBTYPE")]
    pub expense_sub_type: Option<ExpenseSubType>,

    /// First day to include (YYYY-MM-DD)
    #[arg(long = "from", value_name = "DATE")]
    pub start_date: Option<NaiveDate>,

    /// Last day to include (YYYY-MM-DD)
    #[arg(long = "until", value_name = "DATE")]
    pub end_date: Option<NaiveDate>,

    /// Only expenses above their subtype's spending limit
    #[arg(long)]
    pub over_spent: bool,

    /// Log every matching expense
    #[arg(long)]
    pub log: bool,

    /// Print the full report as JSON
    #[arg(long)]
    pub json: bool,

    /// Replay the scripted walk-through instead of a single query
    #[arg(
        long,
        conflicts_with_all = [
            "expense_type",
            "expense_sub_type",
            "start_date",
            "end_date",
            "over_spent",
            "log",
        ]
    )]
    pub demo: bool,

    /// Configuration file; defaults to the platform config directory
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    pub fn filter(&self) -> ReportFilter {
        ReportFilter {
            expense_type: self.expense_type,
            expense_sub_type: self.expense_sub_type,
            start_date: self.start_date,
            end_date: self.end_date,
            is_over_spent: self.over_spent,
            log_to_screen: self.log.then_some(true),
        }
    }

    fn load_config(&self) -> Result<Config> {
        let manager = match &self.config {
            Some(path) => ConfigManager::new(path.clone()),
            None => ConfigManager::default_location(),
        };
        manager.load()
    }
}

pub fn run_cli() -> Result<()> {
    run(Cli::parse())
}

pub fn run(cli: Cli) -> Result<()> {
    let config = cli.load_config()?;
    crate::init_with(&config);
    tracing::debug!(?config, "configuration loaded");

    let report = ExpenseReport::with_config(sample::sample_expenses()?, config);
    let filters = if cli.demo {
        sample::demo_filters()?
    } else {
        vec![cli.filter()]
    };

    for filter in &filters {
        let result = report.get_report(filter)?;
        print_report(&result, cli.json)?;
    }
    Ok(())
}

fn print_report(report: &Report<'_>, as_json: bool) -> Result<()> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else if report.is_empty() {
        println!("{}", report.summary.dimmed());
    } else {
        println!("{}", report.summary.bold());
    }
    Ok(())
}
