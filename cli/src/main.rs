mod logging;
mod summary;
mod tui;

use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use hourmark_core::config::system_locale_tag;
use hourmark_core::time::{parse_date, parse_month};
use hourmark_core::{Config, Language};
use tracing::info;

#[derive(Parser)]
#[command(name = "hourmark")]
#[command(about = "Mark calendar days and record the hours worked on them", long_about = None)]
struct Cli {
    /// Display language (en, sv). Defaults to the config file, then $LANG.
    #[arg(long, global = true, value_parser = parse_language)]
    lang: Option<Language>,

    /// More log output (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Less log output (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    quiet: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Open the calendar in the terminal
    Tui,
    /// Print the hours worked in a month (usage: summary 2024-03 --select 2024-03-04 --hours 8)
    Summary {
        /// Month as YYYY-MM, `now`, or a relative offset like -1m
        #[arg(default_value = "now", value_parser = parse_month_arg)]
        month: hourmark_core::YearMonth,
        /// Day to select before assigning hours (repeatable)
        #[arg(long = "select", value_parser = parse_date_arg)]
        selected: Vec<NaiveDate>,
        /// Hours to assign to every selected day
        #[arg(long)]
        hours: Option<String>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
        /// Include days without hours
        #[arg(long)]
        all: bool,
    },
}

fn parse_language(s: &str) -> Result<Language, String> {
    s.parse().map_err(|e: anyhow::Error| e.to_string())
}

fn parse_month_arg(s: &str) -> Result<hourmark_core::YearMonth, String> {
    parse_month(s).map_err(|e| e.to_string())
}

fn parse_date_arg(s: &str) -> Result<NaiveDate, String> {
    parse_date(s).map_err(|e| e.to_string())
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let config = Config::load().context("failed to load configuration")?;
    let language = config.resolve_language(cli.lang, system_locale_tag().as_deref());

    match cli.command {
        Some(Commands::Summary { month, selected, hours, json, all }) => {
            logging::init_stderr(cli.verbose, cli.quiet)?;
            info!(%language, year = month.year, month = month.month, "printing summary");
            let locale = language.locale();
            if let Err(e) = summary::show(month, &selected, hours.as_deref(), json, all, locale) {
                let Some(notice) = summary::validation_notice(&e, locale) else {
                    return Err(e);
                };
                eprintln!("{}", notice);
                return Ok(ExitCode::from(2));
            }
        }
        Some(Commands::Tui) | None => {
            logging::init_file(&config.resolve_log_file()?, cli.verbose, cli.quiet)?;
            tui::run(language)?;
        }
    }
    Ok(ExitCode::SUCCESS)
}
