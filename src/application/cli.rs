use crate::application::{VillaApp, check_terminal};
use crate::domain::DisplayedPeriod;
use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};
use clap::{Parser, Subcommand};
use std::io::IsTerminal;

#[derive(Parser)]
#[command(name = "villa")]
#[command(about = "Pick a stay on the villa calendar and get a price summary")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive booking calendar
    Book {
        /// Month to open on (YYYY-MM format, defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,
    },
    /// Print a month of the calendar
    Calendar {
        /// Month to print (YYYY-MM format, defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,
        /// Highlight a check-in date (YYYY-MM-DD)
        #[arg(long)]
        check_in: Option<String>,
        /// Highlight a check-out date (YYYY-MM-DD)
        #[arg(long, requires = "check_in")]
        check_out: Option<String>,
    },
    /// Print the price summary for a stay
    Quote {
        /// Check-in date (YYYY-MM-DD)
        #[arg(long)]
        check_in: String,
        /// Check-out date (YYYY-MM-DD)
        #[arg(long)]
        check_out: String,
        /// Number of guests, shown as entered
        #[arg(short, long, default_value = "1")]
        guests: String,
    },
    /// Check that the terminal can host the booking screen
    CheckTerminal,
}

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

pub fn parse_month(s: &str) -> Result<DisplayedPeriod> {
    let first = NaiveDate::parse_from_str(&format!("{}-01", s), "%Y-%m-%d")
        .with_context(|| format!("Invalid month '{}', expected YYYY-MM", s))?;
    Ok(DisplayedPeriod::new(first.year(), first.month0() as i32))
}

/// Day clicks for the calendar command, check-in first.
fn clicks_from_args(check_in: Option<&str>, check_out: Option<&str>) -> Result<Vec<NaiveDate>> {
    [check_in, check_out]
        .into_iter()
        .flatten()
        .map(parse_date)
        .collect()
}

impl Cli {
    pub fn run() -> Result<()> {
        let cli = Self::parse();
        let app = VillaApp::new()?;

        match cli.command {
            Some(Commands::Book { month }) => {
                let month = month.as_deref().map(parse_month).transpose()?;
                app.run_booking(month)?;
            }
            Some(Commands::Calendar {
                month,
                check_in,
                check_out,
            }) => {
                let period = match month.as_deref() {
                    Some(m) => parse_month(m)?,
                    None => DisplayedPeriod::containing(VillaApp::today()),
                };
                let clicks = clicks_from_args(check_in.as_deref(), check_out.as_deref())?;
                let colored = std::io::stdout().is_terminal();
                print!("{}", app.calendar_text(period, &clicks, colored)?);
            }
            Some(Commands::Quote {
                check_in,
                check_out,
                guests,
            }) => {
                let text = app.quote_text(parse_date(&check_in)?, parse_date(&check_out)?, &guests)?;
                print!("{}", text);
            }
            Some(Commands::CheckTerminal) => {
                let report = check_terminal()?;
                for line in report.lines {
                    println!("{}", line);
                }
            }
            None => {
                // Default: open the booking calendar on the current month
                app.run_booking(None)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_month_argument() {
        assert_eq!(parse_month("2025-11").unwrap(), DisplayedPeriod::new(2025, 10));
        assert_eq!(parse_month("2026-01").unwrap(), DisplayedPeriod::new(2026, 0));
        assert!(parse_month("2025-13").is_err());
        assert!(parse_month("November").is_err());
    }

    #[test]
    fn parses_quote_arguments() {
        let cli = Cli::try_parse_from([
            "villa",
            "quote",
            "--check-in",
            "2025-11-10",
            "--check-out",
            "2025-11-13",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Quote { guests, .. }) => assert_eq!(guests, "1"),
            _ => panic!("expected quote"),
        }
    }

    #[test]
    fn check_out_requires_check_in() {
        assert!(Cli::try_parse_from(["villa", "calendar", "--check-out", "2025-11-13"]).is_err());
    }

    #[test]
    fn calendar_clicks_parse_in_order() {
        let clicks = clicks_from_args(Some("2025-11-13"), Some("2025-11-10")).unwrap();
        assert_eq!(
            clicks,
            vec![parse_date("2025-11-13").unwrap(), parse_date("2025-11-10").unwrap()]
        );
        assert!(clicks_from_args(None, None).unwrap().is_empty());
        assert!(clicks_from_args(Some("13/11/2025"), None).is_err());
    }
}
