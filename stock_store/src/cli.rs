//! Command dispatcher for the `market-data` binary.
//!
//! ```text
//! market-data bulk SYMBOL START_DATE END_DATE
//! market-data last SYMBOL
//! ```
//!
//! Every dispatcher outcome, including usage and invalid-argument messages,
//! is reported on the output sink and ends successfully. The config is only
//! loaded (and the store only opened) once a command has been accepted.

use std::io::Write;

use anyhow::Context;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use market_data_ingestor::providers::yahoo_chart::YahooChartProvider;

use crate::{config::AppConfig, db::connection::connect_sqlite, writer::BarWriter};

/// Printed when fewer than two arguments follow the program name.
pub const USAGE: &str = "Usage:
  market-data bulk SYMBOL START_DATE END_DATE
  market-data last SYMBOL";

/// Printed for any argument shape that is not a known command.
pub const INVALID_ARGUMENTS: &str =
    "Invalid arguments. Use 'bulk SYMBOL START END' or 'last SYMBOL'";

#[derive(Parser, Debug)]
#[command(
    name = "market-data",
    disable_help_flag = true,
    disable_version_flag = true,
    disable_help_subcommand = true
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Append bars for an explicit date range.
    Bulk {
        #[arg(allow_hyphen_values = true)]
        symbol: String,
        /// First day, YYYY-MM-DD.
        start: NaiveDate,
        /// End of the window (exclusive), YYYY-MM-DD.
        end: NaiveDate,
    },
    /// Append the most recently completed session.
    Last {
        #[arg(allow_hyphen_values = true)]
        symbol: String,
    },
}

/// What the process should do for a given argv.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// Too few arguments: print [`USAGE`].
    Usage,
    /// Unrecognised shape: print [`INVALID_ARGUMENTS`].
    Invalid,
    /// Run the range writer.
    Bulk {
        /// Ticker to fetch.
        symbol: String,
        /// Inclusive start.
        start: NaiveDate,
        /// Exclusive end.
        end: NaiveDate,
    },
    /// Run the last-session writer.
    Last {
        /// Ticker to fetch.
        symbol: String,
    },
}

/// Classifies `args` (program name first) without side effects.
pub fn dispatch(args: &[String]) -> Dispatch {
    if args.len() < 3 {
        return Dispatch::Usage;
    }
    match Cli::try_parse_from(args) {
        Ok(Cli {
            command: Command::Bulk { symbol, start, end },
        }) => Dispatch::Bulk { symbol, start, end },
        Ok(Cli {
            command: Command::Last { symbol },
        }) => Dispatch::Last { symbol },
        Err(_) => Dispatch::Invalid,
    }
}

/// Dispatches `args` and runs the selected writer.
///
/// `load_config` is called only for accepted commands. Errors are limited
/// to config, provider setup, store, and output failures.
pub async fn run<W, F>(args: &[String], load_config: F, mut out: W) -> anyhow::Result<()>
where
    W: Write,
    F: FnOnce() -> anyhow::Result<AppConfig>,
{
    let command = dispatch(args);
    match command {
        Dispatch::Usage => {
            writeln!(out, "{USAGE}")?;
            return Ok(());
        }
        Dispatch::Invalid => {
            writeln!(out, "{INVALID_ARGUMENTS}")?;
            return Ok(());
        }
        Dispatch::Bulk { .. } | Dispatch::Last { .. } => {}
    }

    let config = load_config()?;
    let provider = YahooChartProvider::with_settings(config.provider_settings())
        .context("build market data provider")?;
    let mut conn = connect_sqlite(&config.store.database_url)?;
    let mut writer = BarWriter::new(&provider, &mut conn, out);

    match command {
        Dispatch::Bulk { symbol, start, end } => {
            writer.write_range(&symbol, start, end).await?;
        }
        Dispatch::Last { symbol } => {
            writer.write_last_session(&symbol).await?;
        }
        Dispatch::Usage | Dispatch::Invalid => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(args: &[&str]) -> Vec<String> {
        std::iter::once("market-data")
            .chain(args.iter().copied())
            .map(String::from)
            .collect()
    }

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn fewer_than_two_arguments_is_usage() {
        assert_eq!(dispatch(&argv(&[])), Dispatch::Usage);
        assert_eq!(dispatch(&argv(&["bulk"])), Dispatch::Usage);
        assert_eq!(dispatch(&argv(&["last"])), Dispatch::Usage);
        assert_eq!(dispatch(&argv(&["anything"])), Dispatch::Usage);
    }

    #[test]
    fn bulk_needs_exactly_symbol_start_end() {
        assert_eq!(
            dispatch(&argv(&["bulk", "AAPL", "2023-01-03", "2023-01-10"])),
            Dispatch::Bulk {
                symbol: "AAPL".into(),
                start: date("2023-01-03"),
                end: date("2023-01-10"),
            }
        );
        assert_eq!(dispatch(&argv(&["bulk", "AAPL", "2023-01-03"])), Dispatch::Invalid);
        assert_eq!(
            dispatch(&argv(&["bulk", "AAPL", "2023-01-03", "2023-01-10", "extra"])),
            Dispatch::Invalid
        );
    }

    #[test]
    fn malformed_dates_are_invalid() {
        assert_eq!(
            dispatch(&argv(&["bulk", "AAPL", "01/03/2023", "2023-01-10"])),
            Dispatch::Invalid
        );
        assert_eq!(
            dispatch(&argv(&["bulk", "AAPL", "2023-02-30", "2023-03-01"])),
            Dispatch::Invalid
        );
    }

    #[test]
    fn last_needs_exactly_one_symbol() {
        assert_eq!(
            dispatch(&argv(&["last", "MSFT"])),
            Dispatch::Last {
                symbol: "MSFT".into()
            }
        );
        assert_eq!(dispatch(&argv(&["last", "MSFT", "AAPL"])), Dispatch::Invalid);
    }

    #[test]
    fn unknown_modes_and_flags_are_invalid() {
        assert_eq!(dispatch(&argv(&["fetch", "AAPL"])), Dispatch::Invalid);
        assert_eq!(
            dispatch(&argv(&["BULK", "AAPL", "2023-01-03", "2023-01-10"])),
            Dispatch::Invalid
        );
        assert_eq!(dispatch(&argv(&["--help", "bulk"])), Dispatch::Invalid);
    }

    #[tokio::test]
    async fn usage_and_invalid_paths_never_load_config() {
        for (args, expected) in [
            (argv(&["bulk"]), USAGE),
            (argv(&["last", "A", "B"]), INVALID_ARGUMENTS),
        ] {
            let mut out = Vec::new();
            run(&args, || panic!("config must not be loaded"), &mut out)
                .await
                .unwrap();
            assert_eq!(String::from_utf8(out).unwrap(), format!("{expected}\n"));
        }
    }

    #[test]
    fn usage_lists_both_commands() {
        let lines: Vec<_> = USAGE.lines().collect();
        assert_eq!(lines[0], "Usage:");
        assert_eq!(
            &lines[1..],
            [
                "  market-data bulk SYMBOL START_DATE END_DATE",
                "  market-data last SYMBOL"
            ]
        );
    }
}
