//! CLI argument definitions.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `daily` | Daily averages and volume over the trailing window |
//! | `bars` | Raw 15-minute bars, newest first |
//!
//! # Examples
//!
//! ```bash
//! intraday daily IBM --pretty
//! intraday daily MSFT --lookback-days 10 --format table
//! intraday bars IBM --limit 20
//! ```

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Daily summaries of Alpha Vantage 15-minute bars.
#[derive(Debug, Parser)]
#[command(name = "intraday", author, version, about)]
pub struct Cli {
    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Alpha Vantage API key (defaults to $ALPHAVANTAGE_API_KEY, then `demo`).
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// Provider query endpoint (defaults to $ALPHAVANTAGE_BASE_URL).
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Provider request timeout in milliseconds.
    #[arg(long, global = true)]
    pub timeout_ms: Option<u64>,

    /// Log debug detail to stderr.
    #[arg(long, short, global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// JSON array.
    Json,
    /// Aligned columns for terminal display.
    Table,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Average low/high and total volume per day, most recent day first.
    Daily(DailyArgs),

    /// Raw 15-minute bars as returned by the provider, newest first.
    Bars(BarsArgs),
}

#[derive(Debug, Args)]
pub struct DailyArgs {
    /// Market symbol (e.g. IBM, MSFT, SHOP.TRT).
    pub symbol: String,

    /// Number of calendar days before today to keep.
    #[arg(long, default_value_t = intraday_core::DEFAULT_LOOKBACK_DAYS)]
    pub lookback_days: u16,
}

#[derive(Debug, Args)]
pub struct BarsArgs {
    /// Market symbol.
    pub symbol: String,

    /// Maximum number of bars to print.
    #[arg(long)]
    pub limit: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_daily_with_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["intraday", "daily", "ibm", "--pretty", "--format", "table"])
            .expect("valid args");
        assert!(cli.pretty);
        assert_eq!(cli.format, OutputFormat::Table);
        match cli.command {
            Command::Daily(args) => {
                assert_eq!(args.symbol, "ibm");
                assert_eq!(args.lookback_days, 30);
            }
            Command::Bars(_) => panic!("expected daily"),
        }
    }

    #[test]
    fn bars_limit_is_optional() {
        let cli = Cli::try_parse_from(["intraday", "bars", "IBM"]).expect("valid args");
        assert!(matches!(cli.command, Command::Bars(BarsArgs { limit: None, .. })));
    }
}
