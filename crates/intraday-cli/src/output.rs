use std::io::Write;

use intraday_core::domain::{format_day, format_timestamp};

use crate::cli::OutputFormat;
use crate::commands::Report;
use crate::error::CliError;

pub fn render(
    report: &Report,
    format: OutputFormat,
    pretty: bool,
    out: &mut impl Write,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => {
            let payload = match (report, pretty) {
                (Report::Daily(rows), true) => serde_json::to_string_pretty(rows)?,
                (Report::Daily(rows), false) => serde_json::to_string(rows)?,
                (Report::Bars(rows), true) => serde_json::to_string_pretty(rows)?,
                (Report::Bars(rows), false) => serde_json::to_string(rows)?,
            };
            writeln!(out, "{payload}")?;
        }
        OutputFormat::Table => render_table(report, out)?,
    }

    Ok(())
}

fn render_table(report: &Report, out: &mut impl Write) -> Result<(), CliError> {
    match report {
        Report::Daily(rows) => {
            writeln!(
                out,
                "{:<10}  {:>12}  {:>12}  {:>14}",
                "day", "low_avg", "high_avg", "volume"
            )?;
            for row in rows {
                writeln!(
                    out,
                    "{:<10}  {:>12.4}  {:>12.4}  {:>14}",
                    format_day(row.day)?,
                    row.low_average,
                    row.high_average,
                    row.volume
                )?;
            }
        }
        Report::Bars(rows) => {
            writeln!(
                out,
                "{:<19}  {:>12}  {:>12}  {:>12}",
                "timestamp", "high", "low", "volume"
            )?;
            for bar in rows {
                writeln!(
                    out,
                    "{:<19}  {:>12.4}  {:>12.4}  {:>12}",
                    format_timestamp(bar.timestamp)?,
                    bar.high,
                    bar.low,
                    bar.volume
                )?;
            }
        }
    }

    if report.is_empty() {
        writeln!(out, "(no rows)")?;
    }
    Ok(())
}
