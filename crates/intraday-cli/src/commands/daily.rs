use intraday_core::{IntradayService, Symbol};

use crate::cli::DailyArgs;
use crate::error::CliError;

use super::Report;

pub async fn run(args: &DailyArgs, service: &IntradayService) -> Result<Report, CliError> {
    let symbol = Symbol::parse(&args.symbol)?;
    let aggregates = service.daily(&symbol).await?;
    Ok(Report::Daily(aggregates))
}
