use intraday_core::{IntradayService, Symbol};

use crate::cli::BarsArgs;
use crate::error::CliError;

use super::Report;

pub async fn run(args: &BarsArgs, service: &IntradayService) -> Result<Report, CliError> {
    let symbol = Symbol::parse(&args.symbol)?;
    let mut bars = service.bars(&symbol).await?;
    if let Some(limit) = args.limit {
        bars.truncate(limit);
    }
    Ok(Report::Bars(bars))
}
