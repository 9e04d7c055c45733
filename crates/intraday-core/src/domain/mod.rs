//! # Domain Models
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Symbol`] | Validated ticker |
//! | [`RawBar`] | One provider-reported 15-minute bar |
//! | [`DailyAggregate`] | Per-day averages and volume |
//!
//! Timestamps are naive (`time::PrimitiveDateTime`): the provider reports
//! exchange-local wall-clock time and days are taken from it verbatim.

mod aggregate;
mod bar;
mod symbol;
pub(crate) mod timestamp;

pub use aggregate::DailyAggregate;
pub use bar::RawBar;
pub use symbol::Symbol;
pub use timestamp::{format_day, format_timestamp, parse_provider_timestamp};
