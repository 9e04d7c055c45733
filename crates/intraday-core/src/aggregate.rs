//! Daily aggregation of intraday bars.

use std::collections::BTreeMap;

use time::{Date, Duration, OffsetDateTime};

use crate::{ConfigError, DailyAggregate, RawBar};

pub const DEFAULT_LOOKBACK_DAYS: u16 = 30;

const AVERAGE_SCALE: f64 = 10_000.0;

/// Groups bars into per-day aggregates over a trailing window of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyAggregator {
    lookback_days: u16,
}

impl Default for DailyAggregator {
    fn default() -> Self {
        Self {
            lookback_days: DEFAULT_LOOKBACK_DAYS,
        }
    }
}

impl DailyAggregator {
    pub fn with_lookback_days(lookback_days: u16) -> Result<Self, ConfigError> {
        if lookback_days == 0 {
            return Err(ConfigError::ZeroLookback);
        }
        Ok(Self { lookback_days })
    }

    pub const fn lookback_days(&self) -> u16 {
        self.lookback_days
    }

    /// Earliest day kept when aggregating at `now`.
    pub fn cutoff(&self, now: OffsetDateTime) -> Date {
        let today = now.date();
        today
            .checked_sub(Duration::days(i64::from(self.lookback_days)))
            .unwrap_or(Date::MIN)
    }

    /// Aggregate `bars` into one entry per day, most recent day first.
    ///
    /// Bars dated before [`cutoff`](Self::cutoff) are ignored; bars after `now`
    /// are kept. Input order does not matter.
    pub fn aggregate(&self, bars: &[RawBar], now: OffsetDateTime) -> Vec<DailyAggregate> {
        let cutoff = self.cutoff(now);
        let mut days: BTreeMap<Date, DayAccumulator> = BTreeMap::new();

        for bar in bars.iter().filter(|bar| bar.day() >= cutoff) {
            days.entry(bar.day()).or_default().push(bar);
        }

        days.into_iter()
            .rev()
            .map(|(day, acc)| acc.finish(day))
            .collect()
    }
}

/// [`DailyAggregator::aggregate`] with the default 30-day window.
pub fn aggregate(bars: &[RawBar], now: OffsetDateTime) -> Vec<DailyAggregate> {
    DailyAggregator::default().aggregate(bars, now)
}

#[derive(Debug, Default)]
struct DayAccumulator {
    count: u64,
    low_sum: f64,
    high_sum: f64,
    volume: u64,
}

impl DayAccumulator {
    fn push(&mut self, bar: &RawBar) {
        self.count += 1;
        self.low_sum += bar.low;
        self.high_sum += bar.high;
        self.volume += bar.volume;
    }

    fn finish(self, day: Date) -> DailyAggregate {
        let count = self.count as f64;
        DailyAggregate {
            day,
            low_average: round4(self.low_sum / count),
            high_average: round4(self.high_sum / count),
            volume: self.volume,
        }
    }
}

// Half away from zero.
fn round4(value: f64) -> f64 {
    (value * AVERAGE_SCALE).round() / AVERAGE_SCALE
}
