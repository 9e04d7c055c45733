use serde::{Deserialize, Serialize};
use time::{Date, PrimitiveDateTime};

/// One 15-minute observation as reported by the provider.
///
/// Values are taken as-is: `high >= low` is not checked and nothing is clamped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawBar {
    #[serde(with = "crate::domain::timestamp")]
    pub timestamp: PrimitiveDateTime,
    pub high: f64,
    pub low: f64,
    pub volume: u64,
}

impl RawBar {
    pub const fn new(timestamp: PrimitiveDateTime, high: f64, low: f64, volume: u64) -> Self {
        Self {
            timestamp,
            high,
            low,
            volume,
        }
    }

    /// Calendar day the bar belongs to, with no timezone conversion.
    pub const fn day(&self) -> Date {
        self.timestamp.date()
    }
}
