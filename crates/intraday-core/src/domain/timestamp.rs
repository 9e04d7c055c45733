//! Provider-local timestamps.
//!
//! Alpha Vantage keys intraday series by exchange-local wall-clock strings with
//! no offset (`2024-01-02 09:30:00`). They are kept naive: grouping uses the
//! date exactly as the provider wrote it.

use serde::de::Error as DeError;
use serde::ser::Error as SerError;
use serde::{Deserialize, Deserializer, Serializer};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, PrimitiveDateTime};

const SPACE_SECONDS: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
const SPACE_MINUTES: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]");
const T_SECONDS: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");
const T_MINUTES: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]");
const DATE_ONLY: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Parse a series key into a naive timestamp.
///
/// Returns `None` for anything that is not one of the accepted layouts; such
/// entries are dropped by the caller rather than failing the fetch.
pub fn parse_provider_timestamp(input: &str) -> Option<PrimitiveDateTime> {
    let input = input.trim();
    [SPACE_SECONDS, SPACE_MINUTES, T_SECONDS, T_MINUTES]
        .into_iter()
        .find_map(|format| PrimitiveDateTime::parse(input, format).ok())
        .or_else(|| {
            Date::parse(input, DATE_ONLY)
                .ok()
                .map(Date::midnight)
        })
}

/// `YYYY-MM-DD` rendering used for aggregate days.
pub fn format_day(date: Date) -> Result<String, time::error::Format> {
    date.format(DATE_ONLY)
}

/// `YYYY-MM-DD HH:MM:SS`, the layout the provider keys its series by.
pub fn format_timestamp(value: PrimitiveDateTime) -> Result<String, time::error::Format> {
    value.format(SPACE_SECONDS)
}

pub(crate) fn serialize<S>(value: &PrimitiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let rendered = format_timestamp(*value).map_err(<S::Error as SerError>::custom)?;
    serializer.serialize_str(&rendered)
}

pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<PrimitiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    parse_provider_timestamp(&value)
        .ok_or_else(|| D::Error::custom(format!("unrecognized timestamp '{value}'")))
}

/// Serde adapter for `YYYY-MM-DD` days.
pub(crate) mod day {
    use serde::de::Error as DeError;
    use serde::ser::Error as SerError;
    use serde::{Deserialize, Deserializer, Serializer};
    use time::Date;

    use super::{format_day, DATE_ONLY};

    pub(crate) fn serialize<S>(value: &Date, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let rendered = format_day(*value).map_err(<S::Error as SerError>::custom)?;
        serializer.serialize_str(&rendered)
    }

    pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<Date, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Date::parse(value.trim(), DATE_ONLY)
            .map_err(|error| D::Error::custom(format!("invalid day '{value}': {error}")))
    }
}

#[cfg(test)]
mod tests {
    use time::macros::{date, datetime};

    use super::*;

    #[test]
    fn parses_alphavantage_layout() {
        assert_eq!(
            parse_provider_timestamp("2024-01-02 09:45:00"),
            Some(datetime!(2024-01-02 09:45:00))
        );
    }

    #[test]
    fn parses_iso_and_short_layouts() {
        assert_eq!(
            parse_provider_timestamp("2024-01-02T16:00"),
            Some(datetime!(2024-01-02 16:00))
        );
        assert_eq!(
            parse_provider_timestamp("2024-01-02"),
            Some(datetime!(2024-01-02 00:00))
        );
    }

    #[test]
    fn unparseable_keys_yield_none() {
        assert_eq!(parse_provider_timestamp("Meta Data"), None);
        assert_eq!(parse_provider_timestamp("2024-13-02 09:30:00"), None);
        assert_eq!(parse_provider_timestamp(""), None);
    }

    #[test]
    fn day_is_zero_padded() {
        assert_eq!(
            format_day(date!(2024-03-07)).expect("formats"),
            "2024-03-07"
        );
    }

    #[test]
    fn timestamp_renders_in_provider_layout() {
        let rendered = format_timestamp(datetime!(2024-01-02 09:05)).expect("formats");
        assert_eq!(rendered, "2024-01-02 09:05:00");
        assert_eq!(
            parse_provider_timestamp(&rendered),
            Some(datetime!(2024-01-02 09:05))
        );
    }
}
