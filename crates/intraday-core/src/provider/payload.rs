//! Alpha Vantage `TIME_SERIES_INTRADAY` payload handling.
//!
//! The provider mixes advisory and error keys into the same top-level object
//! as the data, so a payload is first classified into a [`Payload`] and only a
//! [`Payload::Series`] is parsed further.

use serde_json::{Map, Value};

use crate::domain::parse_provider_timestamp;
use crate::{ProviderError, RawBar};

pub const SERIES_KEY: &str = "Time Series (15min)";
pub const HIGH_FIELD: &str = "2. high";
pub const LOW_FIELD: &str = "3. low";
pub const VOLUME_FIELD: &str = "5. volume";

const ADVISORY_KEYS: [&str; 2] = ["Note", "Information"];
const ERROR_KEY: &str = "Error Message";

/// Top-level shape of a provider response.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Series(Map<String, Value>),
    Throttled(String),
    Rejected(String),
    SchemaMismatch(String),
}

impl Payload {
    /// Classify a response body. Advisory beats error beats missing series.
    pub fn classify(body: &str) -> Self {
        let root = match serde_json::from_str::<Value>(body) {
            Ok(Value::Object(root)) => root,
            Ok(other) => {
                return Self::SchemaMismatch(format!(
                    "expected a JSON object, got {}",
                    json_kind(&other)
                ))
            }
            Err(error) => return Self::SchemaMismatch(format!("body is not JSON: {error}")),
        };
        Self::classify_object(root)
    }

    fn classify_object(mut root: Map<String, Value>) -> Self {
        if let Some(note) = ADVISORY_KEYS.iter().find_map(|key| root.get(*key)) {
            return Self::Throttled(text_of(note));
        }
        if let Some(error) = root.get(ERROR_KEY) {
            return Self::Rejected(text_of(error));
        }
        match root.remove(SERIES_KEY) {
            Some(Value::Object(series)) => Self::Series(series),
            Some(other) => Self::SchemaMismatch(format!(
                "'{SERIES_KEY}' is {}, expected an object",
                json_kind(&other)
            )),
            None => Self::SchemaMismatch(format!("'{SERIES_KEY}' not found")),
        }
    }

    /// Collapse into the series map or the matching [`ProviderError`].
    pub fn into_series(self) -> Result<Map<String, Value>, ProviderError> {
        match self {
            Self::Series(series) => Ok(series),
            Self::Throttled(message) => Err(ProviderError::Throttled { message }),
            Self::Rejected(message) => Err(ProviderError::Rejected { message }),
            Self::SchemaMismatch(detail) => Err(ProviderError::SchemaMismatch { detail }),
        }
    }
}

/// Bars parsed from a series plus the number of keys that were not timestamps.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParsedSeries {
    pub bars: Vec<RawBar>,
    pub skipped: usize,
}

/// Parse every entry of a series map.
///
/// Entries whose key is not a timestamp are skipped. Entries with a valid key
/// but malformed fields fail the whole series.
pub fn parse_series(series: &Map<String, Value>) -> Result<ParsedSeries, ProviderError> {
    let mut parsed = ParsedSeries {
        bars: Vec::with_capacity(series.len()),
        skipped: 0,
    };

    for (key, entry) in series {
        let Some(timestamp) = parse_provider_timestamp(key) else {
            tracing::debug!(key = %key, "skipping series entry with unparseable timestamp");
            parsed.skipped += 1;
            continue;
        };

        let fields = entry
            .as_object()
            .ok_or_else(|| ProviderError::schema(format!("entry '{key}' is not an object")))?;

        let high = decimal_field(fields, HIGH_FIELD, key)?;
        let low = decimal_field(fields, LOW_FIELD, key)?;
        let volume = string_field(fields, VOLUME_FIELD, key)?
            .trim()
            .parse::<u64>()
            .map_err(|_| {
                ProviderError::schema(format!("entry '{key}': '{VOLUME_FIELD}' is not a count"))
            })?;

        parsed.bars.push(RawBar::new(timestamp, high, low, volume));
    }

    Ok(parsed)
}

fn string_field<'a>(
    fields: &'a Map<String, Value>,
    name: &str,
    key: &str,
) -> Result<&'a str, ProviderError> {
    match fields.get(name) {
        Some(Value::String(raw)) => Ok(raw.as_str()),
        Some(_) => Err(ProviderError::schema(format!(
            "entry '{key}': '{name}' is not a string"
        ))),
        None => Err(ProviderError::schema(format!(
            "entry '{key}': '{name}' missing"
        ))),
    }
}

// `str::parse` always uses '.' as the decimal separator, whatever the host locale.
fn decimal_field(fields: &Map<String, Value>, name: &str, key: &str) -> Result<f64, ProviderError> {
    let raw = string_field(fields, name, key)?;
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ProviderError::schema(format!(
            "entry '{key}': '{name}' is not a decimal: '{raw}'"
        ))),
    }
}

fn text_of(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
