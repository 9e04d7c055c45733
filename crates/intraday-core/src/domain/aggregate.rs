use serde::{Deserialize, Serialize};
use time::Date;

/// Summary of one trading day, as served to the chart client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyAggregate {
    /// Serialized as `YYYY-MM-DD`.
    #[serde(with = "crate::domain::timestamp::day")]
    pub day: Date,
    pub low_average: f64,
    pub high_average: f64,
    pub volume: u64,
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::*;

    #[test]
    fn uses_client_field_names() {
        let aggregate = DailyAggregate {
            day: date!(2024-01-02),
            low_average: 18.0,
            high_average: 20.5,
            volume: 50,
        };
        let json = serde_json::to_value(&aggregate).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({
                "day": "2024-01-02",
                "lowAverage": 18.0,
                "highAverage": 20.5,
                "volume": 50
            })
        );
    }
}
