//! # Domain Model
//!
//! A [`Record`] is one measurement: the two inputs, the derived BMI and the category label
//! computed when it was taken. Records are created once and never mutated; the only ways
//! out are a per-record delete or clearing the whole collection.
//!
//! ## Persisted Shape
//!
//! The collection is stored as a JSON array of objects:
//!
//! ```text
//! [
//!   {
//!     "id": "1718000000000",
//!     "date": "2024-06-10T06:13:20Z",
//!     "weightKg": 70.0,
//!     "heightCm": 175.0,
//!     "bmi": 22.857142857142858,
//!     "category": "Normal"
//!   }
//! ]
//! ```
//!
//! ## Dates
//!
//! The canonical `date` is a full RFC 3339 UTC timestamp. Older data may carry a bare
//! calendar date (`2024-06-10`); those are read as midnight UTC of that day and written
//! back in the canonical form the next time the collection is saved.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl Category {
    /// Position of the band, lowest BMI first.
    pub(crate) fn band(self) -> usize {
        match self {
            Category::Underweight => 0,
            Category::Normal => 1,
            Category::Overweight => 2,
            Category::Obese => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::Underweight => "underweight",
            Category::Normal => "normal",
            Category::Overweight => "overweight",
            Category::Obese => "obese",
        }
    }

    /// Styling hook handed to the presentation layer.
    pub fn style_tag(self) -> &'static str {
        match self {
            Category::Underweight => "status-underweight",
            Category::Normal => "status-normal",
            Category::Overweight => "status-overweight",
            Category::Obese => "status-obese",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: String,
    #[serde(deserialize_with = "deserialize_date")]
    pub date: DateTime<Utc>,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub bmi: f64,
    pub category: String,
}

impl Record {
    pub fn new(
        id: String,
        date: DateTime<Utc>,
        weight_kg: f64,
        height_cm: f64,
        bmi: f64,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id,
            date,
            weight_kg,
            height_cm,
            bmi,
            category: category.into(),
        }
    }

    /// Band recomputed from the stored BMI, used for styling only.
    pub fn band(&self) -> Category {
        crate::engine::categorize(self.bmi)
    }
}

// Accepts both RFC 3339 timestamps and legacy `YYYY-MM-DD` dates.
fn deserialize_date<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_date(&raw).map_err(serde::de::Error::custom)
}

pub fn parse_date(raw: &str) -> Result<DateTime<Utc>, String> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(ts.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| format!("invalid record date '{}'", raw))
}

/// The two orderings handed to the presentation layer after every action.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct History {
    /// Newest first, for the table.
    pub table: Vec<Record>,
    /// Oldest first, for the chart.
    pub chart: Vec<Record>,
}

impl History {
    pub fn from_records(records: Vec<Record>) -> Self {
        let mut table = records.clone();
        table.sort_by(|a, b| b.date.cmp(&a.date));

        let mut chart = records;
        chart.sort_by(|a, b| a.date.cmp(&b.date));

        Self { table, chart }
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn record(id: &str, date: DateTime<Utc>) -> Record {
        Record::new(id.to_string(), date, 70.0, 175.0, 22.86, "Normal")
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let date = Utc.with_ymd_and_hms(2024, 6, 10, 6, 13, 20).unwrap();
        let json = serde_json::to_value(record("1", date)).unwrap();
        assert_eq!(json["weightKg"], 70.0);
        assert_eq!(json["heightCm"], 175.0);
        assert_eq!(json["date"], "2024-06-10T06:13:20Z");
        assert!(json.get("weight_kg").is_none());
    }

    #[test]
    fn legacy_plain_date_reads_as_midnight_utc() {
        let json = r#"{"id":"1","date":"2024-06-10","weightKg":70,"heightCm":175,"bmi":22.86,"category":"ปกติ"}"#;
        let rec: Record = serde_json::from_str(json).unwrap();
        assert_eq!(rec.date, Utc.with_ymd_and_hms(2024, 6, 10, 0, 0, 0).unwrap());
        assert_eq!(rec.category, "ปกติ");
    }

    #[test]
    fn javascript_iso_timestamp_is_accepted() {
        let parsed = parse_date("2024-06-10T06:13:20.123Z").unwrap();
        assert_eq!(parsed.timestamp_millis(), 1_718_000_000_123);
    }

    #[test]
    fn garbage_date_is_rejected() {
        let json = r#"{"id":"1","date":"yesterday","weightKg":70,"heightCm":175,"bmi":22.86,"category":"Normal"}"#;
        assert!(serde_json::from_str::<Record>(json).is_err());
    }

    #[test]
    fn history_sorts_table_descending_and_chart_ascending() {
        let d1 = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let d2 = Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap();
        let d3 = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        let history =
            History::from_records(vec![record("b", d2), record("c", d3), record("a", d1)]);

        let table: Vec<&str> = history.table.iter().map(|r| r.id.as_str()).collect();
        let chart: Vec<&str> = history.chart.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(table, vec!["c", "b", "a"]);
        assert_eq!(chart, vec!["a", "b", "c"]);
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn band_is_recomputed_from_bmi_not_label() {
        let mut rec = record("1", Utc::now());
        rec.bmi = 31.0;
        rec.category = "Normal".into();
        assert_eq!(rec.band(), Category::Obese);
    }
}
