use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};
use std::io::Read;

use crate::scoring::RatingCategory;

/// One parsed CSV row. `row` is 1-based and excludes the header line.
#[derive(Debug)]
pub(crate) struct RatingRecord {
    pub(crate) row: usize,
    pub(crate) submitted_at: Option<String>,
    pub(crate) overall: f64,
    pub(crate) categories: Vec<(RatingCategory, f64)>,
}

pub(crate) fn parse_records<R: Read>(reader: R) -> Result<Vec<RatingRecord>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for (index, record) in csv_reader.deserialize::<RatingRow>().enumerate() {
        let row = record?;
        let categories = row.categories();

        records.push(RatingRecord {
            row: index + 1,
            submitted_at: row.submitted_at,
            overall: row.overall,
            categories,
        });
    }

    Ok(records)
}

#[derive(Debug, Deserialize)]
struct RatingRow {
    #[serde(
        rename = "Submitted At",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    submitted_at: Option<String>,
    #[serde(rename = "Overall")]
    overall: f64,
    #[serde(rename = "Timeliness", default)]
    timeliness: Option<f64>,
    #[serde(rename = "Communication", default)]
    communication: Option<f64>,
    #[serde(rename = "Professionalism", default)]
    professionalism: Option<f64>,
    #[serde(rename = "Quality", default)]
    quality: Option<f64>,
}

impl RatingRow {
    fn categories(&self) -> Vec<(RatingCategory, f64)> {
        [
            (RatingCategory::Timeliness, self.timeliness),
            (RatingCategory::Communication, self.communication),
            (RatingCategory::Professionalism, self.professionalism),
            (RatingCategory::Quality, self.quality),
        ]
        .into_iter()
        .filter_map(|(category, value)| value.map(|value| (category, value)))
        .collect()
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

pub(crate) fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.naive_utc());
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }

    None
}
