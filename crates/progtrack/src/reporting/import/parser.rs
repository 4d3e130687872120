use crate::reporting::ratings::RatingRecord;
use serde::{Deserialize, Deserializer};
use std::io::Read;

pub(crate) fn parse_records<R: Read>(reader: R) -> Result<Vec<RatingRecord>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for record in csv_reader.deserialize::<StatusRow>() {
        let row = record?;
        if row.program.is_none() {
            continue;
        }

        records.push(RatingRecord {
            raw_status: row.status,
            is_draft: row.draft.as_deref().map(parse_flag).unwrap_or(false),
            completion_percentage: row
                .completion
                .as_deref()
                .and_then(parse_percent)
                .unwrap_or(0.0),
        });
    }

    Ok(records)
}

#[derive(Debug, Deserialize)]
struct StatusRow {
    #[serde(rename = "Program", default, deserialize_with = "empty_string_as_none")]
    program: Option<String>,
    #[serde(rename = "Status", default, deserialize_with = "empty_string_as_none")]
    status: Option<String>,
    #[serde(rename = "Draft", default, deserialize_with = "empty_string_as_none")]
    draft: Option<String>,
    #[serde(
        rename = "Completion %",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    completion: Option<String>,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "y" | "draft"
    )
}

fn parse_percent(value: &str) -> Option<f64> {
    let trimmed = value.trim().trim_end_matches('%').trim();
    if trimmed.is_empty() {
        return None;
    }

    trimmed
        .parse::<f64>()
        .ok()
        .map(|pct| pct.clamp(0.0, 100.0))
}

#[cfg(test)]
pub(crate) fn parse_percent_for_tests(value: &str) -> Option<f64> {
    parse_percent(value)
}

#[cfg(test)]
pub(crate) fn parse_flag_for_tests(value: &str) -> bool {
    parse_flag(value)
}
