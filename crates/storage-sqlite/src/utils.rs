//! Decoding helpers for values stored as SQLite TEXT.

use burndown_core::constants::DATE_FORMAT;
use burndown_core::utils::parse_timestamp;
use chrono::{NaiveDate, NaiveDateTime};

use crate::errors::StorageError;

pub fn parse_date(column: &str, value: &str) -> Result<NaiveDate, StorageError> {
    // Tolerate full timestamps in date columns by taking the date part.
    let date_part = value.get(..10).unwrap_or(value);
    NaiveDate::parse_from_str(date_part, DATE_FORMAT)
        .map_err(|e| StorageError::invalid_value(column, format!("'{}': {}", value, e)))
}

pub fn parse_optional_date(
    column: &str,
    value: Option<&str>,
) -> Result<Option<NaiveDate>, StorageError> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(v) => parse_date(column, v).map(Some),
        None => Ok(None),
    }
}

pub fn parse_datetime(column: &str, value: &str) -> Result<NaiveDateTime, StorageError> {
    parse_timestamp(value)
        .map_err(|e| StorageError::invalid_value(column, format!("'{}': {}", value, e)))
}

/// Decodes a `json_group_array` column into sorted, distinct, non-null strings.
pub fn parse_json_list(column: &str, value: Option<&str>) -> Result<Vec<String>, StorageError> {
    let Some(raw) = value else {
        return Ok(Vec::new());
    };
    let items: Vec<Option<String>> = serde_json::from_str(raw)
        .map_err(|e| StorageError::invalid_value(column, e))?;
    let mut items: Vec<String> = items.into_iter().flatten().collect();
    items.sort();
    items.dedup();
    Ok(items)
}

/// Quoted SQL list of trusted constants, e.g. `'ENCUMBRANCE', 'DISENCUMBRANCE'`.
pub fn sql_string_list(values: &[&str]) -> String {
    values
        .iter()
        .map(|v| format!("'{}'", v.replace('\'', "''")))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_dates_and_timestamps() {
        let day = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
        assert_eq!(parse_date("day", "2024-07-01").unwrap(), day);
        assert_eq!(parse_date("day", "2024-07-01 00:00:00").unwrap(), day);
        assert!(parse_date("day", "07/01/2024").is_err());
        assert_eq!(parse_optional_date("day", Some("")).unwrap(), None);
        assert_eq!(
            parse_datetime("timestamp", "2024-07-01 06:30:00")
                .unwrap()
                .date(),
            day
        );
    }

    #[test]
    fn json_lists_drop_nulls_and_duplicates() {
        assert_eq!(
            parse_json_list("codes", Some(r#"["B", null, "A", "B"]"#)).unwrap(),
            vec!["A".to_string(), "B".to_string()]
        );
        assert!(parse_json_list("codes", None).unwrap().is_empty());
        assert!(parse_json_list("codes", Some("{")).is_err());
    }

    #[test]
    fn string_lists_are_quoted() {
        assert_eq!(
            sql_string_list(&["ENCUMBRANCE", "DISENCUMBRANCE"]),
            "'ENCUMBRANCE', 'DISENCUMBRANCE'"
        );
        assert_eq!(sql_string_list(&["O'BRIEN"]), "'O''BRIEN'");
    }
}
