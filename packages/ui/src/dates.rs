//! Dates as shown on pages and read from `<input type="date">`.

use chrono::{DateTime, NaiveDate, Utc};

const INPUT_FORMAT: &str = "%Y-%m-%d";

/// `YYYY-MM-DD`, or a dash when there is no date.
pub fn format_date(date: Option<DateTime<Utc>>) -> String {
    match date {
        Some(date) => date.format(INPUT_FORMAT).to_string(),
        None => "-".to_string(),
    }
}

/// Midnight UTC of the entered day. Blank input means "no date".
pub fn parse_date_input(value: &str) -> Result<Option<DateTime<Utc>>, String> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    let day = NaiveDate::parse_from_str(value, INPUT_FORMAT)
        .map_err(|_| format!("Invalid date: {value}"))?;
    Ok(day.and_hms_opt(0, 0, 0).map(|time| time.and_utc()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(DateTime::from_timestamp(1_700_000_000, 0)), "2023-11-14");
        assert_eq!(format_date(None), "-");
    }

    #[test]
    fn test_parse_date_input() {
        let date = parse_date_input("2024-03-01").unwrap().unwrap();
        assert_eq!(date.timestamp(), 1_709_251_200);
        assert_eq!(parse_date_input("  ").unwrap(), None);
        assert!(parse_date_input("03/01/2024").is_err());
    }
}
