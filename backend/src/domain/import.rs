//! CSV import: turns raw delimited text into a validated batch of
//! transactions, or fails with a row-accurate error. The importer never
//! touches the store itself; the caller commits the batch only when the
//! whole file parsed cleanly.

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use shared::{Mood, TimeOfDay, Transaction};
use std::collections::BTreeMap;
use thiserror::Error;
use uuid::Uuid;

/// Headers that must be present (order-insensitive, case-insensitive).
const REQUIRED_HEADERS: [&str; 4] = ["date", "category", "amount", "mood"];

/// Recommendation attached to records that arrive without one.
const IMPORTED_RECOMMENDATION: &str = "Imported from CSV.";

/// Import failure. The Display strings are surfaced to the user
/// verbatim, so they name rows (1-indexed, header-inclusive) and the
/// offending values.
#[derive(Debug, Error, PartialEq)]
pub enum ImportError {
    #[error("CSV file is empty.")]
    Empty,
    #[error("CSV file is missing required columns: {}.", .0.join(", "))]
    MissingHeaders(Vec<String>),
    #[error("Invalid mood \"{value}\" on row {row}. Mood must be one of: happy, sad, neutral, stressed, anxious, tired.")]
    InvalidMood { row: usize, value: String },
    #[error("Invalid date \"{value}\" on row {row}. Dates must be MM/DD/YYYY.")]
    InvalidDate { row: usize, value: String },
    #[error("Invalid amount \"{value}\" on row {row}. Amounts must be non-negative numbers.")]
    InvalidAmount { row: usize, value: String },
}

/// Parse raw CSV text into a batch of transactions.
///
/// All-or-nothing: the first bad row fails the whole batch and nothing
/// is returned. Each imported record gets a fresh UUID, distinct from
/// every id already in use.
pub fn parse_transactions(csv_text: &str) -> Result<Vec<Transaction>, ImportError> {
    // Blank lines are skipped before parsing; row numbers count the
    // remaining lines, header included, starting at 1.
    let lines: Vec<&str> = csv_text.lines().filter(|l| !l.trim().is_empty()).collect();
    if lines.is_empty() {
        return Err(ImportError::Empty);
    }

    // Plain comma splitting, no quoted-field escaping: quoting is
    // disabled so a quote character is just another byte in the field.
    let joined = lines.join("\n");
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .quoting(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(joined.as_bytes());

    let mut records = reader.records();

    let headers: Vec<String> = match records.next() {
        Some(Ok(header_record)) => header_record
            .iter()
            .map(|h| h.trim().to_lowercase())
            .collect(),
        _ => return Err(ImportError::Empty),
    };

    let missing: Vec<String> = REQUIRED_HEADERS
        .iter()
        .filter(|required| !headers.iter().any(|h| h == *required))
        .map(|required| required.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(ImportError::MissingHeaders(missing));
    }

    let mut transactions = Vec::new();

    for (index, record) in records.enumerate() {
        let row = index + 2; // 1-indexed, header is row 1
        let record = match record {
            Ok(record) => record,
            // quoting and length checks are off, so the csv reader only
            // fails on I/O, which cannot happen on an in-memory buffer
            Err(_) => continue,
        };

        // Explicit header-name -> raw-value mapping, built positionally.
        let fields: BTreeMap<&str, &str> = headers
            .iter()
            .map(String::as_str)
            .zip(record.iter())
            .collect();

        transactions.push(parse_row(&fields, row)?);
    }

    Ok(transactions)
}

/// Validate and convert one header-mapped row into a typed transaction.
fn parse_row(fields: &BTreeMap<&str, &str>, row: usize) -> Result<Transaction, ImportError> {
    let raw_mood = fields.get("mood").copied().unwrap_or_default();
    let mood: Mood = raw_mood.parse().map_err(|_| ImportError::InvalidMood {
        row,
        value: raw_mood.to_string(),
    })?;

    let raw_date = fields.get("date").copied().unwrap_or_default();
    let (date, hour) = parse_date(raw_date).ok_or_else(|| ImportError::InvalidDate {
        row,
        value: raw_date.to_string(),
    })?;

    let raw_amount = fields.get("amount").copied().unwrap_or_default();
    let amount: f64 = raw_amount.parse().map_err(|_| ImportError::InvalidAmount {
        row,
        value: raw_amount.to_string(),
    })?;
    if !amount.is_finite() || amount < 0.0 {
        return Err(ImportError::InvalidAmount {
            row,
            value: raw_amount.to_string(),
        });
    }

    let recommendation = fields
        .get("recommendation")
        .filter(|value| !value.is_empty())
        .map(|value| value.to_string())
        .unwrap_or_else(|| IMPORTED_RECOMMENDATION.to_string());

    Ok(Transaction {
        id: Uuid::new_v4().to_string(),
        date,
        time_of_day: TimeOfDay::from_hour(hour),
        mood,
        category: fields.get("category").copied().unwrap_or_default().to_string(),
        amount,
        recommendation,
    })
}

/// Parse `MM/DD/YYYY` with an optional time component. Returns the
/// normalized date string and the hour used for time-of-day bucketing
/// (midnight when no time is given).
fn parse_date(raw: &str) -> Option<(String, u32)> {
    for format in ["%m/%d/%Y %H:%M:%S", "%m/%d/%Y %H:%M"] {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(raw, format) {
            return Some((datetime.format("%m/%d/%Y").to_string(), datetime.hour()));
        }
    }
    let date = NaiveDate::parse_from_str(raw, "%m/%d/%Y").ok()?;
    Some((date.format("%m/%d/%Y").to_string(), 0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn imports_the_sample_file() {
        let csv = "date,category,amount,mood\n\
                   01/01/2025,Coffee,100,happy\n\
                   01/02/2025,Food,200,sad\n";
        let batch = parse_transactions(csv).unwrap();
        assert_eq!(batch.len(), 2);
        assert_eq!(batch[0].category, "Coffee");
        assert_eq!(batch[0].mood, Mood::Happy);
        assert_eq!(batch[0].amount, 100.0);
        assert_eq!(batch[1].mood, Mood::Sad);
        assert_ne!(batch[0].id, batch[1].id);
    }

    #[test]
    fn headers_are_order_and_case_insensitive() {
        let csv = "Mood , AMOUNT,category,Date\n\
                   happy,50,Snacks,03/15/2025\n";
        let batch = parse_transactions(csv).unwrap();
        assert_eq!(batch[0].mood, Mood::Happy);
        assert_eq!(batch[0].amount, 50.0);
        assert_eq!(batch[0].date, "03/15/2025");
    }

    #[test]
    fn missing_headers_name_the_missing_fields() {
        let csv = "date,category\n01/01/2025,Coffee\n";
        let err = parse_transactions(csv).unwrap_err();
        assert_eq!(
            err,
            ImportError::MissingHeaders(vec!["amount".to_string(), "mood".to_string()])
        );
    }

    #[test]
    fn invalid_mood_names_row_and_value() {
        let csv = "date,category,amount,mood\n\
                   01/01/2025,Coffee,100,happy\n\
                   01/02/2025,Food,200,furious\n";
        let err = parse_transactions(csv).unwrap_err();
        assert_eq!(
            err,
            ImportError::InvalidMood {
                row: 3,
                value: "furious".to_string()
            }
        );
    }

    #[test]
    fn mood_is_normalized_on_import() {
        let csv = "date,category,amount,mood\n01/01/2025,Coffee,100,HAPPY \n";
        let batch = parse_transactions(csv).unwrap();
        assert_eq!(batch[0].mood, Mood::Happy);
    }

    #[test]
    fn non_numeric_amount_fails_with_row() {
        let csv = "date,category,amount,mood\n01/01/2025,Coffee,lots,happy\n";
        let err = parse_transactions(csv).unwrap_err();
        assert_eq!(
            err,
            ImportError::InvalidAmount {
                row: 2,
                value: "lots".to_string()
            }
        );
    }

    #[test]
    fn negative_amount_is_rejected() {
        let csv = "date,category,amount,mood\n01/01/2025,Refund,-5,happy\n";
        assert!(matches!(
            parse_transactions(csv).unwrap_err(),
            ImportError::InvalidAmount { row: 2, .. }
        ));
    }

    #[test]
    fn unparseable_date_fails_with_row() {
        let csv = "date,category,amount,mood\n2025-01-01,Coffee,100,happy\n";
        assert_eq!(
            parse_transactions(csv).unwrap_err(),
            ImportError::InvalidDate {
                row: 2,
                value: "2025-01-01".to_string()
            }
        );
    }

    #[test]
    fn time_of_day_comes_from_the_parsed_hour() {
        let csv = "date,category,amount,mood\n\
                   01/01/2025 09:30,Coffee,100,happy\n\
                   01/01/2025 14:00,Lunch,200,neutral\n\
                   01/01/2025 19:45,Dinner,300,tired\n\
                   01/02/2025,Groceries,400,sad\n";
        let batch = parse_transactions(csv).unwrap();
        assert_eq!(batch[0].time_of_day, TimeOfDay::Morning);
        assert_eq!(batch[1].time_of_day, TimeOfDay::Afternoon);
        assert_eq!(batch[2].time_of_day, TimeOfDay::Evening);
        // no time component parses as midnight
        assert_eq!(batch[3].time_of_day, TimeOfDay::Morning);
    }

    #[test]
    fn blank_lines_are_skipped() {
        let csv = "\ndate,category,amount,mood\n\n01/01/2025,Coffee,100,happy\n\n";
        let batch = parse_transactions(csv).unwrap();
        assert_eq!(batch.len(), 1);
    }

    #[test]
    fn recommendation_column_is_carried_through() {
        let csv = "date,category,amount,mood,recommendation\n\
                   01/01/2025,Coffee,100,happy,Cut back a little\n\
                   01/02/2025,Food,200,sad,\n";
        let batch = parse_transactions(csv).unwrap();
        assert_eq!(batch[0].recommendation, "Cut back a little");
        assert_eq!(batch[1].recommendation, IMPORTED_RECOMMENDATION);
    }

    #[test]
    fn empty_input_is_an_error() {
        assert_eq!(parse_transactions("").unwrap_err(), ImportError::Empty);
        assert_eq!(parse_transactions("\n\n").unwrap_err(), ImportError::Empty);
    }
}
