//! Slot time and date parsing
//!
//! The presentation layer submits the slot time as `HH:MM` (24-hour,
//! zero-padded) and the slot date as `YYYY-MM-DD`. Both parsers are strict:
//! anything that is not exactly the expected shape is rejected rather than
//! guessed at, so a malformed form value surfaces as a typed error instead of
//! a silently misclassified slot.

use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

/// Errors produced by slot time/date parsing
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SlotParseError {
    #[error("Malformed slot time {input:?}, expected HH:MM (24-hour)")]
    BadTime { input: String },

    #[error("Malformed slot date {input:?}, expected YYYY-MM-DD")]
    BadDate { input: String },
}

/// Parse a slot time in `HH:MM` 24-hour form
///
/// # Example
/// ```
/// use court_booking_core_rs::parse_slot_time;
///
/// let t = parse_slot_time("19:00").unwrap();
/// assert_eq!(t.to_string(), "19:00:00");
/// assert!(parse_slot_time("19:00:00").is_err());
/// assert!(parse_slot_time("25:00").is_err());
/// ```
pub fn parse_slot_time(input: &str) -> Result<NaiveTime, SlotParseError> {
    // Length check rejects un-padded ("9:00") and over-long ("19:00:00") forms
    // that chrono's format parser would otherwise tolerate or mis-report.
    if input.len() != 5 {
        return Err(SlotParseError::BadTime {
            input: input.to_string(),
        });
    }
    NaiveTime::parse_from_str(input, "%H:%M").map_err(|_| SlotParseError::BadTime {
        input: input.to_string(),
    })
}

/// Parse a slot date in `YYYY-MM-DD` form
///
/// # Example
/// ```
/// use court_booking_core_rs::parse_slot_date;
///
/// assert!(parse_slot_date("2026-08-06").is_ok());
/// assert!(parse_slot_date("06/08/2026").is_err());
/// ```
pub fn parse_slot_date(input: &str) -> Result<NaiveDate, SlotParseError> {
    if input.len() != 10 {
        return Err(SlotParseError::BadDate {
            input: input.to_string(),
        });
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|_| SlotParseError::BadDate {
        input: input.to_string(),
    })
}
