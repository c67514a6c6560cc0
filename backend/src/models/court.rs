//! Court reference data
//!
//! A court is immutable catalog data: the pricing engine looks it up by
//! identifier and never mutates it.
//!
//! CRITICAL: All money values are i64 (cents)

use serde::{Deserialize, Serialize};
use std::fmt;

/// Court type tag, used to select the peak surcharge policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CourtType {
    Indoor,
    Outdoor,
}

impl fmt::Display for CourtType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CourtType::Indoor => write!(f, "indoor"),
            CourtType::Outdoor => write!(f, "outdoor"),
        }
    }
}

/// A bookable court
///
/// # Example
/// ```
/// use court_booking_core_rs::{Court, CourtType};
///
/// let court = Court {
///     id: "court-1".to_string(),
///     name: "Court 1".to_string(),
///     kind: CourtType::Indoor,
///     base_rate: 2000, // $20.00 per hour
/// };
/// assert_eq!(court.base_rate, 2000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Court {
    /// Unique, stable court identifier
    pub id: String,

    /// Display name shown on the base-rate breakdown line
    pub name: String,

    /// Court type tag (indoor/outdoor)
    pub kind: CourtType,

    /// Base hourly rate (i64 cents)
    pub base_rate: i64,
}
