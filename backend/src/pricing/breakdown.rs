//! Itemized price result
//!
//! A price result is a total plus the ordered charge lines the total was
//! derived from. Line order is a documented contract: base rate first, then
//! the peak surcharge (when one applies), then equipment in selection order,
//! then the coach. UI rendering and tests both rely on that order.
//!
//! CRITICAL: All money values are i64 (cents)

use serde::{Deserialize, Serialize};
use std::fmt;

/// Charge category of a breakdown line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChargeKind {
    /// The court's base hourly rate
    BaseRate,

    /// Peak-hour surcharge on the base rate
    PeakSurcharge,

    /// One rented equipment item
    Equipment,

    /// The coach's hourly rate
    Coach,
}

/// One itemized charge contributing to the total
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargeLine {
    /// Charge category
    pub kind: ChargeKind,

    /// Display label (court, item, or coach name; "Peak surcharge")
    pub label: String,

    /// Charge amount (i64 cents)
    pub amount: i64,
}

impl fmt::Display for ChargeLine {
    /// Renders as `"Court 1 $20.00"` for the base rate and with a leading
    /// `+` for every add-on line, e.g. `"Racket +$5.00"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ChargeKind::BaseRate => write!(f, "{} {}", self.label, dollars(self.amount)),
            _ => write!(f, "{} +{}", self.label, dollars(self.amount)),
        }
    }
}

/// Format cents as a two-decimal dollar string
fn dollars(cents: i64) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}

/// Total price and the ordered charge lines it was derived from
///
/// Produced fresh on every calculation and never mutated after return. The
/// total always equals the sum of the line amounts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceResult {
    /// Total price (i64 cents), sum of the breakdown amounts
    pub total: i64,

    /// Ordered charge lines: base, surcharge, equipment, coach
    pub breakdown: Vec<ChargeLine>,
}

impl PriceResult {
    /// The zero result for the "not enough input yet" preview state
    pub fn empty() -> Self {
        Self::default()
    }

    /// Render the breakdown as a single arrow-separated string
    ///
    /// # Example
    /// ```
    /// use court_booking_core_rs::{ChargeKind, ChargeLine, PriceResult};
    ///
    /// let result = PriceResult {
    ///     total: 2500,
    ///     breakdown: vec![
    ///         ChargeLine { kind: ChargeKind::BaseRate, label: "Court 1".to_string(), amount: 2000 },
    ///         ChargeLine { kind: ChargeKind::Equipment, label: "Racket".to_string(), amount: 500 },
    ///     ],
    /// };
    /// assert_eq!(result.summary(), "Court 1 $20.00 → Racket +$5.00");
    /// ```
    pub fn summary(&self) -> String {
        self.breakdown
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" → ")
    }
}
