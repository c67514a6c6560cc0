//! Price composer
//!
//! Composes the itemized price for a slot selection:
//!
//! 1. Empty court id short-circuits to the zero result (live-preview state)
//! 2. Date and time are parsed strictly; malformed input is rejected
//! 3. Court resolves to its base-rate line
//! 4. Peak time adds the court type's configured surcharge line
//! 5. Equipment resolves to one line per item, in selection order
//! 6. An optional coach resolves to the final line
//! 7. The total is the sum of the line amounts
//!
//! The composer is a pure function of its arguments: it reads the rate book,
//! writes nothing, and classifies the slot time exactly once. The date is
//! parsed for validity but carries no rate rules; only the time affects peak
//! classification.
//!
//! # Critical Invariants
//!
//! - **Total conservation**: the returned total equals the sum of the
//!   returned breakdown amounts
//! - **Line order**: base rate, surcharge, equipment (selection order), coach
//! - **No silent defaults**: an unknown id is a typed error, never a zero
//!   price

use thiserror::Error;

use crate::core::time::{parse_slot_date, parse_slot_time, SlotParseError};
use crate::pricing::breakdown::{ChargeKind, ChargeLine, PriceResult};
use crate::rates::book::RateBook;
use crate::rates::window::RateClass;

/// Errors that can occur during price composition
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PricingError {
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] SlotParseError),

    #[error("Unknown court id: {0}")]
    UnknownCourt(String),

    #[error("Unknown equipment id: {0}")]
    UnknownEquipment(String),

    #[error("Unknown coach id: {0}")]
    UnknownCoach(String),
}

/// Compute the total price and charge breakdown for a slot selection
///
/// # Arguments
///
/// * `court_id` - Selected court id; empty means "no court chosen yet"
/// * `equipment_ids` - Selected equipment ids, in selection order
/// * `coach_id` - Selected coach id, if any
/// * `date` - Slot date, `YYYY-MM-DD` (validated; no rate rules read it yet)
/// * `time` - Slot time, `HH:MM` 24-hour
/// * `book` - The immutable rate book to price against
///
/// # Returns
///
/// - `Ok(PriceResult)` with the total and ordered breakdown
/// - `Ok(PriceResult::empty())` when `court_id` is empty
/// - `Err(PricingError)` for malformed date/time or unknown ids
///
/// # Example
///
/// ```rust
/// use court_booking_core_rs::{compute_price, Court, CourtType, RateBook};
///
/// let book = RateBook {
///     courts: vec![Court {
///         id: "court-1".to_string(),
///         name: "Court 1".to_string(),
///         kind: CourtType::Indoor,
///         base_rate: 2000, // $20.00 per hour
///     }],
///     ..RateBook::default()
/// };
///
/// // 19:00 is inside the default 18:00-22:00 peak window: +50% surcharge
/// let result = compute_price("court-1", &[], None, "2026-08-06", "19:00", &book).unwrap();
/// assert_eq!(result.total, 3000);
/// assert_eq!(result.breakdown.len(), 2);
///
/// // 11:00 is off-peak: base rate only, no surcharge line
/// let result = compute_price("court-1", &[], None, "2026-08-06", "11:00", &book).unwrap();
/// assert_eq!(result.total, 2000);
/// assert_eq!(result.breakdown.len(), 1);
/// ```
pub fn compute_price(
    court_id: &str,
    equipment_ids: &[String],
    coach_id: Option<&str>,
    date: &str,
    time: &str,
    book: &RateBook,
) -> Result<PriceResult, PricingError> {
    // "No court selected yet" is a valid preview state, not an error.
    if court_id.is_empty() {
        return Ok(PriceResult::empty());
    }

    let _slot_date = parse_slot_date(date)?;
    let slot_time = parse_slot_time(time)?;

    let court = book
        .court(court_id)
        .ok_or_else(|| PricingError::UnknownCourt(court_id.to_string()))?;

    let mut breakdown = Vec::with_capacity(2 + equipment_ids.len() + usize::from(coach_id.is_some()));
    breakdown.push(ChargeLine {
        kind: ChargeKind::BaseRate,
        label: court.name.clone(),
        amount: court.base_rate,
    });

    if book.rules.classify(slot_time) == RateClass::Peak {
        // A court type without a configured policy gets no surcharge line,
        // not a zero-amount line.
        if let Some(surcharge) = book.rules.surcharges.get(&court.kind) {
            breakdown.push(ChargeLine {
                kind: ChargeKind::PeakSurcharge,
                label: "Peak surcharge".to_string(),
                amount: surcharge.amount_on(court.base_rate),
            });
        }
    }

    for id in equipment_ids {
        let item = book
            .equipment_item(id)
            .ok_or_else(|| PricingError::UnknownEquipment(id.clone()))?;
        breakdown.push(ChargeLine {
            kind: ChargeKind::Equipment,
            label: item.name.clone(),
            amount: item.price,
        });
    }

    if let Some(id) = coach_id {
        let coach = book
            .coach(id)
            .ok_or_else(|| PricingError::UnknownCoach(id.to_string()))?;
        breakdown.push(ChargeLine {
            kind: ChargeKind::Coach,
            label: coach.name.clone(),
            amount: coach.hourly_rate,
        });
    }

    let total = breakdown.iter().map(|line| line.amount).sum();
    log::debug!(
        "priced court {court_id} at {time}: {} lines, total {total} cents",
        breakdown.len()
    );
    Ok(PriceResult { total, breakdown })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_court_id_short_circuits_before_parsing() {
        // An untouched form has empty date/time too; that must still be the
        // zero state rather than an InvalidInput error.
        let result = compute_price("", &[], None, "", "", &RateBook::default()).unwrap();
        assert_eq!(result, PriceResult::empty());
    }

    #[test]
    fn test_malformed_date_rejected_once_court_is_chosen() {
        let book = RateBook::default();
        let err = compute_price("court-1", &[], None, "tomorrow", "19:00", &book).unwrap_err();
        assert!(matches!(err, PricingError::InvalidInput(_)));
    }
}
