//! Pricing rules and the injected rate book
//!
//! The rate book bundles everything a price calculation reads: the court,
//! equipment, and coach catalogs plus the pricing rules (peak windows and
//! per-court-type surcharge policies). It is loaded once, validated, and then
//! passed immutably into every composer call; the engine never holds it as
//! module-level state.
//!
//! CRITICAL: All money values are i64 (cents)

use std::collections::BTreeMap;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::time::{parse_slot_time, SlotParseError};
use crate::models::{Coach, Court, CourtType, EquipmentItem};
use crate::rates::window::{PeakWindow, RateClass};

/// Peak surcharge policy applied to a court's base rate
///
/// Surcharge amounts are computed in integer arithmetic only: a percent
/// policy is `base * percent / 100`, truncated toward zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum PeakSurcharge {
    /// Percentage of the base hourly rate (e.g. `Percent(50)` = +50%)
    Percent(u32),

    /// Flat increment on top of the base rate (i64 cents)
    Flat(i64),
}

impl PeakSurcharge {
    /// Surcharge amount for a given base rate (i64 cents)
    pub fn amount_on(&self, base_rate: i64) -> i64 {
        match self {
            PeakSurcharge::Percent(pct) => base_rate * i64::from(*pct) / 100,
            PeakSurcharge::Flat(amount) => *amount,
        }
    }
}

/// Peak windows and surcharge policies
///
/// The default rule set matches the standard evening schedule: one peak
/// window from 18:00 to 22:00 (start inclusive, end exclusive) and a +50%
/// surcharge for both court types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingRules {
    /// Peak windows; a time is peak if any window contains it
    pub peak_windows: Vec<PeakWindow>,

    /// Surcharge policy per court type
    ///
    /// A court type with no entry gets no surcharge during peak hours.
    pub surcharges: BTreeMap<CourtType, PeakSurcharge>,
}

impl Default for PricingRules {
    fn default() -> Self {
        let mut surcharges = BTreeMap::new();
        surcharges.insert(CourtType::Indoor, PeakSurcharge::Percent(50));
        surcharges.insert(CourtType::Outdoor, PeakSurcharge::Percent(50));
        Self {
            peak_windows: vec![PeakWindow::from_hms(18, 0, 22, 0)],
            surcharges,
        }
    }
}

impl PricingRules {
    /// Classify a time of day against the configured peak windows
    ///
    /// Pure function of the argument and the windows.
    ///
    /// # Example
    /// ```
    /// use court_booking_core_rs::{parse_slot_time, PricingRules, RateClass};
    ///
    /// let rules = PricingRules::default();
    /// let evening = parse_slot_time("19:00").unwrap();
    /// assert_eq!(rules.classify(evening), RateClass::Peak);
    /// ```
    pub fn classify(&self, time: NaiveTime) -> RateClass {
        if self.peak_windows.iter().any(|w| w.contains(time)) {
            RateClass::Peak
        } else {
            RateClass::Normal
        }
    }

    /// Whether an `HH:MM` slot time falls in a peak window
    ///
    /// String-facing form of `classify` for callers holding raw form input.
    /// Malformed input is a caller error and is rejected, not guessed at.
    /// Times outside the offered slot list still classify consistently; the
    /// classifier knows nothing about slot availability.
    ///
    /// # Example
    /// ```
    /// use court_booking_core_rs::PricingRules;
    ///
    /// let rules = PricingRules::default();
    /// assert!(rules.is_peak("19:00").unwrap());
    /// assert!(!rules.is_peak("11:00").unwrap());
    /// assert!(rules.is_peak("7pm").is_err());
    /// ```
    pub fn is_peak(&self, time: &str) -> Result<bool, SlotParseError> {
        Ok(self.classify(parse_slot_time(time)?) == RateClass::Peak)
    }
}

/// Errors produced when loading or validating a rate book
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RateBookError {
    #[error("Failed to parse rate book JSON: {0}")]
    Parse(String),

    #[error("Duplicate {kind} id: {id}")]
    DuplicateId { kind: &'static str, id: String },

    #[error("Negative {kind} amount for {id}")]
    NegativeAmount { kind: &'static str, id: String },

    #[error("Peak window {start}..{end} is empty")]
    EmptyWindow { start: NaiveTime, end: NaiveTime },
}

/// The immutable reference data and rules a price calculation reads
///
/// `Default` is an empty catalog with the default rules, useful as a blank
/// slate in tests and previews.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateBook {
    /// Court catalog
    pub courts: Vec<Court>,

    /// Equipment catalog
    pub equipment: Vec<EquipmentItem>,

    /// Coach catalog
    pub coaches: Vec<Coach>,

    /// Peak windows and surcharge policies
    #[serde(default)]
    pub rules: PricingRules,
}

impl RateBook {
    /// Load a rate book from JSON and validate it
    ///
    /// # Example
    /// ```
    /// use court_booking_core_rs::RateBook;
    ///
    /// let book = RateBook::from_json(r#"{
    ///     "courts": [
    ///         { "id": "court-1", "name": "Court 1", "kind": "indoor", "base_rate": 2000 }
    ///     ],
    ///     "equipment": [],
    ///     "coaches": []
    /// }"#).unwrap();
    /// assert_eq!(book.courts.len(), 1);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, RateBookError> {
        let book: RateBook =
            serde_json::from_str(json).map_err(|e| RateBookError::Parse(e.to_string()))?;
        book.validate()?;
        log::debug!(
            "loaded rate book: {} courts, {} equipment items, {} coaches, {} peak windows",
            book.courts.len(),
            book.equipment.len(),
            book.coaches.len(),
            book.rules.peak_windows.len()
        );
        Ok(book)
    }

    /// Validate catalog ids, amounts, and windows
    ///
    /// Rejects duplicate ids within a catalog, negative rates or prices, and
    /// empty peak windows. Runs automatically in `from_json`; call it
    /// directly for a book assembled in code.
    pub fn validate(&self) -> Result<(), RateBookError> {
        check_unique("court", self.courts.iter().map(|c| c.id.as_str()))?;
        check_unique("equipment", self.equipment.iter().map(|e| e.id.as_str()))?;
        check_unique("coach", self.coaches.iter().map(|c| c.id.as_str()))?;

        for court in &self.courts {
            if court.base_rate < 0 {
                return Err(RateBookError::NegativeAmount {
                    kind: "court",
                    id: court.id.clone(),
                });
            }
        }
        for item in &self.equipment {
            if item.price < 0 {
                return Err(RateBookError::NegativeAmount {
                    kind: "equipment",
                    id: item.id.clone(),
                });
            }
        }
        for coach in &self.coaches {
            if coach.hourly_rate < 0 {
                return Err(RateBookError::NegativeAmount {
                    kind: "coach",
                    id: coach.id.clone(),
                });
            }
        }
        for (kind, surcharge) in &self.rules.surcharges {
            if let PeakSurcharge::Flat(amount) = surcharge {
                if *amount < 0 {
                    return Err(RateBookError::NegativeAmount {
                        kind: "surcharge",
                        id: kind.to_string(),
                    });
                }
            }
        }
        for window in &self.rules.peak_windows {
            if window.start >= window.end {
                return Err(RateBookError::EmptyWindow {
                    start: window.start,
                    end: window.end,
                });
            }
        }
        Ok(())
    }

    /// Look up a court by id
    pub fn court(&self, id: &str) -> Option<&Court> {
        self.courts.iter().find(|c| c.id == id)
    }

    /// Look up an equipment item by id
    pub fn equipment_item(&self, id: &str) -> Option<&EquipmentItem> {
        self.equipment.iter().find(|e| e.id == id)
    }

    /// Look up a coach by id
    pub fn coach(&self, id: &str) -> Option<&Coach> {
        self.coaches.iter().find(|c| c.id == id)
    }
}

fn check_unique<'a>(
    kind: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), RateBookError> {
    let mut seen = std::collections::BTreeSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(RateBookError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}
