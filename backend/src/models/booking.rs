//! Booking selection and confirmed booking record
//!
//! `BookingSelection` is the transient form state owned by the presentation
//! layer; it prices to a zero result until enough of it is filled in.
//! `Booking` is the confirmed record handed to the external persistence
//! collaborator: the selection plus a generated id, a creation timestamp, and
//! the total captured at confirmation time. The breakdown itself is not part
//! of the persisted record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::pricing::breakdown::PriceResult;
use crate::pricing::engine::{compute_price, PricingError};
use crate::rates::book::RateBook;

/// The user's in-progress slot selection
///
/// Equipment ids keep insertion order (the order the user toggled them) and
/// contain no duplicates; breakdown lines follow that order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingSelection {
    /// Slot date, `YYYY-MM-DD`
    pub date: String,

    /// Slot time, `HH:MM` 24-hour
    pub time: String,

    /// Selected court id; empty until the user chooses one
    pub court_id: String,

    /// Selected equipment ids, in selection order
    pub equipment_ids: Vec<String>,

    /// Selected coach id, if any
    pub coach_id: Option<String>,
}

impl BookingSelection {
    /// Price this selection against a rate book
    ///
    /// An incomplete selection (missing court, date, or time) prices to the
    /// zero result so a live-preview UI can call this on every change without
    /// special-casing the blank form.
    ///
    /// # Example
    /// ```
    /// use court_booking_core_rs::{BookingSelection, RateBook};
    ///
    /// let selection = BookingSelection::default();
    /// let result = selection.price(&RateBook::default()).unwrap();
    /// assert_eq!(result.total, 0);
    /// assert!(result.breakdown.is_empty());
    /// ```
    pub fn price(&self, book: &RateBook) -> Result<PriceResult, PricingError> {
        if self.court_id.is_empty() || self.date.is_empty() || self.time.is_empty() {
            return Ok(PriceResult::empty());
        }
        compute_price(
            &self.court_id,
            &self.equipment_ids,
            self.coach_id.as_deref(),
            &self.date,
            &self.time,
            book,
        )
    }
}

/// A confirmed booking, ready for the persistence collaborator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    /// Unique booking identifier (UUID)
    pub id: String,

    /// Slot date, `YYYY-MM-DD`
    pub date: String,

    /// Slot time, `HH:MM` 24-hour
    pub time: String,

    /// Booked court id
    pub court_id: String,

    /// Booked equipment ids, in selection order
    pub equipment_ids: Vec<String>,

    /// Booked coach id, if any
    pub coach_id: Option<String>,

    /// Total price captured at confirmation (i64 cents)
    pub total: i64,

    /// When the booking was confirmed
    pub booked_at: DateTime<Utc>,
}

impl Booking {
    /// Confirm a selection into a booking record
    ///
    /// Generates the booking id, stamps the creation time, and captures the
    /// confirmed total. The caller is expected to pass the total from the
    /// `PriceResult` it just displayed, so the stored charge matches what the
    /// user agreed to.
    ///
    /// # Example
    /// ```
    /// use court_booking_core_rs::{Booking, BookingSelection};
    ///
    /// let selection = BookingSelection {
    ///     date: "2026-08-06".to_string(),
    ///     time: "19:00".to_string(),
    ///     court_id: "court-1".to_string(),
    ///     equipment_ids: vec![],
    ///     coach_id: None,
    /// };
    /// let booking = Booking::confirm(selection, 3000);
    /// assert_eq!(booking.total, 3000);
    /// assert!(!booking.id.is_empty());
    /// ```
    pub fn confirm(selection: BookingSelection, total: i64) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            date: selection.date,
            time: selection.time,
            court_id: selection.court_id,
            equipment_ids: selection.equipment_ids,
            coach_id: selection.coach_id,
            total,
            booked_at: Utc::now(),
        }
    }
}
