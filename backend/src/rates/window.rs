//! Peak windows and the rate classifier output
//!
//! A peak window is a contiguous half-open interval of the day: the start is
//! inclusive, the end is exclusive. Windows do not wrap midnight; a rule set
//! that needs a late-night band configures it as its own window.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Rate class for a time of day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RateClass {
    /// Inside a configured peak window: the surcharge policy applies
    Peak,

    /// Outside every peak window: base rate only
    Normal,
}

/// A half-open `[start, end)` peak interval of the day
///
/// # Example
/// ```
/// use court_booking_core_rs::PeakWindow;
/// use court_booking_core_rs::parse_slot_time;
///
/// let evening = PeakWindow::from_hms(18, 0, 22, 0);
/// assert!(evening.contains(parse_slot_time("18:00").unwrap()));
/// assert!(evening.contains(parse_slot_time("21:59").unwrap()));
/// assert!(!evening.contains(parse_slot_time("22:00").unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeakWindow {
    /// Window start, inclusive
    pub start: NaiveTime,

    /// Window end, exclusive
    pub end: NaiveTime,
}

impl PeakWindow {
    /// Create a window from hour/minute bounds
    ///
    /// # Panics
    /// Panics if either bound is not a valid time of day or if the window
    /// would be empty (`start >= end`). Use `RateBook::validate` for checking
    /// untrusted configuration instead.
    pub fn from_hms(start_h: u32, start_m: u32, end_h: u32, end_m: u32) -> Self {
        let start = NaiveTime::from_hms_opt(start_h, start_m, 0)
            .unwrap_or_else(|| panic!("invalid window start {start_h:02}:{start_m:02}"));
        let end = NaiveTime::from_hms_opt(end_h, end_m, 0)
            .unwrap_or_else(|| panic!("invalid window end {end_h:02}:{end_m:02}"));
        assert!(start < end, "peak window must be non-empty");
        Self { start, end }
    }

    /// Whether a time of day falls inside this window
    ///
    /// Start-inclusive, end-exclusive.
    pub fn contains(&self, time: NaiveTime) -> bool {
        self.start <= time && time < self.end
    }
}
