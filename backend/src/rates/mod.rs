//! Rate classification and pricing rules
//!
//! Splits into two layers:
//! - `window`: peak windows and the time-of-day rate classifier
//! - `book`: surcharge policies, pricing rules, and the injected rate book
//!
//! # Critical Invariants
//!
//! 1. Classification is pure: same time + same windows = same class
//! 2. Windows are half-open `[start, end)` intervals of the day
//! 3. The rate book is immutable during a price calculation

pub mod book;
pub mod window;

// Re-export public API
pub use book::{PeakSurcharge, PricingRules, RateBook, RateBookError};
pub use window::{PeakWindow, RateClass};
