//! Court Booking Core - Rust Engine
//!
//! Pricing and rate-classification engine for court reservations with
//! deterministic, itemized price composition.
//!
//! # Architecture
//!
//! - **core**: Slot time/date parsing
//! - **models**: Domain types (Court, EquipmentItem, Coach, Booking)
//! - **rates**: Peak-window classification and the injected rate book
//! - **pricing**: Price composition (total + ordered charge breakdown)
//!
//! # Critical Invariants
//!
//! 1. All money values are i64 (cents)
//! 2. Price composition is a pure function: same inputs, same result
//! 3. A price result's total always equals the sum of its breakdown lines

// Module declarations
pub mod core;
pub mod models;
pub mod pricing;
pub mod rates;

// Re-exports for convenience
pub use crate::core::time::{parse_slot_date, parse_slot_time, SlotParseError};
pub use models::{
    booking::{Booking, BookingSelection},
    coach::Coach,
    court::{Court, CourtType},
    equipment::EquipmentItem,
};
pub use pricing::{
    breakdown::{ChargeKind, ChargeLine, PriceResult},
    engine::{compute_price, PricingError},
};
pub use rates::{
    book::{PeakSurcharge, PricingRules, RateBook, RateBookError},
    window::{PeakWindow, RateClass},
};
