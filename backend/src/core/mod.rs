//! Core utilities shared by the pricing engine

pub mod time;

pub use time::{parse_slot_date, parse_slot_time, SlotParseError};
