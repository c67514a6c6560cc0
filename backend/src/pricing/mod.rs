//! Price composition
//!
//! `breakdown` holds the result types (charge lines, price result);
//! `engine` holds the composer that produces them.
//!
//! See `engine.rs` for the composition contract.

pub mod breakdown;
pub mod engine;

// Re-export public API
pub use breakdown::{ChargeKind, ChargeLine, PriceResult};
pub use engine::{compute_price, PricingError};
