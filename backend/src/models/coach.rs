//! Coach reference data

use serde::{Deserialize, Serialize};

/// A bookable coach with an hourly rate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coach {
    /// Unique coach identifier
    pub id: String,

    /// Display name shown on the breakdown line
    pub name: String,

    /// Hourly rate (i64 cents)
    pub hourly_rate: i64,
}
