//! Rentable equipment reference data

use serde::{Deserialize, Serialize};

/// A rentable equipment item with a flat add-on price
///
/// Each selected item contributes one breakdown line with its flat price
/// (i64 cents).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentItem {
    /// Unique equipment identifier
    pub id: String,

    /// Display name shown on the breakdown line
    pub name: String,

    /// Flat add-on price (i64 cents)
    pub price: i64,
}
