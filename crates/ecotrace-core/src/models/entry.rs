use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Category;

/// Unique identifier for a ledger entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntryId(pub Uuid);

impl EntryId {
    /// Generate a fresh random id
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

/// A confirmed activity awaiting submission
///
/// Immutable once created. Entries are produced only by promoting a
/// validated draft, so `amount` is always positive and `co2` is already
/// computed from the catalog factor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// Unique identifier
    pub id: EntryId,

    /// Activity category
    pub category: Category,

    /// Catalog subtype key (e.g. "car_petrol")
    pub subtype: String,

    /// Amount in the category's unit
    pub amount: f64,

    /// Optional free-text description
    pub description: Option<String>,

    /// Estimated emissions in kg CO2, fixed at promotion time
    pub co2: f64,

    /// When the entry was promoted
    pub created_at: DateTime<Utc>,
}
