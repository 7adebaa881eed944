//! Wire payload for `POST /activities/bulk`

use chrono::{DateTime, Utc};
use ecotrace_core::models::LedgerEntry;
use serde::{Deserialize, Serialize};

/// A single activity as the backend expects it
///
/// `description` serializes as `null` when absent; the backend treats the
/// two the same.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityPayload {
    pub activity_type: String,
    pub subtype: String,
    pub amount: f64,
    pub description: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl ActivityPayload {
    /// Build the wire representation of a ledger entry
    pub fn from_entry(entry: &LedgerEntry) -> Self {
        Self {
            activity_type: entry.category.to_string(),
            subtype: entry.subtype.clone(),
            amount: entry.amount,
            description: entry.description.clone(),
            timestamp: entry.created_at,
        }
    }
}

/// Request body for the bulk endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkActivitiesRequest {
    pub activities: Vec<ActivityPayload>,
}
