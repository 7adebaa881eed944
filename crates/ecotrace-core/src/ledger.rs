//! Ordered batch of confirmed, unsubmitted activity entries
//!
//! The ledger is owned exclusively by one session and mutated on that
//! session's single thread of control, so it is a plain collection with no
//! interior locking. None of its operations fail under normal
//! preconditions; `add` with a non-positive amount would be a caller
//! contract violation (promotion enforces positivity upstream).

use serde::Serialize;

use crate::catalog;
use crate::models::{Category, EntryId, LedgerEntry};

/// Per-category CO2 totals for summary views
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct CategoryBreakdown {
    pub transport: f64,
    pub energy: f64,
    pub food: f64,
}

/// Ordered collection of entries awaiting submission
///
/// Insertion order is preserved and carried through to the wire payload.
#[derive(Debug, Clone, Default)]
pub struct BatchLedger {
    entries: Vec<LedgerEntry>,
}

impl BatchLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry to the end of the batch
    pub fn add(&mut self, entry: LedgerEntry) {
        self.entries.push(entry);
    }

    /// Remove the entry with the given id
    ///
    /// Removing an id that is not in the batch is a no-op, not an error.
    pub fn remove(&mut self, id: EntryId) {
        self.entries.retain(|e| e.id != id);
    }

    /// Entries in insertion order
    pub fn entries(&self) -> &[LedgerEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Empty the batch, called after a confirmed successful submission
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Total estimated emissions across the batch, in kg CO2
    pub fn total_co2(&self) -> f64 {
        self.entries.iter().map(|e| e.co2).sum()
    }

    /// Emissions avoided versus the least eco-friendly choice in each
    /// entry's category
    ///
    /// Per-entry deltas `(baseline - factor) * amount` are summed signed.
    /// Baselines are the category maxima, so no catalog subtype produces a
    /// negative delta.
    pub fn eco_savings(&self) -> f64 {
        self.entries
            .iter()
            .map(|e| {
                let factor =
                    catalog::lookup(e.category, &e.subtype).map(|f| f.factor).unwrap_or(0.0);
                (catalog::baseline(e.category) - factor) * e.amount
            })
            .sum()
    }

    /// Per-category CO2 totals
    pub fn breakdown(&self) -> CategoryBreakdown {
        let mut breakdown = CategoryBreakdown::default();
        for entry in &self.entries {
            match entry.category {
                Category::Transport => breakdown.transport += entry.co2,
                Category::Energy => breakdown.energy += entry.co2,
                Category::Food => breakdown.food += entry.co2,
            }
        }
        breakdown
    }
}
