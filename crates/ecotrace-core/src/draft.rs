//! In-progress activity entry
//!
//! The draft holds raw user input; the amount is parsed lazily so the live
//! CO2 estimate can track every keystroke without failing. Validation
//! happens once, at promotion.

use chrono::Utc;

use crate::catalog;
use crate::error::{EcotraceError, Result};
use crate::models::{Category, EntryId, LedgerEntry};

/// Round to two decimals, the precision entries are stored at
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// The single in-progress entry being edited in the logger
#[derive(Debug, Clone)]
pub struct DraftActivity {
    category: Category,
    subtype: String,
    amount: String,
    description: String,
}

impl Default for DraftActivity {
    fn default() -> Self {
        Self {
            category: Category::Transport,
            subtype: catalog::default_subtype(Category::Transport).to_string(),
            amount: String::new(),
            description: String::new(),
        }
    }
}

impl DraftActivity {
    /// Create a draft with the default activity (petrol car, blank amount)
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn subtype(&self) -> &str {
        &self.subtype
    }

    /// Raw amount input, possibly empty or non-numeric
    pub fn amount(&self) -> &str {
        &self.amount
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Switch category
    ///
    /// The subtype resets to the first subtype of the new category (no
    /// subtype is valid across categories) and the amount is cleared.
    pub fn set_category(&mut self, category: Category) {
        self.category = category;
        self.subtype = catalog::default_subtype(category).to_string();
        self.amount.clear();
    }

    /// Switch subtype within the current category
    ///
    /// Clears the amount so a stale estimate computed against the previous
    /// factor is never shown.
    pub fn set_subtype(&mut self, subtype: impl Into<String>) {
        self.subtype = subtype.into();
        self.amount.clear();
    }

    pub fn set_amount(&mut self, amount: impl Into<String>) {
        self.amount = amount.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    fn parsed_amount(&self) -> Option<f64> {
        self.amount.trim().parse::<f64>().ok()
    }

    /// Estimated emissions for the current input, in kg CO2
    ///
    /// Never fails: an unparsable amount counts as zero, and a subtype
    /// missing from the catalog contributes factor zero.
    pub fn estimated_co2(&self) -> f64 {
        let amount = self.parsed_amount().unwrap_or(0.0);
        let factor =
            catalog::lookup(self.category, &self.subtype).map(|f| f.factor).unwrap_or(0.0);
        amount * factor
    }

    /// Validate the draft and promote it into a ledger entry
    ///
    /// Fails with `InvalidAmount` when the amount is missing, non-numeric,
    /// or not greater than zero, and with `UnknownActivity` when the
    /// (category, subtype) pair is not in the catalog. On success the draft
    /// resets to its defaults.
    pub fn promote(&mut self) -> Result<LedgerEntry> {
        let amount = self
            .parsed_amount()
            .filter(|a| a.is_finite() && *a > 0.0)
            .ok_or_else(|| EcotraceError::InvalidAmount { input: self.amount.clone() })?;

        let factor = catalog::lookup(self.category, &self.subtype)
            .ok_or_else(|| EcotraceError::UnknownActivity {
                category: self.category.to_string(),
                subtype: self.subtype.clone(),
            })?
            .factor;

        let description = match self.description.trim() {
            "" => None,
            d => Some(d.to_string()),
        };

        let entry = LedgerEntry {
            id: EntryId::new(),
            category: self.category,
            subtype: self.subtype.clone(),
            amount,
            description,
            co2: round2(amount * factor),
            created_at: Utc::now(),
        };

        *self = Self::default();
        Ok(entry)
    }
}
