use serde::{Deserialize, Serialize};
use std::fmt;

/// Activity category
///
/// The category determines the unit of measure for amounts: kilometres for
/// transport, kilowatt-hours for energy, meals for food.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Transport,
    Energy,
    Food,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 3] = [Category::Transport, Category::Energy, Category::Food];

    /// Unit of measure for amounts in this category
    pub fn unit(&self) -> &'static str {
        match self {
            Category::Transport => "km",
            Category::Energy => "kWh",
            Category::Food => "meals",
        }
    }

    /// Wire name, as the backend expects it
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Transport => "transport",
            Category::Energy => "energy",
            Category::Food => "food",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
