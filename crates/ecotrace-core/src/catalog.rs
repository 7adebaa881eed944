//! Static emission-factor catalog
//!
//! Maps each (category, subtype) pair to a CO2 emission factor in kg per
//! unit, a display label, and an example activity. The tables are plain
//! `&'static` data: built into the binary, immutable for the process
//! lifetime, and safe to read from anywhere.

use crate::models::Category;

/// A single emission factor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmissionFactor {
    /// Display label
    pub label: &'static str,

    /// kg CO2 emitted per unit (km, kWh, or meal)
    pub factor: f64,

    /// Example of a matching activity
    pub example: &'static str,
}

/// Subtype key paired with its emission factor
pub type SubtypeEntry = (&'static str, EmissionFactor);

const TRANSPORT: &[SubtypeEntry] = &[
    (
        "car_petrol",
        EmissionFactor { label: "Car (Petrol)", factor: 0.21, example: "Daily commute to work" },
    ),
    (
        "car_diesel",
        EmissionFactor { label: "Car (Diesel)", factor: 0.18, example: "Road trip or long journey" },
    ),
    (
        "public_transport",
        EmissionFactor { label: "Public Transport", factor: 0.05, example: "Bus, train, metro ride" },
    ),
    (
        "bike",
        EmissionFactor { label: "Bicycle", factor: 0.0, example: "Eco-friendly bike ride" },
    ),
    (
        "walk",
        EmissionFactor { label: "Walking", factor: 0.0, example: "Walking to nearby places" },
    ),
    (
        "motorbike",
        EmissionFactor { label: "Motorbike", factor: 0.12, example: "Scooter or motorcycle trip" },
    ),
];

const ENERGY: &[SubtypeEntry] = &[
    (
        "electricity",
        EmissionFactor { label: "Electricity", factor: 0.5, example: "Home electricity usage" },
    ),
    (
        "heating_gas",
        EmissionFactor { label: "Gas Heating", factor: 0.2, example: "Natural gas for heating" },
    ),
    (
        "heating_oil",
        EmissionFactor { label: "Oil Heating", factor: 0.3, example: "Heating oil consumption" },
    ),
];

const FOOD: &[SubtypeEntry] = &[
    (
        "meat_meal",
        EmissionFactor { label: "Meat Meal", factor: 3.3, example: "Beef, pork, or lamb meal" },
    ),
    (
        "vegetarian_meal",
        EmissionFactor { label: "Vegetarian Meal", factor: 0.9, example: "Dairy and egg-based meal" },
    ),
    (
        "vegan_meal",
        EmissionFactor { label: "Vegan Meal", factor: 0.6, example: "Plant-based meal only" },
    ),
    (
        "local_food",
        EmissionFactor { label: "Local Food", factor: 0.5, example: "Locally sourced produce" },
    ),
    (
        "imported_food",
        EmissionFactor { label: "Imported Food", factor: 1.2, example: "Food shipped from abroad" },
    ),
];

/// All subtypes of a category, in display order
pub fn subtypes(category: Category) -> &'static [SubtypeEntry] {
    match category {
        Category::Transport => TRANSPORT,
        Category::Energy => ENERGY,
        Category::Food => FOOD,
    }
}

/// Look up the emission factor for a (category, subtype) pair
pub fn lookup(category: Category, subtype: &str) -> Option<&'static EmissionFactor> {
    subtypes(category).iter().find(|(key, _)| *key == subtype).map(|(_, factor)| factor)
}

/// The first subtype of a category, used when a draft switches category
pub fn default_subtype(category: Category) -> &'static str {
    // Every table has at least one entry
    subtypes(category)[0].0
}

/// The least eco-friendly factor in a category
///
/// Used as the reference point for the eco-savings metric: transport 0.21,
/// energy 0.5, food 3.3.
pub fn baseline(category: Category) -> f64 {
    subtypes(category).iter().map(|(_, f)| f.factor).fold(0.0, f64::max)
}
