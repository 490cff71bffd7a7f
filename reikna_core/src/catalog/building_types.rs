//! Prefabricated housing coefficients per building type.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Coefficients driving the housing estimators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildingTypeCoefficients {
    /// Display name ("Einbýlishús", ...)
    pub name: String,
    /// On-site days for a 100 m² reference building
    pub base_time_days: f64,
    /// Multiplier for time and cost relative to a simple detached house
    pub complexity_factor: f64,
    /// ISK per m² floor area
    pub cost_per_area: f64,
    /// m³ concrete per m² floor area
    pub concrete_usage: f64,
    /// Material waste for prefabricated construction, percent
    pub waste_percent: f64,
}

fn coefficients(name: &str, days: f64, complexity: f64, cost: f64, concrete: f64, waste: f64) -> BuildingTypeCoefficients {
    BuildingTypeCoefficients {
        name: name.to_string(),
        base_time_days: days,
        complexity_factor: complexity,
        cost_per_area: cost,
        concrete_usage: concrete,
        waste_percent: waste,
    }
}

pub(crate) fn builtin_building_types() -> BTreeMap<String, BuildingTypeCoefficients> {
    let mut types = BTreeMap::new();
    types.insert("einbylishus".to_string(), coefficients("Einbýlishús", 45.0, 1.0, 420_000.0, 0.45, 3.0));
    types.insert("parhus".to_string(), coefficients("Parhús", 50.0, 1.1, 400_000.0, 0.5, 3.0));
    types.insert("radhus".to_string(), coefficients("Raðhús", 55.0, 1.15, 385_000.0, 0.5, 3.0));
    types.insert("fjolbylishus".to_string(), coefficients("Fjölbýlishús", 90.0, 1.3, 360_000.0, 0.6, 4.0));
    types.insert("sumarhus".to_string(), coefficients("Sumarhús", 25.0, 0.8, 380_000.0, 0.35, 2.0));
    types.insert("bilskur".to_string(), coefficients("Bílskúr", 12.0, 0.6, 250_000.0, 0.4, 2.0));
    types.insert("default".to_string(), coefficients("Einingahús", 45.0, 1.0, 400_000.0, 0.45, 3.0));
    types
}
