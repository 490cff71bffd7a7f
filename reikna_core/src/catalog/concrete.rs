//! Concrete grade table: strength class, price and carbon footprint.
//!
//! Footprint values are cradle-to-gate kg CO₂ per m³. The "reduced" column
//! is the same grade with slag/fly-ash cement replacement.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConcreteGrade {
    /// e.g. "C30/37"
    pub strength_class: String,
    pub price_per_m3: f64,
    pub base_kg_co2_per_m3: f64,
    pub reduced_kg_co2_per_m3: f64,
}

fn grade(class: &str, price: f64, base: f64, reduced: f64) -> ConcreteGrade {
    ConcreteGrade {
        strength_class: class.to_string(),
        price_per_m3: price,
        base_kg_co2_per_m3: base,
        reduced_kg_co2_per_m3: reduced,
    }
}

pub(crate) fn builtin_concrete_grades() -> BTreeMap<String, ConcreteGrade> {
    let mut grades = BTreeMap::new();
    grades.insert("c20".to_string(), grade("C20/25", 29900.0, 250.0, 190.0));
    grades.insert("c25".to_string(), grade("C25/30", 31900.0, 280.0, 210.0));
    grades.insert("c30".to_string(), grade("C30/37", 33900.0, 300.0, 225.0));
    grades.insert("c35".to_string(), grade("C35/45", 36900.0, 330.0, 250.0));
    grades.insert("c40".to_string(), grade("C40/50", 39900.0, 360.0, 275.0));
    grades.insert("default".to_string(), grade("C30/37", 33900.0, 300.0, 225.0));
    grades
}
