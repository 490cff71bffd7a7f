//! # Settings
//!
//! Process-wide configuration for the calculation router: the default value
//! substituted for every parameter a query leaves unstated, plus pricing
//! settings. Loaded once at startup (TOML) or taken from `Settings::default()`.
//!
//! ## Example
//!
//! ```rust
//! use reikna_core::settings::Settings;
//!
//! let settings = Settings::from_toml_str("vat_rate = 0.11").unwrap();
//! assert_eq!(settings.vat_rate, 0.11);
//! // Everything not mentioned keeps its built-in default
//! assert_eq!(settings.defaults.length_m, 5.0);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Global settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// VAT applied to price calculations (Iceland standard rate 24%)
    pub vat_rate: f64,

    /// Currency label for presentation
    pub currency: String,

    /// Router default table
    pub defaults: RouterDefaults,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            vat_rate: 0.24,
            currency: "ISK".to_string(),
            defaults: RouterDefaults::default(),
        }
    }
}

impl Settings {
    pub fn from_toml_str(source: &str) -> CalcResult<Settings> {
        let settings: Settings = toml::from_str(source).map_err(|e| CalcError::serialization(e.to_string()))?;
        if !(0.0..1.0).contains(&settings.vat_rate) {
            return Err(CalcError::invalid_input(
                "vat_rate",
                settings.vat_rate.to_string(),
                "VAT rate must be a fraction in [0, 1)",
            ));
        }
        Ok(settings)
    }

    pub fn load(path: &Path) -> CalcResult<Settings> {
        let source = std::fs::read_to_string(path)
            .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;
        Self::from_toml_str(&source)
    }
}

/// Per-field defaults used when a query does not state a value.
///
/// Resolution order for every formula argument is: explicit extracted value,
/// then a value derived from other extracted fields, then the entry here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterDefaults {
    pub length_m: f64,
    pub width_m: f64,
    /// Base sand layer
    pub sand_thickness_cm: f64,
    /// Concrete slab
    pub slab_thickness_cm: f64,
    pub stone_type: String,
    pub stone_size_cm: f64,
    pub stone_thickness_cm: f64,
    pub joint_width_mm: f64,
    pub joint_pattern: String,
    pub column_diameter_cm: f64,
    pub column_height_m: f64,
    pub post_width_cm: f64,
    pub post_height_cm: f64,
    /// Posts embedded in a column
    pub post_count: u32,
    pub usage: String,
    pub concrete_volume_m3: f64,
    pub concrete_type: String,
    pub building_area_m2: f64,
    pub building_type: String,
    pub bin_count: u32,
    pub bin_type: String,
    pub post_run_length_m: f64,
    pub post_type: String,
    pub bench_count: u32,
    pub bench_type: String,
    pub bench_arrangement: String,
    pub planter_type: String,
    pub height_difference_cm: f64,
    pub available_space_cm: f64,
    pub barrier_length_m: f64,
    pub barrier_type: String,
    pub quantity: u32,
    pub product: String,
}

impl Default for RouterDefaults {
    fn default() -> Self {
        RouterDefaults {
            length_m: 5.0,
            width_m: 5.0,
            sand_thickness_cm: 3.0,
            slab_thickness_cm: 10.0,
            stone_type: "default".to_string(),
            stone_size_cm: 40.0,
            stone_thickness_cm: 6.0,
            joint_width_mm: 3.0,
            joint_pattern: "regular".to_string(),
            column_diameter_cm: 30.0,
            column_height_m: 2.5,
            post_width_cm: 10.0,
            post_height_cm: 10.0,
            post_count: 1,
            usage: "default".to_string(),
            concrete_volume_m3: 1.0,
            concrete_type: "default".to_string(),
            building_area_m2: 120.0,
            building_type: "default".to_string(),
            bin_count: 2,
            bin_type: "default".to_string(),
            post_run_length_m: 10.0,
            post_type: "default".to_string(),
            bench_count: 4,
            bench_type: "default".to_string(),
            bench_arrangement: "line".to_string(),
            planter_type: "default".to_string(),
            height_difference_cm: 100.0,
            available_space_cm: 300.0,
            barrier_length_m: 20.0,
            barrier_type: "default".to_string(),
            quantity: 1,
            product: "default".to_string(),
        }
    }
}
