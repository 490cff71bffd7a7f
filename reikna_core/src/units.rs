//! # Unit Types
//!
//! Type-safe wrappers for the metric units used by the formula library.
//! Queries mix metres, centimetres and millimetres freely ("5x5 m",
//! "3 cm þykkt", "2 mm fúga"), so conversions happen through these
//! newtypes rather than scattered `/ 100.0` literals.
//!
//! ## Example
//!
//! ```rust
//! use reikna_core::units::{Centimeters, Meters};
//!
//! let thickness = Centimeters(3.0);
//! let meters: Meters = thickness.into();
//! assert!((meters.0 - 0.03).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// Length Units
// ============================================================================

/// Length in metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Length in centimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Centimeters(pub f64);

/// Length in millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

impl From<Centimeters> for Meters {
    fn from(cm: Centimeters) -> Self {
        Meters(cm.0 / 100.0)
    }
}

impl From<Meters> for Centimeters {
    fn from(m: Meters) -> Self {
        Centimeters(m.0 * 100.0)
    }
}

impl From<Millimeters> for Centimeters {
    fn from(mm: Millimeters) -> Self {
        Centimeters(mm.0 / 10.0)
    }
}

// ============================================================================
// Area / Volume / Mass
// ============================================================================

/// Area in square metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SquareMeters(pub f64);

/// Volume in cubic metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CubicMeters(pub f64);

/// Mass in kilograms
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilograms(pub f64);

impl SquareMeters {
    /// Rectangle area from two lengths
    pub fn rectangle(length: Meters, width: Meters) -> Self {
        SquareMeters(length.0 * width.0)
    }

    /// Extrude an area by a depth
    pub fn times_depth(self, depth: Meters) -> CubicMeters {
        CubicMeters(self.0 * depth.0)
    }
}

impl CubicMeters {
    /// Volume of a cylinder (π r² h) from its diameter
    pub fn cylinder(diameter: Meters, height: Meters) -> Self {
        let radius = diameter.0 / 2.0;
        CubicMeters(std::f64::consts::PI * radius * radius * height.0)
    }

    /// Mass given a bulk density in kg/m³
    pub fn weight(self, density_kg_m3: f64) -> Kilograms {
        Kilograms(self.0 * density_kg_m3)
    }
}

/// Convert a cubic-centimetre quantity to cubic metres
pub fn cm3_to_m3(cm3: f64) -> CubicMeters {
    CubicMeters(cm3 / 1_000_000.0)
}

/// Round to a fixed number of decimals for presentation fields.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
