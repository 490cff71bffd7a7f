//! Planters for a rectangular area.
//!
//! Two independent capacity estimates are taken and the smaller one wins:
//!
//! ```text
//! perimeter_max  = ⌊2(l + w) / (planter_length + 1.0 m)⌋
//! coverage_count = ⌈l × w × 0.15 / planter_footprint⌉
//! recommended    = min(perimeter_max, coverage_count)
//! ```

use serde::{Deserialize, Serialize};

use crate::catalog::ReferenceData;
use crate::errors::{require_positive, to_count, CalcResult};
use crate::units::{round_to, Centimeters, Meters, SquareMeters};

/// Gap between planters placed along the edge
pub const PERIMETER_GAP_M: f64 = 1.0;
/// Share of the area planters should cover
pub const COVERAGE_RATIO: f64 = 0.15;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanterResult {
    pub planter_name: String,
    pub area_m2: f64,
    pub perimeter_m: f64,
    pub perimeter_max: u32,
    pub coverage_count: u32,
    pub recommended_count: u32,
    pub soil_volume_m3: f64,
    pub total_weight_kg: f64,
    pub total_price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

pub fn calculate_planters(length_m: f64, width_m: f64, planter_type: &str, data: &ReferenceData) -> CalcResult<PlanterResult> {
    require_positive("length_m", length_m)?;
    require_positive("width_m", width_m)?;
    let spec = data.planter_type(planter_type);

    let planter_length = Meters::from(Centimeters(require_positive("planter.length_cm", spec.length_cm)?));
    let planter_width = Meters::from(Centimeters(require_positive("planter.width_cm", spec.width_cm)?));
    let footprint = SquareMeters::rectangle(planter_length, planter_width);
    let area = SquareMeters::rectangle(Meters(length_m), Meters(width_m));
    let perimeter_m = 2.0 * (length_m + width_m);

    let perimeter_max = to_count("perimeter_max", (perimeter_m / (planter_length.0 + PERIMETER_GAP_M)).floor())?;
    let coverage_count = to_count("coverage_count", (area.0 * COVERAGE_RATIO / footprint.0).ceil())?;
    let recommended_count = perimeter_max.min(coverage_count);

    let note = (recommended_count == 0)
        .then(|| format!("Svæðið er of lítið fyrir {}", spec.name.to_lowercase()));

    Ok(PlanterResult {
        planter_name: spec.name.clone(),
        area_m2: round_to(area.0, 2),
        perimeter_m: round_to(perimeter_m, 2),
        perimeter_max,
        coverage_count,
        recommended_count,
        soil_volume_m3: round_to(spec.soil_volume_m3 * recommended_count as f64, 2),
        total_weight_kg: spec.weight_kg * recommended_count as f64,
        total_price: spec.price * recommended_count as f64,
        note,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coverage_limits_large_perimeter() {
        // perimeter 40 m / 2.0 = 20; coverage ⌈100 × 0.15 / 1.0⌉ = 15
        let result = calculate_planters(10.0, 10.0, "blomaker", ReferenceData::builtin()).unwrap();
        assert_eq!(result.perimeter_max, 20);
        assert_eq!(result.coverage_count, 15);
        assert_eq!(result.recommended_count, 15);
        assert_eq!(result.total_price, 15.0 * 119_000.0);
        assert_eq!(result.soil_volume_m3, 6.75);
    }

    #[test]
    fn test_perimeter_limits_long_narrow_area() {
        // 20 × 2: perimeter 44 / 2.0 = 22; coverage ⌈40 × 0.15⌉ = 6
        let narrow = calculate_planters(20.0, 2.0, "blomaker", ReferenceData::builtin()).unwrap();
        assert_eq!(narrow.recommended_count, 6);

        // 3 × 3 with 2 m planters: perimeter 12 / 3.0 = 4; coverage ⌈1.35 / 1.2⌉ = 2
        let small = calculate_planters(3.0, 3.0, "langker", ReferenceData::builtin()).unwrap();
        assert_eq!(small.perimeter_max, 4);
        assert_eq!(small.coverage_count, 2);
        assert_eq!(small.recommended_count, 2);
    }

    #[test]
    fn test_tiny_area_gets_note() {
        let result = calculate_planters(0.4, 0.4, "blomaker", ReferenceData::builtin()).unwrap();
        assert_eq!(result.recommended_count, 0);
        assert!(result.note.is_some());
    }

    #[test]
    fn test_area_too_large_to_count() {
        let err = calculate_planters(1e10, 1e10, "blomaker", ReferenceData::builtin()).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }
}
