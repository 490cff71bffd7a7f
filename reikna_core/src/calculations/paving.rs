//! # Paving Stones
//!
//! Number of stones (or area price, for stone systems) for a rectangular
//! paved surface.
//!
//! ## Method
//!
//! ```text
//! area        = length × width                       (m²)
//! stone_area  = stone_length × stone_width            (cm²)
//! raw_count   = ⌈area × 10 000 / stone_area⌉
//! count       = ⌈raw_count × 1.05⌉                    (5% waste)
//! ```
//!
//! The waste ceiling is taken in integer arithmetic so that, e.g., 100 raw
//! stones gives exactly 105 rather than 106 from `100.0 * 1.05` rounding up.
//!
//! ## Example
//!
//! ```rust
//! use reikna_core::calculations::paving::{calculate_paving_stones, PavingStonesResult};
//! use reikna_core::catalog::ReferenceData;
//!
//! let result = calculate_paving_stones(5.0, 5.0, "hella", ReferenceData::builtin()).unwrap();
//! match result {
//!     PavingStonesResult::Units(units) => {
//!         assert_eq!(units.raw_count, 157);
//!         assert_eq!(units.number_of_stones, 165);
//!     }
//!     PavingStonesResult::AreaPriced(_) => unreachable!(),
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::catalog::{ReferenceData, StoneDimensions, DEFAULT_KEY};
use crate::errors::{checked, require_positive, to_count_u64, CalcError, CalcResult};
use crate::units::{round_to, Meters, SquareMeters};

/// Cutting/breakage allowance, percent
pub const WASTE_PERCENT: u64 = 5;

/// Per-unit stone estimate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PavingUnitEstimate {
    pub product_name: String,
    pub sku: String,
    pub area_m2: f64,
    pub stone: StoneDimensions,
    pub stone_area_m2: f64,
    /// Stones needed before waste
    pub raw_count: u64,
    /// Stones to order, including waste
    pub number_of_stones: u64,
    pub stones_per_m2: f64,
    pub unit_price: f64,
    pub total_cost: f64,
}

/// Area-priced stone system estimate (no per-unit geometry)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PavingAreaEstimate {
    pub product_name: String,
    pub sku: String,
    pub area_m2: f64,
    pub price_per_m2: f64,
    pub total_cost: f64,
    pub note: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "pricing", rename_all = "snake_case")]
pub enum PavingStonesResult {
    Units(PavingUnitEstimate),
    AreaPriced(PavingAreaEstimate),
}

impl PavingStonesResult {
    pub fn area_m2(&self) -> f64 {
        match self {
            PavingStonesResult::Units(u) => u.area_m2,
            PavingStonesResult::AreaPriced(a) => a.area_m2,
        }
    }

    pub fn total_cost(&self) -> f64 {
        match self {
            PavingStonesResult::Units(u) => u.total_cost,
            PavingStonesResult::AreaPriced(a) => a.total_cost,
        }
    }
}

/// `⌈count × (100 + WASTE_PERCENT) / 100⌉` without floating-point drift
pub fn with_waste(count: u64) -> CalcResult<u64> {
    Ok(checked("number_of_stones", count.checked_mul(100 + WASTE_PERCENT))?.div_ceil(100))
}

/// Calculate paving stones for a `length_m × width_m` surface.
///
/// Unknown `stone_type` keys fall back to the catalog default (40×40 cm).
pub fn calculate_paving_stones(
    length_m: f64,
    width_m: f64,
    stone_type: &str,
    data: &ReferenceData,
) -> CalcResult<PavingStonesResult> {
    require_positive("length_m", length_m)?;
    require_positive("width_m", width_m)?;

    // Non-stone catalog entries (sand, ...) are not pavers; use the default stone.
    let mut product = data.lookup_product_info(stone_type);
    if product.dimensions.is_none() && !product.is_area_priced() {
        product = data.lookup_product_info(DEFAULT_KEY);
    }
    let area = SquareMeters::rectangle(Meters(length_m), Meters(width_m));

    if let Some(price_per_m2) = product.area_price() {
        return Ok(PavingStonesResult::AreaPriced(PavingAreaEstimate {
            product_name: product.name.clone(),
            sku: product.sku.clone(),
            area_m2: area.0,
            price_per_m2,
            total_cost: (area.0 * price_per_m2).round(),
            note: "Hellukerfi með blönduðum steinastærðum er verðlagt á fermetra; fjöldi steina fer eftir mynstri."
                .to_string(),
        }));
    }
    let Some(dimensions) = product.dimensions else {
        return Err(CalcError::invalid_input(
            "stone_type",
            stone_type,
            "Catalog entry has neither stone dimensions nor an area price",
        ));
    };

    let stone_area_cm2 = dimensions.face_area_cm2();
    require_positive("stone_area_cm2", stone_area_cm2)?;

    let raw_count = to_count_u64("raw_count", (area.0 * 10_000.0 / stone_area_cm2).ceil())?;
    let number_of_stones = with_waste(raw_count)?;

    Ok(PavingStonesResult::Units(PavingUnitEstimate {
        product_name: product.name.clone(),
        sku: product.sku.clone(),
        area_m2: area.0,
        stone: dimensions,
        stone_area_m2: stone_area_cm2 / 10_000.0,
        raw_count,
        number_of_stones,
        stones_per_m2: round_to(10_000.0 / stone_area_cm2, 2),
        unit_price: product.unit_price,
        total_cost: number_of_stones as f64 * product.unit_price,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn units(result: PavingStonesResult) -> PavingUnitEstimate {
        match result {
            PavingStonesResult::Units(u) => u,
            other => panic!("expected unit estimate, got {:?}", other),
        }
    }

    #[test]
    fn test_default_hella_5x5() {
        let result = units(calculate_paving_stones(5.0, 5.0, "hella", ReferenceData::builtin()).unwrap());
        assert_eq!(result.area_m2, 25.0);
        assert!((result.stone_area_m2 - 0.16).abs() < 1e-12);
        assert_eq!(result.raw_count, 157);
        assert_eq!(result.number_of_stones, 165);
        assert_eq!(result.total_cost, 165.0 * 1290.0);
    }

    #[test]
    fn test_waste_is_exact_integer_ceiling() {
        assert_eq!(with_waste(100).unwrap(), 105);
        assert_eq!(with_waste(157).unwrap(), 165);
        assert_eq!(with_waste(1).unwrap(), 2);
        assert_eq!(with_waste(20).unwrap(), 21);
        assert!(with_waste(u64::MAX / 100).is_err());
    }

    #[test]
    fn test_huge_surfaces_are_rejected() {
        let err = calculate_paving_stones(1e12, 1e12, "hella", ReferenceData::builtin()).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        let err = calculate_paving_stones(1e200, 1e200, "hella", ReferenceData::builtin()).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_small_stone() {
        // 2 × 3 = 6 m², holmsteinn 21×14 = 294 cm² → ⌈204.08⌉ = 205 → ⌈215.25⌉ = 216
        let result = units(calculate_paving_stones(2.0, 3.0, "holmsteinn", ReferenceData::builtin()).unwrap());
        assert_eq!(result.raw_count, 205);
        assert_eq!(result.number_of_stones, 216);
    }

    #[test]
    fn test_modena_is_area_priced() {
        let result = calculate_paving_stones(4.0, 5.0, "Modena grátt", ReferenceData::builtin()).unwrap();
        match result {
            PavingStonesResult::AreaPriced(a) => {
                assert_eq!(a.area_m2, 20.0);
                assert_eq!(a.total_cost, 20.0 * 8900.0);
            }
            other => panic!("expected area pricing, got {:?}", other),
        }
    }

    #[test]
    fn test_non_stone_product_uses_default_stone() {
        let result = units(calculate_paving_stones(5.0, 5.0, "fugusandur", ReferenceData::builtin()).unwrap());
        assert_eq!(result.sku, "HEL-4040-6");
    }

    #[test]
    fn test_rejects_non_positive_dimensions() {
        assert!(calculate_paving_stones(0.0, 5.0, "hella", ReferenceData::builtin()).is_err());
        assert!(calculate_paving_stones(5.0, -1.0, "hella", ReferenceData::builtin()).is_err());
    }
}
