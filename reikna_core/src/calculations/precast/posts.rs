//! Post and bollard spacing along a run, with cast-in-place footings.
//!
//! ```text
//! post_count      = ⌈length / spacing⌉ + 1
//! actual_spacing  = length / (post_count - 1)
//! footing volume  = π × (d/2)² × depth        (per post)
//! ```

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::catalog::ReferenceData;
use crate::errors::{checked, require_positive, to_count, CalcError, CalcResult};
use crate::units::{round_to, Centimeters, CubicMeters, Meters};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FoundationPlan {
    NotRequired {
        reason: String,
    },
    Cylindrical {
        diameter_cm: f64,
        depth_cm: f64,
        volume_per_post_m3: f64,
        total_volume_m3: f64,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostSpacingResult {
    pub post_name: String,
    pub length_m: f64,
    pub requested_spacing_m: f64,
    pub post_count: u32,
    pub actual_spacing_m: f64,
    pub above_ground_cm: f64,
    pub below_ground_cm: f64,
    pub total_weight_kg: f64,
    pub foundation: FoundationPlan,
    pub total_price: f64,
}

/// Posts for a `length_m` run. `spacing_m` overrides the type's recommended spacing.
pub fn calculate_post_spacing(
    length_m: f64,
    post_type: &str,
    spacing_m: Option<f64>,
    data: &ReferenceData,
) -> CalcResult<PostSpacingResult> {
    require_positive("length_m", length_m)?;
    let spec = data.post_type(post_type);
    let spacing = require_positive("spacing_m", spacing_m.unwrap_or(spec.spacing_m))?;

    let post_count = checked("post_count", to_count("post_count", (length_m / spacing).ceil())?.checked_add(1))?;
    let actual_spacing_m = round_to(length_m / (post_count - 1).max(1) as f64, 2);

    let foundation = if spec.requires_foundation {
        let footing = spec.foundation.ok_or_else(|| CalcError::missing_field("post_type.foundation"))?;
        let diameter = require_positive("foundation.diameter_cm", footing.diameter_cm)?;
        let depth = require_positive("foundation.depth_cm", footing.depth_cm)?;
        let radius_m = Meters::from(Centimeters(diameter)).0 / 2.0;
        let per_post = CubicMeters(PI * radius_m * radius_m * Meters::from(Centimeters(depth)).0);
        FoundationPlan::Cylindrical {
            diameter_cm: diameter,
            depth_cm: depth,
            volume_per_post_m3: round_to(per_post.0, 3),
            total_volume_m3: round_to(per_post.0 * post_count as f64, 3),
        }
    } else {
        FoundationPlan::NotRequired {
            reason: format!("{} er boltaður á yfirborð og þarf ekki undirstöðu", spec.name),
        }
    };

    Ok(PostSpacingResult {
        post_name: spec.name.clone(),
        length_m,
        requested_spacing_m: spacing,
        post_count,
        actual_spacing_m,
        above_ground_cm: spec.above_ground_cm,
        below_ground_cm: spec.below_ground_cm,
        total_weight_kg: spec.weight_kg * post_count as f64,
        foundation,
        total_price: spec.price * post_count as f64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bollards_along_ten_meters() {
        let result = calculate_post_spacing(10.0, "pollari", None, ReferenceData::builtin()).unwrap();
        // ⌈10 / 1.5⌉ + 1
        assert_eq!(result.post_count, 8);
        assert_eq!(result.actual_spacing_m, 1.43);
        assert_eq!(result.total_price, 8.0 * 39_900.0);
        match result.foundation {
            FoundationPlan::Cylindrical { volume_per_post_m3, .. } => {
                // π × 0.2² × 0.7
                assert_eq!(volume_per_post_m3, 0.088);
            }
            other => panic!("expected footing, got {:?}", other),
        }
    }

    #[test]
    fn test_explicit_spacing() {
        let result = calculate_post_spacing(10.0, "pollari", Some(2.0), ReferenceData::builtin()).unwrap();
        assert_eq!(result.post_count, 6);
        assert_eq!(result.actual_spacing_m, 2.0);
    }

    #[test]
    fn test_surface_mounted_needs_no_foundation() {
        let result = calculate_post_spacing(6.0, "yfirbordsfestur", None, ReferenceData::builtin()).unwrap();
        assert!(matches!(result.foundation, FoundationPlan::NotRequired { .. }));
    }

    #[test]
    fn test_missing_footing_dimensions() {
        let mut data = ReferenceData::builtin().clone();
        let spec = data.post_types.get_mut("pollari").unwrap();
        spec.foundation = None;
        let err = calculate_post_spacing(10.0, "pollari", None, &data).unwrap_err();
        assert_eq!(err.error_code(), "MISSING_FIELD");
    }

    #[test]
    fn test_rejects_zero_length() {
        assert!(calculate_post_spacing(0.0, "pollari", None, ReferenceData::builtin()).is_err());
        assert!(calculate_post_spacing(5.0, "pollari", Some(0.0), ReferenceData::builtin()).is_err());
    }

    #[test]
    fn test_run_too_long_to_count() {
        for length_m in [1e11, 1e300] {
            let err = calculate_post_spacing(length_m, "default", None, ReferenceData::builtin()).unwrap_err();
            assert_eq!(err.error_code(), "INVALID_INPUT");
        }
        // ⌈length / spacing⌉ is exactly u32::MAX, so the trailing post overflows
        let err = calculate_post_spacing(u32::MAX as f64, "default", Some(1.0), ReferenceData::builtin()).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }
}
