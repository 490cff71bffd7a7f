//! Precast step configuration for a height difference.
//!
//! A three-rung decision ladder, each outcome terminal:
//!
//! 1. **Standard**: `n = round(h / 15.5)` steps with 34 cm treads fit in the
//!    available run `(n - 1) × 34`.
//! 2. **TreadAdjusted**: the run is too long, so treads shrink to
//!    `space / (n - 1)`, which is still at least 26 cm.
//! 3. **CountAndRiserAdjusted**: shrinking the tread would go below 26 cm,
//!    so the step count drops to what fits at 26 cm and risers grow.
//!
//! Risers above 18 cm are flagged.

use serde::{Deserialize, Serialize};

use crate::errors::{checked, require_positive, to_count, CalcResult};
use crate::units::round_to;

pub const STANDARD_RISER_CM: f64 = 15.5;
pub const STANDARD_TREAD_CM: f64 = 34.0;
pub const MIN_TREAD_CM: f64 = 26.0;
pub const MAX_COMFORT_RISER_CM: f64 = 18.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepLayout {
    pub step_count: u32,
    pub riser_height_cm: f64,
    pub tread_depth_cm: f64,
    pub total_run_cm: f64,
    pub height_difference_cm: f64,
    pub available_space_cm: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "fit", rename_all = "snake_case")]
pub enum StepConfiguration {
    Standard(StepLayout),
    TreadAdjusted(StepLayout),
    CountAndRiserAdjusted(StepLayout),
}

impl StepConfiguration {
    pub fn layout(&self) -> &StepLayout {
        match self {
            StepConfiguration::Standard(layout)
            | StepConfiguration::TreadAdjusted(layout)
            | StepConfiguration::CountAndRiserAdjusted(layout) => layout,
        }
    }
}

fn layout(step_count: u32, tread_depth_cm: f64, height_cm: f64, space_cm: f64) -> StepLayout {
    let riser = height_cm / step_count as f64;
    let mut warnings = Vec::new();
    if riser > MAX_COMFORT_RISER_CM {
        warnings.push(format!(
            "Uppstig {:.1} cm er hærra en {} cm þægindamörk",
            riser, MAX_COMFORT_RISER_CM
        ));
    }
    StepLayout {
        step_count,
        riser_height_cm: round_to(riser, 1),
        tread_depth_cm: round_to(tread_depth_cm, 1),
        total_run_cm: round_to(step_count.saturating_sub(1) as f64 * tread_depth_cm, 1),
        height_difference_cm: height_cm,
        available_space_cm: space_cm,
        warnings,
    }
}

pub fn calculate_step_configuration(height_difference_cm: f64, available_space_cm: f64) -> CalcResult<StepConfiguration> {
    require_positive("height_difference_cm", height_difference_cm)?;
    require_positive("available_space_cm", available_space_cm)?;

    let ideal = to_count("step_count", (height_difference_cm / STANDARD_RISER_CM).round())?.max(1);
    let treads = ideal.saturating_sub(1) as f64;
    let required = treads * STANDARD_TREAD_CM;

    if required <= available_space_cm {
        return Ok(StepConfiguration::Standard(layout(
            ideal,
            STANDARD_TREAD_CM,
            height_difference_cm,
            available_space_cm,
        )));
    }

    let tread = available_space_cm / treads;
    if tread >= MIN_TREAD_CM {
        return Ok(StepConfiguration::TreadAdjusted(layout(
            ideal,
            tread,
            height_difference_cm,
            available_space_cm,
        )));
    }

    let count = checked("step_count", to_count("step_count", (available_space_cm / MIN_TREAD_CM).floor())?.checked_add(1))?;
    let tread = if count > 1 {
        (available_space_cm / (count - 1) as f64).min(STANDARD_TREAD_CM)
    } else {
        STANDARD_TREAD_CM
    };
    Ok(StepConfiguration::CountAndRiserAdjusted(layout(
        count,
        tread,
        height_difference_cm,
        available_space_cm,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_fit() {
        let config = calculate_step_configuration(100.0, 200.0).unwrap();
        match &config {
            StepConfiguration::Standard(layout) => {
                assert_eq!(layout.step_count, 6);
                assert_eq!(layout.riser_height_cm, 16.7);
                assert_eq!(layout.tread_depth_cm, 34.0);
                assert_eq!(layout.total_run_cm, 170.0);
                assert!(layout.warnings.is_empty());
            }
            other => panic!("expected standard fit, got {:?}", other),
        }
    }

    #[test]
    fn test_tread_adjusted() {
        // 6 steps need 170 cm; 150 / 5 = 30 cm ≥ 26
        let config = calculate_step_configuration(100.0, 150.0).unwrap();
        match config {
            StepConfiguration::TreadAdjusted(layout) => {
                assert_eq!(layout.step_count, 6);
                assert_eq!(layout.tread_depth_cm, 30.0);
            }
            other => panic!("expected tread adjustment, got {:?}", other),
        }
    }

    #[test]
    fn test_count_and_riser_adjusted() {
        // 100 / 5 = 20 cm < 26 → ⌊100 / 26⌋ + 1 = 4 steps of 25 cm risers
        let config = calculate_step_configuration(100.0, 100.0).unwrap();
        match config {
            StepConfiguration::CountAndRiserAdjusted(layout) => {
                assert_eq!(layout.step_count, 4);
                assert_eq!(layout.riser_height_cm, 25.0);
                assert!(layout.tread_depth_cm >= MIN_TREAD_CM);
                assert_eq!(layout.warnings.len(), 1);
            }
            other => panic!("expected count adjustment, got {:?}", other),
        }
    }

    #[test]
    fn test_small_height_is_single_step() {
        let config = calculate_step_configuration(5.0, 50.0).unwrap();
        assert_eq!(config.layout().step_count, 1);
        assert_eq!(config.layout().total_run_cm, 0.0);
    }

    #[test]
    fn test_rejects_non_positive_inputs() {
        assert!(calculate_step_configuration(0.0, 100.0).is_err());
        assert!(calculate_step_configuration(100.0, -5.0).is_err());
    }

    #[test]
    fn test_height_too_large_to_count() {
        let err = calculate_step_configuration(1e12, 200.0).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        // a huge height that still counts falls back to the space-limited layout
        let config = calculate_step_configuration(1e9, 200.0).unwrap();
        assert!(matches!(config, StepConfiguration::CountAndRiserAdjusted(_)));
    }
}
