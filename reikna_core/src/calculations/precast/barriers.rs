//! Traffic barriers and speed bumps along a run.
//!
//! Modular barriers pick one unit size for the whole run by length:
//! up to 10 m the short unit, up to 50 m the medium unit, beyond that the
//! long unit. Speed bumps are placed one per interval, at least one.
//! In both cases `count = ⌈run_cm / unit_cm⌉`.

use serde::{Deserialize, Serialize};

use crate::catalog::{BarrierLayout, BarrierVariant, ReferenceData};
use crate::errors::{require_positive, to_count, CalcResult};
use crate::units::{Centimeters, Meters};

pub const SHORT_RUN_MAX_M: f64 = 10.0;
pub const MEDIUM_RUN_MAX_M: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BarrierPlacement {
    Continuous,
    Interval,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarrierResult {
    pub barrier_name: String,
    pub length_m: f64,
    pub placement: BarrierPlacement,
    pub variant: BarrierVariant,
    pub count: u32,
    pub total_weight_kg: f64,
    pub total_price: f64,
}

pub fn calculate_barrier_requirements(length_m: f64, barrier_type: &str, data: &ReferenceData) -> CalcResult<BarrierResult> {
    require_positive("length_m", length_m)?;
    let spec = data.barrier_type(barrier_type);
    let run_cm = Centimeters::from(Meters(length_m)).0;

    let (placement, variant, count) = match &spec.layout {
        BarrierLayout::Modular { short, medium, long } => {
            let variant = if length_m <= SHORT_RUN_MAX_M {
                short
            } else if length_m <= MEDIUM_RUN_MAX_M {
                medium
            } else {
                long
            };
            let unit_cm = require_positive("barrier.length_cm", variant.length_cm)?;
            (BarrierPlacement::Continuous, variant, to_count("count", (run_cm / unit_cm).ceil())?)
        }
        BarrierLayout::SpeedBump { interval_cm, unit } => {
            let interval = require_positive("barrier.interval_cm", *interval_cm)?;
            let count = to_count("count", (run_cm / interval).ceil())?.max(1);
            (BarrierPlacement::Interval, unit, count)
        }
    };

    Ok(BarrierResult {
        barrier_name: spec.name.clone(),
        length_m,
        placement,
        variant: variant.clone(),
        count,
        total_weight_kg: variant.weight_kg * count as f64,
        total_price: variant.price * count as f64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_medium_run_uses_two_meter_units() {
        let result = calculate_barrier_requirements(20.0, "talmi", ReferenceData::builtin()).unwrap();
        assert_eq!(result.variant.length_cm, 200.0);
        assert_eq!(result.count, 10);
        assert_eq!(result.total_price, 10.0 * 99_000.0);
    }

    #[test]
    fn test_length_thresholds() {
        let data = ReferenceData::builtin();
        assert_eq!(calculate_barrier_requirements(10.0, "talmi", data).unwrap().variant.length_cm, 100.0);
        assert_eq!(calculate_barrier_requirements(10.5, "talmi", data).unwrap().variant.length_cm, 200.0);
        assert_eq!(calculate_barrier_requirements(50.0, "talmi", data).unwrap().variant.length_cm, 200.0);
        let long = calculate_barrier_requirements(61.0, "talmi", data).unwrap();
        assert_eq!(long.variant.length_cm, 300.0);
        assert_eq!(long.count, 21);
    }

    #[test]
    fn test_speed_bumps_one_per_interval() {
        let data = ReferenceData::builtin();
        let result = calculate_barrier_requirements(120.0, "hradahindrun", data).unwrap();
        assert_eq!(result.placement, BarrierPlacement::Interval);
        assert_eq!(result.count, 3);
        let short = calculate_barrier_requirements(8.0, "hradahindrun", data).unwrap();
        assert_eq!(short.count, 1);
    }

    #[test]
    fn test_run_too_long_to_count() {
        let err = calculate_barrier_requirements(1e12, "talmi", ReferenceData::builtin()).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }
}
