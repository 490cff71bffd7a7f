//! Bench placement.
//!
//! Space requirements depend on the arrangement:
//!
//! - **Line**: benches end to end with 1.5 m between them, 1.0 m clearance
//!   in front and 0.5 m behind.
//! - **Facing**: two rows of line-arranged benches with a 2.0 m gap.
//! - **Circle**: benches around a circle of diameter `d`. At most
//!   `⌊π·d / bench_length⌋` fit; asking for more is a capacity violation,
//!   not an error.
//! - **Random**: footprint × 6.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::catalog::{BenchTypeSpec, ReferenceData};
use crate::errors::{require_count, require_positive, CalcError, CalcResult, CapacityViolation, Constrained};
use crate::text::fold;
use crate::units::{round_to, Centimeters, Meters};

pub const LINE_SPACING_M: f64 = 1.5;
pub const FRONT_CLEARANCE_M: f64 = 1.0;
pub const BACK_CLEARANCE_M: f64 = 0.5;
pub const FACING_GAP_M: f64 = 2.0;
pub const RANDOM_AREA_MULTIPLIER: f64 = 6.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BenchArrangement {
    Line,
    Facing,
    Circle { diameter_m: f64 },
    Random,
}

impl BenchArrangement {
    /// Build an arrangement from its name and, for circles, a diameter.
    ///
    /// Accepts English and Icelandic names ("line"/"röð", "facing"/"á móti",
    /// "circle"/"hringur", "random"/"dreift").
    pub fn from_parts(name: &str, circle_diameter_m: Option<f64>) -> CalcResult<Self> {
        let folded = fold(name);
        match folded.as_str() {
            "line" | "rod" | "roð" | "i roð" => Ok(BenchArrangement::Line),
            "facing" | "a moti" | "andspænis" | "gegnt" => Ok(BenchArrangement::Facing),
            "circle" | "hringur" | "hring" | "i hring" => {
                let diameter_m = circle_diameter_m.ok_or_else(|| CalcError::missing_field("circle_diameter"))?;
                require_positive("circle_diameter", diameter_m)?;
                Ok(BenchArrangement::Circle { diameter_m })
            }
            "random" | "dreift" | "handahof" => Ok(BenchArrangement::Random),
            _ => Err(CalcError::invalid_input(
                "bench_arrangement",
                name,
                "Expected line, facing, circle or random",
            )),
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            BenchArrangement::Line => "Í röð",
            BenchArrangement::Facing => "Á móti hvor öðrum",
            BenchArrangement::Circle { .. } => "Í hring",
            BenchArrangement::Random => "Dreift",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchPlacementResult {
    pub bench_name: String,
    pub bench_count: u32,
    pub arrangement: BenchArrangement,
    pub total_seats: u64,
    pub layout_length_m: f64,
    pub layout_depth_m: f64,
    pub required_area_m2: f64,
    pub total_weight_kg: f64,
    pub total_price: f64,
}

/// Length of `count` benches in a row with the standard spacing
fn row_length(count: u32, bench_length_m: f64) -> f64 {
    count as f64 * bench_length_m + count.saturating_sub(1) as f64 * LINE_SPACING_M
}

pub fn calculate_bench_placement(
    bench_count: u32,
    bench_type: &str,
    arrangement: BenchArrangement,
    data: &ReferenceData,
) -> CalcResult<Constrained<BenchPlacementResult>> {
    require_count("bench_count", bench_count)?;
    let spec: &BenchTypeSpec = data.bench_type(bench_type);
    let length_m = Meters::from(Centimeters(require_positive("bench.length_cm", spec.length_cm)?)).0;
    let depth_m = Meters::from(Centimeters(spec.depth_cm)).0;
    let row_depth = depth_m + FRONT_CLEARANCE_M + BACK_CLEARANCE_M;

    let (layout_length_m, layout_depth_m) = match arrangement {
        BenchArrangement::Line => (row_length(bench_count, length_m), row_depth),
        BenchArrangement::Facing => {
            let per_row = bench_count.div_ceil(2);
            (
                row_length(per_row, length_m),
                2.0 * (depth_m + BACK_CLEARANCE_M) + FACING_GAP_M,
            )
        }
        BenchArrangement::Circle { diameter_m } => {
            require_positive("circle_diameter", diameter_m)?;
            // saturates: a circle that holds u32::MAX benches holds any count
            let capacity = (PI * diameter_m / length_m).floor().min(u32::MAX as f64) as u32;
            if bench_count > capacity {
                return Ok(Constrained::Violation(CapacityViolation {
                    constraint: "circle_capacity".to_string(),
                    requested: bench_count,
                    capacity,
                    message: format!(
                        "Aðeins {} bekkir af gerðinni {} komast fyrir í hring með {} m þvermál",
                        capacity, spec.name, diameter_m
                    ),
                }));
            }
            let outer = diameter_m + 2.0 * (depth_m + BACK_CLEARANCE_M);
            (outer, outer)
        }
        BenchArrangement::Random => {
            let side = (bench_count as f64 * length_m * depth_m * RANDOM_AREA_MULTIPLIER).sqrt();
            (side, side)
        }
    };

    Ok(Constrained::Satisfied(BenchPlacementResult {
        bench_name: spec.name.clone(),
        bench_count,
        arrangement,
        total_seats: spec.seats as u64 * bench_count as u64,
        layout_length_m: round_to(layout_length_m, 2),
        layout_depth_m: round_to(layout_depth_m, 2),
        required_area_m2: round_to(layout_length_m * layout_depth_m, 2),
        total_weight_kg: spec.weight_kg * bench_count as f64,
        total_price: spec.price * bench_count as f64,
    }))
}
