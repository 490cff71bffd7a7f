//! # Formula Library
//!
//! Pure calculation functions for paving, sand, concrete, prefabricated
//! housing and precast elements. Every function validates its own inputs
//! and returns [`CalcResult`](crate::errors::CalcResult); none of them
//! reads the query text.
//!
//! ## Available Calculations
//!
//! - [`paving`] - Paving stone counts and area-priced stone systems
//! - [`sand`] - Bedding sand and joint sand
//! - [`concrete`] - Slab and column volumes, type recommendation, CO₂
//! - [`housing`] - Prefabricated housing time, cost, materials, timeline
//! - [`precast`] - Bin shelters, posts, benches, planters, steps, barriers
//! - [`pricing`] - Catalog price with VAT

pub mod concrete;
pub mod housing;
pub mod paving;
pub mod precast;
pub mod pricing;
pub mod sand;

use serde::{Deserialize, Serialize};

use crate::errors::{CapacityViolation, Constrained};
use crate::intent::CalculationKind;

pub use concrete::{
    calculate_column_volume, calculate_column_with_post_volume, calculate_concrete_volume, estimate_carbon_footprint,
    recommend_concrete_type, CarbonFootprintResult, ColumnVolumeResult, ConcreteRecommendation, ConcreteVolumeResult,
};
pub use housing::{
    estimate_construction_cost, estimate_construction_time, estimate_environmental_impact,
    estimate_material_requirements, estimate_project_timeline, ConstructionCostResult, ConstructionTimeResult,
    EnvironmentalImpactResult, MaterialRequirementsResult, ProjectTimelineResult,
};
pub use paving::{calculate_paving_stones, PavingStonesResult};
pub use precast::{
    calculate_barrier_requirements, calculate_bench_placement, calculate_bin_shelter_requirements,
    calculate_planters, calculate_post_spacing, calculate_step_configuration, BarrierResult, BenchArrangement,
    BenchPlacementResult, BinShelterResult, PlanterResult, PostSpacingResult, StepConfiguration,
};
pub use pricing::{calculate_price, PriceResult};
pub use sand::{calculate_base_sand, calculate_joint_sand, BaseSandResult, JointSandInput, JointSandResult};

/// Result of any routed calculation.
///
/// Serializes with a `kind` discriminator matching [`CalculationKind`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum CalculationResult {
    PavingStones(PavingStonesResult),
    BaseSand(BaseSandResult),
    JointSand(JointSandResult),
    ConcreteVolume(ConcreteVolumeResult),
    ColumnVolume(ColumnVolumeResult),
    ColumnWithPostVolume(ColumnVolumeResult),
    ConcreteTypeRecommendation(ConcreteRecommendation),
    CarbonFootprint(CarbonFootprintResult),
    ConstructionTime(ConstructionTimeResult),
    ConstructionCost(ConstructionCostResult),
    MaterialRequirements(MaterialRequirementsResult),
    EnvironmentalImpact(EnvironmentalImpactResult),
    ProjectTimeline(ProjectTimelineResult),
    BinShelterRequirements(BinShelterResult),
    PostSpacing(PostSpacingResult),
    BenchPlacement(Constrained<BenchPlacementResult>),
    PlanterCalculation(PlanterResult),
    StepConfiguration(StepConfiguration),
    BarrierRequirements(BarrierResult),
    PriceCalculation(PriceResult),
}

impl CalculationResult {
    pub fn kind(&self) -> CalculationKind {
        match self {
            CalculationResult::PavingStones(_) => CalculationKind::PavingStones,
            CalculationResult::BaseSand(_) => CalculationKind::BaseSand,
            CalculationResult::JointSand(_) => CalculationKind::JointSand,
            CalculationResult::ConcreteVolume(_) => CalculationKind::ConcreteVolume,
            CalculationResult::ColumnVolume(_) => CalculationKind::ColumnVolume,
            CalculationResult::ColumnWithPostVolume(_) => CalculationKind::ColumnWithPostVolume,
            CalculationResult::ConcreteTypeRecommendation(_) => CalculationKind::ConcreteTypeRecommendation,
            CalculationResult::CarbonFootprint(_) => CalculationKind::CarbonFootprint,
            CalculationResult::ConstructionTime(_) => CalculationKind::ConstructionTime,
            CalculationResult::ConstructionCost(_) => CalculationKind::ConstructionCost,
            CalculationResult::MaterialRequirements(_) => CalculationKind::MaterialRequirements,
            CalculationResult::EnvironmentalImpact(_) => CalculationKind::EnvironmentalImpact,
            CalculationResult::ProjectTimeline(_) => CalculationKind::ProjectTimeline,
            CalculationResult::BinShelterRequirements(_) => CalculationKind::BinShelterRequirements,
            CalculationResult::PostSpacing(_) => CalculationKind::PostSpacing,
            CalculationResult::BenchPlacement(_) => CalculationKind::BenchPlacement,
            CalculationResult::PlanterCalculation(_) => CalculationKind::PlanterCalculation,
            CalculationResult::StepConfiguration(_) => CalculationKind::StepConfiguration,
            CalculationResult::BarrierRequirements(_) => CalculationKind::BarrierRequirements,
            CalculationResult::PriceCalculation(_) => CalculationKind::PriceCalculation,
        }
    }

    /// The capacity violation, if this result carries one instead of a value
    pub fn capacity_violation(&self) -> Option<&CapacityViolation> {
        match self {
            CalculationResult::BenchPlacement(Constrained::Violation(violation)) => Some(violation),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ReferenceData;

    #[test]
    fn test_result_serializes_with_kind_tag() {
        let column = calculate_column_volume(30.0, 2.5).unwrap();
        let result = CalculationResult::ColumnVolume(column);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["kind"], "columnVolume");
        assert!(json.get("post").is_none());

        let back: CalculationResult = serde_json::from_value(json).unwrap();
        assert_eq!(back.kind(), CalculationKind::ColumnVolume);
    }

    #[test]
    fn test_nested_tags_survive() {
        let placement = calculate_bench_placement(
            20,
            "bekkur",
            BenchArrangement::Circle { diameter_m: 4.0 },
            ReferenceData::builtin(),
        )
        .unwrap();
        let result = CalculationResult::BenchPlacement(placement);
        assert!(result.capacity_violation().is_some());

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["kind"], "benchPlacement");
        assert_eq!(json["status"], "violation");
    }
}
