//! # Precast Elements
//!
//! Concrete components cast off-site and installed as finished units:
//! bin shelters, posts, benches, planters, steps and barriers. Each
//! calculator reads its product table from [`ReferenceData`](crate::catalog::ReferenceData).

pub mod barriers;
pub mod benches;
pub mod bin_shelter;
pub mod planters;
pub mod posts;
pub mod steps;

pub use barriers::{calculate_barrier_requirements, BarrierPlacement, BarrierResult};
pub use benches::{calculate_bench_placement, BenchArrangement, BenchPlacementResult};
pub use bin_shelter::{calculate_bin_shelter_requirements, BinShelterResult, ShelterLayout, ShelterUnit};
pub use planters::{calculate_planters, PlanterResult};
pub use posts::{calculate_post_spacing, FoundationPlan, PostSpacingResult};
pub use steps::{calculate_step_configuration, StepConfiguration, StepLayout};
