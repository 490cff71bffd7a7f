//! # Calculation Router
//!
//! Maps a [`CalculationKind`] and a [`ParameterSet`] onto one Formula
//! Library call. Every formula argument is resolved in the same order:
//!
//! 1. the explicitly extracted value
//! 2. a value derived from other extracted fields
//! 3. the default from [`RouterDefaults`]
//!
//! The router does not validate. A resolved argument that is out of range
//! is passed through and rejected by the formula.
//!
//! ## Derived values
//!
//! | Kind | Argument | Derived from |
//! |------|----------|--------------|
//! | surface kinds | length × width | `area` alone (as `area × 1`) |
//! | planters | length × width | `area` alone (as `√area × √area`) |
//! | joint sand | area | length × width |
//! | joint sand | stone size / thickness | the stone type's catalog dimensions |
//! | housing | area | length × width |
//! | carbon footprint | volume | length × width × thickness |
//! | bench placement | circle diameter | `diameter` (cm → m) |
//! | post spacing | spacing | the post type's recommended spacing |
//! | price | product | stone type |
//!
//! ## Example
//!
//! ```rust
//! use reikna_core::catalog::ReferenceData;
//! use reikna_core::intent::{CalculationKind, ParameterSet};
//! use reikna_core::router::compute;
//! use reikna_core::settings::Settings;
//!
//! let params = ParameterSet { length: Some(5.0), width: Some(4.0), ..Default::default() };
//! let result = compute(CalculationKind::ConcreteVolume, &params, &Settings::default(), ReferenceData::builtin()).unwrap();
//! assert_eq!(result.kind(), CalculationKind::ConcreteVolume);
//! ```

use tracing::debug;

use crate::calculations::{self as calc, CalculationResult, JointSandInput};
use crate::calculations::precast::BenchArrangement;
use crate::calculations::sand::JointPattern;
use crate::catalog::ReferenceData;
use crate::errors::CalcResult;
use crate::intent::{CalculationKind, ParameterSet};
use crate::settings::{RouterDefaults, Settings};

/// Argument resolution over one parameter set
struct Resolver<'a> {
    params: &'a ParameterSet,
    defaults: &'a RouterDefaults,
}

impl<'a> Resolver<'a> {
    fn text(value: &'a Option<String>, default: &'a str) -> &'a str {
        value.as_deref().unwrap_or(default)
    }

    /// Length × width of a surface. A bare area is used as an `area × 1` strip.
    fn surface(&self) -> (f64, f64) {
        let p = self.params;
        match (p.length, p.width, p.area) {
            (Some(length), Some(width), _) => (length, width),
            (None, None, Some(area)) => (area, 1.0),
            (length, width, _) => (
                length.unwrap_or(self.defaults.length_m),
                width.unwrap_or(self.defaults.width_m),
            ),
        }
    }

    /// Like [`surface`](Self::surface), but a bare area becomes a square.
    fn square_surface(&self) -> (f64, f64) {
        let p = self.params;
        match (p.length, p.width, p.area) {
            (None, None, Some(area)) => (area.sqrt(), area.sqrt()),
            _ => self.surface(),
        }
    }

    fn surface_area(&self) -> f64 {
        self.params.area.unwrap_or_else(|| {
            let (length, width) = self.surface();
            length * width
        })
    }

    fn building_area(&self) -> f64 {
        let p = self.params;
        p.area
            .or_else(|| p.length.zip(p.width).map(|(l, w)| l * w))
            .unwrap_or(self.defaults.building_area_m2)
    }

    fn building_type(&self) -> &'a str {
        Self::text(&self.params.building_type, &self.defaults.building_type)
    }

    fn stone_type(&self) -> &'a str {
        Self::text(&self.params.stone_type, &self.defaults.stone_type)
    }
}

/// Run the formula for `kind` over `params`.
pub fn compute(
    kind: CalculationKind,
    params: &ParameterSet,
    settings: &Settings,
    data: &ReferenceData,
) -> CalcResult<CalculationResult> {
    let defaults = &settings.defaults;
    let r = Resolver { params, defaults };
    let p = params;

    let result = match kind {
        CalculationKind::PavingStones => {
            let (length_m, width_m) = r.surface();
            let stone_type = r.stone_type();
            debug!(%kind, length_m, width_m, stone_type, "resolved arguments");
            CalculationResult::PavingStones(calc::calculate_paving_stones(length_m, width_m, stone_type, data)?)
        }
        CalculationKind::BaseSand => {
            let (length_m, width_m) = r.surface();
            let thickness_cm = p.thickness.unwrap_or(defaults.sand_thickness_cm);
            debug!(%kind, length_m, width_m, thickness_cm, "resolved arguments");
            CalculationResult::BaseSand(calc::calculate_base_sand(length_m, width_m, thickness_cm, data)?)
        }
        CalculationKind::JointSand => {
            let stone = data.lookup_product_info(r.stone_type()).dimensions;
            let input = JointSandInput {
                area_m2: r.surface_area(),
                stone_size_cm: p
                    .stone_size
                    .or_else(|| stone.map(|d| d.length_cm.max(d.width_cm)))
                    .unwrap_or(defaults.stone_size_cm),
                stone_thickness_cm: p
                    .thickness
                    .or_else(|| stone.map(|d| d.thickness_cm))
                    .unwrap_or(defaults.stone_thickness_cm),
                joint_width_mm: p.joint_width.unwrap_or(defaults.joint_width_mm),
                pattern: JointPattern::from_str_flexible(Resolver::text(&p.joint_pattern, &defaults.joint_pattern)),
                use_polymer_sand: p.use_polymer_sand.unwrap_or(false),
            };
            debug!(%kind, ?input, "resolved arguments");
            CalculationResult::JointSand(calc::calculate_joint_sand(&input, data)?)
        }
        CalculationKind::ConcreteVolume => {
            let (length_m, width_m) = r.surface();
            let thickness_cm = p.thickness.unwrap_or(defaults.slab_thickness_cm);
            debug!(%kind, length_m, width_m, thickness_cm, "resolved arguments");
            CalculationResult::ConcreteVolume(calc::calculate_concrete_volume(length_m, width_m, thickness_cm, data)?)
        }
        CalculationKind::ColumnVolume => {
            let diameter_cm = p.diameter.unwrap_or(defaults.column_diameter_cm);
            let height_m = p.height.unwrap_or(defaults.column_height_m);
            debug!(%kind, diameter_cm, height_m, "resolved arguments");
            CalculationResult::ColumnVolume(calc::calculate_column_volume(diameter_cm, height_m)?)
        }
        CalculationKind::ColumnWithPostVolume => {
            let diameter_cm = p.diameter.unwrap_or(defaults.column_diameter_cm);
            let height_m = p.height.unwrap_or(defaults.column_height_m);
            let post_width_cm = p.post_width.unwrap_or(defaults.post_width_cm);
            let post_height_cm = p.post_height.unwrap_or(defaults.post_height_cm);
            let post_count = p.post_count.unwrap_or(defaults.post_count);
            debug!(%kind, diameter_cm, height_m, post_width_cm, post_height_cm, post_count, "resolved arguments");
            CalculationResult::ColumnWithPostVolume(calc::calculate_column_with_post_volume(
                diameter_cm,
                height_m,
                post_width_cm,
                post_height_cm,
                post_count,
            )?)
        }
        CalculationKind::ConcreteTypeRecommendation => {
            let usage = Resolver::text(&p.usage, &defaults.usage);
            debug!(%kind, usage, "resolved arguments");
            CalculationResult::ConcreteTypeRecommendation(calc::recommend_concrete_type(usage, data))
        }
        CalculationKind::CarbonFootprint => {
            let volume_m3 = p
                .volume
                .or_else(|| match (p.length, p.width, p.thickness) {
                    (Some(l), Some(w), Some(t)) => Some(l * w * t / 100.0),
                    _ => None,
                })
                .unwrap_or(defaults.concrete_volume_m3);
            let concrete_type = Resolver::text(&p.concrete_type, &defaults.concrete_type);
            debug!(%kind, volume_m3, concrete_type, "resolved arguments");
            CalculationResult::CarbonFootprint(calc::estimate_carbon_footprint(volume_m3, concrete_type, data)?)
        }
        CalculationKind::ConstructionTime => {
            let (area_m2, building_type) = (r.building_area(), r.building_type());
            debug!(%kind, area_m2, building_type, "resolved arguments");
            CalculationResult::ConstructionTime(calc::estimate_construction_time(area_m2, building_type, data)?)
        }
        CalculationKind::ConstructionCost => {
            let (area_m2, building_type) = (r.building_area(), r.building_type());
            debug!(%kind, area_m2, building_type, "resolved arguments");
            CalculationResult::ConstructionCost(calc::estimate_construction_cost(area_m2, building_type, data)?)
        }
        CalculationKind::MaterialRequirements => {
            let (area_m2, building_type) = (r.building_area(), r.building_type());
            debug!(%kind, area_m2, building_type, "resolved arguments");
            CalculationResult::MaterialRequirements(calc::estimate_material_requirements(area_m2, building_type, data)?)
        }
        CalculationKind::EnvironmentalImpact => {
            let (area_m2, building_type) = (r.building_area(), r.building_type());
            let focus = p.environmental_focus.unwrap_or(false);
            debug!(%kind, area_m2, building_type, focus, "resolved arguments");
            CalculationResult::EnvironmentalImpact(calc::estimate_environmental_impact(
                area_m2,
                building_type,
                focus,
                data,
            )?)
        }
        CalculationKind::ProjectTimeline => {
            let (area_m2, building_type) = (r.building_area(), r.building_type());
            debug!(%kind, area_m2, building_type, "resolved arguments");
            CalculationResult::ProjectTimeline(calc::estimate_project_timeline(area_m2, building_type, data)?)
        }
        CalculationKind::BinShelterRequirements => {
            let bin_count = p.bin_count.unwrap_or(defaults.bin_count);
            let bin_type = Resolver::text(&p.bin_type, &defaults.bin_type);
            debug!(%kind, bin_count, bin_type, "resolved arguments");
            CalculationResult::BinShelterRequirements(calc::calculate_bin_shelter_requirements(bin_count, bin_type, data)?)
        }
        CalculationKind::PostSpacing => {
            let length_m = p.length.unwrap_or(defaults.post_run_length_m);
            let post_type = Resolver::text(&p.post_type, &defaults.post_type);
            debug!(%kind, length_m, post_type, spacing_m = ?p.spacing, "resolved arguments");
            CalculationResult::PostSpacing(calc::calculate_post_spacing(length_m, post_type, p.spacing, data)?)
        }
        CalculationKind::BenchPlacement => {
            let bench_count = p.bench_count.unwrap_or(defaults.bench_count);
            let bench_type = Resolver::text(&p.bench_type, &defaults.bench_type);
            let name = Resolver::text(&p.arrangement, &defaults.bench_arrangement);
            let circle_diameter_m = p.circle_diameter.or_else(|| p.diameter.map(|cm| cm / 100.0));
            let arrangement = BenchArrangement::from_parts(name, circle_diameter_m)?;
            debug!(%kind, bench_count, bench_type, ?arrangement, "resolved arguments");
            CalculationResult::BenchPlacement(calc::calculate_bench_placement(bench_count, bench_type, arrangement, data)?)
        }
        CalculationKind::PlanterCalculation => {
            let (length_m, width_m) = r.square_surface();
            let planter_type = Resolver::text(&p.planter_type, &defaults.planter_type);
            debug!(%kind, length_m, width_m, planter_type, "resolved arguments");
            CalculationResult::PlanterCalculation(calc::calculate_planters(length_m, width_m, planter_type, data)?)
        }
        CalculationKind::StepConfiguration => {
            let height_difference_cm = p.height_difference.unwrap_or(defaults.height_difference_cm);
            let available_space_cm = p.available_space.unwrap_or(defaults.available_space_cm);
            debug!(%kind, height_difference_cm, available_space_cm, "resolved arguments");
            CalculationResult::StepConfiguration(calc::calculate_step_configuration(
                height_difference_cm,
                available_space_cm,
            )?)
        }
        CalculationKind::BarrierRequirements => {
            let length_m = p.length.unwrap_or(defaults.barrier_length_m);
            let barrier_type = Resolver::text(&p.barrier_type, &defaults.barrier_type);
            debug!(%kind, length_m, barrier_type, "resolved arguments");
            CalculationResult::BarrierRequirements(calc::calculate_barrier_requirements(length_m, barrier_type, data)?)
        }
        CalculationKind::PriceCalculation => {
            let product = p
                .product
                .as_deref()
                .or(p.stone_type.as_deref())
                .unwrap_or(&defaults.product);
            let quantity = p.quantity.unwrap_or(defaults.quantity);
            debug!(%kind, product, quantity, "resolved arguments");
            CalculationResult::PriceCalculation(calc::calculate_price(product, quantity, settings, data)?)
        }
    };

    Ok(result)
}

/// [`compute`] for a kind given by its wire name.
///
/// An unrecognized name is [`CalcError::UnknownKind`](crate::errors::CalcError::UnknownKind).
pub fn compute_named(
    kind: &str,
    params: &ParameterSet,
    settings: &Settings,
    data: &ReferenceData,
) -> CalcResult<CalculationResult> {
    compute(kind.parse()?, params, settings, data)
}
