//! # Prefabricated Housing
//!
//! Time, cost, material, environmental and timeline estimates for
//! prefabricated (precast element) buildings. Every estimator is driven by
//! the per-building-type coefficient table in [`crate::catalog`].
//!
//! ## Assumptions
//!
//! - Floor plans are square: `side = √area`, `perimeter = 4 × side`.
//!   Only floor area is known from a query, so this is the least-biased
//!   perimeter estimate.
//! - Storey height 2.7 m; wall elements are 3 m wide; floor elements are
//!   12 m² hollow-core units.
//! - Traditional cast-in-place takes 2.5× as long, costs 15% more, uses 20%
//!   more concrete and wastes 15% of material.

use serde::{Deserialize, Serialize};

use crate::catalog::{BuildingTypeCoefficients, ReferenceData};
use crate::errors::{checked, require_positive, to_count, CalcResult};
use crate::units::round_to;

pub const WALL_HEIGHT_M: f64 = 2.7;
pub const WALL_ELEMENT_WIDTH_M: f64 = 3.0;
pub const FLOOR_ELEMENT_AREA_M2: f64 = 12.0;
pub const REINFORCEMENT_KG_PER_M3: f64 = 90.0;
pub const TRADITIONAL_TIME_FACTOR: f64 = 2.5;
pub const TRADITIONAL_COST_FACTOR: f64 = 1.15;
pub const TRADITIONAL_CONCRETE_FACTOR: f64 = 1.2;
pub const TRADITIONAL_WASTE_PERCENT: f64 = 15.0;
pub const STANDARD_KG_CO2_PER_M3: f64 = 300.0;
pub const LOW_CARBON_KG_CO2_PER_M3: f64 = 230.0;

fn coefficients<'a>(area_m2: f64, building_type: &str, data: &'a ReferenceData) -> CalcResult<&'a BuildingTypeCoefficients> {
    require_positive("area_m2", area_m2)?;
    Ok(data.lookup_building_type_coefficients(building_type))
}

// ============================================================================
// Construction time
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstructionTimeResult {
    pub building_type: String,
    pub area_m2: f64,
    pub prefab_days: u32,
    pub prefab_weeks: f64,
    pub traditional_days: u32,
    pub days_saved: u32,
}

/// `prefab_days = ⌈base_days × complexity × max(1, area / 100)⌉`
pub fn estimate_construction_time(area_m2: f64, building_type: &str, data: &ReferenceData) -> CalcResult<ConstructionTimeResult> {
    let c = coefficients(area_m2, building_type, data)?;

    let scale = (area_m2 / 100.0).max(1.0);
    let prefab_days = to_count("prefab_days", (c.base_time_days * c.complexity_factor * scale).ceil())?;
    let traditional_days = to_count("traditional_days", (prefab_days as f64 * TRADITIONAL_TIME_FACTOR).ceil())?;

    Ok(ConstructionTimeResult {
        building_type: c.name.clone(),
        area_m2,
        prefab_days,
        prefab_weeks: round_to(prefab_days as f64 / 7.0, 1),
        traditional_days,
        days_saved: traditional_days.saturating_sub(prefab_days),
    })
}

// ============================================================================
// Cost
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub elements: f64,
    pub foundation: f64,
    pub assembly: f64,
    pub finishing: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstructionCostResult {
    pub building_type: String,
    pub area_m2: f64,
    pub cost_per_m2: f64,
    pub total_cost: f64,
    pub breakdown: CostBreakdown,
    pub traditional_cost: f64,
    pub savings: f64,
}

pub fn estimate_construction_cost(area_m2: f64, building_type: &str, data: &ReferenceData) -> CalcResult<ConstructionCostResult> {
    let c = coefficients(area_m2, building_type, data)?;

    let cost_per_m2 = c.cost_per_area * c.complexity_factor;
    let total = (area_m2 * cost_per_m2).round();
    let traditional = (total * TRADITIONAL_COST_FACTOR).round();

    Ok(ConstructionCostResult {
        building_type: c.name.clone(),
        area_m2,
        cost_per_m2: cost_per_m2.round(),
        total_cost: total,
        breakdown: CostBreakdown {
            elements: (total * 0.55).round(),
            foundation: (total * 0.15).round(),
            assembly: (total * 0.20).round(),
            finishing: (total * 0.10).round(),
        },
        traditional_cost: traditional,
        savings: traditional - total,
    })
}

// ============================================================================
// Materials
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialRequirementsResult {
    pub building_type: String,
    pub area_m2: f64,
    pub perimeter_m: f64,
    pub wall_area_m2: f64,
    pub concrete_m3: f64,
    pub reinforcement_kg: f64,
    pub wall_elements: u32,
    pub floor_elements: u32,
    pub waste_m3: f64,
}

pub fn estimate_material_requirements(area_m2: f64, building_type: &str, data: &ReferenceData) -> CalcResult<MaterialRequirementsResult> {
    let c = coefficients(area_m2, building_type, data)?;

    let side = area_m2.sqrt();
    let perimeter = 4.0 * side;
    let concrete = area_m2 * c.concrete_usage;

    Ok(MaterialRequirementsResult {
        building_type: c.name.clone(),
        area_m2,
        perimeter_m: round_to(perimeter, 2),
        wall_area_m2: round_to(perimeter * WALL_HEIGHT_M, 2),
        concrete_m3: round_to(concrete, 2),
        reinforcement_kg: round_to(concrete * REINFORCEMENT_KG_PER_M3, 0),
        wall_elements: to_count("wall_elements", (perimeter / WALL_ELEMENT_WIDTH_M).ceil())?,
        floor_elements: to_count("floor_elements", (area_m2 / FLOOR_ELEMENT_AREA_M2).ceil())?,
        waste_m3: round_to(concrete * c.waste_percent / 100.0, 2),
    })
}

// ============================================================================
// Environmental impact
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentalImpactResult {
    pub building_type: String,
    pub area_m2: f64,
    pub environmental_focus: bool,
    pub concrete_m3: f64,
    pub kg_co2_per_m3: f64,
    pub total_co2_kg: f64,
    pub traditional_co2_kg: f64,
    pub co2_saved_kg: f64,
    pub prefab_waste_m3: f64,
    pub traditional_waste_m3: f64,
    pub recommendations: Vec<String>,
}

pub fn estimate_environmental_impact(
    area_m2: f64,
    building_type: &str,
    environmental_focus: bool,
    data: &ReferenceData,
) -> CalcResult<EnvironmentalImpactResult> {
    let c = coefficients(area_m2, building_type, data)?;

    let concrete = area_m2 * c.concrete_usage;
    let intensity = if environmental_focus {
        LOW_CARBON_KG_CO2_PER_M3
    } else {
        STANDARD_KG_CO2_PER_M3
    };
    let total = concrete * intensity;
    let traditional = concrete * TRADITIONAL_CONCRETE_FACTOR * STANDARD_KG_CO2_PER_M3;

    let mut recommendations = vec![
        "Forsteyptar einingar draga úr efnissóun á byggingarstað.".to_string(),
        "Endurnýtið mót og umbúðir frá framleiðanda.".to_string(),
    ];
    if environmental_focus {
        recommendations.push("Veljið lágkolefnissteypu með gjallsementi.".to_string());
        recommendations.push("Óskið eftir umhverfisyfirlýsingu (EPD) fyrir einingarnar.".to_string());
    } else {
        recommendations.push(format!(
            "Lágkolefnissteypa myndi minnka losun um {:.0} kg CO₂.",
            concrete * (STANDARD_KG_CO2_PER_M3 - LOW_CARBON_KG_CO2_PER_M3)
        ));
    }

    Ok(EnvironmentalImpactResult {
        building_type: c.name.clone(),
        area_m2,
        environmental_focus,
        concrete_m3: round_to(concrete, 2),
        kg_co2_per_m3: intensity,
        total_co2_kg: round_to(total, 0),
        traditional_co2_kg: round_to(traditional, 0),
        co2_saved_kg: round_to(traditional - total, 0),
        prefab_waste_m3: round_to(concrete * c.waste_percent / 100.0, 2),
        traditional_waste_m3: round_to(concrete * TRADITIONAL_CONCRETE_FACTOR * TRADITIONAL_WASTE_PERCENT / 100.0, 2),
        recommendations,
    })
}

// ============================================================================
// Timeline
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelinePhase {
    pub name: String,
    pub start_day: u32,
    pub duration_days: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectTimelineResult {
    pub building_type: String,
    pub area_m2: f64,
    pub phases: Vec<TimelinePhase>,
    pub total_days: u32,
    pub total_weeks: f64,
}

/// Sequential phases. Design and factory production are fixed-share
/// multiples of the on-site time; foundation, assembly and finishing split
/// the on-site time 25/35/40.
pub fn estimate_project_timeline(area_m2: f64, building_type: &str, data: &ReferenceData) -> CalcResult<ProjectTimelineResult> {
    let time = estimate_construction_time(area_m2, building_type, data)?;
    let on_site = time.prefab_days as f64;

    let durations: [(&str, f64); 5] = [
        ("Hönnun og leyfi", on_site * 0.6),
        ("Framleiðsla eininga", on_site * 0.5),
        ("Undirstöður", on_site * 0.25),
        ("Uppsetning eininga", on_site * 0.35),
        ("Frágangur", on_site * 0.4),
    ];

    let mut phases = Vec::with_capacity(durations.len());
    let mut day = 0u32;
    for (name, duration) in durations {
        let duration_days = to_count("duration_days", duration.ceil())?.max(1);
        phases.push(TimelinePhase {
            name: name.to_string(),
            start_day: day,
            duration_days,
        });
        day = checked("total_days", day.checked_add(duration_days))?;
    }

    Ok(ProjectTimelineResult {
        building_type: time.building_type,
        area_m2,
        phases,
        total_days: day,
        total_weeks: round_to(day as f64 / 7.0, 1),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data() -> &'static ReferenceData {
        ReferenceData::builtin()
    }

    #[test]
    fn test_construction_time() {
        // einbylishus: 45 days × 1.0 × 1.5 (150 m²) = 67.5 → 68; traditional ⌈170⌉
        let time = estimate_construction_time(150.0, "einbýlishús", data()).unwrap();
        assert_eq!(time.prefab_days, 68);
        assert_eq!(time.traditional_days, 170);
        assert_eq!(time.days_saved, 102);
    }

    #[test]
    fn test_small_buildings_use_reference_size() {
        // 60 m² scales as 100 m²
        let time = estimate_construction_time(60.0, "sumarhus", data()).unwrap();
        assert_eq!(time.prefab_days, 20);
    }

    #[test]
    fn test_cost() {
        let cost = estimate_construction_cost(100.0, "parhus", data()).unwrap();
        // 400 000 × 1.1 = 440 000 /m²
        assert_eq!(cost.total_cost, 44_000_000.0);
        assert_eq!(cost.breakdown.elements, 24_200_000.0);
        assert_eq!(cost.traditional_cost, 50_600_000.0);
        let sum = cost.breakdown.elements + cost.breakdown.foundation + cost.breakdown.assembly + cost.breakdown.finishing;
        assert!((sum - cost.total_cost).abs() < 2.0);
    }

    #[test]
    fn test_materials_square_plan() {
        // 144 m² → side 12, perimeter 48, walls 129.6 m², 16 wall elements, 12 floor elements
        let materials = estimate_material_requirements(144.0, "einbylishus", data()).unwrap();
        assert_eq!(materials.perimeter_m, 48.0);
        assert_eq!(materials.wall_area_m2, 129.6);
        assert_eq!(materials.wall_elements, 16);
        assert_eq!(materials.floor_elements, 12);
        assert!((materials.concrete_m3 - 64.8).abs() < 1e-9);
    }

    #[test]
    fn test_environmental_focus_lowers_co2() {
        let standard = estimate_environmental_impact(120.0, "einbylishus", false, data()).unwrap();
        let focused = estimate_environmental_impact(120.0, "einbylishus", true, data()).unwrap();
        assert!(focused.total_co2_kg < standard.total_co2_kg);
        assert!(focused.co2_saved_kg > standard.co2_saved_kg);
        assert!(standard.prefab_waste_m3 < standard.traditional_waste_m3);
    }

    #[test]
    fn test_timeline_is_sequential() {
        let timeline = estimate_project_timeline(120.0, "radhus", data()).unwrap();
        assert_eq!(timeline.phases.len(), 5);
        for pair in timeline.phases.windows(2) {
            assert_eq!(pair[1].start_day, pair[0].start_day + pair[0].duration_days);
        }
        let last = timeline.phases.last().unwrap();
        assert_eq!(timeline.total_days, last.start_day + last.duration_days);
    }

    #[test]
    fn test_unknown_building_type_uses_default() {
        let time = estimate_construction_time(100.0, "vitinn", data()).unwrap();
        assert_eq!(time.building_type, "Einingahús");
    }

    #[test]
    fn test_rejects_zero_area() {
        assert!(estimate_construction_cost(0.0, "einbylishus", data()).is_err());
    }

    #[test]
    fn test_huge_areas_are_rejected_not_wrapped() {
        let area = 1e14;
        for err in [
            estimate_construction_time(area, "einbylishus", data()).unwrap_err(),
            estimate_project_timeline(area, "einbylishus", data()).unwrap_err(),
            estimate_material_requirements(1e20, "einbylishus", data()).unwrap_err(),
        ] {
            assert_eq!(err.error_code(), "INVALID_INPUT");
        }
    }

    #[test]
    fn test_timeline_near_the_count_limit() {
        // 450 000 000 prefab days, still countable
        let time = estimate_construction_time(1e9, "einbylishus", data()).unwrap();
        let timeline = estimate_project_timeline(1e9, "einbylishus", data()).unwrap();
        assert!(timeline.total_days > time.prefab_days);
    }
}
