//! # Concrete
//!
//! Slab and column volumes, concrete grade recommendation by usage, and
//! carbon-footprint estimation.
//!
//! ## Volumes
//!
//! ```text
//! slab            = length × width × thickness_m          (+5% waste)
//! column          = π × r² × height_m                     (+10% waste)
//! column w/ posts = max(0, column − n × post_area × height_m)  (+10% waste)
//! ```
//!
//! Posts embedded in a column displace concrete. If the post geometry
//! exceeds the column the net volume is floored at zero.

use serde::{Deserialize, Serialize};

use crate::catalog::ReferenceData;
use crate::errors::{require_positive, to_count, CalcResult};
use crate::text::fold;
use crate::units::{round_to, Centimeters, CubicMeters, Meters, SquareMeters};

/// Fresh concrete density (kg/m³)
pub const CONCRETE_DENSITY: f64 = 2400.0;
pub const SLAB_WASTE_FACTOR: f64 = 1.05;
pub const COLUMN_WASTE_FACTOR: f64 = 1.10;
/// Ready-mix truck capacity (m³)
pub const TRUCK_CAPACITY_M3: f64 = 8.0;
/// Average passenger car, kg CO₂ per km
pub const CAR_KG_CO2_PER_KM: f64 = 0.12;
/// Mature tree uptake, kg CO₂ per year
pub const TREE_KG_CO2_PER_YEAR: f64 = 22.0;

// ============================================================================
// Slab volume
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConcreteVolumeResult {
    pub length_m: f64,
    pub width_m: f64,
    pub thickness_cm: f64,
    pub volume_m3: f64,
    pub volume_with_waste_m3: f64,
    pub weight_kg: f64,
    pub truck_loads: u32,
    pub strength_class: String,
    pub estimated_cost: f64,
}

/// Volume of a rectangular slab.
pub fn calculate_concrete_volume(length_m: f64, width_m: f64, thickness_cm: f64, data: &ReferenceData) -> CalcResult<ConcreteVolumeResult> {
    require_positive("length_m", length_m)?;
    require_positive("width_m", width_m)?;
    require_positive("thickness_cm", thickness_cm)?;

    let volume = SquareMeters::rectangle(Meters(length_m), Meters(width_m)).times_depth(Centimeters(thickness_cm).into());
    let with_waste = volume.0 * SLAB_WASTE_FACTOR;
    let grade = data.concrete_grade("default");

    Ok(ConcreteVolumeResult {
        length_m,
        width_m,
        thickness_cm,
        volume_m3: round_to(volume.0, 3),
        volume_with_waste_m3: round_to(with_waste, 3),
        weight_kg: round_to(volume.weight(CONCRETE_DENSITY).0, 1),
        truck_loads: to_count("truck_loads", (with_waste / TRUCK_CAPACITY_M3).ceil())?,
        strength_class: grade.strength_class.clone(),
        estimated_cost: (with_waste * grade.price_per_m3).round(),
    })
}

// ============================================================================
// Columns
// ============================================================================

/// Concrete displaced by square/rectangular posts cast into a column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostDisplacement {
    pub post_count: u32,
    pub post_width_cm: f64,
    /// Second cross-section dimension of the post
    pub post_height_cm: f64,
    pub displaced_volume_m3: f64,
    /// Column volume before displacement
    pub gross_volume_m3: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnVolumeResult {
    pub diameter_cm: f64,
    pub height_m: f64,
    pub volume_m3: f64,
    pub volume_with_waste_m3: f64,
    pub weight_kg: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post: Option<PostDisplacement>,
}

/// Volume of a cylindrical column.
///
/// ```rust
/// use reikna_core::calculations::concrete::calculate_column_volume;
///
/// let column = calculate_column_volume(30.0, 2.0).unwrap();
/// assert!((column.volume_m3 - 0.1414).abs() < 1e-4);
/// ```
pub fn calculate_column_volume(diameter_cm: f64, height_m: f64) -> CalcResult<ColumnVolumeResult> {
    require_positive("diameter_cm", diameter_cm)?;
    require_positive("height_m", height_m)?;

    let volume = CubicMeters::cylinder(Centimeters(diameter_cm).into(), Meters(height_m));
    Ok(column_result(diameter_cm, height_m, volume, None))
}

fn column_result(diameter_cm: f64, height_m: f64, net: CubicMeters, post: Option<PostDisplacement>) -> ColumnVolumeResult {
    ColumnVolumeResult {
        diameter_cm,
        height_m,
        volume_m3: round_to(net.0, 4),
        volume_with_waste_m3: round_to(net.0 * COLUMN_WASTE_FACTOR, 4),
        weight_kg: round_to(net.weight(CONCRETE_DENSITY).0, 1),
        post,
    }
}

/// Column volume less the concrete displaced by `post_count` embedded posts.
///
/// With `post_count == 0` this is exactly [`calculate_column_volume`].
pub fn calculate_column_with_post_volume(
    diameter_cm: f64,
    height_m: f64,
    post_width_cm: f64,
    post_height_cm: f64,
    post_count: u32,
) -> CalcResult<ColumnVolumeResult> {
    if post_count == 0 {
        return calculate_column_volume(diameter_cm, height_m);
    }
    require_positive("diameter_cm", diameter_cm)?;
    require_positive("height_m", height_m)?;
    require_positive("post_width_cm", post_width_cm)?;
    require_positive("post_height_cm", post_height_cm)?;

    let gross = CubicMeters::cylinder(Centimeters(diameter_cm).into(), Meters(height_m));
    let post_area = SquareMeters::rectangle(Centimeters(post_width_cm).into(), Centimeters(post_height_cm).into());
    let displaced = post_count as f64 * post_area.times_depth(Meters(height_m)).0;
    let net = CubicMeters((gross.0 - displaced).max(0.0));

    Ok(column_result(
        diameter_cm,
        height_m,
        net,
        Some(PostDisplacement {
            post_count,
            post_width_cm,
            post_height_cm,
            displaced_volume_m3: round_to(displaced, 4),
            gross_volume_m3: round_to(gross.0, 4),
        }),
    ))
}

// ============================================================================
// Grade recommendation
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UsageCategory {
    Marine,
    Driveway,
    Walkway,
    Outdoor,
    Floor,
    Indoor,
    General,
}

impl UsageCategory {
    /// Categorized keyword match; first group that hits wins.
    pub fn classify(usage: &str) -> Self {
        const MARINE: &[&str] = &["sjo", "sjav", "bryggj", "hafn", "hofn", "strand", "salt", "marine"];
        const DRIVEWAY: &[&str] = &["innkeyrsl", "bilast", "bilaplan", "driveway", "parking"];
        const WALKWAY: &[&str] = &["gangst", "stett", "stig", "walkway", "sidewalk"];
        const OUTDOOR: &[&str] = &["uti", "utan", "garð", "verond", "pall", "outdoor", "patio"];
        const FLOOR: &[&str] = &["golf", "floor"];
        const INDOOR: &[&str] = &["inni", "innan", "kjallar", "indoor"];

        let folded = fold(usage);
        let hits = |words: &[&str]| words.iter().any(|w| folded.contains(w));

        if hits(MARINE) {
            UsageCategory::Marine
        } else if hits(DRIVEWAY) {
            UsageCategory::Driveway
        } else if hits(WALKWAY) {
            UsageCategory::Walkway
        } else if hits(OUTDOOR) {
            UsageCategory::Outdoor
        } else if hits(FLOOR) {
            UsageCategory::Floor
        } else if hits(INDOOR) {
            UsageCategory::Indoor
        } else {
            UsageCategory::General
        }
    }

    fn grade_key(&self) -> &'static str {
        match self {
            UsageCategory::Marine => "c40",
            UsageCategory::Driveway => "c35",
            UsageCategory::Walkway | UsageCategory::Outdoor => "c30",
            UsageCategory::Floor => "c25",
            UsageCategory::Indoor => "c20",
            UsageCategory::General => "default",
        }
    }

    fn exposure_class(&self) -> &'static str {
        match self {
            UsageCategory::Marine => "XS3",
            UsageCategory::Driveway => "XF4",
            UsageCategory::Walkway => "XF3",
            UsageCategory::Outdoor => "XF1",
            UsageCategory::Floor | UsageCategory::Indoor | UsageCategory::General => "XC1",
        }
    }

    fn is_outdoor(&self) -> bool {
        matches!(
            self,
            UsageCategory::Marine | UsageCategory::Driveway | UsageCategory::Walkway | UsageCategory::Outdoor
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConcreteRecommendation {
    pub usage: String,
    pub category: UsageCategory,
    pub strength_class: String,
    pub exposure_class: String,
    pub carbon_footprint_kg_per_m3: f64,
    pub reduced_carbon_footprint_kg_per_m3: f64,
    pub certifications: Vec<String>,
    pub notes: Vec<String>,
}

/// Recommend a concrete grade for a usage description.
///
/// Unknown usages get the general-purpose default grade.
pub fn recommend_concrete_type(usage: &str, data: &ReferenceData) -> ConcreteRecommendation {
    let category = UsageCategory::classify(usage);
    let grade = data.concrete_grade(category.grade_key());

    let mut certifications = vec!["ÍST EN 206".to_string(), "CE-merking".to_string()];
    let mut notes = Vec::new();
    if category.is_outdoor() {
        certifications.push("Frostþolsprófun (CEN/TS 12390-9)".to_string());
        notes.push("Loftblendi nauðsynlegt vegna frostþíðu.".to_string());
    }
    match category {
        UsageCategory::Marine => {
            certifications.push("Klóríðþolsprófun (NT Build 492)".to_string());
            notes.push("Lágmarks steypuhula 50 mm við sjó.".to_string());
        }
        UsageCategory::Driveway => notes.push("Þolir salt og umferð ökutækja.".to_string()),
        UsageCategory::Floor => notes.push("Hentar undir gólfefni; vélslípun möguleg.".to_string()),
        _ => {}
    }

    ConcreteRecommendation {
        usage: usage.to_string(),
        category,
        strength_class: grade.strength_class.clone(),
        exposure_class: category.exposure_class().to_string(),
        carbon_footprint_kg_per_m3: grade.base_kg_co2_per_m3,
        reduced_carbon_footprint_kg_per_m3: grade.reduced_kg_co2_per_m3,
        certifications,
        notes,
    }
}

// ============================================================================
// Carbon footprint
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarbonEquivalents {
    /// Passenger-car kilometres emitting the same CO₂
    pub km_driven: f64,
    /// Tree-months of uptake
    pub tree_months: f64,
}

impl CarbonEquivalents {
    pub fn for_kg(kg_co2: f64) -> Self {
        CarbonEquivalents {
            km_driven: (kg_co2 / CAR_KG_CO2_PER_KM).round(),
            tree_months: round_to(kg_co2 / (TREE_KG_CO2_PER_YEAR / 12.0), 1),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarbonFootprintResult {
    pub volume_m3: f64,
    pub strength_class: String,
    pub base_kg_co2_per_m3: f64,
    pub reduced_kg_co2_per_m3: f64,
    pub base_total_kg: f64,
    pub reduced_total_kg: f64,
    pub savings_kg: f64,
    pub savings_percent: f64,
    /// Equivalents of the savings
    pub equivalents: CarbonEquivalents,
}

/// Footprint of `volume_m3` of `concrete_type` (e.g. "C30"), standard vs. low-carbon mix.
pub fn estimate_carbon_footprint(volume_m3: f64, concrete_type: &str, data: &ReferenceData) -> CalcResult<CarbonFootprintResult> {
    require_positive("volume_m3", volume_m3)?;

    let grade = data.concrete_grade(concrete_type);
    let base_total = volume_m3 * grade.base_kg_co2_per_m3;
    let reduced_total = volume_m3 * grade.reduced_kg_co2_per_m3;
    let savings = base_total - reduced_total;
    let savings_percent = if base_total > 0.0 { savings / base_total * 100.0 } else { 0.0 };

    Ok(CarbonFootprintResult {
        volume_m3,
        strength_class: grade.strength_class.clone(),
        base_kg_co2_per_m3: grade.base_kg_co2_per_m3,
        reduced_kg_co2_per_m3: grade.reduced_kg_co2_per_m3,
        base_total_kg: round_to(base_total, 1),
        reduced_total_kg: round_to(reduced_total, 1),
        savings_kg: round_to(savings, 1),
        savings_percent: round_to(savings_percent, 1),
        equivalents: CarbonEquivalents::for_kg(savings),
    })
}
