//! # Sand
//!
//! Base (bedding) sand under a paved surface and joint (pointing) sand
//! between the stones.
//!
//! ## Base layer
//!
//! ```text
//! volume    = area × thickness_cm / 100     (m³)
//! weight    = volume × 1600                 (kg)
//! big_bags  = ⌈volume⌉                      (1 m³ bags)
//! ```
//!
//! ## Joint sand
//!
//! ```text
//! joint_length_per_m2 = k × (100 / stone_size_cm) × 100          (cm)
//!     k = 2.0 regular, 2.2 mixed, 2.4 irregular laying pattern
//! volume = total_joint_length × joint_width_mm/10 × stone_thickness_cm   (cm³)
//! bags   = ⌈volume × 1500 / 25⌉
//! ```
//!
//! Product selection is tiered: joints up to 2 mm always get polymer sand,
//! joints up to 4 mm (or any joint with a polymer preference) get polymer
//! sand, wider joints get standard pointing sand. The non-chosen product is
//! always priced alongside for comparison.

use serde::{Deserialize, Serialize};

use crate::catalog::ReferenceData;
use crate::errors::{require_positive, to_count_u64, CalcResult};
use crate::text::fold;
use crate::units::{cm3_to_m3, round_to, Centimeters, Meters, Millimeters, SquareMeters};

/// Compacted bedding sand density (kg/m³)
pub const BASE_SAND_DENSITY: f64 = 1600.0;
/// Dry pointing sand density (kg/m³)
pub const JOINT_SAND_DENSITY: f64 = 1500.0;
/// Joint sand bag size (kg)
pub const JOINT_SAND_BAG_KG: f64 = 25.0;

pub const BASE_SAND_PRODUCT: &str = "undirlagssandur";
pub const STANDARD_JOINT_PRODUCT: &str = "fugusandur";
pub const POLYMER_JOINT_PRODUCT: &str = "polymersandur";

// ============================================================================
// Base sand
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseSandResult {
    pub area_m2: f64,
    pub thickness_cm: f64,
    pub volume_m3: f64,
    pub weight_kg: f64,
    pub big_bags: u64,
    pub product_name: String,
    pub bag_price: f64,
    pub total_cost: f64,
}

/// Bedding sand for a `length_m × width_m` surface at `thickness_cm`.
///
/// ```rust
/// use reikna_core::calculations::sand::calculate_base_sand;
/// use reikna_core::catalog::ReferenceData;
///
/// let sand = calculate_base_sand(5.0, 5.0, 3.0, ReferenceData::builtin()).unwrap();
/// assert!((sand.volume_m3 - 0.75).abs() < 1e-9);
/// assert!((sand.weight_kg - 1200.0).abs() < 1e-6);
/// assert_eq!(sand.big_bags, 1);
/// ```
pub fn calculate_base_sand(length_m: f64, width_m: f64, thickness_cm: f64, data: &ReferenceData) -> CalcResult<BaseSandResult> {
    require_positive("length_m", length_m)?;
    require_positive("width_m", width_m)?;
    require_positive("thickness_cm", thickness_cm)?;

    let area = SquareMeters::rectangle(Meters(length_m), Meters(width_m));
    let volume = area.times_depth(Centimeters(thickness_cm).into());
    let weight = volume.weight(BASE_SAND_DENSITY);
    let big_bags = to_count_u64("big_bags", volume.0.ceil())?;

    let product = data.lookup_product_info(BASE_SAND_PRODUCT);
    Ok(BaseSandResult {
        area_m2: area.0,
        thickness_cm,
        volume_m3: volume.0,
        weight_kg: weight.0,
        big_bags,
        product_name: product.name.clone(),
        bag_price: product.unit_price,
        total_cost: big_bags as f64 * product.unit_price,
    })
}

// ============================================================================
// Joint sand
// ============================================================================

/// Laying pattern; irregular patterns have more joint length per m²
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JointPattern {
    #[default]
    Regular,
    Mixed,
    Irregular,
}

impl JointPattern {
    pub fn multiplier(&self) -> f64 {
        match self {
            JointPattern::Regular => 2.0,
            JointPattern::Mixed => 2.2,
            JointPattern::Irregular => 2.4,
        }
    }

    /// Parse English or Icelandic names; anything unrecognized is `Regular`.
    pub fn from_str_flexible(s: &str) -> Self {
        let folded = fold(s);
        if folded.starts_with("mix") || folded.starts_with("blanda") {
            JointPattern::Mixed
        } else if folded.starts_with("irreg") || folded.starts_with("oreglu") || folded.starts_with("villt") {
            JointPattern::Irregular
        } else {
            JointPattern::Regular
        }
    }
}

/// Why a joint product was recommended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JointSandSelection {
    /// ≤ 2 mm: only polymer sand penetrates
    NarrowJoint,
    /// ≤ 4 mm: polymer sand recommended
    MediumJoint,
    /// Wider joint, customer asked for polymer
    PolymerPreferred,
    /// Wider joint, standard sand
    WideJoint,
}

impl JointSandSelection {
    pub fn uses_polymer(&self) -> bool {
        !matches!(self, JointSandSelection::WideJoint)
    }

    pub fn for_joint(joint_width_mm: f64, use_polymer_sand: bool) -> Self {
        if joint_width_mm <= 2.0 {
            JointSandSelection::NarrowJoint
        } else if joint_width_mm <= 4.0 {
            JointSandSelection::MediumJoint
        } else if use_polymer_sand {
            JointSandSelection::PolymerPreferred
        } else {
            JointSandSelection::WideJoint
        }
    }

    fn explanation(&self) -> &'static str {
        match self {
            JointSandSelection::NarrowJoint => "Fúgur 2 mm eða mjórri: aðeins polymer sandur nær að fylla.",
            JointSandSelection::MediumJoint => "Fúgur allt að 4 mm: mælt með polymer sandi.",
            JointSandSelection::PolymerPreferred => "Polymer sandur valinn að ósk.",
            JointSandSelection::WideJoint => "Breiðar fúgur: hefðbundinn fúgusandur dugar.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JointSandInput {
    pub area_m2: f64,
    pub stone_size_cm: f64,
    pub stone_thickness_cm: f64,
    pub joint_width_mm: f64,
    pub pattern: JointPattern,
    pub use_polymer_sand: bool,
}

/// One priced product option
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SandOption {
    pub product_key: String,
    pub product_name: String,
    pub sku: String,
    pub bags: u64,
    pub bag_price: f64,
    pub total_cost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JointSandResult {
    pub area_m2: f64,
    pub pattern: JointPattern,
    /// Joint length per m² of surface (m)
    pub joint_length_per_m2: f64,
    pub total_joint_length_m: f64,
    pub volume_m3: f64,
    pub weight_kg: f64,
    pub selection: JointSandSelection,
    pub recommended: SandOption,
    pub alternative: SandOption,
    pub note: String,
}

fn sand_option(key: &str, bags: u64, data: &ReferenceData) -> SandOption {
    let product = data.lookup_product_info(key);
    SandOption {
        product_key: key.to_string(),
        product_name: product.name.clone(),
        sku: product.sku.clone(),
        bags,
        bag_price: product.unit_price,
        total_cost: bags as f64 * product.unit_price,
    }
}

/// Joint sand quantity and product recommendation.
pub fn calculate_joint_sand(input: &JointSandInput, data: &ReferenceData) -> CalcResult<JointSandResult> {
    require_positive("area_m2", input.area_m2)?;
    require_positive("stone_size_cm", input.stone_size_cm)?;
    require_positive("stone_thickness_cm", input.stone_thickness_cm)?;
    require_positive("joint_width_mm", input.joint_width_mm)?;

    let length_per_m2_cm = input.pattern.multiplier() * (100.0 / input.stone_size_cm) * 100.0;
    let total_length_cm = length_per_m2_cm * input.area_m2;
    let joint_width: Centimeters = Millimeters(input.joint_width_mm).into();

    let volume = cm3_to_m3(total_length_cm * joint_width.0 * input.stone_thickness_cm);
    let weight = volume.weight(JOINT_SAND_DENSITY);
    let bags = to_count_u64("bags", (weight.0 / JOINT_SAND_BAG_KG).ceil())?;

    let selection = JointSandSelection::for_joint(input.joint_width_mm, input.use_polymer_sand);
    let (chosen, other) = if selection.uses_polymer() {
        (POLYMER_JOINT_PRODUCT, STANDARD_JOINT_PRODUCT)
    } else {
        (STANDARD_JOINT_PRODUCT, POLYMER_JOINT_PRODUCT)
    };

    Ok(JointSandResult {
        area_m2: input.area_m2,
        pattern: input.pattern,
        joint_length_per_m2: length_per_m2_cm / 100.0,
        total_joint_length_m: round_to(total_length_cm / 100.0, 2),
        volume_m3: volume.0,
        weight_kg: round_to(weight.0, 2),
        selection,
        recommended: sand_option(chosen, bags, data),
        alternative: sand_option(other, bags, data),
        note: selection.explanation().to_string(),
    })
}
