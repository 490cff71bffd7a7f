//! Precast element tables: bin shelters, posts, benches, planters, barriers.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// ============================================================================
// Bin shelters
// ============================================================================

/// A shelter model sized for a fixed number of standard bins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinShelterSpec {
    /// Bins the shelter holds (1-4)
    pub capacity: u32,
    pub sku: String,
    pub name: String,
    pub width_cm: f64,
    pub depth_cm: f64,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub price: f64,
}

/// Bin size scaling relative to the standard 240 l bin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinTypeSpec {
    pub liters: u32,
    pub depth_factor: f64,
    pub price_factor: f64,
}

/// Unit prices for shelter accessories
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessoryPrices {
    pub door: f64,
    pub lid: f64,
    pub gas_pump: f64,
    pub magnet: f64,
}

impl Default for AccessoryPrices {
    fn default() -> Self {
        AccessoryPrices {
            door: 24_900.0,
            lid: 14_900.0,
            gas_pump: 6_900.0,
            magnet: 1_900.0,
        }
    }
}

fn shelter(capacity: u32, width_cm: f64, weight_kg: f64, price: f64) -> BinShelterSpec {
    BinShelterSpec {
        capacity,
        sku: format!("SKY-{}", capacity),
        name: format!("Tunnuskýli fyrir {} tunnu{}", capacity, if capacity == 1 { "" } else { "r" }),
        width_cm,
        depth_cm: 90.0,
        height_cm: 130.0,
        weight_kg,
        price,
    }
}

pub(crate) fn builtin_bin_shelters() -> Vec<BinShelterSpec> {
    vec![
        shelter(1, 90.0, 650.0, 289_000.0),
        shelter(2, 160.0, 1_150.0, 459_000.0),
        shelter(3, 230.0, 1_650.0, 629_000.0),
        shelter(4, 300.0, 2_150.0, 789_000.0),
    ]
}

pub(crate) fn builtin_bin_types() -> BTreeMap<String, BinTypeSpec> {
    let mut types = BTreeMap::new();
    let standard = BinTypeSpec { liters: 240, depth_factor: 1.0, price_factor: 1.0 };
    types.insert("240".to_string(), standard.clone());
    types.insert("360".to_string(), BinTypeSpec { liters: 360, depth_factor: 1.15, price_factor: 1.12 });
    types.insert("660".to_string(), BinTypeSpec { liters: 660, depth_factor: 1.4, price_factor: 1.35 });
    types.insert("default".to_string(), standard);
    types
}

// ============================================================================
// Posts / bollards
// ============================================================================

/// Cast-in-place footing for a single post
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FootingDimensions {
    pub diameter_cm: f64,
    pub depth_cm: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostTypeSpec {
    pub name: String,
    pub above_ground_cm: f64,
    pub below_ground_cm: f64,
    pub weight_kg: f64,
    pub price: f64,
    /// Recommended centre-to-centre spacing
    pub spacing_m: f64,
    pub requires_foundation: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foundation: Option<FootingDimensions>,
}

fn post(name: &str, above: f64, below: f64, weight: f64, price: f64, spacing: f64, footing: Option<(f64, f64)>) -> PostTypeSpec {
    PostTypeSpec {
        name: name.to_string(),
        above_ground_cm: above,
        below_ground_cm: below,
        weight_kg: weight,
        price,
        spacing_m: spacing,
        requires_foundation: footing.is_some(),
        foundation: footing.map(|(diameter_cm, depth_cm)| FootingDimensions { diameter_cm, depth_cm }),
    }
}

pub(crate) fn builtin_post_types() -> BTreeMap<String, PostTypeSpec> {
    let mut types = BTreeMap::new();
    let bollard = post("Steyptur pollari", 90.0, 50.0, 220.0, 39_900.0, 1.5, Some((40.0, 70.0)));
    types.insert("pollari".to_string(), bollard.clone());
    types.insert("hringpollari".to_string(), post("Hringpollari", 80.0, 40.0, 180.0, 34_900.0, 1.5, Some((35.0, 60.0))));
    types.insert("yfirbordsfestur".to_string(), post("Yfirborðsfestur pollari", 90.0, 0.0, 260.0, 45_900.0, 1.5, None));
    types.insert("girdingarstaur".to_string(), post("Girðingarstaur", 120.0, 60.0, 95.0, 18_900.0, 2.5, Some((30.0, 80.0))));
    types.insert("default".to_string(), bollard);
    types
}

// ============================================================================
// Benches
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchTypeSpec {
    pub name: String,
    pub length_cm: f64,
    pub depth_cm: f64,
    pub seats: u32,
    pub weight_kg: f64,
    pub price: f64,
}

fn bench(name: &str, length: f64, depth: f64, seats: u32, weight: f64, price: f64) -> BenchTypeSpec {
    BenchTypeSpec {
        name: name.to_string(),
        length_cm: length,
        depth_cm: depth,
        seats,
        weight_kg: weight,
        price,
    }
}

pub(crate) fn builtin_bench_types() -> BTreeMap<String, BenchTypeSpec> {
    let mut types = BTreeMap::new();
    let standard = bench("Steyptur bekkur", 180.0, 60.0, 3, 450.0, 189_000.0);
    types.insert("bekkur".to_string(), standard.clone());
    types.insert("langbekkur".to_string(), bench("Langbekkur", 300.0, 60.0, 5, 750.0, 289_000.0));
    types.insert("bakbekkur".to_string(), bench("Bekkur með baki", 180.0, 70.0, 3, 520.0, 229_000.0));
    types.insert("default".to_string(), standard);
    types
}

// ============================================================================
// Planters
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanterTypeSpec {
    pub name: String,
    pub length_cm: f64,
    pub width_cm: f64,
    pub height_cm: f64,
    pub soil_volume_m3: f64,
    pub weight_kg: f64,
    pub price: f64,
}

fn planter(name: &str, l: f64, w: f64, h: f64, soil: f64, weight: f64, price: f64) -> PlanterTypeSpec {
    PlanterTypeSpec {
        name: name.to_string(),
        length_cm: l,
        width_cm: w,
        height_cm: h,
        soil_volume_m3: soil,
        weight_kg: weight,
        price,
    }
}

pub(crate) fn builtin_planter_types() -> BTreeMap<String, PlanterTypeSpec> {
    let mut types = BTreeMap::new();
    let standard = planter("Blómaker 100x100", 100.0, 100.0, 60.0, 0.45, 650.0, 119_000.0);
    types.insert("blomaker".to_string(), standard.clone());
    types.insert("hringker".to_string(), planter("Hringlaga blómaker", 120.0, 120.0, 60.0, 0.5, 700.0, 139_000.0));
    types.insert("langker".to_string(), planter("Langt blómaker", 200.0, 60.0, 60.0, 0.55, 800.0, 149_000.0));
    types.insert("smaker".to_string(), planter("Lítið blómaker", 60.0, 60.0, 50.0, 0.15, 250.0, 69_000.0));
    types.insert("default".to_string(), standard);
    types
}

// ============================================================================
// Barriers
// ============================================================================

/// One purchasable barrier unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarrierVariant {
    pub name: String,
    pub length_cm: f64,
    pub weight_kg: f64,
    pub price: f64,
}

/// How a barrier type is laid out along a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "layout", rename_all = "snake_case")]
pub enum BarrierLayout {
    /// Continuous run; unit size chosen by total run length
    Modular {
        short: BarrierVariant,
        medium: BarrierVariant,
        long: BarrierVariant,
    },
    /// One unit every `interval_cm`
    SpeedBump {
        interval_cm: f64,
        unit: BarrierVariant,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarrierTypeSpec {
    pub name: String,
    pub layout: BarrierLayout,
}

fn variant(name: &str, length: f64, weight: f64, price: f64) -> BarrierVariant {
    BarrierVariant {
        name: name.to_string(),
        length_cm: length,
        weight_kg: weight,
        price,
    }
}

pub(crate) fn builtin_barrier_types() -> BTreeMap<String, BarrierTypeSpec> {
    let mut types = BTreeMap::new();
    let modular = BarrierTypeSpec {
        name: "Umferðartálmi".to_string(),
        layout: BarrierLayout::Modular {
            short: variant("Tálmi 100 cm", 100.0, 900.0, 59_000.0),
            medium: variant("Tálmi 200 cm", 200.0, 1_800.0, 99_000.0),
            long: variant("Tálmi 300 cm", 300.0, 2_700.0, 139_000.0),
        },
    };
    types.insert("talmi".to_string(), modular.clone());
    types.insert(
        "hradahindrun".to_string(),
        BarrierTypeSpec {
            name: "Hraðahindrun".to_string(),
            layout: BarrierLayout::SpeedBump {
                interval_cm: 5_000.0,
                unit: variant("Hraðahindrun 400 cm", 400.0, 2_200.0, 189_000.0),
            },
        },
    );
    types.insert("default".to_string(), modular);
    types
}
