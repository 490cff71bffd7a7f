//! Bin shelters.
//!
//! Shelters come in fixed sizes for 1-4 bins. Larger requests are built
//! from those sizes:
//!
//! ```text
//! 1-4 bins   Single     one shelter of exactly that size
//! 5-8 bins   Combined   one 4-bin shelter + shelters sized for (n - 4)
//! > 8 bins   Repeated   ⌈n / 4⌉ identical 4-bin shelters
//! ```
//!
//! The Combined branch recurses on `n - 4`, which is always in 1..=4, so
//! the recursion depth is exactly one.
//!
//! Accessories (doors, lids, gas pumps, magnets) scale with the requested
//! bin count, not with shelter capacity. Each shelter sits on its own
//! 10 cm foundation slab sized by its capacity. Identical shelters share one
//! slab entry carrying their count.

use serde::{Deserialize, Serialize};

use crate::catalog::{BinTypeSpec, ReferenceData};
use crate::errors::{require_count, CalcError, CalcResult};
use crate::units::round_to;

pub const LARGEST_SHELTER: u32 = 4;
pub const FOUNDATION_THICKNESS_M: f64 = 0.10;

/// Foundation slab footprint (length, width) in metres for a shelter capacity
pub fn foundation_footprint(capacity: u32) -> (f64, f64) {
    match capacity {
        1 => (1.0, 1.0),
        2 => (1.6, 1.0),
        3 => (2.3, 1.0),
        _ => (3.0, 1.0),
    }
}

/// One shelter, priced for the requested bin type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShelterUnit {
    pub capacity: u32,
    pub sku: String,
    pub name: String,
    pub width_cm: f64,
    pub depth_cm: f64,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub price: f64,
}

/// How the requested bins are split across shelters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "layout", rename_all = "snake_case")]
pub enum ShelterLayout {
    Single {
        shelter: ShelterUnit,
    },
    Combined {
        primary: ShelterUnit,
        secondary: Box<ShelterLayout>,
    },
    Repeated {
        shelter: ShelterUnit,
        count: u32,
    },
}

impl ShelterLayout {
    /// Each distinct shelter in the layout with how many of it are needed.
    /// Repeated layouts stay a single entry however large the count.
    pub fn groups(&self) -> Vec<(&ShelterUnit, u32)> {
        match self {
            ShelterLayout::Single { shelter } => vec![(shelter, 1)],
            ShelterLayout::Combined { primary, secondary } => {
                let mut groups = vec![(primary, 1)];
                groups.extend(secondary.groups());
                groups
            }
            ShelterLayout::Repeated { shelter, count } => vec![(shelter, *count)],
        }
    }

    pub fn total_capacity(&self) -> u64 {
        self.groups()
            .iter()
            .map(|(unit, count)| unit.capacity as u64 * *count as u64)
            .sum()
    }

    /// Never exceeds `⌈u32::MAX / 4⌉ + 1`, so the sum fits.
    pub fn shelter_count(&self) -> u32 {
        self.groups().iter().map(|(_, count)| count).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShelterAccessories {
    pub doors: u32,
    pub lids: u32,
    pub gas_pumps: u64,
    pub magnets: u64,
    pub cost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoundationSlab {
    /// Identical slabs of this size
    pub count: u32,
    pub length_m: f64,
    pub width_m: f64,
    pub thickness_m: f64,
    pub volume_m3: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShelterFoundation {
    pub slabs: Vec<FoundationSlab>,
    pub total_area_m2: f64,
    pub total_volume_m3: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinShelterResult {
    pub bin_count: u32,
    pub bin_liters: u32,
    pub layout: ShelterLayout,
    pub shelter_count: u32,
    pub total_capacity: u64,
    pub accessories: ShelterAccessories,
    pub foundation: ShelterFoundation,
    pub total_weight_kg: f64,
    pub shelters_price: f64,
    pub total_price: f64,
}

fn shelter_unit(capacity: u32, bin_type: &BinTypeSpec, data: &ReferenceData) -> CalcResult<ShelterUnit> {
    let spec = data.bin_shelter(capacity).ok_or_else(|| {
        CalcError::invalid_input("bin_shelters", capacity.to_string(), "No shelter model for this capacity")
    })?;
    Ok(ShelterUnit {
        capacity,
        sku: spec.sku.clone(),
        name: spec.name.clone(),
        width_cm: spec.width_cm,
        depth_cm: round_to(spec.depth_cm * bin_type.depth_factor, 1),
        height_cm: spec.height_cm,
        weight_kg: spec.weight_kg,
        price: (spec.price * bin_type.price_factor).round(),
    })
}

/// Split `bin_count` bins across shelters.
fn size_shelters<F>(bin_count: u32, unit: &F) -> CalcResult<ShelterLayout>
where
    F: Fn(u32) -> CalcResult<ShelterUnit>,
{
    match bin_count {
        1..=LARGEST_SHELTER => Ok(ShelterLayout::Single {
            shelter: unit(bin_count)?,
        }),
        5..=8 => Ok(ShelterLayout::Combined {
            primary: unit(LARGEST_SHELTER)?,
            secondary: Box::new(size_shelters(bin_count - LARGEST_SHELTER, unit)?),
        }),
        _ => Ok(ShelterLayout::Repeated {
            shelter: unit(LARGEST_SHELTER)?,
            count: bin_count.div_ceil(LARGEST_SHELTER),
        }),
    }
}

fn foundation_for(layout: &ShelterLayout) -> ShelterFoundation {
    let slabs: Vec<FoundationSlab> = layout
        .groups()
        .iter()
        .map(|(unit, count)| {
            let (length_m, width_m) = foundation_footprint(unit.capacity);
            FoundationSlab {
                count: *count,
                length_m,
                width_m,
                thickness_m: FOUNDATION_THICKNESS_M,
                volume_m3: round_to(length_m * width_m * FOUNDATION_THICKNESS_M, 3),
            }
        })
        .collect();

    ShelterFoundation {
        total_area_m2: round_to(slabs.iter().map(|s| s.count as f64 * s.length_m * s.width_m).sum(), 2),
        total_volume_m3: round_to(slabs.iter().map(|s| s.count as f64 * s.volume_m3).sum(), 3),
        slabs,
    }
}

/// Shelters, accessories and foundations for `bin_count` bins of `bin_type`
/// ("240", "360", "660"; unknown types use the standard bin).
pub fn calculate_bin_shelter_requirements(bin_count: u32, bin_type: &str, data: &ReferenceData) -> CalcResult<BinShelterResult> {
    require_count("bin_count", bin_count)?;

    let bin_spec = data.bin_type(bin_type);
    let layout = size_shelters(bin_count, &|capacity| shelter_unit(capacity, bin_spec, data))?;

    let prices = data.accessory_prices();
    let doors = bin_count;
    let lids = bin_count;
    let gas_pumps = 2 * bin_count as u64;
    let magnets = 2 * bin_count as u64;
    let accessories = ShelterAccessories {
        doors,
        lids,
        gas_pumps,
        magnets,
        cost: doors as f64 * prices.door
            + lids as f64 * prices.lid
            + gas_pumps as f64 * prices.gas_pump
            + magnets as f64 * prices.magnet,
    };

    let groups = layout.groups();
    let shelters_price: f64 = groups.iter().map(|(u, count)| u.price * *count as f64).sum();
    let total_weight_kg: f64 = groups.iter().map(|(u, count)| u.weight_kg * *count as f64).sum();

    Ok(BinShelterResult {
        bin_count,
        bin_liters: bin_spec.liters,
        shelter_count: layout.shelter_count(),
        total_capacity: layout.total_capacity(),
        foundation: foundation_for(&layout),
        total_weight_kg,
        shelters_price,
        total_price: shelters_price + accessories.cost,
        accessories,
        layout,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calc(n: u32) -> BinShelterResult {
        calculate_bin_shelter_requirements(n, "240", ReferenceData::builtin()).unwrap()
    }

    #[test]
    fn test_single_shelter_for_small_counts() {
        for n in 1..=4 {
            let result = calc(n);
            assert!(matches!(result.layout, ShelterLayout::Single { .. }));
            assert_eq!(result.total_capacity, n as u64);
            assert_eq!(result.shelter_count, 1);
        }
    }

    #[test]
    fn test_five_bins_combine_four_and_one() {
        let result = calc(5);
        match &result.layout {
            ShelterLayout::Combined { primary, secondary } => {
                assert_eq!(primary.capacity, 4);
                match secondary.as_ref() {
                    ShelterLayout::Single { shelter } => assert_eq!(shelter.capacity, 1),
                    other => panic!("remainder should be a single shelter, got {:?}", other),
                }
            }
            other => panic!("expected combined layout, got {:?}", other),
        }
        assert_eq!(result.total_capacity, 5);
        assert_eq!(result.shelter_count, 2);
        assert_eq!(result.foundation.slabs.len(), 2);
    }

    #[test]
    fn test_eight_bins_are_two_full_shelters() {
        let result = calc(8);
        assert!(matches!(result.layout, ShelterLayout::Combined { .. }));
        assert_eq!(result.total_capacity, 8);
    }

    #[test]
    fn test_large_counts_repeat_four_bin_shelters() {
        let result = calc(10);
        match &result.layout {
            ShelterLayout::Repeated { shelter, count } => {
                assert_eq!(shelter.capacity, 4);
                assert_eq!(*count, 3);
            }
            other => panic!("expected repeated layout, got {:?}", other),
        }
        assert_eq!(result.total_capacity, 12);
        assert_eq!(result.shelter_count, 3);
        assert_eq!(result.foundation.slabs.len(), 1);
        assert_eq!(result.foundation.slabs[0].count, 3);
        // three 3.0 × 1.0 slabs
        assert_eq!(result.foundation.total_area_m2, 9.0);
        assert_eq!(result.foundation.total_volume_m3, 0.9);
    }

    #[test]
    fn test_huge_counts_stay_compact() {
        let result = calc(u32::MAX);
        let shelter = match &result.layout {
            ShelterLayout::Repeated { shelter, count } => {
                assert_eq!(*count, u32::MAX.div_ceil(4));
                shelter.clone()
            }
            other => panic!("expected repeated layout, got {:?}", other),
        };
        assert_eq!(result.shelter_count, u32::MAX.div_ceil(4));
        assert_eq!(result.total_capacity, 4 * u32::MAX.div_ceil(4) as u64);
        assert_eq!(result.accessories.gas_pumps, 2 * u32::MAX as u64);
        assert_eq!(result.foundation.slabs.len(), 1);
        assert_eq!(result.shelters_price, shelter.price * u32::MAX.div_ceil(4) as f64);
    }

    #[test]
    fn test_accessories_scale_with_bin_count() {
        let result = calc(3);
        assert_eq!(result.accessories.doors, 3);
        assert_eq!(result.accessories.lids, 3);
        assert_eq!(result.accessories.gas_pumps, 6);
        assert_eq!(result.accessories.magnets, 6);
        // 3 × 24 900 + 3 × 14 900 + 6 × 6 900 + 6 × 1 900
        assert_eq!(result.accessories.cost, 172_200.0);
    }

    #[test]
    fn test_foundation_dimensions() {
        let result = calc(2);
        let slab = &result.foundation.slabs[0];
        assert_eq!((slab.length_m, slab.width_m), (1.6, 1.0));
        assert_eq!(slab.volume_m3, 0.16);
    }

    #[test]
    fn test_large_bins_cost_more() {
        let standard = calc(2);
        let large = calculate_bin_shelter_requirements(2, "660", ReferenceData::builtin()).unwrap();
        assert!(large.shelters_price > standard.shelters_price);
        assert_eq!(large.bin_liters, 660);
    }

    #[test]
    fn test_zero_bins_rejected() {
        let err = calculate_bin_shelter_requirements(0, "240", ReferenceData::builtin()).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }
}
