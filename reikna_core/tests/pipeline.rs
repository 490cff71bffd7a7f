//! Query-to-result tests across classifier, extractors, router and formulas.

use reikna_core::calculations::{PavingStonesResult, StepConfiguration};
use reikna_core::{classify_intent, compute, CalcResult, CalculationKind, CalculationResult, Constrained, ReferenceData, Settings};

fn answer(query: &str) -> CalcResult<CalculationResult> {
    let intent = classify_intent(query).unwrap_or_else(|| panic!("unclassified: {}", query));
    compute(intent.kind, &intent.parameters, &Settings::default(), ReferenceData::builtin())
}

#[test]
fn test_paving_stones_query() {
    let result = answer("Hversu margar hellur þarf ég á 5x4 m plan?").unwrap();
    let CalculationResult::PavingStones(PavingStonesResult::Units(estimate)) = result else {
        panic!("expected per-unit paving estimate, got {:?}", result);
    };
    assert_eq!(estimate.sku, "HEL-4040-6");
    assert_eq!(estimate.raw_count, 125);
    assert_eq!(estimate.number_of_stones, 132);
}

#[test]
fn test_modena_is_area_priced() {
    let result = answer("Modena hellur á 6x5 m verönd").unwrap();
    let CalculationResult::PavingStones(PavingStonesResult::AreaPriced(estimate)) = result else {
        panic!("expected area-priced estimate, got {:?}", result);
    };
    assert!((estimate.area_m2 - 30.0).abs() < 1e-9);
}

#[test]
fn test_price_query() {
    let result = answer("Hvað kosta 10 hólmsteinar?").unwrap();
    let CalculationResult::PriceCalculation(price) = result else {
        panic!("expected price, got {:?}", result);
    };
    assert_eq!(price.quantity, 10);
    assert_eq!(price.sku, "HOL-2114-6");
    assert!((price.subtotal - 1650.0).abs() < 1e-9);
    assert!((price.vat - 396.0).abs() < 1e-9);
    assert!((price.total - 2046.0).abs() < 1e-9);
}

#[test]
fn test_slab_query() {
    let result = answer("Hvað þarf mikla steypu í 5x4 m plötu 10 cm þykka?").unwrap();
    let CalculationResult::ConcreteVolume(slab) = result else {
        panic!("expected slab volume, got {:?}", result);
    };
    assert!((slab.volume_m3 - 2.0).abs() < 1e-9);
    assert!((slab.volume_with_waste_m3 - 2.1).abs() < 1e-9);
}

#[test]
fn test_housing_query() {
    let result = answer("Hvað tekur langan tíma að byggja 120 fm einbýlishús?").unwrap();
    let CalculationResult::ConstructionTime(time) = result else {
        panic!("expected construction time, got {:?}", result);
    };
    assert!((time.area_m2 - 120.0).abs() < 1e-9);
    assert_eq!(time.building_type, "Einbýlishús");
    assert!(time.traditional_days > time.prefab_days);
}

#[test]
fn test_bin_shelter_query() {
    let result = answer("Skýli fyrir 3 sorptunnur").unwrap();
    let CalculationResult::BinShelterRequirements(shelter) = result else {
        panic!("expected bin shelter, got {:?}", result);
    };
    assert_eq!(shelter.bin_count, 3);
    assert_eq!(shelter.total_capacity, 3);
    assert_eq!(shelter.shelter_count, 1);
}

#[test]
fn test_benches_in_a_circle() {
    let result = answer("4 bekkir í hring með 3 m þvermál").unwrap();
    let CalculationResult::BenchPlacement(Constrained::Satisfied(placement)) = result else {
        panic!("expected a satisfied placement, got {:?}", result);
    };
    assert_eq!(placement.bench_count, 4);
    assert_eq!(placement.total_seats, 12);
}

#[test]
fn test_too_many_benches_is_a_result() {
    let result = answer("10 bekkir í hring með 3 m þvermál").unwrap();
    let violation = result.capacity_violation().expect("circle holds 5 benches");
    assert_eq!(violation.requested, 10);
    assert_eq!(violation.capacity, 5);
}

#[test]
fn test_steps_query() {
    let result = answer("Tröppur fyrir 100 cm hæðarmun").unwrap();
    let CalculationResult::StepConfiguration(StepConfiguration::Standard(layout)) = result else {
        panic!("expected a standard fit, got {:?}", result);
    };
    assert_eq!(layout.step_count, 6);
}

#[test]
fn test_invalid_dimension_is_reported() {
    let err = answer("Hversu margar hellur á 0x4 m plan?").unwrap_err();
    assert_eq!(err.error_code(), "INVALID_INPUT");
    assert!(!err.is_fatal());
}

#[test]
fn test_huge_bin_count_is_answered() {
    let result = answer("Skýli fyrir 4294967295 sorptunnur").unwrap();
    let CalculationResult::BinShelterRequirements(shelter) = result else {
        panic!("expected bin shelter, got {:?}", result);
    };
    assert_eq!(shelter.bin_count, u32::MAX);
    assert_eq!(shelter.foundation.slabs.len(), 1);
    assert!(shelter.total_capacity >= u32::MAX as u64);
}

#[test]
fn test_oversized_results_are_invalid_input() {
    for query in [
        "Hvað tekur langan tíma að byggja 100000000000000 fm einbýlishús?",
        "Hversu margar hellur þarf ég á 10000000000x10000000000 m plan?",
    ] {
        let err = answer(query).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT", "{}", query);
    }
}

#[test]
fn test_unclassifiable_query() {
    assert!(classify_intent("Góðan daginn").is_none());
}

#[test]
fn test_result_json_carries_kind() {
    let result = answer("Fúgusandur fyrir 40x40 cm hellur á 25 m2").unwrap();
    assert_eq!(result.kind(), CalculationKind::JointSand);
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["kind"], "jointSand");
}
