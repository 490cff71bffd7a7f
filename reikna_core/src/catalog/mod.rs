//! # Reference Data
//!
//! Read-only product, price and coefficient tables consumed by the formula
//! library. The tables are process-wide configuration: the built-in set is
//! constructed once on first use, and a deployment can replace it with a
//! TOML file at startup.
//!
//! ## Default fallback
//!
//! Every table carries a reserved `"default"` entry. A lookup with an
//! unrecognized key resolves to that entry instead of failing; unknown
//! product, usage or building-type tokens are never an error.
//!
//! ## Example
//!
//! ```rust
//! use reikna_core::catalog::ReferenceData;
//!
//! let data = ReferenceData::builtin();
//! let known = data.lookup_product_info("holmsteinn");
//! let unknown = data.lookup_product_info("no-such-stone");
//! assert_eq!(unknown.sku, data.lookup_product_info("default").sku);
//! assert_ne!(known.sku, unknown.sku);
//! ```

pub mod building_types;
pub mod concrete;
pub mod precast;
pub mod products;

pub use building_types::BuildingTypeCoefficients;
pub use concrete::ConcreteGrade;
pub use precast::{
    AccessoryPrices, BarrierLayout, BarrierTypeSpec, BarrierVariant, BenchTypeSpec, BinShelterSpec, BinTypeSpec,
    FootingDimensions, PlanterTypeSpec, PostTypeSpec,
};
pub use products::{ProductInfo, StoneDimensions};

use std::collections::BTreeMap;
use std::path::Path;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::text::table_key;

/// Reserved key every table must contain
pub const DEFAULT_KEY: &str = "default";

static BUILTIN: Lazy<ReferenceData> = Lazy::new(ReferenceData::builtin_tables);

/// All reference tables used by the formula library.
///
/// Fields are crate-private and every deserialization goes through
/// [`ReferenceData::validate`], so a set can never lack its default entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawReferenceData")]
pub struct ReferenceData {
    pub(crate) products: BTreeMap<String, ProductInfo>,
    pub(crate) concrete_grades: BTreeMap<String, ConcreteGrade>,
    pub(crate) building_types: BTreeMap<String, BuildingTypeCoefficients>,
    pub(crate) bin_shelters: Vec<BinShelterSpec>,
    pub(crate) bin_types: BTreeMap<String, BinTypeSpec>,
    pub(crate) accessory_prices: AccessoryPrices,
    pub(crate) post_types: BTreeMap<String, PostTypeSpec>,
    pub(crate) bench_types: BTreeMap<String, BenchTypeSpec>,
    pub(crate) planter_types: BTreeMap<String, PlanterTypeSpec>,
    pub(crate) barrier_types: BTreeMap<String, BarrierTypeSpec>,
}

/// Unvalidated wire form. Tables omitted from an override keep their
/// built-in contents.
#[derive(Debug, Deserialize)]
struct RawReferenceData {
    #[serde(default = "products::builtin_products")]
    products: BTreeMap<String, ProductInfo>,
    #[serde(default = "concrete::builtin_concrete_grades")]
    concrete_grades: BTreeMap<String, ConcreteGrade>,
    #[serde(default = "building_types::builtin_building_types")]
    building_types: BTreeMap<String, BuildingTypeCoefficients>,
    #[serde(default = "precast::builtin_bin_shelters")]
    bin_shelters: Vec<BinShelterSpec>,
    #[serde(default = "precast::builtin_bin_types")]
    bin_types: BTreeMap<String, BinTypeSpec>,
    #[serde(default)]
    accessory_prices: AccessoryPrices,
    #[serde(default = "precast::builtin_post_types")]
    post_types: BTreeMap<String, PostTypeSpec>,
    #[serde(default = "precast::builtin_bench_types")]
    bench_types: BTreeMap<String, BenchTypeSpec>,
    #[serde(default = "precast::builtin_planter_types")]
    planter_types: BTreeMap<String, PlanterTypeSpec>,
    #[serde(default = "precast::builtin_barrier_types")]
    barrier_types: BTreeMap<String, BarrierTypeSpec>,
}

impl TryFrom<RawReferenceData> for ReferenceData {
    type Error = CalcError;

    fn try_from(raw: RawReferenceData) -> CalcResult<Self> {
        let data = ReferenceData {
            products: raw.products,
            concrete_grades: raw.concrete_grades,
            building_types: raw.building_types,
            bin_shelters: raw.bin_shelters,
            bin_types: raw.bin_types,
            accessory_prices: raw.accessory_prices,
            post_types: raw.post_types,
            bench_types: raw.bench_types,
            planter_types: raw.planter_types,
            barrier_types: raw.barrier_types,
        };
        data.validate()?;
        Ok(data)
    }
}

/// Resolve `key` in `table`, falling back to the `"default"` entry.
///
/// Tables are validated on construction, so the default entry is always
/// present; the `expect` here documents that invariant.
fn lookup<'a, T>(table_name: &str, table: &'a BTreeMap<String, T>, key: &str) -> &'a T {
    let normalized = table_key(key);
    if let Some(entry) = table.get(&normalized) {
        return entry;
    }
    tracing::debug!(table = table_name, key = %key, "unrecognized key, using default entry");
    table
        .get(DEFAULT_KEY)
        .expect("reference tables are validated to contain a default entry")
}

impl ReferenceData {
    /// The built-in tables, shared process-wide.
    pub fn builtin() -> &'static ReferenceData {
        &BUILTIN
    }

    fn builtin_tables() -> ReferenceData {
        ReferenceData {
            products: products::builtin_products(),
            concrete_grades: concrete::builtin_concrete_grades(),
            building_types: building_types::builtin_building_types(),
            bin_shelters: precast::builtin_bin_shelters(),
            bin_types: precast::builtin_bin_types(),
            accessory_prices: AccessoryPrices::default(),
            post_types: precast::builtin_post_types(),
            bench_types: precast::builtin_bench_types(),
            planter_types: precast::builtin_planter_types(),
            barrier_types: precast::builtin_barrier_types(),
        }
    }

    /// Parse a full reference-data set from TOML and validate it.
    ///
    /// Parse failures are `SerializationError`; a parsed set that fails
    /// validation keeps its `InvalidInput`.
    pub fn from_toml_str(source: &str) -> CalcResult<ReferenceData> {
        let raw: RawReferenceData = toml::from_str(source).map_err(|e| CalcError::serialization(e.to_string()))?;
        ReferenceData::try_from(raw)
    }

    /// Load a reference-data override from a TOML file.
    pub fn load(path: &Path) -> CalcResult<ReferenceData> {
        let source = std::fs::read_to_string(path)
            .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;
        let data = Self::from_toml_str(&source)?;
        tracing::debug!(path = %path.display(), products = data.products.len(), "loaded reference data");
        Ok(data)
    }

    /// Every keyed table must have a default entry and the shelter table
    /// must cover capacities 1 through 4.
    pub fn validate(&self) -> CalcResult<()> {
        let keyed: [(&str, bool); 8] = [
            ("products", self.products.contains_key(DEFAULT_KEY)),
            ("concrete_grades", self.concrete_grades.contains_key(DEFAULT_KEY)),
            ("building_types", self.building_types.contains_key(DEFAULT_KEY)),
            ("bin_types", self.bin_types.contains_key(DEFAULT_KEY)),
            ("post_types", self.post_types.contains_key(DEFAULT_KEY)),
            ("bench_types", self.bench_types.contains_key(DEFAULT_KEY)),
            ("planter_types", self.planter_types.contains_key(DEFAULT_KEY)),
            ("barrier_types", self.barrier_types.contains_key(DEFAULT_KEY)),
        ];
        for (table, has_default) in keyed {
            if !has_default {
                return Err(CalcError::invalid_input(table, "", "Table is missing the 'default' entry"));
            }
        }
        for capacity in 1..=4 {
            if self.bin_shelter(capacity).is_none() {
                return Err(CalcError::invalid_input(
                    "bin_shelters",
                    capacity.to_string(),
                    "Shelter table must cover capacities 1-4",
                ));
            }
        }
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Lookups
    // ------------------------------------------------------------------------

    pub fn lookup_product_info(&self, key: &str) -> &ProductInfo {
        lookup("products", &self.products, key)
    }

    pub fn lookup_building_type_coefficients(&self, key: &str) -> &BuildingTypeCoefficients {
        lookup("building_types", &self.building_types, key)
    }

    pub fn concrete_grade(&self, key: &str) -> &ConcreteGrade {
        lookup("concrete_grades", &self.concrete_grades, key)
    }

    pub fn bin_type(&self, key: &str) -> &BinTypeSpec {
        lookup("bin_types", &self.bin_types, key)
    }

    pub fn post_type(&self, key: &str) -> &PostTypeSpec {
        lookup("post_types", &self.post_types, key)
    }

    pub fn bench_type(&self, key: &str) -> &BenchTypeSpec {
        lookup("bench_types", &self.bench_types, key)
    }

    pub fn planter_type(&self, key: &str) -> &PlanterTypeSpec {
        lookup("planter_types", &self.planter_types, key)
    }

    pub fn barrier_type(&self, key: &str) -> &BarrierTypeSpec {
        lookup("barrier_types", &self.barrier_types, key)
    }

    /// Shelter model for an exact capacity (1-4)
    pub fn bin_shelter(&self, capacity: u32) -> Option<&BinShelterSpec> {
        self.bin_shelters.iter().find(|s| s.capacity == capacity)
    }

    /// Whether a product key (after folding) names a catalog entry
    pub fn has_product(&self, key: &str) -> bool {
        self.products.contains_key(&table_key(key))
    }

    pub fn accessory_prices(&self) -> &AccessoryPrices {
        &self.accessory_prices
    }
}

/// Look up a product in the built-in catalog.
pub fn lookup_product_info(key: &str) -> &'static ProductInfo {
    ReferenceData::builtin().lookup_product_info(key)
}

/// Look up building-type coefficients in the built-in tables.
pub fn lookup_building_type_coefficients(key: &str) -> &'static BuildingTypeCoefficients {
    ReferenceData::builtin().lookup_building_type_coefficients(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_is_valid() {
        assert!(ReferenceData::builtin().validate().is_ok());
    }

    #[test]
    fn test_unknown_keys_fall_back_to_default() {
        let data = ReferenceData::builtin();
        assert_eq!(data.lookup_product_info("xyz").sku, data.products["default"].sku);
        assert_eq!(
            data.lookup_building_type_coefficients("geimstöð").name,
            data.building_types["default"].name
        );
        assert_eq!(data.bench_type("hásæti").name, data.bench_types["default"].name);
        assert_eq!(data.concrete_grade("C99").strength_class, "C30/37");
    }

    #[test]
    fn test_lookup_folds_keys() {
        let data = ReferenceData::builtin();
        assert_eq!(data.lookup_building_type_coefficients("Einbýlishús").name, "Einbýlishús");
        assert_eq!(data.lookup_product_info("Modena hellur").sku, "MOD-KERFI");
        assert_eq!(data.concrete_grade("C25").strength_class, "C25/30");
    }

    #[test]
    fn test_free_function_lookups() {
        assert_eq!(lookup_product_info("gotusteinn").sku, "GOT-2010-6");
        assert_eq!(lookup_building_type_coefficients("sumarhus").base_time_days, 25.0);
    }

    #[test]
    fn test_shelter_capacities() {
        let data = ReferenceData::builtin();
        for capacity in 1..=4 {
            assert_eq!(data.bin_shelter(capacity).unwrap().capacity, capacity);
        }
        assert!(data.bin_shelter(5).is_none());
    }

    #[test]
    fn test_toml_override_requires_default() {
        let mut data = ReferenceData::builtin().clone();
        data.products.remove(DEFAULT_KEY);
        assert!(data.validate().is_err());
    }

    #[test]
    fn test_serde_paths_reject_missing_default() {
        let source = r#"
            [products.hella]
            sku = "HEL-4040-6"
            name = "Hella 40x40"
            unit = "stk"
            unit_price = 1290.0
        "#;
        let err = ReferenceData::from_toml_str(source).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");

        // direct deserialization cannot skip validation either
        assert!(toml::from_str::<ReferenceData>(source).is_err());
        let mut json = serde_json::to_value(ReferenceData::builtin()).unwrap();
        json["bench_types"].as_object_mut().unwrap().remove(DEFAULT_KEY);
        assert!(serde_json::from_value::<ReferenceData>(json).is_err());
    }

    #[test]
    fn test_partial_override_keeps_builtin_tables() {
        let source = r#"
            [accessory_prices]
            door = 1.0
            lid = 1.0
            gas_pump = 1.0
            magnet = 1.0
        "#;
        let data: ReferenceData = toml::from_str(source).unwrap();
        assert_eq!(data.products, ReferenceData::builtin().products);
        assert_eq!(data.accessory_prices().door, 1.0);
    }

    #[test]
    fn test_load_missing_file() {
        let err = ReferenceData::load(Path::new("/nonexistent/reikna/reference.toml")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_toml_roundtrip_of_builtin() {
        let toml_text = toml::to_string(ReferenceData::builtin()).unwrap();
        let parsed = ReferenceData::from_toml_str(&toml_text).unwrap();
        assert_eq!(&parsed, ReferenceData::builtin());
    }

    #[test]
    fn test_bundled_sample_file_parses() {
        let sample = include_str!("../../data/reference.toml");
        let data = ReferenceData::from_toml_str(sample).unwrap();
        assert_eq!(data.lookup_product_info("hella").sku, "HEL-4040-6");
    }
}
