//! Product catalog entries (paving stones, stone systems, sand).
//!
//! Prices are in ISK excluding VAT.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Unit geometry of a single paving stone, in centimetres
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StoneDimensions {
    pub length_cm: f64,
    pub width_cm: f64,
    pub thickness_cm: f64,
}

impl StoneDimensions {
    /// Face area in cm²
    pub fn face_area_cm2(&self) -> f64 {
        self.length_cm * self.width_cm
    }
}

/// One catalog entry.
///
/// Stone systems sold per square metre carry `price_per_area` and no
/// `dimensions`; everything else is priced per unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductInfo {
    pub sku: String,
    pub name: String,
    /// Sales unit label ("stk", "m²", "poki", ...)
    pub unit: String,
    /// Price per sales unit
    pub unit_price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_per_area: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<StoneDimensions>,
}

impl ProductInfo {
    /// True for systems priced per m² without per-unit geometry
    pub fn is_area_priced(&self) -> bool {
        self.price_per_area.is_some() && self.dimensions.is_none()
    }

    /// The m² price of an area-priced system
    pub fn area_price(&self) -> Option<f64> {
        self.price_per_area.filter(|_| self.is_area_priced())
    }
}

fn stone(sku: &str, name: &str, l: f64, w: f64, t: f64, price: f64) -> ProductInfo {
    ProductInfo {
        sku: sku.to_string(),
        name: name.to_string(),
        unit: "stk".to_string(),
        unit_price: price,
        price_per_area: None,
        dimensions: Some(StoneDimensions {
            length_cm: l,
            width_cm: w,
            thickness_cm: t,
        }),
    }
}

fn bagged(sku: &str, name: &str, unit: &str, price: f64) -> ProductInfo {
    ProductInfo {
        sku: sku.to_string(),
        name: name.to_string(),
        unit: unit.to_string(),
        unit_price: price,
        price_per_area: None,
        dimensions: None,
    }
}

/// Built-in product table
pub(crate) fn builtin_products() -> BTreeMap<String, ProductInfo> {
    let mut products = BTreeMap::new();
    products.insert("default".to_string(), stone("HEL-4040-6", "Hella 40x40x6", 40.0, 40.0, 6.0, 1290.0));
    products.insert("holmsteinn".to_string(), stone("HOL-2114-6", "Hólmsteinn 21x14x6", 21.0, 14.0, 6.0, 165.0));
    products.insert("gotusteinn".to_string(), stone("GOT-2010-6", "Götusteinn 20x10x6", 20.0, 10.0, 6.0, 120.0));
    products.insert("torgsteinn".to_string(), stone("TOR-3030-8", "Torgsteinn 30x30x8", 30.0, 30.0, 8.0, 890.0));
    products.insert("grassteinn".to_string(), stone("GRA-6040-10", "Grassteinn 60x40x10", 60.0, 40.0, 10.0, 2450.0));
    products.insert(
        "modena".to_string(),
        ProductInfo {
            sku: "MOD-KERFI".to_string(),
            name: "Modena hellukerfi".to_string(),
            unit: "m²".to_string(),
            unit_price: 8900.0,
            price_per_area: Some(8900.0),
            dimensions: None,
        },
    );
    products.insert(
        "undirlagssandur".to_string(),
        bagged("SAN-UND-1000", "Undirlagssandur, stórsekkur 1 m³", "stórsekkur", 14900.0),
    );
    products.insert(
        "fugusandur".to_string(),
        bagged("SAN-FUG-25", "Fúgusandur 25 kg", "poki", 1490.0),
    );
    products.insert(
        "polymersandur".to_string(),
        bagged("SAN-POL-25", "Polymer fúgusandur 25 kg", "poki", 5990.0),
    );
    products
}
