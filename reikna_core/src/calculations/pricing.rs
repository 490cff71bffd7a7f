//! Catalog price with VAT.
//!
//! Unknown products resolve to the catalog default. Area-priced systems
//! (e.g. Modena) treat the quantity as square metres.

use serde::{Deserialize, Serialize};

use crate::catalog::ReferenceData;
use crate::errors::{require_count, CalcResult};
use crate::settings::Settings;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PricingBasis {
    PerUnit,
    PerSquareMeter,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceResult {
    pub product_name: String,
    pub sku: String,
    pub unit: String,
    pub basis: PricingBasis,
    pub quantity: u32,
    pub unit_price: f64,
    pub subtotal: f64,
    pub vat_rate: f64,
    pub vat: f64,
    pub total: f64,
    pub currency: String,
}

pub fn calculate_price(product: &str, quantity: u32, settings: &Settings, data: &ReferenceData) -> CalcResult<PriceResult> {
    require_count("quantity", quantity)?;
    let info = data.lookup_product_info(product);

    let (basis, unit_price, unit) = match info.area_price() {
        Some(per_m2) => (PricingBasis::PerSquareMeter, per_m2, "m²".to_string()),
        None => (PricingBasis::PerUnit, info.unit_price, info.unit.clone()),
    };

    let subtotal = unit_price * quantity as f64;
    let vat = (subtotal * settings.vat_rate).round();

    Ok(PriceResult {
        product_name: info.name.clone(),
        sku: info.sku.clone(),
        unit,
        basis,
        quantity,
        unit_price,
        subtotal,
        vat_rate: settings.vat_rate,
        vat,
        total: subtotal + vat,
        currency: settings.currency.clone(),
    })
}
