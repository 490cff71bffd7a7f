//! Structured parameters pulled from a query.

use serde::{Deserialize, Serialize};

/// Every fact the extractors can pull from a query. Unset fields are
/// resolved by the router.
///
/// Units are fixed per field: lengths in metres, thickness / diameter /
/// post and stone dimensions / height difference / available space in
/// centimetres, joint width in millimetres.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParameterSet {
    /// m
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,
    /// m
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// m²
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<f64>,
    /// m³
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
    /// cm
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thickness: Option<f64>,
    /// cm
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diameter: Option<f64>,
    /// m
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stone_type: Option<String>,
    /// cm, longest side of the stone
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stone_size: Option<f64>,
    /// mm
    #[serde(skip_serializing_if = "Option::is_none")]
    pub joint_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub joint_pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_polymer_sand: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub concrete_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub building_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environmental_focus: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bin_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bin_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_type: Option<String>,
    /// m, centre to centre
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spacing: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bench_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bench_count: Option<u32>,
    /// line | facing | circle | random
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arrangement: Option<String>,
    /// m
    #[serde(skip_serializing_if = "Option::is_none")]
    pub circle_diameter: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub planter_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barrier_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height_difference: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_space: Option<f64>,
}

macro_rules! merge_fields {
    ($target:expr, $later:expr, $($field:ident),+ $(,)?) => {
        $(
            if $later.$field.is_some() {
                $target.$field = $later.$field;
            }
        )+
    };
}

impl ParameterSet {
    /// Overwrite every field that `later` sets.
    pub fn merge(&mut self, later: ParameterSet) {
        merge_fields!(
            self,
            later,
            length,
            width,
            area,
            volume,
            thickness,
            diameter,
            height,
            post_width,
            post_height,
            post_count,
            quantity,
            product,
            stone_type,
            stone_size,
            joint_width,
            joint_pattern,
            use_polymer_sand,
            usage,
            concrete_type,
            building_type,
            environmental_focus,
            bin_count,
            bin_type,
            post_type,
            spacing,
            bench_type,
            bench_count,
            arrangement,
            circle_diameter,
            planter_type,
            barrier_type,
            height_difference,
            available_space,
        );
    }

    /// Builder-style merge
    pub fn merged(mut self, later: ParameterSet) -> ParameterSet {
        self.merge(later);
        self
    }

    pub fn is_empty(&self) -> bool {
        self == &ParameterSet::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_overwrites_only_set_fields() {
        let mut base = ParameterSet {
            length: Some(5.0),
            width: Some(4.0),
            stone_type: Some("default".to_string()),
            ..Default::default()
        };
        base.merge(ParameterSet {
            width: Some(6.0),
            quantity: Some(3),
            ..Default::default()
        });
        assert_eq!(base.length, Some(5.0));
        assert_eq!(base.width, Some(6.0));
        assert_eq!(base.quantity, Some(3));
        assert_eq!(base.stone_type.as_deref(), Some("default"));
    }

    #[test]
    fn test_serializes_camel_case_without_nones() {
        let params = ParameterSet {
            height_difference: Some(100.0),
            ..Default::default()
        };
        let json = serde_json::to_string(&params).unwrap();
        assert_eq!(json, r#"{"heightDifference":100.0}"#);
        assert!(ParameterSet::default().is_empty());
    }
}
