//! The fixed set of calculation kinds a query can be routed to.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CalcError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CalculationKind {
    PavingStones,
    BaseSand,
    JointSand,
    ConcreteVolume,
    ColumnVolume,
    ColumnWithPostVolume,
    ConcreteTypeRecommendation,
    CarbonFootprint,
    ConstructionTime,
    ConstructionCost,
    MaterialRequirements,
    EnvironmentalImpact,
    ProjectTimeline,
    BinShelterRequirements,
    PostSpacing,
    BenchPlacement,
    PlanterCalculation,
    StepConfiguration,
    BarrierRequirements,
    PriceCalculation,
}

impl CalculationKind {
    pub const ALL: [CalculationKind; 20] = [
        CalculationKind::PavingStones,
        CalculationKind::BaseSand,
        CalculationKind::JointSand,
        CalculationKind::ConcreteVolume,
        CalculationKind::ColumnVolume,
        CalculationKind::ColumnWithPostVolume,
        CalculationKind::ConcreteTypeRecommendation,
        CalculationKind::CarbonFootprint,
        CalculationKind::ConstructionTime,
        CalculationKind::ConstructionCost,
        CalculationKind::MaterialRequirements,
        CalculationKind::EnvironmentalImpact,
        CalculationKind::ProjectTimeline,
        CalculationKind::BinShelterRequirements,
        CalculationKind::PostSpacing,
        CalculationKind::BenchPlacement,
        CalculationKind::PlanterCalculation,
        CalculationKind::StepConfiguration,
        CalculationKind::BarrierRequirements,
        CalculationKind::PriceCalculation,
    ];

    /// Wire name, as used in JSON
    pub fn as_str(&self) -> &'static str {
        match self {
            CalculationKind::PavingStones => "pavingStones",
            CalculationKind::BaseSand => "baseSand",
            CalculationKind::JointSand => "jointSand",
            CalculationKind::ConcreteVolume => "concreteVolume",
            CalculationKind::ColumnVolume => "columnVolume",
            CalculationKind::ColumnWithPostVolume => "columnWithPostVolume",
            CalculationKind::ConcreteTypeRecommendation => "concreteTypeRecommendation",
            CalculationKind::CarbonFootprint => "carbonFootprint",
            CalculationKind::ConstructionTime => "constructionTime",
            CalculationKind::ConstructionCost => "constructionCost",
            CalculationKind::MaterialRequirements => "materialRequirements",
            CalculationKind::EnvironmentalImpact => "environmentalImpact",
            CalculationKind::ProjectTimeline => "projectTimeline",
            CalculationKind::BinShelterRequirements => "binShelterRequirements",
            CalculationKind::PostSpacing => "postSpacing",
            CalculationKind::BenchPlacement => "benchPlacement",
            CalculationKind::PlanterCalculation => "planterCalculation",
            CalculationKind::StepConfiguration => "stepConfiguration",
            CalculationKind::BarrierRequirements => "barrierRequirements",
            CalculationKind::PriceCalculation => "priceCalculation",
        }
    }

    /// Icelandic label for summaries
    pub fn display_name(&self) -> &'static str {
        match self {
            CalculationKind::PavingStones => "Hellulögn",
            CalculationKind::BaseSand => "Undirlagssandur",
            CalculationKind::JointSand => "Fúgusandur",
            CalculationKind::ConcreteVolume => "Steypumagn",
            CalculationKind::ColumnVolume => "Súlusteypa",
            CalculationKind::ColumnWithPostVolume => "Súlusteypa með staurum",
            CalculationKind::ConcreteTypeRecommendation => "Val á steypu",
            CalculationKind::CarbonFootprint => "Kolefnisspor",
            CalculationKind::ConstructionTime => "Byggingartími",
            CalculationKind::ConstructionCost => "Byggingarkostnaður",
            CalculationKind::MaterialRequirements => "Efnisþörf",
            CalculationKind::EnvironmentalImpact => "Umhverfisáhrif",
            CalculationKind::ProjectTimeline => "Verkáætlun",
            CalculationKind::BinShelterRequirements => "Sorptunnuskýli",
            CalculationKind::PostSpacing => "Pollarar og staurar",
            CalculationKind::BenchPlacement => "Bekkir",
            CalculationKind::PlanterCalculation => "Blómaker",
            CalculationKind::StepConfiguration => "Tröppur",
            CalculationKind::BarrierRequirements => "Tálmar",
            CalculationKind::PriceCalculation => "Verð",
        }
    }
}

impl fmt::Display for CalculationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CalculationKind {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CalculationKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| CalcError::unknown_kind(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_match_serde() {
        for kind in CalculationKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
            assert_eq!(kind.as_str().parse::<CalculationKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_unknown_name() {
        let err = "roofTiles".parse::<CalculationKind>().unwrap_err();
        assert!(err.is_fatal());
        assert_eq!(err.error_code(), "UNKNOWN_KIND");
    }
}
