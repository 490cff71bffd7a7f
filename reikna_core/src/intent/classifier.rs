//! # Intent Classifier
//!
//! An ordered, immutable table of `(kind, patterns)` rules evaluated
//! against the folded query. Kinds are tried in table order and patterns
//! in list order; the first hit wins. There is no scoring, so a query that
//! matches two kinds always resolves to the one listed first:
//! "kolefnisspor og byggingartími" is a construction-time query because
//! `constructionTime` precedes `carbonFootprint`.
//!
//! Price queries get a second pass over the match groups to split an
//! optional leading quantity from the product name. When no rule matches, a
//! lower-confidence fallback looks for a known product or price word.
//!
//! Patterns are written against [`fold`] output: accents are stripped but
//! þ, ð and æ are kept.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

use super::extractors::{vocabulary_match, PRODUCT_VOCABULARY, STONE_VOCABULARY};
use super::kind::CalculationKind;
use super::parameters::ParameterSet;
use crate::text::fold;

/// How a kind was chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    /// A rule table pattern matched
    Pattern,
    /// Only a product or price word was recognized
    Fallback,
}

/// One row of the rule table
#[derive(Debug)]
pub struct IntentRule {
    pub kind: CalculationKind,
    pub patterns: Vec<Regex>,
}

/// Classifier output before parameter extraction
#[derive(Debug, Clone, PartialEq)]
pub struct DetectedIntent {
    pub kind: CalculationKind,
    /// Index of the matching pattern within its rule, `None` for fallback
    pub pattern_index: Option<usize>,
    /// Parameters read from the match groups themselves
    pub raw_parameters: ParameterSet,
    pub confidence: Confidence,
}

fn rule(kind: CalculationKind, patterns: &[&str]) -> IntentRule {
    IntentRule {
        kind,
        patterns: patterns
            .iter()
            .map(|p| Regex::new(p).unwrap_or_else(|e| panic!("bad pattern {p}: {e}")))
            .collect(),
    }
}

static RULES: Lazy<Vec<IntentRule>> = Lazy::new(|| {
    use CalculationKind::*;
    vec![
        rule(
            ProjectTimeline,
            &[
                r"verk\w*ætlun",
                r"tima\w*ætlun",
                r"framkvæmda\w*ætlun",
                r"\bverkferl",
                r"\bhvaða (?:verk)?þætt",
                r"project timeline",
            ],
        ),
        rule(
            ConstructionTime,
            &[
                r"byggingartim",
                r"\b(?:hversu|hve) lengi\b",
                r"\b(?:hversu|hve) langan tima",
                r"langan tima tekur",
                r"hvað tekur (?:það )?langan",
            ],
        ),
        rule(
            ConstructionCost,
            &[
                r"byggingarkostnað",
                r"kostar að byggja",
                r"kostar (?:\S+ ){0,3}?\w*(?:hus|husið|husi|bilskur)\b",
                r"kostnað\w* (?:við|vegna) (?:að byggja|\w*hus)",
            ],
        ),
        rule(
            MaterialRequirements,
            &[
                r"efnisþorf",
                r"\b(?:hversu|hve) mikið efni",
                r"efnismagn",
                r"efnislist",
                r"hvaða efni þarf",
            ],
        ),
        rule(
            EnvironmentalImpact,
            &[
                r"umhverfisahrif",
                r"\bvistspor",
                r"umhverfisvæn\w* \w*(?:hus|bygging)",
                r"kolefnisspor\w* \w*hus",
            ],
        ),
        rule(
            CarbonFootprint,
            &[r"kolefnisspor", r"\bco(?:2|₂)", r"\blosun", r"koltvisyring"],
        ),
        rule(
            ConcreteTypeRecommendation,
            &[
                r"\b(?:hvaða|hvers konar|hvernig) steyp",
                r"\bhvaða (?:tegund|gerð|styrkleika)\w* (?:af )?steyp",
                r"steypuflokk|styrkleikaflokk|styrkflokk",
                r"\bmæl\w* (?:\w+ ){0,2}?með (?:\w+ )?steyp",
                r"\brett\w* steyp",
            ],
        ),
        rule(
            PriceCalculation,
            &[
                r"kosta(?:r)?\s+(\S+)(?:\s+(.+))?",
                r"\bverð(?:ið)? (?:a|fyrir) (\S+)(?:\s+(.+))?",
            ],
        ),
        rule(
            ColumnWithPostVolume,
            &[r"\bsul\w*.*\b(?:\w*staur|stoð)", r"\b(?:\w*staur|stoð)\w*.*\bsul"],
        ),
        rule(
            ColumnVolume,
            &[r"\bsul(?:a|u|ur|um|na|nar|una|unni|an)\b", r"\bcolumn", r"\bstolpa?\b"],
        ),
        rule(
            ConcreteVolume,
            &[
                r"steypumagn",
                r"\bmikla steypu",
                r"\b(?:hversu|hve) mikið (?:af )?steypu",
                r"\bmagn\w* (?:af )?steypu",
                r"(?:m3|m³|rummetr\w*) (?:af )?steypu",
                r"\bsteyp\w* (?:\S+ ){0,2}?(?:plotu|plata|sokkul|golf|plan|undirstoð|innkeyrslu|stett)",
            ],
        ),
        rule(
            JointSand,
            &[r"\bfug[aiu]", r"polymer", r"fjolliðu", r"sand\w* milli hellna"],
        ),
        rule(
            BaseSand,
            &[
                r"undirlag",
                r"\bsand\w* undir",
                r"jofnunarsand",
                r"\b(?:hversu|hve) mikinn sand",
                r"\bsand",
            ],
        ),
        rule(
            PavingStones,
            &[
                r"\bhell[aun]",
                r"holmstein|gotustein|torgstein|grasstein|modena",
                r"\b(?:hversu|hve) marga steina",
            ],
        ),
        rule(
            BinShelterRequirements,
            &[
                r"\bsorp",
                r"tunn\w*skyl",
                r"\brusla(?:skyl|tunn)",
                r"\btunn(?:a|u|ur|um|unum|urnar)\b",
            ],
        ),
        rule(
            StepConfiguration,
            &[
                r"\btropp",
                r"\bþrep",
                r"\bstig(?:i|a|ar|ann|anum)\b",
                r"hæðarmun",
            ],
        ),
        rule(
            BarrierRequirements,
            &[r"\btalm", r"umferðartalm", r"hraðahindr|hraðaþrep", r"\bvegrið"],
        ),
        rule(BenchPlacement, &[r"\b(?:lang|bak|set)?bekk"]),
        rule(
            PlanterCalculation,
            &[
                r"blomak",
                r"groðurk",
                r"\b(?:hring|lang|sma)?ker(?:a|i|in|jum)?\b",
            ],
        ),
        rule(
            PostSpacing,
            &[r"pollar", r"\b\w*staur", r"\bgirðing", r"\bstolp"],
        ),
    ]
});

/// Words that alone mark a price question
const PRICE_WORDS: &[&str] = &[
    "verð",
    "verðið",
    "verði",
    "verðs",
    "verðlisti",
    "verðskra",
    "kostnaður",
    "kostnaði",
    "price",
    "isk",
];

/// The rule table, in evaluation order
pub fn rules() -> &'static [IntentRule] {
    &RULES
}

/// Normalize a product fragment from a price query to a catalog key.
///
/// Anything mentioning modena is `modena`. Known product words resolve to
/// their key; anything else is passed through and falls back to the
/// default entry at lookup time.
pub fn canonical_product(fragment: &str) -> String {
    let folded = fold(fragment.trim_matches(|c: char| c.is_ascii_punctuation() || c.is_whitespace()));
    if folded.contains("modena") {
        return "modena".to_string();
    }
    vocabulary_match(&folded, PRODUCT_VOCABULARY)
        .or_else(|| vocabulary_match(&folded, STONE_VOCABULARY))
        .map(str::to_string)
        .unwrap_or(folded)
}

/// Split "kostar [N] product..." into quantity and product.
fn price_parameters(caps: &Captures) -> ParameterSet {
    let first = caps.get(1).map(|m| m.as_str());
    let rest = caps.get(2).map(|m| m.as_str());

    let (quantity, fragment) = match first.and_then(|f| f.parse::<u32>().ok()) {
        Some(quantity) => (quantity, rest.map(str::to_string)),
        None => (
            1,
            first.map(|f| match rest {
                Some(r) => format!("{} {}", f, r),
                None => f.to_string(),
            }),
        ),
    };

    ParameterSet {
        quantity: Some(quantity),
        product: fragment.map(|f| canonical_product(&f)).filter(|p| !p.is_empty()),
        ..Default::default()
    }
}

fn fallback(normalized: &str) -> Option<DetectedIntent> {
    let product = vocabulary_match(normalized, PRODUCT_VOCABULARY);
    let asks_price = normalized
        .split(|c: char| !c.is_alphanumeric())
        .any(|w| PRICE_WORDS.contains(&w));
    if product.is_none() && !asks_price {
        return None;
    }

    tracing::debug!(product = ?product, "no rule matched, using product vocabulary fallback");
    Some(DetectedIntent {
        kind: CalculationKind::PriceCalculation,
        pattern_index: None,
        raw_parameters: ParameterSet {
            product: product.map(str::to_string),
            ..Default::default()
        },
        confidence: Confidence::Fallback,
    })
}

/// Detect the calculation kind of a query.
///
/// Returns `None` when neither the rule table nor the fallback recognizes it.
pub fn detect_calculation_intent(query: &str) -> Option<DetectedIntent> {
    let normalized = fold(query);

    for rule in rules() {
        for (index, pattern) in rule.patterns.iter().enumerate() {
            let Some(caps) = pattern.captures(&normalized) else {
                continue;
            };
            tracing::debug!(kind = %rule.kind, pattern = index, "query matched rule");
            let raw_parameters = match rule.kind {
                CalculationKind::PriceCalculation => price_parameters(&caps),
                _ => ParameterSet::default(),
            };
            return Some(DetectedIntent {
                kind: rule.kind,
                pattern_index: Some(index),
                raw_parameters,
                confidence: Confidence::Pattern,
            });
        }
    }

    fallback(&normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind_of(query: &str) -> Option<CalculationKind> {
        detect_calculation_intent(query).map(|d| d.kind)
    }

    #[test]
    fn test_every_kind_has_a_rule() {
        for kind in CalculationKind::ALL {
            assert!(rules().iter().any(|r| r.kind == kind), "no rule for {}", kind);
        }
        assert_eq!(rules().len(), CalculationKind::ALL.len());
    }

    #[test]
    fn test_representative_queries() {
        use CalculationKind::*;
        let cases = [
            ("Hversu margar hellur þarf ég á 5x5 m plan?", PavingStones),
            ("Hvað þarf mikinn sand undir hellur á 5x5 m?", BaseSand),
            ("Fúgusandur fyrir 40x40 hellur á 25 m2", JointSand),
            ("Hvað þarf mikla steypu í 5x4 m plötu 10 cm þykka?", ConcreteVolume),
            ("Steypa súlu 30 cm í þvermál, 2,5 m há", ColumnVolume),
            ("Súla 30 cm með 2 staurum 10x10 cm", ColumnWithPostVolume),
            ("Hvaða steypu á ég að nota í innkeyrslu?", ConcreteTypeRecommendation),
            ("Kolefnisspor 10 m3 af C30 steypu", CarbonFootprint),
            ("Hvað tekur langan tíma að byggja 120 fm einbýlishús?", ConstructionTime),
            ("Hvað kostar að byggja 150 fm parhús?", ConstructionCost),
            ("Efnisþörf fyrir 144 fm einingahús", MaterialRequirements),
            ("Umhverfisáhrif einingahúss", EnvironmentalImpact),
            ("Verkáætlun fyrir 120 fm hús", ProjectTimeline),
            ("Skýli fyrir 3 sorptunnur", BinShelterRequirements),
            ("Pollarar meðfram 20 m gangstétt", PostSpacing),
            ("4 bekkir í hring", BenchPlacement),
            ("Blómaker fyrir 10x10 m torg", PlanterCalculation),
            ("Tröppur fyrir 100 cm hæðarmun", StepConfiguration),
            ("Umferðartálmar á 20 m kafla", BarrierRequirements),
            ("Hvað kosta 10 hólmsteinar?", PriceCalculation),
        ];
        for (query, expected) in cases {
            assert_eq!(kind_of(query), Some(expected), "query: {}", query);
        }
    }

    #[test]
    fn test_table_order_breaks_ties() {
        // Matches both constructionTime and carbonFootprint
        let query = "kolefnisspor og byggingartími";
        for _ in 0..3 {
            assert_eq!(kind_of(query), Some(CalculationKind::ConstructionTime));
        }
    }

    #[test]
    fn test_price_quantity_and_product() {
        let detected = detect_calculation_intent("Hvað kosta 10 hólmsteinar?").unwrap();
        assert_eq!(detected.raw_parameters.quantity, Some(10));
        assert_eq!(detected.raw_parameters.product.as_deref(), Some("holmsteinn"));

        let detected = detect_calculation_intent("hvað kostar Modena hellukerfi grátt").unwrap();
        assert_eq!(detected.kind, CalculationKind::PriceCalculation);
        assert_eq!(detected.raw_parameters.quantity, Some(1));
        assert_eq!(detected.raw_parameters.product.as_deref(), Some("modena"));
    }

    #[test]
    fn test_fallback_on_price_word() {
        let detected = detect_calculation_intent("verðlisti").unwrap();
        assert_eq!(detected.kind, CalculationKind::PriceCalculation);
        assert_eq!(detected.confidence, Confidence::Fallback);
        assert_eq!(detected.pattern_index, None);
    }

    #[test]
    fn test_fallback_on_product_word() {
        // every product word also hits a rule, so the branch is reached directly
        let detected = fallback(&fold("Götusteinn")).unwrap();
        assert_eq!(detected.kind, CalculationKind::PriceCalculation);
        assert_eq!(detected.confidence, Confidence::Fallback);
        assert_eq!(detected.raw_parameters.product.as_deref(), Some("gotusteinn"));

        let priced = fallback(&fold("verð á fúgusandi")).unwrap();
        assert_eq!(priced.raw_parameters.product.as_deref(), Some("fugusandur"));
        assert!(fallback("godan daginn").is_none());
    }

    #[test]
    fn test_unclassifiable() {
        assert_eq!(kind_of("góðan daginn"), None);
        assert_eq!(kind_of(""), None);
    }
}
