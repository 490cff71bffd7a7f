//! # Parameter Extractors
//!
//! Independent text-to-value converters. Each one scans the original query
//! for a single fact and returns `None` when it is not there; none of them
//! can fail. Numeric extractors accept both `2.5` and `2,5`.
//!
//! Units are normalized on the way out: a thickness written as "30 mm" is
//! returned as `3.0` (cm), a height written as "250 cm" as `2.5` (m). See
//! [`ParameterSet`] for the unit of each field.
//!
//! Vocabulary extractors (stone, building, post, bench, planter, barrier
//! types) fold the query first and match word prefixes, so inflected forms
//! like "hólmsteinum" or "einbýlishúsi" resolve to the catalog key.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::parameters::ParameterSet;
use crate::text::{fold, parse_decimal};

// ============================================================================
// Vocabularies (folded word prefix → catalog key)
// ============================================================================

/// Paving products, most specific first
pub(crate) const STONE_VOCABULARY: &[(&str, &str)] = &[
    ("holmstein", "holmsteinn"),
    ("gotustein", "gotusteinn"),
    ("torgstein", "torgsteinn"),
    ("grasstein", "grassteinn"),
    ("modena", "modena"),
    ("hell", "default"),
];

/// Every priced product a bare product mention can refer to
pub(crate) const PRODUCT_VOCABULARY: &[(&str, &str)] = &[
    ("holmstein", "holmsteinn"),
    ("gotustein", "gotusteinn"),
    ("torgstein", "torgsteinn"),
    ("grasstein", "grassteinn"),
    ("modena", "modena"),
    ("undirlagssand", "undirlagssandur"),
    ("polymersand", "polymersandur"),
    ("fjolliðusand", "polymersandur"),
    ("fugusand", "fugusandur"),
];

const BUILDING_VOCABULARY: &[(&str, &str)] = &[
    ("einbylish", "einbylishus"),
    ("parh", "parhus"),
    ("raðh", "radhus"),
    ("fjolbylish", "fjolbylishus"),
    ("sumarh", "sumarhus"),
    ("sumarbustað", "sumarhus"),
    ("bilskur", "bilskur"),
];

const POST_VOCABULARY: &[(&str, &str)] = &[
    ("hringpollar", "hringpollari"),
    ("yfirborðsfest", "yfirbordsfestur"),
    ("girðingarstaur", "girdingarstaur"),
    ("girðing", "girdingarstaur"),
    ("pollar", "pollari"),
];

const PLANTER_VOCABULARY: &[(&str, &str)] = &[
    ("hringker", "hringker"),
    ("langker", "langker"),
    ("smaker", "smaker"),
    ("blomaker", "blomaker"),
    ("groðurker", "blomaker"),
];

const BARRIER_VOCABULARY: &[(&str, &str)] = &[
    ("hraðahindr", "hradahindrun"),
    ("hraðaþrep", "hradahindrun"),
    ("umferðartalm", "talmi"),
    ("talm", "talmi"),
    ("vegrið", "talmi"),
];

const ENVIRONMENTAL_WORDS: &[&str] = &[
    "umhverfisvæn",
    "vistvæn",
    "græn",
    "lagkolefn",
    "kolefnislitl",
    "kolefnisjafn",
    "svansvott",
    "umhverfisvott",
    "sjalfbær",
];

fn words(folded: &str) -> impl Iterator<Item = &str> {
    folded.split(|c: char| !c.is_alphanumeric()).filter(|w| !w.is_empty())
}

fn has_word_starting(folded: &str, prefix: &str) -> bool {
    words(folded).any(|w| w.starts_with(prefix))
}

/// First table entry whose prefix starts some word of the folded query
pub(crate) fn vocabulary_match(folded: &str, table: &[(&str, &'static str)]) -> Option<&'static str> {
    table
        .iter()
        .find(|(prefix, _)| has_word_starting(folded, prefix))
        .map(|(_, key)| *key)
}

// ============================================================================
// Numbers and units
// ============================================================================

/// Digits or an Icelandic number word (1-10, any gender/case)
pub fn parse_count(token: &str) -> Option<u32> {
    if let Ok(n) = token.trim().parse::<u32>() {
        return Some(n);
    }
    let n = match fold(token).as_str() {
        "einn" | "ein" | "eina" | "eitt" | "einum" | "einni" => 1,
        "tveir" | "tvær" | "tvo" | "tveimur" => 2,
        "þrir" | "þrjar" | "þrja" | "þrju" | "þremur" => 3,
        "fjorir" | "fjorar" | "fjora" | "fjogur" | "fjorum" => 4,
        "fimm" => 5,
        "sex" => 6,
        "sjo" => 7,
        "atta" => 8,
        "niu" => 9,
        "tiu" => 10,
        _ => return None,
    };
    Some(n)
}

#[derive(Clone, Copy)]
enum Unit {
    Millimeters,
    Centimeters,
    Meters,
}

impl Unit {
    fn parse(token: Option<&str>, default: Unit) -> Unit {
        match token.map(|t| t.to_lowercase()) {
            Some(t) if t == "mm" => Unit::Millimeters,
            Some(t) if t == "cm" => Unit::Centimeters,
            Some(t) if t == "m" || t.starts_with("metr") => Unit::Meters,
            _ => default,
        }
    }

    fn to_cm(self, value: f64) -> f64 {
        match self {
            Unit::Millimeters => value / 10.0,
            Unit::Centimeters => value,
            Unit::Meters => value * 100.0,
        }
    }

    fn to_m(self, value: f64) -> f64 {
        self.to_cm(value) / 100.0
    }
}

fn number(caps: &Captures, group: usize) -> Option<f64> {
    caps.get(group).and_then(|m| parse_decimal(m.as_str()))
}

/// First match of any pattern, read as `(number, unit)`
fn first_measure(patterns: &[Regex], query: &str) -> Option<(f64, Option<String>)> {
    patterns.iter().find_map(|re| {
        re.captures(query)
            .and_then(|caps| Some((number(&caps, 1)?, caps.get(2).map(|m| m.as_str().to_string()))))
    })
}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("bad pattern {pattern}: {e}"))
}

// ============================================================================
// Patterns
// ============================================================================

static DIMENSIONS: Lazy<Regex> = Lazy::new(|| {
    compile(r"(?i)(\d+(?:[.,]\d+)?)\s*(?:m\s*)?(?:[x×*]|sinnum)\s*(\d+(?:[.,]\d+)?)\s*(cm|mm|m|metr\w*)?")
});

static AREA: Lazy<Regex> = Lazy::new(|| compile(r"(?i)(\d+(?:[.,]\d+)?)\s*(?:m2|m²|fm\b|fermetr\w*)"));

static VOLUME: Lazy<Regex> = Lazy::new(|| compile(r"(?i)(\d+(?:[.,]\d+)?)\s*(?:m3|m³|rúmmetr\w*|rummetr\w*)"));

static LENGTH: Lazy<Regex> = Lazy::new(|| compile(r"(?i)(\d+(?:[.,]\d+)?)\s*(?:metr\w*|m)(?:([²³23])|\b)"));

static THICKNESS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        compile(r"(?i)þykk\w*\s*(?:er\s+|upp á\s+|:\s*|af\s+)?(\d+(?:[.,]\d+)?)\s*(cm|mm|m)?\b"),
        compile(r"(?i)(\d+(?:[.,]\d+)?)\s*(cm|mm|m)\b\s*(?:\w+\s+)?þykk"),
    ]
});

static DIAMETER: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        compile(r"(?i)(?:þvermál\w*|ø)\s*(?:er\s+|:\s*|upp á\s+)?(\d+(?:[.,]\d+)?)\s*(cm|mm|m)?\b"),
        compile(r"(?i)(\d+(?:[.,]\d+)?)\s*(cm|mm|m)\b\s*(?:í\s+)?(?:þvermál|súl)"),
    ]
});

static HEIGHT: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        compile(r"(?i)\bhæð(?:in)?\s*(?:er\s+|:\s*|upp á\s+)?(\d+(?:[.,]\d+)?)\s*(cm|m|metr\w*)?\b"),
        compile(r"(?i)(\d+(?:[.,]\d+)?)\s*(cm|m|metr\w*)\s+(?:á\s+hæð|hæð\b|háa?r?\b|hátt\b|háum\b|hárri\b)"),
    ]
});

static POST_DIMENSIONS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        compile(r"(?i)(\d+(?:[.,]\d+)?)\s*[x×*]\s*(\d+(?:[.,]\d+)?)\s*(?:cm\s*)?(?:\w+\s+)?(?:stál|járn)?(?:staur|stoð|prófíl)"),
        compile(r"(?i)(?:staur\w*|stoð\w*)\s+(?:\w+\s+){0,3}?(\d+(?:[.,]\d+)?)\s*[x×*]\s*(\d+(?:[.,]\d+)?)\s*cm"),
    ]
});

static STONE_SIZE: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        compile(r"(?i)(\d+(?:[.,]\d+)?)\s*[x×*]\s*\d+(?:[.,]\d+)?\s*cm\s+(?:\w+\s+)?(?:hell|stein)"),
        compile(r"(?i)(?:hell\w*|stein\w*)\s+(?:\w+\s+){0,2}?(\d+(?:[.,]\d+)?)\s*[x×*]\s*\d+(?:[.,]\d+)?\s*cm"),
    ]
});

const COUNT: &str = r"(\d+|einn|eina|eitt|einum|einni|ein|tveir|tvær|tvo|tvö|tveimur|þrír|þrjár|þrjá|þrjú|þremur|fjórir|fjórar|fjóra|fjögur|fjórum|fimm|sex|sjö|átta|níu|tíu)";

static POST_COUNT: Lazy<Regex> =
    Lazy::new(|| compile(&format!(r"(?i)\b{}\s+(?:stál|járn|tré)?(?:staur|stoð)\w*", COUNT)));

static BIN_COUNT: Lazy<Regex> = Lazy::new(|| {
    compile(&format!(
        r"(?i)\b{}\s+(?:(?:240|360|660)\s*(?:l|lítra)\s+)?(?:\w+\s+)?(?:sorp|rusla)?tunn\w*",
        COUNT
    ))
});

static BENCH_COUNT: Lazy<Regex> =
    Lazy::new(|| compile(&format!(r"(?i)\b{}\s+(?:\w+\s+)?(?:lang|bak)?bekk\w*", COUNT)));

static QUANTITY: Lazy<Regex> = Lazy::new(|| compile(r"(?i)\b(\d+)\s*(?:stk\b|stykki\w*|einingar\b|einingum\b)"));

static BIN_TYPE: Lazy<Regex> = Lazy::new(|| compile(r"(?i)\b(240|360|660)\s*(?:l\b|lítr\w*|litr\w*)"));

static CONCRETE_TYPE: Lazy<Regex> = Lazy::new(|| compile(r"(?i)\bc\s?(20|25|30|35|40)(?:/\d+)?\b"));

static USAGE: Lazy<Regex> = Lazy::new(|| {
    compile(
        r"(?i)\b((?:bryggj|höfn|hafnar|sjó|sjáv|strand|innkeyrsl|bílast|bílaplan|gangstétt|stétt|göngustíg|stíg|verönd|pall|garð|úti|utanhúss|gólf|inni|innanhúss|kjallar)\w*)",
    )
});

static SPACING: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        compile(r"(?i)\b(?:millibil\w*|bil\w*)\s+(?:er\s+|á\s+milli\s+|af\s+|:\s*)?(\d+(?:[.,]\d+)?)\s*(m|metr\w*|cm)\b"),
        compile(r"(?i)\b(?:með|á)\s+(\d+(?:[.,]\d+)?)\s*(m|metr\w*|cm)\s+(?:millibil\w*|bil\w*)"),
    ]
});

static CIRCLE_DIAMETER: Lazy<Regex> = Lazy::new(|| compile(r"(?i)hring\w*\D{0,30}?(\d+(?:[.,]\d+)?)\s*(m|metr\w*)\b"));

static HEIGHT_DIFFERENCE: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        compile(r"(?i)hæðarmun\w*\s*(?:er\s+|upp á\s+|:\s*|af\s+|um\s+)?(\d+(?:[.,]\d+)?)\s*(cm|m|metr\w*)?\b"),
        compile(r"(?i)(\d+(?:[.,]\d+)?)\s*(cm|m|metr\w*)\s+(?:hæðarmun|hækkun|upp\b|niður\b)"),
    ]
});

static AVAILABLE_SPACE: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        compile(r"(?i)(?:pláss\w*|rými\w*)\s*(?:er\s+|:\s*|fyrir\s+|upp á\s+|af\s+)?(\d+(?:[.,]\d+)?)\s*(cm|m|metr\w*)?\b"),
        compile(r"(?i)(\d+(?:[.,]\d+)?)\s*(cm|m|metr\w*)\s+(?:af\s+)?(?:pláss|rými|lárétt)"),
    ]
});

static JOINT_WIDTH: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        compile(r"(?i)(\d+(?:[.,]\d+)?)\s*(mm)\s+(?:\w+\s+)?(?:fúg|fug|bil|rauf)"),
        compile(r"(?i)(?:fúg\w*|fug\w*|bil\w*)\s+(?:er\s+|:\s*|upp á\s+)?(\d+(?:[.,]\d+)?)\s*(mm)\b"),
    ]
});

// ============================================================================
// Extractors
// ============================================================================

/// `length × width` in metres. Matches written in cm or mm are stone or
/// post sizes and are skipped.
pub fn extract_dimensions(query: &str) -> Option<(f64, f64)> {
    DIMENSIONS.captures_iter(query).find_map(|caps| {
        let unit = caps.get(3).map(|m| m.as_str().to_lowercase());
        if matches!(unit.as_deref(), Some("cm") | Some("mm")) {
            return None;
        }
        Some((number(&caps, 1)?, number(&caps, 2)?))
    })
}

pub fn extract_area(query: &str) -> Option<f64> {
    AREA.captures(query).and_then(|caps| number(&caps, 1))
}

pub fn extract_volume(query: &str) -> Option<f64> {
    VOLUME.captures(query).and_then(|caps| number(&caps, 1))
}

/// A single length in metres ("20 m", "15 metrar"), ignoring m² and m³
pub fn extract_length(query: &str) -> Option<f64> {
    LENGTH
        .captures_iter(query)
        .filter(|caps| caps.get(2).is_none())
        .find_map(|caps| number(&caps, 1))
}

/// cm
pub fn extract_thickness(query: &str) -> Option<f64> {
    first_measure(&THICKNESS, query).map(|(v, unit)| Unit::parse(unit.as_deref(), Unit::Centimeters).to_cm(v))
}

/// cm
pub fn extract_diameter(query: &str) -> Option<f64> {
    first_measure(&DIAMETER, query).map(|(v, unit)| Unit::parse(unit.as_deref(), Unit::Centimeters).to_cm(v))
}

/// m
pub fn extract_height(query: &str) -> Option<f64> {
    first_measure(&HEIGHT, query).map(|(v, unit)| Unit::parse(unit.as_deref(), Unit::Meters).to_m(v))
}

/// Post cross-section `(width, height)` in cm
pub fn extract_post_dimensions(query: &str) -> Option<(f64, f64)> {
    POST_DIMENSIONS
        .iter()
        .find_map(|re| re.captures(query).and_then(|caps| Some((number(&caps, 1)?, number(&caps, 2)?))))
}

/// cm, the first side of a stone size like "40x40 cm hellur"
pub fn extract_stone_size(query: &str) -> Option<f64> {
    first_measure(&STONE_SIZE, query).map(|(v, _)| v)
}

pub fn extract_post_count(query: &str) -> Option<u32> {
    POST_COUNT.captures(query).and_then(|caps| parse_count(caps.get(1)?.as_str()))
}

pub fn extract_quantity(query: &str) -> Option<u32> {
    QUANTITY.captures(query).and_then(|caps| caps.get(1)?.as_str().parse().ok())
}

pub fn extract_stone_type(query: &str) -> Option<String> {
    vocabulary_match(&fold(query), STONE_VOCABULARY).map(str::to_string)
}

/// The usage word as written, e.g. "innkeyrslu" or "bryggju"
pub fn extract_usage(query: &str) -> Option<String> {
    USAGE.captures(query).and_then(|caps| Some(caps.get(1)?.as_str().to_lowercase()))
}

pub fn extract_concrete_type(query: &str) -> Option<String> {
    CONCRETE_TYPE
        .captures(query)
        .and_then(|caps| Some(format!("c{}", caps.get(1)?.as_str())))
}

pub fn extract_building_type(query: &str) -> Option<String> {
    vocabulary_match(&fold(query), BUILDING_VOCABULARY).map(str::to_string)
}

pub fn extract_environmental_focus(query: &str) -> Option<bool> {
    let folded = fold(query);
    ENVIRONMENTAL_WORDS
        .iter()
        .any(|w| has_word_starting(&folded, w))
        .then_some(true)
}

fn followed_by_liters(rest: &str) -> bool {
    let rest = rest.trim_start().to_lowercase();
    rest.starts_with("lítr") || rest.starts_with("litr") || rest == "l" || rest.starts_with("l ")
}

/// Number of bins. A bin size ("240 lítra") is not a count.
pub fn extract_bin_count(query: &str) -> Option<u32> {
    BIN_COUNT.captures_iter(query).find_map(|caps| {
        let token = caps.get(1)?;
        if followed_by_liters(&query[token.end()..]) {
            return None;
        }
        parse_count(token.as_str())
    })
}

pub fn extract_bin_type(query: &str) -> Option<String> {
    BIN_TYPE.captures(query).and_then(|caps| Some(caps.get(1)?.as_str().to_string()))
}

pub fn extract_post_type(query: &str) -> Option<String> {
    vocabulary_match(&fold(query), POST_VOCABULARY).map(str::to_string)
}

/// m
pub fn extract_spacing(query: &str) -> Option<f64> {
    first_measure(&SPACING, query).map(|(v, unit)| Unit::parse(unit.as_deref(), Unit::Meters).to_m(v))
}

pub fn extract_bench_type(query: &str) -> Option<String> {
    let folded = fold(query);
    if has_word_starting(&folded, "langbekk") {
        Some("langbekkur".to_string())
    } else if has_word_starting(&folded, "bakbekk")
        || (has_word_starting(&folded, "bekk") && folded.contains("með bak"))
    {
        Some("bakbekkur".to_string())
    } else if has_word_starting(&folded, "bekk") {
        Some("bekkur".to_string())
    } else {
        None
    }
}

pub fn extract_bench_count(query: &str) -> Option<u32> {
    BENCH_COUNT.captures(query).and_then(|caps| parse_count(caps.get(1)?.as_str()))
}

/// Canonical arrangement name: `circle`, `facing`, `random` or `line`
pub fn extract_arrangement(query: &str) -> Option<String> {
    let folded = fold(query);
    let name = if folded.contains("i hring") || has_word_starting(&folded, "hring") {
        "circle"
    } else if folded.contains("a moti") || has_word_starting(&folded, "andspænis") || has_word_starting(&folded, "gegnt") {
        "facing"
    } else if has_word_starting(&folded, "dreif") || has_word_starting(&folded, "handahof") {
        "random"
    } else if folded.contains("i roð") || has_word_starting(&folded, "roð") || has_word_starting(&folded, "linu") {
        "line"
    } else {
        return None;
    };
    Some(name.to_string())
}

/// m
pub fn extract_circle_diameter(query: &str) -> Option<f64> {
    CIRCLE_DIAMETER.captures(query).and_then(|caps| number(&caps, 1))
}

pub fn extract_planter_type(query: &str) -> Option<String> {
    let folded = fold(query);
    let mentions_planter = has_word_starting(&folded, "blomak") || has_word_starting(&folded, "ker");
    if mentions_planter && has_word_starting(&folded, "hringlaga") {
        return Some("hringker".to_string());
    }
    if mentions_planter && (has_word_starting(&folded, "lang") || has_word_starting(&folded, "long")) {
        return Some("langker".to_string());
    }
    if mentions_planter && has_word_starting(&folded, "litil") {
        return Some("smaker".to_string());
    }
    vocabulary_match(&folded, PLANTER_VOCABULARY).map(str::to_string)
}

pub fn extract_barrier_type(query: &str) -> Option<String> {
    vocabulary_match(&fold(query), BARRIER_VOCABULARY).map(str::to_string)
}

/// cm
pub fn extract_height_difference(query: &str) -> Option<f64> {
    first_measure(&HEIGHT_DIFFERENCE, query)
        .map(|(v, unit)| Unit::parse(unit.as_deref(), Unit::Centimeters).to_cm(v))
}

/// cm
pub fn extract_available_space(query: &str) -> Option<f64> {
    first_measure(&AVAILABLE_SPACE, query).map(|(v, unit)| Unit::parse(unit.as_deref(), Unit::Centimeters).to_cm(v))
}

/// mm
pub fn extract_joint_width(query: &str) -> Option<f64> {
    first_measure(&JOINT_WIDTH, query).map(|(v, _)| v)
}

/// `regular`, `mixed` or `irregular`
pub fn extract_joint_pattern(query: &str) -> Option<String> {
    let folded = fold(query);
    let pattern = if has_word_starting(&folded, "oreglul") || has_word_starting(&folded, "irregular") {
        "irregular"
    } else if has_word_starting(&folded, "blanda") || has_word_starting(&folded, "blond") || has_word_starting(&folded, "mixed") {
        "mixed"
    } else if has_word_starting(&folded, "reglul") || has_word_starting(&folded, "regular") {
        "regular"
    } else {
        return None;
    };
    Some(pattern.to_string())
}

pub fn extract_polymer_preference(query: &str) -> Option<bool> {
    let folded = fold(query);
    (has_word_starting(&folded, "polymer") || has_word_starting(&folded, "fjolliðu")).then_some(true)
}

/// Run every extractor over the query.
///
/// Explicit `length × width` wins over a lone length.
pub fn extract_parameters(query: &str) -> ParameterSet {
    let dimensions = extract_dimensions(query);
    let post_dimensions = extract_post_dimensions(query);

    ParameterSet {
        length: dimensions.map(|(l, _)| l).or_else(|| extract_length(query)),
        width: dimensions.map(|(_, w)| w),
        area: extract_area(query),
        volume: extract_volume(query),
        thickness: extract_thickness(query),
        diameter: extract_diameter(query),
        height: extract_height(query),
        post_width: post_dimensions.map(|(w, _)| w),
        post_height: post_dimensions.map(|(_, h)| h),
        post_count: extract_post_count(query),
        quantity: extract_quantity(query),
        product: None,
        stone_type: extract_stone_type(query),
        stone_size: extract_stone_size(query),
        joint_width: extract_joint_width(query),
        joint_pattern: extract_joint_pattern(query),
        use_polymer_sand: extract_polymer_preference(query),
        usage: extract_usage(query),
        concrete_type: extract_concrete_type(query),
        building_type: extract_building_type(query),
        environmental_focus: extract_environmental_focus(query),
        bin_count: extract_bin_count(query),
        bin_type: extract_bin_type(query),
        post_type: extract_post_type(query),
        spacing: extract_spacing(query),
        bench_type: extract_bench_type(query),
        bench_count: extract_bench_count(query),
        arrangement: extract_arrangement(query),
        circle_diameter: extract_circle_diameter(query),
        planter_type: extract_planter_type(query),
        barrier_type: extract_barrier_type(query),
        height_difference: extract_height_difference(query),
        available_space: extract_available_space(query),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ReferenceData;

    #[test]
    fn test_dimensions() {
        assert_eq!(extract_dimensions("hellur á 5x4 m plan"), Some((5.0, 4.0)));
        assert_eq!(extract_dimensions("svæði 2,5 × 3 metrar"), Some((2.5, 3.0)));
        assert_eq!(extract_dimensions("40x40 cm hellur á 6x8 m"), Some((6.0, 8.0)));
        assert_eq!(extract_dimensions("40x40 cm hellur"), None);
    }

    #[test]
    fn test_area_and_length() {
        assert_eq!(extract_area("hellur á 25 m2"), Some(25.0));
        assert_eq!(extract_area("120 fermetra einbýlishús"), Some(120.0));
        assert_eq!(extract_length("tálmar á 20 m kafla"), Some(20.0));
        assert_eq!(extract_length("hellur á 25 m²"), None);
        assert_eq!(extract_length("2 mm fúga"), None);
    }

    #[test]
    fn test_thickness_units() {
        assert_eq!(extract_thickness("undirlag 3 cm þykkt"), Some(3.0));
        assert_eq!(extract_thickness("þykkt 30 mm"), Some(3.0));
        assert_eq!(extract_thickness("plata, þykktin er 0,15 m"), Some(15.0));
        assert_eq!(extract_thickness("hellur á 5x5"), None);
    }

    #[test]
    fn test_column_measures() {
        assert_eq!(extract_diameter("súla með þvermál 30 cm"), Some(30.0));
        assert_eq!(extract_diameter("40 cm súla"), Some(40.0));
        assert_eq!(extract_height("hæð 2,5 m"), Some(2.5));
        assert_eq!(extract_height("250 cm há súla"), Some(2.5));
        assert_eq!(extract_height("hæðarmunur 100 cm"), None);
    }

    #[test]
    fn test_post_dimensions_and_count() {
        let q = "súla 30 cm með 2 staurum 10x10 cm";
        assert_eq!(extract_post_dimensions(q), Some((10.0, 10.0)));
        assert_eq!(extract_post_count(q), Some(2));
        assert_eq!(extract_post_count("súla með tveimur stálstaurum"), Some(2));
        assert_eq!(extract_dimensions(q), None);
    }

    #[test]
    fn test_counts_accept_number_words() {
        assert_eq!(parse_count("þrjár"), Some(3));
        assert_eq!(parse_count("Fjórar"), Some(4));
        assert_eq!(parse_count("12"), Some(12));
        assert_eq!(parse_count("margar"), None);
        assert_eq!(extract_bin_count("skýli fyrir þrjár tunnur"), Some(3));
        assert_eq!(extract_bench_count("6 steypta bekki"), Some(6));
    }

    #[test]
    fn test_bin_size_is_not_a_count() {
        assert_eq!(extract_bin_count("skýli fyrir 240 lítra tunnur"), None);
        assert_eq!(extract_bin_count("skýli fyrir 3 660 l tunnur"), Some(3));
        assert_eq!(extract_bin_type("skýli fyrir 3 660 l tunnur"), Some("660".to_string()));
    }

    #[test]
    fn test_vocabulary_extractors() {
        assert_eq!(extract_stone_type("Hólmsteinum í innkeyrslu"), Some("holmsteinn".to_string()));
        assert_eq!(extract_stone_type("hellur á stétt"), Some("default".to_string()));
        assert_eq!(extract_building_type("120 fm einbýlishúsi"), Some("einbylishus".to_string()));
        assert_eq!(extract_building_type("raðhús"), Some("radhus".to_string()));
        assert_eq!(extract_post_type("hringpollarar við inngang"), Some("hringpollari".to_string()));
        assert_eq!(extract_post_type("pollarar"), Some("pollari".to_string()));
        assert_eq!(extract_bench_type("bekkir með baki"), Some("bakbekkur".to_string()));
        assert_eq!(extract_planter_type("hringlaga blómaker"), Some("hringker".to_string()));
        assert_eq!(extract_barrier_type("hraðahindranir í götu"), Some("hradahindrun".to_string()));
        assert_eq!(extract_barrier_type("hellur"), None);
    }

    #[test]
    fn test_vocabulary_keys_exist_in_catalog() {
        let data = ReferenceData::builtin();
        for (_, key) in STONE_VOCABULARY.iter().chain(PRODUCT_VOCABULARY) {
            assert!(data.has_product(key), "missing product {}", key);
        }
    }

    #[test]
    fn test_usage_and_flags() {
        assert_eq!(extract_usage("steypa fyrir innkeyrslu"), Some("innkeyrslu".to_string()));
        assert_eq!(extract_usage("Bryggja í höfninni"), Some("bryggja".to_string()));
        assert_eq!(extract_environmental_focus("umhverfisvænt einingahús"), Some(true));
        assert_eq!(extract_environmental_focus("einingahús"), None);
        assert_eq!(extract_polymer_preference("vil nota pólýmersand"), Some(true));
        assert_eq!(extract_concrete_type("kolefnisspor C30/37 steypu"), Some("c30".to_string()));
    }

    #[test]
    fn test_joint_facts() {
        assert_eq!(extract_joint_width("2 mm fúgur"), Some(2.0));
        assert_eq!(extract_joint_width("fúgubil 5 mm"), Some(5.0));
        assert_eq!(extract_joint_pattern("óreglulegt mynstur"), Some("irregular".to_string()));
        assert_eq!(extract_joint_pattern("reglulegt"), Some("regular".to_string()));
        assert_eq!(extract_stone_size("40x40 cm hellur"), Some(40.0));
    }

    #[test]
    fn test_precast_facts() {
        assert_eq!(extract_height_difference("hæðarmunur er 1,2 m"), Some(120.0));
        assert_eq!(extract_available_space("pláss fyrir 250 cm"), Some(250.0));
        assert_eq!(extract_arrangement("bekkir í hring"), Some("circle".to_string()));
        assert_eq!(extract_arrangement("bekkir á móti hvor öðrum"), Some("facing".to_string()));
        assert_eq!(extract_circle_diameter("í hring með 6 m þvermál"), Some(6.0));
        assert_eq!(extract_spacing("pollarar með 2 m millibili"), Some(2.0));
    }

    #[test]
    fn test_nothing_found() {
        let params = extract_parameters("góðan daginn");
        assert!(params.is_empty());
    }
}
