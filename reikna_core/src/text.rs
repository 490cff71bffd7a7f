//! Text folding shared by the classifier and the reference-data lookups.
//!
//! Icelandic accented vowels (á, é, í, ó, ú, ý, ö) decompose under NFD and
//! lose their marks here. Letters with no decomposition (þ, ð, æ) are kept
//! as-is, so match patterns must spell them out.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Lowercase, NFD-decompose, strip combining marks, collapse whitespace.
///
/// ```
/// use reikna_core::text::fold;
///
/// assert_eq!(fold("  Hvað   KOSTAR  Modena-hellur? "), "hvað kostar modena-hellur?");
/// assert_eq!(fold("Þvermál 30 cm"), "þvermal 30 cm");
/// ```
pub fn fold(s: &str) -> String {
    let stripped: String = s
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect();

    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Fold a reference-table key: [`fold`] plus spaces and dashes to underscores.
///
/// Any product key mentioning "modena" collapses to the canonical `modena`.
pub fn table_key(s: &str) -> String {
    let folded = fold(s).replace([' ', '-'], "_");
    if folded.contains("modena") {
        return "modena".to_string();
    }
    folded
}

/// Parse a number written with either a decimal point or an Icelandic decimal comma.
pub fn parse_decimal(s: &str) -> Option<f64> {
    s.trim().replace(',', ".").parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_strips_diacritics() {
        assert_eq!(fold("Súla"), "sula");
        assert_eq!(fold("Fúgusandur"), "fugusandur");
        assert_eq!(fold("hæðarmunur"), "hæðarmunur");
        assert_eq!(fold("Efnisþörf"), "efnisþorf");
    }

    #[test]
    fn test_fold_collapses_whitespace() {
        assert_eq!(fold("a \t b\n\nc"), "a b c");
    }

    #[test]
    fn test_table_key() {
        assert_eq!(table_key("Einbýlishús"), "einbylishus");
        assert_eq!(table_key("Modena hellur"), "modena");
        assert_eq!(table_key("super-modena-xl"), "modena");
        assert_eq!(table_key("Litið ker"), "litið_ker");
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_decimal("2,5"), Some(2.5));
        assert_eq!(parse_decimal("12"), Some(12.0));
        assert_eq!(parse_decimal("abc"), None);
    }
}
