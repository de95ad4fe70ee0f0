//! Case and diacritic folding used for program keys and local keyword matching.

use unicode_normalization::UnicodeNormalization;

fn is_combining_mark(c: char) -> bool {
    ('\u{0300}'..='\u{036f}').contains(&c)
}

/// Lower-cases, strips combining diacritics, collapses whitespace runs and trims.
pub fn fold_text(value: &str) -> String {
    let stripped = value
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>();
    collapse_whitespace(&stripped)
}

pub fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_case_accents_and_spacing() {
        assert_eq!(fold_text("  Café   Délégué "), "cafe delegue");
        assert_eq!(fold_text("TEKNIK\tInformatika\n"), "teknik informatika");
        assert_eq!(fold_text(""), "");
    }

    #[test]
    fn collapse_keeps_case() {
        assert_eq!(collapse_whitespace("  Data   Analyst "), "Data Analyst");
    }
}
