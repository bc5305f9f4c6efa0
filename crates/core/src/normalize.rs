//! Text canonicalization for trigger matching.
//!
//! Clinical notes arrive as free UTF-8 text with accents, punctuation and
//! arbitrary casing. Trigger detection works on a canonical form so that
//! "Cholestérol!" and "cholesterol" match the same vocabulary term.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Canonicalizes text for substring matching.
///
/// Decomposes to NFD and strips combining marks (so accented letters keep
/// their base letter), lowercases, drops every character that is not a
/// Unicode letter, digit or whitespace, then collapses whitespace runs into
/// single ASCII spaces and trims the ends.
///
/// Idempotent: `normalize(normalize(s)) == normalize(s)`. Never fails; empty
/// input yields an empty string.
pub fn normalize(text: &str) -> String {
    let stripped: String = text
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect();

    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_accents_punctuation_and_case() {
        assert_eq!(
            normalize("  RéAction  aux MÉdIcaments!!!  "),
            "reaction aux medicaments"
        );
    }

    #[test]
    fn keeps_digits_and_single_spaces() {
        assert_eq!(normalize("Hémoglobine   A1C\tdétectée."), "hemoglobine a1c detectee");
    }

    #[test]
    fn empty_and_blank_input_yield_empty_string() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \t\n  "), "");
        assert_eq!(normalize("!!!...---"), "");
    }

    #[test]
    fn is_idempotent() {
        let samples = [
            "Le patient est fumeur. Hémoglobine A1C détectée.",
            "  RéAction  aux MÉdIcaments!!!  ",
            "déjà-vu: Größe & cœur, №42",
            "",
            "plain ascii text",
        ];
        for s in samples {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "not idempotent for {s:?}");
        }
    }
}
