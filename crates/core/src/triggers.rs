//! Trigger-term detection.
//!
//! The vocabulary is resolved once at startup and injected into the
//! assessment service; it is read-only afterwards, so concurrent requests
//! can share it without synchronisation.

use crate::normalize::normalize;

/// The eleven risk-indicator terms used by the practitioners.
///
/// Lab markers, symptoms and clinical descriptors, as they appear in the
/// French clinical notes. Accented terms are normalized on construction.
pub const DEFAULT_TRIGGER_TERMS: [&str; 11] = [
    "hemoglobine a1c",
    "microalbumine",
    "taille",
    "poids",
    "fume",
    "anormal",
    "cholestérol",
    "vertige",
    "rechute",
    "reaction",
    "anticorps",
];

/// An ordered, immutable set of trigger terms, stored in normalized form.
#[derive(Clone, Debug)]
pub struct TriggerVocabulary {
    terms: Vec<String>,
}

impl TriggerVocabulary {
    /// Builds a vocabulary, normalizing each term with the same procedure
    /// used on note text. Terms that normalize to nothing are dropped;
    /// deduplication is the caller's responsibility.
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let terms = terms
            .into_iter()
            .map(|t| normalize(t.as_ref()))
            .filter(|t| !t.is_empty())
            .collect();
        Self { terms }
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// The normalized terms, in configuration order.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }

    /// Counts how many vocabulary terms occur in `normalized_text`.
    ///
    /// Containment is plain substring matching, not whole-word matching:
    /// "fume" inside "fumeuse" counts. Each term contributes at most one to
    /// the count however often it occurs, so the result is always within
    /// `[0, self.len()]`.
    pub fn count_triggers(&self, normalized_text: &str) -> usize {
        self.terms
            .iter()
            .filter(|term| normalized_text.contains(term.as_str()))
            .count()
    }
}

impl Default for TriggerVocabulary {
    fn default() -> Self {
        Self::new(DEFAULT_TRIGGER_TERMS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_vocabulary_keeps_all_eleven_terms() {
        let vocabulary = TriggerVocabulary::default();
        assert_eq!(vocabulary.len(), 11);
        // The accented source term is stored in normalized form.
        assert!(vocabulary.terms().any(|t| t == "cholesterol"));
    }

    #[test]
    fn counts_each_matching_term_once() {
        let vocabulary = TriggerVocabulary::default();
        let text = normalize("Hémoglobine A1C détectée. fumeuse et taille faible. Cholestérol élevé.");

        // hemoglobine a1c, fume (substring of "fumeuse"), taille, cholesterol
        assert_eq!(vocabulary.count_triggers(&text), 4);
    }

    #[test]
    fn repeated_occurrences_still_count_once() {
        let vocabulary = TriggerVocabulary::default();
        let text = normalize("Fumeur. Le patient fume. A toujours fumé.");
        assert_eq!(vocabulary.count_triggers(&text), 1);
    }

    #[test]
    fn count_is_bounded_by_vocabulary_size() {
        let vocabulary = TriggerVocabulary::default();
        let everything = vocabulary.terms().collect::<Vec<_>>().join(" ");
        assert_eq!(vocabulary.count_triggers(&everything), vocabulary.len());
        assert_eq!(vocabulary.count_triggers(""), 0);
    }

    #[test]
    fn blank_terms_are_dropped_at_construction() {
        let vocabulary = TriggerVocabulary::new(["poids", "  ", "!!!"]);
        assert_eq!(vocabulary.len(), 1);
    }
}
