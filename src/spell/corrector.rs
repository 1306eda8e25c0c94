//! Frequency-ranked spelling correction.

use crate::domain::types::Correction;
use crate::spell::dictionary::FrequencyDictionary;
use crate::spell::levenshtein::bounded_levenshtein;
use crate::spell::WordCorrector;
use tracing::debug;

/// Maximum edit distance considered when scanning for candidates.
const MAX_EDIT_DISTANCE: usize = 2;

/// Corrector that scans a [`FrequencyDictionary`] for the closest candidate.
///
/// Candidates within edit distance two are ranked by distance first, then by
/// frequency, then lexicographically so that equal-scoring candidates resolve
/// deterministically. Input is lowercased before lookup; the original word is
/// always returned verbatim.
#[derive(Debug, Clone, Default)]
pub struct FrequencyCorrector {
    dictionary: FrequencyDictionary,
}

impl FrequencyCorrector {
    /// Corrector over the embedded dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Corrector over a caller-supplied dictionary.
    pub fn with_dictionary(dictionary: FrequencyDictionary) -> Self {
        Self { dictionary }
    }

    fn best_candidate(&self, word: &str) -> Option<String> {
        let mut best: Option<(usize, u64, &str)> = None;
        for (candidate, freq) in self.dictionary.iter() {
            let Some(distance) = bounded_levenshtein(word, candidate, MAX_EDIT_DISTANCE) else {
                continue;
            };
            let better = match best {
                None => true,
                Some((d, f, w)) => {
                    (distance, std::cmp::Reverse(freq), candidate)
                        < (d, std::cmp::Reverse(f), w)
                }
            };
            if better {
                best = Some((distance, freq, candidate));
            }
        }
        best.map(|(_, _, w)| w.to_string())
    }
}

impl WordCorrector for FrequencyCorrector {
    fn correct(&self, word: &str) -> Correction {
        let original = word.to_string();
        let trimmed = word.trim();
        if trimmed.is_empty() {
            return Correction {
                original,
                corrected: None,
            };
        }

        let lowered = trimmed.to_lowercase();
        if self.dictionary.contains(&lowered) {
            // A known word is its own best correction.
            return Correction {
                original,
                corrected: Some(lowered),
            };
        }

        let corrected = self.best_candidate(&lowered);
        debug!(word = %lowered, suggestion = ?corrected, "spell lookup");
        Correction {
            original,
            corrected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corrects_near_miss_to_dictionary_word() {
        let corrector = FrequencyCorrector::new();
        let result = corrector.correct("helo");
        assert_eq!(result.original, "helo");
        assert_eq!(result.corrected.as_deref(), Some("hello"));
    }

    #[test]
    fn uppercase_input_is_normalized_but_echoed_verbatim() {
        let corrector = FrequencyCorrector::new();
        let result = corrector.correct("HELO");
        assert_eq!(result.original, "HELO");
        assert_eq!(result.corrected.as_deref(), Some("hello"));
    }

    #[test]
    fn known_word_corrects_to_itself() {
        let corrector = FrequencyCorrector::new();
        let result = corrector.correct("hello");
        assert_eq!(result.original, "hello");
        assert_eq!(result.corrected.as_deref(), Some("hello"));
    }

    #[test]
    fn empty_and_blank_input_yields_none() {
        let corrector = FrequencyCorrector::new();
        assert_eq!(corrector.correct("").corrected, None);
        assert_eq!(corrector.correct("   ").corrected, None);
    }

    #[test]
    fn gibberish_far_from_everything_yields_none() {
        let corrector = FrequencyCorrector::new();
        let result = corrector.correct("qqqzzzxxxjjj");
        assert_eq!(result.original, "qqqzzzxxxjjj");
        assert_eq!(result.corrected, None);
    }

    #[test]
    fn closer_candidate_beats_more_frequent_one() {
        // "thxnk" is distance 1 from "thank" but distance 2 from "the"; the
        // closer word wins even though "the" is far more frequent.
        let corrector = FrequencyCorrector::new();
        let result = corrector.correct("thxnk");
        assert_eq!(result.corrected.as_deref(), Some("thank"));
    }
}
