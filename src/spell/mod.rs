//! Word-level spelling correction for spelled-out sign sequences.
//!
//! Letters accumulated from successive predictions form words; this module
//! suggests a dictionary correction for each finished word. The contract is
//! deliberately loose: the original word is always echoed back verbatim, and
//! the correction is `None` whenever the dictionary has nothing better to
//! offer, so callers can treat correction as purely advisory.

pub mod corrector;
pub mod dictionary;
pub mod levenshtein;

pub use corrector::FrequencyCorrector;
pub use dictionary::FrequencyDictionary;
pub use levenshtein::bounded_levenshtein;

use crate::domain::types::Correction;

/// Seam for pluggable spelling correction strategies.
pub trait WordCorrector: Send + Sync + std::fmt::Debug {
    /// Suggests a correction for `word`.
    ///
    /// The returned [`Correction`] always carries the input verbatim in
    /// `original`. A known word is its own correction; `corrected` is `None`
    /// only when no suggestion applies (empty input, or nothing close enough
    /// in the dictionary).
    fn correct(&self, word: &str) -> Correction;
}
