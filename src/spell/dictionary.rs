//! Frequency dictionary backing the spelling corrector.

use crate::core::errors::{SignError, SignResult};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::path::Path;

/// Common English words with rough relative frequencies, used when no
/// dictionary file is configured. Small on purpose: enough for short
/// spelled-out words, not a general-purpose lexicon.
const BUILTIN_WORDS: &[(&str, u64)] = &[
    ("the", 23135851162),
    ("of", 13151942776),
    ("and", 12997637966),
    ("to", 12136980858),
    ("a", 9081174698),
    ("in", 8469404971),
    ("for", 5933321709),
    ("is", 4705743816),
    ("on", 3750423199),
    ("that", 3400031103),
    ("by", 3350048871),
    ("this", 3228469771),
    ("with", 3183110675),
    ("i", 3086225277),
    ("you", 2996181025),
    ("it", 2813163874),
    ("not", 2633487141),
    ("or", 2590739907),
    ("be", 2398724162),
    ("are", 2393614870),
    ("from", 2275595356),
    ("at", 2272272772),
    ("as", 2247431740),
    ("your", 2062066547),
    ("all", 2022459848),
    ("have", 1564202750),
    ("new", 1551258643),
    ("more", 1544771673),
    ("an", 1518266684),
    ("was", 1483428678),
    ("we", 1390661912),
    ("will", 1356293641),
    ("home", 1276852170),
    ("can", 1242323499),
    ("us", 1229112622),
    ("about", 1226734006),
    ("if", 1134987907),
    ("my", 1060627139),
    ("has", 1046185920),
    ("but", 1033283657),
    ("our", 1025775957),
    ("one", 1020101727),
    ("other", 978481319),
    ("do", 950751722),
    ("no", 932594387),
    ("they", 901188113),
    ("he", 891321442),
    ("up", 880834182),
    ("may", 875075533),
    ("what", 862192081),
    ("which", 810514085),
    ("their", 782849411),
    ("out", 760705177),
    ("use", 758160302),
    ("any", 737436971),
    ("there", 701170205),
    ("see", 681410380),
    ("so", 661403817),
    ("his", 660365931),
    ("when", 650827706),
    ("here", 639711198),
    ("who", 630927278),
    ("also", 616829442),
    ("now", 601009588),
    ("help", 587691290),
    ("get", 585186490),
    ("view", 577562677),
    ("first", 575969459),
    ("been", 575696539),
    ("would", 572644147),
    ("how", 571848080),
    ("were", 570699558),
    ("me", 566617666),
    ("some", 561618696),
    ("these", 541003982),
    ("its", 525627757),
    ("like", 520585287),
    ("than", 470443322),
    ("find", 466430702),
    ("date", 461547941),
    ("back", 460286318),
    ("people", 455837044),
    ("list", 443390641),
    ("name", 442421450),
    ("just", 439067352),
    ("over", 438070623),
    ("year", 429892668),
    ("day", 424256675),
    ("into", 423280828),
    ("two", 395595743),
    ("time", 390246339),
    ("hello", 51556399),
    ("world", 360468339),
    ("good", 344840542),
    ("water", 185456322),
    ("house", 160143397),
    ("thank", 108479622),
    ("thanks", 107105263),
    ("please", 176124481),
    ("yes", 104979406),
    ("food", 165363766),
    ("love", 170626385),
    ("friend", 90477203),
    ("happy", 87316842),
    ("sign", 159029544),
    ("hand", 141435573),
    ("word", 139502410),
    ("again", 148405130),
    ("sorry", 48110096),
];

static BUILTIN: Lazy<HashMap<String, u64>> = Lazy::new(|| {
    BUILTIN_WORDS
        .iter()
        .map(|&(w, f)| (w.to_string(), f))
        .collect()
});

/// Lowercase word to relative-frequency map.
#[derive(Debug, Clone)]
pub struct FrequencyDictionary {
    words: HashMap<String, u64>,
}

impl FrequencyDictionary {
    /// Dictionary built from the embedded word list.
    pub fn builtin() -> Self {
        Self {
            words: BUILTIN.clone(),
        }
    }

    /// Loads a dictionary from a text file with one `word frequency` pair per
    /// line, whitespace-separated. Blank lines and lines starting with `#` are
    /// skipped; words are lowercased.
    pub fn from_file(path: &Path) -> SignResult<Self> {
        let text = std::fs::read_to_string(path)?;
        let mut words = HashMap::new();
        for (lineno, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let mut parts = line.split_whitespace();
            let word = parts.next().unwrap_or_default();
            let freq: u64 = parts
                .next()
                .unwrap_or("1")
                .parse()
                .map_err(|_| {
                    SignError::config(format!(
                        "bad frequency on line {} of {}",
                        lineno + 1,
                        path.display()
                    ))
                })?;
            words.insert(word.to_lowercase(), freq);
        }
        if words.is_empty() {
            return Err(SignError::config(format!(
                "dictionary {} contains no words",
                path.display()
            )));
        }
        Ok(Self { words })
    }

    /// Whether `word` (already lowercased) is known.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(word)
    }

    /// Frequency of `word`, zero when unknown.
    pub fn frequency(&self, word: &str) -> u64 {
        self.words.get(word).copied().unwrap_or(0)
    }

    /// Iterates over `(word, frequency)` entries.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.words.iter().map(|(w, &f)| (w.as_str(), f))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the dictionary is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for FrequencyDictionary {
    fn default() -> Self {
        Self::builtin()
    }
}
