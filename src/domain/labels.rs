//! The fixed, ordered 29-class label set.
//!
//! The ordering here is load-bearing: it is the index-to-label mapping for the
//! model's output vector, fixed at training time. It must never be reordered
//! independently of the model artifact. To keep that contract explicit the
//! table is a single versioned const rather than being reconstructed from a
//! character range at the call sites that need it.

/// One of the 29 classes the model distinguishes: the letters `A`–`Z` followed
/// by the `del`, `nothing` and `space` commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassLabel {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,
    /// Delete the most recent letter.
    Del,
    /// No hand sign visible.
    Nothing,
    /// Word separator.
    Space,
}

impl ClassLabel {
    /// Number of classes in the label set.
    pub const COUNT: usize = 29;

    /// The complete label set in model output order. Version 1, matching the
    /// `sign_language_model` artifact family trained on the ASL alphabet
    /// dataset (A–Z, then del, nothing, space).
    pub const ORDERED: [ClassLabel; Self::COUNT] = [
        ClassLabel::A,
        ClassLabel::B,
        ClassLabel::C,
        ClassLabel::D,
        ClassLabel::E,
        ClassLabel::F,
        ClassLabel::G,
        ClassLabel::H,
        ClassLabel::I,
        ClassLabel::J,
        ClassLabel::K,
        ClassLabel::L,
        ClassLabel::M,
        ClassLabel::N,
        ClassLabel::O,
        ClassLabel::P,
        ClassLabel::Q,
        ClassLabel::R,
        ClassLabel::S,
        ClassLabel::T,
        ClassLabel::U,
        ClassLabel::V,
        ClassLabel::W,
        ClassLabel::X,
        ClassLabel::Y,
        ClassLabel::Z,
        ClassLabel::Del,
        ClassLabel::Nothing,
        ClassLabel::Space,
    ];

    /// Returns the label at the given model output index.
    pub fn from_index(index: usize) -> Option<ClassLabel> {
        Self::ORDERED.get(index).copied()
    }

    /// Returns the model output index of this label.
    pub fn index(&self) -> usize {
        // ORDERED is exhaustive, so the position always exists.
        Self::ORDERED
            .iter()
            .position(|l| l == self)
            .expect("label present in ORDERED")
    }

    /// The wire representation: uppercase single letters, lowercase command
    /// names (`"del"`, `"nothing"`, `"space"`), exactly as trained.
    pub fn as_str(&self) -> &'static str {
        match self {
            ClassLabel::A => "A",
            ClassLabel::B => "B",
            ClassLabel::C => "C",
            ClassLabel::D => "D",
            ClassLabel::E => "E",
            ClassLabel::F => "F",
            ClassLabel::G => "G",
            ClassLabel::H => "H",
            ClassLabel::I => "I",
            ClassLabel::J => "J",
            ClassLabel::K => "K",
            ClassLabel::L => "L",
            ClassLabel::M => "M",
            ClassLabel::N => "N",
            ClassLabel::O => "O",
            ClassLabel::P => "P",
            ClassLabel::Q => "Q",
            ClassLabel::R => "R",
            ClassLabel::S => "S",
            ClassLabel::T => "T",
            ClassLabel::U => "U",
            ClassLabel::V => "V",
            ClassLabel::W => "W",
            ClassLabel::X => "X",
            ClassLabel::Y => "Y",
            ClassLabel::Z => "Z",
            ClassLabel::Del => "del",
            ClassLabel::Nothing => "nothing",
            ClassLabel::Space => "space",
        }
    }

    /// Returns true for the letter classes `A`–`Z`.
    pub fn is_letter(&self) -> bool {
        !matches!(
            self,
            ClassLabel::Del | ClassLabel::Nothing | ClassLabel::Space
        )
    }
}

impl std::fmt::Display for ClassLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ClassLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ClassLabel::ORDERED
            .iter()
            .find(|l| l.as_str() == s)
            .copied()
            .ok_or_else(|| format!("unknown class label '{s}'"))
    }
}

// Serialized as the wire string ("A".."Z", "del", "nothing", "space") rather
// than the Rust variant name.
impl serde::Serialize for ClassLabel {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> serde::Deserialize<'de> for ClassLabel {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_29_entries_in_fixed_order() {
        assert_eq!(ClassLabel::ORDERED.len(), 29);
        assert_eq!(ClassLabel::from_index(0), Some(ClassLabel::A));
        assert_eq!(ClassLabel::from_index(25), Some(ClassLabel::Z));
        assert_eq!(ClassLabel::from_index(26), Some(ClassLabel::Del));
        assert_eq!(ClassLabel::from_index(27), Some(ClassLabel::Nothing));
        assert_eq!(ClassLabel::from_index(28), Some(ClassLabel::Space));
        assert_eq!(ClassLabel::from_index(29), None);
    }

    #[test]
    fn letters_are_contiguous_uppercase() {
        for (i, label) in ClassLabel::ORDERED[..26].iter().enumerate() {
            let expected = char::from(b'A' + i as u8);
            assert_eq!(label.as_str(), expected.to_string());
            assert!(label.is_letter());
        }
        assert!(!ClassLabel::Space.is_letter());
    }

    #[test]
    fn index_round_trips() {
        for (i, label) in ClassLabel::ORDERED.iter().enumerate() {
            assert_eq!(label.index(), i);
            assert_eq!(ClassLabel::from_index(i), Some(*label));
        }
    }
}
