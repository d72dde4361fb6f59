//! Binary lines and fixed-length line sequences.
//!
//! Sequences keep the registry's authoring order: index 0 is line 1, the first line
//! of the upper trigram. Every transformation returns a new sequence.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{LineError, LineResult};

/// A single line: broken (`Yin`) or solid (`Yang`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Line {
    Yin,
    Yang,
}

impl Line {
    /// The other polarity.
    pub fn flip(self) -> Self {
        match self {
            Self::Yin => Self::Yang,
            Self::Yang => Self::Yin,
        }
    }

    pub fn is_yang(self) -> bool {
        matches!(self, Self::Yang)
    }

    pub fn is_yin(self) -> bool {
        matches!(self, Self::Yin)
    }

    /// Bit value (`Yang` = 1).
    pub fn bit(self) -> u8 {
        match self {
            Self::Yin => 0,
            Self::Yang => 1,
        }
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Yin => write!(f, "Yin"),
            Self::Yang => write!(f, "Yang"),
        }
    }
}

impl FromStr for Line {
    type Err = LineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "yin" | "0" => Ok(Self::Yin),
            "yang" | "1" => Ok(Self::Yang),
            _ => Err(LineError::UnknownLine(s.to_string())),
        }
    }
}

/// Three lines of a trigram.
pub type TrigramLines = [Line; 3];

/// The middle four lines (2-5) of a hexagram.
pub type NuclearLines = [Line; 4];

/// Six lines of a hexagram in registry authoring order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HexagramLines(pub [Line; 6]);

impl HexagramLines {
    pub const LEN: usize = 6;

    pub fn new(lines: [Line; 6]) -> Self {
        Self(lines)
    }

    /// Build from an untrusted slice. Wrong lengths are rejected, never padded.
    pub fn from_slice(lines: &[Line]) -> LineResult<Self> {
        let array: [Line; 6] = lines.try_into().map_err(|_| LineError::WrongLength {
            expected: Self::LEN,
            actual: lines.len(),
        })?;
        Ok(Self(array))
    }

    /// Join an upper and a lower trigram.
    pub fn from_trigrams(upper: TrigramLines, lower: TrigramLines) -> Self {
        Self([upper[0], upper[1], upper[2], lower[0], lower[1], lower[2]])
    }

    pub fn as_array(&self) -> &[Line; 6] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = Line> + '_ {
        self.0.iter().copied()
    }

    pub fn get(&self, position: usize) -> Option<Line> {
        self.0.get(position).copied()
    }

    /// Lines 1-3.
    pub fn upper(&self) -> TrigramLines {
        [self.0[0], self.0[1], self.0[2]]
    }

    /// Lines 4-6.
    pub fn lower(&self) -> TrigramLines {
        [self.0[3], self.0[4], self.0[5]]
    }

    /// Lines 2-5.
    pub fn nuclear(&self) -> NuclearLines {
        [self.0[1], self.0[2], self.0[3], self.0[4]]
    }

    /// End-to-end reversal.
    pub fn reversed(&self) -> Self {
        let mut lines = self.0;
        lines.reverse();
        Self(lines)
    }

    /// Every line flipped.
    pub fn flipped(&self) -> Self {
        Self(self.0.map(Line::flip))
    }

    /// Only the line at `position` flipped; `None` past the last line.
    pub fn flip_at(&self, position: usize) -> Option<Self> {
        let mut lines = self.0;
        let line = lines.get_mut(position)?;
        *line = line.flip();
        Some(Self(lines))
    }

    pub fn yang_count(&self) -> usize {
        self.iter().filter(|l| l.is_yang()).count()
    }

    pub fn yin_count(&self) -> usize {
        Self::LEN - self.yang_count()
    }

    /// Number of positions at which two sequences differ.
    pub fn distance(&self, other: &Self) -> usize {
        self.iter().zip(other.iter()).filter(|(a, b)| a != b).count()
    }

    /// `1`/`0` rendering, line 1 first.
    pub fn to_bit_string(&self) -> String {
        self.iter().map(|l| if l.is_yang() { '1' } else { '0' }).collect()
    }
}

impl From<[Line; 6]> for HexagramLines {
    fn from(lines: [Line; 6]) -> Self {
        Self(lines)
    }
}

impl TryFrom<&[Line]> for HexagramLines {
    type Error = LineError;

    fn try_from(lines: &[Line]) -> Result<Self, Self::Error> {
        Self::from_slice(lines)
    }
}

impl fmt::Display for HexagramLines {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_bit_string())
    }
}

/// Parses the `1`/`0` rendering produced by `Display`.
impl FromStr for HexagramLines {
    type Err = LineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines = s
            .trim()
            .chars()
            .map(|c| c.to_string().parse::<Line>())
            .collect::<LineResult<Vec<_>>>()?;
        Self::from_slice(&lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Line::{Yang, Yin};

    fn lines(s: &str) -> HexagramLines {
        s.parse().unwrap()
    }

    #[test]
    fn flip_is_an_involution() {
        assert_eq!(Yin.flip(), Yang);
        assert_eq!(Yang.flip().flip(), Yang);
    }

    #[test]
    fn line_parses_names_and_bits() {
        assert_eq!("Yang".parse::<Line>().unwrap(), Yang);
        assert_eq!("yin".parse::<Line>().unwrap(), Yin);
        assert_eq!("1".parse::<Line>().unwrap(), Yang);
        assert!("maybe".parse::<Line>().is_err());
    }

    #[test]
    fn line_serde_uses_authoring_names() {
        assert_eq!(serde_json::to_string(&Yang).unwrap(), "\"Yang\"");
        let parsed: Line = serde_json::from_str("\"Yin\"").unwrap();
        assert_eq!(parsed, Yin);
    }

    #[test]
    fn from_slice_rejects_wrong_length() {
        let err = HexagramLines::from_slice(&[Yang; 5]).unwrap_err();
        assert_eq!(
            err,
            LineError::WrongLength {
                expected: 6,
                actual: 5
            }
        );
        assert!(HexagramLines::from_slice(&[Yin; 7]).is_err());
        assert!(HexagramLines::from_slice(&[Yin; 6]).is_ok());
    }

    #[test]
    fn trigram_slices() {
        let hex = lines("110001");
        assert_eq!(hex.upper(), [Yang, Yang, Yin]);
        assert_eq!(hex.lower(), [Yin, Yin, Yang]);
        assert_eq!(hex.nuclear(), [Yang, Yin, Yin, Yin]);
        assert_eq!(HexagramLines::from_trigrams(hex.upper(), hex.lower()), hex);
    }

    #[test]
    fn reversed_and_flipped() {
        let hex = lines("110100");
        assert_eq!(hex.reversed(), lines("001011"));
        assert_eq!(hex.flipped(), lines("001011"));
        assert_eq!(lines("100000").reversed(), lines("000001"));
        assert_eq!(lines("100000").flipped(), lines("011111"));
    }

    #[test]
    fn flip_at_changes_one_position() {
        let hex = lines("111111");
        let flipped = hex.flip_at(2).unwrap();
        assert_eq!(flipped, lines("110111"));
        assert_eq!(hex.distance(&flipped), 1);
        assert!(hex.flip_at(6).is_none());
    }

    #[test]
    fn counts_and_bits() {
        let hex = lines("101100");
        assert_eq!(hex.yang_count(), 3);
        assert_eq!(hex.yin_count(), 3);
        assert_eq!(hex.to_string(), "101100");
    }

    #[test]
    fn serde_is_a_plain_array() {
        let hex = lines("100000");
        let json = serde_json::to_string(&hex).unwrap();
        assert_eq!(json, r#"["Yang","Yin","Yin","Yin","Yin","Yin"]"#);
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert!("10101".parse::<HexagramLines>().is_err());
        assert!("10a101".parse::<HexagramLines>().is_err());
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn arb_lines() -> impl Strategy<Value = HexagramLines> {
            proptest::array::uniform6(prop_oneof![Just(Yin), Just(Yang)]).prop_map(HexagramLines)
        }

        proptest! {
            #[test]
            fn reversal_and_flip_are_involutions(hex in arb_lines()) {
                prop_assert_eq!(hex.reversed().reversed(), hex);
                prop_assert_eq!(hex.flipped().flipped(), hex);
                prop_assert_eq!(hex.distance(&hex.flipped()), 6);
            }

            #[test]
            fn bit_string_roundtrips(hex in arb_lines()) {
                let parsed: HexagramLines = hex.to_bit_string().parse().unwrap();
                prop_assert_eq!(parsed, hex);
            }

            #[test]
            fn single_flips_touch_one_line(hex in arb_lines(), position in 0usize..6) {
                let flipped = hex.flip_at(position).unwrap();
                prop_assert_eq!(hex.distance(&flipped), 1);
                prop_assert_ne!(hex.get(position), flipped.get(position));
            }
        }
    }
}
