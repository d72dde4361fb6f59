//! Trigram classification.
//!
//! A triple of lines is packed into a 3-bit code (line 1 is the most significant bit,
//! `Yang` = 1) and mapped through a fixed table. Codes outside the table classify as
//! [`TrigramIdentity::Unknown`] instead of failing.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{LineError, LineResult};
use crate::line::{Line, TrigramLines};

/// One of the eight trigrams.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrigramIdentity {
    Qian,
    Kun,
    Zhen,
    Kan,
    Gen,
    Xun,
    Li,
    Dui,
    Unknown,
}

/// Identity indexed by 3-bit line code.
const BY_CODE: [TrigramIdentity; 8] = [
    TrigramIdentity::Kun,  // 000
    TrigramIdentity::Gen,  // 001
    TrigramIdentity::Dui,  // 010
    TrigramIdentity::Kan,  // 011
    TrigramIdentity::Zhen, // 100
    TrigramIdentity::Li,   // 101
    TrigramIdentity::Xun,  // 110
    TrigramIdentity::Qian, // 111
];

/// Fixed descriptive attributes of a trigram.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TrigramAttributes {
    /// Natural image (Heaven, Earth, ...).
    pub image: &'static str,
    /// Five-phase element.
    pub element: &'static str,
    /// Compass direction in the later-heaven arrangement.
    pub direction: &'static str,
    /// One-line characteristic.
    pub characteristic: &'static str,
    /// Unicode trigram glyph.
    pub glyph: &'static str,
}

static QIAN: TrigramAttributes = TrigramAttributes {
    image: "Heaven",
    element: "Metal",
    direction: "Northwest",
    characteristic: "Creative, strong, persistent",
    glyph: "☰",
};
static KUN: TrigramAttributes = TrigramAttributes {
    image: "Earth",
    element: "Earth",
    direction: "Southwest",
    characteristic: "Receptive, yielding, devoted",
    glyph: "☷",
};
static ZHEN: TrigramAttributes = TrigramAttributes {
    image: "Thunder",
    element: "Wood",
    direction: "East",
    characteristic: "Arousing, initiating movement",
    glyph: "☳",
};
static KAN: TrigramAttributes = TrigramAttributes {
    image: "Water",
    element: "Water",
    direction: "North",
    characteristic: "Abysmal, flowing through danger",
    glyph: "☵",
};
static GEN: TrigramAttributes = TrigramAttributes {
    image: "Mountain",
    element: "Earth",
    direction: "Northeast",
    characteristic: "Keeping still, resting",
    glyph: "☶",
};
static XUN: TrigramAttributes = TrigramAttributes {
    image: "Wind",
    element: "Wood",
    direction: "Southeast",
    characteristic: "Gentle, penetrating",
    glyph: "☴",
};
static LI: TrigramAttributes = TrigramAttributes {
    image: "Fire",
    element: "Fire",
    direction: "South",
    characteristic: "Clinging, giving clarity",
    glyph: "☲",
};
static DUI: TrigramAttributes = TrigramAttributes {
    image: "Lake",
    element: "Metal",
    direction: "West",
    characteristic: "Joyous, open",
    glyph: "☱",
};
static UNKNOWN: TrigramAttributes = TrigramAttributes {
    image: "Unknown",
    element: "Unknown",
    direction: "Unknown",
    characteristic: "Unrecognised line pattern",
    glyph: "?",
};

impl TrigramIdentity {
    /// The eight named identities (excludes `Unknown`).
    pub const ALL: [TrigramIdentity; 8] = [
        Self::Qian,
        Self::Kun,
        Self::Zhen,
        Self::Kan,
        Self::Gen,
        Self::Xun,
        Self::Li,
        Self::Dui,
    ];

    /// Classify three lines given in authoring order.
    pub fn classify(l1: Line, l2: Line, l3: Line) -> Self {
        Self::from_code((l1.bit() << 2) | (l2.bit() << 1) | l3.bit())
    }

    /// Look up a 3-bit code; anything above 7 is `Unknown`.
    pub fn from_code(code: u8) -> Self {
        BY_CODE
            .get(usize::from(code))
            .copied()
            .unwrap_or(Self::Unknown)
    }

    pub fn code(self) -> Option<u8> {
        BY_CODE.iter().position(|t| *t == self).map(|p| p as u8)
    }

    /// Canonical lines of this identity; `None` for `Unknown`.
    pub fn lines(self) -> Option<TrigramLines> {
        let code = self.code()?;
        let line = |shift: u8| {
            if (code >> shift) & 1 == 1 {
                Line::Yang
            } else {
                Line::Yin
            }
        };
        Some([line(2), line(1), line(0)])
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Qian => "Qian",
            Self::Kun => "Kun",
            Self::Zhen => "Zhen",
            Self::Kan => "Kan",
            Self::Gen => "Gen",
            Self::Xun => "Xun",
            Self::Li => "Li",
            Self::Dui => "Dui",
            Self::Unknown => "Unknown",
        }
    }

    pub fn attributes(self) -> &'static TrigramAttributes {
        match self {
            Self::Qian => &QIAN,
            Self::Kun => &KUN,
            Self::Zhen => &ZHEN,
            Self::Kan => &KAN,
            Self::Gen => &GEN,
            Self::Xun => &XUN,
            Self::Li => &LI,
            Self::Dui => &DUI,
            Self::Unknown => &UNKNOWN,
        }
    }

    pub fn glyph(self) -> &'static str {
        self.attributes().glyph
    }

    /// Display label, e.g. `Qian (Heaven)`. `Unknown` has no image suffix.
    pub fn label(self) -> String {
        match self {
            Self::Unknown => "Unknown".to_string(),
            known => format!("{} ({})", known.name(), known.attributes().image),
        }
    }
}

impl fmt::Display for TrigramIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A classified three-line group. The identity is always derived from the lines;
/// the only way to build one is through the classifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Trigram {
    identity: TrigramIdentity,
    lines: TrigramLines,
}

impl Trigram {
    pub fn from_lines(lines: TrigramLines) -> Self {
        Self {
            identity: TrigramIdentity::classify(lines[0], lines[1], lines[2]),
            lines,
        }
    }

    /// Classify an untrusted slice; anything but three lines is rejected.
    pub fn from_slice(lines: &[Line]) -> LineResult<Self> {
        let array: TrigramLines = lines.try_into().map_err(|_| LineError::WrongLength {
            expected: 3,
            actual: lines.len(),
        })?;
        Ok(Self::from_lines(array))
    }

    pub fn identity(&self) -> TrigramIdentity {
        self.identity
    }

    pub fn lines(&self) -> &TrigramLines {
        &self.lines
    }

    pub fn attributes(&self) -> &'static TrigramAttributes {
        self.identity.attributes()
    }

    pub fn glyph(&self) -> &'static str {
        self.identity.glyph()
    }

    pub fn label(&self) -> String {
        self.identity.label()
    }
}
