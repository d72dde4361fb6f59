//! Enriched hexagrams and their relationship sets.
//!
//! Relationships hold [`HexagramId`]s into the owning [`HexagramCodex`](crate::HexagramCodex),
//! never copies, so cyclic relations (A's inverse is B, B's inverse is A) are plain data.

use std::fmt;

use hexagram_types::{AuxData, AuxValue, HexagramId, HexagramLines, Trigram};
use serde::{Deserialize, Serialize};

/// Registry-order neighbours, wrapping at both ends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sequential {
    pub next: Option<HexagramId>,
    pub previous: Option<HexagramId>,
}

/// The eleven relationship facets of one hexagram.
///
/// Single-match facets resolve ties to the first registry entry. Collections keep
/// registry order. `derivative` keeps line-position order and may repeat an id.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationships {
    pub inverse: Option<HexagramId>,
    pub opposite: Option<HexagramId>,
    pub nuclear: Option<HexagramId>,
    pub mutual: Option<HexagramId>,
    pub derivative: Vec<HexagramId>,
    pub shadow: Option<HexagramId>,
    pub mirror: Option<HexagramId>,
    pub rotational: Option<HexagramId>,
    pub sequential: Sequential,
    pub complementary_trigrams: Vec<HexagramId>,
    pub symmetrical: Vec<HexagramId>,
}

/// A single traversable relation. `sequential` splits into `Next` and `Previous`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relation {
    Inverse,
    Opposite,
    Nuclear,
    Mutual,
    Shadow,
    Mirror,
    Rotational,
    Next,
    Previous,
    Derivative,
    Complementary,
    Symmetrical,
}

impl Relation {
    /// All relations in annotation order.
    pub const ALL: [Relation; 12] = [
        Self::Inverse,
        Self::Opposite,
        Self::Nuclear,
        Self::Mutual,
        Self::Shadow,
        Self::Mirror,
        Self::Rotational,
        Self::Next,
        Self::Previous,
        Self::Derivative,
        Self::Complementary,
        Self::Symmetrical,
    ];

    /// Key suffix used by annotation propagation (`key_<suffix>`).
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Inverse => "inverse",
            Self::Opposite => "opposite",
            Self::Nuclear => "nuclear",
            Self::Mutual => "mutual",
            Self::Shadow => "shadow",
            Self::Mirror => "mirror",
            Self::Rotational => "rotational",
            Self::Next => "next",
            Self::Previous => "previous",
            Self::Derivative => "derivative",
            Self::Complementary => "complementary",
            Self::Symmetrical => "symmetrical",
        }
    }

    pub fn is_collection(self) -> bool {
        matches!(
            self,
            Self::Derivative | Self::Complementary | Self::Symmetrical
        )
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.suffix())
    }
}

impl Relationships {
    /// Ids reached through `relation`, in stored order. Empty on a miss.
    pub fn targets(&self, relation: Relation) -> Vec<HexagramId> {
        match relation {
            Relation::Inverse => self.inverse.into_iter().collect(),
            Relation::Opposite => self.opposite.into_iter().collect(),
            Relation::Nuclear => self.nuclear.into_iter().collect(),
            Relation::Mutual => self.mutual.into_iter().collect(),
            Relation::Shadow => self.shadow.into_iter().collect(),
            Relation::Mirror => self.mirror.into_iter().collect(),
            Relation::Rotational => self.rotational.into_iter().collect(),
            Relation::Next => self.sequential.next.into_iter().collect(),
            Relation::Previous => self.sequential.previous.into_iter().collect(),
            Relation::Derivative => self.derivative.clone(),
            Relation::Complementary => self.complementary_trigrams.clone(),
            Relation::Symmetrical => self.symmetrical.clone(),
        }
    }
}

/// A hexagram enriched with derived trigrams and resolved relationships.
///
/// Lines, trigrams and relationships are fixed once the codex is built; only the
/// auxiliary data can change afterwards, through the codex.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Hexagram {
    id: HexagramId,
    name: String,
    lines: HexagramLines,
    upper_trigram: Trigram,
    lower_trigram: Trigram,
    relationships: Relationships,
    data: AuxData,
}

impl Hexagram {
    pub(crate) fn new(
        id: HexagramId,
        name: String,
        lines: HexagramLines,
        relationships: Relationships,
        data: AuxData,
    ) -> Self {
        Self {
            id,
            name,
            upper_trigram: Trigram::from_lines(lines.upper()),
            lower_trigram: Trigram::from_lines(lines.lower()),
            lines,
            relationships,
            data,
        }
    }

    pub fn id(&self) -> HexagramId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn lines(&self) -> &HexagramLines {
        &self.lines
    }

    /// Derived from lines 1-3.
    pub fn upper_trigram(&self) -> &Trigram {
        &self.upper_trigram
    }

    /// Derived from lines 4-6.
    pub fn lower_trigram(&self) -> &Trigram {
        &self.lower_trigram
    }

    pub fn relationships(&self) -> &Relationships {
        &self.relationships
    }

    pub fn data(&self) -> &AuxData {
        &self.data
    }

    pub fn datum(&self, key: &str) -> Option<&AuxValue> {
        self.data.get(key)
    }

    pub fn yang_count(&self) -> usize {
        self.lines.yang_count()
    }

    pub fn yin_count(&self) -> usize {
        self.lines.yin_count()
    }

    pub(crate) fn set_datum(&mut self, key: String, value: AuxValue) {
        self.data.insert(key, value);
    }
}

impl fmt::Display for Hexagram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.id, self.name)
    }
}
