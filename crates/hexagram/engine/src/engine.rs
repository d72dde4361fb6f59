//! The relationship engine.
//!
//! `derive_all` runs in two passes. Pass one validates every registry entry and
//! builds drafts (lines and trigrams, no relationships). Pass two indexes the complete
//! draft set and resolves all eleven facets for each draft against it. A
//! [`HexagramCodex`] only exists after both passes succeed.

use std::collections::HashSet;

use hexagram_registry::RegistryEntry;
use hexagram_types::{AuxData, HexagramId, HexagramLines, Trigram};
use tracing::{debug, info};

use crate::codex::HexagramCodex;
use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult};
use crate::hexagram::{Hexagram, Relationships, Sequential};
use crate::index::LookupIndex;

/// A validated registry entry awaiting relationship resolution.
struct Draft {
    id: HexagramId,
    name: String,
    lines: HexagramLines,
    upper: Trigram,
    lower: Trigram,
    data: AuxData,
}

/// Derives enriched hexagrams from a registry.
#[derive(Clone, Debug, Default)]
pub struct RelationshipEngine {
    config: EngineConfig,
}

impl RelationshipEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Build the codex for `entries`, given in registry order.
    ///
    /// Fails on the first entry without exactly six lines, or on a repeated id when
    /// `require_unique_ids` is set. Relationship misses are never failures.
    pub fn derive_all(&self, entries: &[RegistryEntry]) -> EngineResult<HexagramCodex> {
        let drafts = self.draft_all(entries)?;
        let index = LookupIndex::build(drafts.iter().map(|d| (d.id, &d.lines)));

        let hexagrams: Vec<Hexagram> = drafts
            .iter()
            .enumerate()
            .map(|(position, draft)| {
                let relationships = resolve(position, draft, &drafts, &index);
                Hexagram::new(
                    draft.id,
                    draft.name.clone(),
                    draft.lines,
                    relationships,
                    draft.data.clone(),
                )
            })
            .collect();

        log_misses(&hexagrams);
        info!(
            hexagrams = hexagrams.len(),
            distinct_patterns = index.distinct_patterns(),
            "relationship index derived"
        );

        Ok(HexagramCodex::new(hexagrams, index, self.config.clone()))
    }

    /// Pass one: validate and classify every entry.
    fn draft_all(&self, entries: &[RegistryEntry]) -> EngineResult<Vec<Draft>> {
        let mut seen = HashSet::with_capacity(entries.len());
        entries
            .iter()
            .map(|entry| {
                if self.config.require_unique_ids && !seen.insert(entry.id) {
                    return Err(EngineError::DuplicateId(entry.id));
                }
                let lines = HexagramLines::from_slice(&entry.lines).map_err(|source| {
                    EngineError::InvalidEntry {
                        id: entry.id,
                        source,
                    }
                })?;
                Ok(Draft {
                    id: entry.id,
                    name: entry.name.clone(),
                    upper: Trigram::from_lines(lines.upper()),
                    lower: Trigram::from_lines(lines.lower()),
                    lines,
                    data: entry.data.clone(),
                })
            })
            .collect()
    }
}

/// Derive with the default configuration.
pub fn derive_all(entries: &[RegistryEntry]) -> EngineResult<HexagramCodex> {
    RelationshipEngine::default().derive_all(entries)
}

/// Pass two: resolve every facet of `draft` against the complete draft set.
fn resolve(position: usize, draft: &Draft, drafts: &[Draft], index: &LookupIndex) -> Relationships {
    let id_at = |p: usize| drafts[p].id;
    let exact = |lines: HexagramLines| index.find_by_exact_lines(&lines).map(id_at);

    Relationships {
        inverse: exact(inverse_lines(&draft.lines)),
        opposite: exact(opposite_lines(&draft.lines)),
        nuclear: index
            .find_by_nuclear_lines(&draft.lines.nuclear())
            .map(id_at),
        mutual: exact(mutual_lines(draft)),
        derivative: (0..HexagramLines::LEN)
            .filter_map(|p| draft.lines.flip_at(p))
            .filter_map(exact)
            .collect(),
        shadow: exact(shadow_lines(&draft.lines)),
        mirror: exact(mirror_lines(&draft.lines)),
        rotational: exact(rotational_lines(&draft.lines)),
        sequential: Sequential {
            next: index.offset_position(position, 1).map(id_at),
            previous: index.offset_position(position, -1).map(id_at),
        },
        complementary_trigrams: drafts
            .iter()
            .filter(|other| {
                other.upper.identity() == draft.lower.identity()
                    || other.lower.identity() == draft.upper.identity()
            })
            .map(|other| other.id)
            .collect(),
        symmetrical: drafts
            .iter()
            .filter(|other| other.lines == draft.lines)
            .map(|other| other.id)
            .collect(),
    }
}

// Inverse, mirror and rotational all reduce to full reversal; opposite and shadow
// both reduce to a full flip.

fn inverse_lines(lines: &HexagramLines) -> HexagramLines {
    lines.reversed()
}

fn opposite_lines(lines: &HexagramLines) -> HexagramLines {
    lines.flipped()
}

fn shadow_lines(lines: &HexagramLines) -> HexagramLines {
    lines.flipped()
}

/// Lines 6,5,4,3,2,1.
fn mirror_lines(lines: &HexagramLines) -> HexagramLines {
    let l = lines.as_array();
    HexagramLines::new([l[5], l[4], l[3], l[2], l[1], l[0]])
}

fn rotational_lines(lines: &HexagramLines) -> HexagramLines {
    lines.reversed()
}

/// Lower trigram block followed by the upper trigram block.
fn mutual_lines(draft: &Draft) -> HexagramLines {
    HexagramLines::from_trigrams(*draft.lower.lines(), *draft.upper.lines())
}

fn log_misses(hexagrams: &[Hexagram]) {
    let count = |f: fn(&Relationships) -> bool| {
        hexagrams
            .iter()
            .filter(|h| f(h.relationships()))
            .count()
    };
    debug!(
        inverse = count(|r| r.inverse.is_none()),
        opposite = count(|r| r.opposite.is_none()),
        nuclear = count(|r| r.nuclear.is_none()),
        mutual = count(|r| r.mutual.is_none()),
        short_derivative = count(|r| r.derivative.len() < HexagramLines::LEN),
        "relationship misses"
    );
}
