//! The hexagram codex: an id-indexed arena of enriched hexagrams.
//!
//! Every relationship stores ids into this one collection. Auxiliary data is the only
//! mutable state, and writes are visible to every holder of the id.

use hexagram_types::{AuxValue, HexagramId, HexagramLines, NuclearLines};
use serde::Serialize;
use tracing::debug;

use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult};
use crate::fingerprint::IndexFingerprint;
use crate::hexagram::{Hexagram, Relation, Relationships};
use crate::index::LookupIndex;

/// The complete, cross-referenced result of one engine run.
#[derive(Clone, Debug)]
pub struct HexagramCodex {
    hexagrams: Vec<Hexagram>,
    index: LookupIndex,
    config: EngineConfig,
}

/// Fingerprinted view of one hexagram. Auxiliary data and names are excluded.
#[derive(Serialize)]
struct FingerprintRecord<'a> {
    id: HexagramId,
    lines: &'a HexagramLines,
    relationships: &'a Relationships,
}

impl HexagramCodex {
    pub(crate) fn new(hexagrams: Vec<Hexagram>, index: LookupIndex, config: EngineConfig) -> Self {
        Self {
            hexagrams,
            index,
            config,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn index(&self) -> &LookupIndex {
        &self.index
    }

    pub fn len(&self) -> usize {
        self.hexagrams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hexagrams.is_empty()
    }

    /// Hexagrams in registry order.
    pub fn iter(&self) -> impl Iterator<Item = &Hexagram> {
        self.hexagrams.iter()
    }

    pub fn hexagrams(&self) -> &[Hexagram] {
        &self.hexagrams
    }

    pub fn get(&self, id: HexagramId) -> Option<&Hexagram> {
        self.at_position(self.index.position_of(id)?)
    }

    pub fn position_of(&self, id: HexagramId) -> Option<usize> {
        self.index.position_of(id)
    }

    pub fn at_position(&self, position: usize) -> Option<&Hexagram> {
        self.hexagrams.get(position)
    }

    /// First hexagram (registry order) with exactly these lines.
    pub fn find_by_lines(&self, lines: &HexagramLines) -> Option<&Hexagram> {
        self.at_position(self.index.find_by_exact_lines(lines)?)
    }

    /// First hexagram (registry order) whose lines 2-5 equal `nuclear`.
    pub fn find_by_nuclear_lines(&self, nuclear: &NuclearLines) -> Option<&Hexagram> {
        self.at_position(self.index.find_by_nuclear_lines(nuclear)?)
    }

    /// Hexagram `offset` steps from `id` in registry order, wrapping.
    pub fn neighbour(&self, id: HexagramId, offset: isize) -> Option<&Hexagram> {
        self.at_position(self.index.find_by_registry_offset(id, offset)?)
    }

    /// Hexagrams reached from `id` through `relation`, in stored order.
    pub fn related(&self, id: HexagramId, relation: Relation) -> Vec<&Hexagram> {
        self.get(id)
            .map(|h| {
                h.relationships()
                    .targets(relation)
                    .into_iter()
                    .filter_map(|target| self.get(target))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Hexagrams whose yang-line count exceeds the yin-line count of `id`.
    ///
    /// An illustrative heuristic kept alongside the structural facets; it is not part
    /// of [`Relationships`].
    pub fn causal_links(&self, id: HexagramId) -> Vec<HexagramId> {
        let Some(source) = self.get(id) else {
            return Vec::new();
        };
        let yin = source.yin_count();
        self.hexagrams
            .iter()
            .filter(|h| h.yang_count() > yin)
            .map(Hexagram::id)
            .collect()
    }

    /// Write one key into one hexagram's auxiliary data.
    pub fn annotate(
        &mut self,
        id: HexagramId,
        key: impl Into<String>,
        value: impl Into<AuxValue>,
    ) -> EngineResult<()> {
        let position = self
            .index
            .position_of(id)
            .ok_or(EngineError::UnknownHexagram(id))?;
        let key = key.into();
        debug!(hexagram = %id, key = %key, "annotate");
        self.hexagrams[position].set_datum(key, value.into());
        Ok(())
    }

    pub(crate) fn hexagram_mut(&mut self, id: HexagramId) -> Option<&mut Hexagram> {
        let position = self.index.position_of(id)?;
        self.hexagrams.get_mut(position)
    }

    /// Digest of ids, lines and relationships in registry order.
    pub fn fingerprint(&self) -> EngineResult<IndexFingerprint> {
        let mut hasher = blake3::Hasher::new();
        for hexagram in &self.hexagrams {
            let record = FingerprintRecord {
                id: hexagram.id(),
                lines: hexagram.lines(),
                relationships: hexagram.relationships(),
            };
            let bytes = serde_json::to_vec(&record)
                .map_err(|e| EngineError::Serialization(e.to_string()))?;
            hasher.update(&bytes);
            hasher.update(b"\n");
        }
        Ok(hasher.finalize().into())
    }
}
