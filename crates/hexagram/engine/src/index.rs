//! Lookup index over a fixed, ordered hexagram universe.
//!
//! Built once from the complete registry. All queries return registry positions;
//! when several entries match, the first in registry order wins. Misses are `None`.

use std::collections::HashMap;

use hexagram_types::{HexagramId, HexagramLines, NuclearLines};

/// Exact-line, nuclear-line, id and offset lookups by registry position.
#[derive(Clone, Debug, Default)]
pub struct LookupIndex {
    exact: HashMap<HexagramLines, usize>,
    nuclear: HashMap<NuclearLines, usize>,
    positions: HashMap<HexagramId, usize>,
    len: usize,
}

impl LookupIndex {
    /// Index `(id, lines)` pairs given in registry order.
    pub fn build<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (HexagramId, &'a HexagramLines)>,
    {
        let mut index = Self::default();
        for (position, (id, lines)) in entries.into_iter().enumerate() {
            // First occurrence wins; later duplicates are never indexed.
            index.exact.entry(*lines).or_insert(position);
            index.nuclear.entry(lines.nuclear()).or_insert(position);
            index.positions.entry(id).or_insert(position);
            index.len = position + 1;
        }
        index
    }

    /// First position whose six lines equal `lines`.
    pub fn find_by_exact_lines(&self, lines: &HexagramLines) -> Option<usize> {
        self.exact.get(lines).copied()
    }

    /// First position whose lines 2-5 equal `nuclear`.
    pub fn find_by_nuclear_lines(&self, nuclear: &NuclearLines) -> Option<usize> {
        self.nuclear.get(nuclear).copied()
    }

    /// Registry position of `id` (first one, if ids repeat).
    pub fn position_of(&self, id: HexagramId) -> Option<usize> {
        self.positions.get(&id).copied()
    }

    /// `(position + offset) mod len`, wrapping in both directions.
    pub fn offset_position(&self, position: usize, offset: isize) -> Option<usize> {
        if position >= self.len {
            return None;
        }
        let step = offset.rem_euclid(self.len as isize) as usize;
        Some((position + step) % self.len)
    }

    /// Position `offset` steps from `id` in registry order.
    pub fn find_by_registry_offset(&self, id: HexagramId, offset: isize) -> Option<usize> {
        self.offset_position(self.position_of(id)?, offset)
    }

    /// Number of distinct six-line patterns indexed.
    pub fn distinct_patterns(&self) -> usize {
        self.exact.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
