//! Grid placement for presentation layers.
//!
//! Two modes: registry order wrapped onto a fixed column count, or a caller-supplied
//! [`Arrangement`] of ids. A position or id with no hexagram renders as
//! [`GridCell::Empty`]; it never fails the layout.

use hexagram_registry::Arrangement;
use hexagram_types::HexagramId;
use serde::Serialize;

use crate::codex::HexagramCodex;

/// One grid slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GridCell {
    Occupied { id: HexagramId, position: usize },
    Empty,
}

impl GridCell {
    pub fn id(&self) -> Option<HexagramId> {
        match self {
            Self::Occupied { id, .. } => Some(*id),
            Self::Empty => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// Everything a renderer needs for one occupied cell.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CellView {
    pub id: HexagramId,
    pub name: String,
    pub upper_glyph: String,
    pub lower_glyph: String,
    pub upper_label: String,
    pub lower_label: String,
}

/// Row-major grid of cells.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct GridLayout {
    rows: Vec<Vec<GridCell>>,
}

impl GridLayout {
    /// Registry index `i` at `(i / columns, i % columns)`. `columns` of zero is
    /// treated as one.
    pub fn registry_order(codex: &HexagramCodex, columns: usize) -> Self {
        let columns = columns.max(1);
        let cells: Vec<GridCell> = codex
            .iter()
            .enumerate()
            .map(|(position, h)| GridCell::Occupied {
                id: h.id(),
                position,
            })
            .collect();
        Self {
            rows: cells.chunks(columns).map(<[GridCell]>::to_vec).collect(),
        }
    }

    /// Registry order with the codex's configured column count.
    pub fn default_for(codex: &HexagramCodex) -> Self {
        Self::registry_order(codex, codex.config().grid_columns)
    }

    /// Resolve each id in `arrangement`; unknown ids become empty cells.
    pub fn from_arrangement(codex: &HexagramCodex, arrangement: &Arrangement) -> Self {
        let rows = arrangement
            .rows()
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&id| match codex.position_of(id) {
                        Some(position) => GridCell::Occupied { id, position },
                        None => GridCell::Empty,
                    })
                    .collect()
            })
            .collect();
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<GridCell>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Width of the widest row.
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Cell at `(row, col)`. Out-of-range coordinates are `None`.
    pub fn cell(&self, row: usize, col: usize) -> Option<GridCell> {
        self.rows.get(row)?.get(col).copied()
    }

    /// First `(row, col)` holding `id`.
    pub fn coordinates_of(&self, id: HexagramId) -> Option<(usize, usize)> {
        self.rows.iter().enumerate().find_map(|(r, row)| {
            row.iter()
                .position(|cell| cell.id() == Some(id))
                .map(|c| (r, c))
        })
    }

    /// Render data for `(row, col)`; `None` for empty or out-of-range cells.
    pub fn cell_view(&self, codex: &HexagramCodex, row: usize, col: usize) -> Option<CellView> {
        let GridCell::Occupied { position, .. } = self.cell(row, col)? else {
            return None;
        };
        let hexagram = codex.at_position(position)?;
        let upper = hexagram.upper_trigram();
        let lower = hexagram.lower_trigram();
        Some(CellView {
            id: hexagram.id(),
            name: hexagram.name().to_string(),
            upper_glyph: upper.glyph().to_string(),
            lower_glyph: lower.glyph().to_string(),
            upper_label: upper.label(),
            lower_label: lower.label(),
        })
    }
}
