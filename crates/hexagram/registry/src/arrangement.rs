use std::fs;
use std::path::Path;

use hexagram_types::HexagramId;
use serde::{Deserialize, Serialize};

use crate::error::{RegistryError, RegistryResult};

/// Caller-supplied display order: a row-major grid of hexagram ids.
///
/// Rows may have different lengths. Ids that match no hexagram are kept; the grid
/// renders them as empty cells.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Arrangement {
    rows: Vec<Vec<HexagramId>>,
}

impl Arrangement {
    pub fn new(rows: Vec<Vec<HexagramId>>) -> Self {
        Self { rows }
    }

    /// Build from raw ids, e.g. `Arrangement::from_ids(vec![vec![1, 2], vec![3]])`.
    pub fn from_ids(rows: Vec<Vec<u32>>) -> Self {
        Self::new(
            rows.into_iter()
                .map(|row| row.into_iter().map(HexagramId).collect())
                .collect(),
        )
    }

    pub fn rows(&self) -> &[Vec<HexagramId>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.cell_count() == 0
    }

    pub fn from_json_str(json: &str) -> RegistryResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_path(path: impl AsRef<Path>) -> RegistryResult<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| RegistryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_nested_id_arrays() {
        let arrangement = Arrangement::from_json_str("[[1, 2, 3], [64]]").unwrap();
        assert_eq!(arrangement.row_count(), 2);
        assert_eq!(arrangement.cell_count(), 4);
        assert_eq!(arrangement.rows()[1], vec![HexagramId(64)]);
    }

    #[test]
    fn serializes_back_to_plain_arrays() {
        let arrangement = Arrangement::from_ids(vec![vec![2, 1]]);
        assert_eq!(serde_json::to_string(&arrangement).unwrap(), "[[2,1]]");
    }

    #[test]
    fn rejects_non_numeric_ids() {
        assert!(Arrangement::from_json_str(r#"[["a"]]"#).is_err());
    }

    #[test]
    fn empty_arrangement() {
        let arrangement = Arrangement::default();
        assert!(arrangement.is_empty());
        assert!(Arrangement::from_ids(vec![vec![], vec![]]).is_empty());
    }
}
