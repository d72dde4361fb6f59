use std::fs;
use std::path::Path;

use hexagram_types::{AuxData, HexagramId, Line};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{RegistryError, RegistryResult};

/// One base entry of a registry: id, display name and authored lines.
///
/// `lines` is deliberately unsized so a malformed registry still loads; the engine
/// rejects any entry without exactly six lines. `data` seeds the hexagram's
/// auxiliary data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegistryEntry {
    pub id: HexagramId,
    pub name: String,
    pub lines: Vec<Line>,
    #[serde(default, skip_serializing_if = "AuxData::is_empty")]
    pub data: AuxData,
}

impl RegistryEntry {
    pub fn new(id: u32, name: impl Into<String>, lines: Vec<Line>) -> Self {
        Self {
            id: HexagramId(id),
            name: name.into(),
            lines,
            data: AuxData::new(),
        }
    }

    pub fn with_data(mut self, data: AuxData) -> Self {
        self.data = data;
        self
    }
}

/// Parse a registry from a JSON array of entries.
pub fn from_json_str(json: &str) -> RegistryResult<Vec<RegistryEntry>> {
    let entries: Vec<RegistryEntry> = serde_json::from_str(json)?;
    debug!(entries = entries.len(), "parsed registry");
    Ok(entries)
}

/// Read and parse a registry file.
pub fn from_json_path(path: impl AsRef<Path>) -> RegistryResult<Vec<RegistryEntry>> {
    let path = path.as_ref();
    let json = fs::read_to_string(path).map_err(|source| RegistryError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    from_json_str(&json)
}
