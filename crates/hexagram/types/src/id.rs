use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical id of a hexagram (1..=64 in the canonical registry).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HexagramId(pub u32);

impl HexagramId {
    pub fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for HexagramId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for HexagramId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
