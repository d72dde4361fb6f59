//! Content fingerprint of a derived relationship index.

use std::fmt;

use serde::Serialize;

/// BLAKE3 digest of a derived relationship index.
///
/// Two codexes derived from the same registry always share a fingerprint; any change
/// to a line, id or resolved relationship changes it.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct IndexFingerprint([u8; 32]);

impl IndexFingerprint {
    /// Lowercase hex, 64 characters.
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{:02x}", b)).collect()
    }

    /// First 12 hex characters, for log lines and tables.
    pub fn short(&self) -> String {
        self.to_hex()[..12].to_string()
    }

    /// Compare against a recorded hex digest. A recorded prefix of at least 12
    /// characters is accepted; case and surrounding whitespace are ignored.
    pub fn matches(&self, recorded: &str) -> bool {
        let recorded = recorded.trim().to_ascii_lowercase();
        recorded.len() >= 12 && self.to_hex().starts_with(&recorded)
    }
}

impl From<blake3::Hash> for IndexFingerprint {
    fn from(hash: blake3::Hash) -> Self {
        Self(*hash.as_bytes())
    }
}

impl fmt::Debug for IndexFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IndexFingerprint({})", self.short())
    }
}

impl fmt::Display for IndexFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for IndexFingerprint {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}
