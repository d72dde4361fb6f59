#![deny(unsafe_code)]
//! # hexagram-registry
//!
//! Static configuration data for the hexagram index: the canonical ordered list of
//! 64 base entries, plus JSON loaders for alternative registries and for custom grid
//! arrangements. Nothing here is computed; relationships are derived by
//! `hexagram-engine`.

pub mod arrangement;
pub mod canonical;
pub mod entry;
pub mod error;

pub use arrangement::Arrangement;
pub use canonical::{canonical, CANONICAL, CANONICAL_LEN};
pub use entry::{from_json_path, from_json_str, RegistryEntry};
pub use error::{RegistryError, RegistryResult};
