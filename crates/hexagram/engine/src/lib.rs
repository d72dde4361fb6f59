#![deny(unsafe_code)]
//! # hexagram-engine
//!
//! Derives the relationship web between the hexagrams of a registry.
//!
//! ## Key Types
//!
//! - [`RelationshipEngine`]: validates a registry and resolves every facet in two passes
//! - [`HexagramCodex`]: the id-indexed arena produced by one derivation
//! - [`Hexagram`] / [`Relationships`]: an enriched hexagram and its eleven facets
//! - [`LookupIndex`]: first-match lookups by lines, nuclear lines, id and offset
//! - [`GridLayout`]: registry-order or custom-arrangement grid placement
//! - [`IndexFingerprint`]: BLAKE3 digest of a derived index
//!
//! ```
//! use hexagram_engine::{derive_all, Relation};
//! use hexagram_registry::canonical;
//! use hexagram_types::HexagramId;
//!
//! let codex = derive_all(&canonical()).unwrap();
//! let opposite = codex.related(HexagramId(1), Relation::Opposite);
//! assert_eq!(opposite[0].name(), "Kun");
//! ```

mod annotate;
pub mod codex;
pub mod config;
pub mod engine;
pub mod error;
pub mod fingerprint;
pub mod hexagram;
pub mod index;
pub mod layout;

pub use codex::HexagramCodex;
pub use config::EngineConfig;
pub use engine::{derive_all, RelationshipEngine};
pub use error::{EngineError, EngineResult};
pub use fingerprint::IndexFingerprint;
pub use hexagram::{Hexagram, Relation, Relationships, Sequential};
pub use index::LookupIndex;
pub use layout::{CellView, GridCell, GridLayout};
