#![deny(unsafe_code)]
//! # hexagram-types
//!
//! Leaf types shared by every crate in the hexagram index.
//!
//! ## Key Types
//!
//! - [`Line`]: a single `Yin` or `Yang` line
//! - [`HexagramLines`]: six lines in registry authoring order
//! - [`TrigramIdentity`]: one of the eight trigrams, or `Unknown`
//! - [`Trigram`]: a classified three-line group
//! - [`HexagramId`]: canonical id of a registry entry
//! - [`AuxValue`] / [`AuxData`]: typed auxiliary annotations
//!
//! Upper trigram = lines 1-3, lower trigram = lines 4-6, nuclear lines = lines 2-5.

pub mod annotation;
pub mod error;
pub mod id;
pub mod line;
pub mod trigram;

pub use annotation::{AuxData, AuxValue};
pub use error::{LineError, LineResult};
pub use id::HexagramId;
pub use line::{HexagramLines, Line, NuclearLines, TrigramLines};
pub use trigram::{Trigram, TrigramAttributes, TrigramIdentity};
