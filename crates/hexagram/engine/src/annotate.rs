//! Recursive annotation across the relationship web.
//!
//! Propagation stops on depth alone. The relationship graph is cyclic and no
//! visited set is kept, so a hexagram reached by several paths is written once per
//! path; the write count grows with the fan-out of every hop.

use hexagram_types::{AuxValue, HexagramId};
use tracing::{debug, warn};

use crate::codex::HexagramCodex;
use crate::error::{EngineError, EngineResult};
use crate::hexagram::Relation;

impl HexagramCodex {
    /// Write `key = value` on `root`, then `key_<relation>` on every directly related
    /// hexagram, recursing until `depth` reaches zero.
    ///
    /// Returns the number of writes made.
    pub fn annotate_related(
        &mut self,
        root: HexagramId,
        key: &str,
        value: impl Into<AuxValue>,
        depth: usize,
    ) -> EngineResult<usize> {
        if self.get(root).is_none() {
            return Err(EngineError::UnknownHexagram(root));
        }
        let threshold = self.config().annotation_depth_warning;
        if depth > threshold {
            warn!(depth, threshold, "annotation depth above warning threshold");
        }

        let value = value.into();
        let mut writes = 0;
        self.propagate(root, key.to_string(), &value, depth, &mut writes);
        debug!(root = %root, key, depth, writes, "annotation propagated");
        Ok(writes)
    }

    fn propagate(
        &mut self,
        id: HexagramId,
        key: String,
        value: &AuxValue,
        depth: usize,
        writes: &mut usize,
    ) {
        let Some(hexagram) = self.hexagram_mut(id) else {
            return;
        };
        hexagram.set_datum(key.clone(), value.clone());
        *writes += 1;
        if depth == 0 {
            return;
        }

        let relationships = hexagram.relationships().clone();
        for relation in Relation::ALL {
            for target in relationships.targets(relation) {
                let derived = format!("{}_{}", key, relation.suffix());
                self.propagate(target, derived, value, depth - 1, writes);
            }
        }
    }
}
