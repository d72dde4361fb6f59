use serde::{Deserialize, Serialize};

/// Engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Reject registries in which two entries share an id.
    pub require_unique_ids: bool,
    /// Columns of the default registry-order grid.
    pub grid_columns: usize,
    /// `annotate_related` logs a warning above this depth. The traversal has no
    /// visited set, so work grows geometrically with depth.
    pub annotation_depth_warning: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            require_unique_ids: true,
            grid_columns: 8,
            annotation_depth_warning: 4,
        }
    }
}
