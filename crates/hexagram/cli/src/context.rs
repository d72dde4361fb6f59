//! Loading the registry, configuration and arrangement named on the command line.

use std::fs;
use std::path::{Path, PathBuf};

use hexagram_engine::{EngineConfig, HexagramCodex, RelationshipEngine};
use hexagram_registry::{canonical, from_json_path, Arrangement, RegistryEntry};
use tracing::debug;

use crate::error::{CliError, CliResult};

/// Inputs shared by every command.
#[derive(Debug, Clone, Default)]
pub struct Sources {
    pub registry: Option<PathBuf>,
    pub arrangement: Option<PathBuf>,
    pub config: Option<PathBuf>,
}

impl Sources {
    pub fn load_config(&self) -> CliResult<EngineConfig> {
        match &self.config {
            Some(path) => load_config(path),
            None => Ok(EngineConfig::default()),
        }
    }

    pub fn load_entries(&self) -> CliResult<Vec<RegistryEntry>> {
        match &self.registry {
            Some(path) => {
                debug!(path = %path.display(), "loading registry");
                Ok(from_json_path(path)?)
            }
            None => Ok(canonical()),
        }
    }

    pub fn load_arrangement(&self) -> CliResult<Option<Arrangement>> {
        self.arrangement
            .as_deref()
            .map(|path| Arrangement::from_json_path(path).map_err(CliError::from))
            .transpose()
    }

    /// Derive the codex for the selected registry and configuration.
    pub fn codex(&self) -> CliResult<HexagramCodex> {
        let engine = RelationshipEngine::new(self.load_config()?);
        Ok(engine.derive_all(&self.load_entries()?)?)
    }
}

fn load_config(path: &Path) -> CliResult<EngineConfig> {
    debug!(path = %path.display(), "loading engine config");
    let text = fs::read_to_string(path)?;
    Ok(toml::from_str(&text)?)
}
