//! Last shipment draft, kept as JSON in the platform config directory.

use std::fs;
use std::io;
use std::path::PathBuf;

use directories::ProjectDirs;
use serde_json::Error as SerdeError;

use crate::domain::PersistedState;

const STATE_FILENAME: &str = "last_shipment.json";

#[derive(Debug, thiserror::Error)]
pub enum PersistSaveError {
    #[error("storage directory unavailable")]
    StorageUnavailable,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] SerdeError),
}

#[derive(Clone, Debug)]
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    pub fn platform() -> Option<Self> {
        ProjectDirs::from("com", "CargoCover", "CargoCover")
            .map(|dirs| Self::at(dirs.config_dir().join(STATE_FILENAME)))
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[cfg(test)]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Missing files load as `None`. Corrupt files are logged and ignored so
    /// a bad save never blocks startup.
    pub fn load(&self) -> Option<PersistedState> {
        let data = fs::read_to_string(&self.path).ok()?;
        serde_json::from_str(&data)
            .map_err(|err| {
                tracing::warn!(path = %self.path.display(), "ignoring unreadable saved state: {err}");
            })
            .ok()
    }

    pub fn save(&self, state: &PersistedState) -> Result<(), PersistSaveError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(state)?)?;
        Ok(())
    }
}

pub fn load_persisted_state() -> Option<PersistedState> {
    StateStore::platform()?.load()
}

pub fn save_persisted_state(state: &PersistedState) -> Result<(), PersistSaveError> {
    StateStore::platform()
        .ok_or(PersistSaveError::StorageUnavailable)?
        .save(state)
}
