use std::{
    path::{Path, PathBuf},
    sync::{Mutex, PoisonError},
};

use tracing::debug;

use crate::{
    error::{Error, Result},
    schema::{BotConfig, ConfigPatch},
};

/// Owner of the persisted [`BotConfig`].
///
/// Handlers share one store behind an `Arc`. All mutation goes through
/// [`ConfigStore::set`], which merges and rewrites the file while holding the
/// lock, so two concurrent updates can never interleave. The lock is a
/// `std::sync::Mutex` because nothing awaits while holding it.
#[derive(Debug)]
pub struct ConfigStore {
    path: PathBuf,
    current: Mutex<BotConfig>,
}

impl ConfigStore {
    /// Read the state file. A missing or malformed file is an error; the bot
    /// must not start without one.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let raw = std::fs::read_to_string(&path).map_err(|source| Error::Read {
            path: path.clone(),
            source,
        })?;
        let config: BotConfig = serde_json::from_str(&raw).map_err(|source| Error::Parse {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), "loaded state file");
        Ok(Self {
            path,
            current: Mutex::new(config),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Snapshot of the current record.
    pub fn get(&self) -> BotConfig {
        self.current
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Merge `patch` into the record and rewrite the whole file.
    ///
    /// The in-memory record only changes once the write succeeded, so memory
    /// and disk never disagree. Returns the record as written.
    pub fn set(&self, patch: ConfigPatch) -> Result<BotConfig> {
        let mut current = self.current.lock().unwrap_or_else(PoisonError::into_inner);
        let mut next = current.clone();
        next.apply(patch);
        write_config(&self.path, &next)?;
        *current = next.clone();
        debug!(path = %self.path.display(), "saved state file");
        Ok(next)
    }
}

fn write_config(path: &Path, config: &BotConfig) -> Result<()> {
    let json = serde_json::to_string_pretty(config)?;
    std::fs::write(path, json).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}
