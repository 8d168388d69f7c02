//! JSON file implementation of `SelectionRepository`.

use std::path::{Path, PathBuf};

use tracing::debug;

use nightroll_core::{Result, SelectionRepository, Selections};

use crate::dto::SelectionsEnvelope;
use crate::paths::NightrollPaths;
use crate::storage::AtomicJsonFile;

/// Stores the whole selection state as one JSON record.
///
/// Every save overwrites the record atomically. All failures surface as
/// `NightrollError::PersistenceUnavailable`.
pub struct JsonSelectionRepository {
    file: AtomicJsonFile<SelectionsEnvelope>,
}

impl JsonSelectionRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            file: AtomicJsonFile::new(path),
        }
    }

    /// Repository for the record named `store_key` in the data directory.
    pub fn for_store_key(paths: &NightrollPaths, store_key: &str) -> Self {
        Self::new(paths.store_file(store_key))
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

impl SelectionRepository for JsonSelectionRepository {
    fn load(&self) -> Result<Option<Selections>> {
        match self.file.load()? {
            Some(envelope) => {
                debug!(path = %self.file.path().display(), "Loaded selections record");
                envelope.into_domain().map(Some)
            }
            None => Ok(None),
        }
    }

    fn save(&self, selections: &Selections) -> Result<()> {
        self.file.save(&SelectionsEnvelope::from(selections))?;
        debug!(path = %self.file.path().display(), "Saved selections record");
        Ok(())
    }
}
