//! Selection repository trait.
//!
//! Defines the interface for persisting the selection state.

use std::sync::Mutex;

use crate::error::{NightrollError, Result};
use crate::selection::model::Selections;

/// An abstract repository for the durable mirror of [`Selections`].
///
/// This trait decouples the store from the storage mechanism (JSON file,
/// browser storage bridge, memory). The whole state is read once at startup
/// and overwritten on every mutation.
pub trait SelectionRepository: Send + Sync {
    /// Loads the persisted state.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Selections))`: A persisted record exists
    /// - `Ok(None)`: Nothing has been persisted yet
    /// - `Err(_)`: The record exists but could not be read
    fn load(&self) -> Result<Option<Selections>>;

    /// Overwrites the persisted state with `selections`.
    fn save(&self, selections: &Selections) -> Result<()>;
}

/// Repository that keeps the record in memory.
///
/// Useful for embedding without durable storage and as a test double.
#[derive(Debug, Default)]
pub struct InMemorySelectionRepository {
    record: Mutex<Option<Selections>>,
    saves: Mutex<usize>,
}

impl InMemorySelectionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository that already holds `selections`.
    pub fn with_record(selections: Selections) -> Self {
        Self {
            record: Mutex::new(Some(selections)),
            saves: Mutex::new(0),
        }
    }

    /// The last saved record, if any.
    pub fn record(&self) -> Option<Selections> {
        self.record.lock().ok().and_then(|guard| guard.clone())
    }

    /// Number of successful saves.
    pub fn save_count(&self) -> usize {
        self.saves.lock().map(|guard| *guard).unwrap_or_default()
    }
}

impl SelectionRepository for InMemorySelectionRepository {
    fn load(&self) -> Result<Option<Selections>> {
        let guard = self
            .record
            .lock()
            .map_err(|e| NightrollError::internal(format!("Failed to lock record: {}", e)))?;
        Ok(guard.clone())
    }

    fn save(&self, selections: &Selections) -> Result<()> {
        {
            let mut guard = self
                .record
                .lock()
                .map_err(|e| NightrollError::internal(format!("Failed to lock record: {}", e)))?;
            *guard = Some(selections.clone());
        }
        let mut saves = self
            .saves
            .lock()
            .map_err(|e| NightrollError::internal(format!("Failed to lock counter: {}", e)))?;
        *saves += 1;
        Ok(())
    }
}
