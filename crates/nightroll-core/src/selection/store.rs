//! The session-wide selection store.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::item::Item;
use crate::selection::model::Selections;
use crate::selection::repository::SelectionRepository;

/// Owned selection state with a save hook on every mutation.
///
/// There is exactly one store per application session; callers pass it by
/// reference to whatever needs it. The in-memory [`Selections`] are the source
/// of truth. The repository is a best-effort mirror: a failed write is logged
/// and never rolls back or blocks the mutation.
pub struct SelectionStore {
    selections: Selections,
    repository: Arc<dyn SelectionRepository>,
}

impl SelectionStore {
    /// Opens the store, restoring the persisted record if there is one.
    ///
    /// A missing record starts an empty store. An unreadable record is logged
    /// and also starts an empty store.
    pub fn open(repository: Arc<dyn SelectionRepository>) -> Self {
        let selections = match repository.load() {
            Ok(Some(restored)) => {
                info!(
                    categories = restored.likes().len(),
                    liked = restored.all_liked().len(),
                    "Restored selections"
                );
                restored
            }
            Ok(None) => {
                debug!("No persisted selections, starting empty");
                Selections::default()
            }
            Err(e) => {
                warn!(error = %e, "Failed to restore selections, starting empty");
                Selections::default()
            }
        };

        Self {
            selections,
            repository,
        }
    }

    /// Likes `item` in `category`, removing it from that category's passed list.
    ///
    /// Returns `true` if the item was newly appended to the liked list.
    pub fn add_like(&mut self, category: &str, item: Item) -> bool {
        debug!(category, id = %item.id, "add_like");
        let inserted = self.selections.add_like(category, item);
        self.persist();
        inserted
    }

    /// Passes `item` in `category`, removing it from that category's liked list.
    pub fn add_pass(&mut self, category: &str, item: Item) -> bool {
        debug!(category, id = %item.id, "add_pass");
        let inserted = self.selections.add_pass(category, item);
        self.persist();
        inserted
    }

    /// Removes the liked item `id` from `category`. No-op if absent.
    pub fn remove_like(&mut self, category: &str, id: &str) -> bool {
        debug!(category, id, "remove_like");
        let removed = self.selections.remove_like(category, id);
        self.persist();
        removed
    }

    /// Empties both lists of `category`.
    pub fn clear_category(&mut self, category: &str) {
        debug!(category, "clear_category");
        self.selections.clear_category(category);
        self.persist();
    }

    /// Flattened liked list across all categories.
    pub fn all_liked(&self) -> Vec<Item> {
        self.selections.all_liked()
    }

    pub fn liked(&self, category: &str) -> &[Item] {
        self.selections.liked(category)
    }

    pub fn passed(&self, category: &str) -> &[Item] {
        self.selections.passed(category)
    }

    pub fn is_liked(&self, category: &str, id: &str) -> bool {
        self.selections.is_liked(category, id)
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.selections.categories()
    }

    pub fn selections(&self) -> &Selections {
        &self.selections
    }

    pub fn snapshot(&self) -> Selections {
        self.selections.clone()
    }

    fn persist(&self) {
        if let Err(e) = self.repository.save(&self.selections) {
            warn!(error = %e, "Failed to persist selections, keeping in-memory state");
        }
    }
}
