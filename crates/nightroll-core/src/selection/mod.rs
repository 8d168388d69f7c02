//! Liked/passed selections per category, and the store that owns them.

pub mod model;
pub mod repository;
pub mod store;

pub use model::{CategoryMap, Selections};
pub use repository::{InMemorySelectionRepository, SelectionRepository};
pub use store::SelectionStore;
