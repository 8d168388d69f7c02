pub mod config;
pub mod decision;
pub mod error;
pub mod item;
pub mod selection;

// Re-export common types
pub use decision::{
    DecisionHandler, DecisionStack, Direction, FrontTicket, GestureDecision, StackState,
    SwipeThresholds,
};
pub use error::{NightrollError, Result};
pub use item::Item;
pub use selection::{SelectionRepository, SelectionStore, Selections};
