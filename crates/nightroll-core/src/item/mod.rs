//! Swipeable candidate items.

pub mod model;

pub use model::Item;
