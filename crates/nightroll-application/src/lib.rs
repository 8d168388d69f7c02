//! Use cases built on the nightroll domain: browsing a category deck,
//! forwarding swipes into the selection store, and spinning over likes.

pub mod catalog;
pub mod session;
pub mod spinner;

pub use catalog::{Category, SeedCatalog};
pub use session::{SessionOutcome, SwipeSession};
pub use spinner::Spinner;
