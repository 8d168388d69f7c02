//! Persisted data transfer objects.

pub mod selections;

pub use selections::{ItemDto, SELECTIONS_VERSION, SelectionsEnvelope, SelectionsStateDto};
