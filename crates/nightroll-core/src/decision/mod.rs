//! Swipe decisions: gesture resolution and the per-screen decision stack.

pub mod gesture;
pub mod stack;

pub use gesture::{
    DEFAULT_DISTANCE_THRESHOLD, DEFAULT_VELOCITY_THRESHOLD, Direction, GestureDecision,
    SwipeThresholds,
};
pub use stack::{DecisionHandler, DecisionStack, FrontTicket, StackState};
