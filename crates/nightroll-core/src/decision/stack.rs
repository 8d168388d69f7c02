//! Per-screen decision stack.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::decision::gesture::{Direction, GestureDecision, SwipeThresholds};
use crate::error::{NightrollError, Result};
use crate::item::Item;

/// Receives committed decisions from a [`DecisionStack`].
///
/// Implemented for any `FnMut(&Item, Direction)`, so a plain closure works.
pub trait DecisionHandler {
    fn on_decision(&mut self, item: &Item, direction: Direction);
}

impl<F> DecisionHandler for F
where
    F: FnMut(&Item, Direction),
{
    fn on_decision(&mut self, item: &Item, direction: Direction) {
        self(item, direction)
    }
}

/// Lifecycle state of a [`DecisionStack`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StackState {
    /// At least one pending item.
    Active,
    /// Nothing left to decide. Terminal until the next `load`.
    Exhausted,
}

/// Identifies the front item at the moment it was observed.
///
/// A ticket goes stale as soon as the stack advances or is reloaded, which is
/// how duplicate release events for the same card are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrontTicket {
    generation: u64,
}

/// Ordered queue of candidates for one category-browsing session.
///
/// The front item is the one being swiped. A committed decision pops it and
/// forwards `(item, direction)` to the caller's [`DecisionHandler`].
#[derive(Debug, Clone, Default)]
pub struct DecisionStack {
    pending: VecDeque<Item>,
    thresholds: SwipeThresholds,
    generation: u64,
}

impl DecisionStack {
    /// Creates an exhausted stack with the given thresholds.
    pub fn new(thresholds: SwipeThresholds) -> Self {
        Self {
            pending: VecDeque::new(),
            thresholds,
            generation: 0,
        }
    }

    pub fn with_items(thresholds: SwipeThresholds, items: impl IntoIterator<Item = Item>) -> Self {
        let mut stack = Self::new(thresholds);
        stack.load(items);
        stack
    }

    /// Replaces the pending queue wholesale. Outstanding tickets become stale.
    pub fn load(&mut self, items: impl IntoIterator<Item = Item>) {
        self.pending = items.into_iter().collect();
        self.generation += 1;
        debug!(pending = self.pending.len(), "Loaded decision stack");
    }

    pub fn state(&self) -> StackState {
        if self.pending.is_empty() {
            StackState::Exhausted
        } else {
            StackState::Active
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn thresholds(&self) -> SwipeThresholds {
        self.thresholds
    }

    /// The item currently on top, or `None` when exhausted.
    pub fn peek_front(&self) -> Option<&Item> {
        self.pending.front()
    }

    /// The front item together with a ticket for a guarded commit.
    pub fn front_ticket(&self) -> Option<(FrontTicket, &Item)> {
        self.pending.front().map(|item| {
            (
                FrontTicket {
                    generation: self.generation,
                },
                item,
            )
        })
    }

    /// Up to `n` items queued behind the front one.
    pub fn tail(&self, n: usize) -> impl Iterator<Item = &Item> {
        self.pending.iter().skip(1).take(n)
    }

    /// See [`SwipeThresholds::resolve`].
    pub fn resolve_gesture(&self, offset: f64, velocity: f64) -> GestureDecision {
        self.thresholds.resolve(offset, velocity)
    }

    /// Pops the front item named by `ticket` and hands it to `handler`.
    ///
    /// Fails with `InvalidState` when the stack is exhausted or when `ticket`
    /// is stale, so a repeated dispatch for the same card is rejected and
    /// leaves the queue and handler untouched.
    pub fn commit<H>(
        &mut self,
        ticket: FrontTicket,
        direction: Direction,
        handler: &mut H,
    ) -> Result<Item>
    where
        H: DecisionHandler + ?Sized,
    {
        if self.pending.is_empty() {
            return Err(NightrollError::invalid_state(
                "commit called on an exhausted decision stack",
            ));
        }
        if ticket.generation != self.generation {
            return Err(NightrollError::invalid_state(
                "decision for an item that is no longer at the front",
            ));
        }
        self.advance(direction, handler)
    }

    /// Resolves a released gesture and commits it unless it reverts.
    ///
    /// Returns the decision and, on commit, the popped item.
    pub fn release<H>(
        &mut self,
        offset: f64,
        velocity: f64,
        handler: &mut H,
    ) -> Result<(GestureDecision, Option<Item>)>
    where
        H: DecisionHandler + ?Sized,
    {
        let decision = self.resolve_gesture(offset, velocity);
        match decision.direction() {
            Some(direction) => {
                let item = self.advance(direction, handler)?;
                Ok((decision, Some(item)))
            }
            None => Ok((decision, None)),
        }
    }

    fn advance<H>(&mut self, direction: Direction, handler: &mut H) -> Result<Item>
    where
        H: DecisionHandler + ?Sized,
    {
        let item = self.pending.pop_front().ok_or_else(|| {
            NightrollError::invalid_state("commit called on an exhausted decision stack")
        })?;
        self.generation += 1;

        debug!(id = %item.id, %direction, remaining = self.pending.len(), "Committed decision");
        handler.on_decision(&item, direction);
        Ok(item)
    }
}
