//! Swipe session use case.
//!
//! One session per category screen. Right swipes like the front card in the
//! selection store, left swipes pass it.

use serde::Serialize;
use tracing::info;

use nightroll_core::{
    DecisionStack, Direction, FrontTicket, GestureDecision, Item, Result, SelectionStore,
    StackState, SwipeThresholds,
};

/// What a single gesture release did.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionOutcome {
    pub decision: GestureDecision,
    /// The item that was decided, if the gesture committed.
    pub item: Option<Item>,
    pub exhausted: bool,
}

/// A category-browsing session over a [`DecisionStack`].
#[derive(Debug, Clone)]
pub struct SwipeSession {
    category: String,
    stack: DecisionStack,
}

impl SwipeSession {
    pub fn start(
        category: impl Into<String>,
        candidates: Vec<Item>,
        thresholds: SwipeThresholds,
    ) -> Self {
        let category = category.into();
        info!(category = %category, cards = candidates.len(), "Starting swipe session");
        Self {
            category,
            stack: DecisionStack::with_items(thresholds, candidates),
        }
    }

    /// Replaces the deck, e.g. after the candidate list changed.
    pub fn restart(&mut self, candidates: Vec<Item>) {
        self.stack.load(candidates);
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn state(&self) -> StackState {
        self.stack.state()
    }

    pub fn remaining(&self) -> usize {
        self.stack.len()
    }

    pub fn front(&self) -> Option<&Item> {
        self.stack.peek_front()
    }

    pub fn front_ticket(&self) -> Option<(FrontTicket, &Item)> {
        self.stack.front_ticket()
    }

    /// Cards queued behind the front one.
    pub fn tail(&self, n: usize) -> Vec<&Item> {
        self.stack.tail(n).collect()
    }

    /// Handles a gesture release on the front card.
    pub fn release(
        &mut self,
        store: &mut SelectionStore,
        offset: f64,
        velocity: f64,
    ) -> Result<SessionOutcome> {
        let category = self.category.clone();
        let mut forward =
            |item: &Item, direction: Direction| record(store, &category, item, direction);
        let (decision, item) = self.stack.release(offset, velocity, &mut forward)?;
        Ok(self.outcome(decision, item))
    }

    /// Commits an explicit decision (e.g. a like/pass button) on the card
    /// identified by `ticket`.
    ///
    /// Duplicate dispatches for an already-decided card are rejected.
    pub fn decide(
        &mut self,
        store: &mut SelectionStore,
        ticket: FrontTicket,
        direction: Direction,
    ) -> Result<SessionOutcome> {
        let category = self.category.clone();
        let mut forward =
            |item: &Item, direction: Direction| record(store, &category, item, direction);
        let item = self.stack.commit(ticket, direction, &mut forward)?;
        Ok(self.outcome(decision_for(direction), Some(item)))
    }

    fn outcome(&self, decision: GestureDecision, item: Option<Item>) -> SessionOutcome {
        SessionOutcome {
            decision,
            item,
            exhausted: self.stack.is_exhausted(),
        }
    }
}

fn record(store: &mut SelectionStore, category: &str, item: &Item, direction: Direction) {
    match direction {
        Direction::Right => {
            store.add_like(category, item.clone());
        }
        Direction::Left => {
            store.add_pass(category, item.clone());
        }
    }
}

fn decision_for(direction: Direction) -> GestureDecision {
    match direction {
        Direction::Right => GestureDecision::CommitRight,
        Direction::Left => GestureDecision::CommitLeft,
    }
}
