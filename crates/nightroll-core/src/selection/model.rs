//! Selection domain models.
//!
//! Contains the liked/passed classification state that persists across sessions.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::item::Item;

/// Ordered mapping from category to an append-ordered list of items.
///
/// Categories keep the order in which they were first touched.
pub type CategoryMap = IndexMap<String, Vec<Item>>;

/// Per-category liked and passed lists.
///
/// # Invariants
///
/// * Within one category's liked list no two items share an `id`; same for passed.
/// * An `id` is never in both the liked and passed list of the same category.
/// * Lists are append-ordered, never re-sorted.
///
/// Every mutation touches both maps for its category, so a category that has
/// only ever been passed still occupies its slot in the liked iteration order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "RawSelections")]
pub struct Selections {
    likes: CategoryMap,
    passes: CategoryMap,
}

/// Unchecked wire form; deserialization goes through [`Selections::from_maps`].
#[derive(Deserialize)]
struct RawSelections {
    #[serde(default)]
    likes: CategoryMap,
    #[serde(default)]
    passes: CategoryMap,
}

impl From<RawSelections> for Selections {
    fn from(raw: RawSelections) -> Self {
        Selections::from_maps(raw.likes, raw.passes)
    }
}

impl Selections {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds selections from raw maps, restoring the invariants.
    ///
    /// Duplicate ids keep their first occurrence. An id found in both lists of
    /// a category stays liked. Category order of both maps is kept.
    pub fn from_maps(likes: CategoryMap, passes: CategoryMap) -> Self {
        let likes: CategoryMap = likes
            .into_iter()
            .map(|(category, items)| (category, dedup_by_id(items)))
            .collect();

        let passes = passes
            .into_iter()
            .map(|(category, items)| {
                let liked = likes.get(&category);
                let items = dedup_by_id(items)
                    .into_iter()
                    .filter(|item| {
                        !liked.is_some_and(|liked| liked.iter().any(|l| l.id == item.id))
                    })
                    .collect();
                (category, items)
            })
            .collect();

        Self { likes, passes }
    }

    /// Classifies `item` as liked in `category`.
    ///
    /// Returns `true` if the item was appended, `false` if an item with the same
    /// id was already liked. Either way the id is removed from the passed list.
    pub fn add_like(&mut self, category: &str, item: Item) -> bool {
        Self::classify(&mut self.likes, &mut self.passes, category, item)
    }

    /// Classifies `item` as passed in `category`. Symmetric to [`Self::add_like`].
    pub fn add_pass(&mut self, category: &str, item: Item) -> bool {
        Self::classify(&mut self.passes, &mut self.likes, category, item)
    }

    /// Removes the liked item with `id`. Returns whether anything was removed.
    pub fn remove_like(&mut self, category: &str, id: &str) -> bool {
        let liked = self.likes.entry(category.to_string()).or_default();
        let before = liked.len();
        liked.retain(|existing| existing.id != id);
        liked.len() != before
    }

    /// Empties both lists of `category`. The category keeps its position.
    pub fn clear_category(&mut self, category: &str) {
        self.likes.entry(category.to_string()).or_default().clear();
        self.passes.entry(category.to_string()).or_default().clear();
    }

    /// Every liked item across all categories, in category order then insertion order.
    pub fn all_liked(&self) -> Vec<Item> {
        self.likes.values().flatten().cloned().collect()
    }

    pub fn liked(&self, category: &str) -> &[Item] {
        self.likes.get(category).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn passed(&self, category: &str) -> &[Item] {
        self.passes.get(category).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn is_liked(&self, category: &str, id: &str) -> bool {
        self.liked(category).iter().any(|item| item.id == id)
    }

    pub fn is_passed(&self, category: &str, id: &str) -> bool {
        self.passed(category).iter().any(|item| item.id == id)
    }

    /// Categories in liked iteration order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.likes.keys().map(String::as_str)
    }

    pub fn likes(&self) -> &CategoryMap {
        &self.likes
    }

    pub fn passes(&self) -> &CategoryMap {
        &self.passes
    }

    fn classify(
        target: &mut CategoryMap,
        other: &mut CategoryMap,
        category: &str,
        item: Item,
    ) -> bool {
        other
            .entry(category.to_string())
            .or_default()
            .retain(|existing| existing.id != item.id);

        let list = target.entry(category.to_string()).or_default();
        if list.iter().any(|existing| existing.id == item.id) {
            return false;
        }
        list.push(item);
        true
    }
}

fn dedup_by_id(items: Vec<Item>) -> Vec<Item> {
    let mut kept: Vec<Item> = Vec::with_capacity(items.len());
    for item in items {
        if !kept.iter().any(|existing| existing.id == item.id) {
            kept.push(item);
        }
    }
    kept
}
