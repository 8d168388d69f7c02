//! Random pick over the liked list.

use rand::Rng;
use tracing::debug;

use nightroll_core::Item;

/// Picks one liked item at random and tracks the highlighted result.
#[derive(Debug, Clone, Default)]
pub struct Spinner {
    selected: Option<usize>,
}

impl Spinner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spinning needs at least one liked item.
    pub fn can_spin(liked: &[Item]) -> bool {
        !liked.is_empty()
    }

    /// Picks a uniformly random index into `liked`. `None` if there is nothing to pick.
    pub fn spin<R>(&mut self, liked: &[Item], rng: &mut R) -> Option<usize>
    where
        R: Rng + ?Sized,
    {
        if !Self::can_spin(liked) {
            return None;
        }
        let index = rng.gen_range(0..liked.len());
        debug!(index, id = %liked[index].id, "Spin result");
        self.selected = Some(index);
        self.selected
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// The highlighted item in `liked`, if any.
    pub fn selected_item<'a>(&self, liked: &'a [Item]) -> Option<&'a Item> {
        self.selected.and_then(|index| liked.get(index))
    }

    /// Keeps the highlight on the same entry after `removed` left the list.
    pub fn on_removed(&mut self, removed: usize) {
        self.selected = Self::adjust_after_removal(self.selected, removed);
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Removing the highlighted entry clears it; removing an earlier entry
    /// shifts it down by one.
    pub fn adjust_after_removal(selected: Option<usize>, removed: usize) -> Option<usize> {
        match selected {
            None => None,
            Some(current) if current == removed => None,
            Some(current) if removed < current => Some(current - 1),
            Some(current) => Some(current),
        }
    }
}
