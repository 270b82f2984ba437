//! Shared types for the carousel engine

use folio_model::ItemId;

/// Navigation direction around the ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// Signed index step.
    pub fn delta(self) -> i64 {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }
}

/// Mount state of an engine. Every intent is ignored once unmounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lifecycle {
    #[default]
    Mounted,
    Unmounted,
}

/// What started the transition currently in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionOrigin {
    /// User navigation (buttons or arrow keys); followed by a resume cooldown.
    Manual,
    /// Auto-rotation tick; re-arms the next tick directly.
    Auto,
}

/// Render key of a visible entry.
///
/// The window never repeats an item, so the id is unique within one frame. The
/// anchor index and the offset change whenever the card changes slot, which
/// gives it a fresh key across frames.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntryKey {
    pub item_id: ItemId,
    pub anchor_index: usize,
    pub offset: i32,
}

impl std::fmt::Display for EntryKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}@{}", self.item_id, self.anchor_index, self.offset)
    }
}
