//! Intents accepted by the carousel

use folio_model::ItemId;

use crate::keyboard::Key;
use crate::types::Direction;

#[derive(Debug, Clone, PartialEq)]
pub enum CarouselMessage {
    // Navigation
    Rotate(Direction),
    Key(Key),

    // Auto-rotation
    ToggleAutoRotate,
    SetAutoRotate(bool),

    // Detail view
    Select(Option<ItemId>),

    // Error recovery
    Retry,

    // Timers
    Tick,

    // Teardown
    Unmount,
}
