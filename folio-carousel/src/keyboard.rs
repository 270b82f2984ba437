//! Keyboard contract of the carousel.
//!
//! Only the horizontal arrows are bound. Other keys are delivered so the
//! presenter can map them to its own intents.

use crate::types::Direction;

/// Keys the presenter forwards to the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Enter,
    Escape,
    Space,
    Character(char),
}

/// Navigation bound to `key`, if any.
pub fn binding(key: Key) -> Option<Direction> {
    match key {
        Key::ArrowLeft => Some(Direction::Backward),
        Key::ArrowRight => Some(Direction::Forward),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_horizontal_arrows_navigate() {
        assert_eq!(binding(Key::ArrowLeft), Some(Direction::Backward));
        assert_eq!(binding(Key::ArrowRight), Some(Direction::Forward));
        for key in [
            Key::ArrowUp,
            Key::ArrowDown,
            Key::Enter,
            Key::Escape,
            Key::Space,
            Key::Character('l'),
        ] {
            assert_eq!(binding(key), None);
        }
    }
}
