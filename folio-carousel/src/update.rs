use std::time::Instant;

use crate::messages::CarouselMessage;
use crate::state::CarouselEngine;

/// Apply one intent. Returns whether the engine state changed.
pub fn update(
    engine: &mut CarouselEngine,
    message: CarouselMessage,
    now: Instant,
) -> bool {
    let before = engine.revision();
    match message {
        CarouselMessage::Rotate(direction) => {
            engine.rotate(direction, now);
        }
        CarouselMessage::Key(key) => {
            engine.handle_key(key, now);
        }
        CarouselMessage::ToggleAutoRotate => {
            engine.toggle_auto_rotate(now);
        }
        CarouselMessage::SetAutoRotate(enabled) => {
            engine.set_auto_rotate(enabled, now);
        }
        CarouselMessage::Select(id) => {
            engine.select(id);
        }
        CarouselMessage::Retry => {
            engine.retry();
        }
        CarouselMessage::Tick => engine.tick(now),
        CarouselMessage::Unmount => engine.unmount(),
    }
    engine.revision() != before
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use folio_config::CarouselConfig;
    use folio_model::{CarouselItem, Catalog, Category, ItemId};

    use super::*;
    use crate::keyboard::Key;
    use crate::types::Direction;

    fn engine(now: Instant) -> CarouselEngine {
        let catalog = Catalog::new(vec![
            CarouselItem::new("a", "A", Category::Design),
            CarouselItem::new("b", "B", Category::Data),
            CarouselItem::new("c", "C", Category::Ui),
        ])
        .unwrap();
        CarouselEngine::mount(catalog, CarouselConfig::default(), now)
    }

    #[test]
    fn reports_changes_only_when_state_moves() {
        let t0 = Instant::now();
        let mut engine = engine(t0);

        assert!(update(&mut engine, CarouselMessage::Rotate(Direction::Forward), t0));
        assert!(!update(&mut engine, CarouselMessage::Key(Key::ArrowLeft), t0));
        assert!(!update(&mut engine, CarouselMessage::Retry, t0));
        assert!(update(
            &mut engine,
            CarouselMessage::Select(Some(ItemId::new("c"))),
            t0
        ));
        assert!(!update(
            &mut engine,
            CarouselMessage::Select(Some(ItemId::new("c"))),
            t0
        ));
        assert!(update(
            &mut engine,
            CarouselMessage::Tick,
            t0 + Duration::from_millis(500)
        ));
        assert!(update(&mut engine, CarouselMessage::Unmount, t0));
        assert!(!update(&mut engine, CarouselMessage::ToggleAutoRotate, t0));
    }

    #[test]
    fn set_auto_rotate_is_idempotent() {
        let t0 = Instant::now();
        let mut engine = engine(t0);
        assert!(!update(&mut engine, CarouselMessage::SetAutoRotate(true), t0));
        assert!(update(&mut engine, CarouselMessage::SetAutoRotate(false), t0));
        assert!(!engine.auto_rotate_enabled());
    }
}
