//! Carousel engine behaviour as seen by a presenter
//!
//! Exercises the public surface only: mount, intents through `update`, and the
//! `CarouselView` snapshots a presenter renders from.

use std::collections::HashSet;
use std::time::{Duration, Instant};

use folio_carousel::{CarouselEngine, CarouselMessage, Direction, update};
use folio_config::CarouselConfig;
use folio_model::{CarouselItem, Catalog, Category};

fn catalog(ids: &[&str]) -> Catalog {
    Catalog::new(
        ids.iter()
            .map(|id| CarouselItem::new(*id, id.to_uppercase(), Category::Design))
            .collect(),
    )
    .unwrap()
}

fn manual() -> CarouselConfig {
    CarouselConfig {
        auto_rotate_on_mount: false,
        ..Default::default()
    }
}

#[test]
fn five_items_show_neighbours_in_ring_order() {
    let engine = CarouselEngine::mount(catalog(&["a", "b", "c", "d", "e"]), manual(), Instant::now());
    let view = engine.view();

    let layout: Vec<_> = view
        .entries
        .iter()
        .map(|entry| (entry.offset(), entry.index()))
        .collect();
    assert_eq!(layout, vec![(-2, 3), (-1, 4), (0, 0), (1, 1), (2, 2)]);
    assert_eq!(view.center().map(|entry| entry.item.id.as_str()), Some("a"));
}

#[test]
fn three_items_rotate_with_unique_render_keys() {
    let t0 = Instant::now();
    let mut engine = CarouselEngine::mount(catalog(&["a", "b", "c"]), manual(), t0);

    assert!(update(&mut engine, CarouselMessage::Rotate(Direction::Forward), t0));
    let view = engine.view();
    assert_eq!(view.current_index, 1);
    assert_eq!(view.center().map(|entry| entry.item.id.as_str()), Some("b"));

    // Every item is visible and none is shown twice.
    let ids: HashSet<_> = view.entries.iter().map(|e| e.item.id.as_str()).collect();
    assert_eq!(ids, HashSet::from(["a", "b", "c"]));
    assert_eq!(view.entries.len(), 3);

    let keys: HashSet<_> = view.entries.iter().map(|e| e.key.clone()).collect();
    assert_eq!(keys.len(), view.entries.len());
    assert!(view.entries.iter().all(|e| e.key.anchor_index == 1));

    // Keys from the previous frame never collide with keys of this frame.
    let previous = CarouselEngine::mount(catalog(&["a", "b", "c"]), manual(), t0).view();
    for entry in &previous.entries {
        assert!(!keys.contains(&entry.key), "key {} reused across frames", entry.key);
    }
}

#[test]
fn window_stays_in_bounds_under_repeated_rotation() {
    let t0 = Instant::now();
    for n in 1..=9 {
        let ids: Vec<String> = (0..n).map(|i| format!("item-{i}")).collect();
        let refs: Vec<&str> = ids.iter().map(String::as_str).collect();
        let mut engine = CarouselEngine::mount(catalog(&refs), manual(), t0);

        let mut now = t0;
        for step in 0..(2 * n + 3) {
            let direction = if step % 3 == 2 {
                Direction::Backward
            } else {
                Direction::Forward
            };
            assert!(engine.rotate(direction, now));
            now += Duration::from_millis(500);
            engine.tick(now);

            let view = engine.view();
            assert!(view.current_index < n);
            assert!(view.entries.len() <= n.min(5));
            for entry in &view.entries {
                assert!(entry.distance() <= 2);
                assert!(entry.index() < n);
            }
        }
    }
}

#[test]
fn placements_fade_and_recede_away_from_center() {
    let engine = CarouselEngine::mount(catalog(&["a", "b", "c", "d", "e"]), manual(), Instant::now());
    let view = engine.view();

    let center = view.center().unwrap().placement;
    for entry in view.entries.iter().filter(|e| !e.is_center()) {
        let p = entry.placement;
        assert!(p.scale < center.scale);
        assert!(p.opacity < center.opacity);
        assert!(p.opacity > 0.0);
        assert!(p.z < center.z);
        assert_eq!(p.x.signum(), (entry.offset() as f32).signum());
    }
}
