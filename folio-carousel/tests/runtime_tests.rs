//! Runtime driver tests
//!
//! These run on tokio's paused clock, so timer-driven behaviour (auto-rotate,
//! transition settle, cooldown resume) is exercised deterministically.

use std::time::Duration;

use folio_carousel::{
    CarouselError, CarouselMessage, CarouselRuntime, Direction, Key, Lifecycle,
};
use folio_config::CarouselConfig;
use folio_model::{CarouselItem, Catalog, Category, ItemId};
use tokio::time::sleep;

fn catalog(n: usize) -> Catalog {
    let items = (0..n)
        .map(|i| CarouselItem::new(format!("p{i}"), format!("Project {i}"), Category::Ui))
        .collect();
    Catalog::new(items).unwrap()
}

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[tokio::test(start_paused = true)]
async fn auto_rotate_advances_once_per_interval() {
    let (handle, _task) = CarouselRuntime::spawn(catalog(5), CarouselConfig::default());
    assert_eq!(handle.view().current_index, 0);
    assert!(handle.view().auto_rotate_enabled);

    sleep(ms(3_990)).await;
    assert_eq!(handle.view().current_index, 0);

    sleep(ms(20)).await;
    let view = handle.view();
    assert_eq!(view.current_index, 1);
    assert!(view.is_transitioning);

    sleep(ms(4_000)).await;
    assert_eq!(handle.view().current_index, 2);
}

#[tokio::test(start_paused = true)]
async fn toggling_auto_rotate_off_cancels_the_pending_step() {
    let (handle, _task) = CarouselRuntime::spawn(catalog(5), CarouselConfig::default());
    handle.toggle_auto_rotate().unwrap();

    sleep(ms(10_000)).await;
    let view = handle.view();
    assert_eq!(view.current_index, 0);
    assert!(!view.auto_rotate_enabled);
}

#[tokio::test(start_paused = true)]
async fn manual_rotation_settles_then_resumes_after_cooldown() {
    let (handle, _task) = CarouselRuntime::spawn(catalog(5), CarouselConfig::default());

    handle.rotate(Direction::Forward).unwrap();
    // Dropped: the first transition is still in flight.
    handle.key(Key::ArrowLeft).unwrap();
    sleep(ms(10)).await;
    let view = handle.view();
    assert_eq!(view.current_index, 1);
    assert!(view.is_transitioning);
    assert!(!view.auto_rotate_enabled);

    sleep(ms(500)).await;
    assert!(!handle.view().is_transitioning);

    // Cooldown (5s after settle) plus one interval (4s) before the next step.
    sleep(ms(5_000)).await;
    let view = handle.view();
    assert!(view.auto_rotate_enabled);
    assert_eq!(view.current_index, 1);

    sleep(ms(4_000)).await;
    assert_eq!(handle.view().current_index, 2);
}

#[tokio::test(start_paused = true)]
async fn changed_reports_each_published_snapshot() {
    let config = CarouselConfig {
        auto_rotate_on_mount: false,
        ..Default::default()
    };
    let (mut handle, _task) = CarouselRuntime::spawn(catalog(3), config);

    handle.select(Some(ItemId::new("p2"))).unwrap();
    let view = handle.changed().await.unwrap();
    assert_eq!(view.selected.map(|item| item.id), Some(ItemId::new("p2")));
    assert_eq!(view.current_index, 0);

    handle.send(CarouselMessage::Select(None)).unwrap();
    let view = handle.changed().await.unwrap();
    assert!(view.selected.is_none());
}

#[tokio::test(start_paused = true)]
async fn unmount_mid_transition_stops_the_driver() {
    let (handle, task) = CarouselRuntime::spawn(catalog(5), CarouselConfig::default());
    handle.rotate(Direction::Forward).unwrap();
    sleep(ms(100)).await;
    handle.unmount().unwrap();

    let engine = task.await.unwrap();
    assert_eq!(engine.lifecycle(), Lifecycle::Unmounted);
    assert!(!engine.has_pending_timers());
    // The completion callback never ran.
    assert!(engine.is_transitioning());
    assert_eq!(engine.current_index(), 1);

    let view = handle.view();
    assert!(!view.mounted);
    assert_eq!(handle.rotate(Direction::Forward), Err(CarouselError::Unmounted));
}

#[tokio::test(start_paused = true)]
async fn dropping_every_handle_unmounts() {
    let (handle, task) = CarouselRuntime::spawn(catalog(2), CarouselConfig::default());
    let clone = handle.clone();
    drop(handle);
    drop(clone);

    let engine = task.await.unwrap();
    assert_eq!(engine.lifecycle(), Lifecycle::Unmounted);
    assert_eq!(engine.current_index(), 0);
}

#[tokio::test(start_paused = true)]
async fn empty_catalog_never_schedules() {
    let (handle, task) = CarouselRuntime::spawn(Catalog::empty(), CarouselConfig::default());
    handle.rotate(Direction::Forward).unwrap();
    sleep(ms(20_000)).await;

    let view = handle.view();
    assert!(view.is_empty());
    assert_eq!(view.revision, 0);

    handle.unmount().unwrap();
    let engine = task.await.unwrap();
    assert!(!engine.has_pending_timers());
}
