//! Folio carousel
//!
//! An index-based, auto-rotating 3D project carousel. The engine owns the
//! centered index, the transition guard and its timers, and derives the visible
//! window with per-card geometry. Presenters read [`CarouselView`] snapshots
//! and send [`CarouselMessage`] intents, either directly through [`update`] or
//! through the tokio-driven [`runtime::CarouselRuntime`].

pub mod animator;
pub mod error;
pub mod geometry;
pub mod keyboard;
pub mod messages;
pub mod runtime;
pub mod state;
pub mod subscription;
pub mod timers;
pub mod types;
pub mod update;
pub mod view;
pub mod window;

pub use error::CarouselError;
pub use geometry::Placement;
pub use keyboard::Key;
pub use messages::CarouselMessage;
pub use runtime::{CarouselHandle, CarouselRuntime};
pub use state::CarouselEngine;
pub use subscription::Subscription;
pub use timers::TimerKind;
pub use types::{Direction, EntryKey, Lifecycle, TransitionOrigin};
pub use update::update;
pub use view::{CarouselView, VisibleEntry};
