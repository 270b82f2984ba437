//! Render-ready snapshot of the carousel.

use std::time::Instant;

use folio_config::CarouselConfig;
use folio_model::{CarouselItem, Catalog};

use crate::animator::Transition;
use crate::error::Result;
use crate::geometry::Placement;
use crate::types::EntryKey;
use crate::window::{WindowSlot, visible_window};

/// One card of the visible window.
#[derive(Debug, Clone, PartialEq)]
pub struct VisibleEntry {
    pub key: EntryKey,
    pub item: CarouselItem,
    pub slot: WindowSlot,
    pub placement: Placement,
}

impl VisibleEntry {
    pub fn index(&self) -> usize {
        self.slot.index
    }

    pub fn offset(&self) -> i32 {
        self.slot.offset
    }

    pub fn distance(&self) -> usize {
        self.slot.distance()
    }

    pub fn is_center(&self) -> bool {
        self.slot.is_center()
    }
}

/// Visible entries for `current`, left to right, with their placements.
pub fn derive_entries(
    catalog: &Catalog,
    current: usize,
    config: &CarouselConfig,
) -> Result<Vec<VisibleEntry>> {
    let slots = visible_window(catalog.len(), current, config.visible_radius)?;
    slots
        .into_iter()
        .enumerate()
        .filter_map(|(position, slot)| {
            catalog.get(slot.index).map(|item| (position, slot, item))
        })
        .map(|(position, slot, item)| {
            let placement =
                Placement::resting(&slot, position, &config.geometry)?;
            Ok(VisibleEntry {
                key: EntryKey {
                    item_id: item.id.clone(),
                    anchor_index: current,
                    offset: slot.offset,
                },
                item: item.clone(),
                slot,
                placement,
            })
        })
        .collect()
}

/// Everything a presenter needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselView {
    pub entries: Vec<VisibleEntry>,
    pub len: usize,
    pub current_index: usize,
    pub is_transitioning: bool,
    pub auto_rotate_enabled: bool,
    pub last_error: Option<String>,
    pub selected: Option<CarouselItem>,
    pub transition: Option<Transition>,
    pub revision: u64,
    pub mounted: bool,
}

impl CarouselView {
    /// Degenerate display state: nothing to render, navigation is inert.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn center(&self) -> Option<&VisibleEntry> {
        self.entries.iter().find(|entry| entry.is_center())
    }

    pub fn transition_progress(&self, now: Instant) -> Option<f32> {
        self.transition.map(|transition| transition.progress(now))
    }
}
