//! Visible-window derivation: which catalog indices sit at which offsets
//! around the centered item.

use crate::error::{CarouselError, Result};

/// One position of the visible window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSlot {
    /// Catalog index shown in this slot.
    pub index: usize,
    /// Signed offset from the center, in `-radius..=radius`.
    pub offset: i32,
}

impl WindowSlot {
    pub fn distance(&self) -> usize {
        self.offset.unsigned_abs() as usize
    }

    pub fn is_center(&self) -> bool {
        self.offset == 0
    }
}

/// Step `current` by `delta` around a ring of `len` items.
pub fn wrap_index(current: usize, delta: i64, len: usize) -> Result<usize> {
    if len == 0 {
        return Err(CarouselError::EmptyCatalog);
    }
    if current >= len {
        return Err(CarouselError::IndexOutOfRange {
            index: current,
            len,
        });
    }
    let wrapped = (current as i64 + delta).rem_euclid(len as i64);
    Ok(wrapped as usize)
}

/// Slots around `current`, left to right.
///
/// The window spans offsets `-radius..=radius` but never shows a catalog index
/// twice: with `len < 2 * radius + 1` it shrinks to `len` slots, and when that
/// count is even the extra slot goes to the forward side. An empty ring yields
/// an empty window.
pub fn visible_window(
    len: usize,
    current: usize,
    radius: usize,
) -> Result<Vec<WindowSlot>> {
    if len == 0 {
        return Ok(Vec::new());
    }
    let (behind, ahead) = window_extent(len, radius);
    (-(behind as i64)..=ahead as i64)
        .map(|offset| {
            let index = wrap_index(current, offset, len)?;
            Ok(WindowSlot {
                index,
                offset: offset as i32,
            })
        })
        .collect()
}

/// Number of slots behind and ahead of the center for a ring of `len`.
pub fn window_extent(len: usize, radius: usize) -> (usize, usize) {
    let total = len.min(radius.saturating_mul(2).saturating_add(1));
    if total == 0 {
        return (0, 0);
    }
    let behind = (total - 1) / 2;
    (behind, total - 1 - behind)
}
