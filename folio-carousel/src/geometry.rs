//! Placement of visible entries on the pseudo-3D ring.
//!
//! Everything here is pure: a slot plus geometry settings in, a set of
//! transform parameters out. Applying them is the presenter's job.

use std::time::Duration;

use folio_config::GeometryConfig;

use crate::error::{CarouselError, Result};
use crate::window::WindowSlot;

const HOVER_CENTER_SCALE_BOOST: f32 = 0.1;
const PRESS_CENTER_SCALE_DROP: f32 = 0.1;
const HOVER_SIDE_SCALE_FACTOR: f32 = 1.1;
const PRESS_SIDE_SCALE_FACTOR: f32 = 0.95;
const HOVER_LIFT: f32 = 10.0;
const HOVER_CENTER_DEPTH: f32 = 50.0;
const HOVER_SIDE_DEPTH_GAIN: f32 = 20.0;
/// Extra hover tilt for side cards, as a fraction of the resting tilt.
const HOVER_TILT_RATIO: f32 = 1.0 / 3.0;

/// Transform parameters for one card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Horizontal displacement, proportional to the offset.
    pub x: f32,
    /// Vertical displacement (negative lifts the card).
    pub y: f32,
    /// Depth into the screen; `0` at the center, negative behind it.
    pub z: f32,
    pub scale: f32,
    pub opacity: f32,
    /// Rotation around the vertical axis, in degrees.
    pub rotate_y_deg: f32,
    /// Entry animation delay for this slot.
    pub delay: Duration,
}

impl Placement {
    /// Resting placement for `slot`, the `position`-th entry of the window.
    pub fn resting(
        slot: &WindowSlot,
        position: usize,
        cfg: &GeometryConfig,
    ) -> Result<Self> {
        let offset = slot.offset as f32;
        let distance = slot.distance() as f32;

        let (scale, opacity) = if slot.is_center() {
            (cfg.center_scale, 1.0)
        } else {
            (
                (1.0 - cfg.scale_step * distance).max(cfg.min_scale),
                (cfg.side_opacity - cfg.opacity_step * distance)
                    .max(cfg.opacity_floor),
            )
        };

        let placement = Self {
            x: offset * cfg.card_width,
            y: 0.0,
            z: -distance * cfg.card_depth,
            scale,
            opacity,
            rotate_y_deg: offset * cfg.tilt_deg,
            delay: Duration::from_millis(cfg.stagger_ms)
                .saturating_mul(position.min(u32::MAX as usize) as u32),
        };
        placement.checked(slot.offset)
    }

    /// Placement while the pointer is over the card.
    pub fn hovered(&self, slot: &WindowSlot, cfg: &GeometryConfig) -> Self {
        if slot.is_center() {
            Self {
                scale: self.scale + HOVER_CENTER_SCALE_BOOST,
                z: HOVER_CENTER_DEPTH,
                y: -HOVER_LIFT,
                ..*self
            }
        } else {
            Self {
                scale: self.scale * HOVER_SIDE_SCALE_FACTOR,
                z: self.z + HOVER_SIDE_DEPTH_GAIN,
                y: -HOVER_LIFT,
                rotate_y_deg: self.rotate_y_deg
                    + slot.offset as f32 * cfg.tilt_deg * HOVER_TILT_RATIO,
                ..*self
            }
        }
    }

    /// Placement while the card is being pressed.
    pub fn pressed(&self, slot: &WindowSlot) -> Self {
        let scale = if slot.is_center() {
            self.scale - PRESS_CENTER_SCALE_DROP
        } else {
            self.scale * PRESS_SIDE_SCALE_FACTOR
        };
        Self { scale, ..*self }
    }

    fn checked(self, offset: i32) -> Result<Self> {
        for (field, value) in [
            ("x", self.x),
            ("z", self.z),
            ("scale", self.scale),
            ("opacity", self.opacity),
            ("rotate_y", self.rotate_y_deg),
        ] {
            if !value.is_finite() {
                return Err(CarouselError::Geometry { field, offset });
            }
        }
        Ok(self)
    }
}
