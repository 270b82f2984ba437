//! Carousel settings with serde defaults.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Easing curve applied to transition progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    Linear,
    EaseIn,
    #[default]
    EaseOut,
    EaseInOut,
}

impl Easing {
    /// Map linear progress `t` in `0..=1` onto the curve (quadratic).
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - 2.0 * (1.0 - t) * (1.0 - t)
                }
            }
        }
    }
}

/// Layout constants for the pseudo-3D ring.
///
/// Side cards shrink and fade linearly with their distance from the center;
/// the floors keep every card inside the visible radius on screen.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GeometryConfig {
    /// Horizontal displacement per offset step.
    pub card_width: f32,
    /// Depth (into the screen) per distance step.
    pub card_depth: f32,
    /// Scale of the centered card.
    pub center_scale: f32,
    /// Scale lost per distance step for side cards (starting from 1.0).
    pub scale_step: f32,
    pub min_scale: f32,
    /// Opacity of side cards before the per-step falloff.
    pub side_opacity: f32,
    pub opacity_step: f32,
    pub opacity_floor: f32,
    /// Y-axis rotation per offset step, in degrees.
    pub tilt_deg: f32,
    /// Entry animation delay per slot, in milliseconds.
    pub stagger_ms: u64,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            card_width: 200.0,
            card_depth: 100.0,
            center_scale: 1.5,
            scale_step: 0.2,
            min_scale: 0.1,
            side_opacity: 0.6,
            opacity_step: 0.15,
            opacity_floor: 0.2,
            tilt_deg: 15.0,
            stagger_ms: 50,
        }
    }
}

/// Top-level carousel settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Neighbours shown on each side of the centered item.
    pub visible_radius: usize,
    /// Duration of one navigation transition (ms). Navigation input is
    /// rejected while a transition is in flight.
    pub transition_ms: u64,
    /// Pause (ms) after a manual transition settles before auto-rotation
    /// resumes. Restarts on every manual navigation.
    pub resume_cooldown_ms: u64,
    /// Auto-rotation period (ms).
    pub auto_rotate_interval_ms: u64,
    /// Whether auto-rotation starts enabled when the carousel mounts.
    pub auto_rotate_on_mount: bool,
    pub easing: Easing,
    pub geometry: GeometryConfig,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            visible_radius: 2,
            transition_ms: 500,
            resume_cooldown_ms: 5_000,
            auto_rotate_interval_ms: 4_000,
            auto_rotate_on_mount: true,
            easing: Easing::default(),
            geometry: GeometryConfig::default(),
        }
    }
}

impl CarouselConfig {
    pub fn transition(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }

    pub fn resume_cooldown(&self) -> Duration {
        Duration::from_millis(self.resume_cooldown_ms)
    }

    pub fn auto_rotate_interval(&self) -> Duration {
        Duration::from_millis(self.auto_rotate_interval_ms)
    }

    /// Upper bound on entries in the visible window.
    pub fn window_len(&self) -> usize {
        self.visible_radius * 2 + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_endpoints_are_fixed() {
        for easing in [
            Easing::Linear,
            Easing::EaseIn,
            Easing::EaseOut,
            Easing::EaseInOut,
        ] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
            assert_eq!(easing.apply(2.0), 1.0);
        }
        assert!(Easing::EaseOut.apply(0.5) > 0.5);
        assert!(Easing::EaseIn.apply(0.5) < 0.5);
        assert_eq!(Easing::EaseInOut.apply(0.5), 0.5);
    }

    #[test]
    fn defaults_match_reference_timings() {
        let cfg = CarouselConfig::default();
        assert_eq!(cfg.transition(), Duration::from_millis(500));
        assert_eq!(cfg.resume_cooldown(), Duration::from_secs(5));
        assert_eq!(cfg.auto_rotate_interval(), Duration::from_secs(4));
        assert_eq!(cfg.window_len(), 5);
    }
}
