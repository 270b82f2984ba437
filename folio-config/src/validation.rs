//! Guard rails for carousel settings.

use thiserror::Error;

use crate::models::{CarouselConfig, GeometryConfig};

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{field} must be greater than zero")]
    ZeroDuration { field: &'static str },

    #[error(
        "auto_rotate_interval_ms ({interval_ms}) must exceed transition_ms ({transition_ms})"
    )]
    IntervalShorterThanTransition { interval_ms: u64, transition_ms: u64 },

    #[error("geometry.{field} must be a finite number, got {value}")]
    NonFinite { field: &'static str, value: f32 },

    #[error("geometry.{field} must be within {min}..={max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },

    #[error(
        "geometry.{field} reaches its floor within visible_radius {radius}; side cards would stop receding"
    )]
    FloorWithinRadius { field: &'static str, radius: usize },
}

impl CarouselConfig {
    /// Reject settings the engine cannot honour.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("transition_ms", self.transition_ms),
            ("resume_cooldown_ms", self.resume_cooldown_ms),
            ("auto_rotate_interval_ms", self.auto_rotate_interval_ms),
        ] {
            if value == 0 {
                return Err(ConfigError::ZeroDuration { field });
            }
        }

        if self.auto_rotate_interval_ms <= self.transition_ms {
            return Err(ConfigError::IntervalShorterThanTransition {
                interval_ms: self.auto_rotate_interval_ms,
                transition_ms: self.transition_ms,
            });
        }

        self.geometry.validate()?;
        self.geometry.check_falloff(self.visible_radius)
    }
}

impl GeometryConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("card_width", self.card_width),
            ("card_depth", self.card_depth),
            ("center_scale", self.center_scale),
            ("scale_step", self.scale_step),
            ("min_scale", self.min_scale),
            ("side_opacity", self.side_opacity),
            ("opacity_step", self.opacity_step),
            ("opacity_floor", self.opacity_floor),
            ("tilt_deg", self.tilt_deg),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field, value });
            }
        }

        check_range("card_width", self.card_width, 0.0, f32::MAX)?;
        check_range("card_depth", self.card_depth, 0.0, f32::MAX)?;
        check_range("scale_step", self.scale_step, f32::EPSILON, 1.0)?;
        check_range("opacity_step", self.opacity_step, f32::EPSILON, 1.0)?;
        check_range("side_opacity", self.side_opacity, 0.0, 1.0)?;
        // Floors must be strictly positive so in-radius cards stay visible.
        check_range("opacity_floor", self.opacity_floor, f32::EPSILON, self.side_opacity)?;
        check_range("min_scale", self.min_scale, f32::EPSILON, 1.0)?;
        check_range("center_scale", self.center_scale, 1.0, f32::MAX)?;
        Ok(())
    }
}

impl GeometryConfig {
    /// Scale and opacity must still be above their floors at the outermost
    /// visible distance, so every in-radius step is strictly smaller.
    pub fn check_falloff(&self, radius: usize) -> Result<(), ConfigError> {
        if radius == 0 {
            return Ok(());
        }
        let outermost = radius as f32;
        if 1.0 - self.scale_step * outermost <= self.min_scale {
            return Err(ConfigError::FloorWithinRadius {
                field: "min_scale",
                radius,
            });
        }
        if self.side_opacity - self.opacity_step * outermost
            <= self.opacity_floor
        {
            return Err(ConfigError::FloorWithinRadius {
                field: "opacity_floor",
                radius,
            });
        }
        Ok(())
    }
}

fn check_range(
    field: &'static str,
    value: f32,
    min: f32,
    max: f32,
) -> Result<(), ConfigError> {
    if value < min || value > max {
        return Err(ConfigError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}
