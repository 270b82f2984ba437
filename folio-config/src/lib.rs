//! Shared configuration library for Folio.
//!
//! Centralizes the carousel timing and geometry defaults, config loading from
//! the environment or files, and the guard rails that reject settings the
//! engine cannot honour.

pub mod loader;
pub mod models;
pub mod validation;

pub use loader::{ConfigLoad, ConfigLoader, ConfigSource};
pub use models::{CarouselConfig, Easing, GeometryConfig};
pub use validation::ConfigError;
