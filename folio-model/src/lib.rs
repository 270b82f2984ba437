//! Project catalog data model shared across Folio crates.
#![allow(missing_docs)]

pub mod catalog;
pub mod category;
pub mod error;
pub mod ids;
pub mod item;

pub use catalog::Catalog;
pub use category::{Category, UnknownCategory};
pub use error::{ModelError, Result as ModelResult};
pub use ids::ItemId;
pub use item::{CarouselItem, LinkKind, ProjectLinks};
