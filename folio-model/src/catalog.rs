//! Read-only, ordered project catalog shared by reference with the carousel.

use std::collections::HashSet;
use std::sync::Arc;

use crate::error::{ModelError, Result};
use crate::ids::ItemId;
use crate::item::CarouselItem;

/// Ordered, fixed-length list of carousel items.
///
/// Cloning is cheap: the items live behind an `Arc` and are never mutated
/// after construction.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Arc<[CarouselItem]>,
}

impl Catalog {
    /// Build a catalog, rejecting blank or duplicate ids and untitled items.
    /// An empty catalog is valid.
    pub fn new(items: Vec<CarouselItem>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            item.validate()?;
            if !seen.insert(item.id.as_str()) {
                return Err(ModelError::DuplicateId(item.id.clone()));
            }
        }
        Ok(Self {
            items: items.into(),
        })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[CarouselItem] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&CarouselItem> {
        self.items.get(index)
    }

    pub fn find(&self, id: &ItemId) -> Option<&CarouselItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    pub fn position(&self, id: &ItemId) -> Option<usize> {
        self.items.iter().position(|item| &item.id == id)
    }

    pub fn contains(&self, id: &ItemId) -> bool {
        self.position(id).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CarouselItem> {
        self.items.iter()
    }
}

#[cfg(feature = "serde")]
impl Catalog {
    /// Parse a catalog from a JSON array of items.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let items: Vec<CarouselItem> = serde_json::from_str(raw)?;
        Self::new(items)
    }

    pub fn from_json_file(path: &std::path::Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&*self.items)?)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CarouselItem;
    type IntoIter = std::slice::Iter<'a, CarouselItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
