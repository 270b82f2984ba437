//! Catalog items and their optional external links.

use url::Url;

use crate::category::Category;
use crate::error::{ModelError, Result};
use crate::ids::ItemId;

/// Kinds of external links an item may carry, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkKind {
    /// Source repository (GitHub)
    Repository,
    /// Showcase page (Behance)
    Showcase,
    /// Design tool file (Figma)
    DesignTool,
    /// Live deployment
    Live,
}

impl LinkKind {
    pub const ALL: [LinkKind; 4] = [
        LinkKind::Repository,
        LinkKind::Showcase,
        LinkKind::DesignTool,
        LinkKind::Live,
    ];

    pub fn label(self) -> &'static str {
        match self {
            LinkKind::Repository => "View on GitHub",
            LinkKind::Showcase => "View on Behance",
            LinkKind::DesignTool => "View on Figma",
            LinkKind::Live => "Visit Project",
        }
    }

    fn field(self) -> &'static str {
        match self {
            LinkKind::Repository => "github",
            LinkKind::Showcase => "behance",
            LinkKind::DesignTool => "figma",
            LinkKind::Live => "link",
        }
    }
}

/// Optional external links. Zero or more may be present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProjectLinks {
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub github: Option<Url>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub behance: Option<Url>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub figma: Option<Url>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub link: Option<Url>,
}

impl ProjectLinks {
    pub fn get(&self, kind: LinkKind) -> Option<&Url> {
        match kind {
            LinkKind::Repository => self.github.as_ref(),
            LinkKind::Showcase => self.behance.as_ref(),
            LinkKind::DesignTool => self.figma.as_ref(),
            LinkKind::Live => self.link.as_ref(),
        }
    }

    fn slot_mut(&mut self, kind: LinkKind) -> &mut Option<Url> {
        match kind {
            LinkKind::Repository => &mut self.github,
            LinkKind::Showcase => &mut self.behance,
            LinkKind::DesignTool => &mut self.figma,
            LinkKind::Live => &mut self.link,
        }
    }

    pub fn is_empty(&self) -> bool {
        LinkKind::ALL.iter().all(|kind| self.get(*kind).is_none())
    }
}

/// A single project shown by the carousel. Read-only once in a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarouselItem {
    pub id: ItemId,
    pub title: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    /// Image reference (path or URL) rendered on the card.
    #[cfg_attr(feature = "serde", serde(default))]
    pub image: String,
    pub category: Category,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub links: ProjectLinks,
}

impl CarouselItem {
    pub fn new(
        id: impl Into<ItemId>,
        title: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            image: String::new(),
            category,
            links: ProjectLinks::default(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Attach an external link, parsing it as an absolute URL.
    pub fn with_link(mut self, kind: LinkKind, raw: &str) -> Result<Self> {
        let url = Url::parse(raw.trim()).map_err(|source| {
            ModelError::InvalidLink {
                id: self.id.clone(),
                field: kind.field(),
                source,
            }
        })?;
        *self.links.slot_mut(kind) = Some(url);
        Ok(self)
    }

    /// Present links in display order.
    pub fn links(&self) -> impl Iterator<Item = (LinkKind, &Url)> + '_ {
        LinkKind::ALL
            .into_iter()
            .filter_map(|kind| self.links.get(kind).map(|url| (kind, url)))
    }

    /// The image reference, or a sized placeholder when none is set.
    pub fn image_or_placeholder(&self, width: u32, height: u32) -> String {
        if self.image.trim().is_empty() {
            format!("/api/placeholder/{width}/{height}")
        } else {
            self.image.clone()
        }
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.id.is_blank() {
            return Err(ModelError::EmptyId);
        }
        if self.title.trim().is_empty() {
            return Err(ModelError::MissingField {
                id: self.id.clone(),
                field: "title",
            });
        }
        Ok(())
    }
}
