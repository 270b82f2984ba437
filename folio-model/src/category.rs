use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Closed set of project categories. Used only for display labeling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Category {
    /// Graphic design work
    Design = 0,
    /// Data analysis work
    Data = 1,
    /// UI/UX design work
    Ui = 2,
    /// Web development work
    Web = 3,
}

/// Label table indexed by `Category as usize`.
const LABELS: [&str; 4] = [
    "Graphic Design",
    "Data Analysis",
    "UI/UX Design",
    "Web Development",
];

const TAGS: [&str; 4] = ["design", "data", "ui", "web"];

impl Category {
    pub const ALL: [Category; 4] =
        [Category::Design, Category::Data, Category::Ui, Category::Web];

    /// Human-readable label shown on cards and in the detail view.
    pub fn label(self) -> &'static str {
        LABELS[self as usize]
    }

    /// Lowercase tag used in catalog files.
    pub fn tag(self) -> &'static str {
        TAGS[self as usize]
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl Display for UnknownCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "unknown category `{}`", self.0)
    }
}

impl std::error::Error for UnknownCategory {}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_ascii_lowercase();
        Category::ALL
            .into_iter()
            .find(|category| category.tag() == tag)
            .ok_or(UnknownCategory(s.to_string()))
    }
}
