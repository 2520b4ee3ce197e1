//! Feature tag taxonomy.
//!
//! Tags are grouped into named, colored categories. The taxonomy is an owned
//! value: update operations never mutate in place, they return the updated
//! taxonomy and leave the receiver untouched.

use serde::{Deserialize, Serialize};

use crate::error::{GalleryError, GalleryResult};

/// Badge color used for tags that no category declares
pub const FALLBACK_TAG_COLOR: &str = "#999999";

/// A named group of feature tags sharing a display color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureTagCategory {
    pub name: String,
    pub color: String,
    pub tags: Vec<String>,
}

impl FeatureTagCategory {
    pub fn new<I, S>(name: impl Into<String>, color: impl Into<String>, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            color: color.into(),
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Ordered list of tag categories.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagTaxonomy {
    categories: Vec<FeatureTagCategory>,
}

impl TagTaxonomy {
    pub fn new(categories: Vec<FeatureTagCategory>) -> Self {
        Self { categories }
    }

    pub fn categories(&self) -> &[FeatureTagCategory] {
        &self.categories
    }

    pub fn category(&self, name: &str) -> Option<&FeatureTagCategory> {
        self.categories.iter().find(|c| c.name == name)
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Every tag in declaration order. Tags repeated across categories appear
    /// once per category.
    pub fn all_tags(&self) -> Vec<&str> {
        self.categories
            .iter()
            .flat_map(|c| c.tags.iter().map(String::as_str))
            .collect()
    }

    pub fn contains_tag(&self, tag: &str) -> bool {
        self.categories.iter().any(|c| c.contains(tag))
    }

    /// First category declaring `tag`
    pub fn category_of(&self, tag: &str) -> Option<&FeatureTagCategory> {
        self.categories.iter().find(|c| c.contains(tag))
    }

    pub fn category_color(&self, name: &str) -> Option<&str> {
        self.category(name).map(|c| c.color.as_str())
    }

    /// Badge color for a tag: its category's color, or [`FALLBACK_TAG_COLOR`].
    pub fn color_for_tag(&self, tag: &str) -> &str {
        self.category_of(tag)
            .map(|c| c.color.as_str())
            .unwrap_or(FALLBACK_TAG_COLOR)
    }

    /// Returns a taxonomy with `category` appended.
    pub fn with_category(&self, category: FeatureTagCategory) -> GalleryResult<Self> {
        if self.category(&category.name).is_some() {
            return Err(GalleryError::DuplicateCategory(category.name));
        }
        let mut categories = self.categories.clone();
        categories.push(category);
        Ok(Self { categories })
    }

    /// Returns a taxonomy with `tag` appended to the named category.
    pub fn with_tag(&self, category: &str, tag: impl Into<String>) -> GalleryResult<Self> {
        let tag = tag.into();
        let existing = self
            .category(category)
            .ok_or_else(|| GalleryError::UnknownCategory(category.to_string()))?;
        if existing.contains(&tag) {
            return Err(GalleryError::DuplicateTag {
                category: category.to_string(),
                tag,
            });
        }

        Ok(self.map_category(category, |c| c.tags.push(tag.clone())))
    }

    /// Returns a taxonomy where `old` is renamed to `new` inside the named
    /// category. Renaming a tag that is absent leaves the tags unchanged.
    pub fn with_renamed_tag(
        &self,
        category: &str,
        old: &str,
        new: impl Into<String>,
    ) -> GalleryResult<Self> {
        let new = new.into();
        let existing = self
            .category(category)
            .ok_or_else(|| GalleryError::UnknownCategory(category.to_string()))?;
        if old != new && existing.contains(&new) {
            return Err(GalleryError::DuplicateTag {
                category: category.to_string(),
                tag: new,
            });
        }

        Ok(self.map_category(category, |c| {
            for tag in c.tags.iter_mut().filter(|t| t.as_str() == old) {
                *tag = new.clone();
            }
        }))
    }

    fn map_category(&self, name: &str, f: impl Fn(&mut FeatureTagCategory)) -> Self {
        let categories = self
            .categories
            .iter()
            .cloned()
            .map(|mut c| {
                if c.name == name {
                    f(&mut c);
                }
                c
            })
            .collect();
        Self { categories }
    }
}
