//! Shared data structures for the application state
//!
//! These structs represent the data model that flows between
//! the catalog loader and the UI layer.
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::path::PathBuf;

/// Sentinel tag that selects every item
pub const ALL_TAG: &str = "All";

/// Tag that makes an item eligible for the lookbook
pub const LOOKBOOK_TAG: &str = "Lookbook";

/// Represents a single image in the catalog
///
/// Every field is optional in the source document. Missing or mistyped
/// values fall back to empty defaults instead of failing the whole load.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ImageItem {
    /// Image source, relative to the site root (e.g., "images/dune.jpg")
    #[serde(default, deserialize_with = "lenient_string")]
    pub src: String,
    /// Alternative text shown when the image cannot be displayed
    #[serde(default, deserialize_with = "lenient_string")]
    pub alt: String,
    /// Caption
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,
    /// Tags in first-seen order, without duplicates
    #[serde(default, deserialize_with = "lenient_tags")]
    pub tags: Vec<String>,
    /// Only the JSON literal `true` marks an item as featured
    #[serde(default, deserialize_with = "strict_true")]
    pub featured: bool,
}

impl ImageItem {
    /// Check whether this item carries the given tag
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Featured items and items tagged "Lookbook" become slides
    pub fn is_lookbook_candidate(&self) -> bool {
        self.featured || self.has_tag(LOOKBOOK_TAG)
    }

    /// Build an item from an arbitrary JSON value.
    /// Anything that is not an object yields an all-default item.
    pub fn from_value(value: Value) -> Self {
        serde_json::from_value(value).unwrap_or_default()
    }
}

/// The ordered list of images for one run, plus the directory
/// that relative sources are resolved against
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    root: PathBuf,
    items: Vec<ImageItem>,
}

impl Catalog {
    pub fn new(root: impl Into<PathBuf>, items: Vec<ImageItem>) -> Self {
        Self {
            root: root.into(),
            items,
        }
    }

    pub fn items(&self) -> &[ImageItem] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&ImageItem> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[cfg(test)]
    pub fn root(&self) -> &std::path::Path {
        &self.root
    }

    /// Resolve an item's source against the site root.
    ///
    /// Sources are site-relative like on the web: a leading "/" or "./"
    /// still points inside the root. Returns None for an empty source.
    pub fn resolve(&self, item: &ImageItem) -> Option<PathBuf> {
        let src = item.src.trim();
        let relative = src.trim_start_matches("./").trim_start_matches('/');
        if relative.is_empty() {
            return None;
        }
        Some(self.root.join(relative))
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        _ => String::new(),
    })
}

fn lenient_tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let mut tags: Vec<String> = Vec::new();
    if let Value::Array(values) = Value::deserialize(deserializer)? {
        for value in values {
            if let Value::String(tag) = value {
                if !tags.contains(&tag) {
                    tags.push(tag);
                }
            }
        }
    }
    Ok(tags)
}

fn strict_true<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(matches!(Value::deserialize(deserializer)?, Value::Bool(true)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_fields_default_to_empty() {
        let item = ImageItem::from_value(json!({ "src": "a.jpg" }));
        assert_eq!(item.src, "a.jpg");
        assert_eq!(item.alt, "");
        assert_eq!(item.title, "");
        assert!(item.tags.is_empty());
        assert!(!item.featured);
    }

    #[test]
    fn test_mistyped_fields_fall_back() {
        let item = ImageItem::from_value(json!({
            "src": 42,
            "title": null,
            "tags": ["A", 7, "B", "A"],
            "featured": "true"
        }));
        assert_eq!(item.src, "");
        assert_eq!(item.title, "");
        assert_eq!(item.tags, vec!["A".to_string(), "B".to_string()]);
        assert!(!item.featured);
    }

    #[test]
    fn test_non_object_entry_is_default() {
        assert_eq!(ImageItem::from_value(json!("nope")), ImageItem::default());
        assert_eq!(ImageItem::from_value(json!(null)), ImageItem::default());
    }

    #[test]
    fn test_lookbook_candidate() {
        let featured = ImageItem::from_value(json!({ "featured": true }));
        let tagged = ImageItem::from_value(json!({ "tags": ["Lookbook"] }));
        let plain = ImageItem::from_value(json!({ "tags": ["Street"] }));
        assert!(featured.is_lookbook_candidate());
        assert!(tagged.is_lookbook_candidate());
        assert!(!plain.is_lookbook_candidate());
    }

    #[test]
    fn test_resolve_is_site_relative() {
        let catalog = Catalog::new("/srv/site", Vec::new());
        let item = |src: &str| ImageItem {
            src: src.to_string(),
            ..ImageItem::default()
        };

        assert_eq!(
            catalog.resolve(&item("images/a.jpg")),
            Some(PathBuf::from("/srv/site/images/a.jpg"))
        );
        assert_eq!(
            catalog.resolve(&item("/images/a.jpg")),
            Some(PathBuf::from("/srv/site/images/a.jpg"))
        );
        assert_eq!(
            catalog.resolve(&item("./images/a.jpg")),
            Some(PathBuf::from("/srv/site/images/a.jpg"))
        );
        assert_eq!(catalog.resolve(&item("  ")), None);
    }
}
