//! Tag index and filtered views over the catalog
use super::data::{Catalog, ImageItem, ALL_TAG};

/// Every tag used in the catalog, with "All" always first.
/// Tags keep the order they were first seen in.
#[derive(Debug, Clone, PartialEq)]
pub struct TagSet {
    tags: Vec<String>,
}

impl TagSet {
    #[cfg(test)]
    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }
}

/// Union of all item tags plus the "All" sentinel
pub fn collect_tags(catalog: &Catalog) -> TagSet {
    let mut tags = vec![ALL_TAG.to_string()];
    for tag in catalog.items().iter().flat_map(|item| item.tags.iter()) {
        if !tags.contains(tag) {
            tags.push(tag.clone());
        }
    }
    TagSet { tags }
}

/// The subset of the catalog selected by one tag.
///
/// Stores catalog indices, so items are never copied and the order
/// is always the catalog order.
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredView {
    tag: String,
    indices: Vec<usize>,
}

impl FilteredView {
    /// The tag that produced this view
    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Map a position in the view to a position in the catalog
    pub fn catalog_index(&self, position: usize) -> Option<usize> {
        self.indices.get(position).copied()
    }

    pub fn catalog_indices(&self) -> &[usize] {
        &self.indices
    }

    /// The item at a position in the view
    pub fn item<'a>(&self, catalog: &'a Catalog, position: usize) -> Option<&'a ImageItem> {
        self.catalog_index(position).and_then(|i| catalog.get(i))
    }

    #[cfg(test)]
    pub fn items<'a>(&'a self, catalog: &'a Catalog) -> impl Iterator<Item = &'a ImageItem> + 'a {
        self.indices.iter().filter_map(move |&i| catalog.get(i))
    }
}

/// Select the items carrying `tag`, or everything for "All"
pub fn apply_filter(catalog: &Catalog, tag: &str) -> FilteredView {
    let indices = catalog
        .items()
        .iter()
        .enumerate()
        .filter(|(_, item)| tag == ALL_TAG || item.has_tag(tag))
        .map(|(i, _)| i)
        .collect();

    FilteredView {
        tag: tag.to_string(),
        indices,
    }
}
