use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::data::{Catalog, ImageItem};

/// Where the catalog lives, relative to the site root
pub const DEFAULT_CATALOG_PATH: &str = "data/images.json";

/// Errors that can occur while loading the catalog.
///
/// Kept `Clone` so it can travel inside UI messages.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read {}: {reason}", path.display())]
    Read { path: PathBuf, reason: String },

    #[error("failed to parse {}: {reason}", path.display())]
    Parse { path: PathBuf, reason: String },

    #[error("{} must hold an image array or an object with `items`", path.display())]
    Shape { path: PathBuf },
}

impl CatalogError {
    /// The single message shown to the user when loading fails
    pub fn user_message(&self) -> String {
        let path = match self {
            CatalogError::Read { path, .. }
            | CatalogError::Parse { path, .. }
            | CatalogError::Shape { path } => path,
        };
        format!(
            "Could not load images. Ensure that {} exists and contains a valid image list.",
            path.display()
        )
    }
}

/// Read and normalize the catalog document.
///
/// `root` is the site root that image sources are resolved against.
/// There is no retry: the caller shows an error and stops.
pub async fn load_catalog(root: PathBuf, path: PathBuf) -> Result<Catalog, CatalogError> {
    info!("📁 Loading catalog from {}", path.display());

    let bytes = tokio::fs::read(&path).await.map_err(|e| CatalogError::Read {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let catalog = parse_catalog(root, &path, &bytes)?;
    info!("✅ Catalog loaded with {} images", catalog.len());
    Ok(catalog)
}

/// Parse catalog bytes.
///
/// Accepts a top-level array, or an object with an `items` array.
/// An object without a usable `items` field is an empty catalog.
pub fn parse_catalog(root: PathBuf, path: &Path, bytes: &[u8]) -> Result<Catalog, CatalogError> {
    let document: Value = serde_json::from_slice(bytes).map_err(|e| CatalogError::Parse {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let entries = match document {
        Value::Array(entries) => entries,
        Value::Object(mut fields) => match fields.remove("items") {
            Some(Value::Array(entries)) => entries,
            _ => {
                debug!("catalog object has no `items` array, treating as empty");
                Vec::new()
            }
        },
        _ => {
            return Err(CatalogError::Shape {
                path: path.to_path_buf(),
            })
        }
    };

    let items = entries.into_iter().map(ImageItem::from_value).collect();
    Ok(Catalog::new(root, items))
}
