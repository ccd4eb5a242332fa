use iced::widget::image::Handle;
use image::imageops::FilterType;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Default edge length of grid thumbnails (square bounding box)
pub const THUMBNAIL_SIZE: u32 = 256;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ThumbnailError {
    #[error("failed to decode {}: {reason}", path.display())]
    Decode { path: PathBuf, reason: String },

    #[error("item has no image source")]
    NoSource,

    #[error("thumbnail task failed: {0}")]
    Join(String),
}

/// Decoded RGBA pixels ready to hand to the renderer
#[derive(Debug, Clone, PartialEq)]
pub struct Thumbnail {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl Thumbnail {
    pub fn into_handle(self) -> Handle {
        Handle::from_rgba(self.width, self.height, self.pixels)
    }
}

/// Load a thumbnail for the grid.
/// Decoding is CPU-bound, so it runs on the blocking pool.
pub async fn load_thumbnail(path: PathBuf, size: u32) -> Result<Handle, ThumbnailError> {
    let thumbnail = tokio::task::spawn_blocking(move || decode_thumbnail(&path, size))
        .await
        .map_err(|e| ThumbnailError::Join(e.to_string()))??;

    Ok(thumbnail.into_handle())
}

/// Decode an image file and shrink it to fit in a `size` x `size` box,
/// keeping the aspect ratio
pub fn decode_thumbnail(path: &Path, size: u32) -> Result<Thumbnail, ThumbnailError> {
    let img = image::open(path).map_err(|e| {
        warn!("⚠️  Could not decode {}: {}", path.display(), e);
        ThumbnailError::Decode {
            path: path.to_path_buf(),
            reason: e.to_string(),
        }
    })?;

    // Small images are kept as they are
    let img = if img.width() > size || img.height() > size {
        img.resize(size, size, FilterType::Triangle)
    } else {
        img
    };

    let rgba = img.to_rgba8();
    debug!(
        "📸 Thumbnail {}x{} for {}",
        rgba.width(),
        rgba.height(),
        path.display()
    );

    Ok(Thumbnail {
        width: rgba.width(),
        height: rgba.height(),
        pixels: rgba.into_raw(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    #[test]
    fn test_large_image_is_shrunk_to_fit() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wide.png");
        RgbImage::from_pixel(800, 400, Rgb([200, 10, 10]))
            .save(&path)
            .unwrap();

        let thumb = decode_thumbnail(&path, 256).unwrap();
        assert_eq!(thumb.width, 256);
        assert_eq!(thumb.height, 128);
        assert_eq!(thumb.pixels.len(), (256 * 128 * 4) as usize);
    }

    #[test]
    fn test_small_image_is_kept() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("small.png");
        RgbImage::from_pixel(10, 20, Rgb([0, 0, 0]))
            .save(&path)
            .unwrap();

        let thumb = decode_thumbnail(&path, 256).unwrap();
        assert_eq!((thumb.width, thumb.height), (10, 20));
    }

    #[test]
    fn test_missing_file_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.jpg");
        let err = decode_thumbnail(&path, 256).unwrap_err();
        assert!(matches!(err, ThumbnailError::Decode { .. }));
    }

    #[test]
    fn test_garbage_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.jpg");
        std::fs::write(&path, b"not really a jpeg").unwrap();
        assert!(decode_thumbnail(&path, 256).is_err());
    }
}
