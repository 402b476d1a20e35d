//! Image loading for the demo application.

use std::path::Path;

use image::{Rgba, RgbaImage};
use loopscroll_core::SourceImage;

/// Load an image from disk as a scroll source.
///
/// Supports the formats enabled in the `image` crate (PNG, JPEG, ...).
/// Everything is converted to RGBA8.
pub fn load_source(path: &Path) -> Result<SourceImage, ImageLoadError> {
    let img = image::open(path).map_err(ImageLoadError::Decode)?;
    let rgba = img.to_rgba8();
    tracing::info!(
        "loaded {} ({}x{}, {:?})",
        path.display(),
        rgba.width(),
        rgba.height(),
        img.color()
    );
    Ok(SourceImage::new(rgba))
}

/// Diagonal stripe pattern used when no image path is given. Stripes make the
/// tile seams and scroll direction easy to see in the output.
pub fn stripes(width: u32, height: u32) -> SourceImage {
    const BAND: u32 = 24;
    let buffer = RgbaImage::from_fn(width, height, |x, y| {
        if ((x + y) / BAND) % 2 == 0 {
            Rgba([236, 112, 99, 255])
        } else {
            Rgba([52, 73, 94, 255])
        }
    });
    SourceImage::new(buffer)
}

/// Errors that can occur during image loading.
#[derive(Debug, thiserror::Error)]
pub enum ImageLoadError {
    #[error("failed to decode image: {0}")]
    Decode(image::ImageError),
}
