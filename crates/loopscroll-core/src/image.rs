//! Bitmap representation for source images and scaled tiles.

use std::fmt;

use ::image::imageops::{self, FilterType};
use ::image::{Rgba, RgbaImage};
use glam::UVec2;
use serde::{Deserialize, Serialize};

use crate::error::ScrollError;
use crate::orientation::ScrollOrientation;
use crate::params::Viewport;
use crate::tiling;

/// Color precision of a source image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorDepth {
    /// 8 bits per channel with alpha.
    Argb8888,
    /// 5/6/5 bits for R/G/B, no alpha.
    Rgb565,
}

impl fmt::Display for ColorDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Argb8888 => write!(f, "ARGB 8888"),
            Self::Rgb565 => write!(f, "RGB 565"),
        }
    }
}

/// Caller-supplied image. Always stored as RGBA8; `depth` records whether
/// the channels have been quantized.
#[derive(Debug, Clone)]
pub struct SourceImage {
    buffer: RgbaImage,
    depth: ColorDepth,
}

impl SourceImage {
    pub fn new(buffer: RgbaImage) -> Self {
        Self {
            buffer,
            depth: ColorDepth::Argb8888,
        }
    }

    /// Wrap raw RGBA8 bytes. Fails if `pixels` does not hold exactly
    /// `width * height * 4` bytes.
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, ScrollError> {
        let len = pixels.len();
        let expected = width as u64 * height as u64 * 4;
        (len as u64 == expected)
            .then(|| RgbaImage::from_raw(width, height, pixels))
            .flatten()
            .map(Self::new)
            .ok_or_else(|| {
                ScrollError::invalid(format!(
                    "pixel buffer of {len} bytes does not match {width}x{height} RGBA"
                ))
            })
    }

    /// Single-color image, mostly useful for hosts that want a plain backdrop.
    pub fn solid(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        Self::new(RgbaImage::from_pixel(width, height, Rgba(rgba)))
    }

    pub fn width(&self) -> u32 {
        self.buffer.width()
    }

    pub fn height(&self) -> u32 {
        self.buffer.height()
    }

    pub fn size(&self) -> UVec2 {
        UVec2::new(self.width(), self.height())
    }

    pub fn depth(&self) -> ColorDepth {
        self.depth
    }

    pub fn buffer(&self) -> &RgbaImage {
        &self.buffer
    }

    /// True when either dimension is zero. Such images cannot be scaled.
    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Quantize to RGB565 and drop alpha. Already-reduced images are returned
    /// unchanged.
    pub fn into_rgb565(self) -> Self {
        if self.depth == ColorDepth::Rgb565 {
            return self;
        }
        let mut buffer = self.buffer;
        for px in buffer.pixels_mut() {
            let [r, g, b, _] = px.0;
            px.0 = [quantize(r, 5), quantize(g, 6), quantize(b, 5), u8::MAX];
        }
        Self {
            buffer,
            depth: ColorDepth::Rgb565,
        }
    }
}

/// Keep the top `bits` of `v` and replicate them into the low bits so that
/// full intensity stays at 255.
fn quantize(v: u8, bits: u32) -> u8 {
    let q = v >> (8 - bits);
    (q << (8 - bits)) | (q >> (2 * bits - 8))
}

/// A source image scaled to the viewport's cross-axis dimension.
#[derive(Debug, Clone)]
pub struct TileImage {
    buffer: RgbaImage,
}

impl TileImage {
    /// Scale `source` so that its cross-axis dimension matches the viewport,
    /// preserving aspect ratio. Uses bilinear filtering.
    pub fn scale_from(
        source: &SourceImage,
        viewport: Viewport,
        orientation: ScrollOrientation,
    ) -> Result<Self, ScrollError> {
        let size = tiling::scaled_tile_size(source.size(), viewport, orientation)?;
        let buffer = if size == source.size() {
            source.buffer.clone()
        } else {
            imageops::resize(&source.buffer, size.x, size.y, FilterType::Triangle)
        };
        tracing::debug!(
            "scaled {}x{} source to {}x{} tile ({orientation})",
            source.width(),
            source.height(),
            size.x,
            size.y
        );
        Ok(Self { buffer })
    }

    pub fn width(&self) -> u32 {
        self.buffer.width()
    }

    pub fn height(&self) -> u32 {
        self.buffer.height()
    }

    pub fn size(&self) -> UVec2 {
        UVec2::new(self.width(), self.height())
    }

    /// Tile length along the scroll axis.
    pub fn extent(&self, orientation: ScrollOrientation) -> u32 {
        orientation.scroll_extent(self.size())
    }

    pub fn buffer(&self) -> &RgbaImage {
        &self.buffer
    }
}
