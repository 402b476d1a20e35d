//! Software compositor that turns renderer draw calls into pixels.

use std::path::Path;

use glam::Vec2;
use image::{Pixel, Rgba, RgbaImage, imageops};
use loopscroll_core::{Canvas, MaskColor, TileImage, Viewport};

const BACKGROUND: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Viewport-sized RGBA surface.
pub struct Compositor {
    frame: RgbaImage,
}

impl Compositor {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            frame: RgbaImage::from_pixel(viewport.width, viewport.height, BACKGROUND),
        }
    }

    /// Reset to the background color before a new frame.
    pub fn clear(&mut self) {
        for px in self.frame.pixels_mut() {
            *px = BACKGROUND;
        }
    }

    pub fn frame(&self) -> &RgbaImage {
        &self.frame
    }

    pub fn save(&self, path: &Path) -> Result<(), image::ImageError> {
        self.frame.save(path)
    }
}

impl Canvas for Compositor {
    fn draw_tile(&mut self, tile: &TileImage, offset: Vec2) {
        // Offsets are whole pixels except for fractional speeds.
        let offset = offset.round();
        imageops::overlay(
            &mut self.frame,
            tile.buffer(),
            offset.x as i64,
            offset.y as i64,
        );
    }

    fn fill(&mut self, color: MaskColor) {
        let mask = Rgba(color.rgba());
        for px in self.frame.pixels_mut() {
            px.blend(&mask);
        }
    }
}
