//! Draw surface abstraction and a recording implementation.
//!
//! The renderer only emits draw calls; compositing onto a real surface is the
//! host's job. [`DrawList`] records the calls so they can be inspected or
//! replayed later.

use glam::{UVec2, Vec2};
use serde::Serialize;

use crate::color::MaskColor;
use crate::image::TileImage;

/// Surface the renderer draws a frame onto.
pub trait Canvas {
    /// Draw `tile` with its top-left corner at `offset` (viewport pixels,
    /// may be negative or beyond the viewport).
    fn draw_tile(&mut self, tile: &TileImage, offset: Vec2);

    /// Composite `color` over the entire frame.
    fn fill(&mut self, color: MaskColor);
}

/// One recorded draw call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum DrawCommand {
    Tile { offset: Vec2, size: UVec2 },
    Overlay(MaskColor),
}

/// Canvas that records draw calls in order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Destinations of all tile draws, in draw order.
    pub fn tile_offsets(&self) -> Vec<Vec2> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Tile { offset, .. } => Some(*offset),
                DrawCommand::Overlay(_) => None,
            })
            .collect()
    }

    pub fn overlay(&self) -> Option<MaskColor> {
        self.commands.iter().find_map(|cmd| match cmd {
            DrawCommand::Overlay(color) => Some(*color),
            DrawCommand::Tile { .. } => None,
        })
    }
}

impl Canvas for DrawList {
    fn draw_tile(&mut self, tile: &TileImage, offset: Vec2) {
        self.commands.push(DrawCommand::Tile {
            offset,
            size: tile.size(),
        });
    }

    fn fill(&mut self, color: MaskColor) {
        self.commands.push(DrawCommand::Overlay(color));
    }
}
