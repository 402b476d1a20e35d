//! Loopscroll Core: domain layer for infinitely scrolling tiled backgrounds.
//!
//! This crate contains the tile scaling, tile-count and offset arithmetic,
//! tick scheduling and draw-command output. No windowing or framework
//! dependencies; hosts composite the draw commands themselves.

pub mod canvas;
pub mod color;
pub mod error;
pub mod image;
pub mod orientation;
pub mod params;
pub mod renderer;
pub mod schedule;
pub mod shared;
pub mod tiling;

// Re-exports for convenience.
pub use canvas::{Canvas, DrawCommand, DrawList};
pub use color::MaskColor;
pub use error::ScrollError;
pub use crate::image::{ColorDepth, SourceImage, TileImage};
pub use orientation::ScrollOrientation;
pub use params::{ScrollParams, SpeedPreset, Viewport};
pub use renderer::{RenderOutcome, ScrollingTileRenderer, TickOutcome};
pub use schedule::{DEFAULT_TICK_INTERVAL, TickToken};
pub use shared::SharedRenderer;
