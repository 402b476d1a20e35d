//! Renderer parameters supplied by the host at configuration time.
//!
//! `ScrollParams` is the single bundle of host options (orientation, speed,
//! mask color, auto start). Every field has a default so partial JSON
//! documents deserialize cleanly.

use std::time::Duration;

use glam::UVec2;
use serde::{Deserialize, Serialize};

use crate::color::MaskColor;
use crate::error::ScrollError;
use crate::orientation::ScrollOrientation;
use crate::schedule::DEFAULT_TICK_INTERVAL;

/// Pan distance added per tick at speed 1.
pub const BASE_INCREMENT: f32 = 0.5;

/// Speeds outside this range still work but look either frozen or jittery.
pub const RECOMMENDED_SPEED: std::ops::RangeInclusive<f32> = 1.0..=50.0;

/// Viewport size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub const fn size(&self) -> UVec2 {
        UVec2::new(self.width, self.height)
    }

    /// Viewport extent along the scroll axis of `orientation`.
    pub const fn extent(&self, orientation: ScrollOrientation) -> u32 {
        orientation.scroll_extent(self.size())
    }

    pub fn validate(&self) -> Result<(), ScrollError> {
        if self.width == 0 || self.height == 0 {
            return Err(ScrollError::invalid(format!(
                "viewport must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }
}

/// Named speeds offered alongside free-form values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpeedPreset {
    Slow,
    Ordinary,
    Fast,
}

impl SpeedPreset {
    pub const fn speed(self) -> f32 {
        match self {
            Self::Slow => 1.0,
            Self::Ordinary => 3.0,
            Self::Fast => 10.0,
        }
    }
}

/// Host options for a [`ScrollingTileRenderer`](crate::ScrollingTileRenderer).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollParams {
    /// Scroll direction. Default: up.
    pub orientation: ScrollOrientation,
    /// Speed multiplier applied to [`BASE_INCREMENT`]. Default: 3.
    pub speed: f32,
    /// Overlay drawn above the tiles. Default: transparent (no overlay).
    pub mask_color: MaskColor,
    /// Start scrolling as soon as the renderer is configured. Default: true.
    pub auto_start: bool,
    /// Quantize sources to RGB565 before scaling to halve tile memory.
    /// Default: true.
    pub reduce_quality: bool,
    /// Delay the host should wait between a redraw and the next tick.
    pub tick_interval_ms: u64,
}

impl Default for ScrollParams {
    fn default() -> Self {
        Self {
            orientation: ScrollOrientation::Up,
            speed: SpeedPreset::Ordinary.speed(),
            mask_color: MaskColor::transparent(),
            auto_start: true,
            reduce_quality: true,
            tick_interval_ms: DEFAULT_TICK_INTERVAL.as_millis() as u64,
        }
    }
}

impl ScrollParams {
    pub fn with_preset(mut self, preset: SpeedPreset) -> Self {
        self.speed = preset.speed();
        self
    }

    /// Pan distance removed per tick.
    pub fn increment(&self) -> f32 {
        BASE_INCREMENT * self.speed
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Reject values the tick arithmetic cannot use.
    pub fn validate(&self) -> Result<(), ScrollError> {
        if !self.speed.is_finite() || self.speed <= 0.0 {
            return Err(ScrollError::invalid(format!(
                "speed must be a positive number, got {}",
                self.speed
            )));
        }
        if !RECOMMENDED_SPEED.contains(&self.speed) {
            tracing::warn!(
                "speed {} is outside the recommended range {:?}",
                self.speed,
                RECOMMENDED_SPEED
            );
        }
        Ok(())
    }

    /// Parse a (possibly partial) JSON parameter document.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
