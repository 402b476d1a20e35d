//! Scroll direction and the axis helpers derived from it.

use std::fmt;
use std::str::FromStr;

use glam::UVec2;
use serde::{Deserialize, Serialize};

/// Direction in which tiles leave the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrollOrientation {
    /// Tiles move toward the top edge.
    #[default]
    Up,
    /// Tiles move toward the bottom edge.
    Down,
    /// Tiles move toward the left edge.
    Left,
    /// Tiles move toward the right edge.
    Right,
}

impl ScrollOrientation {
    /// The fixed cycle used by the orientation toggle: up → down → left → right → up.
    pub const fn next(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Left,
            Self::Left => Self::Right,
            Self::Right => Self::Up,
        }
    }

    /// Whether tiles translate along the y axis.
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::Up | Self::Down)
    }

    /// Component of `size` along the scroll axis.
    pub const fn scroll_extent(self, size: UVec2) -> u32 {
        if self.is_vertical() { size.y } else { size.x }
    }

    /// Component of `size` perpendicular to the scroll axis.
    pub const fn cross_extent(self, size: UVec2) -> u32 {
        if self.is_vertical() { size.x } else { size.y }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        }
    }

    pub fn all() -> &'static [Self] {
        const ALL: [ScrollOrientation; 4] = [
            ScrollOrientation::Up,
            ScrollOrientation::Down,
            ScrollOrientation::Left,
            ScrollOrientation::Right,
        ];
        &ALL
    }
}

impl fmt::Display for ScrollOrientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ScrollOrientation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|o| o.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!("unknown scroll orientation '{s}' (expected up, down, left or right)")
            })
    }
}
