//! Tile scaling, tile-count and draw-offset arithmetic.
//!
//! # Layout
//! With `e` the tile extent along the scroll axis, `p` the pan distance
//! (in `(-e, 0]` between resets) and `W`/`H` the viewport size:
//! ```text
//!   lead tile          filler i (0-based)
//!   up    (0, p)           (0, (i+1)·e + p)
//!   down  (0, H − e − p)   (0, H − (i+2)·e − p)
//!   left  (p, 0)           ((i+1)·e + p, 0)
//!   right (W − e − p, 0)   (W − (i+2)·e − p, 0)
//! ```
//! `floor(V / e) + 1` fillers after the lead tile always reach past the far
//! edge of a viewport of extent `V`.

use glam::{UVec2, Vec2};

use crate::error::ScrollError;
use crate::orientation::ScrollOrientation;
use crate::params::Viewport;

/// Largest RGBA tile buffer, in bytes, that scaling may allocate.
pub const MAX_TILE_BYTES: u64 = if (isize::MAX as u64) < (1 << 32) {
    isize::MAX as u64
} else {
    1 << 32
};

/// Size of the tile produced from a `source`-sized image.
///
/// The cross-axis dimension is set to the viewport's; the scroll-axis
/// dimension keeps the aspect ratio, truncating toward zero.
pub fn scaled_tile_size(
    source: UVec2,
    viewport: Viewport,
    orientation: ScrollOrientation,
) -> Result<UVec2, ScrollError> {
    if source.x == 0 || source.y == 0 {
        return Err(ScrollError::invalid(format!(
            "source image must have non-zero dimensions, got {}x{}",
            source.x, source.y
        )));
    }
    viewport.validate()?;

    let cross = orientation.cross_extent(viewport.size());
    let (src_cross, src_scroll) = if orientation.is_vertical() {
        (source.x, source.y)
    } else {
        (source.y, source.x)
    };
    let scroll = u64::from(cross) * u64::from(src_scroll) / u64::from(src_cross);
    let scroll = u32::try_from(scroll)
        .map_err(|_| ScrollError::invalid(format!("scaled tile extent {scroll} overflows")))?;
    if scroll == 0 {
        return Err(ScrollError::invalid(format!(
            "{}x{} source collapses to a zero-length tile in a {}x{} viewport",
            source.x, source.y, viewport.width, viewport.height
        )));
    }

    let bytes = u64::from(cross) * u64::from(scroll) * 4;
    if bytes > MAX_TILE_BYTES {
        return Err(ScrollError::invalid(format!(
            "{}x{} source scales to a {bytes}-byte tile in a {}x{} viewport, limit is {}",
            source.x, source.y, viewport.width, viewport.height, MAX_TILE_BYTES
        )));
    }

    Ok(if orientation.is_vertical() {
        UVec2::new(cross, scroll)
    } else {
        UVec2::new(scroll, cross)
    })
}

/// Number of filler tiles drawn after the lead tile.
///
/// `tile_extent` must be non-zero; [`scaled_tile_size`] never produces a
/// zero extent.
pub fn tile_count(viewport_extent: u32, tile_extent: u32) -> usize {
    debug_assert!(tile_extent > 0);
    (viewport_extent / tile_extent) as usize + 1
}

/// Destination of the lead tile.
pub fn lead_offset(
    orientation: ScrollOrientation,
    viewport: Viewport,
    tile_extent: f32,
    pan: f32,
) -> Vec2 {
    axis_offset(orientation, viewport, tile_extent, pan, 0)
}

/// Destination of filler tile `index` (0-based).
pub fn filler_offset(
    orientation: ScrollOrientation,
    viewport: Viewport,
    tile_extent: f32,
    pan: f32,
    index: usize,
) -> Vec2 {
    axis_offset(orientation, viewport, tile_extent, pan, index + 1)
}

/// `slot` 0 is the lead tile, slot n the n-th tile behind it.
fn axis_offset(
    orientation: ScrollOrientation,
    viewport: Viewport,
    tile_extent: f32,
    pan: f32,
    slot: usize,
) -> Vec2 {
    let behind = slot as f32 * tile_extent;
    match orientation {
        ScrollOrientation::Up => Vec2::new(0.0, behind + pan),
        ScrollOrientation::Down => {
            Vec2::new(0.0, viewport.height as f32 - tile_extent - behind - pan)
        }
        ScrollOrientation::Left => Vec2::new(behind + pan, 0.0),
        ScrollOrientation::Right => {
            Vec2::new(viewport.width as f32 - tile_extent - behind - pan, 0.0)
        }
    }
}
