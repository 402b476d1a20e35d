//! The infinite-scroll renderer.
//!
//! # Animation model
//! ```text
//!   start_scroll ──→ [token pending] ──tick──→ pan −= 0.5·speed ──→ [redraw requested]
//!                          ↑                                               │
//!                          └────────── render_frame schedules next ────────┘
//! ```
//! Ticks and redraws alternate strictly. Operations that rebuild the tile
//! (configure, replace_source, resize, cycle_orientation) stop scrolling
//! around the swap so no tick observes half-updated state.

use tracing::{debug, info, trace};

use crate::canvas::Canvas;
use crate::error::ScrollError;
use crate::image::{ColorDepth, SourceImage, TileImage};
use crate::orientation::ScrollOrientation;
use crate::params::{ScrollParams, Viewport};
use crate::schedule::{TickScheduler, TickToken};
use crate::tiling;

/// Result of delivering a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The pan distance moved and a redraw was requested.
    Advanced,
    /// The token was cancelled or already consumed; nothing changed.
    Stale,
}

/// Result of drawing one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    /// No tile exists yet; nothing was drawn.
    Skipped,
    Drawn {
        /// Tile draws issued (lead plus fillers).
        tiles: usize,
        /// Whether the mask overlay was composited.
        overlay: bool,
        /// Tick the host should deliver after the tick interval, if scrolling.
        next_tick: Option<TickToken>,
    },
}

/// Scales a source image into a tile, tiles it across a viewport and scrolls
/// it one step per tick.
#[derive(Debug, Default)]
pub struct ScrollingTileRenderer {
    params: ScrollParams,
    viewport: Option<Viewport>,
    source: Option<SourceImage>,
    tile: Option<TileImage>,
    tile_count: usize,
    pan_distance: f32,
    scrolling: bool,
    redraw_requested: bool,
    scheduler: TickScheduler,
}

impl ScrollingTileRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a source image, viewport and parameters.
    ///
    /// Scales the source into a new tile, recomputes the tile count, resets
    /// the pan distance and starts scrolling when `params.auto_start` is set.
    /// On error nothing changes.
    pub fn configure(
        &mut self,
        source: SourceImage,
        viewport: Viewport,
        params: ScrollParams,
    ) -> Result<(), ScrollError> {
        params.validate()?;
        viewport.validate()?;
        let source = prepare_source(source, params.reduce_quality)?;
        let (tile, tile_count) = derive_tile(&source, viewport, params.orientation)?;

        self.stop_scroll();
        info!(
            "configured {}x{} viewport: {}x{} tile x{} ({}, speed {})",
            viewport.width,
            viewport.height,
            tile.width(),
            tile.height(),
            tile_count,
            params.orientation,
            params.speed
        );
        let auto_start = params.auto_start;
        self.params = params;
        self.viewport = Some(viewport);
        self.source = Some(source);
        self.tile = Some(tile);
        self.tile_count = tile_count;
        self.pan_distance = 0.0;
        self.redraw_requested = true;
        if auto_start {
            self.start_scroll();
        }
        Ok(())
    }

    /// Swap in a new source image for the current viewport.
    ///
    /// Scrolling is halted for the swap and resumed afterwards if it was
    /// running. With `preserve_scroll_state` the pan distance carries over,
    /// wrapped into `(-e, 0]` for the new tile extent `e`; otherwise it
    /// restarts at zero.
    pub fn replace_source(
        &mut self,
        source: SourceImage,
        preserve_scroll_state: bool,
    ) -> Result<(), ScrollError> {
        let viewport = self.viewport.ok_or(ScrollError::NotConfigured)?;
        let source = prepare_source(source, self.params.reduce_quality)?;
        let (tile, tile_count) = derive_tile(&source, viewport, self.params.orientation)?;
        let extent = tile.extent(self.params.orientation) as f32;

        let was_scrolling = self.scrolling;
        self.stop_scroll();
        debug!(
            "replacing source with {}x{} image ({})",
            source.width(),
            source.height(),
            source.depth()
        );
        self.source = Some(source);
        self.tile = Some(tile);
        self.tile_count = tile_count;
        self.pan_distance = if preserve_scroll_state {
            wrap_pan(self.pan_distance, extent)
        } else {
            0.0
        };
        self.redraw_requested = true;
        if was_scrolling {
            self.start_scroll();
        }
        Ok(())
    }

    /// React to a host viewport change. The pan distance restarts at zero.
    pub fn resize(&mut self, viewport: Viewport) -> Result<(), ScrollError> {
        viewport.validate()?;
        let source = self.source.as_ref().ok_or(ScrollError::NotConfigured)?;
        if self.viewport == Some(viewport) {
            return Ok(());
        }
        let (tile, tile_count) = derive_tile(source, viewport, self.params.orientation)?;

        let was_scrolling = self.scrolling;
        self.stop_scroll();
        debug!("resized viewport to {}x{}", viewport.width, viewport.height);
        self.viewport = Some(viewport);
        self.tile = Some(tile);
        self.tile_count = tile_count;
        self.pan_distance = 0.0;
        self.redraw_requested = true;
        if was_scrolling {
            self.start_scroll();
        }
        Ok(())
    }

    /// Begin scrolling. No-op when already scrolling or before a tile exists.
    pub fn start_scroll(&mut self) {
        if self.scrolling || self.tile.is_none() {
            return;
        }
        self.scrolling = true;
        let token = self.scheduler.schedule();
        trace!("scroll started, first tick {token:?}");
    }

    /// Stop scrolling and cancel the pending tick. No-op when not scrolling.
    pub fn stop_scroll(&mut self) {
        if !self.scrolling {
            return;
        }
        self.scrolling = false;
        self.scheduler.cancel();
        trace!("scroll stopped");
    }

    /// Start when stopped, stop when scrolling.
    pub fn toggle_scroll(&mut self) {
        if self.scrolling {
            self.stop_scroll();
        } else {
            self.start_scroll();
        }
    }

    /// Advance to the next orientation in the up → down → left → right cycle.
    ///
    /// The pan distance restarts at zero and the tile is rescaled against
    /// the other viewport dimension. Fails, changing nothing, if the source
    /// cannot be scaled for the new axis.
    pub fn cycle_orientation(&mut self) -> Result<ScrollOrientation, ScrollError> {
        let next = self.params.orientation.next();
        let rebuilt = match (&self.source, self.viewport) {
            (Some(source), Some(viewport)) => Some(derive_tile(source, viewport, next)?),
            _ => None,
        };

        let was_scrolling = self.scrolling;
        self.stop_scroll();
        debug!("orientation {} -> {next}", self.params.orientation);
        self.params.orientation = next;
        self.pan_distance = 0.0;
        if let Some((tile, tile_count)) = rebuilt {
            self.tile = Some(tile);
            self.tile_count = tile_count;
            self.redraw_requested = true;
        }
        if was_scrolling {
            self.start_scroll();
        }
        Ok(next)
    }

    /// Deliver a scheduled tick.
    ///
    /// Resets the pan distance once the lead tile has fully left the
    /// viewport, then moves it by one increment and requests a redraw.
    pub fn tick(&mut self, token: TickToken) -> TickOutcome {
        if !self.scheduler.take(token) {
            trace!("ignoring stale tick {token:?}");
            return TickOutcome::Stale;
        }
        let Some(tile) = &self.tile else {
            return TickOutcome::Stale;
        };
        let extent = tile.extent(self.params.orientation) as f32;
        if extent + self.pan_distance <= 0.0 {
            self.pan_distance = 0.0;
        }
        self.pan_distance -= self.params.increment();
        self.redraw_requested = true;
        TickOutcome::Advanced
    }

    /// Deliver whichever tick is pending, if any.
    pub fn tick_pending(&mut self) -> TickOutcome {
        match self.scheduler.pending() {
            Some(token) => self.tick(token),
            None => TickOutcome::Stale,
        }
    }

    /// Draw the current frame onto `canvas` and schedule the next tick while
    /// scrolling.
    pub fn render_frame(&mut self, canvas: &mut impl Canvas) -> RenderOutcome {
        let (Some(tile), Some(viewport)) = (&self.tile, self.viewport) else {
            return RenderOutcome::Skipped;
        };
        self.redraw_requested = false;

        let orientation = self.params.orientation;
        let extent = tile.extent(orientation) as f32;
        let pan = self.pan_distance;
        let mut tiles = 0;

        // Lead tile still (partly) on screen.
        if extent + pan != 0.0 {
            canvas.draw_tile(tile, tiling::lead_offset(orientation, viewport, extent, pan));
            tiles += 1;
        }
        // Gap behind the lead tile.
        if extent + pan < viewport.extent(orientation) as f32 {
            for i in 0..self.tile_count {
                canvas.draw_tile(
                    tile,
                    tiling::filler_offset(orientation, viewport, extent, pan, i),
                );
            }
            tiles += self.tile_count;
        }

        let overlay = !self.params.mask_color.is_transparent();
        if overlay {
            canvas.fill(self.params.mask_color);
        }

        let next_tick = self.scrolling.then(|| self.scheduler.schedule());
        RenderOutcome::Drawn {
            tiles,
            overlay,
            next_tick,
        }
    }

    pub fn params(&self) -> &ScrollParams {
        &self.params
    }

    pub fn orientation(&self) -> ScrollOrientation {
        self.params.orientation
    }

    pub fn viewport(&self) -> Option<Viewport> {
        self.viewport
    }

    pub fn tile(&self) -> Option<&TileImage> {
        self.tile.as_ref()
    }

    pub fn tile_count(&self) -> usize {
        self.tile_count
    }

    pub fn pan_distance(&self) -> f32 {
        self.pan_distance
    }

    pub fn is_scrolling(&self) -> bool {
        self.scrolling
    }

    pub fn pending_tick(&self) -> Option<TickToken> {
        self.scheduler.pending()
    }

    /// Set by ticks and tile rebuilds, cleared by [`Self::render_frame`].
    pub fn redraw_requested(&self) -> bool {
        self.redraw_requested
    }
}

fn prepare_source(source: SourceImage, reduce_quality: bool) -> Result<SourceImage, ScrollError> {
    if source.is_empty() {
        return Err(ScrollError::invalid(format!(
            "source image must have non-zero dimensions, got {}x{}",
            source.width(),
            source.height()
        )));
    }
    if reduce_quality && source.depth() != ColorDepth::Rgb565 {
        return Ok(source.into_rgb565());
    }
    Ok(source)
}

/// Fold `pan` into `(-extent, 0]`. `extent` is positive.
fn wrap_pan(pan: f32, extent: f32) -> f32 {
    let wrapped = pan % extent;
    // `%` keeps the sign of `pan`.
    if wrapped > 0.0 {
        wrapped - extent
    } else if wrapped == 0.0 {
        0.0
    } else {
        wrapped
    }
}

fn derive_tile(
    source: &SourceImage,
    viewport: Viewport,
    orientation: ScrollOrientation,
) -> Result<(TileImage, usize), ScrollError> {
    let tile = TileImage::scale_from(source, viewport, orientation)?;
    let count = tiling::tile_count(viewport.extent(orientation), tile.extent(orientation));
    Ok((tile, count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{DrawCommand, DrawList};
    use crate::color::MaskColor;

    const EPSILON: f32 = 1e-4;

    fn params(orientation: ScrollOrientation, speed: f32) -> ScrollParams {
        ScrollParams {
            orientation,
            speed,
            ..Default::default()
        }
    }

    fn configured(orientation: ScrollOrientation, auto_start: bool) -> ScrollingTileRenderer {
        let mut renderer = ScrollingTileRenderer::new();
        renderer
            .configure(
                SourceImage::solid(20, 10, [10, 20, 30, 255]),
                Viewport::new(40, 50),
                ScrollParams {
                    auto_start,
                    ..params(orientation, 2.0)
                },
            )
            .expect("configure");
        renderer
    }

    #[test]
    fn test_render_before_configure_is_skipped() {
        let mut renderer = ScrollingTileRenderer::new();
        let mut canvas = DrawList::new();
        assert_eq!(renderer.render_frame(&mut canvas), RenderOutcome::Skipped);
        assert!(canvas.is_empty());
    }

    #[test]
    fn test_configure_derives_tile_and_count() {
        let renderer = configured(ScrollOrientation::Up, false);
        // 20x10 → width 40, height 20; floor(50/20)+1 = 3
        let tile = renderer.tile().expect("tile");
        assert_eq!((tile.width(), tile.height()), (40, 20));
        assert_eq!(renderer.tile_count(), 3);
        assert!(!renderer.is_scrolling());
        assert_eq!(renderer.pending_tick(), None);
    }

    #[test]
    fn test_configure_rejects_bad_input_without_changes() {
        let mut renderer = configured(ScrollOrientation::Up, true);
        let before = renderer.pending_tick();

        let err = renderer.configure(
            SourceImage::solid(20, 10, [0; 4]),
            Viewport::new(0, 50),
            ScrollParams::default(),
        );
        assert!(matches!(err, Err(ScrollError::InvalidInput(_))));
        let err = renderer.configure(
            SourceImage::solid(0, 10, [0; 4]),
            Viewport::new(40, 50),
            ScrollParams::default(),
        );
        assert!(matches!(err, Err(ScrollError::InvalidInput(_))));
        let err = renderer.configure(
            SourceImage::solid(20, 10, [0; 4]),
            Viewport::new(40, 50),
            params(ScrollOrientation::Up, 0.0),
        );
        assert!(matches!(err, Err(ScrollError::InvalidInput(_))));

        assert!(renderer.is_scrolling());
        assert_eq!(renderer.pending_tick(), before);
        assert_eq!(renderer.tile_count(), 3);
    }

    #[test]
    fn test_start_stop_are_idempotent() {
        let mut once = configured(ScrollOrientation::Up, false);
        let mut twice = configured(ScrollOrientation::Up, false);
        once.start_scroll();
        twice.start_scroll();
        twice.start_scroll();
        assert_eq!(once.pending_tick(), twice.pending_tick());
        assert_eq!(once.is_scrolling(), twice.is_scrolling());

        once.stop_scroll();
        twice.stop_scroll();
        twice.stop_scroll();
        assert_eq!(once.pending_tick(), None);
        assert_eq!(twice.pending_tick(), None);
        assert!(!twice.is_scrolling());
    }

    #[test]
    fn test_start_without_tile_is_noop() {
        let mut renderer = ScrollingTileRenderer::new();
        renderer.start_scroll();
        assert!(!renderer.is_scrolling());
        assert_eq!(renderer.pending_tick(), None);
    }

    #[test]
    fn test_stop_cancels_pending_tick() {
        let mut renderer = configured(ScrollOrientation::Up, true);
        let token = renderer.pending_tick().expect("first tick scheduled");
        renderer.stop_scroll();
        assert_eq!(renderer.tick(token), TickOutcome::Stale);
        assert!(renderer.pan_distance().abs() < EPSILON);

        // Restarting must not revive the cancelled token.
        renderer.start_scroll();
        assert_eq!(renderer.tick(token), TickOutcome::Stale);
        let fresh = renderer.pending_tick().expect("fresh tick");
        assert_eq!(renderer.tick(fresh), TickOutcome::Advanced);
    }

    #[test]
    fn test_ticks_and_redraws_alternate() {
        let mut renderer = configured(ScrollOrientation::Up, true);
        let token = renderer.pending_tick().expect("scheduled");
        assert_eq!(renderer.tick(token), TickOutcome::Advanced);
        assert!(renderer.redraw_requested());
        // No second tick until a frame is rendered.
        assert_eq!(renderer.tick_pending(), TickOutcome::Stale);
        assert!((renderer.pan_distance() + 1.0).abs() < EPSILON);

        let mut canvas = DrawList::new();
        let RenderOutcome::Drawn { next_tick, .. } = renderer.render_frame(&mut canvas) else {
            panic!("frame should draw");
        };
        assert!(!renderer.redraw_requested());
        assert_eq!(next_tick, renderer.pending_tick());
        assert!(next_tick.is_some());
    }

    #[test]
    fn test_stopped_render_schedules_nothing() {
        let mut renderer = configured(ScrollOrientation::Left, false);
        let mut canvas = DrawList::new();
        let outcome = renderer.render_frame(&mut canvas);
        assert!(matches!(outcome, RenderOutcome::Drawn { next_tick: None, .. }));
        assert_eq!(renderer.pending_tick(), None);
    }

    #[test]
    fn test_lead_tile_skipped_when_exactly_exited() {
        // 20x10 source, viewport 40x50 → tile 40x20, increment 1.0.
        let mut renderer = configured(ScrollOrientation::Up, true);
        let mut canvas = DrawList::new();
        for _ in 0..20 {
            renderer.tick_pending();
            canvas.clear();
            renderer.render_frame(&mut canvas);
        }
        assert!((renderer.pan_distance() + 20.0).abs() < EPSILON);
        // Lead tile gone: only the three fillers.
        assert_eq!(canvas.tile_offsets().len(), 3);
        assert!((canvas.tile_offsets()[0].y - 0.0).abs() < EPSILON);

        renderer.tick_pending();
        assert!((renderer.pan_distance() + 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_overlay_drawn_last_when_opaque_enough() {
        let mut renderer = ScrollingTileRenderer::new();
        let mask = MaskColor::from_argb(0x6600_0000);
        renderer
            .configure(
                SourceImage::solid(10, 10, [255; 4]),
                Viewport::new(10, 25),
                ScrollParams {
                    mask_color: mask,
                    ..Default::default()
                },
            )
            .expect("configure");
        let mut canvas = DrawList::new();
        let outcome = renderer.render_frame(&mut canvas);
        assert!(matches!(outcome, RenderOutcome::Drawn { overlay: true, .. }));
        assert_eq!(canvas.commands.last(), Some(&DrawCommand::Overlay(mask)));
        assert_eq!(canvas.overlay(), Some(mask));
    }

    #[test]
    fn test_replace_source_resumes_and_invalidates_old_tick() {
        let mut renderer = configured(ScrollOrientation::Up, true);
        renderer.tick_pending();
        renderer.render_frame(&mut DrawList::new());
        let old = renderer.pending_tick().expect("pending");

        renderer
            .replace_source(SourceImage::solid(40, 40, [1, 1, 1, 255]), true)
            .expect("replace");
        assert!(renderer.is_scrolling());
        assert_eq!(renderer.tick(old), TickOutcome::Stale);
        assert!(renderer.pending_tick().is_some());
        // 40x40 into width 40 → 40 tall; floor(50/40)+1 = 2
        assert_eq!(renderer.tile_count(), 2);
        // Pan distance preserved.
        assert!((renderer.pan_distance() + 1.0).abs() < EPSILON);

        renderer
            .replace_source(SourceImage::solid(40, 40, [1, 1, 1, 255]), false)
            .expect("replace");
        assert!(renderer.pan_distance().abs() < EPSILON);
    }

    #[test]
    fn test_replace_source_wraps_preserved_pan_into_new_tile() {
        let mut renderer = ScrollingTileRenderer::new();
        renderer
            .configure(
                SourceImage::solid(100, 200, [9, 9, 9, 255]),
                Viewport::new(100, 200),
                params(ScrollOrientation::Up, 20.0),
            )
            .expect("configure");
        for _ in 0..15 {
            renderer.tick_pending();
            renderer.render_frame(&mut DrawList::new());
        }
        assert!((renderer.pan_distance() + 150.0).abs() < EPSILON);

        // 100x40 into width 100 → 40 tall; -150 wraps to -30.
        renderer
            .replace_source(SourceImage::solid(100, 40, [9, 9, 9, 255]), true)
            .expect("replace");
        let extent = renderer.tile().expect("tile").height() as f32;
        let pan = renderer.pan_distance();
        assert!(pan <= 0.0 && pan > -extent, "pan {pan} outside (-{extent}, 0]");
        assert!((pan + 30.0).abs() < EPSILON);

        let mut canvas = DrawList::new();
        renderer.render_frame(&mut canvas);
        let reach = canvas
            .tile_offsets()
            .iter()
            .map(|offset| offset.y + extent)
            .fold(f32::MIN, f32::max);
        assert!(reach >= 200.0, "tiles stop at {reach}");

        // A pan that is a whole number of new tiles lands on zero.
        renderer
            .replace_source(SourceImage::solid(100, 10, [9, 9, 9, 255]), true)
            .expect("replace");
        assert_eq!(renderer.pan_distance(), 0.0);
    }

    #[test]
    fn test_wrap_pan_range() {
        assert_eq!(wrap_pan(0.0, 10.0), 0.0);
        assert_eq!(wrap_pan(-20.0, 10.0), 0.0);
        assert!((wrap_pan(-3.5, 10.0) + 3.5).abs() < EPSILON);
        assert!((wrap_pan(-23.5, 10.0) + 3.5).abs() < EPSILON);
        assert!((wrap_pan(4.0, 10.0) + 6.0).abs() < EPSILON);
    }

    #[test]
    fn test_transparent_mask_draws_no_overlay() {
        let mut renderer = configured(ScrollOrientation::Up, false);
        assert!(renderer.params().mask_color.is_transparent());
        let mut canvas = DrawList::new();
        let outcome = renderer.render_frame(&mut canvas);
        assert!(matches!(outcome, RenderOutcome::Drawn { overlay: false, .. }));
        assert_eq!(canvas.overlay(), None);
        assert!(
            canvas
                .commands
                .iter()
                .all(|cmd| matches!(cmd, DrawCommand::Tile { .. }))
        );
    }

    #[test]
    fn test_resize_requires_configure() {
        let mut renderer = ScrollingTileRenderer::new();
        assert_eq!(
            renderer.resize(Viewport::new(40, 50)),
            Err(ScrollError::NotConfigured)
        );
        assert_eq!(renderer.viewport(), None);
        assert!(renderer.tile().is_none());

        let mut renderer = configured(ScrollOrientation::Up, true);
        renderer.tick_pending();
        let token = renderer.pending_tick();
        let pan = renderer.pan_distance();
        assert!(renderer.resize(Viewport::new(40, 0)).is_err());
        assert_eq!(renderer.viewport(), Some(Viewport::new(40, 50)));
        assert_eq!(renderer.tile().map(TileImage::size), Some(glam::UVec2::new(40, 20)));
        assert_eq!(renderer.tile_count(), 3);
        assert_eq!(renderer.pending_tick(), token);
        assert!((renderer.pan_distance() - pan).abs() < EPSILON);
        assert!(renderer.is_scrolling());
    }

    #[test]
    fn test_replace_source_keeps_stopped_state() {
        let mut renderer = configured(ScrollOrientation::Up, false);
        renderer
            .replace_source(SourceImage::solid(5, 5, [0; 4]), true)
            .expect("replace");
        assert!(!renderer.is_scrolling());
        assert_eq!(renderer.pending_tick(), None);
    }

    #[test]
    fn test_replace_source_requires_configure() {
        let mut renderer = ScrollingTileRenderer::new();
        assert_eq!(
            renderer.replace_source(SourceImage::solid(5, 5, [0; 4]), true),
            Err(ScrollError::NotConfigured)
        );
    }

    #[test]
    fn test_failed_replace_leaves_scrolling_untouched() {
        let mut renderer = configured(ScrollOrientation::Up, true);
        let token = renderer.pending_tick();
        let err = renderer.replace_source(SourceImage::solid(0, 3, [0; 4]), true);
        assert!(matches!(err, Err(ScrollError::InvalidInput(_))));
        assert!(renderer.is_scrolling());
        assert_eq!(renderer.pending_tick(), token);
    }

    #[test]
    fn test_resize_rederives_tile() {
        let mut renderer = configured(ScrollOrientation::Up, true);
        renderer.tick_pending();
        renderer.resize(Viewport::new(80, 50)).expect("resize");
        let tile = renderer.tile().expect("tile");
        assert_eq!((tile.width(), tile.height()), (80, 40));
        assert_eq!(renderer.tile_count(), 2);
        assert!(renderer.pan_distance().abs() < EPSILON);
        assert!(renderer.is_scrolling());
        assert!(matches!(
            renderer.resize(Viewport::new(0, 50)),
            Err(ScrollError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_cycle_orientation_rescales_against_other_axis() {
        let mut renderer = configured(ScrollOrientation::Down, true);
        let next = renderer.cycle_orientation().expect("cycle");
        assert_eq!(next, ScrollOrientation::Left);
        // Horizontal: height 50, width 50*20/10 = 100; floor(40/100)+1 = 1
        let tile = renderer.tile().expect("tile");
        assert_eq!((tile.width(), tile.height()), (100, 50));
        assert_eq!(renderer.tile_count(), 1);
        assert!(renderer.is_scrolling());
    }

    #[test]
    fn test_cycle_orientation_four_times_returns_home() {
        let mut renderer = configured(ScrollOrientation::Up, true);
        for _ in 0..7 {
            renderer.tick_pending();
            renderer.render_frame(&mut DrawList::new());
        }
        for _ in 0..4 {
            renderer.cycle_orientation().expect("cycle");
        }
        assert_eq!(renderer.orientation(), ScrollOrientation::Up);
        assert!(renderer.pan_distance().abs() < EPSILON);
        let tile = renderer.tile().expect("tile");
        assert_eq!((tile.width(), tile.height()), (40, 20));
    }

    #[test]
    fn test_cycle_orientation_without_tile_only_advances() {
        let mut renderer = ScrollingTileRenderer::new();
        assert_eq!(renderer.cycle_orientation(), Ok(ScrollOrientation::Down));
        assert!(renderer.tile().is_none());
    }

    #[test]
    fn test_toggle_scroll() {
        let mut renderer = configured(ScrollOrientation::Right, false);
        renderer.toggle_scroll();
        assert!(renderer.is_scrolling());
        renderer.toggle_scroll();
        assert!(!renderer.is_scrolling());
    }

    #[test]
    fn test_reduce_quality_is_optional() {
        let mut renderer = ScrollingTileRenderer::new();
        renderer
            .configure(
                SourceImage::solid(4, 4, [123, 45, 67, 89]),
                Viewport::new(4, 4),
                ScrollParams {
                    reduce_quality: false,
                    ..Default::default()
                },
            )
            .expect("configure");
        let tile = renderer.tile().expect("tile");
        assert_eq!(tile.buffer().get_pixel(0, 0).0, [123, 45, 67, 89]);
    }
}
