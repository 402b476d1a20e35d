//! Thread-safe handle for hosts that render and control from different threads.

use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

use crate::canvas::Canvas;
use crate::error::ScrollError;
use crate::image::SourceImage;
use crate::orientation::ScrollOrientation;
use crate::params::{ScrollParams, Viewport};
use crate::renderer::{RenderOutcome, ScrollingTileRenderer, TickOutcome};
use crate::schedule::TickToken;

/// Cloneable handle to a renderer behind a mutex.
///
/// Every call holds the lock for its whole duration, so the tile, tile count
/// and pan distance are always observed together.
#[derive(Debug, Clone, Default)]
pub struct SharedRenderer {
    inner: Arc<Mutex<ScrollingTileRenderer>>,
}

impl SharedRenderer {
    pub fn new(renderer: ScrollingTileRenderer) -> Self {
        Self {
            inner: Arc::new(Mutex::new(renderer)),
        }
    }

    /// Lock for a sequence of calls that must not interleave with others.
    pub fn lock(&self) -> MutexGuard<'_, ScrollingTileRenderer> {
        self.inner.lock()
    }

    pub fn configure(
        &self,
        source: SourceImage,
        viewport: Viewport,
        params: ScrollParams,
    ) -> Result<(), ScrollError> {
        self.inner.lock().configure(source, viewport, params)
    }

    pub fn replace_source(
        &self,
        source: SourceImage,
        preserve_scroll_state: bool,
    ) -> Result<(), ScrollError> {
        self.inner.lock().replace_source(source, preserve_scroll_state)
    }

    pub fn resize(&self, viewport: Viewport) -> Result<(), ScrollError> {
        self.inner.lock().resize(viewport)
    }

    pub fn start_scroll(&self) {
        self.inner.lock().start_scroll();
    }

    pub fn stop_scroll(&self) {
        self.inner.lock().stop_scroll();
    }

    pub fn toggle_scroll(&self) {
        self.inner.lock().toggle_scroll();
    }

    pub fn cycle_orientation(&self) -> Result<ScrollOrientation, ScrollError> {
        self.inner.lock().cycle_orientation()
    }

    pub fn tick(&self, token: TickToken) -> TickOutcome {
        self.inner.lock().tick(token)
    }

    pub fn render_frame(&self, canvas: &mut impl Canvas) -> RenderOutcome {
        self.inner.lock().render_frame(canvas)
    }

    pub fn is_scrolling(&self) -> bool {
        self.inner.lock().is_scrolling()
    }
}
