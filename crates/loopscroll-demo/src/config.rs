//! Runtime configuration for the demo.

use std::time::Duration;

/// Default viewport width (portrait phone screen).
const DEFAULT_WIDTH: u32 = 1080;
/// Default viewport height.
const DEFAULT_HEIGHT: u32 = 1920;
/// Default number of frames to render before writing the output.
const DEFAULT_FRAMES: u64 = 240;

/// Runtime configuration for the loopscroll demo.
///
/// Values come from the environment; command-line flags override them.
#[derive(Debug, Clone)]
pub struct DemoConfig {
    /// Viewport width in pixels.
    pub width: u32,
    /// Viewport height in pixels.
    pub height: u32,
    /// Frames to render.
    pub frames: u64,
    /// Replaces the tick interval from the scroll parameters when set.
    pub tick_interval: Option<Duration>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            width: env_parse("LOOPSCROLL_WIDTH").unwrap_or(DEFAULT_WIDTH),
            height: env_parse("LOOPSCROLL_HEIGHT").unwrap_or(DEFAULT_HEIGHT),
            frames: env_parse("LOOPSCROLL_FRAMES").unwrap_or(DEFAULT_FRAMES),
            tick_interval: env_parse("LOOPSCROLL_TICK_MS").map(Duration::from_millis),
        }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|s| s.parse().ok())
}
