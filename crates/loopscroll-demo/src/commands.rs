//! Start/stop/orientation controls, the demo's stand-in for button clicks.

use std::fmt;
use std::str::FromStr;

use loopscroll_core::{ScrollError, SharedRenderer};

/// A control the host can fire at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlCommand {
    Start,
    Stop,
    Toggle,
    Cycle,
}

impl ControlCommand {
    pub fn apply(self, renderer: &SharedRenderer) -> Result<(), ScrollError> {
        match self {
            Self::Start => renderer.start_scroll(),
            Self::Stop => renderer.stop_scroll(),
            Self::Toggle => renderer.toggle_scroll(),
            Self::Cycle => {
                let orientation = renderer.cycle_orientation()?;
                tracing::info!("scrolling {orientation} now");
            }
        }
        Ok(())
    }
}

impl fmt::Display for ControlCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::Stop => write!(f, "stop"),
            Self::Toggle => write!(f, "toggle"),
            Self::Cycle => write!(f, "cycle"),
        }
    }
}

impl FromStr for ControlCommand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "start" => Ok(Self::Start),
            "stop" => Ok(Self::Stop),
            "toggle" | "click" => Ok(Self::Toggle),
            "cycle" | "orientation" => Ok(Self::Cycle),
            other => Err(format!(
                "unknown command '{other}' (expected start, stop, toggle or cycle)"
            )),
        }
    }
}

/// A command bound to the frame it fires on, written `command@frame`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledCommand {
    pub frame: u64,
    pub command: ControlCommand,
}

impl FromStr for ScheduledCommand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (command, frame) = s
            .split_once('@')
            .ok_or_else(|| format!("expected command@frame, got '{s}'"))?;
        let frame = frame
            .trim()
            .parse()
            .map_err(|e| format!("invalid frame in '{s}': {e}"))?;
        Ok(Self {
            frame,
            command: command.parse()?,
        })
    }
}
