//! Loopscroll Demo: headless host for the infinite-scroll renderer.
//!
//! Loads a background image, drives the renderer on a timer, applies
//! start/stop/orientation commands from the command line or stdin (one per
//! line), and writes the last composited frame to disk.

mod commands;
mod compositor;
mod config;
mod image_loader;

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use loopscroll_core::{
    DrawList, MaskColor, RenderOutcome, ScrollError, ScrollOrientation, ScrollParams,
    SharedRenderer, Viewport,
};
use tracing_subscriber::EnvFilter;

use crate::commands::{ControlCommand, ScheduledCommand};
use crate::compositor::Compositor;
use crate::config::DemoConfig;
use crate::image_loader::ImageLoadError;

#[derive(Debug, Parser)]
#[command(
    name = "loopscroll-demo",
    about = "Render an infinitely scrolling tiled background to an image",
    version
)]
struct Cli {
    /// Background image. A stripe pattern is used when omitted.
    image: Option<PathBuf>,

    /// Viewport width in pixels.
    #[arg(long)]
    width: Option<u32>,

    /// Viewport height in pixels.
    #[arg(long)]
    height: Option<u32>,

    /// JSON file with scroll parameters; flags below override it.
    #[arg(long)]
    params: Option<PathBuf>,

    /// Scroll direction: up, down, left or right.
    #[arg(long)]
    orientation: Option<ScrollOrientation>,

    /// Speed multiplier (recommended 1-50).
    #[arg(long)]
    speed: Option<f32>,

    /// Overlay color as #AARRGGBB.
    #[arg(long)]
    mask: Option<MaskColor>,

    /// Do not start scrolling until a start/toggle command arrives.
    #[arg(long)]
    paused: bool,

    /// Keep full color depth instead of reducing to RGB565.
    #[arg(long)]
    full_color: bool,

    /// Number of frames to render.
    #[arg(long)]
    frames: Option<u64>,

    /// Commands to fire at given frames, e.g. `stop@120` or `cycle@30`.
    #[arg(long = "at", value_name = "COMMAND@FRAME")]
    scheduled: Vec<ScheduledCommand>,

    /// Where to write the final frame.
    #[arg(long, short, default_value = "loopscroll.png")]
    output: PathBuf,

    /// Also write the final frame's draw commands as JSON.
    #[arg(long)]
    dump_commands: Option<PathBuf>,
}

#[derive(Debug, thiserror::Error)]
enum DemoError {
    #[error(transparent)]
    Scroll(#[from] ScrollError),
    #[error(transparent)]
    Load(#[from] ImageLoadError),
    #[error("failed to write frame: {0}")]
    Encode(image::ImageError),
    #[error("invalid parameter file: {0}")]
    Params(#[from] serde_json::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), DemoError> {
    let config = DemoConfig::default();
    let viewport = Viewport::new(
        cli.width.unwrap_or(config.width),
        cli.height.unwrap_or(config.height),
    );
    let params = build_params(&cli, &config)?;
    let frames = cli.frames.unwrap_or(config.frames);

    let source = match &cli.image {
        Some(path) => image_loader::load_source(path)?,
        None => image_loader::stripes(viewport.width.max(1), viewport.width.max(1) / 2 + 1),
    };

    let renderer = SharedRenderer::default();
    // tokio intervals must be non-zero.
    let interval = params.tick_interval().max(Duration::from_millis(1));
    renderer.configure(source, viewport, params)?;
    spawn_stdin_controls(renderer.clone());

    let mut compositor = Compositor::new(viewport);
    let mut timer = tokio::time::interval(interval);
    timer.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
    let mut drawn = 0u64;

    for frame in 0..frames {
        for scheduled in cli.scheduled.iter().filter(|c| c.frame == frame) {
            tracing::info!("frame {frame}: {}", scheduled.command);
            scheduled.command.apply(&renderer)?;
        }

        compositor.clear();
        let outcome = renderer.render_frame(&mut compositor);
        if let RenderOutcome::Drawn { tiles, .. } = outcome {
            drawn += 1;
            tracing::trace!("frame {frame}: {tiles} tiles");
        }

        timer.tick().await;
        if let RenderOutcome::Drawn {
            next_tick: Some(token),
            ..
        } = outcome
        {
            renderer.tick(token);
        }
    }

    compositor.clear();
    renderer.render_frame(&mut compositor);
    compositor.save(&cli.output).map_err(DemoError::Encode)?;
    tracing::info!(
        "rendered {drawn} frames, final frame written to {}",
        cli.output.display()
    );

    if let Some(path) = &cli.dump_commands {
        let mut list = DrawList::new();
        renderer.render_frame(&mut list);
        std::fs::write(path, serde_json::to_string_pretty(&list)?)?;
        tracing::info!("{} draw commands written to {}", list.len(), path.display());
    }
    Ok(())
}

fn build_params(cli: &Cli, config: &DemoConfig) -> Result<ScrollParams, DemoError> {
    let mut params = match &cli.params {
        Some(path) => ScrollParams::from_json_str(&std::fs::read_to_string(path)?)?,
        None => ScrollParams::default(),
    };
    if let Some(orientation) = cli.orientation {
        params.orientation = orientation;
    }
    if let Some(speed) = cli.speed {
        params.speed = speed;
    }
    if let Some(mask) = cli.mask {
        params.mask_color = mask;
    }
    if cli.paused {
        params.auto_start = false;
    }
    if cli.full_color {
        params.reduce_quality = false;
    }
    if let Some(interval) = config.tick_interval {
        params.tick_interval_ms = interval.as_millis() as u64;
    }
    Ok(params)
}

/// Read one command per line from stdin on a plain thread, so an idle
/// terminal never holds up runtime shutdown.
fn spawn_stdin_controls(renderer: SharedRenderer) {
    let spawned = std::thread::Builder::new()
        .name("stdin-controls".into())
        .spawn(move || {
            for line in std::io::stdin().lines() {
                let line = match line {
                    Ok(line) => line,
                    Err(e) => {
                        tracing::warn!("stdin closed: {e}");
                        break;
                    }
                };
                if line.trim().is_empty() {
                    continue;
                }
                match line.parse::<ControlCommand>() {
                    Ok(command) => {
                        if let Err(e) = command.apply(&renderer) {
                            tracing::warn!("{command} failed: {e}");
                        }
                    }
                    Err(e) => tracing::warn!("{e}"),
                }
            }
        });
    if let Err(e) = spawned {
        tracing::warn!("stdin controls unavailable: {e}");
    }
}
