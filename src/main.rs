//! termspin: rotating 3D solids as truecolor text art
//!
//! A software point-cloud renderer for the terminal:
//! - Parametric solids sampled into point clouds
//! - Tolerance-banded depth buffer with bilinear splatting
//! - Directional lighting mapped onto a glyph shade ramp
//! - Per-model surface coloring, emitted as 24-bit ANSI color
//!
//! Runs an interactive animation by default; `--frames N` streams frames
//! to stdout instead.

mod config;
mod models;
mod rasterizer;
mod term;

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;
use log::info;

use rasterizer::{RenderOptions, DEFAULT_SHADES};

#[derive(Parser, Debug)]
#[command(name = "termspin", version, about = "Rotating 3D solids as truecolor text art")]
struct Args {
    /// Model to render (see --list)
    #[arg(long, default_value = "cube")]
    model: String,

    /// List the available models and exit
    #[arg(long)]
    list: bool,

    /// Grid width in cells (default: terminal width)
    #[arg(long)]
    width: Option<usize>,

    /// Grid height in cells (default: terminal height)
    #[arg(long)]
    height: Option<usize>,

    /// Render this many frames to stdout instead of animating
    #[arg(long)]
    frames: Option<u32>,

    /// Rotation speed multiplier; negative spins the other way
    #[arg(long, default_value_t = 1.0)]
    spin: f32,

    /// Shade ramp, brightest glyph first (at least 2 glyphs)
    #[arg(long)]
    shades: Option<String>,

    /// Animation frame rate
    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// Load render options from a RON file
    #[arg(long, value_name = "PATH")]
    options: Option<PathBuf>,

    /// Write the effective render options to a RON file and exit
    #[arg(long, value_name = "PATH")]
    write_options: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    if args.list {
        for model in models::all() {
            println!("{:<10} {}", model.key, model.label);
        }
        return Ok(());
    }

    let opts = match &args.options {
        Some(path) => config::load_options(path)
            .with_context(|| format!("failed to load options from {}", path.display()))?,
        None => RenderOptions::default(),
    };

    if let Some(path) = &args.write_options {
        config::save_options(&opts, path)
            .with_context(|| format!("failed to write options to {}", path.display()))?;
        println!("wrote {}", path.display());
        return Ok(());
    }

    let shades: Vec<char> = args.shades.as_deref().unwrap_or(DEFAULT_SHADES).chars().collect();
    if shades.len() < 2 {
        bail!("shade ramp needs at least 2 glyphs, got {}", shades.len());
    }
    if args.width == Some(0) || args.height == Some(0) {
        bail!("grid dimensions must be positive");
    }

    let model = models::resolve(&args.model)?;
    info!("model '{}' with {} points", model.key, model.points.len());

    match args.frames {
        Some(frames) => {
            let (width, height) = term::grid_size(args.width, args.height);
            term::print_frames(model, frames, args.spin, width, height, &shades, &opts)
                .context("failed to write frames to stdout")?;
        }
        None => {
            // raw mode and alternate-screen escapes make no sense in a pipe
            if !io::stdout().is_terminal() {
                bail!("stdout is not a terminal; use --frames to render into a pipe");
            }
            term::animate(model, args.spin, args.width, args.height, args.fps, &shades, &opts)
                .context("animation failed")?;
        }
    }
    Ok(())
}
