// SPDX-License-Identifier: MIT OR Apache-2.0

//! Main entry point for the board window

use anyhow::{anyhow, Result};
use clap::Parser;
use scrabble_ui_egui::{App, UiConfig};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "scrabble")]
#[command(about = "Scrabble board with a draggable letter tile")]
struct Args {
    /// Cells per board side
    #[arg(long, allow_hyphen_values = true)]
    board_size: Option<i32>,

    /// Window width in pixels; the height follows at 2:3
    #[arg(long, allow_hyphen_values = true)]
    width: Option<f32>,

    /// Redraw rate of the frame loop
    #[arg(long, allow_hyphen_values = true)]
    fps: Option<f32>,

    /// Letter on the demo tile
    #[arg(long)]
    letter: Option<String>,

    /// JSON config file; flags override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the effective config to this path and exit
    #[arg(long)]
    write_config: Option<PathBuf>,

    #[arg(long)]
    debug: bool,
}

impl Args {
    fn into_config(self) -> Result<(UiConfig, Option<PathBuf>)> {
        let mut config = match &self.config {
            Some(path) => UiConfig::load_from_file(path)?,
            None => UiConfig::default(),
        };

        if let Some(size) = self.board_size {
            config.board.dimension = size;
        }
        if let Some(width) = self.width {
            config.window.width = width;
        }
        if let Some(fps) = self.fps {
            config.window.fps = fps;
        }
        if let Some(letter) = self.letter {
            config.tile.letter = letter;
        }

        Ok((config, self.write_config))
    }
}

/// Initialize tracing; `RUST_LOG` takes precedence over `--debug`
fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.debug);

    let (config, write_config) = args.into_config()?;

    if let Some(path) = write_config {
        config.save_to_file(&path)?;
        tracing::info!(path = %path.display(), "Wrote UI config");
        return Ok(());
    }

    // Validate everything before a window exists
    let layout = config.layout()?;
    let frame_rate = config.frame_rate()?;
    let scene = config.build_scene()?;

    let screen = layout.screen_size();
    tracing::info!(
        width = screen.width,
        height = screen.height,
        board_size = layout.dimension(),
        fps = frame_rate.fps(),
        "Starting board window"
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([screen.width, screen.height])
            .with_title(config.window.title.clone())
            .with_resizable(false),
        ..Default::default()
    };

    let app = App::new(scene, frame_rate);
    eframe::run_native(
        &config.window.title,
        options,
        Box::new(move |_cc| Box::new(app)),
    )
    .map_err(|e| anyhow!("Board window failed: {e}"))?;

    tracing::info!("Board window closed");
    Ok(())
}
