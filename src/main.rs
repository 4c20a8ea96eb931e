use anyhow::{Context, anyhow};
use clap::Parser;
use raylib::prelude::*;
use tracing::{error, info};

mod cli;
mod config;
mod constants;
mod controller;
mod counter;
mod engine;
mod error;
mod hero;
mod input;
mod logging;
mod state;
mod texture_loader;
mod timer;

use crate::cli::Cli;
use crate::config::SliderConfig;
use crate::constants::*;
use crate::engine::Engine;
use crate::hero::engine::HeroEngine;
use crate::texture_loader::{collect_image_paths, shuffle_paths};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(&cli.log_level);
    logging::install_panic_hook();

    run(cli).inspect_err(|e| error!("{:#}", e))
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = SliderConfig::resolve(&cli).context("failed to load configuration")?;

    let mut image_paths = collect_image_paths(&cli.image_directory)?;
    if cli.shuffle {
        shuffle_paths(&mut image_paths);
    }
    info!(count = image_paths.len(), directory = ?cli.image_directory, "found slide images");

    let (mut rl, thread) = raylib::init()
        .size(RENDER_WIDTH / 2, RENDER_HEIGHT / 2)
        .title("Hero Slider")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    let mut framebuffer = rl
        .load_render_texture(&thread, RENDER_WIDTH as u32, RENDER_HEIGHT as u32)
        .map_err(|e| anyhow!("failed to create render texture: {}", e))?;

    let mut engine = HeroEngine::new(config);
    engine.initialize(&mut rl, &thread, image_paths)?;
    info!(target: "analytics", event = "page_view", slides = engine.slide_count(), "slider ready");

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = rl.get_frame_time().min(MAX_FRAME_TIME);
        if !engine.render_frame(dt, &mut rl, &thread, &mut framebuffer) {
            break;
        }

        // Render texture is stored bottom-up, hence the negative source height
        let mut d = rl.begin_drawing(&thread);
        let sw = d.get_screen_width() as f32;
        let sh = d.get_screen_height() as f32;
        d.draw_texture_pro(
            &framebuffer,
            Rectangle::new(0.0, 0.0, framebuffer.width() as f32, -(framebuffer.height() as f32)),
            Rectangle::new(0.0, 0.0, sw, sh),
            Vector2::new(0.0, 0.0),
            0.0,
            Color::WHITE,
        );
    }

    info!("window closed");
    Ok(())
}
