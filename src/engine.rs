use std::path::PathBuf;

use raylib::prelude::*;

pub trait Engine {
    /// Loads slide images. Fails when nothing can be shown.
    fn initialize(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread, paths: Vec<PathBuf>) -> anyhow::Result<()>;
    /// Handles input, advances timers and draws one frame. Returns false to stop.
    fn render_frame(&mut self, dt: f32, rl: &mut RaylibHandle, thread: &RaylibThread, framebuffer: &mut RenderTexture2D) -> bool;
}
