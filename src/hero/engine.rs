use std::path::PathBuf;

use anyhow::{Context, bail};
use raylib::prelude::*;
use tracing::{debug, info, warn};

use crate::config::SliderConfig;
use crate::constants::*;
use crate::controller::{ActiveMarker, SliderController};
use crate::counter::StatCounter;
use crate::hero::indicator::Indicator;
use crate::hero::layout::Layout;
use crate::hero::router::InputRouter;
use crate::hero::slide::{Slide, with_opacity};
use crate::texture_loader::load_slide_textures;

struct Stage {
    slider: SliderController<Slide, Indicator>,
    router: InputRouter,
}

pub struct HeroEngine {
    config: SliderConfig,
    stage: Option<Stage>,
    stats: Vec<StatCounter>,
}

impl HeroEngine {
    pub fn new(config: SliderConfig) -> Self {
        let stats = config
            .stats
            .iter()
            .map(|s| StatCounter::new(&s.value, &s.label))
            .collect();
        Self { config, stage: None, stats }
    }

    pub fn slide_count(&self) -> usize {
        self.stage.as_ref().map_or(0, |stage| stage.slider.len())
    }
}

impl crate::engine::Engine for HeroEngine {
    fn initialize(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread, paths: Vec<PathBuf>) -> anyhow::Result<()> {
        let textures = load_slide_textures(rl, thread, &paths);
        if textures.is_empty() {
            bail!("none of the {} images could be loaded", paths.len());
        }

        let slides: Vec<Slide> = textures
            .into_iter()
            .enumerate()
            .map(|(i, (path, texture))| {
                debug!(index = i, ?path, "slide loaded");
                Slide::new(texture, self.config.caption(i).cloned())
            })
            .collect();

        let layout = Layout::compute(slides.len(), &self.config.controls);
        let indicators = (0..slides.len())
            .map(|i| Indicator::new(layout.indicators.get(i).copied()))
            .collect();

        let slider = SliderController::new(slides, indicators, self.config.autoplay_interval_secs)
            .context("failed to build the slider")?;
        let router = InputRouter::new(layout, self.config.swipe_threshold_px);
        self.stage = Some(Stage { slider, router });

        for stat in self.stats.iter_mut() {
            stat.start();
        }
        Ok(())
    }

    fn render_frame(&mut self, dt: f32, rl: &mut RaylibHandle, thread: &RaylibThread, framebuffer: &mut RenderTexture2D) -> bool {
        let Some(stage) = self.stage.as_mut() else {
            return false;
        };

        // 1. Route this frame's input to the slider
        for input in stage.router.poll(rl) {
            match stage.slider.handle(input) {
                Ok(()) if input.is_manual() => info!(
                    target: "analytics",
                    event = "slider_navigation",
                    source = input.source(),
                    index = stage.slider.current_index(),
                    "slider navigation"
                ),
                Ok(()) => debug!(
                    ?input,
                    autoplay = stage.slider.is_autoplaying(),
                    remaining = ?stage.slider.autoplay_remaining(),
                    "hover changed"
                ),
                Err(e) => warn!("ignored {:?}: {}", input, e),
            }
        }

        // 2. Autoplay, fades and counters
        if stage.slider.tick(dt) {
            debug!(index = stage.slider.current_index(), "autoplay advanced");
        }
        stage.slider.update_slides(|slide| slide.update(dt));
        for stat in self.stats.iter_mut().filter(|s| !s.is_finished()) {
            stat.step();
        }

        let stage = &*stage;
        let stats = &self.stats;
        rl.draw_texture_mode(thread, framebuffer, |mut tmd| {
            let mut d = tmd.begin_drawing(thread);
            d.clear_background(Color::BLACK);

            // Fading-out slides underneath, the active one on top
            let slides = stage.slider.slides();
            for slide in slides.iter().filter(|s| !s.is_active()) {
                slide.draw(&mut d);
            }
            let active = &slides[stage.slider.current_index()];
            active.draw(&mut d);

            for slide in slides.iter() {
                slide.draw_caption(&mut d);
            }
            draw_buttons(&mut d, stage.router.layout());
            for indicator in stage.slider.indicators() {
                indicator.draw(&mut d);
            }
            draw_stats(&mut d, stats);
        });

        true
    }
}

fn draw_buttons(d: &mut RaylibDrawHandle, layout: &Layout) {
    let buttons = [(layout.prev_button, "<"), (layout.next_button, ">")];
    for (bounds, glyph) in buttons {
        let Some(bounds) = bounds else {
            continue;
        };
        d.draw_rectangle_rec(bounds, Color::new(0, 0, 0, 120));
        d.draw_rectangle_lines_ex(bounds, 2.0, Color::WHITE);
        let size = (BUTTON_SIZE * 0.6) as i32;
        d.draw_text(
            glyph,
            (bounds.x + bounds.width * 0.38) as i32,
            (bounds.y + (bounds.height - size as f32) * 0.5) as i32,
            size,
            Color::WHITE,
        );
    }
}

fn draw_stats(d: &mut RaylibDrawHandle, stats: &[StatCounter]) {
    if stats.is_empty() {
        return;
    }
    d.draw_rectangle(0, 0, RENDER_WIDTH, STATS_STRIP_HEIGHT as i32, with_opacity(Color::BLACK, 0.55));

    let column_width = RENDER_WIDTH as f32 / stats.len() as f32;
    for (i, stat) in stats.iter().enumerate() {
        let x = (column_width * i as f32 + column_width * 0.2) as i32;
        d.draw_text(stat.display(), x, 24, 56, Color::GOLD);
        d.draw_text(stat.label(), x, 90, 28, Color::RAYWHITE);
    }
}
