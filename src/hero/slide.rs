use raylib::prelude::*;

use crate::config::CaptionConfig;
use crate::constants::*;
use crate::controller::ActiveMarker;

/// Eases opacity toward 1.0 while active and toward 0.0 otherwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fade {
    pub opacity: f32,
    pub active: bool,
}

impl Fade {
    pub fn hidden() -> Self {
        Self { opacity: 0.0, active: false }
    }

    pub fn update(&mut self, dt: f32) {
        let step = dt / SLIDE_FADE_DURATION;
        self.opacity = if self.active {
            (self.opacity + step).min(1.0)
        } else {
            (self.opacity - step).max(0.0)
        };
    }

    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0
    }
}

pub struct Slide {
    image: Texture2D,
    caption: Option<CaptionConfig>,
    fade: Fade,
    scale: f32, // Cover-fit scale into the render texture
}

impl Slide {
    pub fn new(image: Texture2D, caption: Option<CaptionConfig>) -> Self {
        let scale = cover_scale(image.width() as f32, image.height() as f32);
        Self {
            image,
            caption,
            fade: Fade::hidden(),
            scale,
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.fade.update(dt);
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle) {
        if !self.fade.is_visible() {
            return;
        }
        let tex_width = self.image.width() as f32;
        let tex_height = self.image.height() as f32;
        let scaled_width = tex_width * self.scale;
        let scaled_height = tex_height * self.scale;

        d.draw_texture_pro(
            &self.image,
            Rectangle::new(0.0, 0.0, tex_width, tex_height),
            Rectangle::new(
                (RENDER_WIDTH as f32 - scaled_width) * 0.5,
                (RENDER_HEIGHT as f32 - scaled_height) * 0.5,
                scaled_width,
                scaled_height,
            ),
            Vector2::new(0.0, 0.0),
            0.0,
            with_opacity(Color::WHITE, self.fade.opacity),
        );
    }

    pub fn draw_caption(&self, d: &mut RaylibDrawHandle) {
        let Some(caption) = &self.caption else {
            return;
        };
        let alpha = self.fade.opacity;
        let x = (BUTTON_MARGIN * 2.0 + BUTTON_SIZE) as i32;
        let y = (RENDER_HEIGHT as f32 * 0.62) as i32;
        if !caption.title.is_empty() {
            d.draw_text(&caption.title, x, y, 72, with_opacity(Color::WHITE, alpha));
        }
        if !caption.subtitle.is_empty() {
            d.draw_text(&caption.subtitle, x, y + 90, 36, with_opacity(Color::LIGHTGRAY, alpha));
        }
    }
}

impl ActiveMarker for Slide {
    fn set_active(&mut self, active: bool) {
        self.fade.active = active;
    }

    fn is_active(&self) -> bool {
        self.fade.active
    }
}

/// Scale that makes a `width` x `height` image cover the whole render texture.
pub fn cover_scale(width: f32, height: f32) -> f32 {
    if width <= 0.0 || height <= 0.0 {
        return 1.0;
    }
    (RENDER_WIDTH as f32 / width).max(RENDER_HEIGHT as f32 / height)
}

pub fn with_opacity(color: Color, opacity: f32) -> Color {
    Color::new(color.r, color.g, color.b, (color.a as f32 * opacity.clamp(0.0, 1.0)) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fade_reaches_full_then_back() {
        let mut fade = Fade::hidden();
        fade.active = true;
        fade.update(SLIDE_FADE_DURATION * 0.5);
        assert!(fade.opacity > 0.4 && fade.opacity < 0.6);
        fade.update(SLIDE_FADE_DURATION);
        assert_eq!(fade.opacity, 1.0);
        fade.active = false;
        fade.update(SLIDE_FADE_DURATION * 2.0);
        assert_eq!(fade.opacity, 0.0);
        assert!(!fade.is_visible());
    }

    #[test]
    fn cover_scale_fills_both_axes() {
        let landscape = cover_scale(4000.0, 1000.0);
        assert!(4000.0 * landscape >= RENDER_WIDTH as f32);
        assert!(1000.0 * landscape >= RENDER_HEIGHT as f32 - 0.01);

        let portrait = cover_scale(1000.0, 3000.0);
        assert!(1000.0 * portrait >= RENDER_WIDTH as f32 - 0.01);
        assert!(3000.0 * portrait >= RENDER_HEIGHT as f32);
        assert_eq!(cover_scale(0.0, 10.0), 1.0);
    }

    #[test]
    fn opacity_scales_alpha() {
        assert_eq!(with_opacity(Color::WHITE, 0.5).a, 127);
        assert_eq!(with_opacity(Color::WHITE, 2.0).a, 255);
        assert_eq!(with_opacity(Color::WHITE, -1.0).a, 0);
    }
}
