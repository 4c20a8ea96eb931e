use raylib::prelude::*;

use crate::config::ControlsConfig;
use crate::constants::*;
use crate::input::SliderInput;

/// Geometry of the slider controls in render-texture coordinates.
/// A `None` region means that input source is absent.
#[derive(Debug, Clone)]
pub struct Layout {
    pub prev_button: Option<Rectangle>,
    pub next_button: Option<Rectangle>,
    pub indicators: Vec<Rectangle>,
    pub swipe_region: Option<Rectangle>,
    pub hover_region: Option<Rectangle>,
}

fn contains(rect: &Rectangle, point: Vector2) -> bool {
    point.x >= rect.x
        && point.x < rect.x + rect.width
        && point.y >= rect.y
        && point.y < rect.y + rect.height
}

impl Layout {
    pub fn compute(slide_count: usize, controls: &ControlsConfig) -> Layout {
        let width = RENDER_WIDTH as f32;
        let height = RENDER_HEIGHT as f32;
        let full = Rectangle::new(0.0, 0.0, width, height);

        let button_y = (height - BUTTON_SIZE) * 0.5;
        let (prev_button, next_button) = if controls.buttons {
            (
                Some(Rectangle::new(BUTTON_MARGIN, button_y, BUTTON_SIZE, BUTTON_SIZE)),
                Some(Rectangle::new(width - BUTTON_MARGIN - BUTTON_SIZE, button_y, BUTTON_SIZE, BUTTON_SIZE)),
            )
        } else {
            (None, None)
        };

        // Centered row of dots near the bottom edge
        let indicators = if controls.indicators {
            let row_width = slide_count as f32 * INDICATOR_SIZE
                + slide_count.saturating_sub(1) as f32 * INDICATOR_SPACING;
            let start_x = (width - row_width) * 0.5;
            let y = height - INDICATOR_BOTTOM_MARGIN - INDICATOR_SIZE;
            (0..slide_count)
                .map(|i| {
                    let x = start_x + i as f32 * (INDICATOR_SIZE + INDICATOR_SPACING);
                    Rectangle::new(x, y, INDICATOR_SIZE, INDICATOR_SIZE)
                })
                .collect()
        } else {
            Vec::new()
        };

        Layout {
            prev_button,
            next_button,
            indicators,
            swipe_region: controls.swipe.then_some(full),
            hover_region: controls.pause_on_hover.then_some(full),
        }
    }

    /// The control under `point`, buttons first.
    pub fn hit(&self, point: Vector2) -> Option<SliderInput> {
        if self.prev_button.is_some_and(|r| contains(&r, point)) {
            return Some(SliderInput::PrevButton);
        }
        if self.next_button.is_some_and(|r| contains(&r, point)) {
            return Some(SliderInput::NextButton);
        }
        self.indicators
            .iter()
            .position(|r| contains(r, point))
            .map(SliderInput::Indicator)
    }

    pub fn in_swipe_region(&self, point: Vector2) -> bool {
        self.swipe_region.is_some_and(|r| contains(&r, point))
    }

    pub fn in_hover_region(&self, point: Vector2) -> bool {
        self.hover_region.is_some_and(|r| contains(&r, point))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn center(r: &Rectangle) -> Vector2 {
        Vector2::new(r.x + r.width * 0.5, r.y + r.height * 0.5)
    }

    #[test]
    fn one_indicator_per_slide_in_order() {
        let layout = Layout::compute(4, &ControlsConfig::default());
        assert_eq!(layout.indicators.len(), 4);
        for pair in layout.indicators.windows(2) {
            assert!(pair[0].x < pair[1].x);
        }
        for (i, dot) in layout.indicators.iter().enumerate() {
            assert_eq!(layout.hit(center(dot)), Some(SliderInput::Indicator(i)));
        }
    }

    #[test]
    fn buttons_hit_before_anything_else() {
        let layout = Layout::compute(3, &ControlsConfig::default());
        let prev = layout.prev_button.unwrap();
        let next = layout.next_button.unwrap();
        assert_eq!(layout.hit(center(&prev)), Some(SliderInput::PrevButton));
        assert_eq!(layout.hit(center(&next)), Some(SliderInput::NextButton));
        assert_eq!(layout.hit(Vector2::new(RENDER_WIDTH as f32 * 0.5, 100.0)), None);
    }

    #[test]
    fn absent_controls_disable_only_their_source() {
        let controls = ControlsConfig {
            buttons: false,
            swipe: false,
            ..ControlsConfig::default()
        };
        let layout = Layout::compute(2, &controls);
        assert!(layout.prev_button.is_none() && layout.next_button.is_none());
        assert!(!layout.in_swipe_region(Vector2::new(10.0, 10.0)));
        assert!(layout.in_hover_region(Vector2::new(10.0, 10.0)));
        assert_eq!(layout.hit(center(&layout.indicators[1])), Some(SliderInput::Indicator(1)));
    }

    #[test]
    fn pointer_outside_render_area_is_outside_regions() {
        let layout = Layout::compute(1, &ControlsConfig::default());
        assert!(!layout.in_hover_region(Vector2::new(-1.0, 5.0)));
        assert!(!layout.in_swipe_region(Vector2::new(5.0, RENDER_HEIGHT as f32)));
    }
}
