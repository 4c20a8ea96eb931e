use raylib::prelude::*;

use crate::controller::ActiveMarker;

/// Dot paired with one slide. Hidden indicators still track the marker.
pub struct Indicator {
    bounds: Option<Rectangle>,
    active: bool,
}

impl Indicator {
    pub fn new(bounds: Option<Rectangle>) -> Self {
        Self { bounds, active: false }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle) {
        let Some(bounds) = self.bounds else {
            return;
        };
        let radius = bounds.width * 0.5;
        let center = Vector2::new(bounds.x + radius, bounds.y + bounds.height * 0.5);
        if self.active {
            d.draw_circle_v(center, radius, Color::WHITE);
        } else {
            d.draw_circle_v(center, radius, Color::new(255, 255, 255, 90));
            d.draw_circle_lines(center.x as i32, center.y as i32, radius, Color::WHITE);
        }
    }
}

impl ActiveMarker for Indicator {
    fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    fn is_active(&self) -> bool {
        self.active
    }
}
