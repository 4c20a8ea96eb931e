use raylib::prelude::*;

use crate::constants::*;
use crate::hero::layout::Layout;
use crate::input::{HoverTracker, SliderInput, SwipeTracker};

/// Raw pointer and keyboard state sampled once per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputFrame {
    pub pointer: Vector2, // Window pixels, last known when off screen
    pub screen: Vector2,  // Window size in pixels
    pub on_screen: bool,
    pub pressed: bool,
    pub released: bool,
    pub arrow_left: bool,
    pub arrow_right: bool,
}

impl InputFrame {
    pub fn sample(rl: &RaylibHandle) -> Self {
        Self {
            pointer: rl.get_mouse_position(),
            screen: Vector2::new(rl.get_screen_width() as f32, rl.get_screen_height() as f32),
            on_screen: rl.is_cursor_on_screen(),
            pressed: rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT),
            released: rl.is_mouse_button_released(MouseButton::MOUSE_BUTTON_LEFT),
            arrow_left: rl.is_key_pressed(KeyboardKey::KEY_LEFT),
            arrow_right: rl.is_key_pressed(KeyboardKey::KEY_RIGHT),
        }
    }

    /// The pointer in render-texture coordinates (the window shows the
    /// render texture stretched to its full size).
    pub fn render_point(&self) -> Vector2 {
        if self.screen.x <= 0.0 || self.screen.y <= 0.0 {
            return Vector2::new(-1.0, -1.0);
        }
        Vector2::new(
            self.pointer.x * RENDER_WIDTH as f32 / self.screen.x,
            self.pointer.y * RENDER_HEIGHT as f32 / self.screen.y,
        )
    }
}

/// Owns every listener the slider reacts to and turns a frame of raw input
/// into slider inputs, in dispatch order.
pub struct InputRouter {
    layout: Layout,
    swipe: SwipeTracker,
    hover: HoverTracker,
    pressed_on: Option<SliderInput>, // Control under the pointer at press time
}

impl InputRouter {
    pub fn new(layout: Layout, swipe_threshold: f32) -> Self {
        Self {
            layout,
            swipe: SwipeTracker::new(swipe_threshold),
            hover: HoverTracker::default(),
            pressed_on: None,
        }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn poll(&mut self, rl: &RaylibHandle) -> Vec<SliderInput> {
        self.route(InputFrame::sample(rl))
    }

    pub fn route(&mut self, frame: InputFrame) -> Vec<SliderInput> {
        let point = frame.render_point();
        let mut inputs = Vec::new();

        if self.layout.hover_region.is_some() {
            let inside = frame.on_screen && self.layout.in_hover_region(point);
            inputs.extend(self.hover.update(inside));
        }

        if frame.pressed {
            self.pressed_on = self.layout.hit(point);
            if self.layout.in_swipe_region(point) {
                self.swipe.touch_start(frame.pointer.x);
            }
        }
        // A click lands on release over the control it started on; a swipe wins over it
        if frame.released {
            let pressed_on = self.pressed_on.take();
            match self.swipe.touch_end(frame.pointer.x) {
                Some(direction) => inputs.push(SliderInput::Swipe(direction)),
                None => {
                    if pressed_on.is_some() && pressed_on == self.layout.hit(point) {
                        inputs.extend(pressed_on);
                    }
                }
            }
        }

        // Arrow keys act window-wide, wherever the pointer is
        if frame.arrow_left {
            inputs.push(SliderInput::ArrowLeft);
        }
        if frame.arrow_right {
            inputs.push(SliderInput::ArrowRight);
        }
        inputs
    }
}
