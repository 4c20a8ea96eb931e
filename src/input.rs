//! Slider inputs and the gesture recognizers that produce them.

/// Horizontal direction of a recognized swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,  // Finger moved toward the left edge: show the next slide
    Right, // Finger moved toward the right edge: show the previous slide
}

/// One input event routed to the slider controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliderInput {
    PrevButton,
    NextButton,
    Indicator(usize),
    ArrowLeft,
    ArrowRight,
    Swipe(SwipeDirection),
    PointerEntered,
    PointerLeft,
}

impl SliderInput {
    /// Manual navigation restarts the autoplay countdown; hover does not.
    pub fn is_manual(&self) -> bool {
        !matches!(self, SliderInput::PointerEntered | SliderInput::PointerLeft)
    }

    pub fn source(&self) -> &'static str {
        match self {
            SliderInput::PrevButton => "prev_button",
            SliderInput::NextButton => "next_button",
            SliderInput::Indicator(_) => "indicator",
            SliderInput::ArrowLeft => "arrow_left",
            SliderInput::ArrowRight => "arrow_right",
            SliderInput::Swipe(_) => "swipe",
            SliderInput::PointerEntered => "pointer_entered",
            SliderInput::PointerLeft => "pointer_left",
        }
    }
}

/// Turns a touch start / touch end pair into a swipe.
#[derive(Debug, Clone)]
pub struct SwipeTracker {
    threshold: f32,
    start_x: Option<f32>,
}

impl SwipeTracker {
    pub fn new(threshold: f32) -> Self {
        Self { threshold, start_x: None }
    }

    pub fn touch_start(&mut self, x: f32) {
        self.start_x = Some(x);
    }

    /// Travel must strictly exceed the threshold; shorter movements are taps.
    pub fn touch_end(&mut self, x: f32) -> Option<SwipeDirection> {
        let start = self.start_x.take()?;
        if x < start - self.threshold {
            Some(SwipeDirection::Left)
        } else if x > start + self.threshold {
            Some(SwipeDirection::Right)
        } else {
            None
        }
    }
}

/// Edge detector for the pointer entering and leaving a region.
#[derive(Debug, Clone, Default)]
pub struct HoverTracker {
    inside: bool,
}

impl HoverTracker {
    pub fn update(&mut self, inside: bool) -> Option<SliderInput> {
        if inside == self.inside {
            return None;
        }
        self.inside = inside;
        Some(if inside { SliderInput::PointerEntered } else { SliderInput::PointerLeft })
    }
}
