use crate::timer::AutoplayTask;

/// Mutable state owned by the slider controller.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderState {
    pub current_index: usize,    // Single source of truth for the active slide
    pub autoplay: Option<AutoplayTask>, // Pending repeating advance, if any
}

impl SliderState {
    pub fn new() -> Self {
        Self { current_index: 0, autoplay: None }
    }
}
