//! The slider state machine: which slide is active and when autoplay fires.

use tracing::{debug, trace};

use crate::error::SliderError;
use crate::input::{SliderInput, SwipeDirection};
use crate::state::SliderState;
use crate::timer::AutoplayTask;

/// A view element that carries the "active" marker.
pub trait ActiveMarker {
    fn set_active(&mut self, active: bool);
    fn is_active(&self) -> bool;
}

/// Cycles through a fixed set of slides with a paired indicator per slide.
///
/// `current_index` in [`SliderState`] is the source of truth; the markers on
/// slides and indicators only mirror it.
pub struct SliderController<S, I> {
    slides: Vec<S>,
    indicators: Vec<I>,
    interval: f32,
    state: SliderState,
}

impl<S: ActiveMarker, I: ActiveMarker> SliderController<S, I> {
    /// Shows the first slide and starts autoplay.
    pub fn new(slides: Vec<S>, indicators: Vec<I>, interval: f32) -> Result<Self, SliderError> {
        if slides.is_empty() {
            return Err(SliderError::Empty);
        }
        if slides.len() != indicators.len() {
            return Err(SliderError::IndicatorMismatch {
                slides: slides.len(),
                indicators: indicators.len(),
            });
        }

        let mut controller = Self {
            slides,
            indicators,
            interval,
            state: SliderState::new(),
        };
        controller.activate(0);
        controller.start_autoplay();
        Ok(controller)
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Always false: construction rejects an empty slide set.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    pub fn is_autoplaying(&self) -> bool {
        self.state.autoplay.is_some()
    }

    /// Seconds until the next automatic advance, if autoplay is running.
    pub fn autoplay_remaining(&self) -> Option<f32> {
        self.state.autoplay.as_ref().map(AutoplayTask::remaining)
    }

    pub fn slides(&self) -> &[S] {
        &self.slides
    }

    /// Per-frame view updates. The active marker is restored afterwards, so
    /// only `activate` decides which slide is active.
    pub fn update_slides(&mut self, mut update: impl FnMut(&mut S)) {
        let current = self.state.current_index;
        for (i, slide) in self.slides.iter_mut().enumerate() {
            update(slide);
            slide.set_active(i == current);
        }
    }

    pub fn indicators(&self) -> &[I] {
        &self.indicators
    }

    /// Marks `index` as the only active slide and indicator.
    pub fn show_slide(&mut self, index: usize) -> Result<(), SliderError> {
        if index >= self.slides.len() {
            return Err(SliderError::IndexOutOfRange { index, len: self.slides.len() });
        }
        self.activate(index);
        Ok(())
    }

    pub fn go_to(&mut self, index: usize) -> Result<(), SliderError> {
        self.show_slide(index)
    }

    pub fn advance(&mut self) {
        let next = (self.state.current_index + 1) % self.slides.len();
        self.activate(next);
    }

    pub fn retreat(&mut self) {
        let len = self.slides.len();
        let prev = (self.state.current_index + len - 1) % len;
        self.activate(prev);
    }

    /// Installs a fresh countdown. A pending task is replaced, never doubled.
    pub fn start_autoplay(&mut self) {
        let task = AutoplayTask::new(self.interval);
        trace!(interval = task.interval(), "autoplay started");
        self.state.autoplay = Some(task);
    }

    pub fn stop_autoplay(&mut self) {
        if self.state.autoplay.take().is_some() {
            trace!("autoplay stopped");
        }
    }

    pub fn restart_autoplay(&mut self) {
        self.stop_autoplay();
        self.start_autoplay();
    }

    /// Advances the autoplay countdown. Returns true when it fired.
    pub fn tick(&mut self, dt: f32) -> bool {
        let fired = match self.state.autoplay.as_mut() {
            Some(task) => task.tick(dt),
            None => false,
        };
        if fired {
            self.advance();
        }
        fired
    }

    /// Applies one routed input. Manual navigation restarts autoplay.
    pub fn handle(&mut self, input: SliderInput) -> Result<(), SliderError> {
        match input {
            SliderInput::PrevButton | SliderInput::ArrowLeft => self.retreat(),
            SliderInput::NextButton | SliderInput::ArrowRight => self.advance(),
            SliderInput::Swipe(SwipeDirection::Left) => self.advance(),
            SliderInput::Swipe(SwipeDirection::Right) => self.retreat(),
            SliderInput::Indicator(index) => self.go_to(index)?,
            SliderInput::PointerEntered => {
                self.stop_autoplay();
                return Ok(());
            }
            SliderInput::PointerLeft => {
                self.start_autoplay();
                return Ok(());
            }
        }
        self.restart_autoplay();
        Ok(())
    }

    fn activate(&mut self, index: usize) {
        debug_assert!(!self.is_empty());
        for slide in self.slides.iter_mut() {
            slide.set_active(false);
        }
        for indicator in self.indicators.iter_mut() {
            indicator.set_active(false);
        }
        self.slides[index].set_active(true);
        self.indicators[index].set_active(true);
        self.state.current_index = index;
        debug!(index, "slide shown");
    }
}
