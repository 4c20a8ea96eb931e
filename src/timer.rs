/// Repeating task driven by frame delta time. Holding one in an `Option`
/// is the only way the slider schedules autoplay, so dropping it cancels it.
#[derive(Debug, Clone, PartialEq)]
pub struct AutoplayTask {
    interval: f32,
    elapsed: f32,
}

impl AutoplayTask {
    pub fn new(interval: f32) -> Self {
        Self { interval, elapsed: 0.0 }
    }

    /// Advance the countdown by `dt` seconds. Returns true when the task fires.
    ///
    /// Fires at most once per call; the overshoot past a whole interval is
    /// kept as the phase of the next countdown.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.elapsed += dt.max(0.0);
        if self.elapsed >= self.interval {
            self.elapsed %= self.interval;
            true
        } else {
            false
        }
    }

    pub fn interval(&self) -> f32 {
        self.interval
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn remaining(&self) -> f32 {
        (self.interval - self.elapsed()).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_interval_has_elapsed() {
        let mut task = AutoplayTask::new(5.0);
        assert!(!task.tick(2.0));
        assert!(!task.tick(2.5));
        assert!(task.tick(0.5));
        assert!(task.elapsed() < 0.001);
    }

    #[test]
    fn stall_fires_once_and_keeps_phase() {
        let mut task = AutoplayTask::new(5.0);
        assert!(task.tick(12.0));
        assert!((task.elapsed() - 2.0).abs() < 1e-4);
        assert!((task.remaining() - 3.0).abs() < 1e-4);
    }

    #[test]
    fn negative_delta_is_ignored() {
        let mut task = AutoplayTask::new(1.0);
        assert!(!task.tick(-3.0));
        assert_eq!(task.elapsed(), 0.0);
    }
}
