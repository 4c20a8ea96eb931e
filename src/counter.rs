use crate::constants::COUNTER_STEPS;

/// A statistic that counts up from zero to its value once, frame by frame.
#[derive(Debug, Clone)]
pub struct StatCounter {
    text: String,
    label: String,
    target: Option<u64>,
    current: f64,
    started: bool,
    finished: bool,
    display: String,
}

impl StatCounter {
    pub fn new(text: &str, label: &str) -> Self {
        let text = text.trim().to_string();
        Self {
            target: leading_integer(&text),
            display: text.clone(),
            text,
            label: label.to_string(),
            current: 0.0,
            started: false,
            finished: false,
        }
    }

    /// Starts counting. Only the first call has an effect.
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        match self.target {
            Some(_) => self.step(),
            None => self.finished = true,
        }
    }

    /// One animation frame.
    pub fn step(&mut self) {
        if !self.started || self.finished {
            return;
        }
        let Some(target) = self.target else {
            self.finished = true;
            return;
        };

        self.current += target as f64 / COUNTER_STEPS as f64;
        if self.current < target as f64 {
            self.display = (self.current.ceil() as u64).to_string();
        } else {
            self.finished = true;
            self.display = if target >= 1000 && !self.text.contains('+') {
                format!("{}+", group_thousands(target))
            } else {
                self.text.clone()
            };
        }
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

fn leading_integer(text: &str) -> Option<u64> {
    let digits: String = text.chars().take_while(char::is_ascii_digit).collect();
    digits.parse().ok()
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_end(counter: &mut StatCounter) -> usize {
        counter.start();
        let mut frames = 1;
        while !counter.is_finished() {
            counter.step();
            frames += 1;
            assert!(frames < 1000, "counter never finished");
        }
        frames
    }

    #[test]
    fn counts_up_then_restores_text() {
        let mut counter = StatCounter::new("500+", "Happy Customers");
        counter.start();
        assert_eq!(counter.display(), "3");
        let frames = run_to_end(&mut counter);
        assert!(frames >= 199);
        assert_eq!(counter.display(), "500+");
        assert_eq!(counter.label(), "Happy Customers");
    }

    #[test]
    fn large_values_get_grouped_with_plus() {
        let mut counter = StatCounter::new("1500", "Phones Repaired");
        run_to_end(&mut counter);
        assert_eq!(counter.display(), "1,500+");
    }

    #[test]
    fn large_values_with_plus_keep_their_text() {
        let mut counter = StatCounter::new("10000+", "Devices Sold");
        run_to_end(&mut counter);
        assert_eq!(counter.display(), "10000+");
    }

    #[test]
    fn non_numeric_text_never_animates() {
        let mut words = StatCounter::new("Always", "Open");
        words.start();
        assert!(words.is_finished());
        assert_eq!(words.display(), "Always");
    }

    #[test]
    fn leading_number_animates_and_text_is_restored() {
        let mut counter = StatCounter::new("24/7", "Support");
        counter.start();
        assert_eq!(counter.display(), "1");
        run_to_end(&mut counter);
        assert_eq!(counter.display(), "24/7");
    }

    #[test]
    fn start_is_guarded() {
        let mut counter = StatCounter::new("200", "Brands");
        counter.start();
        let shown = counter.display().to_string();
        counter.start();
        assert_eq!(counter.display(), shown);
    }

    #[test]
    fn steps_before_start_do_nothing() {
        let mut counter = StatCounter::new("50", "Years");
        counter.step();
        assert_eq!(counter.display(), "50");
        assert!(!counter.is_finished());
    }

    #[test]
    fn finished_counter_ignores_further_steps() {
        let mut counter = StatCounter::new("40", "Brands");
        run_to_end(&mut counter);
        counter.step();
        assert!(counter.is_finished());
        assert_eq!(counter.display(), "40");
    }

    #[test]
    fn groups_thousands() {
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }
}
