//! Fade-in animation state
//!
//! Opacity rises from 0.0 to 1.0 in tenths, one step per elapsed period.
//! Colors are blended toward the terminal background (black) by opacity.

use ratatui::style::Color;
use std::time::{Duration, Instant};

const STEPS: u8 = 10;

#[derive(Debug, Clone)]
pub struct Fade {
    /// Current opacity in tenths
    level: u8,
    step: Duration,
    last_step: Option<Instant>,
}

impl Fade {
    /// A fade that is already complete
    pub fn new(step: Duration) -> Self {
        Self {
            level: STEPS,
            step,
            last_step: None,
        }
    }

    /// Restart from fully transparent
    pub fn start(&mut self, now: Instant) {
        self.level = 0;
        self.last_step = Some(now);
    }

    /// Advance by however many steps have elapsed since the last one
    pub fn tick(&mut self, now: Instant) {
        let Some(mut last) = self.last_step else {
            return;
        };

        while self.level < STEPS && now.duration_since(last) >= self.step {
            self.level += 1;
            last += self.step;
        }

        self.last_step = if self.level < STEPS { Some(last) } else { None };
    }

    pub fn opacity(&self) -> f64 {
        f64::from(self.level) / f64::from(STEPS)
    }

    pub fn is_complete(&self) -> bool {
        self.level >= STEPS
    }

    /// Blend an RGB color toward black by the current opacity
    pub fn apply(&self, (r, g, b): (u8, u8, u8)) -> Color {
        let scale = |c: u8| (f64::from(c) * self.opacity()).round() as u8;
        Color::Rgb(scale(r), scale(g), scale(b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STEP: Duration = Duration::from_millis(50);

    #[test]
    fn test_new_fade_is_complete() {
        let fade = Fade::new(STEP);
        assert!(fade.is_complete());
        assert_eq!(fade.opacity(), 1.0);
    }

    #[test]
    fn test_fade_steps_by_tenths() {
        let start = Instant::now();
        let mut fade = Fade::new(STEP);
        fade.start(start);
        assert_eq!(fade.opacity(), 0.0);

        fade.tick(start + Duration::from_millis(49));
        assert_eq!(fade.opacity(), 0.0);

        fade.tick(start + Duration::from_millis(50));
        assert_eq!(fade.opacity(), 0.1);

        fade.tick(start + Duration::from_millis(175));
        assert_eq!(fade.opacity(), 0.3);
    }

    #[test]
    fn test_fade_completes_and_stops() {
        let start = Instant::now();
        let mut fade = Fade::new(STEP);
        fade.start(start);

        fade.tick(start + Duration::from_secs(5));
        assert!(fade.is_complete());
        assert_eq!(fade.opacity(), 1.0);

        fade.tick(start + Duration::from_secs(10));
        assert_eq!(fade.opacity(), 1.0);
    }

    #[test]
    fn test_apply_blends_toward_black() {
        let start = Instant::now();
        let mut fade = Fade::new(STEP);
        assert_eq!(fade.apply((200, 100, 50)), Color::Rgb(200, 100, 50));

        fade.start(start);
        assert_eq!(fade.apply((200, 100, 50)), Color::Rgb(0, 0, 0));

        fade.tick(start + Duration::from_millis(250));
        assert_eq!(fade.apply((200, 100, 50)), Color::Rgb(100, 50, 25));
    }
}
