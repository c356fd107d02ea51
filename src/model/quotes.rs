//! Rotating motivational quotes

use rand::Rng;
use std::time::{Duration, Instant};

pub const QUOTES: &[&str] = &[
    "\u{201c}Believe you can and you're halfway there.\u{201d} - Theodore Roosevelt",
    "\u{201c}The only way to do great work is to love what you do.\u{201d} - Steve Jobs",
    "\u{201c}It does not matter how slowly you go as long as you do not stop.\u{201d} - Confucius",
    "\u{201c}Success is not final, failure is not fatal: It is the courage to continue that counts.\u{201d} - Winston Churchill",
    "\u{201c}Don't watch the clock; do what it does. Keep going.\u{201d} - Sam Levenson",
];

/// Picks a random quote every `interval`
#[derive(Debug, Clone)]
pub struct QuoteRotator {
    current: Option<usize>,
    interval: Duration,
    shown_at: Option<Instant>,
}

impl QuoteRotator {
    pub fn new(interval: Duration) -> Self {
        Self {
            current: None,
            interval,
            shown_at: None,
        }
    }

    /// The quote on display, if rotation has started
    pub fn current(&self) -> Option<&'static str> {
        self.current.map(|i| QUOTES[i])
    }

    /// Show the first quote
    pub fn start<R: Rng>(&mut self, now: Instant, rng: &mut R) {
        self.show_next(now, rng);
    }

    /// Rotate once the interval has elapsed. Returns true when the quote changed.
    pub fn tick<R: Rng>(&mut self, now: Instant, rng: &mut R) -> bool {
        match self.shown_at {
            Some(shown_at) if now.duration_since(shown_at) >= self.interval => {
                self.show_next(now, rng);
                true
            }
            _ => false,
        }
    }

    fn show_next<R: Rng>(&mut self, now: Instant, rng: &mut R) {
        self.current = Some(rng.gen_range(0..QUOTES.len()));
        self.shown_at = Some(now);
    }
}
