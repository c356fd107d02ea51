//! Splash screen component
//!
//! Shows the title briefly before the entry screen. The banner fades in
//! the same way results do.

use crate::action::Action;
use crate::component::Component;
use crate::model::Fade;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};

const BANNER_RGB: (u8, u8, u8) = (80, 200, 120);

const BANNER: &[&str] = &[
    r" ___  ___ _ __ | |_(_)_ __ ___   ___ _ __ | |_ ",
    r"/ __|/ _ \ '_ \| __| | '_ ` _ \ / _ \ '_ \| __|",
    r"\__ \  __/ | | | |_| | | | | | |  __/ | | | |_ ",
    r"|___/\___|_| |_|\__|_|_| |_| |_|\___|_| |_|\__|",
];

/// Splash screen component
pub struct SplashComponent {
    /// When the splash screen was shown
    start_time: Option<Instant>,
    /// Duration to show splash before auto-advancing
    duration: Duration,
    fade: Fade,
}

impl SplashComponent {
    pub fn new(fade_step: Duration) -> Self {
        Self {
            start_time: None,
            duration: Duration::from_millis(1500),
            fade: Fade::new(fade_step),
        }
    }

    /// Check if splash duration has elapsed
    pub fn is_complete(&self) -> bool {
        self.start_time
            .map(|t| t.elapsed() >= self.duration)
            .unwrap_or(false)
    }
}

impl Component for SplashComponent {
    fn init(&mut self) -> Result<()> {
        let now = Instant::now();
        self.start_time = Some(now);
        self.fade.start(now);
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        // Any key press skips the splash screen
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Ok(Some(Action::ForceQuit))
            }
            _ => Ok(Some(Action::SplashComplete)),
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        if action == Action::Tick {
            self.fade.tick(Instant::now());
            if self.is_complete() {
                return Ok(Some(Action::SplashComplete));
            }
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        frame.render_widget(Clear, area);

        let banner_height = BANNER.len() as u16;
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length((area.height.saturating_sub(banner_height + 3)) / 2),
                Constraint::Length(banner_height),
                Constraint::Length(2),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(area);

        let banner_style = Style::default()
            .fg(self.fade.apply(BANNER_RGB))
            .add_modifier(Modifier::BOLD);
        let banner: Vec<Line> = BANNER
            .iter()
            .map(|line| Line::from(Span::styled(*line, banner_style)))
            .collect();

        frame.render_widget(
            Paragraph::new(banner).alignment(Alignment::Center),
            chunks[1],
        );

        let subtitle = Line::from(Span::styled(
            "How does your text feel?",
            Style::default().fg(Color::DarkGray),
        ));
        frame.render_widget(
            Paragraph::new(subtitle)
                .alignment(Alignment::Center)
                .block(Block::default()),
            chunks[3],
        );

        Ok(())
    }
}
