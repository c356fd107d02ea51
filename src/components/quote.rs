//! Quote bar component

use crate::action::Action;
use crate::component::Component;
use crate::model::QuoteRotator;
use anyhow::Result;
use rand::thread_rng;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use std::time::{Duration, Instant};

/// Shows a random quote, replaced every rotation interval
pub struct QuoteComponent {
    rotator: QuoteRotator,
}

impl QuoteComponent {
    pub fn new(interval: Duration) -> Self {
        Self {
            rotator: QuoteRotator::new(interval),
        }
    }

    pub fn current(&self) -> Option<&'static str> {
        self.rotator.current()
    }
}

impl Component for QuoteComponent {
    fn init(&mut self) -> Result<()> {
        self.rotator.start(Instant::now(), &mut thread_rng());
        Ok(())
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        if action == Action::Tick {
            self.rotator.tick(Instant::now(), &mut thread_rng());
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let text = self.rotator.current().unwrap_or_default();

        let paragraph = Paragraph::new(Line::from(Span::styled(
            text,
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::ITALIC),
        )))
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

        frame.render_widget(paragraph, area);
        Ok(())
    }
}
