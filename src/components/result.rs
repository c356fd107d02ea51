//! Result panel component
//!
//! Shows the last analysis (or the scorer error) and fades it in whenever
//! new content arrives.

use crate::action::Action;
use crate::component::Component;
use crate::model::Fade;
use crate::sentiment::{Label, SentimentResult};
use anyhow::Result;
use ratatui::{
    layout::{Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap},
    Frame,
};
use std::time::{Duration, Instant};

const TEXT_RGB: (u8, u8, u8) = (230, 230, 230);
const POSITIVE_RGB: (u8, u8, u8) = (80, 200, 120);
const NEGATIVE_RGB: (u8, u8, u8) = (230, 80, 80);
const NEUTRAL_RGB: (u8, u8, u8) = (160, 160, 160);

/// What the panel currently displays
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PanelContent {
    #[default]
    Empty,
    Analysis(SentimentResult),
    Error(String),
}

pub struct ResultPanel {
    content: PanelContent,
    fade: Fade,
    scroll_offset: usize,
    /// Inner height seen at the last draw, used for page scrolling
    page_height: usize,
}

impl ResultPanel {
    pub fn new(fade_step: Duration) -> Self {
        Self {
            content: PanelContent::Empty,
            fade: Fade::new(fade_step),
            scroll_offset: 0,
            page_height: 1,
        }
    }

    pub fn content(&self) -> &PanelContent {
        &self.content
    }

    pub fn show_result(&mut self, result: SentimentResult, now: Instant) {
        self.set_content(PanelContent::Analysis(result), now);
    }

    pub fn show_error(&mut self, message: String, now: Instant) {
        self.set_content(PanelContent::Error(message), now);
    }

    pub fn clear(&mut self) {
        self.content = PanelContent::Empty;
        self.scroll_offset = 0;
    }

    fn set_content(&mut self, content: PanelContent, now: Instant) {
        self.content = content;
        self.scroll_offset = 0;
        self.fade.start(now);
    }

    pub fn tick(&mut self, now: Instant) {
        self.fade.tick(now);
    }

    fn label_rgb(label: Label) -> (u8, u8, u8) {
        match label {
            Label::Positive => POSITIVE_RGB,
            Label::Negative => NEGATIVE_RGB,
            Label::Neutral => NEUTRAL_RGB,
        }
    }

    fn build_lines(&self) -> Vec<Line<'static>> {
        let text_style = Style::default().fg(self.fade.apply(TEXT_RGB));

        match &self.content {
            PanelContent::Empty => vec![Line::from(Span::styled(
                "Type some text and press Enter to analyze it.",
                Style::default().fg(Color::DarkGray),
            ))],
            PanelContent::Error(message) => vec![
                Line::from(Span::styled(
                    "Analysis failed",
                    Style::default()
                        .fg(self.fade.apply(NEGATIVE_RGB))
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(Span::styled(message.clone(), text_style)),
            ],
            PanelContent::Analysis(result) => {
                let label_style = Style::default()
                    .fg(self.fade.apply(Self::label_rgb(result.label)))
                    .add_modifier(Modifier::BOLD);

                // First line carries the colored label, the rest is the plain message
                let message = result.display_message();
                let mut lines = message.lines();
                let mut out = Vec::new();
                if lines.next().is_some() {
                    out.push(Line::from(vec![
                        Span::styled("Sentiment: ", text_style),
                        Span::styled(result.label.as_str(), label_style),
                    ]));
                }
                out.extend(
                    lines.map(|line| Line::from(Span::styled(line.to_string(), text_style))),
                );
                out
            }
        }
    }
}

impl Component for ResultPanel {
    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        let page = self.page_height.max(1);
        match action {
            Action::PageUp => self.scroll_offset = self.scroll_offset.saturating_sub(page),
            Action::PageDown => self.scroll_offset = self.scroll_offset.saturating_add(page),
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let inner_width = area.width.saturating_sub(2);
        let inner_height = area.height.saturating_sub(2) as usize;
        self.page_height = inner_height;

        // Row count comes from the word wrapper before the block adds borders
        let paragraph = Paragraph::new(self.build_lines()).wrap(Wrap { trim: false });
        let max_scroll = paragraph
            .line_count(inner_width)
            .saturating_sub(inner_height);
        if self.scroll_offset > max_scroll {
            self.scroll_offset = max_scroll;
        }

        let border_color = match &self.content {
            PanelContent::Error(_) => Color::Red,
            _ => Color::Cyan,
        };

        let paragraph = paragraph
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border_color))
                    .title(" Analysis ")
                    .title_style(
                        Style::default()
                            .fg(border_color)
                            .add_modifier(Modifier::BOLD),
                    ),
            )
            .scroll((self.scroll_offset as u16, 0));

        frame.render_widget(paragraph, area);

        if max_scroll > 0 {
            let mut scrollbar_state = ScrollbarState::new(max_scroll).position(self.scroll_offset);

            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .begin_symbol(Some("↑"))
                    .end_symbol(Some("↓")),
                area.inner(Margin {
                    vertical: 1,
                    horizontal: 0,
                }),
                &mut scrollbar_state,
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentiment::explain::explanation;
    use ratatui::{backend::TestBackend, Terminal};

    const STEP: Duration = Duration::from_millis(50);

    fn sample_result() -> SentimentResult {
        SentimentResult {
            label: Label::Positive,
            polarity: 0.625,
            subjectivity: 0.6,
            explanation: "The sentiment of the text is positive.".to_string(),
        }
    }

    fn render(panel: &mut ResultPanel, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| {
                panel.draw(frame, frame.area()).unwrap();
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_new_content_starts_fade() {
        let now = Instant::now();
        let mut panel = ResultPanel::new(STEP);
        panel.show_result(sample_result(), now);
        assert_eq!(panel.fade.opacity(), 0.0);

        panel.tick(now + Duration::from_millis(500));
        assert!(panel.fade.is_complete());
    }

    #[test]
    fn test_clear_resets_content() {
        let mut panel = ResultPanel::new(STEP);
        panel.show_error("scoring unavailable: gone".to_string(), Instant::now());
        panel.clear();
        assert_eq!(panel.content(), &PanelContent::Empty);
    }

    #[test]
    fn test_renders_display_message() {
        let mut panel = ResultPanel::new(STEP);
        panel.show_result(sample_result(), Instant::now());
        let screen = render(&mut panel, 60, 12);
        assert!(screen.contains("Sentiment: Positive"));
        assert!(screen.contains("Polarity: 0.63"));
        assert!(screen.contains("Subjectivity: 0.60"));
    }

    #[test]
    fn test_renders_error() {
        let mut panel = ResultPanel::new(STEP);
        panel.show_error("scoring unavailable: no lexicon".to_string(), Instant::now());
        let screen = render(&mut panel, 60, 8);
        assert!(screen.contains("Analysis failed"));
        assert!(screen.contains("scoring unavailable: no lexicon"));
    }

    #[test]
    fn test_page_down_is_clamped_on_draw() {
        let mut panel = ResultPanel::new(STEP);
        panel.show_result(sample_result(), Instant::now());
        render(&mut panel, 60, 12);
        panel.update(Action::PageDown).unwrap();
        panel.update(Action::PageDown).unwrap();
        render(&mut panel, 60, 12);
        // Everything fits, so there is nothing to scroll
        assert_eq!(panel.scroll_offset, 0);
    }

    #[test]
    fn test_page_down_reaches_end_of_word_wrapped_message() {
        let mut panel = ResultPanel::new(STEP);
        panel.show_result(
            SentimentResult {
                explanation: explanation(Label::Positive, 0.625, 0.6),
                ..sample_result()
            },
            Instant::now(),
        );

        let mut screen = render(&mut panel, 17, 8);
        assert!(screen.contains("Sentiment:"));
        assert!(!screen.contains("content."));

        for _ in 0..60 {
            panel.update(Action::PageDown).unwrap();
            screen = render(&mut panel, 17, 8);
        }
        assert!(screen.contains("content."), "end of message not shown: {screen}");
        assert!(!screen.contains("Sentiment:"));
    }

    #[test]
    fn test_page_up_returns_to_top() {
        let mut panel = ResultPanel::new(STEP);
        panel.show_result(
            SentimentResult {
                explanation: explanation(Label::Positive, 0.625, 0.6),
                ..sample_result()
            },
            Instant::now(),
        );
        render(&mut panel, 17, 8);
        for _ in 0..5 {
            panel.update(Action::PageDown).unwrap();
            render(&mut panel, 17, 8);
        }
        assert!(panel.scroll_offset > 0);

        for _ in 0..60 {
            panel.update(Action::PageUp).unwrap();
        }
        assert_eq!(panel.scroll_offset, 0);
        assert!(render(&mut panel, 17, 8).contains("Sentiment:"));
    }
}
