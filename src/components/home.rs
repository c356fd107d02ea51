//! Main screen rendering
//!
//! Lays out the entry, result panel, quote bar and help bar.

use crate::component::Component;
use crate::components::{calculate_main_layout, InputComponent, QuoteComponent, ResultPanel};
use anyhow::Result;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the home screen
pub fn draw_home_screen(
    frame: &mut Frame,
    area: Rect,
    input: &mut InputComponent,
    result: &mut ResultPanel,
    quote: &mut QuoteComponent,
) -> Result<()> {
    let layout = calculate_main_layout(area);

    input.draw(frame, layout.input)?;
    result.draw(frame, layout.result)?;
    quote.draw(frame, layout.quote)?;
    render_help_bar(frame, layout.help);

    Ok(())
}

fn key_hint(key: &'static str, color: Color) -> Span<'static> {
    Span::styled(
        key,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )
}

fn render_help_bar(frame: &mut Frame, area: Rect) {
    let help_spans = vec![
        key_hint(" Enter ", Color::Green),
        Span::raw("Analyze  "),
        key_hint(" Ctrl+r ", Color::Red),
        Span::raw("Reset  "),
        key_hint(" PgUp/PgDn ", Color::Cyan),
        Span::raw("Scroll  "),
        key_hint(" F1 ", Color::Cyan),
        Span::raw("Help  "),
        key_hint(" Esc ", Color::Yellow),
        Span::raw("Quit"),
    ];

    let paragraph = Paragraph::new(Line::from(help_spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}
