//! Single-line text entry

use crate::action::Action;
use crate::component::Component;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthChar;

/// Text entry with a character cursor
#[derive(Debug, Default)]
pub struct InputComponent {
    value: String,
    /// Cursor position in characters, 0..=len
    cursor: usize,
}

impl InputComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    /// Byte offset of the given character index
    fn byte_index(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    pub fn insert(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_index(self.cursor);
        self.value.remove(at);
    }

    pub fn delete(&mut self) {
        if self.cursor < self.char_count() {
            let at = self.byte_index(self.cursor);
            self.value.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_count());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    /// Characters that fit in `width` columns with the cursor kept visible.
    ///
    /// Returns the first visible character index and the visible characters.
    fn visible_window(&self, width: usize) -> (usize, Vec<char>) {
        let chars: Vec<char> = self.value.chars().collect();
        let char_width = |c: &char| c.width().unwrap_or(0);

        // One column is reserved for the cursor cell
        let budget = width.saturating_sub(1);
        let mut start = self.cursor;
        let mut used = 0;
        while start > 0 {
            let w = char_width(&chars[start - 1]);
            if used + w > budget {
                break;
            }
            used += w;
            start -= 1;
        }

        let mut visible = Vec::new();
        let mut total = 0;
        for c in &chars[start..] {
            let w = char_width(c);
            if total + w > width {
                break;
            }
            total += w;
            visible.push(*c);
        }

        (start, visible)
    }
}

impl Component for InputComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            let action = match key.code {
                KeyCode::Char('a') => Some(Action::CursorHome),
                KeyCode::Char('e') => Some(Action::CursorEnd),
                _ => None,
            };
            return Ok(action);
        }

        let action = match key.code {
            KeyCode::Enter => Some(Action::Analyze),
            KeyCode::Char(c) => Some(Action::InputChar(c)),
            KeyCode::Backspace => Some(Action::InputBackspace),
            KeyCode::Delete => Some(Action::InputDelete),
            KeyCode::Left => Some(Action::CursorLeft),
            KeyCode::Right => Some(Action::CursorRight),
            KeyCode::Home => Some(Action::CursorHome),
            KeyCode::End => Some(Action::CursorEnd),
            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::InputChar(c) => self.insert(c),
            Action::InputBackspace => self.backspace(),
            Action::InputDelete => self.delete(),
            Action::CursorLeft => self.move_left(),
            Action::CursorRight => self.move_right(),
            Action::CursorHome => self.move_home(),
            Action::CursorEnd => self.move_end(),
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let inner_width = area.width.saturating_sub(2) as usize;
        let (start, visible) = self.visible_window(inner_width);
        let cursor_offset = self.cursor() - start;

        let before: String = visible.iter().take(cursor_offset).collect();
        let at_cursor = visible
            .get(cursor_offset)
            .map(|c| c.to_string())
            .unwrap_or_else(|| " ".to_string());
        let after: String = visible.iter().skip(cursor_offset + 1).collect();

        let line = Line::from(vec![
            Span::styled(before, Style::default().fg(Color::White)),
            Span::styled(
                at_cursor,
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(after, Style::default().fg(Color::White)),
        ]);

        let paragraph = Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Enter text ")
                .title_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
        );

        frame.render_widget(paragraph, area);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str) -> InputComponent {
        let mut input = InputComponent::new();
        for c in text.chars() {
            input.insert(c);
        }
        input
    }

    #[test]
    fn test_insert_and_backspace() {
        let mut input = typed("helo");
        input.move_left();
        input.insert('l');
        assert_eq!(input.value(), "hello");
        assert_eq!(input.cursor(), 4);

        input.move_end();
        input.backspace();
        assert_eq!(input.value(), "hell");
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut input = typed("ab");
        input.move_home();
        input.backspace();
        assert_eq!(input.value(), "ab");
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn test_delete_under_cursor() {
        let mut input = typed("abc");
        input.move_home();
        input.delete();
        assert_eq!(input.value(), "bc");
        input.move_end();
        input.delete();
        assert_eq!(input.value(), "bc");
    }

    #[test]
    fn test_multibyte_editing() {
        let mut input = typed("caf\u{e9}!");
        input.move_left();
        input.backspace();
        assert_eq!(input.value(), "caf!");
        input.insert('\u{e8}');
        assert_eq!(input.value(), "caf\u{e8}!");
    }

    #[test]
    fn test_cursor_is_bounded() {
        let mut input = typed("ab");
        input.move_right();
        assert_eq!(input.cursor(), 2);
        input.move_home();
        input.move_left();
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn test_clear() {
        let mut input = typed("text");
        input.clear();
        assert_eq!(input.value(), "");
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn test_visible_window_follows_cursor() {
        let input = typed("abcdefghij");
        let (start, visible) = input.visible_window(5);
        assert_eq!(start, 6);
        assert_eq!(visible, vec!['g', 'h', 'i', 'j']);

        let mut input = input;
        input.move_home();
        let (start, visible) = input.visible_window(5);
        assert_eq!(start, 0);
        assert_eq!(visible, vec!['a', 'b', 'c', 'd', 'e']);
    }

    #[test]
    fn test_key_mapping() {
        let mut input = InputComponent::new();
        let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        let ch = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::SHIFT);
        let home = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL);
        assert_eq!(input.handle_key_event(enter).unwrap(), Some(Action::Analyze));
        assert_eq!(input.handle_key_event(ch).unwrap(), Some(Action::InputChar('x')));
        assert_eq!(input.handle_key_event(home).unwrap(), Some(Action::CursorHome));
    }
}
