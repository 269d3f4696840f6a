use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// A single-line text input with cursor support
///
/// Any printable character is accepted as typed. The cursor counts
/// characters, not bytes, so names with accents, typographic apostrophes
/// or other multi-byte characters edit correctly.
#[derive(Debug, Clone, PartialEq)]
pub struct TextInput {
    pub value: String,

    /// Placeholder text shown when empty
    pub placeholder: String,

    /// Cursor position in characters (0-indexed)
    pub cursor_pos: usize,

    pub is_focused: bool,
}

impl Default for TextInput {
    fn default() -> Self {
        Self::new()
    }
}

impl TextInput {
    pub fn new() -> Self {
        Self {
            value: String::new(),
            placeholder: String::new(),
            cursor_pos: 0,
            is_focused: false,
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self.cursor_pos = self.char_len();
        self
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.is_focused = focused;
    }

    fn char_len(&self) -> usize {
        self.value.chars().count()
    }

    /// Byte offset of the given character index
    fn byte_offset(&self, char_idx: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    /// Handle keyboard input
    ///
    /// Returns true only when the value was edited; cursor movement alone
    /// returns false. Characters chorded with Ctrl or Alt are shortcuts,
    /// not text, and are ignored.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let len = self.char_len();
        match key.code {
            KeyCode::Char(_) if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
                false
            }
            KeyCode::Char(c) => {
                let at = self.byte_offset(self.cursor_pos);
                self.value.insert(at, c);
                self.cursor_pos += 1;
                true
            }
            KeyCode::Backspace if self.cursor_pos > 0 => {
                self.cursor_pos -= 1;
                let at = self.byte_offset(self.cursor_pos);
                self.value.remove(at);
                true
            }
            KeyCode::Delete if self.cursor_pos < len => {
                let at = self.byte_offset(self.cursor_pos);
                self.value.remove(at);
                true
            }
            KeyCode::Left => {
                self.cursor_pos = self.cursor_pos.saturating_sub(1);
                false
            }
            KeyCode::Right => {
                self.cursor_pos = (self.cursor_pos + 1).min(len);
                false
            }
            KeyCode::Home => {
                self.cursor_pos = 0;
                false
            }
            KeyCode::End => {
                self.cursor_pos = len;
                false
            }
            _ => false,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let border_style = if self.is_focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::White)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .style(border_style);

        let display_text = if self.value.is_empty() && !self.is_focused {
            Line::from(self.placeholder.clone()).style(Style::default().fg(Color::DarkGray))
        } else if self.is_focused {
            let mut display = self.value.clone();
            display.insert(self.byte_offset(self.cursor_pos), '█');
            Line::from(display)
        } else {
            Line::from(self.value.clone())
        };

        let paragraph = Paragraph::new(display_text).block(block);
        frame.render_widget(paragraph, area);
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}
