use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// A single checkbox followed by a label made of plain and link spans
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checkbox {
    pub checked: bool,
    pub is_focused: bool,

    /// `(text, is_link)` pieces of the label
    pub label: Vec<(String, bool)>,
}

impl Checkbox {
    pub fn new(checked: bool) -> Self {
        Self {
            checked,
            is_focused: false,
            label: Vec::new(),
        }
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.label.push((text.into(), false));
        self
    }

    pub fn link(mut self, text: impl Into<String>) -> Self {
        self.label.push((text.into(), true));
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.is_focused = focused;
        self
    }

    /// Whether the key toggles the box
    pub fn is_toggle_key(key: KeyEvent) -> bool {
        matches!(key.code, KeyCode::Char(' ') | KeyCode::Enter)
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let box_style = if self.is_focused {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        };

        let mut spans = vec![
            Span::styled(if self.checked { "[x]" } else { "[ ]" }, box_style),
            Span::raw(" "),
        ];
        spans.extend(self.label.iter().map(|(text, is_link)| {
            if *is_link {
                Span::styled(
                    text.clone(),
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::UNDERLINED),
                )
            } else {
                Span::raw(text.clone())
            }
        }));

        let border_style = if self.is_focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };

        let widget = Paragraph::new(Line::from(spans))
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).style(border_style));
        frame.render_widget(widget, area);
    }
}
