use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Severity of a notice, which picks its border color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogType {
    Error,

    /// Used for validation notices
    Warning,
}

impl DialogType {
    pub fn border_color(&self) -> Color {
        match self {
            Self::Error => Color::Red,
            Self::Warning => Color::Yellow,
        }
    }

    pub fn default_title(&self) -> &'static str {
        match self {
            Self::Error => "Error",
            Self::Warning => "Warning",
        }
    }
}

/// A centered popup showing one message
///
/// The popup is a fixed number of rows tall and 60% of the screen wide;
/// long messages wrap.
#[derive(Debug, Clone, Copy)]
pub struct ModalDialog<'a> {
    pub dialog_type: DialogType,
    pub title: &'a str,
    pub message: &'a str,
    pub hint: Option<&'static str>,
}

impl<'a> ModalDialog<'a> {
    const WIDTH_PERCENT: u16 = 60;

    pub fn new(dialog_type: DialogType, title: &'a str, message: &'a str) -> Self {
        Self {
            dialog_type,
            title,
            message,
            hint: None,
        }
    }

    /// Add the "press any key" hint below the message
    pub fn dismissable(mut self) -> Self {
        self.hint = Some("[Press any key]");
        self
    }

    fn lines(&self) -> Vec<Line<'a>> {
        let mut lines = vec![
            Line::from(""),
            Line::from(self.message).alignment(Alignment::Center),
            Line::from(""),
        ];
        if let Some(hint) = self.hint {
            lines.push(
                Line::from(hint)
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(Color::DarkGray)),
            );
        }
        lines
    }

    fn area(&self, screen: Rect) -> Rect {
        // Content plus borders, with one spare row for wrapping
        let height = self.lines().len() as u16 + 3;
        let [row] = Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas(screen);
        let [cell] = Layout::horizontal([Constraint::Percentage(Self::WIDTH_PERCENT)])
            .flex(Flex::Center)
            .areas(row);
        cell
    }

    pub fn render(&self, frame: &mut Frame, screen: Rect) {
        let area = self.area(screen);
        frame.render_widget(Clear, area);

        let block = Block::default()
            .title(self.title)
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(
                Style::default()
                    .fg(self.dialog_type.border_color())
                    .add_modifier(Modifier::BOLD),
            );

        let paragraph = Paragraph::new(self.lines())
            .block(block)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }
}
