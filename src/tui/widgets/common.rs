//! Layout and styling helpers shared by the screens and popups

use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Title bar, flexible body, help bar
///
/// ```
/// # use ratatui::layout::Rect;
/// # use signup_tui::tui::widgets::common::screen_layout;
/// let [title, body, help] = screen_layout(Rect::new(0, 0, 80, 24));
/// assert_eq!(title.height, 3);
/// assert_eq!(body.height, 18);
/// assert_eq!(help.y, 21);
/// ```
pub fn screen_layout(area: Rect) -> [Rect; 3] {
    Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(3),
    ])
    .areas(area)
}

pub fn render_title(frame: &mut Frame, area: Rect, title: &str) {
    let widget = Paragraph::new(title)
        .alignment(Alignment::Center)
        .style(Style::default().add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );
    frame.render_widget(widget, area);
}

/// Render a bar of `[key] description` hints
pub fn render_help(frame: &mut Frame, area: Rect, items: &[(&str, &str)]) {
    let key_style = Style::default().fg(Color::Yellow);
    let spans: Vec<Span> = items
        .iter()
        .flat_map(|(key, desc)| {
            [
                Span::styled(format!("[{}]", key), key_style),
                Span::raw(format!(" {}  ", desc)),
            ]
        })
        .collect();

    let widget = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(widget, area);
}

/// A rectangle of the given percentage size centered in `area`
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Percentage(percent_y)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(row);
    cell
}

/// Marker and style for a row of a popup list
pub fn selection_style(is_selected: bool) -> (&'static str, Style) {
    if is_selected {
        (
            "> ",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )
    } else {
        ("  ", Style::default())
    }
}
