use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Clear, List, ListItem},
    Frame,
};
use std::fmt::Display;

use crate::form::PickerOutcome;
use crate::tui::state::Navigable;
use crate::tui::widgets::common;

/// A popup list that presents a fixed set of options and returns the
/// user's pick or a cancellation
#[derive(Debug, Clone, PartialEq)]
pub struct ChoiceSelector<T> {
    pub options: Vec<T>,
    pub selected: usize,
    pub title: String,
}

impl<T: Clone + PartialEq + Display> ChoiceSelector<T> {
    /// Create a selector, highlighting `current` if it is one of the options
    pub fn new(options: Vec<T>, title: impl Into<String>, current: Option<&T>) -> Self {
        let selected = current
            .and_then(|c| options.iter().position(|o| o == c))
            .unwrap_or(0);

        Self {
            options,
            selected,
            title: title.into(),
        }
    }

    pub fn highlighted(&self) -> Option<&T> {
        self.options.get(self.selected)
    }

    /// Handle keyboard input
    ///
    /// Returns `None` while the selector stays open.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<PickerOutcome<T>> {
        match key.code {
            KeyCode::Up => {
                self.previous();
                None
            }
            KeyCode::Down => {
                self.next();
                None
            }
            KeyCode::Home => {
                self.first();
                None
            }
            KeyCode::End => {
                self.last();
                None
            }
            KeyCode::Enter => self.highlighted().cloned().map(PickerOutcome::Selected),
            KeyCode::Esc => Some(PickerOutcome::Cancelled),
            _ => None,
        }
    }

    pub fn render_as_popup(&self, frame: &mut Frame, area: Rect) {
        let popup_area = common::centered_rect(40, 40, area);

        frame.render_widget(Clear, popup_area);

        let items: Vec<ListItem> = self
            .options
            .iter()
            .enumerate()
            .map(|(i, opt)| {
                let (prefix, style) = common::selection_style(i == self.selected);
                ListItem::new(Line::from(format!("{}{}", prefix, opt))).style(style)
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .title(self.title.clone())
                .title_bottom("[Enter] Select  [Esc] Cancel"),
        );

        frame.render_widget(list, popup_area);
    }
}

impl<T> Navigable for ChoiceSelector<T> {
    fn len(&self) -> usize {
        self.options.len()
    }

    fn selected(&self) -> usize {
        self.selected
    }

    fn set_selected(&mut self, index: usize) {
        self.selected = index;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Gender;

    fn gender_selector(current: Option<&Gender>) -> ChoiceSelector<Gender> {
        ChoiceSelector::new(Gender::ALL.to_vec(), "Gender", current)
    }

    #[test]
    fn test_starts_at_first_option() {
        let selector = gender_selector(None);
        assert_eq!(selector.selected, 0);
        assert_eq!(selector.highlighted(), Some(&Gender::Male));
    }

    #[test]
    fn test_starts_at_current_selection() {
        let selector = gender_selector(Some(&Gender::NonBinary));
        assert_eq!(selector.highlighted(), Some(&Gender::NonBinary));
    }

    #[test]
    fn test_navigation_wraps() {
        let mut selector = gender_selector(None);
        assert_eq!(selector.handle_key(KeyEvent::from(KeyCode::Up)), None);
        assert_eq!(selector.highlighted(), Some(&Gender::PreferNotToAnswer));

        assert_eq!(selector.handle_key(KeyEvent::from(KeyCode::Down)), None);
        assert_eq!(selector.highlighted(), Some(&Gender::Male));

        selector.handle_key(KeyEvent::from(KeyCode::End));
        assert_eq!(selector.selected, 3);
        selector.handle_key(KeyEvent::from(KeyCode::Home));
        assert_eq!(selector.selected, 0);
    }

    #[test]
    fn test_enter_selects() {
        let mut selector = gender_selector(None);
        selector.handle_key(KeyEvent::from(KeyCode::Down));
        assert_eq!(
            selector.handle_key(KeyEvent::from(KeyCode::Enter)),
            Some(PickerOutcome::Selected(Gender::Female))
        );
    }

    #[test]
    fn test_esc_cancels() {
        let mut selector = gender_selector(Some(&Gender::Female));
        selector.handle_key(KeyEvent::from(KeyCode::Down));
        assert_eq!(
            selector.handle_key(KeyEvent::from(KeyCode::Esc)),
            Some(PickerOutcome::Cancelled)
        );
    }

    #[test]
    fn test_other_keys_are_ignored() {
        let mut selector = gender_selector(None);
        assert_eq!(selector.handle_key(KeyEvent::from(KeyCode::Char('x'))), None);
        assert_eq!(selector.selected, 0);
    }
}
