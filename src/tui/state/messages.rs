//! Blocking notices for the TUI
//!
//! A notice is shown as a modal popup over the current screen and stays
//! until the next key press dismisses it.

use ratatui::{layout::Rect, Frame};

use crate::tui::widgets::{DialogType, ModalDialog};

#[derive(Debug, Clone, PartialEq, Eq)]
struct Notice {
    kind: DialogType,
    title: String,
    text: String,
}

/// Holds the notice currently shown to the user, if any
///
/// Only one notice can be displayed at a time.
///
/// # Example
/// ```
/// use signup_tui::tui::state::MessageDisplay;
///
/// let mut messages = MessageDisplay::default();
///
/// messages.set_validation_error("First name is required");
/// assert!(messages.has_message());
/// assert_eq!(messages.text(), Some("First name is required"));
///
/// messages.clear();
/// assert!(!messages.has_message());
/// ```
#[derive(Debug, Default, Clone)]
pub struct MessageDisplay {
    notice: Option<Notice>,
}

impl MessageDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a generic error notice
    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.set(DialogType::Error, DialogType::Error.default_title(), msg);
    }

    /// Show a notice for a failed form check
    pub fn set_validation_error(&mut self, msg: impl Into<String>) {
        self.set(DialogType::Warning, "Validation Error", msg);
    }

    fn set(&mut self, kind: DialogType, title: impl Into<String>, text: impl Into<String>) {
        self.notice = Some(Notice {
            kind,
            title: title.into(),
            text: text.into(),
        });
    }

    pub fn clear(&mut self) {
        self.notice = None;
    }

    pub fn has_message(&self) -> bool {
        self.notice.is_some()
    }

    /// Text of the current notice
    pub fn text(&self) -> Option<&str> {
        self.notice.as_ref().map(|n| n.text.as_str())
    }

    /// Title of the current notice
    pub fn title(&self) -> Option<&str> {
        self.notice.as_ref().map(|n| n.title.as_str())
    }

    /// Render the current notice as a centered popup, if there is one
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        if let Some(notice) = &self.notice {
            ModalDialog::new(notice.kind, &notice.title, &notice.text)
                .dismissable()
                .render(frame, area);
        }
    }
}
