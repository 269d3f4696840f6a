use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::text_input::TextInput;

/// A labelled input with a validation marker and an optional help line
///
/// Read-only fields render like inputs but ignore typing; the sign-up form
/// uses them for values chosen through a picker.
#[derive(Debug, Clone, PartialEq)]
pub struct FormField {
    pub label: String,
    pub input: TextInput,
    pub required: bool,
    pub read_only: bool,
    pub validation_state: ValidationState,
    pub is_focused: bool,

    /// Shown below the input when there is no validation message
    pub help_text: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ValidationState {
    Idle,
    Invalid(String),
}

impl ValidationState {
    pub fn color(&self) -> Color {
        match self {
            Self::Idle => Color::White,
            Self::Invalid(_) => Color::Red,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Idle => "",
            Self::Invalid(_) => "✗",
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Invalid(msg) => Some(msg),
            Self::Idle => None,
        }
    }
}

impl FormField {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            input: TextInput::new(),
            required: false,
            read_only: false,
            validation_state: ValidationState::Idle,
            is_focused: false,
            help_text: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    pub fn with_help(mut self, text: impl Into<String>) -> Self {
        self.help_text = Some(text.into());
        self
    }

    pub fn with_input(mut self, input: TextInput) -> Self {
        self.input = input;
        self
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.is_focused = focused;
        // Read-only fields never show a cursor
        self.input.set_focused(focused && !self.read_only);
    }

    /// Replace the displayed value, keeping the cursor at the end
    pub fn set_value(&mut self, value: impl Into<String>) {
        let focused = self.input.is_focused;
        self.input = std::mem::take(&mut self.input).with_value(value);
        self.input.set_focused(focused);
    }

    pub fn mark_invalid(&mut self, msg: impl Into<String>) {
        self.validation_state = ValidationState::Invalid(msg.into());
    }

    pub fn clear_validation(&mut self) {
        self.validation_state = ValidationState::Idle;
    }

    /// Handle keyboard input
    ///
    /// Returns true if the input was modified
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if self.read_only {
            return false;
        }

        let changed = self.input.handle_key(key);
        if changed {
            self.clear_validation();
        }
        changed
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::vertical([
            Constraint::Length(1), // Label
            Constraint::Length(3), // Input
            Constraint::Length(1), // Help/validation message
        ])
        .split(area);

        let label_style = if self.is_focused {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        let label_text = if self.required {
            format!("{} *", self.label)
        } else {
            self.label.clone()
        };

        let validation_icon = self.validation_state.icon();
        let label_line = if !validation_icon.is_empty() {
            Line::from(vec![
                Span::styled(label_text, label_style),
                Span::raw(" "),
                Span::styled(validation_icon, Style::default().fg(self.validation_state.color())),
            ])
        } else {
            Line::from(Span::styled(label_text, label_style))
        };

        frame.render_widget(Paragraph::new(label_line), chunks[0]);

        self.input.render(frame, chunks[1]);

        let message = if let Some(val_msg) = self.validation_state.message() {
            Some((val_msg, self.validation_state.color()))
        } else {
            self.help_text.as_deref().map(|help| (help, Color::DarkGray))
        };

        if let Some((text, color)) = message {
            let message_para = Paragraph::new(Line::from(Span::styled(text, Style::default().fg(color))));
            frame.render_widget(message_para, chunks[2]);
        }
    }

    pub fn value(&self) -> &str {
        self.input.value()
    }

    pub fn is_valid(&self) -> bool {
        self.validation_state == ValidationState::Idle
    }
}
