use anyhow::Result;
use async_trait::async_trait;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tracing::debug;

use crate::form::{Field, FormController, FormEvent, Navigator, PickerOutcome, Route, SubmitError, ValidationError};
use crate::models::Gender;
use crate::services::RegistrationService;
use crate::tui::app::{App, AppContext};
use crate::tui::screen_trait::{Screen as ScreenTrait, ScreenId, ScreenTransition};
use crate::tui::state::Navigable;
use crate::tui::widgets::{common, Checkbox, ChoiceSelector, DatePicker, FormField, TextInput};

/// Shown when the registrar rejects an otherwise valid form
pub const REGISTRATION_FAILED: &str = "Something went wrong. Try again.";

/// Focusable rows of the form, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    FirstName,
    LastName,
    DateOfBirth,
    Gender,
    Terms,
    Submit,
}

impl FocusTarget {
    pub const ORDER: [FocusTarget; 6] = [
        FocusTarget::FirstName,
        FocusTarget::LastName,
        FocusTarget::DateOfBirth,
        FocusTarget::Gender,
        FocusTarget::Terms,
        FocusTarget::Submit,
    ];
}

impl From<Field> for FocusTarget {
    fn from(field: Field) -> Self {
        match field {
            Field::FirstName => FocusTarget::FirstName,
            Field::LastName => FocusTarget::LastName,
            Field::DateOfBirth => FocusTarget::DateOfBirth,
            Field::Gender => FocusTarget::Gender,
            Field::Terms => FocusTarget::Terms,
        }
    }
}

/// The date picker and the gender selector are mutually exclusive overlays
#[derive(Debug, Clone, PartialEq)]
pub enum SignUpMode {
    Editing,
    PickingDate(DatePicker),
    PickingGender(ChoiceSelector<Gender>),
}

pub struct SignUpState {
    pub form: FormController,
    pub mode: SignUpMode,
    pub first_name: FormField,
    pub last_name: FormField,
    pub date_of_birth: FormField,
    pub gender: FormField,
    pub terms_invalid: bool,
    focus: usize,
}

impl Default for SignUpState {
    fn default() -> Self {
        Self::new()
    }
}

impl SignUpState {
    pub fn new() -> Self {
        let name_input = |placeholder: &str| TextInput::new().with_placeholder(placeholder);

        let mut state = Self {
            form: FormController::new(),
            mode: SignUpMode::Editing,
            first_name: FormField::new("First Name")
                .required()
                .with_input(name_input("Enter your first name")),
            last_name: FormField::new("Last Name")
                .required()
                .with_input(name_input("Enter your last name")),
            date_of_birth: FormField::new("Date of Birth")
                .required()
                .read_only()
                .with_input(TextInput::new().with_placeholder("Select your date of birth"))
                .with_help("Press Enter to pick a date"),
            gender: FormField::new("Gender")
                .required()
                .read_only()
                .with_input(TextInput::new().with_placeholder("Select your gender"))
                .with_help("Press Enter to choose"),
            terms_invalid: false,
            focus: 0,
        };
        state.apply_focus();
        state
    }

    /// Discard the draft and every widget's contents
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn focus(&self) -> FocusTarget {
        FocusTarget::ORDER[self.focus]
    }

    pub fn focus_on(&mut self, target: FocusTarget) {
        if let Some(index) = FocusTarget::ORDER.iter().position(|t| *t == target) {
            self.set_selected(index);
        }
    }

    fn apply_focus(&mut self) {
        let focus = self.focus();
        self.first_name.set_focused(focus == FocusTarget::FirstName);
        self.last_name.set_focused(focus == FocusTarget::LastName);
        self.date_of_birth.set_focused(focus == FocusTarget::DateOfBirth);
        self.gender.set_focused(focus == FocusTarget::Gender);
    }

    /// Copy picker-driven values from the draft into their display fields
    fn sync_display_fields(&mut self) {
        let draft = self.form.draft();
        let dob = draft.date_of_birth_iso();
        let gender = draft.gender_label();
        self.date_of_birth.set_value(dob);
        self.gender.set_value(gender);
    }

    fn field_mut(&mut self, field: Field) -> Option<&mut FormField> {
        match field {
            Field::FirstName => Some(&mut self.first_name),
            Field::LastName => Some(&mut self.last_name),
            Field::DateOfBirth => Some(&mut self.date_of_birth),
            Field::Gender => Some(&mut self.gender),
            Field::Terms => None,
        }
    }

    fn show_validation_error(&mut self, err: ValidationError) {
        match self.field_mut(err.field()) {
            Some(field) => field.mark_invalid(err.to_string()),
            None => self.terms_invalid = true,
        }
        self.focus_on(err.field().into());
    }

    fn apply_date_pick(&mut self, outcome: PickerOutcome<chrono::NaiveDate>) {
        if matches!(outcome, PickerOutcome::Selected(_)) {
            self.date_of_birth.clear_validation();
        }
        self.form.dispatch(FormEvent::DateOfBirthPicked(outcome));
        self.sync_display_fields();
        self.mode = SignUpMode::Editing;
    }

    fn apply_gender_pick(&mut self, outcome: PickerOutcome<Gender>) {
        if matches!(outcome, PickerOutcome::Selected(_)) {
            self.gender.clear_validation();
        }
        self.form.dispatch(FormEvent::GenderPicked(outcome));
        self.sync_display_fields();
        self.mode = SignUpMode::Editing;
    }

    async fn submit<R: RegistrationService>(&mut self, context: &mut AppContext<R>) {
        let result = self
            .form
            .submit_with(context.registrar.as_ref(), &mut context.state_machine)
            .await;

        match result {
            Ok(registration) => {
                context.registered = Some(registration);
                // Navigation already happened; the draft goes with it
                self.reset();
            }
            Err(SubmitError::Validation(err)) => {
                debug!(error = %err, "sign-up rejected");
                self.show_validation_error(err);
                context.messages.set_validation_error(err.to_string());
            }
            Err(SubmitError::Registration(_)) => {
                context.messages.set_error(REGISTRATION_FAILED);
            }
        }
    }
}

impl Navigable for SignUpState {
    fn len(&self) -> usize {
        FocusTarget::ORDER.len()
    }

    fn selected(&self) -> usize {
        self.focus
    }

    fn set_selected(&mut self, index: usize) {
        self.focus = index;
        self.apply_focus();
    }
}

async fn handle_editing_mode<R: RegistrationService>(
    state: &mut SignUpState,
    context: &mut AppContext<R>,
    key: KeyEvent,
) -> Result<ScreenTransition> {
    match key.code {
        KeyCode::Tab | KeyCode::Down => {
            state.next();
            return Ok(ScreenTransition::Stay);
        }
        KeyCode::BackTab | KeyCode::Up => {
            state.previous();
            return Ok(ScreenTransition::Stay);
        }
        KeyCode::Esc => return Ok(ScreenTransition::Quit),
        _ => {}
    }

    match state.focus() {
        FocusTarget::FirstName => {
            if key.code == KeyCode::Enter {
                state.next();
            } else if state.first_name.handle_key(key) {
                let value = state.first_name.value().to_string();
                state.form.set_first_name(value);
            }
        }
        FocusTarget::LastName => {
            if key.code == KeyCode::Enter {
                state.next();
            } else if state.last_name.handle_key(key) {
                let value = state.last_name.value().to_string();
                state.form.set_last_name(value);
            }
        }
        FocusTarget::DateOfBirth => {
            if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                let picker = DatePicker::new(state.form.draft().date_of_birth, context.today);
                state.mode = SignUpMode::PickingDate(picker);
            }
        }
        FocusTarget::Gender => {
            if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                let selector = ChoiceSelector::new(
                    Gender::ALL.to_vec(),
                    "Gender",
                    state.form.draft().gender.as_ref(),
                );
                state.mode = SignUpMode::PickingGender(selector);
            }
        }
        FocusTarget::Terms => match key.code {
            KeyCode::Char('t') => context.state_machine.navigate(Route::Terms),
            KeyCode::Char('p') => context.state_machine.navigate(Route::Privacy),
            _ if Checkbox::is_toggle_key(key) => {
                state.form.toggle_accepted();
                state.terms_invalid = false;
            }
            _ => {}
        },
        FocusTarget::Submit => {
            if key.code == KeyCode::Enter {
                state.submit(context).await;
            }
        }
    }

    Ok(ScreenTransition::Stay)
}

pub fn render<R: RegistrationService>(frame: &mut Frame, state: &SignUpState, _app: &App<R>) {
    let area = frame.area();

    let chunks = Layout::vertical([
        Constraint::Length(3), // Title
        Constraint::Length(5), // First name
        Constraint::Length(5), // Last name
        Constraint::Length(5), // Date of birth
        Constraint::Length(5), // Gender
        Constraint::Length(3), // Terms
        Constraint::Length(1), // Terms validation message
        Constraint::Length(3), // Submit
        Constraint::Min(0),
        Constraint::Length(3), // Help
    ])
    .split(area);

    common::render_title(frame, chunks[0], "Sign Up");

    state.first_name.render(frame, chunks[1]);
    state.last_name.render(frame, chunks[2]);
    state.date_of_birth.render(frame, chunks[3]);
    state.gender.render(frame, chunks[4]);

    Checkbox::new(state.form.draft().accepted)
        .text("By clicking, I accept the ")
        .link("terms of services")
        .text(" and ")
        .link("privacy policy")
        .focused(state.focus() == FocusTarget::Terms)
        .render(frame, chunks[5]);

    if state.terms_invalid {
        let message = Paragraph::new(ValidationError::TermsNotAccepted.to_string())
            .style(Style::default().fg(Color::Red));
        frame.render_widget(message, chunks[6]);
    }

    render_submit_button(frame, state, chunks[7]);

    let help: &[(&str, &str)] = match state.focus() {
        FocusTarget::Terms => &[
            ("Space", "Toggle"),
            ("t", "Terms"),
            ("p", "Privacy"),
            ("Tab", "Next"),
            ("Esc", "Quit"),
        ],
        FocusTarget::Submit => &[("Enter", "Sign up"), ("Shift+Tab", "Back"), ("Esc", "Quit")],
        _ => &[("Tab/↓", "Next"), ("Shift+Tab/↑", "Previous"), ("Enter", "Select"), ("Esc", "Quit")],
    };
    common::render_help(frame, chunks[9], help);

    match &state.mode {
        SignUpMode::Editing => {}
        SignUpMode::PickingDate(picker) => picker.render_as_popup(frame, area),
        SignUpMode::PickingGender(selector) => selector.render_as_popup(frame, area),
    }
}

fn render_submit_button(frame: &mut Frame, state: &SignUpState, area: Rect) {
    let [_, button_area, _] = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(20),
        Constraint::Min(0),
    ])
    .areas(area);

    let focused = state.focus() == FocusTarget::Submit;
    let style = match (focused, state.form.can_submit()) {
        (true, _) => Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        (false, true) => Style::default().fg(Color::Green),
        (false, false) => Style::default().fg(Color::DarkGray),
    };

    let button = Paragraph::new("Sign up")
        .alignment(Alignment::Center)
        .style(style)
        .block(Block::default().borders(Borders::ALL).style(style));
    frame.render_widget(button, button_area);
}

#[async_trait]
impl<R: RegistrationService> ScreenTrait<R> for SignUpState {
    fn render(&self, frame: &mut Frame, app: &App<R>) {
        render(frame, self, app)
    }

    async fn handle_key(&mut self, context: &mut AppContext<R>, key: KeyEvent) -> Result<ScreenTransition> {
        if matches!(self.mode, SignUpMode::Editing) {
            return handle_editing_mode(self, context, key).await;
        }

        match &mut self.mode {
            SignUpMode::Editing => Ok(ScreenTransition::Stay),
            SignUpMode::PickingDate(picker) => {
                if let Some(outcome) = picker.handle_key(key) {
                    self.apply_date_pick(outcome);
                }
                Ok(ScreenTransition::Stay)
            }
            SignUpMode::PickingGender(selector) => {
                if let Some(outcome) = selector.handle_key(key) {
                    self.apply_gender_pick(outcome);
                }
                Ok(ScreenTransition::Stay)
            }
        }
    }

    fn id(&self) -> ScreenId {
        ScreenId::SignUp
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_new_state_focuses_first_name() {
        let state = SignUpState::new();
        assert_eq!(state.focus(), FocusTarget::FirstName);
        assert!(state.first_name.is_focused);
        assert!(!state.last_name.is_focused);
        assert_eq!(state.mode, SignUpMode::Editing);
    }

    #[test]
    fn test_focus_wraps() {
        let mut state = SignUpState::new();
        state.previous();
        assert_eq!(state.focus(), FocusTarget::Submit);
        state.next();
        assert_eq!(state.focus(), FocusTarget::FirstName);
    }

    #[test]
    fn test_validation_error_marks_and_focuses_field() {
        let mut state = SignUpState::new();
        state.show_validation_error(ValidationError::MissingGender);
        assert_eq!(state.focus(), FocusTarget::Gender);
        assert!(!state.gender.is_valid());

        state.show_validation_error(ValidationError::TermsNotAccepted);
        assert_eq!(state.focus(), FocusTarget::Terms);
        assert!(state.terms_invalid);
    }

    #[test]
    fn test_date_pick_updates_display() {
        let mut state = SignUpState::new();
        state.date_of_birth.mark_invalid("Date of birth is required");

        let date = NaiveDate::from_ymd_opt(1990, 1, 1).unwrap();
        state.apply_date_pick(PickerOutcome::Selected(date));
        assert_eq!(state.date_of_birth.value(), "1990-01-01");
        assert!(state.date_of_birth.is_valid());

        state.apply_date_pick(PickerOutcome::Cancelled);
        assert_eq!(state.date_of_birth.value(), "1990-01-01");
        assert_eq!(state.form.draft().date_of_birth, Some(date));
    }

    #[test]
    fn test_gender_cancel_keeps_invalid_marker() {
        let mut state = SignUpState::new();
        state.gender.mark_invalid("Gender is required");
        state.apply_gender_pick(PickerOutcome::Cancelled);
        assert!(!state.gender.is_valid());
        assert_eq!(state.gender.value(), "");
    }
}
