//! Integration tests for the sign-up flow
//!
//! These drive the whole app through `App::handle_key` the way a user would
//! and check the draft, the visible notice and the current screen.

#[cfg(test)]
mod signup_flow_tests {
    use crate::form::ValidationError;
    use crate::models::Gender;
    use crate::services::mock_registration::MockRegistrationService;
    use crate::tui::app::App;
    use crate::tui::screen_trait::ScreenId;
    use crate::tui::screens::signup::{FocusTarget, REGISTRATION_FAILED};
    use crate::tui::screens::SignUpMode;
    use chrono::NaiveDate;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::Arc;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Helper to create an app with a fixed "today"
    fn create_app(registrar: MockRegistrationService) -> App<MockRegistrationService> {
        let mut app = App::new(Arc::new(registrar)).expect("Failed to create app");
        app.context.today = date(2024, 6, 15);
        app
    }

    /// Helper to create a KeyEvent from a KeyCode
    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    async fn press(app: &mut App<MockRegistrationService>, code: KeyCode) {
        app.handle_key(key(code)).await.expect("Failed to handle key");
    }

    async fn type_text(app: &mut App<MockRegistrationService>, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c)).await;
        }
    }

    /// Fill every field: Ann Lee, 1990-06-15, Female, terms accepted.
    /// Leaves focus on the submit button.
    async fn fill_form(app: &mut App<MockRegistrationService>) {
        type_text(app, "Ann").await;
        press(app, KeyCode::Tab).await;
        type_text(app, "Lee").await;
        press(app, KeyCode::Tab).await;

        // Date picker opens on today's date with the year segment active
        press(app, KeyCode::Enter).await;
        for _ in 0..3 {
            press(app, KeyCode::PageDown).await;
        }
        for _ in 0..4 {
            press(app, KeyCode::Down).await;
        }
        press(app, KeyCode::Enter).await;
        press(app, KeyCode::Tab).await;

        // Gender selector: Male, then Female
        press(app, KeyCode::Enter).await;
        press(app, KeyCode::Down).await;
        press(app, KeyCode::Enter).await;
        press(app, KeyCode::Tab).await;

        press(app, KeyCode::Char(' ')).await;
        press(app, KeyCode::Tab).await;
    }

    #[tokio::test]
    async fn test_starts_on_empty_signup_form() {
        let app = create_app(MockRegistrationService::new());

        assert_eq!(app.context.state_machine.current(), ScreenId::SignUp);
        assert_eq!(app.states.signup_state.form.draft(), &Default::default());
        assert_eq!(app.states.signup_state.focus(), FocusTarget::FirstName);
    }

    #[tokio::test]
    async fn test_typing_updates_draft() {
        let mut app = create_app(MockRegistrationService::new());

        type_text(&mut app, "Anne").await;
        press(&mut app, KeyCode::Backspace).await;
        press(&mut app, KeyCode::Tab).await;
        type_text(&mut app, "Lee").await;

        let draft = app.states.signup_state.form.draft();
        assert_eq!(draft.first_name, "Ann");
        assert_eq!(draft.last_name, "Lee");
    }

    #[tokio::test]
    async fn test_typed_names_reach_draft_unchanged() {
        let mut app = create_app(MockRegistrationService::new());

        type_text(&mut app, "O\u{2019}Brien 3rd").await;
        press(&mut app, KeyCode::Tab).await;
        type_text(&mut app, "  Smith-Jones, Jr. #2  ").await;

        let draft = app.states.signup_state.form.draft();
        assert_eq!(draft.first_name, "O\u{2019}Brien 3rd");
        assert_eq!(draft.last_name, "  Smith-Jones, Jr. #2  ");
        assert_eq!(app.states.signup_state.first_name.value(), "O\u{2019}Brien 3rd");
    }

    #[tokio::test]
    async fn test_long_names_are_not_truncated() {
        let mut app = create_app(MockRegistrationService::new());
        let long = "a".repeat(80);

        type_text(&mut app, &long).await;

        assert_eq!(app.states.signup_state.form.draft().first_name, long);
    }

    #[tokio::test]
    async fn test_ctrl_and_alt_chords_do_not_type() {
        let mut app = create_app(MockRegistrationService::new());
        type_text(&mut app, "Ann").await;

        for modifiers in [KeyModifiers::CONTROL, KeyModifiers::ALT] {
            app.handle_key(KeyEvent::new(KeyCode::Char('a'), modifiers))
                .await
                .expect("Failed to handle key");
        }

        assert_eq!(app.states.signup_state.form.draft().first_name, "Ann");
        assert!(!app.context.should_quit);
    }

    #[tokio::test]
    async fn test_empty_submission_shows_first_missing_field() {
        let mut app = create_app(MockRegistrationService::new());

        // Shift+Tab from the first field wraps to the submit button
        press(&mut app, KeyCode::BackTab).await;
        assert_eq!(app.states.signup_state.focus(), FocusTarget::Submit);
        press(&mut app, KeyCode::Enter).await;

        assert_eq!(app.context.state_machine.current(), ScreenId::SignUp);
        assert_eq!(app.context.messages.title(), Some("Validation Error"));
        assert_eq!(app.context.messages.text(), Some("First name is required"));
        assert_eq!(app.states.signup_state.focus(), FocusTarget::FirstName);
        assert!(!app.states.signup_state.first_name.is_valid());
    }

    #[tokio::test]
    async fn test_notice_swallows_dismissing_key() {
        let mut app = create_app(MockRegistrationService::new());

        press(&mut app, KeyCode::BackTab).await;
        press(&mut app, KeyCode::Enter).await;
        assert!(app.context.messages.has_message());

        // The dismissing key must not reach the form
        press(&mut app, KeyCode::Char('x')).await;
        assert!(!app.context.messages.has_message());
        assert_eq!(app.states.signup_state.form.draft().first_name, "");

        press(&mut app, KeyCode::Char('A')).await;
        assert_eq!(app.states.signup_state.form.draft().first_name, "A");
    }

    #[tokio::test]
    async fn test_unaccepted_terms_are_reported() {
        let registrar = MockRegistrationService::new();
        let mut app = create_app(registrar.clone());

        fill_form(&mut app).await;
        // Untick the terms box again
        app.states.signup_state.form.set_accepted(false);
        let before = app.states.signup_state.form.draft().clone();

        press(&mut app, KeyCode::Enter).await;

        assert_eq!(
            app.context.messages.text(),
            Some(ValidationError::TermsNotAccepted.to_string().as_str())
        );
        assert_eq!(app.states.signup_state.focus(), FocusTarget::Terms);
        assert!(app.states.signup_state.terms_invalid);
        assert_eq!(app.states.signup_state.form.draft(), &before);
        assert!(registrar.registrations().is_empty());
    }

    #[tokio::test]
    async fn test_complete_signup_lands_on_home() {
        let registrar = MockRegistrationService::new();
        let mut app = create_app(registrar.clone());

        fill_form(&mut app).await;
        {
            let draft = app.states.signup_state.form.draft();
            assert_eq!(draft.date_of_birth, Some(date(1990, 6, 15)));
            assert_eq!(draft.gender, Some(Gender::Female));
            assert!(draft.accepted);
        }
        assert!(app.states.signup_state.form.can_submit());

        press(&mut app, KeyCode::Enter).await;

        assert_eq!(app.context.state_machine.current(), ScreenId::Home);
        assert!(!app.context.messages.has_message());
        assert_eq!(registrar.registrations().len(), 1);
        assert_eq!(app.states.home_state.greeting, "Welcome, Ann Lee!");

        // The draft is discarded once the user has moved on
        assert_eq!(app.states.signup_state.form.draft(), &Default::default());
        assert_eq!(app.states.signup_state.first_name.value(), "");
    }

    #[tokio::test]
    async fn test_home_back_returns_to_fresh_form() {
        let mut app = create_app(MockRegistrationService::new());

        fill_form(&mut app).await;
        press(&mut app, KeyCode::Enter).await;
        assert_eq!(app.context.state_machine.current(), ScreenId::Home);

        press(&mut app, KeyCode::Esc).await;
        assert_eq!(app.context.state_machine.current(), ScreenId::SignUp);
        assert_eq!(app.states.signup_state.focus(), FocusTarget::FirstName);
        assert!(!app.states.signup_state.form.can_submit());
    }

    #[tokio::test]
    async fn test_failed_registration_keeps_user_on_form() {
        let registrar = MockRegistrationService::failing();
        let mut app = create_app(registrar.clone());

        fill_form(&mut app).await;
        let before = app.states.signup_state.form.draft().clone();
        press(&mut app, KeyCode::Enter).await;

        assert_eq!(app.context.state_machine.current(), ScreenId::SignUp);
        assert_eq!(app.context.messages.text(), Some(REGISTRATION_FAILED));
        assert_eq!(app.states.signup_state.form.draft(), &before);

        // Backend recovers, retry succeeds
        registrar.set_failing(false);
        press(&mut app, KeyCode::Char('x')).await;
        press(&mut app, KeyCode::Enter).await;
        assert_eq!(app.context.state_machine.current(), ScreenId::Home);
        assert_eq!(registrar.registrations().len(), 2);
    }

    #[tokio::test]
    async fn test_cancelled_second_date_pick_keeps_first() {
        let mut app = create_app(MockRegistrationService::new());
        app.states.signup_state.focus_on(FocusTarget::DateOfBirth);

        press(&mut app, KeyCode::Enter).await;
        press(&mut app, KeyCode::Down).await;
        press(&mut app, KeyCode::Enter).await;
        assert_eq!(
            app.states.signup_state.form.draft().date_of_birth,
            Some(date(2023, 6, 15))
        );

        // Second picker opens on the stored date; change it, then cancel
        press(&mut app, KeyCode::Enter).await;
        match &app.states.signup_state.mode {
            SignUpMode::PickingDate(picker) => assert_eq!(picker.date(), date(2023, 6, 15)),
            other => panic!("Expected date picker, got {:?}", other),
        }
        press(&mut app, KeyCode::Down).await;
        press(&mut app, KeyCode::Esc).await;

        assert_eq!(app.states.signup_state.mode, SignUpMode::Editing);
        assert_eq!(
            app.states.signup_state.form.draft().date_of_birth,
            Some(date(2023, 6, 15))
        );
        assert_eq!(app.states.signup_state.date_of_birth.value(), "2023-06-15");
    }

    #[tokio::test]
    async fn test_overlay_keys_do_not_leak_into_form() {
        let mut app = create_app(MockRegistrationService::new());
        app.states.signup_state.focus_on(FocusTarget::Gender);

        press(&mut app, KeyCode::Enter).await;
        assert!(matches!(
            app.states.signup_state.mode,
            SignUpMode::PickingGender(_)
        ));

        // Tab and Esc belong to the selector while it is open
        press(&mut app, KeyCode::Tab).await;
        press(&mut app, KeyCode::Esc).await;

        assert_eq!(app.states.signup_state.mode, SignUpMode::Editing);
        assert_eq!(app.states.signup_state.focus(), FocusTarget::Gender);
        assert_eq!(app.states.signup_state.form.draft().gender, None);
        assert!(!app.context.should_quit);
    }

    #[tokio::test]
    async fn test_terms_round_trip_preserves_draft() {
        let mut app = create_app(MockRegistrationService::new());

        type_text(&mut app, "Ann").await;
        app.states.signup_state.focus_on(FocusTarget::Terms);

        press(&mut app, KeyCode::Char('t')).await;
        assert_eq!(app.context.state_machine.current(), ScreenId::Terms);

        press(&mut app, KeyCode::Down).await;
        press(&mut app, KeyCode::Esc).await;
        assert_eq!(app.context.state_machine.current(), ScreenId::SignUp);
        assert_eq!(app.states.signup_state.form.draft().first_name, "Ann");

        press(&mut app, KeyCode::Char('p')).await;
        assert_eq!(app.context.state_machine.current(), ScreenId::Privacy);
        press(&mut app, KeyCode::Esc).await;
        assert_eq!(app.context.state_machine.current(), ScreenId::SignUp);
    }

    #[tokio::test]
    async fn test_letters_on_terms_row_do_not_toggle() {
        let mut app = create_app(MockRegistrationService::new());
        app.states.signup_state.focus_on(FocusTarget::Terms);

        press(&mut app, KeyCode::Char('x')).await;
        assert!(!app.states.signup_state.form.draft().accepted);

        press(&mut app, KeyCode::Enter).await;
        assert!(app.states.signup_state.form.draft().accepted);
    }

    #[tokio::test]
    async fn test_esc_quits_from_form() {
        let mut app = create_app(MockRegistrationService::new());

        press(&mut app, KeyCode::Esc).await;

        assert!(app.context.should_quit);
    }

    #[tokio::test]
    async fn test_ctrl_c_quits_even_with_notice() {
        let mut app = create_app(MockRegistrationService::new());
        app.context.messages.set_validation_error("Gender is required");

        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
            .await
            .expect("Failed to handle key");

        assert!(app.context.should_quit);
    }

    #[tokio::test]
    async fn test_render_every_screen_and_overlay() {
        let mut app = create_app(MockRegistrationService::new());
        let mut terminal = Terminal::new(TestBackend::new(80, 45)).expect("terminal");

        terminal.draw(|f| app.render(f)).expect("draw form");

        app.states.signup_state.focus_on(FocusTarget::DateOfBirth);
        press(&mut app, KeyCode::Enter).await;
        terminal.draw(|f| app.render(f)).expect("draw date picker");
        press(&mut app, KeyCode::Esc).await;

        app.states.signup_state.focus_on(FocusTarget::Gender);
        press(&mut app, KeyCode::Enter).await;
        terminal.draw(|f| app.render(f)).expect("draw gender selector");
        press(&mut app, KeyCode::Esc).await;

        app.context.messages.set_validation_error("Gender is required");
        terminal.draw(|f| app.render(f)).expect("draw notice");
        press(&mut app, KeyCode::Char('x')).await;

        app.states.signup_state.focus_on(FocusTarget::Terms);
        press(&mut app, KeyCode::Char('t')).await;
        terminal.draw(|f| app.render(f)).expect("draw terms");
        press(&mut app, KeyCode::Esc).await;

        app.states.signup_state.focus_on(FocusTarget::FirstName);
        fill_form(&mut app).await;
        press(&mut app, KeyCode::Enter).await;
        terminal.draw(|f| app.render(f)).expect("draw home");

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
        assert!(text.contains("Welcome, Ann Lee!"));
    }
}
