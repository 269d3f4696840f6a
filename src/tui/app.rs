use anyhow::Result;
use chrono::{Local, NaiveDate};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{DefaultTerminal, Frame};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use crate::models::Registration;
use crate::services::RegistrationService;
use super::screen_trait::{Screen as ScreenTrait, ScreenId, ScreenTransition};
use super::screens;
use super::state::MessageDisplay;
use super::state_machine::ScreenStateMachine;

/// Context that screens need access to (everything except screen states)
pub struct AppContext<R: RegistrationService> {
    pub registrar: Arc<R>,
    pub should_quit: bool,
    pub messages: MessageDisplay,
    pub state_machine: ScreenStateMachine,

    /// Most recent successful sign-up, shown on the home screen
    pub registered: Option<Registration>,

    /// Latest selectable date of birth
    pub today: NaiveDate,
}

/// Container for all screen states
pub struct ScreenStates {
    pub signup_state: screens::SignUpState,
    pub home_state: screens::HomeState,
    pub terms_state: screens::DocumentState,
    pub privacy_state: screens::DocumentState,
}

pub struct App<R: RegistrationService> {
    pub context: AppContext<R>,
    pub states: ScreenStates,
}

impl<R: RegistrationService> App<R> {
    pub fn new(registrar: Arc<R>) -> Result<Self> {
        Ok(Self {
            context: AppContext {
                registrar,
                should_quit: false,
                messages: MessageDisplay::new(),
                state_machine: ScreenStateMachine::new(),
                registered: None,
                today: Local::now().date_naive(),
            },
            states: ScreenStates {
                signup_state: screens::SignUpState::new(),
                home_state: screens::HomeState::new(),
                terms_state: screens::DocumentState::terms(),
                privacy_state: screens::DocumentState::privacy(),
            },
        })
    }

    pub async fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        let first = self.context.state_machine.current();
        self.enter_screen(first).await?;

        while !self.context.should_quit {
            terminal.draw(|frame| self.render(frame))?;

            // Handle input with timeout
            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key).await?;
                    }
                }
            }
        }

        Ok(())
    }

    /// Draw the current screen with any notice on top
    pub fn render(&self, frame: &mut Frame) {
        match self.context.state_machine.current() {
            ScreenId::SignUp => self.states.signup_state.render(frame, self),
            ScreenId::Home => self.states.home_state.render(frame, self),
            ScreenId::Terms => self.states.terms_state.render(frame, self),
            ScreenId::Privacy => self.states.privacy_state.render(frame, self),
        }
        self.context.messages.render(frame, frame.area());
    }

    async fn enter_screen(&mut self, id: ScreenId) -> Result<()> {
        let context = &mut self.context;
        let states = &mut self.states;

        match id {
            ScreenId::SignUp => states.signup_state.on_enter(context).await,
            ScreenId::Home => states.home_state.on_enter(context).await,
            ScreenId::Terms => states.terms_state.on_enter(context).await,
            ScreenId::Privacy => states.privacy_state.on_enter(context).await,
        }
    }

    async fn exit_screen(&mut self, id: ScreenId) -> Result<()> {
        let context = &mut self.context;
        let states = &mut self.states;

        match id {
            ScreenId::SignUp => states.signup_state.on_exit(context).await,
            ScreenId::Home => states.home_state.on_exit(context).await,
            ScreenId::Terms => states.terms_state.on_exit(context).await,
            ScreenId::Privacy => states.privacy_state.on_exit(context).await,
        }
    }

    async fn handle_key_for_current_screen(&mut self, key: KeyEvent) -> Result<ScreenTransition> {
        // Split borrows: context and states are separate, so we can borrow both
        let context = &mut self.context;
        let states = &mut self.states;

        match context.state_machine.current() {
            ScreenId::SignUp => states.signup_state.handle_key(context, key).await,
            ScreenId::Home => states.home_state.handle_key(context, key).await,
            ScreenId::Terms => states.terms_state.handle_key(context, key).await,
            ScreenId::Privacy => states.privacy_state.handle_key(context, key).await,
        }
    }

    /// Process one key press to completion
    ///
    /// A visible notice swallows the key that dismisses it. Forward
    /// navigation goes through the state machine's `Navigator` impl; lifecycle
    /// hooks run whenever the current screen changed.
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.context.should_quit = true;
            return Ok(());
        }

        if self.context.messages.has_message() {
            self.context.messages.clear();
            return Ok(());
        }

        let before = self.context.state_machine.current();
        let transition = self.handle_key_for_current_screen(key).await?;

        match transition {
            ScreenTransition::Stay => {}
            ScreenTransition::Back => {
                self.context.state_machine.go_back();
            }
            ScreenTransition::Quit => {
                self.context.should_quit = true;
            }
        }

        let after = self.context.state_machine.current();
        if after != before {
            debug!(from = ?before, to = ?after, "screen changed");
            self.exit_screen(before).await?;
            self.enter_screen(after).await?;
        }

        Ok(())
    }
}
