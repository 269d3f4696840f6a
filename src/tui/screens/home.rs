use anyhow::Result;
use async_trait::async_trait;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::services::RegistrationService;
use crate::tui::app::{App, AppContext};
use crate::tui::screen_trait::{Screen as ScreenTrait, ScreenId, ScreenTransition};
use crate::tui::widgets::common;

/// Destination after a successful sign-up
#[derive(Debug, Default)]
pub struct HomeState {
    pub greeting: String,
}

impl HomeState {
    pub fn new() -> Self {
        Self::default()
    }
}

pub fn render<R: RegistrationService>(frame: &mut Frame, state: &HomeState, _app: &App<R>) {
    let chunks = common::screen_layout(frame.area());

    common::render_title(frame, chunks[0], "Home");

    let body = Paragraph::new(vec![
        Line::from(""),
        Line::from(state.greeting.clone())
            .style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
        Line::from(""),
        Line::from("Your account is ready."),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(body, chunks[1]);

    common::render_help(frame, chunks[2], &[("Esc", "New sign-up"), ("q", "Quit")]);
}

#[async_trait]
impl<R: RegistrationService> ScreenTrait<R> for HomeState {
    fn render(&self, frame: &mut Frame, app: &App<R>) {
        render(frame, self, app)
    }

    async fn handle_key(&mut self, _context: &mut AppContext<R>, key: KeyEvent) -> Result<ScreenTransition> {
        Ok(match key.code {
            KeyCode::Esc => ScreenTransition::Back,
            KeyCode::Char('q') => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        })
    }

    async fn on_enter(&mut self, context: &mut AppContext<R>) -> Result<()> {
        self.greeting = match &context.registered {
            Some(registration) => format!("Welcome, {} {}!", registration.first_name, registration.last_name),
            None => "Welcome!".to_string(),
        };
        Ok(())
    }

    fn id(&self) -> ScreenId {
        ScreenId::Home
    }
}
