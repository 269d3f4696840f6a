use anyhow::Result;
use async_trait::async_trait;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::services::RegistrationService;
use crate::tui::app::{App, AppContext};
use crate::tui::screen_trait::{Screen as ScreenTrait, ScreenId, ScreenTransition};
use crate::tui::widgets::common;

const TERMS_OF_SERVICE: &str = "\
1. Acceptance

By creating an account you agree to these terms. If you do not agree, do not sign up.

2. Your account

You must provide accurate information when signing up, including your legal name and date of birth. You are responsible for activity on your account.

3. Acceptable use

Do not misuse the service, attempt to access it by means other than the interfaces provided, or interfere with other users.

4. Termination

We may suspend or close accounts that break these terms. You may close your account at any time.

5. Changes

We may update these terms. Continued use after an update means you accept the new terms.";

const PRIVACY_POLICY: &str = "\
1. What we collect

Your first and last name, date of birth and gender, as entered on the sign-up form.

2. Why we collect it

To create and personalise your account. We do not sell your information.

3. Retention

We keep your information while your account is open and delete it when you close your account.

4. Your choices

Gender is collected with a \"Prefer not to answer\" option. You may request a copy or deletion of your data at any time.";

/// A scrollable, read-only legal document
#[derive(Debug)]
pub struct DocumentState {
    pub id: ScreenId,
    pub title: &'static str,
    pub body: &'static str,
    pub scroll: u16,
}

impl DocumentState {
    pub fn terms() -> Self {
        Self {
            id: ScreenId::Terms,
            title: "Terms of Service",
            body: TERMS_OF_SERVICE,
            scroll: 0,
        }
    }

    pub fn privacy() -> Self {
        Self {
            id: ScreenId::Privacy,
            title: "Privacy Policy",
            body: PRIVACY_POLICY,
            scroll: 0,
        }
    }

    fn max_scroll(&self) -> u16 {
        self.body.lines().count().saturating_sub(1) as u16
    }

    pub fn scroll_by(&mut self, delta: i32) {
        let next = (self.scroll as i32 + delta).clamp(0, self.max_scroll() as i32);
        self.scroll = next as u16;
    }
}

pub fn render<R: RegistrationService>(frame: &mut Frame, state: &DocumentState, _app: &App<R>) {
    let chunks = common::screen_layout(frame.area());

    common::render_title(frame, chunks[0], state.title);

    let body = Paragraph::new(state.body)
        .wrap(Wrap { trim: false })
        .scroll((state.scroll, 0))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(body, chunks[1]);

    common::render_help(frame, chunks[2], &[("↑/↓", "Scroll"), ("Esc", "Back")]);
}

#[async_trait]
impl<R: RegistrationService> ScreenTrait<R> for DocumentState {
    fn render(&self, frame: &mut Frame, app: &App<R>) {
        render(frame, self, app)
    }

    async fn handle_key(&mut self, _context: &mut AppContext<R>, key: KeyEvent) -> Result<ScreenTransition> {
        match key.code {
            KeyCode::Up => self.scroll_by(-1),
            KeyCode::Down => self.scroll_by(1),
            KeyCode::PageUp => self.scroll_by(-10),
            KeyCode::PageDown => self.scroll_by(10),
            KeyCode::Home => self.scroll = 0,
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('q') => {
                return Ok(ScreenTransition::Back)
            }
            _ => {}
        }
        Ok(ScreenTransition::Stay)
    }

    async fn on_enter(&mut self, _context: &mut AppContext<R>) -> Result<()> {
        self.scroll = 0;
        Ok(())
    }

    fn id(&self) -> ScreenId {
        self.id
    }
}
