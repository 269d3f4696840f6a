use async_trait::async_trait;
use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::Frame;

use crate::form::Route;
use crate::services::RegistrationService;
use crate::tui::app::{App, AppContext};

/// Screen trait defines the interface for all TUI screens
///
/// Methods take `&mut self` for screen state and `context` for app-level
/// resources, so screen state and app context can be borrowed independently.
#[async_trait]
pub trait Screen<R: RegistrationService>: Send {
    /// Render this screen to the terminal frame
    fn render(&self, frame: &mut Frame, app: &App<R>);

    /// Handle keyboard input and return the next screen transition
    async fn handle_key(&mut self, context: &mut AppContext<R>, key: KeyEvent) -> Result<ScreenTransition>;

    /// Called when entering this screen
    async fn on_enter(&mut self, context: &mut AppContext<R>) -> Result<()> {
        let _ = context;
        Ok(())
    }

    /// Called when leaving this screen
    async fn on_exit(&mut self, context: &mut AppContext<R>) -> Result<()> {
        let _ = context;
        Ok(())
    }

    /// Get the screen identifier
    fn id(&self) -> ScreenId;
}

/// Screen transition represents the result of handling input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenTransition {
    /// Stay on the current screen (no navigation)
    Stay,

    /// Go back to the previous screen in history
    Back,

    /// Quit the application
    Quit,
}

/// Screen identifier for each screen in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenId {
    SignUp,
    Home,
    Terms,
    Privacy,
}

impl From<Route> for ScreenId {
    fn from(route: Route) -> Self {
        match route {
            Route::SignUp => ScreenId::SignUp,
            Route::Home => ScreenId::Home,
            Route::Terms => ScreenId::Terms,
            Route::Privacy => ScreenId::Privacy,
        }
    }
}
