use tracing::debug;

use crate::form::{Navigator, Route};
use crate::tui::screen_trait::ScreenId;

/// ScreenStateMachine manages screen navigation state
///
/// This state machine tracks:
/// - The current active screen
/// - Navigation history for back button support
///
/// Screens stay owned by the App struct; only navigation state lives here.
pub struct ScreenStateMachine {
    /// Currently active screen
    current: ScreenId,

    /// Navigation history (for back button functionality)
    history: Vec<ScreenId>,
}

impl Default for ScreenStateMachine {
    fn default() -> Self {
        Self {
            current: ScreenId::SignUp,
            history: vec![],
        }
    }
}

impl ScreenStateMachine {
    /// Create a new ScreenStateMachine starting at the sign-up form
    pub fn new() -> Self {
        Self::default()
    }

    /// Navigate to a specific screen
    pub fn go_to(&mut self, screen_id: ScreenId) {
        self.history.push(self.current);
        self.current = screen_id;
    }

    /// Go back to the previous screen
    ///
    /// Returns true if we went back, false if there's no history
    pub fn go_back(&mut self) -> bool {
        if let Some(previous) = self.history.pop() {
            self.current = previous;
            true
        } else {
            false
        }
    }

    /// Get the current screen ID
    pub fn current(&self) -> ScreenId {
        self.current
    }

    /// Get the navigation history
    pub fn history(&self) -> &[ScreenId] {
        &self.history
    }
}

impl Navigator for ScreenStateMachine {
    fn navigate(&mut self, route: Route) {
        debug!(route = %route, "navigating");
        self.go_to(ScreenId::from(route));
    }
}
