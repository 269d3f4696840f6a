//! Wrapping selection for focus rings and popup lists

/// Something with a movable, wrapping selection
///
/// Implementors provide the accessors; moving the selection comes for free.
///
/// ```
/// use signup_tui::tui::state::Navigable;
///
/// struct Rows {
///     focus: usize,
/// }
///
/// impl Navigable for Rows {
///     fn len(&self) -> usize {
///         3
///     }
///
///     fn selected(&self) -> usize {
///         self.focus
///     }
///
///     fn set_selected(&mut self, index: usize) {
///         self.focus = index;
///     }
/// }
///
/// let mut rows = Rows { focus: 0 };
/// rows.previous();
/// assert_eq!(rows.selected(), 2);
/// rows.next();
/// assert_eq!(rows.selected(), 0);
/// ```
pub trait Navigable {
    fn len(&self) -> usize;

    fn selected(&self) -> usize;

    fn set_selected(&mut self, index: usize);

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Advance, wrapping from the last entry to the first
    fn next(&mut self) {
        if let Some(index) = (self.selected() + 1).checked_rem(self.len()) {
            self.set_selected(index);
        }
    }

    /// Step back, wrapping from the first entry to the last
    fn previous(&mut self) {
        let len = self.len();
        if len > 0 {
            self.set_selected((self.selected() + len - 1) % len);
        }
    }

    fn first(&mut self) {
        if !self.is_empty() {
            self.set_selected(0);
        }
    }

    fn last(&mut self) {
        if let Some(index) = self.len().checked_sub(1) {
            self.set_selected(index);
        }
    }
}
