//! Visibility - Open/closed toggle of the widget shell
//!
//! Has no interaction with the session: messages and busy state persist
//! unchanged while the widget is collapsed.

/// Tracks whether the widget is expanded or collapsed to an icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibilityController {
    open: bool,
}

impl Default for VisibilityController {
    fn default() -> Self {
        Self::new()
    }
}

impl VisibilityController {
    /// Widgets start expanded.
    pub fn new() -> Self {
        Self { open: true }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip the state and return the new value.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }
}
