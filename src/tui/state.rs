//! TUI state algebra: pure types, zero effects.
//!
//! The selected mode lives in [`ModeSelector`]; the only other piece of
//! UI state is keyboard focus, which says which button Enter would press.
//! Focus and selection are independent: moving focus never selects.

use crossterm::event::{KeyEvent, MouseEvent};

use crate::selector::ModeSelector;
use crate::shell::PageShell;
use crate::types::OperationMode;

// ============================================================================
// APP EVENTS
// ============================================================================

/// Everything the event loop can receive from its channel.
#[derive(Debug)]
pub enum AppEvent {
    /// A terminal key event from the crossterm reader thread.
    Key(KeyEvent),
    /// A mouse event, forwarded only when mouse support is on.
    Mouse(MouseEvent),
    /// Terminal was resized; redraw.
    Resize,
}

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Top-level TUI model.
#[derive(Debug)]
pub struct App {
    /// Heading region.
    pub shell: PageShell,

    /// Exclusive-choice mode state.
    pub selector: ModeSelector,

    /// Button that Enter/Space would activate.
    pub focus: OperationMode,

    /// Set to true when the app should exit on the next tick.
    pub should_quit: bool,
}

impl App {
    /// Fresh app: Explore selected and focused.
    pub fn new(shell: PageShell) -> Self {
        App {
            shell,
            selector: ModeSelector::new(),
            focus: OperationMode::default(),
            should_quit: false,
        }
    }
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Semantic user action, decoupled from raw terminal events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Press the button for this mode directly (number key or mouse click).
    Select(OperationMode),
    /// Move focus to the left button.
    FocusLeft,
    /// Move focus to the right button.
    FocusRight,
    /// Move focus to the other button.
    FocusNext,
    /// Press the focused button.
    Activate,
    /// Quit the application.
    Quit,
}

// ============================================================================
// TRANSITIONS
// ============================================================================

/// Result of a pure state transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Select this mode (and focus its button).
    Select(OperationMode),
    /// Only move focus.
    Focus(OperationMode),
    /// Quit the application.
    Quit,
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_app_starts_on_explore() {
        let app = App::new(PageShell::new("T"));
        assert_eq!(app.selector.mode(), OperationMode::Explore);
        assert_eq!(app.focus, OperationMode::Explore);
        assert!(!app.should_quit);
        assert_eq!(app.shell.title(), "T");
    }

    #[test]
    fn action_equality_for_matching() {
        assert_eq!(
            Action::Select(OperationMode::Generate),
            Action::Select(OperationMode::Generate)
        );
        assert_ne!(
            Action::Select(OperationMode::Generate),
            Action::Select(OperationMode::Explore)
        );
        assert_ne!(Action::FocusLeft, Action::FocusRight);
    }
}
