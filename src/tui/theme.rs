//! TUI color semantics and style constants.
//!
//! - Cyan background: the active (selected) mode button
//! - Dim: the inactive button, help text, placeholders
//! - Yellow border: keyboard focus
//! - Bold white: the page heading

use ratatui::style::{Color, Modifier, Style};

/// Page heading.
pub const STYLE_TITLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

/// Label of the active mode button.
pub const STYLE_ACTIVE: Style = Style::new()
    .fg(Color::Black)
    .bg(Color::Cyan)
    .add_modifier(Modifier::BOLD);

/// Label of the inactive mode button.
pub const STYLE_INACTIVE: Style = Style::new().fg(Color::DarkGray);

/// Border of the focused button.
pub const STYLE_FOCUS: Style = Style::new().fg(Color::Yellow);

/// Border of an unfocused button.
pub const STYLE_BORDER: Style = Style::new().fg(Color::DarkGray);

/// De-emphasized text.
pub const STYLE_DIM: Style = Style::new().fg(Color::DarkGray);

/// Footer / help line.
pub const STYLE_HELP: Style = Style::new().fg(Color::DarkGray);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_and_inactive_are_distinguishable() {
        assert_ne!(STYLE_ACTIVE, STYLE_INACTIVE);
        assert_eq!(STYLE_ACTIVE.bg, Some(Color::Cyan));
        assert!(STYLE_ACTIVE.add_modifier.contains(Modifier::BOLD));
        assert_eq!(STYLE_INACTIVE.bg, None);
    }

    #[test]
    fn focus_differs_from_plain_border() {
        assert_ne!(STYLE_FOCUS.fg, STYLE_BORDER.fg);
    }
}
