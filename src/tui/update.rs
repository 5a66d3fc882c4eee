//! Pure state transitions: (focus, Action) → Transition, then `apply`.
//!
//! `update` never touches the app. `apply` is the single place where a
//! transition reaches the selector, so listener notification always goes
//! through [`ModeSelector::select`](crate::selector::ModeSelector::select).

use crate::types::{ModeChange, OperationMode};

use super::state::{Action, App, Transition};

/// Pure state transition function.
///
/// Every action is accepted in every state; both buttons are always enabled.
pub fn update(focus: OperationMode, action: &Action) -> Transition {
    match action {
        Action::Select(mode) => Transition::Select(*mode),
        Action::Activate => Transition::Select(focus),
        Action::FocusLeft => Transition::Focus(OperationMode::ALL[0]),
        Action::FocusRight => Transition::Focus(OperationMode::ALL[1]),
        Action::FocusNext => Transition::Focus(focus.other()),
        Action::Quit => Transition::Quit,
    }
}

/// Apply a transition to the app. Returns the change when the mode moved.
pub fn apply(app: &mut App, transition: Transition) -> Option<ModeChange> {
    match transition {
        Transition::Select(mode) => {
            app.focus = mode;
            app.selector.select(mode)
        }
        Transition::Focus(mode) => {
            app.focus = mode;
            None
        }
        Transition::Quit => {
            app.should_quit = true;
            None
        }
    }
}

/// `update` followed by `apply`.
pub fn dispatch(app: &mut App, action: &Action) -> Option<ModeChange> {
    let transition = update(app.focus, action);
    apply(app, transition)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::{PageShell, DEFAULT_TITLE};
    use crate::types::Marker;

    fn app() -> App {
        App::new(PageShell::new(DEFAULT_TITLE))
    }

    // -- update --

    #[test]
    fn select_action_selects_that_mode() {
        for mode in OperationMode::ALL {
            for focus in OperationMode::ALL {
                assert_eq!(update(focus, &Action::Select(mode)), Transition::Select(mode));
            }
        }
    }

    #[test]
    fn activate_selects_focused_mode() {
        assert_eq!(
            update(OperationMode::Generate, &Action::Activate),
            Transition::Select(OperationMode::Generate)
        );
    }

    #[test]
    fn focus_moves_are_absolute_or_toggle() {
        assert_eq!(
            update(OperationMode::Generate, &Action::FocusLeft),
            Transition::Focus(OperationMode::Explore)
        );
        assert_eq!(
            update(OperationMode::Explore, &Action::FocusRight),
            Transition::Focus(OperationMode::Generate)
        );
        assert_eq!(
            update(OperationMode::Explore, &Action::FocusNext),
            Transition::Focus(OperationMode::Generate)
        );
    }

    #[test]
    fn quit_is_always_available() {
        assert_eq!(update(OperationMode::Generate, &Action::Quit), Transition::Quit);
    }

    // -- apply --

    #[test]
    fn focus_does_not_change_selection() {
        let mut app = app();
        assert_eq!(dispatch(&mut app, &Action::FocusRight), None);
        assert_eq!(app.focus, OperationMode::Generate);
        assert_eq!(app.selector.mode(), OperationMode::Explore);
    }

    #[test]
    fn activate_after_focus_selects_generate() {
        let mut app = app();
        dispatch(&mut app, &Action::FocusRight);
        let change = dispatch(&mut app, &Action::Activate);
        assert_eq!(
            change,
            Some(ModeChange {
                from: OperationMode::Explore,
                to: OperationMode::Generate,
            })
        );
        assert_eq!(app.selector.marker(OperationMode::Generate), Marker::Active);
    }

    #[test]
    fn direct_select_moves_focus_too() {
        let mut app = app();
        dispatch(&mut app, &Action::Select(OperationMode::Generate));
        assert_eq!(app.focus, OperationMode::Generate);
    }

    #[test]
    fn sequence_explore_generate_generate_explore() {
        let mut app = app();
        assert_eq!(app.selector.mode(), OperationMode::Explore);

        assert!(dispatch(&mut app, &Action::Select(OperationMode::Generate)).is_some());
        assert_eq!(app.selector.mode(), OperationMode::Generate);
        assert_eq!(app.selector.marker(OperationMode::Explore), Marker::Inactive);

        assert!(dispatch(&mut app, &Action::Select(OperationMode::Generate)).is_none());
        assert_eq!(app.selector.mode(), OperationMode::Generate);

        assert!(dispatch(&mut app, &Action::Select(OperationMode::Explore)).is_some());
        assert_eq!(app.selector.mode(), OperationMode::Explore);
        assert_eq!(app.selector.marker(OperationMode::Explore), Marker::Active);
        assert_eq!(app.selector.marker(OperationMode::Generate), Marker::Inactive);
    }

    #[test]
    fn quit_sets_flag_without_touching_mode() {
        let mut app = app();
        dispatch(&mut app, &Action::Select(OperationMode::Generate));
        dispatch(&mut app, &Action::Quit);
        assert!(app.should_quit);
        assert_eq!(app.selector.mode(), OperationMode::Generate);
    }
}
