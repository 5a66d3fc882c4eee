//! Exclusive-choice selector over [`OperationMode`].
//!
//! The selector owns a single mode value. `select` is the only way to
//! change it. Which control is marked active is re-derived from that
//! value on every request, so the markers cannot drift from the state.
//!
//! Consumers that need to react to a change (the explore and generate
//! views) register a listener with [`ModeSelector::on_change`].

use std::fmt;

use crate::types::{Control, Marker, ModeChange, OperationMode};

type Listener = Box<dyn FnMut(ModeChange)>;

/// Two-control mode selector. Starts on [`OperationMode::Explore`].
pub struct ModeSelector {
    mode: OperationMode,
    listeners: Vec<Listener>,
}

impl ModeSelector {
    pub fn new() -> Self {
        ModeSelector {
            mode: OperationMode::default(),
            listeners: Vec::new(),
        }
    }

    /// Currently selected mode.
    pub fn mode(&self) -> OperationMode {
        self.mode
    }

    /// Select `mode`.
    ///
    /// Always accepted. Returns the change when the mode actually moved;
    /// selecting the current mode returns `None` and notifies nobody.
    /// Listeners run after the state is updated, in registration order.
    pub fn select(&mut self, mode: OperationMode) -> Option<ModeChange> {
        if mode == self.mode {
            return None;
        }

        let change = ModeChange {
            from: self.mode,
            to: mode,
        };
        self.mode = mode;

        for listener in &mut self.listeners {
            listener(change);
        }

        Some(change)
    }

    /// Register a listener for effective mode changes.
    pub fn on_change(&mut self, listener: impl FnMut(ModeChange) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Marker for the control bound to `mode`.
    pub fn marker(&self, mode: OperationMode) -> Marker {
        if mode == self.mode {
            Marker::Active
        } else {
            Marker::Inactive
        }
    }

    /// Both controls, in layout order, with markers derived from the state.
    pub fn controls(&self) -> [Control; 2] {
        OperationMode::ALL.map(|mode| Control {
            mode,
            marker: self.marker(mode),
        })
    }
}

impl Default for ModeSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ModeSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModeSelector")
            .field("mode", &self.mode)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn active_count(selector: &ModeSelector) -> usize {
        selector
            .controls()
            .iter()
            .filter(|c| c.marker.is_active())
            .count()
    }

    fn assert_markers_match(selector: &ModeSelector) {
        assert_eq!(active_count(selector), 1);
        for control in selector.controls() {
            assert_eq!(control.marker.is_active(), control.mode == selector.mode());
        }
    }

    #[test]
    fn starts_on_explore_with_explore_active() {
        let selector = ModeSelector::new();
        assert_eq!(selector.mode(), OperationMode::Explore);
        assert_eq!(selector.marker(OperationMode::Explore), Marker::Active);
        assert_eq!(selector.marker(OperationMode::Generate), Marker::Inactive);
    }

    #[test]
    fn controls_follow_layout_order_and_labels() {
        let selector = ModeSelector::new();
        let [left, right] = selector.controls();
        assert_eq!(left.label(), "Explorar Reportes");
        assert_eq!(right.label(), "Generar Reporte");
    }

    #[test]
    fn select_generate_from_explore() {
        let mut selector = ModeSelector::new();
        let change = selector.select(OperationMode::Generate);
        assert_eq!(
            change,
            Some(ModeChange {
                from: OperationMode::Explore,
                to: OperationMode::Generate,
            })
        );
        assert_eq!(selector.marker(OperationMode::Generate), Marker::Active);
        assert_eq!(selector.marker(OperationMode::Explore), Marker::Inactive);
    }

    #[test]
    fn select_explore_from_generate() {
        let mut selector = ModeSelector::new();
        selector.select(OperationMode::Generate);
        assert!(selector.select(OperationMode::Explore).is_some());
        assert_eq!(selector.mode(), OperationMode::Explore);
        assert_markers_match(&selector);
    }

    #[test]
    fn reselecting_current_mode_is_noop() {
        let mut selector = ModeSelector::new();
        let before = selector.controls();
        assert_eq!(selector.select(OperationMode::Explore), None);
        assert_eq!(selector.mode(), OperationMode::Explore);
        assert_eq!(selector.controls(), before);
    }

    #[test]
    fn exactly_one_active_across_sequence() {
        let mut selector = ModeSelector::new();
        assert_markers_match(&selector);

        let steps = [
            (OperationMode::Generate, OperationMode::Generate),
            (OperationMode::Generate, OperationMode::Generate),
            (OperationMode::Explore, OperationMode::Explore),
        ];
        for (pick, expected) in steps {
            selector.select(pick);
            assert_eq!(selector.mode(), expected);
            assert_markers_match(&selector);
        }
    }

    #[test]
    fn listeners_see_only_effective_changes() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut selector = ModeSelector::new();
        let sink = Rc::clone(&seen);
        selector.on_change(move |change| sink.borrow_mut().push(change.to));

        selector.select(OperationMode::Explore);
        selector.select(OperationMode::Generate);
        selector.select(OperationMode::Generate);
        selector.select(OperationMode::Explore);

        assert_eq!(
            *seen.borrow(),
            vec![OperationMode::Generate, OperationMode::Explore]
        );
    }

    #[test]
    fn listeners_run_in_registration_order() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let mut selector = ModeSelector::new();
        for id in 0..3 {
            let sink = Rc::clone(&order);
            selector.on_change(move |_| sink.borrow_mut().push(id));
        }
        selector.select(OperationMode::Generate);
        assert_eq!(*order.borrow(), vec![0, 1, 2]);
    }

    #[test]
    fn instances_do_not_share_state() {
        let mut a = ModeSelector::new();
        let b = ModeSelector::new();
        a.select(OperationMode::Generate);
        assert_eq!(a.mode(), OperationMode::Generate);
        assert_eq!(b.mode(), OperationMode::Explore);
    }

    #[test]
    fn debug_shows_mode_and_listener_count() {
        let mut selector = ModeSelector::new();
        selector.on_change(|_| {});
        let rendered = format!("{:?}", selector);
        assert!(rendered.contains("Explore"));
        assert!(rendered.contains("listeners: 1"));
    }
}
