//! Snapshot formatting for the shell and selector.
//!
//! Pure functions: (PageShell, ModeSelector) → Snapshot → String.
//! No I/O, no side effects.

use serde::Serialize;

use crate::error::Result;
use crate::selector::ModeSelector;
use crate::shell::PageShell;
use crate::types::{Marker, OperationMode, OutputFormat};

/// Everything a viewer of the page can observe, at one instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub title: String,
    pub mode: OperationMode,
    pub controls: Vec<ControlSnapshot>,
    /// Effective mode changes seen by a listener while building the snapshot.
    pub changes: usize,
}

/// One control as rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ControlSnapshot {
    pub mode: OperationMode,
    pub label: &'static str,
    pub marker: Marker,
}

impl Snapshot {
    pub fn capture(shell: &PageShell, selector: &ModeSelector, changes: usize) -> Self {
        Snapshot {
            title: shell.title().to_string(),
            mode: selector.mode(),
            controls: selector
                .controls()
                .iter()
                .map(|c| ControlSnapshot {
                    mode: c.mode,
                    label: c.label(),
                    marker: c.marker,
                })
                .collect(),
            changes,
        }
    }
}

/// Format a snapshot for output.
pub fn format_snapshot(snapshot: &Snapshot, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Human => Ok(format_human(snapshot)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(snapshot)?),
    }
}

// ============================================================================
// HUMAN FORMAT
// ============================================================================

fn format_human(snapshot: &Snapshot) -> String {
    let mut out = String::new();

    out.push_str(&format!("# {}\n\n", snapshot.title));
    for control in &snapshot.controls {
        let mark = match control.marker {
            Marker::Active => "[x]",
            Marker::Inactive => "[ ]",
        };
        out.push_str(&format!("{} {}\n", mark, control.label));
    }
    out.push('\n');
    out.push_str(&format!("Mode:    {}\n", snapshot.mode));
    out.push_str(&format!("Changes: {}\n", snapshot.changes));

    out
}

// ============================================================================
// TESTS
// ============================================================================
