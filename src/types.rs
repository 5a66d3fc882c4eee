//! Domain types for seace-admin.
//!
//! The whole domain is one two-valued enum plus the text shown above it.
//! Everything else in the crate is derived from these.

use std::fmt;

use serde::Serialize;

// ============================================================================
// OPERATION MODE
// ============================================================================

/// Which administrative operation is currently selected.
///
/// Exactly two members. There is no "unset" value: a selector always
/// holds one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationMode {
    /// Browse previously generated reports.
    #[default]
    Explore,
    /// Produce a new report.
    Generate,
}

impl OperationMode {
    /// Both modes, in the order their controls are laid out.
    pub const ALL: [OperationMode; 2] = [OperationMode::Explore, OperationMode::Generate];

    /// Fixed label shown on this mode's control.
    pub fn label(self) -> &'static str {
        match self {
            OperationMode::Explore => "Explorar Reportes",
            OperationMode::Generate => "Generar Reporte",
        }
    }

    /// Machine name, as used on the command line and in JSON.
    pub fn as_str(self) -> &'static str {
        match self {
            OperationMode::Explore => "explore",
            OperationMode::Generate => "generate",
        }
    }

    /// The other mode.
    pub fn other(self) -> Self {
        match self {
            OperationMode::Explore => OperationMode::Generate,
            OperationMode::Generate => OperationMode::Explore,
        }
    }
}

impl fmt::Display for OperationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// MARKERS AND CONTROLS
// ============================================================================

/// Visual state of a control relative to the current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Marker {
    Active,
    Inactive,
}

impl Marker {
    pub fn is_active(self) -> bool {
        self == Marker::Active
    }
}

/// One of the selector's two controls, as seen from outside.
///
/// Built on demand from the selector's state; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Control {
    pub mode: OperationMode,
    pub marker: Marker,
}

impl Control {
    pub fn label(&self) -> &'static str {
        self.mode.label()
    }
}

/// Payload delivered to change listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeChange {
    pub from: OperationMode,
    pub to: OperationMode,
}

// ============================================================================
// DISPLAY TEXT
// ============================================================================

/// Caller-supplied heading text. Stored and rendered verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DisplayText(String);

impl DisplayText {
    pub fn new(text: impl Into<String>) -> Self {
        DisplayText(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for DisplayText {
    fn from(s: &str) -> Self {
        DisplayText(s.to_string())
    }
}

impl From<String> for DisplayText {
    fn from(s: String) -> Self {
        DisplayText(s)
    }
}

impl fmt::Display for DisplayText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// OUTPUT
// ============================================================================

/// Output format for snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Human,
    /// Machine-readable JSON.
    Json,
}

// ============================================================================
// TESTS
// ============================================================================
