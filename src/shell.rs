//! Page shell: the static heading above the selector.
//!
//! Holds a caller-supplied title and hands it back unchanged.
//! No validation, no state beyond the text itself.

use crate::types::DisplayText;

/// Default heading for the report administration site.
pub const DEFAULT_TITLE: &str = "Sitio de administración de reportes del SEACE";

/// The heading region of the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageShell {
    title: DisplayText,
}

impl PageShell {
    pub fn new(title: impl Into<DisplayText>) -> Self {
        PageShell { title: title.into() }
    }

    /// Text to render as the top-level heading.
    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    /// Replace the title. The next render shows the new text.
    pub fn set_title(&mut self, title: impl Into<DisplayText>) {
        self.title = title.into();
    }
}
