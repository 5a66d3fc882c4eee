//! Pure rendering: map App state to ratatui widget trees.
//!
//! The layout is computed by [`layout`] so that the event loop can map a
//! mouse click back to the button under it using the same rectangles
//! that were drawn.

use ratatui::layout::{Alignment, Constraint, Layout, Position, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};
use ratatui::Frame;

use crate::selector::ModeSelector;
use crate::shell::PageShell;
use crate::types::{Control, Marker, OperationMode};

use super::state::App;
use super::theme;

// ============================================================================
// LAYOUT
// ============================================================================

/// Screen regions, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub heading: Rect,
    /// One rectangle per mode, in [`OperationMode::ALL`] order.
    pub controls: [Rect; 2],
    pub content: Rect,
    pub help: Rect,
}

/// Split the frame into regions.
///
/// The heading grows to fit the wrapped title, so `title` is needed here
/// as well as in [`render`].
pub fn layout(area: Rect, title: &str) -> Regions {
    let [heading, selector, content, help] = Layout::vertical([
        Constraint::Length(heading_height(title, area.width)),
        Constraint::Length(3), // buttons
        Constraint::Min(0),    // content
        Constraint::Length(1), // help
    ])
    .areas(area);

    let controls = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
        .areas(selector);

    Regions {
        heading,
        controls,
        content,
        help,
    }
}

/// Which button, if any, covers the given cell.
pub fn hit_test(area: Rect, title: &str, column: u16, row: u16) -> Option<OperationMode> {
    let regions = layout(area, title);
    let position = Position::new(column, row);
    OperationMode::ALL
        .into_iter()
        .zip(regions.controls)
        .find(|(_, rect)| rect.contains(position))
        .map(|(mode, _)| mode)
}

/// Rows taken by the heading block: wrapped title plus two border rows.
pub fn heading_height(title: &str, frame_width: u16) -> u16 {
    let inner = inner_width(frame_width);
    let lines = wrap_title(title, inner).len().max(1);
    u16::try_from(lines).unwrap_or(u16::MAX).saturating_add(2)
}

fn inner_width(frame_width: u16) -> usize {
    usize::from(frame_width.saturating_sub(2)).max(1)
}

/// Break `title` into rows no wider than `width` cells.
///
/// Breaks after spaces where possible and splits words that are too long
/// on their own. Concatenating the rows gives back `title` exactly.
pub fn wrap_title(title: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in title.split_inclusive(' ') {
        let word_width = Span::raw(word).width();

        if current_width + word_width > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }

        if word_width <= width {
            current.push_str(word);
            current_width += word_width;
            continue;
        }

        // Word wider than a whole row
        for ch in word.chars() {
            let mut buf = [0u8; 4];
            let ch_width = Span::raw(&*ch.encode_utf8(&mut buf)).width();
            if current_width + ch_width > width && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            current.push(ch);
            current_width += ch_width;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

// ============================================================================
// DISPATCH
// ============================================================================

/// Render the whole page to the terminal frame.
pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();
    let regions = layout(area, app.shell.title());

    frame.render_widget(render_heading(&app.shell, area.width), regions.heading);

    for (control, rect) in app.selector.controls().into_iter().zip(regions.controls) {
        let focused = control.mode == app.focus;
        frame.render_widget(render_control(control, focused), rect);
    }

    frame.render_widget(render_content(&app.selector), regions.content);
    frame.render_widget(render_help(), regions.help);
}

// ============================================================================
// PAGE SHELL
// ============================================================================

/// Heading block with the title, wrapped but otherwise untouched.
fn render_heading(shell: &PageShell, frame_width: u16) -> Paragraph<'static> {
    let lines: Vec<Line<'static>> = wrap_title(shell.title(), inner_width(frame_width))
        .into_iter()
        .map(|row| Line::from(Span::styled(row, theme::STYLE_TITLE)))
        .collect();

    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .block(Block::bordered().border_style(theme::STYLE_BORDER))
}

// ============================================================================
// MODE SELECTOR
// ============================================================================

fn render_control(control: Control, focused: bool) -> Paragraph<'static> {
    let style = match control.marker {
        Marker::Active => theme::STYLE_ACTIVE,
        Marker::Inactive => theme::STYLE_INACTIVE,
    };
    let border = if focused {
        theme::STYLE_FOCUS
    } else {
        theme::STYLE_BORDER
    };

    Paragraph::new(Line::from(control.label()))
        .alignment(Alignment::Center)
        .style(style)
        .block(Block::bordered().border_style(border))
}

/// Placeholder for the externally provided view of the selected mode.
fn render_content(selector: &ModeSelector) -> Paragraph<'static> {
    let mode = selector.mode();
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  No {} view attached.", mode),
            theme::STYLE_DIM,
        )),
    ];

    Paragraph::new(text)
        .wrap(Wrap { trim: false })
        .block(Block::bordered().title(mode.label()).border_style(theme::STYLE_BORDER))
}

fn render_help() -> Paragraph<'static> {
    Paragraph::new(Span::styled(
        "[1/e] explore  [2/g] generate  [←/→/Tab] focus  [Enter/Space] select  [q] quit",
        theme::STYLE_HELP,
    ))
}

// ============================================================================
// TESTS
// ============================================================================
