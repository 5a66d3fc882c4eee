//! TUI effects boundary: event loop, terminal lifecycle, key mapping.
//!
//! This is the only module with side effects. It wires the pure layers
//! (state, update, view) to the real terminal via crossterm and ratatui.
//!
//! A reader thread forwards crossterm events into an mpsc channel; the
//! loop on the main thread owns the App and processes one event at a time.

use std::io;
use std::sync::mpsc;
use std::thread;

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;

use crate::error::Result;
use crate::shell::PageShell;
use crate::types::OperationMode;

use super::state::{Action, App, AppEvent};
use super::update::dispatch;
use super::view::{hit_test, render};

// ============================================================================
// INPUT MAPPING
// ============================================================================

/// Map a crossterm key event to a semantic Action.
///
/// Returns None for keys that don't map to any action and for releases.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Char('1') | KeyCode::Char('e') => Some(Action::Select(OperationMode::Explore)),
        KeyCode::Char('2') | KeyCode::Char('g') => Some(Action::Select(OperationMode::Generate)),

        KeyCode::Left | KeyCode::Char('h') => Some(Action::FocusLeft),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::FocusRight),
        KeyCode::Tab | KeyCode::BackTab => Some(Action::FocusNext),

        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Activate),

        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),

        _ => None,
    }
}

/// Map a left click on a button to selecting its mode.
///
/// `title` is the heading currently drawn; its height moves the buttons.
pub fn map_mouse(mouse: MouseEvent, area: Rect, title: &str) -> Option<Action> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            hit_test(area, title, mouse.column, mouse.row).map(Action::Select)
        }
        _ => None,
    }
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

/// Set up the terminal for TUI mode.
///
/// Once raw mode is on, any later failure restores the terminal before
/// the error is returned.
fn setup_terminal(mouse: bool) -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    or_rollback(
        || {
            io::stdout().execute(EnterAlternateScreen)?;
            if mouse {
                io::stdout().execute(EnableMouseCapture)?;
            }
            Terminal::new(CrosstermBackend::new(io::stdout()))
        },
        || {
            let _ = restore_terminal(mouse);
        },
    )
}

/// Run `attempt`; if it fails, run `rollback` and pass the error on.
fn or_rollback<T>(
    attempt: impl FnOnce() -> io::Result<T>,
    rollback: impl FnOnce(),
) -> io::Result<T> {
    let result = attempt();
    if let Err(e) = &result {
        tracing::error!(error = %e, "terminal setup failed, restoring");
        rollback();
    }
    result
}

/// Restore the terminal to normal mode.
///
/// Every step is attempted; the first error is reported.
fn restore_terminal(mouse: bool) -> io::Result<()> {
    let mouse_result = if mouse {
        io::stdout().execute(DisableMouseCapture).map(|_| ())
    } else {
        Ok(())
    };
    let raw_result = disable_raw_mode();
    let screen_result = io::stdout().execute(LeaveAlternateScreen).map(|_| ());
    mouse_result.and(raw_result).and(screen_result)
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook(mouse: bool) {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal(mouse);
        original_hook(panic_info);
    }));
}

// ============================================================================
// BACKGROUND THREADS
// ============================================================================

/// Spawn a thread that reads crossterm events and forwards them to the channel.
fn spawn_event_reader(tx: mpsc::Sender<AppEvent>, mouse: bool) {
    thread::spawn(move || {
        loop {
            let forwarded = match event::read() {
                Ok(Event::Key(key)) => Some(AppEvent::Key(key)),
                Ok(Event::Mouse(m)) if mouse => Some(AppEvent::Mouse(m)),
                Ok(Event::Resize(_, _)) => Some(AppEvent::Resize),
                Ok(_) => None,
                Err(e) => {
                    tracing::error!(error = %e, "terminal event read failed");
                    break;
                }
            };
            if let Some(app_event) = forwarded {
                if tx.send(app_event).is_err() {
                    break; // receiver dropped, TUI is shutting down
                }
            }
        }
    });
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// Run the TUI until the user quits.
pub fn run(shell: PageShell, mouse: bool) -> Result<()> {
    install_panic_hook(mouse);
    let mut terminal = setup_terminal(mouse)?;

    let mut app = App::new(shell);
    app.selector.on_change(|change| {
        tracing::info!(from = %change.from, to = %change.to, "mode changed");
    });
    tracing::info!(mode = %app.selector.mode(), "selector ready");

    let (tx, rx) = mpsc::channel::<AppEvent>();
    spawn_event_reader(tx, mouse);

    let outcome = event_loop(&mut terminal, &mut app, &rx);

    restore_terminal(mouse)?;
    tracing::info!(mode = %app.selector.mode(), "exiting");
    outcome
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    rx: &mpsc::Receiver<AppEvent>,
) -> Result<()> {
    loop {
        let completed = terminal.draw(|frame| render(&*app, frame))?;
        let area = completed.area;

        if app.should_quit {
            return Ok(());
        }

        // Block on next event
        let event = match rx.recv() {
            Ok(e) => e,
            Err(_) => return Ok(()), // reader thread gone
        };

        let action = match event {
            AppEvent::Key(key) => map_key(key),
            AppEvent::Mouse(mouse) => map_mouse(mouse, area, app.shell.title()),
            AppEvent::Resize => None,
        };

        if let Some(action) = action {
            tracing::debug!(?action, "dispatch");
            dispatch(app, &action);
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
