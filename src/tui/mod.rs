//! Interactive terminal front end.
//!
//! - `state`: pure data types (App, Action, Transition)
//! - `update`: pure transitions plus the single `apply` step
//! - `view`: pure rendering and click hit areas
//! - `theme`: style constants
//! - `run`: effects (terminal, event loop, input mapping)

pub mod run;
pub mod state;
pub mod theme;
pub mod update;
pub mod view;

pub use run::run;
