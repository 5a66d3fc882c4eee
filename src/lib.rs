//! seace-admin: terminal front end for the SEACE report administration site.

pub mod config;
pub mod error;
pub mod logging;
pub mod report;
pub mod selector;
pub mod shell;
pub mod tui;
pub mod types;
