//! ptracker-tui - Terminal UI for the promise tracker
//!
//! This crate provides the ratatui-based interface. It drives the TEA loop
//! from ptracker-app and adds terminal rendering, event polling, and the
//! dashboard widgets.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
