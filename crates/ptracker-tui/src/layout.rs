//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Rows taken by the navbar (bordered, one content row)
pub const NAVBAR_HEIGHT: u16 = 3;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Brand plus the five navigation links
    pub navbar: Rect,

    /// Current screen
    pub body: Rect,

    /// Keybinding hints
    pub footer: Rect,
}

/// Split the terminal into navbar, body and footer
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(NAVBAR_HEIGHT),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .split(area);

    ScreenAreas {
        navbar: chunks[0],
        body: chunks[1],
        footer: chunks[2],
    }
}

/// Home screen: candidate profile on top, promise table below
pub fn split_home(body: Rect) -> (Rect, Rect) {
    let profile_height = if body.height >= 20 { 6 } else { 4 };
    let chunks =
        Layout::vertical([Constraint::Length(profile_height), Constraint::Min(5)]).split(body);
    (chunks[0], chunks[1])
}
