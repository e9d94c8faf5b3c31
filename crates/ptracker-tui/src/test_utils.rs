//! Rendering harness for widget and screen tests
//!
//! Everything draws into ratatui's `TestBackend`; assertions read the
//! buffer back one row at a time, so a match never spans a line break.

use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use ratatui::{Frame, Terminal};

/// Default screen: a classic 80x24 terminal
pub const TEST_WIDTH: u16 = 80;
pub const TEST_HEIGHT: u16 = 24;

/// Narrow screen where the table drops columns and the popup squeezes
pub const COMPACT_WIDTH: u16 = 40;
pub const COMPACT_HEIGHT: u16 = 12;

pub struct TestTerminal {
    terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    pub fn new() -> Self {
        Self::with_size(TEST_WIDTH, TEST_HEIGHT)
    }

    pub fn compact() -> Self {
        Self::with_size(COMPACT_WIDTH, COMPACT_HEIGHT)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let terminal = Terminal::new(TestBackend::new(width, height))
            .expect("TestBackend terminal");
        Self { terminal }
    }

    pub fn area(&self) -> Rect {
        self.buffer().area
    }

    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.draw_with(|frame| frame.render_widget(widget, area));
    }

    /// Full-screen draw, e.g. `term.draw_with(|f| render::view(f, &state))`
    pub fn draw_with<F>(&mut self, draw: F)
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(draw).expect("draw into TestBackend");
    }

    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    /// Rendered text of every row, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        let buffer = self.buffer();
        (0..buffer.area.height).map(move |y| row_text(buffer, y))
    }

    pub fn buffer_contains(&self, text: &str) -> bool {
        self.rows().any(|row| row.contains(text))
    }

    pub fn line_contains(&self, line: u16, text: &str) -> bool {
        self.rows()
            .nth(usize::from(line))
            .is_some_and(|row| row.contains(text))
    }

    /// First row showing `text`
    pub fn row_of(&self, text: &str) -> Option<u16> {
        self.rows()
            .position(|row| row.contains(text))
            .and_then(|y| u16::try_from(y).ok())
    }

    /// Occurrences of `text` across the screen
    pub fn count(&self, text: &str) -> usize {
        self.rows().map(|row| row.matches(text).count()).sum()
    }

    /// Whole screen, one line per row; handy in assertion messages
    pub fn content(&self) -> String {
        self.rows().fold(String::new(), |mut out, row| {
            out.push_str(&row);
            out.push('\n');
            out
        })
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}

fn row_text(buffer: &Buffer, y: u16) -> String {
    (0..buffer.area.width)
        .map(|x| buffer[(x, y)].symbol())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::Paragraph;

    fn showing(text: &str) -> TestTerminal {
        let mut term = TestTerminal::with_size(20, 4);
        term.render_widget(Paragraph::new(text.to_string()), term.area());
        term
    }

    #[test]
    fn test_sizes() {
        assert_eq!(TestTerminal::new().area(), Rect::new(0, 0, TEST_WIDTH, TEST_HEIGHT));
        assert_eq!(
            TestTerminal::compact().area(),
            Rect::new(0, 0, COMPACT_WIDTH, COMPACT_HEIGHT)
        );
        assert_eq!(TestTerminal::default().area().width, TEST_WIDTH);
    }

    #[test]
    fn test_matches_stay_within_a_row() {
        let term = showing("Broken\npromise");
        assert!(term.buffer_contains("Broken"));
        assert!(!term.buffer_contains("Broken promise"));
        assert!(term.line_contains(1, "promise"));
        assert!(!term.line_contains(9, "promise"));
    }

    #[test]
    fn test_row_of_and_count() {
        let term = showing("Delivered\nBroken\nDelivered");
        assert_eq!(term.row_of("Broken"), Some(1));
        assert_eq!(term.row_of("Compromised"), None);
        assert_eq!(term.count("Delivered"), 2);
    }

    #[test]
    fn test_content_has_one_line_per_row() {
        let term = showing("Ada");
        assert_eq!(term.content().lines().count(), 4);
        assert!(term.content().starts_with("Ada"));
    }
}
