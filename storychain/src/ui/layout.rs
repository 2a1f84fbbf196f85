//! Layout calculations for the StoryChain TUI

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Calculate the main layout areas
pub struct AppLayout {
    pub title_area: Rect,
    pub body_area: Rect,
    pub status_bar: Rect,
    pub hotkey_bar: Rect,
}

impl AppLayout {
    /// Calculate layout based on terminal size
    pub fn calculate(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title bar
                Constraint::Min(8),    // Main content
                Constraint::Length(1), // Status bar
                Constraint::Length(1), // Hotkey bar
            ])
            .split(area);

        Self {
            title_area: chunks[0],
            body_area: chunks[1],
            status_bar: chunks[2],
            hotkey_bar: chunks[3],
        }
    }
}

/// Layout for the reader screen: story header, continuation editor,
/// continuation list.
pub struct ReaderLayout {
    pub header_area: Rect,
    pub editor_area: Rect,
    pub continuations_area: Rect,
}

impl ReaderLayout {
    /// Calculate the reader split, giving the header enough room for the
    /// story body up to roughly half the screen.
    pub fn calculate(area: Rect, header_lines: u16) -> Self {
        let header_height = (header_lines + 2).min(area.height / 2).max(4);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(header_height),
                Constraint::Length(4), // Continuation editor
                Constraint::Min(4),    // Continuation list
            ])
            .split(area);

        Self {
            header_area: chunks[0],
            editor_area: chunks[1],
            continuations_area: chunks[2],
        }
    }
}

/// Calculate fixed-size centered popup
pub fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect::new(x, y, width.min(area.width), height.min(area.height))
}
