//! Color theme and styling for the StoryChain TUI

use ratatui::style::{Color, Modifier, Style};

/// UI color theme
#[derive(Debug, Clone)]
pub struct StoryTheme {
    // Base colors
    pub foreground: Color,
    pub border: Color,
    pub border_focused: Color,

    // Brand accent (titles, selection marker)
    pub accent: Color,

    // Vote colors
    pub upvote: Color,
    pub downvote: Color,

    // Text colors
    pub author_text: Color,
    pub system_text: Color,
    pub error_text: Color,
}

impl Default for StoryTheme {
    fn default() -> Self {
        Self {
            foreground: Color::White,
            border: Color::DarkGray,
            border_focused: Color::Cyan,

            accent: Color::LightRed,

            upvote: Color::LightRed,
            downvote: Color::LightBlue,

            author_text: Color::DarkGray,
            system_text: Color::DarkGray,
            error_text: Color::Red,
        }
    }
}

impl StoryTheme {
    /// Get style for normal text
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.foreground)
    }

    /// Get style for story and section titles
    pub fn title_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Get style for author/date bylines
    pub fn author_style(&self) -> Style {
        Style::default().fg(self.author_text)
    }

    /// Get style for system hints
    pub fn system_style(&self) -> Style {
        Style::default()
            .fg(self.system_text)
            .add_modifier(Modifier::DIM)
    }

    /// Get style for error messages
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error_text)
    }

    /// Get border style
    pub fn border_style(&self, focused: bool) -> Style {
        Style::default().fg(if focused {
            self.border_focused
        } else {
            self.border
        })
    }

    /// Style for a vote arrow. `own` is the viewer's recorded direction
    /// on the continuation; the matching arrow lights up.
    pub fn vote_arrow_style(&self, arrow: i8, own: Option<i8>) -> Style {
        let color = if arrow > 0 { self.upvote } else { self.downvote };
        if own == Some(arrow) {
            Style::default().fg(color).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.border)
        }
    }

    /// Style for a list entry, highlighted when selected
    pub fn entry_style(&self, selected: bool) -> Style {
        if selected {
            Style::default()
                .fg(self.foreground)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.foreground)
        }
    }
}
