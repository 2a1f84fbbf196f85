//! Story list widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use story_core::Story;

use crate::ui::theme::StoryTheme;

/// Height of one story card in lines.
const CARD_HEIGHT: usize = 4;

/// Widget for the story list: one card per story in creation order.
pub struct StoryListWidget<'a> {
    stories: &'a [Story],
    selected: usize,
    theme: &'a StoryTheme,
}

impl<'a> StoryListWidget<'a> {
    pub fn new(stories: &'a [Story], theme: &'a StoryTheme) -> Self {
        Self {
            stories,
            selected: 0,
            theme,
        }
    }

    pub fn selected(mut self, selected: usize) -> Self {
        self.selected = selected;
        self
    }
}

impl Widget for StoryListWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(format!(" Stories ({}) ", self.stories.len()))
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(true));

        let inner = block.inner(area);
        block.render(area, buf);

        if self.stories.is_empty() {
            Paragraph::new(Line::from(Span::styled(
                "No stories yet. Press n to write the first one.",
                self.theme.system_style(),
            )))
            .render(inner, buf);
            return;
        }

        let mut lines: Vec<Line> = Vec::new();
        for (i, story) in self.stories.iter().enumerate() {
            let selected = i == self.selected;
            let marker = if selected { "▸ " } else { "  " };

            let title_style = if selected {
                Style::default()
                    .fg(self.theme.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                self.theme.entry_style(false)
            };
            lines.push(Line::from(vec![
                Span::styled(marker, self.theme.entry_style(selected)),
                Span::styled(story.title.clone(), title_style),
            ]));

            lines.push(Line::from(Span::styled(
                format!(
                    "  by u/{} • {} • {} parts",
                    story.author,
                    story.created_at.format("%b %d, %Y"),
                    story.part_count()
                ),
                self.theme.author_style(),
            )));

            lines.push(Line::from(Span::styled(
                format!("  {}", preview(&story.content)),
                self.theme.system_style(),
            )));

            lines.push(Line::from(""));
        }

        // Keep the selected card in view.
        let visible = inner.height as usize;
        let needed = (self.selected + 1) * CARD_HEIGHT;
        let scroll = needed.saturating_sub(visible);

        Paragraph::new(lines)
            .scroll((scroll as u16, 0))
            .render(inner, buf);
    }
}

/// First line of the content, clipped for the card.
fn preview(content: &str) -> String {
    const MAX: usize = 100;
    let first = content.lines().next().unwrap_or("");
    if first.chars().count() > MAX {
        let clipped: String = first.chars().take(MAX).collect();
        format!("{clipped}…")
    } else {
        first.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_clips_long_first_line() {
        let long = "x".repeat(150);
        let p = preview(&long);
        assert_eq!(p.chars().count(), 101);
        assert!(p.ends_with('…'));
    }

    #[test]
    fn test_preview_takes_first_line() {
        assert_eq!(preview("one\ntwo"), "one");
        assert_eq!(preview(""), "");
    }
}
