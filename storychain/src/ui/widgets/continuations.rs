//! Continuation list widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use story_core::{Continuation, UserId};

use crate::ui::theme::StoryTheme;

/// Widget for a story's continuations: vote column, byline, content.
pub struct ContinuationListWidget<'a> {
    continuations: &'a [Continuation],
    viewer: UserId,
    selected: usize,
    theme: &'a StoryTheme,
}

impl<'a> ContinuationListWidget<'a> {
    pub fn new(continuations: &'a [Continuation], viewer: UserId, theme: &'a StoryTheme) -> Self {
        Self {
            continuations,
            viewer,
            selected: 0,
            theme,
        }
    }

    pub fn selected(mut self, selected: usize) -> Self {
        self.selected = selected;
        self
    }
}

impl Widget for ContinuationListWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(format!(" Continuations ({}) ", self.continuations.len()))
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(true));

        let inner = block.inner(area);
        block.render(area, buf);

        if self.continuations.is_empty() {
            Paragraph::new(Line::from(Span::styled(
                "No continuations yet. Press i to write one.",
                self.theme.system_style(),
            )))
            .render(inner, buf);
            return;
        }

        let mut lines: Vec<Line> = Vec::new();
        let mut selected_start = 0;
        let mut selected_end = 0;

        for (i, cont) in self.continuations.iter().enumerate() {
            let selected = i == self.selected;
            if selected {
                selected_start = lines.len();
            }

            let marker = if selected { "▸ " } else { "  " };
            let own = cont.vote_of(self.viewer);

            let tally_style = if selected {
                Style::default()
                    .fg(self.theme.foreground)
                    .add_modifier(Modifier::BOLD)
            } else {
                self.theme.entry_style(false)
            };

            lines.push(Line::from(vec![
                Span::styled(marker, self.theme.entry_style(selected)),
                Span::styled("▲ ", self.theme.vote_arrow_style(1, own)),
                Span::styled(format!("{}", cont.votes), tally_style),
                Span::styled(" ▼", self.theme.vote_arrow_style(-1, own)),
                Span::styled(
                    format!(
                        "   u/{} • {}",
                        cont.author,
                        cont.created_at.format("%b %d, %Y")
                    ),
                    self.theme.author_style(),
                ),
            ]));

            for text_line in cont.content.lines() {
                lines.push(Line::from(Span::styled(
                    format!("    {text_line}"),
                    self.theme.entry_style(selected),
                )));
            }

            lines.push(Line::from(""));
            if selected {
                selected_end = lines.len();
            }
        }

        // Keep the selected entry in view.
        let visible = inner.height as usize;
        let scroll = selected_end.saturating_sub(visible).min(selected_start);

        Paragraph::new(lines)
            .scroll((scroll as u16, 0))
            .render(inner, buf);
    }
}
