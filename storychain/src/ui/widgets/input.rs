//! Text field widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::ui::theme::StoryTheme;

/// A bordered text field, single- or multi-line, with an optional
/// visible cursor while editing.
pub struct TextFieldWidget<'a> {
    content: &'a str,
    cursor: usize,
    theme: &'a StoryTheme,
    title: &'a str,
    placeholder: &'a str,
    focused: bool,
    editing: bool,
}

impl<'a> TextFieldWidget<'a> {
    pub fn new(content: &'a str, theme: &'a StoryTheme) -> Self {
        Self {
            content,
            cursor: 0,
            theme,
            title: "",
            placeholder: "",
            focused: false,
            editing: false,
        }
    }

    pub fn cursor(mut self, pos: usize) -> Self {
        self.cursor = pos;
        self
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = title;
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn editing(mut self, editing: bool) -> Self {
        self.editing = editing;
        self
    }
}

impl Widget for TextFieldWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(self.title)
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(self.focused));

        let inner = block.inner(area);
        block.render(area, buf);

        let paragraph = if self.content.is_empty() && !self.editing {
            Paragraph::new(Line::from(Span::styled(
                self.placeholder,
                Style::default().add_modifier(Modifier::DIM),
            )))
        } else if self.editing {
            let cursor_style = Style::default()
                .fg(self.theme.accent)
                .add_modifier(Modifier::UNDERLINED | Modifier::BOLD);
            let lines = cursor_lines(self.content, self.cursor, self.theme.text_style(), cursor_style);
            Paragraph::new(lines).wrap(Wrap { trim: false })
        } else {
            Paragraph::new(self.content.to_string())
                .style(self.theme.text_style())
                .wrap(Wrap { trim: false })
        };

        paragraph.render(inner, buf);
    }
}

/// Split text into styled lines with the character at `cursor`
/// highlighted. Character-based for unicode safety.
fn cursor_lines(
    text: &str,
    cursor: usize,
    base: Style,
    cursor_style: Style,
) -> Vec<Line<'static>> {
    let mut lines: Vec<Line> = Vec::new();
    let mut spans: Vec<Span> = Vec::new();
    let mut run = String::new();

    // A trailing sentinel space lets the cursor sit past the last character.
    for (i, ch) in text.chars().chain(std::iter::once(' ')).enumerate() {
        if i == cursor {
            if !run.is_empty() {
                spans.push(Span::styled(std::mem::take(&mut run), base));
            }
            let shown = if ch == '\n' { ' ' } else { ch };
            spans.push(Span::styled(shown.to_string(), cursor_style));
            if ch == '\n' {
                lines.push(Line::from(std::mem::take(&mut spans)));
            }
            continue;
        }
        if ch == '\n' {
            if !run.is_empty() {
                spans.push(Span::styled(std::mem::take(&mut run), base));
            }
            lines.push(Line::from(std::mem::take(&mut spans)));
        } else {
            run.push(ch);
        }
    }
    if !run.is_empty() {
        spans.push(Span::styled(run, base));
    }
    lines.push(Line::from(spans));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flatten(lines: &[Line]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn test_cursor_lines_single_line() {
        let lines = cursor_lines("abc", 1, Style::default(), Style::default());
        assert_eq!(flatten(&lines), vec!["abc "]);
    }

    #[test]
    fn test_cursor_lines_empty() {
        let lines = cursor_lines("", 0, Style::default(), Style::default());
        assert_eq!(flatten(&lines), vec![" "]);
    }

    #[test]
    fn test_cursor_lines_multiline() {
        let lines = cursor_lines("ab\ncd", 4, Style::default(), Style::default());
        assert_eq!(flatten(&lines), vec!["ab", "cd "]);
    }

    #[test]
    fn test_cursor_on_newline() {
        // Cursor sitting on the line break renders as a space at the
        // end of that line.
        let lines = cursor_lines("ab\ncd", 2, Style::default(), Style::default());
        assert_eq!(flatten(&lines), vec!["ab ", "cd "]);
    }
}
