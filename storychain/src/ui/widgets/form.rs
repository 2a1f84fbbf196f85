//! Story composer form widget

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::app::{ComposeField, ComposeForm, InputMode};
use crate::ui::theme::StoryTheme;

use super::input::TextFieldWidget;

/// The "Create a New Story" form: title, content, voting duration.
pub struct ComposeFormWidget<'a> {
    form: &'a ComposeForm,
    input_mode: InputMode,
    theme: &'a StoryTheme,
}

impl<'a> ComposeFormWidget<'a> {
    pub fn new(form: &'a ComposeForm, input_mode: InputMode, theme: &'a StoryTheme) -> Self {
        Self {
            form,
            input_mode,
            theme,
        }
    }

    fn is_editing(&self, field: ComposeField) -> bool {
        self.input_mode == InputMode::Insert && self.form.focus == field
    }
}

impl Widget for ComposeFormWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" Create a New Story ")
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(false));

        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(5),    // Content
                Constraint::Length(3), // Duration
                Constraint::Length(1), // Hint
            ])
            .split(inner);

        let title_field = TextFieldWidget::new(self.form.title.text(), self.theme)
            .title(" Story Title ")
            .placeholder("An interesting title")
            .cursor(self.form.title.cursor())
            .focused(self.form.focus == ComposeField::Title)
            .editing(self.is_editing(ComposeField::Title));
        title_field.render(chunks[0], buf);

        let content_field = TextFieldWidget::new(self.form.content.text(), self.theme)
            .title(" Story Content ")
            .placeholder("Write your story...")
            .cursor(self.form.content.cursor())
            .focused(self.form.focus == ComposeField::Content)
            .editing(self.is_editing(ComposeField::Content));
        content_field.render(chunks[1], buf);

        // Duration selector
        let duration_focused = self.form.focus == ComposeField::Duration;
        let duration_block = Block::default()
            .title(" Voting Duration ")
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(duration_focused));
        let duration_inner = duration_block.inner(chunks[2]);
        duration_block.render(chunks[2], buf);

        let arrows = if duration_focused {
            self.theme.text_style()
        } else {
            self.theme.system_style()
        };
        let line = Line::from(vec![
            Span::styled("◀ ", arrows),
            Span::styled(
                self.form.duration.to_string(),
                self.theme.entry_style(duration_focused),
            ),
            Span::styled(" ▶", arrows),
        ]);
        Paragraph::new(line).render(duration_inner, buf);

        // Key hint
        let hint = match self.input_mode {
            InputMode::Insert => "Esc normal mode • Tab next field",
            InputMode::Normal => "i edit field • Tab/j/k move • ◀ ▶ duration • Enter post story",
        };
        Paragraph::new(Line::from(Span::styled(hint, self.theme.system_style())))
            .render(chunks[3], buf);
    }
}
