//! Render orchestration for the StoryChain TUI

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use story_core::Story;

use crate::app::{App, InputMode, View};
use crate::ui::layout::{centered_rect_fixed, AppLayout, ReaderLayout};
use crate::ui::widgets::{
    ComposeFormWidget, ContinuationListWidget, StoryListWidget, TextFieldWidget,
};

/// Overlay types
#[derive(Debug, Clone)]
pub enum Overlay {
    Help,
}

/// Main render function
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let layout = AppLayout::calculate(area);

    render_title_bar(frame, app, layout.title_area);

    match app.view() {
        View::Composing => {
            let widget = ComposeFormWidget::new(&app.compose, app.input_mode, &app.theme);
            frame.render_widget(widget, layout.body_area);
        }
        View::Browsing => {
            let widget =
                StoryListWidget::new(app.store.stories(), &app.theme).selected(app.selected_story);
            frame.render_widget(widget, layout.body_area);
        }
        View::Reading(id) => match app.store.story(id) {
            Some(story) => render_reader(frame, app, story, layout.body_area),
            None => render_missing_story(frame, app, layout.body_area),
        },
    }

    render_status_bar(frame, app, layout.status_bar);
    render_hotkey_bar(frame, app, layout.hotkey_bar);

    if let Some(Overlay::Help) = app.overlay() {
        render_help_overlay(frame, app, area);
    }
}

/// Render the title bar
fn render_title_bar(frame: &mut Frame, app: &App, area: Rect) {
    let view_name = match app.view() {
        View::Composing => "New Story",
        View::Browsing => "Browse",
        View::Reading(_) => "Reading",
    };

    let line = Line::from(vec![
        Span::styled(
            " StoryChain ",
            Style::default()
                .fg(app.theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("| ", app.theme.system_style()),
        Span::styled(view_name, app.theme.text_style()),
        Span::styled(" | ", app.theme.system_style()),
        Span::styled(format!("u/{}", app.user.username), app.theme.author_style()),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Render the reader screen: story header, continuation editor, list
fn render_reader(frame: &mut Frame, app: &App, story: &Story, area: Rect) {
    let header_lines = story.content.lines().count() as u16 + 3;
    let layout = ReaderLayout::calculate(area, header_lines);

    // Story header
    let mut lines = vec![
        Line::from(Span::styled(story.title.clone(), app.theme.title_style())),
        Line::from(Span::styled(
            format!(
                "Posted by u/{} • {} • voting window {}",
                story.author,
                story.created_at.format("%b %d, %Y"),
                story.duration
            ),
            app.theme.author_style(),
        )),
        Line::from(""),
    ];
    for text_line in story.content.lines() {
        lines.push(Line::from(Span::styled(
            text_line.to_string(),
            app.theme.text_style(),
        )));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(app.theme.border_style(false));
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        layout.header_area,
    );

    // Continuation editor
    let editing = app.input_mode == InputMode::Insert;
    let editor = TextFieldWidget::new(app.continuation_input.text(), &app.theme)
        .title(" Continue the Story ")
        .placeholder("Write your continuation...")
        .cursor(app.continuation_input.cursor())
        .focused(editing)
        .editing(editing);
    frame.render_widget(editor, layout.editor_area);

    // Continuations
    let widget = ContinuationListWidget::new(&story.continuations, app.user.id, &app.theme)
        .selected(app.selected_continuation);
    frame.render_widget(widget, layout.continuations_area);
}

/// Fallback when the open story id is no longer in the store
fn render_missing_story(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(app.theme.border_style(false));
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Story not found. Press b to go back.",
            app.theme.error_style(),
        )))
        .block(block),
        area,
    );
}

/// Render the status bar
fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let mode_span = match app.input_mode {
        InputMode::Normal => Span::styled(" NORMAL ", Style::default().add_modifier(Modifier::REVERSED)),
        InputMode::Insert => Span::styled(
            " INSERT ",
            Style::default()
                .fg(app.theme.accent)
                .add_modifier(Modifier::REVERSED),
        ),
    };

    let mut spans = vec![mode_span, Span::raw(" ")];
    if let Some(message) = app.status_message() {
        spans.push(Span::styled(message.to_string(), app.theme.text_style()));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render the hotkey bar
fn render_hotkey_bar(frame: &mut Frame, app: &App, area: Rect) {
    let hints = match (app.view(), app.input_mode) {
        (_, InputMode::Insert) => " Esc normal • Enter newline/next • Tab field",
        (View::Composing, _) => " i edit • Tab field • Enter post • b browse • ? help • q quit",
        (View::Browsing, _) => " j/k select • Enter open • n new story • ? help • q quit",
        (View::Reading(_), _) => {
            " j/k select • u/d vote • i write • Enter submit • b back • q quit"
        }
    };

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(hints, app.theme.system_style()))),
        area,
    );
}

/// Render help overlay
fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let popup_area = centered_rect_fixed(52, 22, area);

    // Clear the background
    frame.render_widget(Clear, popup_area);

    let help_text = vec![
        Line::from(Span::styled(
            " StoryChain - Help ",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Screens:",
            Style::default().add_modifier(Modifier::UNDERLINED),
        )),
        Line::from("  n       New story composer"),
        Line::from("  b       Browse stories (also: back from reading)"),
        Line::from("  Enter   Open the selected story while browsing"),
        Line::from(""),
        Line::from(Span::styled(
            "Editing:",
            Style::default().add_modifier(Modifier::UNDERLINED),
        )),
        Line::from("  i/a     Edit the focused field (INSERT mode)"),
        Line::from("  Esc     Back to NORMAL mode"),
        Line::from("  Tab     Next field"),
        Line::from("  Enter   Post story / submit continuation (NORMAL)"),
        Line::from(""),
        Line::from(Span::styled(
            "Voting (reading a story):",
            Style::default().add_modifier(Modifier::UNDERLINED),
        )),
        Line::from("  j/k     Select a continuation"),
        Line::from("  u       Vote up (again to remove your vote)"),
        Line::from("  d       Vote down"),
        Line::from(""),
        Line::from(Span::styled(
            "Press Esc or q to close",
            Style::default().add_modifier(Modifier::DIM),
        )),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(app.theme.border_style(true));

    let paragraph = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, popup_area);
}
