//! Event handling for the StoryChain TUI

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};

use story_core::VoteDirection;

use crate::app::{App, ComposeField, InputMode, View};

/// Result of handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    Continue,
    Quit,
    NeedsRedraw,
}

/// Handle a terminal event
pub fn handle_event(app: &mut App, event: Event) -> EventResult {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Mouse(mouse) => handle_mouse_event(app, mouse),
        Event::Resize(_, _) => EventResult::NeedsRedraw,
        _ => EventResult::Continue,
    }
}

/// Handle a mouse event
fn handle_mouse_event(app: &mut App, mouse: MouseEvent) -> EventResult {
    match mouse.kind {
        MouseEventKind::ScrollUp => {
            app.select_prev();
            EventResult::NeedsRedraw
        }
        MouseEventKind::ScrollDown => {
            app.select_next();
            EventResult::NeedsRedraw
        }
        _ => EventResult::Continue,
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> EventResult {
    // Handle overlay keys first
    if app.has_overlay() {
        return handle_overlay_key(app, key);
    }

    // Global shortcuts (always work)
    if let (KeyCode::Char('c'), KeyModifiers::CONTROL) = (key.code, key.modifiers) {
        return EventResult::Quit;
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_mode(app, key),
        InputMode::Insert => handle_insert_mode(app, key),
    }
}

/// Handle keys in NORMAL mode (navigation and hotkeys)
fn handle_normal_mode(app: &mut App, key: KeyEvent) -> EventResult {
    match key.code {
        // Quit
        KeyCode::Char('q') => return EventResult::Quit,

        // Help
        KeyCode::Char('?') | KeyCode::F(1) => {
            app.toggle_help();
            return EventResult::NeedsRedraw;
        }

        // Top-level navigation: composer and browser
        KeyCode::Char('n') => {
            app.goto_composer();
            return EventResult::NeedsRedraw;
        }
        KeyCode::Char('b') => {
            app.goto_browser();
            return EventResult::NeedsRedraw;
        }

        // Mode switching
        KeyCode::Char('i') => {
            app.enter_insert_mode(false);
            return EventResult::NeedsRedraw;
        }
        KeyCode::Char('a') => {
            app.enter_insert_mode(true);
            return EventResult::NeedsRedraw;
        }

        _ => {}
    }

    match app.view() {
        View::Composing => handle_composer_keys(app, key),
        View::Browsing => handle_browser_keys(app, key),
        View::Reading(_) => handle_reader_keys(app, key),
    }
}

/// Composer keys (normal mode)
fn handle_composer_keys(app: &mut App, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Tab | KeyCode::Char('j') | KeyCode::Down => {
            app.compose.focus_next();
            EventResult::NeedsRedraw
        }
        KeyCode::BackTab | KeyCode::Char('k') | KeyCode::Up => {
            app.compose.focus_prev();
            EventResult::NeedsRedraw
        }
        // Duration selector
        KeyCode::Char('h') | KeyCode::Left if app.compose.focus == ComposeField::Duration => {
            app.cycle_duration(false);
            EventResult::NeedsRedraw
        }
        KeyCode::Char('l') | KeyCode::Right | KeyCode::Char(' ')
            if app.compose.focus == ComposeField::Duration =>
        {
            app.cycle_duration(true);
            EventResult::NeedsRedraw
        }
        // Post the story
        KeyCode::Enter => {
            app.submit_story();
            EventResult::NeedsRedraw
        }
        _ => EventResult::Continue,
    }
}

/// Browser keys (normal mode)
fn handle_browser_keys(app: &mut App, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            app.select_next();
            EventResult::NeedsRedraw
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.select_prev();
            EventResult::NeedsRedraw
        }
        KeyCode::Char('g') => {
            app.select_first();
            EventResult::NeedsRedraw
        }
        KeyCode::Char('G') => {
            app.select_last();
            EventResult::NeedsRedraw
        }
        KeyCode::Enter => {
            app.open_selected_story();
            EventResult::NeedsRedraw
        }
        _ => EventResult::Continue,
    }
}

/// Reader keys (normal mode)
fn handle_reader_keys(app: &mut App, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Esc => {
            app.leave_reading();
            EventResult::NeedsRedraw
        }
        KeyCode::Char('j') | KeyCode::Down => {
            app.select_next();
            EventResult::NeedsRedraw
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.select_prev();
            EventResult::NeedsRedraw
        }
        KeyCode::Char('g') => {
            app.select_first();
            EventResult::NeedsRedraw
        }
        KeyCode::Char('G') => {
            app.select_last();
            EventResult::NeedsRedraw
        }
        // Voting on the selected continuation
        KeyCode::Char('u') => {
            app.vote_selected(VoteDirection::Up);
            EventResult::NeedsRedraw
        }
        KeyCode::Char('d') => {
            app.vote_selected(VoteDirection::Down);
            EventResult::NeedsRedraw
        }
        // Submit the continuation editor
        KeyCode::Enter => {
            app.submit_continuation();
            EventResult::NeedsRedraw
        }
        _ => EventResult::Continue,
    }
}

/// Handle keys in INSERT mode (editing the focused field)
fn handle_insert_mode(app: &mut App, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Esc => {
            app.enter_normal_mode();
            return EventResult::NeedsRedraw;
        }

        // Move between compose fields without leaving insert mode
        KeyCode::Tab => {
            if app.view() == View::Composing {
                app.compose.focus_next();
                if app.compose.focus == ComposeField::Duration {
                    app.enter_normal_mode();
                }
            }
            return EventResult::NeedsRedraw;
        }
        KeyCode::BackTab => {
            if app.view() == View::Composing {
                app.compose.focus_prev();
            }
            return EventResult::NeedsRedraw;
        }

        // Enter advances from the single-line title; elsewhere it's a newline
        KeyCode::Enter => {
            if app.view() == View::Composing && app.compose.focus == ComposeField::Title {
                app.compose.focus_next();
            } else if let Some(buffer) = app.active_buffer() {
                buffer.newline();
            }
            return EventResult::NeedsRedraw;
        }

        _ => {}
    }

    let Some(buffer) = app.active_buffer() else {
        return EventResult::Continue;
    };

    match key.code {
        KeyCode::Left => buffer.cursor_left(),
        KeyCode::Right => buffer.cursor_right(),
        KeyCode::Home => buffer.cursor_home(),
        KeyCode::End => buffer.cursor_end(),
        KeyCode::Backspace => buffer.backspace(),
        KeyCode::Delete => buffer.delete(),
        KeyCode::Char(c) => buffer.type_char(c),
        _ => return EventResult::Continue,
    }

    EventResult::NeedsRedraw
}

/// Handle key when overlay is open
fn handle_overlay_key(app: &mut App, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') | KeyCode::Enter => {
            app.close_overlay();
            EventResult::NeedsRedraw
        }
        _ => EventResult::Continue,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use story_core::UserContext;

    fn app() -> App {
        App::new(UserContext::new("user123"))
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            handle_event(app, key(KeyCode::Char(c)));
        }
    }

    /// Drive the full compose-post-continue-vote flow through key events.
    #[test]
    fn test_compose_and_vote_flow() {
        let mut app = app();

        // Compose: type title, move to content, type body, leave insert.
        handle_event(&mut app, key(KeyCode::Char('i')));
        assert_eq!(app.input_mode, InputMode::Insert);
        type_str(&mut app, "The Lighthouse");
        handle_event(&mut app, key(KeyCode::Enter));
        type_str(&mut app, "The lamp went dark.");
        handle_event(&mut app, key(KeyCode::Esc));

        // Post lands on the browser.
        handle_event(&mut app, key(KeyCode::Enter));
        assert_eq!(app.view(), View::Browsing);
        assert_eq!(app.store.len(), 1);

        // Open, write a continuation, submit.
        handle_event(&mut app, key(KeyCode::Enter));
        assert!(matches!(app.view(), View::Reading(_)));
        handle_event(&mut app, key(KeyCode::Char('i')));
        type_str(&mut app, "Nobody noticed.");
        handle_event(&mut app, key(KeyCode::Esc));
        handle_event(&mut app, key(KeyCode::Enter));
        assert_eq!(app.current_story().unwrap().part_count(), 1);

        // Vote up, then toggle off, then down.
        handle_event(&mut app, key(KeyCode::Char('u')));
        assert_eq!(app.current_story().unwrap().continuations[0].votes, 1);
        handle_event(&mut app, key(KeyCode::Char('u')));
        assert_eq!(app.current_story().unwrap().continuations[0].votes, 0);
        handle_event(&mut app, key(KeyCode::Char('d')));
        assert_eq!(app.current_story().unwrap().continuations[0].votes, -1);

        // Back to the list.
        handle_event(&mut app, key(KeyCode::Esc));
        assert_eq!(app.view(), View::Browsing);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        assert_eq!(handle_event(&mut app, key(KeyCode::Char('q'))), EventResult::Quit);

        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(handle_event(&mut app, ctrl_c), EventResult::Quit);
    }

    #[test]
    fn test_duration_selector_keys() {
        use story_core::VotingDuration;

        let mut app = app();
        handle_event(&mut app, key(KeyCode::Tab));
        handle_event(&mut app, key(KeyCode::Tab));
        assert_eq!(app.compose.focus, ComposeField::Duration);

        handle_event(&mut app, key(KeyCode::Right));
        assert_eq!(app.compose.duration, VotingDuration::H48);
        handle_event(&mut app, key(KeyCode::Right));
        assert_eq!(app.compose.duration, VotingDuration::H72);
        handle_event(&mut app, key(KeyCode::Left));
        assert_eq!(app.compose.duration, VotingDuration::H48);
    }

    #[test]
    fn test_help_overlay_swallows_keys() {
        let mut app = app();
        handle_event(&mut app, key(KeyCode::Char('?')));
        assert!(app.has_overlay());

        // 'q' closes the overlay instead of quitting.
        assert_eq!(
            handle_event(&mut app, key(KeyCode::Char('q'))),
            EventResult::NeedsRedraw
        );
        assert!(!app.has_overlay());
    }

    #[test]
    fn test_nav_keys_switch_views() {
        let mut app = app();
        handle_event(&mut app, key(KeyCode::Char('b')));
        assert_eq!(app.view(), View::Browsing);
        handle_event(&mut app, key(KeyCode::Char('n')));
        assert_eq!(app.view(), View::Composing);
    }
}
