//! Main application state and logic

use story_core::{
    Story, StoryId, StoryStore, UserContext, VoteDirection, VotingDuration,
};

use crate::ui::theme::StoryTheme;
use crate::ui::Overlay;

/// Vim-style input modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Normal mode - navigation and hotkeys (default)
    #[default]
    Normal,
    /// Insert mode - editing the focused text field
    Insert,
}

/// Which of the three screens is showing.
///
/// `Reading` carries the selected story; leaving it drops the selection,
/// so there is no separate "selected story" field to keep in sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// The story composer (initial screen)
    #[default]
    Composing,
    /// The story list
    Browsing,
    /// A single story with its continuations
    Reading(StoryId),
}

/// Fields of the compose form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComposeField {
    #[default]
    Title,
    Content,
    Duration,
}

/// An editable text buffer with a character-indexed cursor.
///
/// All operations are unicode-safe: the cursor counts characters, and
/// edits convert to byte positions on the way in.
#[derive(Debug, Clone, Default)]
pub struct TextBuffer {
    text: String,
    cursor: usize,
}

impl TextBuffer {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Insert a character at the cursor.
    pub fn type_char(&mut self, c: char) {
        let byte_pos = self
            .text
            .char_indices()
            .nth(self.cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len());
        self.text.insert(byte_pos, c);
        self.cursor += 1;
    }

    /// Insert a line break at the cursor.
    pub fn newline(&mut self) {
        self.type_char('\n');
    }

    /// Delete the character before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            if let Some((byte_pos, ch)) = self.text.char_indices().nth(self.cursor) {
                self.text.replace_range(byte_pos..byte_pos + ch.len_utf8(), "");
            }
        }
    }

    /// Delete the character at the cursor.
    pub fn delete(&mut self) {
        if let Some((byte_pos, ch)) = self.text.char_indices().nth(self.cursor) {
            self.text.replace_range(byte_pos..byte_pos + ch.len_utf8(), "");
        }
    }

    pub fn cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_right(&mut self) {
        let char_count = self.text.chars().count();
        self.cursor = (self.cursor + 1).min(char_count);
    }

    pub fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor = self.text.chars().count();
    }
}

/// State of the story composer form
#[derive(Debug, Clone, Default)]
pub struct ComposeForm {
    pub title: TextBuffer,
    pub content: TextBuffer,
    pub duration: VotingDuration,
    pub focus: ComposeField,
}

impl ComposeForm {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            ComposeField::Title => ComposeField::Content,
            ComposeField::Content => ComposeField::Duration,
            ComposeField::Duration => ComposeField::Title,
        };
    }

    pub fn focus_prev(&mut self) {
        self.focus = match self.focus {
            ComposeField::Title => ComposeField::Duration,
            ComposeField::Content => ComposeField::Title,
            ComposeField::Duration => ComposeField::Content,
        };
    }
}

/// Main application state
pub struct App {
    pub store: StoryStore,
    pub user: UserContext,

    view: View,
    pub input_mode: InputMode,

    // UI state
    pub theme: StoryTheme,
    overlay: Option<Overlay>,

    // Composer
    pub compose: ComposeForm,

    // Reader
    pub continuation_input: TextBuffer,
    pub selected_continuation: usize,

    // Browser
    pub selected_story: usize,

    // Status
    status_message: Option<String>,
}

impl App {
    /// Create a new application for the given session user.
    ///
    /// Starts on the composer with an empty store, matching the
    /// first-run experience.
    pub fn new(user: UserContext) -> Self {
        Self {
            store: StoryStore::new(),
            user,
            view: View::default(),
            input_mode: InputMode::Normal,
            theme: StoryTheme::default(),
            overlay: None,
            compose: ComposeForm::default(),
            continuation_input: TextBuffer::default(),
            selected_continuation: 0,
            selected_story: 0,
            status_message: None,
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    /// The story currently open in the reader, if any.
    pub fn current_story(&self) -> Option<&Story> {
        match self.view {
            View::Reading(id) => self.store.story(id),
            _ => None,
        }
    }

    // =========================================================================
    // View transitions
    // =========================================================================

    /// Switch to the composer, dropping any story selection.
    pub fn goto_composer(&mut self) {
        self.view = View::Composing;
        self.input_mode = InputMode::Normal;
        self.clear_status();
    }

    /// Switch to the story list, dropping any story selection.
    pub fn goto_browser(&mut self) {
        self.view = View::Browsing;
        self.input_mode = InputMode::Normal;
        self.clamp_story_selection();
    }

    /// Open the selected story card in the reader.
    pub fn open_selected_story(&mut self) {
        if self.view != View::Browsing {
            return;
        }
        if let Some(story) = self.store.stories().get(self.selected_story) {
            self.view = View::Reading(story.id);
            self.selected_continuation = 0;
            self.continuation_input.clear();
            self.clear_status();
        }
    }

    /// Return from the reader to the story list.
    pub fn leave_reading(&mut self) {
        if matches!(self.view, View::Reading(_)) {
            self.goto_browser();
        }
    }

    // =========================================================================
    // Store actions
    // =========================================================================

    /// Submit the compose form.
    ///
    /// On success the form resets and the view lands on the story list
    /// with the new story selected. On failure the validation message
    /// becomes the status and the form keeps its contents.
    pub fn submit_story(&mut self) {
        match self.store.create_story(
            self.compose.title.text(),
            self.compose.content.text(),
            self.compose.duration,
            &self.user,
        ) {
            Ok(_) => {
                self.compose.clear();
                self.input_mode = InputMode::Normal;
                self.selected_story = self.store.len().saturating_sub(1);
                self.view = View::Browsing;
                self.set_status("Story posted.");
            }
            Err(e) => self.set_status(e.to_string()),
        }
    }

    /// Submit the continuation editor for the open story.
    pub fn submit_continuation(&mut self) {
        let View::Reading(story_id) = self.view else {
            return;
        };
        match self
            .store
            .add_continuation(story_id, self.continuation_input.text(), &self.user)
        {
            Ok(_) => {
                self.continuation_input.clear();
                self.input_mode = InputMode::Normal;
                let parts = self
                    .store
                    .story(story_id)
                    .map(|s| s.part_count())
                    .unwrap_or(0);
                self.selected_continuation = parts.saturating_sub(1);
                self.set_status("Continuation added.");
            }
            Err(e) => self.set_status(e.to_string()),
        }
    }

    /// Vote on the selected continuation of the open story.
    pub fn vote_selected(&mut self, direction: VoteDirection) {
        let View::Reading(story_id) = self.view else {
            return;
        };
        let Some(continuation_id) = self
            .store
            .story(story_id)
            .and_then(|s| s.continuations.get(self.selected_continuation))
            .map(|c| c.id)
        else {
            return;
        };

        match self
            .store
            .vote(story_id, continuation_id, direction, &self.user)
        {
            Ok(tally) => self.set_status(format!("Voted {direction}. Tally: {tally}.")),
            Err(e) => self.set_status(e.to_string()),
        }
    }

    // =========================================================================
    // List selection
    // =========================================================================

    pub fn select_next(&mut self) {
        match self.view {
            View::Browsing => {
                let last = self.store.len().saturating_sub(1);
                self.selected_story = (self.selected_story + 1).min(last);
            }
            View::Reading(_) => {
                let last = self
                    .current_story()
                    .map(|s| s.part_count().saturating_sub(1))
                    .unwrap_or(0);
                self.selected_continuation = (self.selected_continuation + 1).min(last);
            }
            View::Composing => {}
        }
    }

    pub fn select_prev(&mut self) {
        match self.view {
            View::Browsing => {
                self.selected_story = self.selected_story.saturating_sub(1);
            }
            View::Reading(_) => {
                self.selected_continuation = self.selected_continuation.saturating_sub(1);
            }
            View::Composing => {}
        }
    }

    pub fn select_first(&mut self) {
        match self.view {
            View::Browsing => self.selected_story = 0,
            View::Reading(_) => self.selected_continuation = 0,
            View::Composing => {}
        }
    }

    pub fn select_last(&mut self) {
        match self.view {
            View::Browsing => {
                self.selected_story = self.store.len().saturating_sub(1);
            }
            View::Reading(_) => {
                self.selected_continuation = self
                    .current_story()
                    .map(|s| s.part_count().saturating_sub(1))
                    .unwrap_or(0);
            }
            View::Composing => {}
        }
    }

    fn clamp_story_selection(&mut self) {
        let last = self.store.len().saturating_sub(1);
        self.selected_story = self.selected_story.min(last);
    }

    // =========================================================================
    // Editing
    // =========================================================================

    /// The text buffer insert mode edits in the current view, if any.
    pub fn active_buffer(&mut self) -> Option<&mut TextBuffer> {
        match self.view {
            View::Composing => match self.compose.focus {
                ComposeField::Title => Some(&mut self.compose.title),
                ComposeField::Content => Some(&mut self.compose.content),
                ComposeField::Duration => None,
            },
            View::Reading(_) => Some(&mut self.continuation_input),
            View::Browsing => None,
        }
    }

    /// Enter insert mode if the current view has something to edit.
    pub fn enter_insert_mode(&mut self, at_end: bool) {
        if let Some(buffer) = self.active_buffer() {
            if at_end {
                buffer.cursor_end();
            }
            self.input_mode = InputMode::Insert;
        }
    }

    pub fn enter_normal_mode(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    /// Cycle the duration selector (composer only).
    pub fn cycle_duration(&mut self, forward: bool) {
        if forward {
            self.compose.duration = self.compose.duration.next();
        } else {
            self.compose.duration = self.compose.duration.prev();
        }
    }

    // =========================================================================
    // Status & overlay
    // =========================================================================

    /// Set status message (always overwrites)
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn toggle_help(&mut self) {
        if matches!(self.overlay, Some(Overlay::Help)) {
            self.overlay = None;
        } else {
            self.overlay = Some(Overlay::Help);
        }
    }

    pub fn close_overlay(&mut self) {
        self.overlay = None;
    }

    pub fn overlay(&self) -> Option<&Overlay> {
        self.overlay.as_ref()
    }

    pub fn has_overlay(&self) -> bool {
        self.overlay.is_some()
    }
}
