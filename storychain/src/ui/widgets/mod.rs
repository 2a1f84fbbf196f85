//! Widgets for the StoryChain TUI

mod continuations;
mod form;
mod input;
mod story_list;

pub use continuations::ContinuationListWidget;
pub use form::ComposeFormWidget;
pub use input::TextFieldWidget;
pub use story_list::StoryListWidget;
