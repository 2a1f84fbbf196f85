//! The in-memory story store.
//!
//! Owns every story for the lifetime of the session. The three operations
//! here are the only write paths; stories and continuations are never
//! edited or removed, so the list order is creation order.

use thiserror::Error;

use crate::story::{Continuation, ContinuationId, Story, StoryId, VotingDuration};
use crate::user::UserContext;
use crate::vote::VoteDirection;

/// Errors from store operations.
///
/// The validation variants carry the exact user-facing message; the
/// unknown-id variants fail loudly where the original UI silently
/// dropped the request.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Please fill in all fields")]
    EmptyStoryFields,

    #[error("Please write your continuation")]
    EmptyContinuation,

    #[error("no story with id {0}")]
    UnknownStory(StoryId),

    #[error("no continuation with id {0}")]
    UnknownContinuation(ContinuationId),
}

/// Append-only, in-memory collection of stories.
#[derive(Debug, Clone, Default)]
pub struct StoryStore {
    stories: Vec<Story>,
}

impl StoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a story and append it to the store.
    ///
    /// Title and content must be non-empty after trimming whitespace;
    /// the duration comes from a closed set and needs no further
    /// validation.
    pub fn create_story(
        &mut self,
        title: &str,
        content: &str,
        duration: VotingDuration,
        author: &UserContext,
    ) -> Result<StoryId, StoreError> {
        if title.trim().is_empty() || content.trim().is_empty() {
            return Err(StoreError::EmptyStoryFields);
        }

        let story = Story::new(title, content, duration, &author.username);
        let id = story.id;
        self.stories.push(story);
        Ok(id)
    }

    /// Append a continuation to an existing story.
    ///
    /// Starts with zero votes and an empty voter map.
    pub fn add_continuation(
        &mut self,
        story_id: StoryId,
        content: &str,
        author: &UserContext,
    ) -> Result<ContinuationId, StoreError> {
        if content.trim().is_empty() {
            return Err(StoreError::EmptyContinuation);
        }

        let story = self
            .story_mut(story_id)
            .ok_or(StoreError::UnknownStory(story_id))?;

        let continuation = Continuation::new(content, &author.username);
        let id = continuation.id;
        story.continuations.push(continuation);
        Ok(id)
    }

    /// Record a vote and return the continuation's new tally.
    ///
    /// Only the targeted continuation is touched; see
    /// [`Continuation::apply_vote`] for the toggle/flip rule.
    pub fn vote(
        &mut self,
        story_id: StoryId,
        continuation_id: ContinuationId,
        direction: VoteDirection,
        voter: &UserContext,
    ) -> Result<i64, StoreError> {
        let story = self
            .story_mut(story_id)
            .ok_or(StoreError::UnknownStory(story_id))?;

        let continuation = story
            .continuation_mut(continuation_id)
            .ok_or(StoreError::UnknownContinuation(continuation_id))?;

        continuation.apply_vote(voter.id, direction);
        Ok(continuation.votes)
    }

    /// All stories in creation order.
    pub fn stories(&self) -> &[Story] {
        &self.stories
    }

    /// Look up a story by id.
    pub fn story(&self, id: StoryId) -> Option<&Story> {
        self.stories.iter().find(|s| s.id == id)
    }

    fn story_mut(&mut self, id: StoryId) -> Option<&mut Story> {
        self.stories.iter_mut().find(|s| s.id == id)
    }

    pub fn len(&self) -> usize {
        self.stories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stories.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: &str) -> UserContext {
        UserContext::new(name)
    }

    #[test]
    fn test_create_story() {
        let alice = user("alice");
        let mut store = StoryStore::new();

        let id = store
            .create_story("Title", "Once upon a time.", VotingDuration::H24, &alice)
            .unwrap();

        assert_eq!(store.len(), 1);
        let story = store.story(id).unwrap();
        assert_eq!(story.title, "Title");
        assert_eq!(story.author, "alice");
        assert_eq!(story.duration, VotingDuration::H24);
        assert!(story.continuations.is_empty());
    }

    #[test]
    fn test_stories_keep_creation_order() {
        let alice = user("alice");
        let mut store = StoryStore::new();

        let first = store
            .create_story("First", "a", VotingDuration::H24, &alice)
            .unwrap();
        let second = store
            .create_story("Second", "b", VotingDuration::H48, &alice)
            .unwrap();
        let third = store
            .create_story("Third", "c", VotingDuration::H72, &alice)
            .unwrap();

        let ids: Vec<_> = store.stories().iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![first, second, third]);
    }

    #[test]
    fn test_create_story_rejects_empty_fields() {
        let alice = user("alice");
        let mut store = StoryStore::new();

        let err = store
            .create_story("", "content", VotingDuration::H24, &alice)
            .unwrap_err();
        assert_eq!(err, StoreError::EmptyStoryFields);

        // Whitespace-only counts as empty.
        let err = store
            .create_story("Title", "   \n\t ", VotingDuration::H24, &alice)
            .unwrap_err();
        assert_eq!(err, StoreError::EmptyStoryFields);
        assert_eq!(err.to_string(), "Please fill in all fields");

        assert!(store.is_empty());
    }

    #[test]
    fn test_add_continuation() {
        let alice = user("alice");
        let bob = user("bob");
        let mut store = StoryStore::new();

        let story = store
            .create_story("Title", "Once.", VotingDuration::H24, &alice)
            .unwrap();
        let c1 = store.add_continuation(story, "Then this.", &bob).unwrap();
        let c2 = store.add_continuation(story, "Then that.", &alice).unwrap();

        let story = store.story(story).unwrap();
        assert_eq!(story.part_count(), 2);
        assert_eq!(story.continuations[0].id, c1);
        assert_eq!(story.continuations[1].id, c2);
        assert_eq!(story.continuations[0].author, "bob");
        assert_eq!(story.continuations[0].votes, 0);
        assert!(story.continuations[0].voters.is_empty());
    }

    #[test]
    fn test_add_continuation_rejects_empty_content() {
        let alice = user("alice");
        let mut store = StoryStore::new();

        let story = store
            .create_story("Title", "Once.", VotingDuration::H24, &alice)
            .unwrap();
        let err = store.add_continuation(story, "  \n ", &alice).unwrap_err();

        assert_eq!(err, StoreError::EmptyContinuation);
        assert_eq!(err.to_string(), "Please write your continuation");
        assert_eq!(store.story(story).unwrap().part_count(), 0);
    }

    #[test]
    fn test_add_continuation_unknown_story() {
        let alice = user("alice");
        let mut store = StoryStore::new();
        store
            .create_story("Title", "Once.", VotingDuration::H24, &alice)
            .unwrap();

        let missing = StoryId::new();
        let err = store.add_continuation(missing, "text", &alice).unwrap_err();

        assert_eq!(err, StoreError::UnknownStory(missing));
        assert_eq!(store.stories()[0].part_count(), 0);
    }

    #[test]
    fn test_vote_through_store() {
        let alice = user("alice");
        let bob = user("bob");
        let mut store = StoryStore::new();

        let story = store
            .create_story("Title", "Once.", VotingDuration::H24, &alice)
            .unwrap();
        let cont = store.add_continuation(story, "Then.", &alice).unwrap();

        assert_eq!(store.vote(story, cont, VoteDirection::Up, &bob), Ok(1));
        assert_eq!(store.vote(story, cont, VoteDirection::Down, &bob), Ok(-1));
        assert_eq!(store.vote(story, cont, VoteDirection::Down, &bob), Ok(0));

        let c = store.story(story).unwrap().continuation(cont).unwrap();
        assert!(c.voters.is_empty());
    }

    #[test]
    fn test_vote_only_touches_target() {
        let alice = user("alice");
        let mut store = StoryStore::new();

        let story = store
            .create_story("Title", "Once.", VotingDuration::H24, &alice)
            .unwrap();
        let first = store.add_continuation(story, "One.", &alice).unwrap();
        let second = store.add_continuation(story, "Two.", &alice).unwrap();

        store.vote(story, first, VoteDirection::Up, &alice).unwrap();

        let s = store.story(story).unwrap();
        assert_eq!(s.continuation(first).unwrap().votes, 1);
        assert_eq!(s.continuation(second).unwrap().votes, 0);
        assert!(s.continuation(second).unwrap().voters.is_empty());
    }

    #[test]
    fn test_vote_unknown_ids() {
        let alice = user("alice");
        let mut store = StoryStore::new();

        let story = store
            .create_story("Title", "Once.", VotingDuration::H24, &alice)
            .unwrap();
        let cont = store.add_continuation(story, "Then.", &alice).unwrap();

        let missing_story = StoryId::new();
        assert_eq!(
            store.vote(missing_story, cont, VoteDirection::Up, &alice),
            Err(StoreError::UnknownStory(missing_story))
        );

        let missing_cont = ContinuationId::new();
        assert_eq!(
            store.vote(story, missing_cont, VoteDirection::Up, &alice),
            Err(StoreError::UnknownContinuation(missing_cont))
        );

        // Failed votes leave the tally untouched.
        assert_eq!(store.story(story).unwrap().continuation(cont).unwrap().votes, 0);
    }
}
