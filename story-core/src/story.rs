//! Core story types.
//!
//! A [`Story`] is a root post; [`Continuation`]s attach to it in
//! submission order and carry per-user vote state. Nothing here is ever
//! edited or deleted once created.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use uuid::Uuid;

use crate::user::UserId;

// ============================================================================
// ID Types
// ============================================================================

/// Unique identifier for stories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StoryId(pub Uuid);

impl StoryId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for StoryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for StoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for continuations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContinuationId(pub Uuid);

impl ContinuationId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ContinuationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ContinuationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Voting Duration
// ============================================================================

/// How long voting stays open on a story's continuations.
///
/// Captured at creation and displayed, but never enforced: no timer
/// closes voting once the window elapses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VotingDuration {
    #[default]
    H24,
    H48,
    H72,
}

impl VotingDuration {
    /// The window length in hours.
    pub fn hours(&self) -> u32 {
        match self {
            VotingDuration::H24 => 24,
            VotingDuration::H48 => 48,
            VotingDuration::H72 => 72,
        }
    }

    pub fn all() -> [VotingDuration; 3] {
        [
            VotingDuration::H24,
            VotingDuration::H48,
            VotingDuration::H72,
        ]
    }

    /// Cycle to the next option, wrapping around.
    pub fn next(&self) -> Self {
        match self {
            VotingDuration::H24 => VotingDuration::H48,
            VotingDuration::H48 => VotingDuration::H72,
            VotingDuration::H72 => VotingDuration::H24,
        }
    }

    /// Cycle to the previous option, wrapping around.
    pub fn prev(&self) -> Self {
        match self {
            VotingDuration::H24 => VotingDuration::H72,
            VotingDuration::H48 => VotingDuration::H24,
            VotingDuration::H72 => VotingDuration::H48,
        }
    }

    /// Parse an hour count like `"24"`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "24" => Some(VotingDuration::H24),
            "48" => Some(VotingDuration::H48),
            "72" => Some(VotingDuration::H72),
            _ => None,
        }
    }
}

impl fmt::Display for VotingDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Hours", self.hours())
    }
}

// ============================================================================
// Story & Continuation
// ============================================================================

/// A root post that continuations attach to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Story {
    pub id: StoryId,
    pub title: String,
    pub content: String,
    pub duration: VotingDuration,
    pub author: String,
    pub created_at: DateTime<Utc>,
    /// Submission order, which is also display order.
    pub continuations: Vec<Continuation>,
}

impl Story {
    pub(crate) fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        duration: VotingDuration,
        author: impl Into<String>,
    ) -> Self {
        Self {
            id: StoryId::new(),
            title: title.into(),
            content: content.into(),
            duration,
            author: author.into(),
            created_at: Utc::now(),
            continuations: Vec::new(),
        }
    }

    /// Look up a continuation by id.
    pub fn continuation(&self, id: ContinuationId) -> Option<&Continuation> {
        self.continuations.iter().find(|c| c.id == id)
    }

    pub(crate) fn continuation_mut(&mut self, id: ContinuationId) -> Option<&mut Continuation> {
        self.continuations.iter_mut().find(|c| c.id == id)
    }

    /// Number of continuations attached so far.
    pub fn part_count(&self) -> usize {
        self.continuations.len()
    }
}

/// A follow-on fragment attached to a story, individually votable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Continuation {
    pub id: ContinuationId,
    pub content: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
    /// Running tally. Always equals the sum of the voter map.
    pub votes: i64,
    /// Each user's current vote direction: +1 or -1. Absence means the
    /// user has not voted.
    pub voters: HashMap<UserId, i8>,
}

impl Continuation {
    pub(crate) fn new(content: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id: ContinuationId::new(),
            content: content.into(),
            author: author.into(),
            created_at: Utc::now(),
            votes: 0,
            voters: HashMap::new(),
        }
    }

    /// The direction this user currently has recorded, if any.
    pub fn vote_of(&self, user: UserId) -> Option<i8> {
        self.voters.get(&user).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_parse() {
        assert_eq!(VotingDuration::parse("24"), Some(VotingDuration::H24));
        assert_eq!(VotingDuration::parse(" 48 "), Some(VotingDuration::H48));
        assert_eq!(VotingDuration::parse("72"), Some(VotingDuration::H72));
        assert_eq!(VotingDuration::parse("36"), None);
    }

    #[test]
    fn test_duration_cycle() {
        let mut d = VotingDuration::default();
        assert_eq!(d, VotingDuration::H24);
        d = d.next();
        assert_eq!(d, VotingDuration::H48);
        d = d.next();
        assert_eq!(d, VotingDuration::H72);
        d = d.next();
        assert_eq!(d, VotingDuration::H24);
        assert_eq!(d.prev(), VotingDuration::H72);
    }

    #[test]
    fn test_duration_display() {
        assert_eq!(VotingDuration::H48.to_string(), "48 Hours");
    }

    #[test]
    fn test_story_serde_round_trip() {
        let mut story = Story::new("Title", "Once upon a time.", VotingDuration::H72, "alice");
        let mut cont = Continuation::new("And then...", "bob");
        let voter = UserId::new();
        cont.voters.insert(voter, 1);
        cont.votes = 1;
        story.continuations.push(cont);

        let json = serde_json::to_string(&story).unwrap();
        let back: Story = serde_json::from_str(&json).unwrap();

        assert_eq!(back.id, story.id);
        assert_eq!(back.title, "Title");
        assert_eq!(back.duration, VotingDuration::H72);
        assert_eq!(back.continuations.len(), 1);
        assert_eq!(back.continuations[0].votes, 1);
        assert_eq!(back.continuations[0].vote_of(voter), Some(1));
    }
}
