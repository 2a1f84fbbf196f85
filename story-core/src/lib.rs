//! In-memory collaborative story engine.
//!
//! This crate provides:
//! - The story data model: stories, continuations, per-user vote records
//! - An append-only [`StoryStore`] holding all session state
//! - The vote aggregation rule (one vote per user, toggle and flip)
//!
//! Everything lives in process memory for the lifetime of the session.
//! There is no persistence and no network; the store is the single write
//! path for all mutations.
//!
//! # Quick Start
//!
//! ```
//! use story_core::{StoryStore, UserContext, VoteDirection, VotingDuration};
//!
//! let user = UserContext::new("user123");
//! let mut store = StoryStore::new();
//!
//! let story = store
//!     .create_story(
//!         "The Lighthouse",
//!         "The lamp went dark at midnight.",
//!         VotingDuration::H24,
//!         &user,
//!     )
//!     .unwrap();
//!
//! let part = store
//!     .add_continuation(story, "Nobody noticed until the fog rolled in.", &user)
//!     .unwrap();
//!
//! let tally = store.vote(story, part, VoteDirection::Up, &user).unwrap();
//! assert_eq!(tally, 1);
//! ```

pub mod store;
pub mod story;
pub mod user;
pub mod vote;

// Primary public API
pub use store::{StoreError, StoryStore};
pub use story::{Continuation, ContinuationId, Story, StoryId, VotingDuration};
pub use user::{UserContext, UserId};
pub use vote::VoteDirection;
