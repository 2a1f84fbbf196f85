//! Vote aggregation.
//!
//! Each user holds at most one vote per continuation. Casting the same
//! direction twice removes the vote; casting the opposite direction
//! replaces it, moving the tally by two.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::story::Continuation;
use crate::user::UserId;

/// Direction of a vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VoteDirection {
    Up,
    Down,
}

impl VoteDirection {
    /// Signed value this direction contributes to a tally.
    pub fn value(&self) -> i8 {
        match self {
            VoteDirection::Up => 1,
            VoteDirection::Down => -1,
        }
    }

    /// Parse `"up"` or `"down"`, case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "up" | "u" | "+1" => Some(VoteDirection::Up),
            "down" | "d" | "-1" => Some(VoteDirection::Down),
            _ => None,
        }
    }
}

impl fmt::Display for VoteDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VoteDirection::Up => write!(f, "up"),
            VoteDirection::Down => write!(f, "down"),
        }
    }
}

impl Continuation {
    /// Apply one user's vote and return the tally delta.
    ///
    /// Re-casting the recorded direction toggles the vote off and the
    /// entry is removed. Any other cast (fresh vote or flip) records the
    /// requested direction; a flip therefore moves the tally by two.
    pub fn apply_vote(&mut self, voter: UserId, direction: VoteDirection) -> i64 {
        let current = self.voters.get(&voter).copied().unwrap_or(0);
        let requested = direction.value();

        let delta = if current == requested {
            self.voters.remove(&voter);
            -current
        } else {
            self.voters.insert(voter, requested);
            requested - current
        };

        self.votes += i64::from(delta);
        i64::from(delta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh() -> Continuation {
        Continuation::new("And then...", "alice")
    }

    /// The tally must always equal the sum of the voter map.
    fn assert_consistent(c: &Continuation) {
        let sum: i64 = c.voters.values().map(|&v| i64::from(v)).sum();
        assert_eq!(c.votes, sum);
    }

    #[test]
    fn test_first_upvote() {
        let mut c = fresh();
        let u = UserId::new();

        let delta = c.apply_vote(u, VoteDirection::Up);
        assert_eq!(delta, 1);
        assert_eq!(c.votes, 1);
        assert_eq!(c.vote_of(u), Some(1));
        assert_consistent(&c);
    }

    #[test]
    fn test_toggle_off_removes_voter() {
        let mut c = fresh();
        let u = UserId::new();

        c.apply_vote(u, VoteDirection::Up);
        let delta = c.apply_vote(u, VoteDirection::Up);

        assert_eq!(delta, -1);
        assert_eq!(c.votes, 0);
        assert_eq!(c.vote_of(u), None);
        assert!(c.voters.is_empty());
        assert_consistent(&c);
    }

    #[test]
    fn test_flip_moves_tally_by_two() {
        let mut c = fresh();
        let u = UserId::new();

        c.apply_vote(u, VoteDirection::Up);
        let delta = c.apply_vote(u, VoteDirection::Down);

        assert_eq!(delta, -2);
        assert_eq!(c.votes, -1);
        assert_eq!(c.vote_of(u), Some(-1));
        assert_eq!(c.voters.len(), 1);
        assert_consistent(&c);
    }

    #[test]
    fn test_full_toggle_sequence() {
        // up: 0 -> 1, up again: 1 -> 0, down: 0 -> -1, up: -1 -> 1
        let mut c = fresh();
        let u = UserId::new();

        c.apply_vote(u, VoteDirection::Up);
        assert_eq!(c.votes, 1);
        assert_eq!(c.vote_of(u), Some(1));

        c.apply_vote(u, VoteDirection::Up);
        assert_eq!(c.votes, 0);
        assert_eq!(c.vote_of(u), None);

        c.apply_vote(u, VoteDirection::Down);
        assert_eq!(c.votes, -1);
        assert_eq!(c.vote_of(u), Some(-1));

        let delta = c.apply_vote(u, VoteDirection::Up);
        assert_eq!(delta, 2);
        assert_eq!(c.votes, 1);
        assert_eq!(c.vote_of(u), Some(1));
        assert_consistent(&c);
    }

    #[test]
    fn test_votes_accumulate_across_users() {
        let mut c = fresh();
        let a = UserId::new();
        let b = UserId::new();

        c.apply_vote(a, VoteDirection::Up);
        c.apply_vote(b, VoteDirection::Up);
        assert_eq!(c.votes, 2);

        // One user flipping leaves the other untouched.
        c.apply_vote(b, VoteDirection::Down);
        assert_eq!(c.votes, 0);
        assert_eq!(c.vote_of(a), Some(1));
        assert_eq!(c.vote_of(b), Some(-1));
        assert_consistent(&c);
    }

    #[test]
    fn test_direction_parse() {
        assert_eq!(VoteDirection::parse("up"), Some(VoteDirection::Up));
        assert_eq!(VoteDirection::parse("DOWN"), Some(VoteDirection::Down));
        assert_eq!(VoteDirection::parse(" u "), Some(VoteDirection::Up));
        assert_eq!(VoteDirection::parse("sideways"), None);
    }
}
