//! The player collaborator: a named identity with a cumulative score.

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use tracing::instrument;

/// A participant in a Connect-N game.
///
/// Identity is the name alone: two `Player` values with the same name are
/// equal and hash alike even when their scores differ. The score is a
/// cumulative win counter, bumped through [`crate::Board::award_win`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Display name, also the identity.
    name: String,
    /// Cumulative games won.
    score: u32,
}

impl Player {
    /// Creates a player with the given name and a zero score.
    #[instrument]
    pub fn new(name: impl Into<String> + std::fmt::Debug) -> Self {
        Self {
            name: name.into(),
            score: 0,
        }
    }

    /// Returns the player's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the cumulative score.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Records one more game won.
    pub fn add_score(&mut self) {
        self.score += 1;
    }
}

impl PartialEq for Player {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Player {}

impl Hash for Player {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
