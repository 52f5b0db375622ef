//! Match data structures for singles (1v1) and doubles (2v2) games.

use crate::models::court::CourtId;
use crate::models::group::GroupId;
use crate::models::player::Player;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a match.
pub type MatchId = Uuid;

/// Kind of match to generate.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchType {
    Singles,
    Doubles,
}

impl MatchType {
    /// Players needed on court: 2 for singles, 4 for doubles.
    pub fn required_players(self) -> usize {
        match self {
            MatchType::Singles => 2,
            MatchType::Doubles => 4,
        }
    }

    /// Lowercase name, matching the serialized form ("singles" / "doubles").
    pub fn name(self) -> &'static str {
        match self {
            MatchType::Singles => "singles",
            MatchType::Doubles => "doubles",
        }
    }

    /// Capitalized label for messages ("Singles" / "Doubles").
    pub fn label(self) -> &'static str {
        match self {
            MatchType::Singles => "Singles",
            MatchType::Doubles => "Doubles",
        }
    }
}

/// A generated match. Immutable once created.
///
/// `players` holds point-in-time copies in shuffle order: for doubles,
/// `players[0..2]` are one side and `players[2..4]` the other; for singles,
/// `players[0]` faces `players[1]`. Deleting a player later does not alter
/// matches already recorded, and a `court_id` left dangling by a court
/// deletion is shown as "Unknown".
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameMatch {
    pub id: MatchId,
    pub match_type: MatchType,
    pub players: Vec<Player>,
    #[serde(default)]
    pub group_id: Option<GroupId>,
    #[serde(default)]
    pub court_id: Option<CourtId>,
    pub timestamp: DateTime<Utc>,
}

impl GameMatch {
    pub fn new(
        match_type: MatchType,
        players: Vec<Player>,
        group_id: Option<GroupId>,
        court_id: Option<CourtId>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            match_type,
            players,
            group_id,
            court_id,
            timestamp: Utc::now(),
        }
    }

    /// First side: `players[0..1]` for singles, `players[0..2]` for doubles.
    pub fn team_one(&self) -> &[Player] {
        &self.players[..self.players.len() / 2]
    }

    /// Second side: the remaining players.
    pub fn team_two(&self) -> &[Player] {
        &self.players[self.players.len() / 2..]
    }
}
