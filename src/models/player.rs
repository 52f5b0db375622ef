//! Player data structure.

use crate::models::group::GroupId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a player (used in matches and lookups).
pub type PlayerId = Uuid;

/// A registered player. Ungrouped players carry `group_id: None`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Owning group, if the roster is organized into groups.
    #[serde(default)]
    pub group_id: Option<GroupId>,
    pub date_added: DateTime<Utc>,
}

impl Player {
    /// Create a new player with the given (already trimmed) name.
    pub fn new(name: impl Into<String>, group_id: Option<GroupId>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            group_id,
            date_added: Utc::now(),
        }
    }
}
