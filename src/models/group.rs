//! Group data structure and the color palette cycled at creation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a group.
pub type GroupId = Uuid;

/// Cosmetic tags handed out round-robin as groups are created.
pub const GROUP_COLORS: [&str; 8] = [
    "#ef4444", "#f97316", "#eab308", "#22c55e", "#3b82f6", "#8b5cf6", "#ec4899", "#14b8a6",
];

/// A named group of players (e.g. "Monday night", "Beginners").
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: GroupId,
    pub name: String,
    /// Hex color tag for display; assigned from [`GROUP_COLORS`].
    pub color: String,
    pub date_created: DateTime<Utc>,
}

impl Group {
    /// Create a new group; `existing` is the current group count, used to pick the next palette color.
    pub fn new(name: impl Into<String>, existing: usize) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            color: GROUP_COLORS[existing % GROUP_COLORS.len()].to_string(),
            date_created: Utc::now(),
        }
    }
}
