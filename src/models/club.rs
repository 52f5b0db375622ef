//! Club state container: players, groups, courts, match history, and the
//! active group/court selection.

use crate::models::court::{Court, CourtId};
use crate::models::game::GameMatch;
use crate::models::group::{Group, GroupId};
use crate::models::player::{Player, PlayerId};
use serde::{Deserialize, Serialize};

/// How many matches a "recent" view surfaces. Storage keeps the full history.
pub const RECENT_MATCHES: usize = 5;

/// Errors that can occur during club operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ClubError {
    /// Name was empty or whitespace-only.
    EmptyName,
    /// A player with this name already exists in the same group (names are unique, case-insensitive).
    DuplicatePlayerName,
    /// A group must be selected for this operation but none is.
    NoGroupSelected,
    /// A court must be selected for this operation but none is.
    NoCourtSelected,
    /// Group id does not resolve to a known group.
    GroupNotFound(GroupId),
    /// Court id does not resolve to a known court.
    CourtNotFound(CourtId),
    /// Group still has players and cannot be deleted.
    GroupNotEmpty,
    /// Not enough players in the pool for the requested match type.
    NotEnoughPlayers { required: usize, available: usize },
}

impl std::fmt::Display for ClubError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClubError::EmptyName => write!(f, "Please enter a name"),
            ClubError::DuplicatePlayerName => write!(f, "Player already exists"),
            ClubError::NoGroupSelected => write!(f, "Please select a group first"),
            ClubError::NoCourtSelected => write!(f, "Please select a court first"),
            ClubError::GroupNotFound(_) => write!(f, "Group not found"),
            ClubError::CourtNotFound(_) => write!(f, "Court not found"),
            ClubError::GroupNotEmpty => {
                write!(f, "Group still has players and cannot be deleted")
            }
            ClubError::NotEnoughPlayers { required, .. } => {
                write!(f, "You need at least {required} players")
            }
        }
    }
}

/// Which roster features are mandatory. The defaults match the single-group
/// variant: players and matches need no group or court context.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct ClubConfig {
    /// Adding players and generating matches requires an active group.
    #[serde(default)]
    pub require_group: bool,
    /// Generating matches requires an active court.
    #[serde(default)]
    pub require_court: bool,
}

/// Full club state: roster, groups, courts, match history, and selections.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Club {
    #[serde(default)]
    pub config: ClubConfig,
    /// Registered players, in insertion order (used for display indexing).
    pub players: Vec<Player>,
    pub groups: Vec<Group>,
    pub courts: Vec<Court>,
    /// Match history, most recent first. Unbounded.
    pub matches: Vec<GameMatch>,
    /// The most recently generated match, held for display until replaced or cleared.
    #[serde(default)]
    pub current_match: Option<GameMatch>,
    /// Default group context for adding players and generating matches.
    #[serde(default)]
    pub active_group_id: Option<GroupId>,
    /// Default court context for generating matches.
    #[serde(default)]
    pub active_court_id: Option<CourtId>,
}

impl Club {
    /// Create an empty club with the given configuration.
    pub fn new(config: ClubConfig) -> Self {
        Self {
            config,
            players: Vec::new(),
            groups: Vec::new(),
            courts: Vec::new(),
            matches: Vec::new(),
            current_match: None,
            active_group_id: None,
            active_court_id: None,
        }
    }

    // --- players ---

    /// Add a player. The target group is `group_id` if given, else the active
    /// group. Names must be non-empty and unique (case-insensitive) within
    /// the target group; ungrouped players form their own scope.
    pub fn add_player(
        &mut self,
        name: impl Into<String>,
        group_id: Option<GroupId>,
    ) -> Result<PlayerId, ClubError> {
        let name = name.into();
        let name_trimmed = name.trim();
        if name_trimmed.is_empty() {
            return Err(ClubError::EmptyName);
        }
        let target = group_id.or(self.active_group_id);
        if self.config.require_group && target.is_none() {
            return Err(ClubError::NoGroupSelected);
        }
        if let Some(gid) = target {
            if !self.groups.iter().any(|g| g.id == gid) {
                return Err(ClubError::GroupNotFound(gid));
            }
        }
        let is_duplicate = self
            .players
            .iter()
            .filter(|p| p.group_id == target)
            .any(|p| p.name.eq_ignore_ascii_case(name_trimmed));
        if is_duplicate {
            return Err(ClubError::DuplicatePlayerName);
        }
        let player = Player::new(name_trimmed, target);
        let id = player.id;
        self.players.push(player);
        Ok(id)
    }

    /// Remove a player by id. Absent ids are a silent no-op (`None`).
    /// Matches already recorded keep their snapshot of the player.
    pub fn remove_player(&mut self, player_id: PlayerId) -> Option<Player> {
        let idx = self.players.iter().position(|p| p.id == player_id)?;
        Some(self.players.remove(idx))
    }

    /// Remove every player in the scope (one group, or all when `None`).
    /// Also discards the current match; history is untouched.
    /// Returns how many players were removed.
    pub fn clear_players(&mut self, scope: Option<GroupId>) -> usize {
        let before = self.players.len();
        match scope {
            Some(gid) => self.players.retain(|p| p.group_id != Some(gid)),
            None => self.players.clear(),
        }
        self.current_match = None;
        before - self.players.len()
    }

    // --- groups ---

    /// Add a group. Its color cycles through the palette; the first group
    /// created while nothing is active becomes the active group.
    pub fn add_group(&mut self, name: impl Into<String>) -> Result<GroupId, ClubError> {
        let name = name.into();
        let name_trimmed = name.trim();
        if name_trimmed.is_empty() {
            return Err(ClubError::EmptyName);
        }
        let group = Group::new(name_trimmed, self.groups.len());
        let id = group.id;
        self.groups.push(group);
        if self.active_group_id.is_none() {
            self.active_group_id = Some(id);
        }
        Ok(id)
    }

    /// Remove a group by id. Refuses while any player references it. Absent
    /// ids are a silent no-op. Removing the active group moves the active
    /// reference to the first remaining group, if any.
    pub fn remove_group(&mut self, group_id: GroupId) -> Result<Option<Group>, ClubError> {
        let idx = match self.groups.iter().position(|g| g.id == group_id) {
            Some(idx) => idx,
            None => return Ok(None),
        };
        if self.players.iter().any(|p| p.group_id == Some(group_id)) {
            return Err(ClubError::GroupNotEmpty);
        }
        let group = self.groups.remove(idx);
        if self.active_group_id == Some(group_id) {
            self.active_group_id = self.groups.first().map(|g| g.id);
        }
        Ok(Some(group))
    }

    // --- courts ---

    /// Add a court. The first court created while nothing is active becomes
    /// the active court.
    pub fn add_court(&mut self, name: impl Into<String>) -> Result<CourtId, ClubError> {
        let name = name.into();
        let name_trimmed = name.trim();
        if name_trimmed.is_empty() {
            return Err(ClubError::EmptyName);
        }
        let court = Court::new(name_trimmed);
        let id = court.id;
        self.courts.push(court);
        if self.active_court_id.is_none() {
            self.active_court_id = Some(id);
        }
        Ok(id)
    }

    /// Remove a court by id. No deletion guard: historical matches keep a
    /// dangling `court_id`. Absent ids are a silent no-op.
    pub fn remove_court(&mut self, court_id: CourtId) -> Option<Court> {
        let idx = self.courts.iter().position(|c| c.id == court_id)?;
        let court = self.courts.remove(idx);
        if self.active_court_id == Some(court_id) {
            self.active_court_id = self.courts.first().map(|c| c.id);
        }
        Some(court)
    }

    // --- selection ---

    /// Make the given group the active one.
    pub fn select_group(&mut self, group_id: GroupId) -> Result<(), ClubError> {
        if !self.groups.iter().any(|g| g.id == group_id) {
            return Err(ClubError::GroupNotFound(group_id));
        }
        self.active_group_id = Some(group_id);
        Ok(())
    }

    /// Make the given court the active one.
    pub fn select_court(&mut self, court_id: CourtId) -> Result<(), ClubError> {
        if !self.courts.iter().any(|c| c.id == court_id) {
            return Err(ClubError::CourtNotFound(court_id));
        }
        self.active_court_id = Some(court_id);
        Ok(())
    }

    // --- derived views (always recomputed, never cached) ---

    /// Players belonging to the given group.
    pub fn group_players(&self, group_id: GroupId) -> Vec<&Player> {
        self.players
            .iter()
            .filter(|p| p.group_id == Some(group_id))
            .collect()
    }

    /// The current working set: the active group's players, or the whole
    /// roster when no group is active.
    pub fn current_group_players(&self) -> Vec<&Player> {
        match self.active_group_id {
            Some(gid) => self.group_players(gid),
            None => self.players.iter().collect(),
        }
    }

    pub fn current_group(&self) -> Option<&Group> {
        self.groups
            .iter()
            .find(|g| Some(g.id) == self.active_group_id)
    }

    pub fn current_court(&self) -> Option<&Court> {
        self.courts
            .iter()
            .find(|c| Some(c.id) == self.active_court_id)
    }

    /// The most recent matches, newest first (at most [`RECENT_MATCHES`]).
    pub fn recent_matches(&self) -> &[GameMatch] {
        &self.matches[..self.matches.len().min(RECENT_MATCHES)]
    }
}

impl Default for Club {
    fn default() -> Self {
        Self::new(ClubConfig::default())
    }
}
