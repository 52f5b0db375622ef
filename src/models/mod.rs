//! Data structures for the match maker: players, groups, courts, matches, club state.

mod club;
mod court;
mod game;
mod group;
mod player;

pub use club::{Club, ClubConfig, ClubError, RECENT_MATCHES};
pub use court::{Court, CourtId};
pub use game::{GameMatch, MatchId, MatchType};
pub use group::{Group, GroupId, GROUP_COLORS};
pub use player::{Player, PlayerId};
