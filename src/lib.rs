//! Badminton match maker: library with models, matchmaking logic, and persistence.

pub mod logic;
pub mod models;
pub mod notify;
pub mod service;
pub mod store;

pub use logic::generate_match;
pub use models::{
    Club, ClubConfig, ClubError, Court, CourtId, GameMatch, Group, GroupId, MatchId, MatchType,
    Player, PlayerId, GROUP_COLORS, RECENT_MATCHES,
};
pub use notify::{LogNotifier, Notifier, NullNotifier, Severity};
pub use service::MatchMaker;
pub use store::{load_club, BlobStore, FileStore, MemoryStore};
