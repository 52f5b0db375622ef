//! Durable key-value store of named JSON blobs, plus the club load/save layer.
//!
//! One key per collection; every mutation rewrites the affected collection in
//! full. Reads tolerate bad data: an absent key is an empty collection and a
//! malformed blob is logged and treated as empty, so startup never fails.

use crate::models::{Club, ClubConfig, Court, CourtId, GameMatch, Group, GroupId, Player};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

pub const PLAYERS_KEY: &str = "badminton-players";
pub const GROUPS_KEY: &str = "badminton-groups";
pub const COURTS_KEY: &str = "badminton-courts";
pub const MATCHES_KEY: &str = "badminton-matches";
pub const SELECTION_KEY: &str = "badminton-selection";

/// Synchronous get/set of named string blobs. Writes are fire-and-forget:
/// implementations log failures instead of returning them.
pub trait BlobStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory store, used in tests and as a stand-in when no data dir is wanted.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    blobs: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BlobStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.blobs.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.blobs.insert(key.to_string(), value.to_string());
    }
}

/// File-backed store: one `<key>.json` file per key under a data directory.
#[derive(Clone, Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> std::io::Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl BlobStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        match std::fs::read_to_string(self.path(key)) {
            Ok(raw) => Some(raw),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => None,
            Err(err) => {
                log::warn!("failed to read {key}: {err}");
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Err(err) = std::fs::write(self.path(key), value) {
            log::error!("failed to write {key}: {err}");
        }
    }
}

/// Persisted active group/court ids (everything else lives in the four
/// collection keys).
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
struct Selection {
    #[serde(default)]
    active_group_id: Option<GroupId>,
    #[serde(default)]
    active_court_id: Option<CourtId>,
}

fn read_blob<T: DeserializeOwned + Default>(store: &dyn BlobStore, key: &str) -> T {
    match store.get(key) {
        Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|err| {
            log::warn!("ignoring malformed blob {key}: {err}");
            T::default()
        }),
        None => T::default(),
    }
}

fn write_blob<T: Serialize>(store: &mut dyn BlobStore, key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(raw) => store.set(key, &raw),
        Err(err) => log::error!("failed to serialize {key}: {err}"),
    }
}

/// Rehydrate a club from the store. A persisted active id that no longer
/// resolves falls back to the first element of its collection.
pub fn load_club(store: &dyn BlobStore, config: ClubConfig) -> Club {
    let players: Vec<Player> = read_blob(store, PLAYERS_KEY);
    let groups: Vec<Group> = read_blob(store, GROUPS_KEY);
    let courts: Vec<Court> = read_blob(store, COURTS_KEY);
    let matches: Vec<GameMatch> = read_blob(store, MATCHES_KEY);
    let selection: Selection = read_blob(store, SELECTION_KEY);

    let active_group_id = selection
        .active_group_id
        .filter(|gid| groups.iter().any(|g| g.id == *gid))
        .or_else(|| groups.first().map(|g| g.id));
    let active_court_id = selection
        .active_court_id
        .filter(|cid| courts.iter().any(|c| c.id == *cid))
        .or_else(|| courts.first().map(|c| c.id));

    Club {
        config,
        players,
        groups,
        courts,
        matches,
        current_match: None,
        active_group_id,
        active_court_id,
    }
}

pub fn save_players(store: &mut dyn BlobStore, club: &Club) {
    write_blob(store, PLAYERS_KEY, &club.players);
}

pub fn save_groups(store: &mut dyn BlobStore, club: &Club) {
    write_blob(store, GROUPS_KEY, &club.groups);
}

pub fn save_courts(store: &mut dyn BlobStore, club: &Club) {
    write_blob(store, COURTS_KEY, &club.courts);
}

pub fn save_matches(store: &mut dyn BlobStore, club: &Club) {
    write_blob(store, MATCHES_KEY, &club.matches);
}

pub fn save_selection(store: &mut dyn BlobStore, club: &Club) {
    let selection = Selection {
        active_group_id: club.active_group_id,
        active_court_id: club.active_court_id,
    };
    write_blob(store, SELECTION_KEY, &selection);
}
