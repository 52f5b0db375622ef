//! Service layer: one synchronous operation per user action, run to
//! completion as validate, mutate, persist the affected collections, notify.

use crate::logic::generate_match;
use crate::models::{Club, ClubConfig, ClubError, CourtId, GroupId, MatchType, PlayerId};
use crate::notify::{Notifier, Severity};
use crate::store::{
    load_club, save_courts, save_groups, save_matches, save_players, save_selection, BlobStore,
};

/// Owns the club state and its two collaborators: the persistent store and
/// the notification sink. Every mutation is fully applied or fully rejected
/// before the next is processed.
pub struct MatchMaker {
    club: Club,
    store: Box<dyn BlobStore + Send + Sync>,
    notifier: Box<dyn Notifier + Send + Sync>,
}

impl MatchMaker {
    /// Rehydrate the club from the store and wire up the collaborators.
    pub fn new(
        store: Box<dyn BlobStore + Send + Sync>,
        notifier: Box<dyn Notifier + Send + Sync>,
        config: ClubConfig,
    ) -> Self {
        let club = load_club(store.as_ref(), config);
        Self {
            club,
            store,
            notifier,
        }
    }

    /// Read access to the current state.
    pub fn club(&self) -> &Club {
        &self.club
    }

    fn reject(&self, message: &str) {
        self.notifier.notify("Error", message, Severity::Error);
    }

    pub fn add_player(
        &mut self,
        name: &str,
        group_id: Option<GroupId>,
    ) -> Result<PlayerId, ClubError> {
        match self.club.add_player(name, group_id) {
            Ok(id) => {
                save_players(self.store.as_mut(), &self.club);
                self.notifier.notify(
                    "Success",
                    &format!("{} added to the roster!", name.trim()),
                    Severity::Success,
                );
                Ok(id)
            }
            Err(ClubError::EmptyName) => {
                self.reject("Please enter a player name");
                Err(ClubError::EmptyName)
            }
            Err(err) => {
                self.reject(&err.to_string());
                Err(err)
            }
        }
    }

    pub fn remove_player(&mut self, player_id: PlayerId) {
        if let Some(player) = self.club.remove_player(player_id) {
            save_players(self.store.as_mut(), &self.club);
            self.notifier.notify(
                "Player Removed",
                &format!("{} has been removed from the roster", player.name),
                Severity::Info,
            );
        }
    }

    pub fn clear_players(&mut self, scope: Option<GroupId>) {
        self.club.clear_players(scope);
        save_players(self.store.as_mut(), &self.club);
        self.notifier.notify(
            "All Players Cleared",
            "Player roster has been reset",
            Severity::Info,
        );
    }

    pub fn add_group(&mut self, name: &str) -> Result<GroupId, ClubError> {
        match self.club.add_group(name) {
            Ok(id) => {
                save_groups(self.store.as_mut(), &self.club);
                save_selection(self.store.as_mut(), &self.club);
                self.notifier.notify(
                    "Success",
                    &format!("{} group created!", name.trim()),
                    Severity::Success,
                );
                Ok(id)
            }
            Err(ClubError::EmptyName) => {
                self.reject("Please enter a group name");
                Err(ClubError::EmptyName)
            }
            Err(err) => {
                self.reject(&err.to_string());
                Err(err)
            }
        }
    }

    pub fn remove_group(&mut self, group_id: GroupId) -> Result<(), ClubError> {
        match self.club.remove_group(group_id) {
            Ok(Some(group)) => {
                save_groups(self.store.as_mut(), &self.club);
                save_selection(self.store.as_mut(), &self.club);
                self.notifier.notify(
                    "Group Removed",
                    &format!("{} has been removed", group.name),
                    Severity::Info,
                );
                Ok(())
            }
            Ok(None) => Ok(()),
            Err(err) => {
                self.reject(&err.to_string());
                Err(err)
            }
        }
    }

    pub fn add_court(&mut self, name: &str) -> Result<CourtId, ClubError> {
        match self.club.add_court(name) {
            Ok(id) => {
                save_courts(self.store.as_mut(), &self.club);
                save_selection(self.store.as_mut(), &self.club);
                self.notifier.notify(
                    "Success",
                    &format!("{} court added!", name.trim()),
                    Severity::Success,
                );
                Ok(id)
            }
            Err(ClubError::EmptyName) => {
                self.reject("Please enter a court name");
                Err(ClubError::EmptyName)
            }
            Err(err) => {
                self.reject(&err.to_string());
                Err(err)
            }
        }
    }

    pub fn remove_court(&mut self, court_id: CourtId) {
        if let Some(court) = self.club.remove_court(court_id) {
            save_courts(self.store.as_mut(), &self.club);
            save_selection(self.store.as_mut(), &self.club);
            self.notifier.notify(
                "Court Removed",
                &format!("{} has been removed", court.name),
                Severity::Info,
            );
        }
    }

    pub fn select_group(&mut self, group_id: GroupId) -> Result<(), ClubError> {
        self.club.select_group(group_id)?;
        save_selection(self.store.as_mut(), &self.club);
        Ok(())
    }

    pub fn select_court(&mut self, court_id: CourtId) -> Result<(), ClubError> {
        self.club.select_court(court_id)?;
        save_selection(self.store.as_mut(), &self.club);
        Ok(())
    }

    pub fn generate_match(&mut self, match_type: MatchType) -> Result<(), ClubError> {
        match generate_match(&mut self.club, match_type) {
            Ok(()) => {
                save_matches(self.store.as_mut(), &self.club);
                self.notifier.notify(
                    "Match Generated!",
                    &format!("{} match ready to play!", match_type.label()),
                    Severity::Success,
                );
                Ok(())
            }
            Err(ClubError::NotEnoughPlayers {
                required,
                available,
            }) => {
                self.notifier.notify(
                    "Not Enough Players",
                    &format!(
                        "You need at least {required} players for {}",
                        match_type.name()
                    ),
                    Severity::Error,
                );
                Err(ClubError::NotEnoughPlayers {
                    required,
                    available,
                })
            }
            Err(err) => {
                self.reject(&err.to_string());
                Err(err)
            }
        }
    }
}
