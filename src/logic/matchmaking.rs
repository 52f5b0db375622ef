//! Random match generation: pick players from the current pool and record the match.

use crate::models::{Club, ClubError, GameMatch, MatchType};
use rand::seq::SliceRandom;

/// Generate a random match of the given type from the current pool (the
/// active group's players, or the whole roster when no group is active).
///
/// 1. Check the required group/court selections and the pool size.
/// 2. Uniformly shuffle a copy of the pool (Fisher-Yates).
/// 3. Take the first 2 (singles) or 4 (doubles) players as snapshots; their
///    shuffle order is the team order and is never re-sorted.
///
/// The new match becomes the current match and is prepended to history. On
/// error nothing changes.
pub fn generate_match(club: &mut Club, match_type: MatchType) -> Result<(), ClubError> {
    if club.config.require_group && club.active_group_id.is_none() {
        return Err(ClubError::NoGroupSelected);
    }
    if club.config.require_court && club.active_court_id.is_none() {
        return Err(ClubError::NoCourtSelected);
    }

    let required = match_type.required_players();
    let mut pool: Vec<_> = club
        .current_group_players()
        .into_iter()
        .cloned()
        .collect();
    if pool.len() < required {
        return Err(ClubError::NotEnoughPlayers {
            required,
            available: pool.len(),
        });
    }

    pool.shuffle(&mut rand::thread_rng());
    pool.truncate(required);

    let game = GameMatch::new(match_type, pool, club.active_group_id, club.active_court_id);
    club.current_match = Some(game.clone());
    club.matches.insert(0, game);

    Ok(())
}
