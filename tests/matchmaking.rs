//! Integration tests for match generation: preconditions, team order, uniformity.

use badminton_match_web::{
    generate_match, Club, ClubConfig, ClubError, MatchType, RECENT_MATCHES,
};

fn club_with_players(n: usize) -> Club {
    let mut c = Club::new(ClubConfig::default());
    for i in 0..n {
        c.add_player(format!("P{i}"), None).unwrap();
    }
    c
}

#[test]
fn singles_with_two_players_uses_both() {
    let mut c = club_with_players(2);
    generate_match(&mut c, MatchType::Singles).unwrap();
    let m = c.current_match.as_ref().unwrap();
    assert_eq!(m.match_type, MatchType::Singles);
    assert_eq!(m.players.len(), 2);
    let mut names: Vec<_> = m.players.iter().map(|p| p.name.as_str()).collect();
    names.sort_unstable();
    assert_eq!(names, ["P0", "P1"]);
}

#[test]
fn singles_rejected_below_two_players() {
    let mut c = club_with_players(1);
    assert!(matches!(
        generate_match(&mut c, MatchType::Singles),
        Err(ClubError::NotEnoughPlayers {
            required: 2,
            available: 1
        })
    ));
    assert!(c.current_match.is_none());
    assert!(c.matches.is_empty());
}

#[test]
fn singles_rejected_on_empty_roster() {
    let mut c = club_with_players(0);
    assert!(generate_match(&mut c, MatchType::Singles).is_err());
    assert!(c.matches.is_empty());
}

#[test]
fn doubles_requires_four_players() {
    let mut c = club_with_players(3);
    assert!(matches!(
        generate_match(&mut c, MatchType::Doubles),
        Err(ClubError::NotEnoughPlayers {
            required: 4,
            available: 3
        })
    ));
}

#[test]
fn doubles_is_a_permutation_of_a_four_player_pool() {
    let mut c = club_with_players(4);
    generate_match(&mut c, MatchType::Doubles).unwrap();
    let m = c.current_match.as_ref().unwrap();
    assert_eq!(m.players.len(), 4);
    let mut names: Vec<_> = m.players.iter().map(|p| p.name.as_str()).collect();
    names.sort_unstable();
    assert_eq!(names, ["P0", "P1", "P2", "P3"]);
    assert_eq!(m.team_one().len(), 2);
    assert_eq!(m.team_two().len(), 2);
}

#[test]
fn doubles_selects_distinct_players_from_larger_pool() {
    let mut c = club_with_players(7);
    generate_match(&mut c, MatchType::Doubles).unwrap();
    let m = c.current_match.as_ref().unwrap();
    let mut ids: Vec<_> = m.players.iter().map(|p| p.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 4);
}

#[test]
fn new_match_becomes_current_and_heads_history() {
    let mut c = club_with_players(4);
    generate_match(&mut c, MatchType::Singles).unwrap();
    let first = c.current_match.as_ref().unwrap().id;
    generate_match(&mut c, MatchType::Doubles).unwrap();
    let second = c.current_match.as_ref().unwrap().id;
    assert_ne!(first, second);
    assert_eq!(c.matches.len(), 2);
    assert_eq!(c.matches[0].id, second);
    assert_eq!(c.matches[1].id, first);
}

#[test]
fn recent_matches_caps_at_five() {
    let mut c = club_with_players(2);
    for _ in 0..8 {
        generate_match(&mut c, MatchType::Singles).unwrap();
    }
    assert_eq!(c.matches.len(), 8);
    assert_eq!(c.recent_matches().len(), RECENT_MATCHES);
    assert_eq!(c.recent_matches()[0].id, c.matches[0].id);
}

#[test]
fn pool_is_restricted_to_the_active_group() {
    let mut c = Club::new(ClubConfig::default());
    let g1 = c.add_group("Monday").unwrap();
    let g2 = c.add_group("Tuesday").unwrap();
    c.add_player("Alice", Some(g1)).unwrap();
    c.add_player("Bob", Some(g1)).unwrap();
    c.add_player("Cara", Some(g2)).unwrap();
    c.add_player("Dan", Some(g2)).unwrap();
    c.select_group(g2).unwrap();
    generate_match(&mut c, MatchType::Singles).unwrap();
    let m = c.current_match.as_ref().unwrap();
    assert_eq!(m.group_id, Some(g2));
    for p in &m.players {
        assert_eq!(p.group_id, Some(g2));
    }
}

#[test]
fn require_court_blocks_generation_without_selection() {
    let mut c = Club::new(ClubConfig {
        require_group: false,
        require_court: true,
    });
    c.add_player("Alice", None).unwrap();
    c.add_player("Bob", None).unwrap();
    assert!(matches!(
        generate_match(&mut c, MatchType::Singles),
        Err(ClubError::NoCourtSelected)
    ));
    c.add_court("Court 1").unwrap();
    generate_match(&mut c, MatchType::Singles).unwrap();
}

#[test]
fn match_keeps_player_snapshot_after_deletion() {
    let mut c = club_with_players(2);
    generate_match(&mut c, MatchType::Singles).unwrap();
    let snapshot = c.current_match.as_ref().unwrap().players.clone();
    let id = snapshot[0].id;
    c.remove_player(id);
    assert_eq!(c.matches[0].players, snapshot);
}

#[test]
fn clear_players_drops_current_match_but_not_history() {
    let mut c = club_with_players(2);
    generate_match(&mut c, MatchType::Singles).unwrap();
    c.clear_players(None);
    assert!(c.players.is_empty());
    assert!(c.current_match.is_none());
    assert_eq!(c.matches.len(), 1);
}

#[test]
fn inclusion_frequency_is_roughly_uniform() {
    // 3 players, singles: each player is picked with p = 2/3.
    const TRIALS: usize = 3000;
    let mut c = club_with_players(3);
    let ids: Vec<_> = c.players.iter().map(|p| p.id).collect();
    let mut counts = [0usize; 3];
    let mut first_slot_counts = [0usize; 3];
    for _ in 0..TRIALS {
        generate_match(&mut c, MatchType::Singles).unwrap();
        let m = c.current_match.as_ref().unwrap();
        for (i, id) in ids.iter().enumerate() {
            if m.players.iter().any(|p| p.id == *id) {
                counts[i] += 1;
            }
            if m.players[0].id == *id {
                first_slot_counts[i] += 1;
            }
        }
    }
    for &count in &counts {
        let freq = count as f64 / TRIALS as f64;
        assert!(
            (0.55..=0.78).contains(&freq),
            "inclusion frequency out of bounds: {freq}"
        );
    }
    // order is not biased either: each player lands in slot 0 about 1/3 of the time
    for &count in &first_slot_counts {
        let freq = count as f64 / TRIALS as f64;
        assert!(
            (0.23..=0.44).contains(&freq),
            "slot-0 frequency out of bounds: {freq}"
        );
    }
}
