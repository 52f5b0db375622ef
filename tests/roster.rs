//! Integration tests for roster management: players, groups, courts, selections.

use badminton_match_web::{Club, ClubConfig, ClubError, GROUP_COLORS};

fn club() -> Club {
    Club::new(ClubConfig::default())
}

fn club_with_players(n: usize) -> Club {
    let mut c = club();
    for i in 0..n {
        c.add_player(format!("P{i}"), None).unwrap();
    }
    c
}

#[test]
fn add_then_remove_restores_roster() {
    let mut c = club_with_players(3);
    let before: Vec<_> = c.players.iter().map(|p| p.id).collect();
    let id = c.add_player("Dana", None).unwrap();
    assert_eq!(c.players.len(), 4);
    let removed = c.remove_player(id).unwrap();
    assert_eq!(removed.name, "Dana");
    let after: Vec<_> = c.players.iter().map(|p| p.id).collect();
    assert_eq!(before, after);
}

#[test]
fn player_names_are_trimmed() {
    let mut c = club();
    c.add_player("  Alice  ", None).unwrap();
    assert_eq!(c.players[0].name, "Alice");
}

#[test]
fn empty_player_name_rejected() {
    let mut c = club();
    assert!(matches!(c.add_player("   ", None), Err(ClubError::EmptyName)));
    assert!(c.players.is_empty());
}

#[test]
fn duplicate_name_rejected_case_insensitive() {
    let mut c = club();
    c.add_player("Alice", None).unwrap();
    assert!(matches!(
        c.add_player("alice", None),
        Err(ClubError::DuplicatePlayerName)
    ));
    assert_eq!(c.players.len(), 1);
}

#[test]
fn same_name_allowed_in_different_groups() {
    let mut c = club();
    let g1 = c.add_group("Monday").unwrap();
    let g2 = c.add_group("Tuesday").unwrap();
    c.add_player("Alice", Some(g1)).unwrap();
    c.add_player("Alice", Some(g2)).unwrap();
    assert_eq!(c.players.len(), 2);
}

#[test]
fn remove_unknown_player_is_silent_noop() {
    let mut c = club_with_players(2);
    assert!(c.remove_player(uuid::Uuid::new_v4()).is_none());
    assert_eq!(c.players.len(), 2);
}

#[test]
fn add_player_with_unknown_group_rejected() {
    let mut c = club();
    let ghost = uuid::Uuid::new_v4();
    assert!(matches!(
        c.add_player("Alice", Some(ghost)),
        Err(ClubError::GroupNotFound(id)) if id == ghost
    ));
}

#[test]
fn require_group_blocks_ungrouped_players() {
    let mut c = Club::new(ClubConfig {
        require_group: true,
        require_court: false,
    });
    assert!(matches!(
        c.add_player("Alice", None),
        Err(ClubError::NoGroupSelected)
    ));
    let gid = c.add_group("Monday").unwrap();
    // the new group is active, so no explicit group id is needed anymore
    let id = c.add_player("Alice", None).unwrap();
    assert_eq!(c.players[0].id, id);
    assert_eq!(c.players[0].group_id, Some(gid));
}

#[test]
fn group_colors_cycle_through_palette() {
    let mut c = club();
    for i in 0..GROUP_COLORS.len() + 2 {
        c.add_group(format!("G{i}")).unwrap();
    }
    assert_eq!(c.groups[0].color, GROUP_COLORS[0]);
    assert_eq!(c.groups[GROUP_COLORS.len()].color, GROUP_COLORS[0]);
    assert_eq!(c.groups[GROUP_COLORS.len() + 1].color, GROUP_COLORS[1]);
}

#[test]
fn first_group_and_court_become_active() {
    let mut c = club();
    assert!(c.current_group().is_none());
    let gid = c.add_group("Monday").unwrap();
    let cid = c.add_court("Court 1").unwrap();
    c.add_group("Tuesday").unwrap();
    assert_eq!(c.active_group_id, Some(gid));
    assert_eq!(c.active_court_id, Some(cid));
    assert_eq!(c.current_group().unwrap().name, "Monday");
    assert_eq!(c.current_court().unwrap().name, "Court 1");
}

#[test]
fn deleting_nonempty_group_fails_and_keeps_everything() {
    let mut c = club();
    let gid = c.add_group("Monday").unwrap();
    c.add_player("Alice", Some(gid)).unwrap();
    assert!(matches!(c.remove_group(gid), Err(ClubError::GroupNotEmpty)));
    assert_eq!(c.groups.len(), 1);
    assert_eq!(c.players.len(), 1);
}

#[test]
fn deleting_active_group_reassigns_to_remaining() {
    let mut c = club();
    let g1 = c.add_group("Monday").unwrap();
    let g2 = c.add_group("Tuesday").unwrap();
    c.remove_group(g1).unwrap();
    assert_eq!(c.active_group_id, Some(g2));
    c.remove_group(g2).unwrap();
    assert_eq!(c.active_group_id, None);
}

#[test]
fn deleting_unknown_group_is_silent_noop() {
    let mut c = club();
    assert!(matches!(c.remove_group(uuid::Uuid::new_v4()), Ok(None)));
}

#[test]
fn courts_can_always_be_deleted() {
    let mut c = club_with_players(2);
    let cid = c.add_court("Court 1").unwrap();
    badminton_match_web::generate_match(&mut c, badminton_match_web::MatchType::Singles).unwrap();
    assert_eq!(c.matches[0].court_id, Some(cid));
    assert!(c.remove_court(cid).is_some());
    // history keeps the dangling reference
    assert_eq!(c.matches[0].court_id, Some(cid));
    assert_eq!(c.active_court_id, None);
}

#[test]
fn select_unknown_group_or_court_fails() {
    let mut c = club();
    assert!(matches!(
        c.select_group(uuid::Uuid::new_v4()),
        Err(ClubError::GroupNotFound(_))
    ));
    assert!(matches!(
        c.select_court(uuid::Uuid::new_v4()),
        Err(ClubError::CourtNotFound(_))
    ));
}

#[test]
fn clear_players_scoped_to_one_group() {
    let mut c = club();
    let g1 = c.add_group("Monday").unwrap();
    let g2 = c.add_group("Tuesday").unwrap();
    c.add_player("Alice", Some(g1)).unwrap();
    c.add_player("Bob", Some(g1)).unwrap();
    c.add_player("Cara", Some(g2)).unwrap();
    assert_eq!(c.clear_players(Some(g1)), 2);
    assert_eq!(c.players.len(), 1);
    assert_eq!(c.players[0].name, "Cara");
}
