mod common;

use ace_tracker::store::games::{GamePatch, GameStatus, GamesState, InningsPitched, PitcherLine, Team};
use ace_tracker::store::slice::Fetchable;

#[test]
fn seeded_selectors() {
    let games = GamesState::seeded();
    let upcoming: Vec<_> = games.upcoming().iter().map(|g| g.id.as_str()).collect();
    assert_eq!(upcoming, vec!["game1", "game2"]);
    assert_eq!(games.previous()[0].id, "game3");

    let current = games.current().unwrap();
    assert_eq!(current.status, GameStatus::Live);
    assert_eq!(current.away_team.score, Some(3));
    assert_eq!(current.home_team.score, Some(2));
    assert_eq!(current.pitcher.innings_pitched.unwrap().to_string(), "5.1");
}

#[test]
fn upcoming_games_carry_no_scores() {
    let games = GamesState::seeded();
    for game in games.upcoming() {
        assert!(game.home_team.score.is_none());
        assert!(game.away_team.score.is_none());
    }
}

#[test]
fn find_searches_all_collections() {
    let games = GamesState::seeded();
    assert_eq!(games.find("game4").unwrap().status, GameStatus::Live);
    assert_eq!(games.find("game2").unwrap().status, GameStatus::Upcoming);
    assert_eq!(games.find("game3").unwrap().status, GameStatus::Completed);
    assert!(games.find("game9").is_none());
}

#[test]
fn merge_into_current_overwrites_given_fields_only() {
    let mut games = GamesState::seeded();
    let patch = GamePatch {
        away_team: Some(Team::new("Dodgers", "logo").with_score(4)),
        pitcher: Some(PitcherLine::with_line(85, 7, InningsPitched::from_outs(18))),
        ..GamePatch::default()
    };

    assert!(games.merge_current(patch));

    let current = games.current().unwrap();
    assert_eq!(current.away_team.score, Some(4));
    assert_eq!(current.pitcher.strikeouts, Some(7));
    assert_eq!(current.pitcher.innings_pitched.unwrap().to_string(), "6.0");
    // untouched
    assert_eq!(current.id, "game4");
    assert_eq!(current.home_team.score, Some(2));
    assert_eq!(current.date, "Jun 18, 2025");
}

#[test]
fn merge_status_transition_is_not_enforced() {
    let mut games = GamesState::seeded();
    games.merge_current(GamePatch {
        status: Some(GameStatus::Upcoming),
        ..GamePatch::default()
    });
    assert_eq!(games.current().unwrap().status, GameStatus::Upcoming);
}

#[test]
fn merge_without_current_is_noop() {
    let mut games = GamesState::new(vec![common::game("a", GameStatus::Upcoming)], Vec::new(), None);
    let before = games.clone();

    let applied = games.merge_current(GamePatch {
        time: Some("8:00 PM".to_string()),
        ..GamePatch::default()
    });

    assert!(!applied);
    assert!(games.current().is_none());
    assert_eq!(games, before);
}

#[test]
fn replace_all_overwrites_and_resets_flags() {
    let mut games = GamesState::seeded();
    games.mark_loading();
    games.mark_failed("network down");

    games.replace_all(
        vec![common::game("u1", GameStatus::Upcoming)],
        Vec::new(),
        None,
    );

    assert_eq!(games.upcoming().len(), 1);
    assert!(games.previous().is_empty());
    assert!(games.current().is_none());
    assert!(!games.is_loading());
    assert_eq!(games.error(), None);
}

#[test]
fn fetch_lifecycle_flags() {
    let mut games = GamesState::seeded();
    games.mark_loading();
    assert!(games.is_loading());
    games.mark_failed("timeout");
    assert!(!games.is_loading());
    assert_eq!(games.error(), Some("timeout"));
    // data untouched by a failed fetch
    assert_eq!(games, {
        let mut seeded = GamesState::seeded();
        seeded.mark_failed("timeout");
        seeded
    });
}
