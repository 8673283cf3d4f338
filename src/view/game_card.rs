use crate::store::games::{Game, GameStatus, PitcherLine, Team};

use super::route::Route;

impl GameStatus {
    /// Badge text shown on a game card.
    pub fn label(self) -> &'static str {
        match self {
            GameStatus::Upcoming => "UPCOMING",
            GameStatus::Live => "LIVE NOW",
            GameStatus::Completed => "FINAL",
        }
    }
}

/// One side of the matchup as a card shows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamLine {
    pub name: String,
    pub logo_url: String,
    /// Hidden before first pitch even if the record carries one.
    pub score: Option<u32>,
}

/// Display projection of a [`Game`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameCardView {
    pub badge: &'static str,
    pub away: TeamLine,
    pub home: TeamLine,
    pub date: String,
    pub time: String,
    pub role: &'static str,
    /// `"5.1 IP, 6 K, 78 P"`; only for a started game the pitcher started.
    pub pitching_line: Option<String>,
    pub route: Route,
}

impl From<&Game> for GameCardView {
    fn from(game: &Game) -> Self {
        let started = game.status != GameStatus::Upcoming;
        let team = |team: &Team| TeamLine {
            name: team.name.clone(),
            logo_url: team.logo_url.clone(),
            score: if started { team.score } else { None },
        };
        let pitcher = &game.pitcher;
        Self {
            badge: game.status.label(),
            away: team(&game.away_team),
            home: team(&game.home_team),
            date: game.date.clone(),
            time: game.time.clone(),
            role: if pitcher.is_starting {
                "STARTING PITCHER"
            } else {
                "NOT STARTING"
            },
            pitching_line: if started && pitcher.is_starting {
                pitching_line(pitcher)
            } else {
                None
            },
            route: Route::Game(game.id.clone()),
        }
    }
}

fn pitching_line(line: &PitcherLine) -> Option<String> {
    let mut parts = Vec::new();
    if let Some(ip) = line.innings_pitched {
        parts.push(format!("{} IP", ip));
    }
    if let Some(k) = line.strikeouts {
        parts.push(format!("{} K", k));
    }
    if let Some(pitches) = line.pitch_count {
        parts.push(format!("{} P", pitches));
    }
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(", "))
    }
}

impl GameCardView {
    /// `Dodgers 3 @ Diamondbacks 2`, or without scores before the game.
    pub fn matchup(&self) -> String {
        let side = |team: &TeamLine| match team.score {
            Some(score) => format!("{} {}", team.name, score),
            None => team.name.clone(),
        };
        format!("{} @ {}", side(&self.away), side(&self.home))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::games::GamesState;

    #[test]
    fn labels_per_status() {
        assert_eq!(GameStatus::Upcoming.label(), "UPCOMING");
        assert_eq!(GameStatus::Live.label(), "LIVE NOW");
        assert_eq!(GameStatus::Completed.label(), "FINAL");
    }

    #[test]
    fn live_game_shows_scores_and_line() {
        let games = GamesState::seeded();
        let view = GameCardView::from(games.current().unwrap());
        assert_eq!(view.badge, "LIVE NOW");
        assert_eq!(view.matchup(), "Dodgers 3 @ Diamondbacks 2");
        assert_eq!(view.pitching_line.as_deref(), Some("5.1 IP, 6 K, 78 P"));
        assert_eq!(view.route.to_string(), "/game/game4");
    }

    #[test]
    fn upcoming_game_hides_scores() {
        let games = GamesState::seeded();
        let mut game = games.upcoming()[0].clone();
        game.home_team.score = Some(9);
        let view = GameCardView::from(&game);
        assert_eq!(view.home.score, None);
        assert_eq!(view.matchup(), "Giants @ Dodgers");
        assert_eq!(view.role, "STARTING PITCHER");
        assert_eq!(view.pitching_line, None);
    }

    #[test]
    fn not_starting_has_no_line() {
        let games = GamesState::seeded();
        let mut game = games.previous()[0].clone();
        game.pitcher.is_starting = false;
        let view = GameCardView::from(&game);
        assert_eq!(view.role, "NOT STARTING");
        assert_eq!(view.pitching_line, None);
    }
}
