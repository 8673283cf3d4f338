use super::state::{Game, GameStatus, GamesState, InningsPitched, PitcherLine, Team};

const DODGERS_LOGO: &str = "https://content.sportslogos.net/logos/54/63/thumbs/efvfv5b2f1cfw4l9jq4n6xmhc.gif";
const GIANTS_LOGO: &str = "https://content.sportslogos.net/logos/54/74/thumbs/cpqj6up5bvgpoedg5fwsk20ve.gif";
const PADRES_LOGO: &str = "https://content.sportslogos.net/logos/54/73/thumbs/cavsg7e1h1j5h1keg74gf7grb.gif";
const ROCKIES_LOGO: &str = "https://content.sportslogos.net/logos/54/58/thumbs/5868712efgpgh56434fhfg3545.gif";
const DIAMONDBACKS_LOGO: &str = "https://content.sportslogos.net/logos/54/50/thumbs/aaff6afkcpegieshm9omdg8c5.gif";

fn game(id: &str, status: GameStatus, home_team: Team, away_team: Team, date: &str, pitcher: PitcherLine) -> Game {
    Game {
        id: id.to_string(),
        status,
        home_team,
        away_team,
        date: date.to_string(),
        time: "7:10 PM".to_string(),
        pitcher,
    }
}

impl GamesState {
    /// Demo schedule: two upcoming, one final, one live.
    pub fn seeded() -> Self {
        let upcoming = vec![
            game(
                "game1",
                GameStatus::Upcoming,
                Team::new("Dodgers", DODGERS_LOGO),
                Team::new("Giants", GIANTS_LOGO),
                "Jun 20, 2025",
                PitcherLine::starting(),
            ),
            game(
                "game2",
                GameStatus::Upcoming,
                Team::new("Dodgers", DODGERS_LOGO),
                Team::new("Padres", PADRES_LOGO),
                "Jun 25, 2025",
                PitcherLine::not_starting(),
            ),
        ];
        let previous = vec![game(
            "game3",
            GameStatus::Completed,
            Team::new("Dodgers", DODGERS_LOGO).with_score(5),
            Team::new("Rockies", ROCKIES_LOGO).with_score(2),
            "Jun 15, 2025",
            PitcherLine::with_line(98, 6, InningsPitched::from_outs(20)),
        )];
        let current = game(
            "game4",
            GameStatus::Live,
            Team::new("Diamondbacks", DIAMONDBACKS_LOGO).with_score(2),
            Team::new("Dodgers", DODGERS_LOGO).with_score(3),
            "Jun 18, 2025",
            PitcherLine::with_line(78, 6, InningsPitched::from_outs(16)),
        );
        Self::new(upcoming, previous, Some(current))
    }
}
