//! Shared test fixtures.

#![allow(dead_code, unused_imports)]

use ace_tracker::store::games::{Game, GameStatus, InningsPitched, PitcherLine, Team};
use ace_tracker::store::news::NewsItem;

pub fn news_item(id: &str) -> NewsItem {
    NewsItem {
        id: id.to_string(),
        title: format!("Headline {}", id),
        source: "Test Wire".to_string(),
        timestamp: "just now".to_string(),
        summary: "Summary".to_string(),
        image_url: "https://example.com/image.jpg".to_string(),
        is_video: false,
        url: format!("https://example.com/{}", id),
    }
}

pub fn game(id: &str, status: GameStatus) -> Game {
    let started = status != GameStatus::Upcoming;
    let home = Team::new("Home", "https://example.com/home.gif");
    let away = Team::new("Away", "https://example.com/away.gif");
    Game {
        id: id.to_string(),
        status,
        home_team: if started { home.with_score(1) } else { home },
        away_team: if started { away.with_score(0) } else { away },
        date: "Jul 1, 2025".to_string(),
        time: "1:05 PM".to_string(),
        pitcher: if started {
            PitcherLine::with_line(40, 3, InningsPitched::from_outs(9))
        } else {
            PitcherLine::starting()
        },
    }
}
