use super::state::{NewsItem, NewsState};

impl NewsState {
    pub fn seeded() -> Self {
        Self::new(vec![
            NewsItem {
                id: "news1".to_string(),
                title: "Yamamoto Dominates with 10 Strikeouts Against Giants".to_string(),
                source: "MLB.com".to_string(),
                timestamp: "2 hours ago".to_string(),
                summary: "Los Angeles Dodgers pitcher Yoshinobu Yamamoto struck out 10 batters over 7 innings \
                          in a dominant performance against the San Francisco Giants on Wednesday night."
                    .to_string(),
                image_url: "https://images.pexels.com/photos/4937223/pexels-photo-4937223.jpeg?auto=compress&cs=tinysrgb&dpr=2&h=750&w=1260".to_string(),
                is_video: false,
                url: "https://mlb.com/news/yamamoto-giants".to_string(),
            },
            NewsItem {
                id: "news2".to_string(),
                title: "Yamamoto's Splitter: The Pitch That's Baffling MLB Hitters".to_string(),
                source: "ESPN".to_string(),
                timestamp: "5 hours ago".to_string(),
                summary: "A deep analysis of Yoshinobu Yamamoto's devastating splitter and why it's becoming \
                          one of the most effective pitches in baseball."
                    .to_string(),
                image_url: "https://images.pexels.com/photos/13770299/pexels-photo-13770299.jpeg?auto=compress&cs=tinysrgb&dpr=2&h=750&w=1260".to_string(),
                is_video: true,
                url: "https://espn.com/mlb/yamamoto-splitter".to_string(),
            },
            NewsItem {
                id: "news3".to_string(),
                title: "Dodgers' Yamamoto Named NL Pitcher of the Month".to_string(),
                source: "The Athletic".to_string(),
                timestamp: "1 day ago".to_string(),
                summary: "After a stellar May where he went 5-0 with a 1.21 ERA, Dodgers' star Yoshinobu \
                          Yamamoto has been named the National League Pitcher of the Month."
                    .to_string(),
                image_url: "https://images.pexels.com/photos/2570139/pexels-photo-2570139.jpeg?auto=compress&cs=tinysrgb&dpr=2&h=750&w=1260".to_string(),
                is_video: false,
                url: "https://theathletic.com/mlb/dodgers/yamamoto-award".to_string(),
            },
        ])
    }
}
