use super::state::{StatCard, StatsState, StrikeoutCounters, Trend};

fn card(title: &str, value: &str, trend: Trend, trend_value: Option<&str>, average: &str, rank: u32) -> StatCard {
    StatCard {
        title: title.to_string(),
        value: value.into(),
        trend,
        trend_value: trend_value.map(str::to_string),
        average: Some(average.to_string()),
        rank: Some(rank),
    }
}

impl StatsState {
    pub fn seeded() -> Self {
        let cards = vec![
            card("ERA", "3.12", Trend::Down, Some("0.18"), "3.86", 8),
            card("K/9", "10.2", Trend::Up, Some("0.3"), "8.7", 5),
            card("WHIP", "1.08", Trend::Down, Some("0.04"), "1.23", 12),
            card("IP", "68.1", Trend::Neutral, None, "65.2", 15),
            card("BB/9", "2.1", Trend::Up, Some("0.2"), "3.2", 7),
            card("HR/9", "0.7", Trend::Down, Some("0.1"), "1.1", 3),
        ];
        Self::new(cards, StrikeoutCounters::default())
    }
}
