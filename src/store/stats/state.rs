use std::fmt;

use serde::{Deserialize, Serialize};

use crate::store::AppStore;
use crate::store::slice::{FetchStatus, Fetchable, SliceState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    #[default]
    Neutral,
}

/// A card value: preformatted text (`"3.12"`) or a raw number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatValue {
    Number(f64),
    Text(String),
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatValue::Number(n) => write!(f, "{}", n),
            StatValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for StatValue {
    fn from(s: &str) -> Self {
        StatValue::Text(s.to_string())
    }
}

impl From<f64> for StatValue {
    fn from(n: f64) -> Self {
        StatValue::Number(n)
    }
}

/// One season statistic. Cards have no id and are addressed by position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatCard {
    pub title: String,
    pub value: StatValue,
    #[serde(default)]
    pub trend: Trend,
    /// Display delta, e.g. `0.18`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trend_value: Option<String>,
    /// League average, display string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank: Option<u32>,
}

/// Strikeout totals at three scopes.
///
/// A strikeout always counts toward every scope; only the explicit setters
/// let the counters diverge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StrikeoutCounters {
    pub current_game: u32,
    pub season: u32,
    pub career: u32,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct StatsState {
    cards: Vec<StatCard>,
    strikeouts: StrikeoutCounters,
    fetch: FetchStatus,
}

impl SliceState for StatsState {
    fn of(store: &AppStore) -> &Self {
        &store.stats
    }

    fn of_mut(store: &mut AppStore) -> &mut Self {
        &mut store.stats
    }
}

impl Fetchable for StatsState {
    fn fetch_status(&self) -> &FetchStatus {
        &self.fetch
    }

    fn fetch_status_mut(&mut self) -> &mut FetchStatus {
        &mut self.fetch
    }
}

impl StatsState {
    pub fn new(cards: Vec<StatCard>, strikeouts: StrikeoutCounters) -> Self {
        Self {
            cards,
            strikeouts,
            fetch: FetchStatus::default(),
        }
    }

    pub fn cards(&self) -> &[StatCard] {
        &self.cards
    }

    pub fn strikeouts(&self) -> StrikeoutCounters {
        self.strikeouts
    }

    /// Current-game strikeouts.
    pub fn strikeout_count(&self) -> u32 {
        self.strikeouts.current_game
    }

    pub fn season_strikeouts(&self) -> u32 {
        self.strikeouts.season
    }

    pub fn career_strikeouts(&self) -> u32 {
        self.strikeouts.career
    }

    /// Record one strikeout in the game, season and career totals together.
    pub fn increment_strikeout(&mut self) {
        let k = &mut self.strikeouts;
        k.current_game = k.current_game.saturating_add(1);
        k.season = k.season.saturating_add(1);
        k.career = k.career.saturating_add(1);
        tracing::debug!(
            current_game = k.current_game,
            season = k.season,
            career = k.career,
            "Strikeout recorded"
        );
    }

    pub fn set_current_game_count(&mut self, count: u32) {
        tracing::debug!(count, "Current game strikeouts set");
        self.strikeouts.current_game = count;
    }

    pub fn set_season_count(&mut self, count: u32) {
        tracing::debug!(count, "Season strikeouts set");
        self.strikeouts.season = count;
    }

    pub fn replace_cards(&mut self, cards: Vec<StatCard>) {
        tracing::debug!(count = cards.len(), "Replacing stat cards");
        self.cards = cards;
        self.fetch.finish();
    }
}
