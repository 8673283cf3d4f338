use std::fmt;
use std::num::{IntErrorKind, ParseIntError};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::store::AppStore;
use crate::store::slice::{FetchStatus, Fetchable, SliceState};

/// Lifecycle of a game. Nothing enforces `Upcoming -> Live -> Completed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Upcoming,
    Live,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    pub logo_url: String,
    /// Only present once the game has started.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<u32>,
}

impl Team {
    pub fn new(name: impl Into<String>, logo_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            logo_url: logo_url.into(),
            score: None,
        }
    }

    pub fn with_score(mut self, score: u32) -> Self {
        self.score = Some(score);
        self
    }
}

/// Innings pitched, stored as recorded outs.
///
/// Displays in box-score notation where the digit after the dot counts outs
/// in the unfinished inning: 16 outs is `5.1`, 20 outs is `6.2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct InningsPitched {
    outs: u32,
}

impl InningsPitched {
    pub const fn from_outs(outs: u32) -> Self {
        Self { outs }
    }

    pub const fn outs(self) -> u32 {
        self.outs
    }

    pub const fn full_innings(self) -> u32 {
        self.outs / 3
    }

    pub const fn partial_outs(self) -> u32 {
        self.outs % 3
    }

    /// Outs for `whole` full innings plus `partial` outs, if they fit.
    fn from_innings(whole: u64, partial: u64) -> Option<Self> {
        let outs = whole.checked_mul(3)?.checked_add(partial)?;
        u32::try_from(outs).ok().map(Self::from_outs)
    }
}

impl fmt::Display for InningsPitched {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.full_innings(), self.partial_outs())
    }
}

impl FromStr for InningsPitched {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || StoreError::InvalidInnings {
            value: s.to_string(),
        };
        let too_large = || StoreError::InningsOutOfRange {
            value: s.to_string(),
        };
        let (whole, frac) = match s.trim().split_once('.') {
            Some((whole, frac)) => (whole, frac),
            None => (s.trim(), "0"),
        };
        let partial = match frac {
            "0" => 0,
            "1" => 1,
            "2" => 2,
            _ => return Err(invalid()),
        };
        let whole: u64 = whole.parse().map_err(|e: ParseIntError| match e.kind() {
            IntErrorKind::PosOverflow => too_large(),
            _ => invalid(),
        })?;
        Self::from_innings(whole, partial).ok_or_else(too_large)
    }
}

impl TryFrom<f64> for InningsPitched {
    type Error = StoreError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        let invalid = || StoreError::InvalidInnings {
            value: value.to_string(),
        };
        let too_large = || StoreError::InningsOutOfRange {
            value: value.to_string(),
        };
        if !value.is_finite() || value < 0.0 {
            return Err(invalid());
        }
        // Split before scaling: `value * 10.0` loses the digit near the top
        // of the range.
        let whole = value.trunc();
        let digit = (value - whole) * 10.0;
        let partial = digit.round();
        if (digit - partial).abs() > 1e-4 || partial > 2.0 {
            return Err(invalid());
        }
        if whole > f64::from(u32::MAX) {
            return Err(too_large());
        }
        Self::from_innings(whole as u64, partial as u64).ok_or_else(too_large)
    }
}

impl From<InningsPitched> for f64 {
    fn from(ip: InningsPitched) -> Self {
        f64::from(ip.full_innings()) + f64::from(ip.partial_outs()) / 10.0
    }
}

/// The tracked pitcher's line for one game.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PitcherLine {
    pub is_starting: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pitch_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strikeouts: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub innings_pitched: Option<InningsPitched>,
}

impl PitcherLine {
    pub fn starting() -> Self {
        Self {
            is_starting: true,
            ..Self::default()
        }
    }

    pub fn not_starting() -> Self {
        Self::default()
    }

    pub fn with_line(pitch_count: u32, strikeouts: u32, innings_pitched: InningsPitched) -> Self {
        Self {
            is_starting: true,
            pitch_count: Some(pitch_count),
            strikeouts: Some(strikeouts),
            innings_pitched: Some(innings_pitched),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub id: String,
    pub status: GameStatus,
    pub home_team: Team,
    pub away_team: Team,
    /// Display string, e.g. `Jun 20, 2025`.
    pub date: String,
    /// Display string, e.g. `7:10 PM`.
    pub time: String,
    pub pitcher: PitcherLine,
}

/// Field-level partial update for a [`Game`].
///
/// Merging is shallow: a `Some` field replaces the whole field, nested
/// records included.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GamePatch {
    pub id: Option<String>,
    pub status: Option<GameStatus>,
    pub home_team: Option<Team>,
    pub away_team: Option<Team>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub pitcher: Option<PitcherLine>,
}

impl GamePatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    fn apply_to(self, game: &mut Game) {
        if let Some(id) = self.id {
            game.id = id;
        }
        if let Some(status) = self.status {
            game.status = status;
        }
        if let Some(home_team) = self.home_team {
            game.home_team = home_team;
        }
        if let Some(away_team) = self.away_team {
            game.away_team = away_team;
        }
        if let Some(date) = self.date {
            game.date = date;
        }
        if let Some(time) = self.time {
            game.time = time;
        }
        if let Some(pitcher) = self.pitcher {
            game.pitcher = pitcher;
        }
    }
}

/// Upcoming and previous schedules plus the at-most-one tracked current game.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GamesState {
    upcoming: Vec<Game>,
    previous: Vec<Game>,
    current: Option<Game>,
    fetch: FetchStatus,
}

impl SliceState for GamesState {
    fn of(store: &AppStore) -> &Self {
        &store.games
    }

    fn of_mut(store: &mut AppStore) -> &mut Self {
        &mut store.games
    }
}

impl Fetchable for GamesState {
    fn fetch_status(&self) -> &FetchStatus {
        &self.fetch
    }

    fn fetch_status_mut(&mut self) -> &mut FetchStatus {
        &mut self.fetch
    }
}

impl GamesState {
    pub fn new(upcoming: Vec<Game>, previous: Vec<Game>, current: Option<Game>) -> Self {
        Self {
            upcoming,
            previous,
            current,
            fetch: FetchStatus::default(),
        }
    }

    pub fn upcoming(&self) -> &[Game] {
        &self.upcoming
    }

    pub fn previous(&self) -> &[Game] {
        &self.previous
    }

    pub fn current(&self) -> Option<&Game> {
        self.current.as_ref()
    }

    /// Find a game by id, checking the current game first.
    pub fn find(&self, id: &str) -> Option<&Game> {
        self.current
            .iter()
            .chain(self.upcoming.iter())
            .chain(self.previous.iter())
            .find(|game| game.id == id)
    }

    /// Overwrite all three collections after a refresh.
    pub fn replace_all(&mut self, upcoming: Vec<Game>, previous: Vec<Game>, current: Option<Game>) {
        tracing::debug!(
            upcoming = upcoming.len(),
            previous = previous.len(),
            has_current = current.is_some(),
            "Replacing games"
        );
        self.upcoming = upcoming;
        self.previous = previous;
        self.current = current;
        self.fetch.finish();
    }

    /// Shallow-merge `patch` into the current game.
    ///
    /// Returns `false` and leaves the state untouched when no current game is
    /// tracked.
    pub fn merge_current(&mut self, patch: GamePatch) -> bool {
        match self.current.as_mut() {
            Some(game) => {
                patch.apply_to(game);
                tracing::debug!(game = %game.id, "Merged current game update");
                true
            }
            None => {
                tracing::debug!("No current game; update ignored");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn innings_display_uses_outs_digit() {
        assert_eq!(InningsPitched::from_outs(16).to_string(), "5.1");
        assert_eq!(InningsPitched::from_outs(20).to_string(), "6.2");
        assert_eq!(InningsPitched::from_outs(21).to_string(), "7.0");
    }

    #[test]
    fn innings_parse_accepts_thirds_only() {
        assert_eq!("5.1".parse::<InningsPitched>().unwrap().outs(), 16);
        assert_eq!("7".parse::<InningsPitched>().unwrap().outs(), 21);
        assert!(matches!(
            "5.3".parse::<InningsPitched>(),
            Err(StoreError::InvalidInnings { .. })
        ));
        assert!("5.15".parse::<InningsPitched>().is_err());
        assert!("abc".parse::<InningsPitched>().is_err());
    }

    #[test]
    fn innings_from_float() {
        assert_eq!(InningsPitched::try_from(6.2).unwrap().outs(), 20);
        assert_eq!(InningsPitched::try_from(0.0).unwrap().outs(), 0);
        assert!(InningsPitched::try_from(5.5).is_err());
        assert!(InningsPitched::try_from(-1.0).is_err());
        assert!(InningsPitched::try_from(f64::NAN).is_err());
        assert_eq!(f64::from(InningsPitched::from_outs(16)), 5.1);
    }

    #[test]
    fn innings_serde_as_number() {
        let line = PitcherLine::with_line(78, 6, InningsPitched::from_outs(16));
        let json = serde_json::to_value(&line).unwrap();
        assert_eq!(json["innings_pitched"], serde_json::json!(5.1));

        let parsed: PitcherLine = serde_json::from_str(r#"{"is_starting":true,"innings_pitched":6.2}"#).unwrap();
        assert_eq!(parsed.innings_pitched, Some(InningsPitched::from_outs(20)));

        let bad = serde_json::from_str::<PitcherLine>(r#"{"is_starting":true,"innings_pitched":6.4}"#);
        assert!(bad.is_err());
    }

    #[test]
    fn innings_round_trip_at_counter_limit() {
        for outs in [u32::MAX, u32::MAX - 1] {
            let ip = InningsPitched::from_outs(outs);
            let json = serde_json::to_string(&ip).unwrap();
            assert_eq!(serde_json::from_str::<InningsPitched>(&json).unwrap(), ip);
            assert_eq!(ip.to_string().parse::<InningsPitched>().unwrap(), ip);
        }
        assert_eq!(InningsPitched::try_from(1_431_655_764.2).unwrap().outs(), u32::MAX - 1);
    }

    #[test]
    fn innings_past_counter_limit_is_out_of_range() {
        assert!(matches!(
            "1431655765.1".parse::<InningsPitched>(),
            Err(StoreError::InningsOutOfRange { .. })
        ));
        assert!(matches!(
            "99999999999999999999999".parse::<InningsPitched>(),
            Err(StoreError::InningsOutOfRange { .. })
        ));
        assert!(matches!(
            InningsPitched::try_from(1e12),
            Err(StoreError::InningsOutOfRange { .. })
        ));
        assert!(matches!(
            InningsPitched::try_from(1e12 + 0.5),
            Err(StoreError::InvalidInnings { .. })
        ));
    }

    #[test]
    fn empty_patch_is_empty() {
        assert!(GamePatch::default().is_empty());
        let patch = GamePatch {
            time: Some("7:45 PM".to_string()),
            ..GamePatch::default()
        };
        assert!(!patch.is_empty());
    }

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&GameStatus::Live).unwrap(), "\"live\"");
    }
}
