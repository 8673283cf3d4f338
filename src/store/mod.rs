//! Client-side application state.
//!
//! The state is split into five independent slices. Each slice owns its
//! records and exposes selectors (`&self`) and mutations (`&mut self`):
//!
//! ```text
//! AppStore
//!  ├── games          upcoming / previous / current game
//!  ├── news           article feed
//!  ├── stats          stat cards + strikeout counters
//!  ├── notifications  categories with nested options
//!  └── settings       language + theme
//! ```
//!
//! There is no global instance. Build an [`AppStore`] (or a shared
//! [`StoreHandle`]) and pass it to whatever needs it.

pub mod games;
mod handle;
pub mod news;
pub mod notifications;
pub mod settings;
pub mod slice;
pub mod stats;

pub use handle::StoreHandle;

use serde::Serialize;

use games::GamesState;
use news::NewsState;
use notifications::NotificationsState;
use settings::Settings;
use slice::SliceState;
use stats::StatsState;

/// Aggregate of all store slices.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppStore {
    pub games: GamesState,
    pub news: NewsState,
    pub stats: StatsState,
    pub notifications: NotificationsState,
    pub settings: Settings,
}

impl AppStore {
    /// Store populated with the bundled demo data.
    pub fn seeded() -> Self {
        Self {
            games: GamesState::seeded(),
            news: NewsState::seeded(),
            stats: StatsState::seeded(),
            notifications: NotificationsState::seeded(),
            settings: Settings::default(),
        }
    }

    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    /// One slice, chosen by type.
    pub fn slice<S: SliceState>(&self) -> &S {
        S::of(self)
    }

    pub fn slice_mut<S: SliceState>(&mut self) -> &mut S {
        S::of_mut(self)
    }

    /// Serializable copy of the slice records, without fetch flags.
    pub fn export(&self) -> StoreExport<'_> {
        StoreExport {
            games: GamesExport {
                upcoming: self.games.upcoming(),
                previous: self.games.previous(),
                current: self.games.current(),
            },
            news: self.news.list(),
            stats: StatsExport {
                strikeouts: self.stats.strikeouts(),
                cards: self.stats.cards(),
            },
            notifications: self.notifications.preferences(),
            settings: &self.settings,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StoreExport<'a> {
    pub games: GamesExport<'a>,
    pub news: &'a [news::NewsItem],
    pub stats: StatsExport<'a>,
    pub notifications: &'a [notifications::NotificationPreference],
    pub settings: &'a Settings,
}

#[derive(Debug, Serialize)]
pub struct GamesExport<'a> {
    pub upcoming: &'a [games::Game],
    pub previous: &'a [games::Game],
    pub current: Option<&'a games::Game>,
}

#[derive(Debug, Serialize)]
pub struct StatsExport<'a> {
    pub strikeouts: stats::StrikeoutCounters,
    pub cards: &'a [stats::StatCard],
}
