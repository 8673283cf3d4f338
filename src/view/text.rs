//! Plain-text renderers used by the command-line front end.

use std::fmt::Write;

use crate::store::games::{Game, GamesState};
use crate::store::news::{NewsItem, NewsState};
use crate::store::notifications::NotificationsState;
use crate::store::settings::Settings;
use crate::store::stats::{StatsState, Trend};
use crate::store::AppStore;

use super::game_card::GameCardView;
use super::route::Route;
use super::strikeout_grid::StrikeoutGrid;

fn on_off(enabled: bool) -> &'static str {
    if enabled {
        "on"
    } else {
        "off"
    }
}

pub fn render_game(out: &mut String, game: &Game) {
    let card = GameCardView::from(game);
    let _ = writeln!(out, "[{}] {}  {} {}", card.badge, card.matchup(), card.date, card.time);
    let _ = write!(out, "    {}", card.role);
    if let Some(line) = &card.pitching_line {
        let _ = write!(out, " - {}", line);
    }
    let _ = writeln!(out, "  ({})", card.route);
}

pub fn render_games(games: &GamesState) -> String {
    let mut out = String::new();
    out.push_str("CURRENT GAME\n");
    match games.current() {
        Some(game) => render_game(&mut out, game),
        None => out.push_str("  (none)\n"),
    }
    out.push_str("\nUPCOMING\n");
    for game in games.upcoming() {
        render_game(&mut out, game);
    }
    out.push_str("\nPREVIOUS\n");
    for game in games.previous() {
        render_game(&mut out, game);
    }
    out
}

fn render_headline(out: &mut String, item: &NewsItem) {
    let kind = if item.is_video { " [video]" } else { "" };
    let _ = writeln!(
        out,
        "- {}{}\n    {} · {}  ({})",
        item.title,
        kind,
        item.source,
        item.timestamp,
        Route::News(item.id.clone())
    );
}

pub fn render_news(news: &NewsState) -> String {
    let mut out = String::from("NEWS\n");
    for item in news.list() {
        render_headline(&mut out, item);
    }
    out
}

/// Full article plus up to `related_limit` other headlines.
pub fn render_article(news: &NewsState, id: &str, related_limit: usize) -> Option<String> {
    let item = news.find(id)?;
    let mut out = String::new();
    let _ = writeln!(out, "{}\n{} · {}\n", item.title, item.source, item.timestamp);
    let _ = writeln!(out, "{}\n", item.summary);
    let _ = writeln!(out, "Source: {}", item.url);
    let mut related = news.related(id, related_limit).peekable();
    if related.peek().is_some() {
        out.push_str("\nRELATED NEWS\n");
        for other in related {
            render_headline(&mut out, other);
        }
    }
    Some(out)
}

pub fn render_stats(stats: &StatsState) -> String {
    let mut out = String::from("TODAY'S STRIKEOUTS\n");
    let _ = writeln!(out, "{}", StrikeoutGrid::new(stats.strikeout_count()).render());
    let _ = writeln!(
        out,
        "TOTAL: {}  SEASON: {}  CAREER: {}\n",
        stats.strikeout_count(),
        stats.season_strikeouts(),
        stats.career_strikeouts()
    );
    for card in stats.cards() {
        let arrow = match card.trend {
            Trend::Up => "▲",
            Trend::Down => "▼",
            Trend::Neutral => "–",
        };
        let _ = write!(out, "{:<6} {:>6} {}", card.title, card.value.to_string(), arrow);
        if let Some(delta) = &card.trend_value {
            let _ = write!(out, " {}", delta);
        }
        if let Some(avg) = &card.average {
            let _ = write!(out, "  lg avg {}", avg);
        }
        if let Some(rank) = card.rank {
            let _ = write!(out, "  #{}", rank);
        }
        out.push('\n');
    }
    out
}

pub fn render_notifications(notifications: &NotificationsState) -> String {
    let mut out = String::from("NOTIFICATIONS\n");
    for pref in notifications.preferences() {
        let _ = writeln!(
            out,
            "[{}] {} ({})\n    {}",
            on_off(pref.is_enabled),
            pref.title,
            pref.id,
            pref.description
        );
        for option in &pref.options {
            let _ = writeln!(out, "    [{}] {} ({})", on_off(option.is_enabled), option.label, option.id);
        }
    }
    out
}

pub fn render_settings(settings: &Settings) -> String {
    format!(
        "SETTINGS\nlanguage: {}\ndark mode: {}\nuse system theme: {}\n",
        settings.language(),
        on_off(settings.is_dark_mode()),
        on_off(settings.use_system_theme())
    )
}

/// Home screen: live game, strikeout board and the top headline.
pub fn render_dashboard(store: &AppStore) -> String {
    let mut out = String::new();
    match store.games.current() {
        Some(game) => render_game(&mut out, game),
        None => out.push_str("No game in progress\n"),
    }
    out.push('\n');
    out.push_str(&render_stats(&store.stats));
    if let Some(top) = store.news.list().first() {
        out.push_str("\nLATEST\n");
        render_headline(&mut out, top);
    }
    out
}
