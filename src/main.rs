use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use ace_tracker::config::Config;
use ace_tracker::logging::init_tracing;
use ace_tracker::store::notifications::NotificationsState;
use ace_tracker::store::settings::Settings;
use ace_tracker::store::stats::StatsState;
use ace_tracker::view::text;
use ace_tracker::{AppStore, StoreHandle};

#[derive(Parser, Debug)]
#[command(name = "ace-tracker", version, about = "Schedule, stats and news for one starting pitcher")]
struct Cli {
    /// Config file (default: ~/.config/ace-tracker/config.toml).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print the affected state as JSON.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Live game, strikeout board and latest headline.
    Dashboard,
    /// Current, upcoming and previous games.
    Games,
    /// One game by id.
    Game { id: String },
    /// News feed, or one article with related headlines.
    News { id: Option<String> },
    /// Season stat cards and strikeout counters.
    Stats,
    /// Notification categories and options.
    Notifications,
    /// Language and theme.
    Settings,
    /// Record strikeouts in the current game.
    Strikeout {
        #[arg(long, default_value_t = 1)]
        times: u32,
    },
    /// Toggle a notification category, or one of its options.
    Toggle {
        preference: String,
        option: Option<String>,
    },
    /// Set the display language (ja or en).
    Language { code: String },
    /// Set dark mode explicitly (stops following the system theme).
    DarkMode { mode: Switch },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Switch {
    On,
    Off,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("loading configuration")?;

    init_tracing(&config.logging.level);

    let settings = config.settings.to_settings();
    tracing::info!(language = %settings.language(), "Starting ace-tracker");

    let store = StoreHandle::new(AppStore::seeded().with_settings(settings));
    let output = run(&cli, &config, &store)?;
    print!("{}", output);
    Ok(())
}

fn run(cli: &Cli, config: &Config, store: &StoreHandle) -> Result<String> {
    let command = cli.command.as_ref().unwrap_or(&Command::Dashboard);
    let json = cli.json;

    let output = match command {
        Command::Dashboard => store.read(|s| {
            if json {
                to_json(&s.export())
            } else {
                Ok(text::render_dashboard(s))
            }
        })?,
        Command::Games => store.read(|s| {
            if json {
                to_json(&s.export().games)
            } else {
                Ok(text::render_games(&s.games))
            }
        })?,
        Command::Game { id } => store.read(|s| match s.games.find(id) {
            Some(game) if json => to_json(game),
            Some(game) => {
                let mut out = String::new();
                text::render_game(&mut out, game);
                Ok(out)
            }
            None => bail!("Game '{}' not found", id),
        })?,
        Command::News { id: None } => store.read(|s| {
            if json {
                to_json(s.news.list())
            } else {
                Ok(text::render_news(&s.news))
            }
        })?,
        Command::News { id: Some(id) } => store.read(|s| {
            if json {
                return match s.news.find(id) {
                    Some(item) => to_json(item),
                    None => bail!("Article '{}' not found", id),
                };
            }
            text::render_article(&s.news, id, config.display.related_news_limit)
                .with_context(|| format!("Article '{}' not found", id))
        })?,
        Command::Stats => store.read(|s| stats_output(s, json))?,
        Command::Notifications => store.read(|s| notifications_output(s, json))?,
        Command::Settings => store.read(|s| settings_output(s, json))?,
        Command::Strikeout { times } => {
            store.update(|stats: &mut StatsState| {
                for _ in 0..*times {
                    stats.increment_strikeout();
                }
            });
            store.read(|s| stats_output(s, json))?
        }
        Command::Toggle { preference, option } => {
            let found = store.update(|prefs: &mut NotificationsState| match option {
                Some(option) => prefs.toggle_option(preference, option),
                None => prefs.toggle_category(preference),
            });
            if !found {
                tracing::warn!(preference = %preference, option = ?option, "Nothing to toggle");
            }
            store.read(|s| notifications_output(s, json))?
        }
        Command::Language { code } => {
            store.update(|settings: &mut Settings| settings.set_language_code(code))?;
            store.read(|s| settings_output(s, json))?
        }
        Command::DarkMode { mode } => {
            let enabled = matches!(mode, Switch::On);
            store.update(|settings: &mut Settings| settings.set_dark_mode(enabled));
            store.read(|s| settings_output(s, json))?
        }
    };
    Ok(output)
}

fn stats_output(store: &AppStore, json: bool) -> Result<String> {
    if json {
        to_json(&store.export().stats)
    } else {
        Ok(text::render_stats(&store.stats))
    }
}

fn notifications_output(store: &AppStore, json: bool) -> Result<String> {
    if json {
        to_json(store.notifications.preferences())
    } else {
        Ok(text::render_notifications(&store.notifications))
    }
}

fn settings_output(store: &AppStore, json: bool) -> Result<String> {
    if json {
        to_json(&store.settings)
    } else {
        Ok(text::render_settings(&store.settings))
    }
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut out = serde_json::to_string_pretty(value)?;
    out.push('\n');
    Ok(out)
}
