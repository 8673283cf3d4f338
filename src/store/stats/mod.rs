mod seed;
mod state;

pub use state::{StatCard, StatValue, StatsState, StrikeoutCounters, Trend};
