//! Games slice: schedule, results and the live game.
//!
//! - `state.rs` - Game records, innings notation, selectors and mutations
//! - `seed.rs` - Demo schedule

mod seed;
mod state;

pub use state::{Game, GamePatch, GameStatus, GamesState, InningsPitched, PitcherLine, Team};
