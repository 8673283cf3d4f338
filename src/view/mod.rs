//! Read-only projections of store state for display.
//!
//! Nothing here mutates the store; views are rebuilt from a fresh read
//! after every dispatch.

mod game_card;
mod route;
mod strikeout_grid;
pub mod text;

pub use game_card::{GameCardView, TeamLine};
pub use route::Route;
pub use strikeout_grid::{StrikeoutGrid, GRID_COLS, GRID_ROWS};
