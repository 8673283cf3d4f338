mod state;

pub use state::{Language, Settings};
