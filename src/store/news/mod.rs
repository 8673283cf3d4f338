mod seed;
mod state;

pub use state::{NewsItem, NewsState};
