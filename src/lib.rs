//! State layer for a pitcher-tracking companion app: game schedule, live
//! pitching line, season stats, news feed, notification preferences and
//! display settings, all backed by bundled demo data.

pub mod config;
pub mod error;
pub mod logging;
pub mod store;
pub mod view;

pub use error::StoreError;
pub use store::{AppStore, StoreHandle};
