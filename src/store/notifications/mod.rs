mod seed;
mod state;

pub use state::{NotificationOption, NotificationPreference, NotificationsState};
