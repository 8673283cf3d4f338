use serde::{Deserialize, Serialize};

use crate::store::AppStore;
use crate::store::slice::{FetchStatus, Fetchable, SliceState};

/// A sub-option; its id is unique only within the parent preference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationOption {
    pub id: String,
    pub label: String,
    pub is_enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationPreference {
    pub id: String,
    pub title: String,
    pub description: String,
    pub is_enabled: bool,
    pub options: Vec<NotificationOption>,
}

impl NotificationPreference {
    pub fn option(&self, id: &str) -> Option<&NotificationOption> {
        self.options.iter().find(|option| option.id == id)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct NotificationsState {
    preferences: Vec<NotificationPreference>,
    fetch: FetchStatus,
}

impl SliceState for NotificationsState {
    fn of(store: &AppStore) -> &Self {
        &store.notifications
    }

    fn of_mut(store: &mut AppStore) -> &mut Self {
        &mut store.notifications
    }
}

impl Fetchable for NotificationsState {
    fn fetch_status(&self) -> &FetchStatus {
        &self.fetch
    }

    fn fetch_status_mut(&mut self) -> &mut FetchStatus {
        &mut self.fetch
    }
}

impl NotificationsState {
    pub fn new(preferences: Vec<NotificationPreference>) -> Self {
        Self {
            preferences,
            fetch: FetchStatus::default(),
        }
    }

    pub fn preferences(&self) -> &[NotificationPreference] {
        &self.preferences
    }

    pub fn find(&self, id: &str) -> Option<&NotificationPreference> {
        self.preferences.iter().find(|pref| pref.id == id)
    }

    fn find_mut(&mut self, id: &str) -> Option<&mut NotificationPreference> {
        self.preferences.iter_mut().find(|pref| pref.id == id)
    }

    /// Flip a category's flag. Its options keep their own values.
    ///
    /// Returns `false` if the category does not exist.
    pub fn toggle_category(&mut self, preference_id: &str) -> bool {
        let Some(pref) = self.find_mut(preference_id) else {
            tracing::debug!(preference = preference_id, "Unknown notification category");
            return false;
        };
        pref.is_enabled = !pref.is_enabled;
        tracing::debug!(preference = preference_id, enabled = pref.is_enabled, "Toggled category");
        true
    }

    /// Flip one option inside a category.
    ///
    /// Returns `false` if either id does not resolve.
    pub fn toggle_option(&mut self, preference_id: &str, option_id: &str) -> bool {
        let option = self
            .find_mut(preference_id)
            .and_then(|pref| pref.options.iter_mut().find(|option| option.id == option_id));
        let Some(option) = option else {
            tracing::debug!(
                preference = preference_id,
                option = option_id,
                "Unknown notification option"
            );
            return false;
        };
        option.is_enabled = !option.is_enabled;
        tracing::debug!(
            preference = preference_id,
            option = option_id,
            enabled = option.is_enabled,
            "Toggled option"
        );
        true
    }

    pub fn replace_all(&mut self, preferences: Vec<NotificationPreference>) {
        tracing::debug!(count = preferences.len(), "Replacing notification preferences");
        self.preferences = preferences;
        self.fetch.finish();
    }
}
