//! Shared building blocks for store slices.

use super::AppStore;

/// State of one store slice, locatable inside [`AppStore`].
///
/// Slices should be:
/// - Cloneable (snapshots are handed to readers)
/// - Comparable (PartialEq for detecting changes)
/// - Empty by default (`Default` is the unseeded slice)
pub trait SliceState: Clone + PartialEq + Default + Send + 'static {
    fn of(store: &AppStore) -> &Self;
    fn of_mut(store: &mut AppStore) -> &mut Self;
}

/// Loading/error flags for a slice that may be refreshed from a remote source.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FetchStatus {
    pub loading: bool,
    pub error: Option<String>,
}

impl FetchStatus {
    /// Reset after a successful bulk replace.
    pub(crate) fn finish(&mut self) {
        self.loading = false;
        self.error = None;
    }
}

/// Fetch lifecycle shared by every slice backed by (future) remote data.
///
/// No fetch is wired up yet; these transitions only record intent.
pub trait Fetchable {
    fn fetch_status(&self) -> &FetchStatus;
    fn fetch_status_mut(&mut self) -> &mut FetchStatus;

    fn mark_loading(&mut self) {
        let status = self.fetch_status_mut();
        status.loading = true;
        status.error = None;
    }

    fn mark_failed(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!(error = %message, "Fetch failed");
        let status = self.fetch_status_mut();
        status.loading = false;
        status.error = Some(message);
    }

    fn is_loading(&self) -> bool {
        self.fetch_status().loading
    }

    fn error(&self) -> Option<&str> {
        self.fetch_status().error.as_deref()
    }
}
