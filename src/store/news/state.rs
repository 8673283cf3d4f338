use serde::{Deserialize, Serialize};

use crate::store::AppStore;
use crate::store::slice::{FetchStatus, Fetchable, SliceState};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    pub id: String,
    pub title: String,
    pub source: String,
    /// Relative display string such as `2 hours ago`; not machine-parseable.
    pub timestamp: String,
    pub summary: String,
    pub image_url: String,
    pub is_video: bool,
    pub url: String,
}

/// Articles in display order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewsState {
    items: Vec<NewsItem>,
    fetch: FetchStatus,
}

impl SliceState for NewsState {
    fn of(store: &AppStore) -> &Self {
        &store.news
    }

    fn of_mut(store: &mut AppStore) -> &mut Self {
        &mut store.news
    }
}

impl Fetchable for NewsState {
    fn fetch_status(&self) -> &FetchStatus {
        &self.fetch
    }

    fn fetch_status_mut(&mut self) -> &mut FetchStatus {
        &mut self.fetch
    }
}

impl NewsState {
    pub fn new(items: Vec<NewsItem>) -> Self {
        Self {
            items,
            fetch: FetchStatus::default(),
        }
    }

    pub fn list(&self) -> &[NewsItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Linear scan; the list holds tens of items at most.
    pub fn find(&self, id: &str) -> Option<&NewsItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Up to `limit` other articles, in list order.
    pub fn related<'a>(&'a self, id: &'a str, limit: usize) -> impl Iterator<Item = &'a NewsItem> + 'a {
        self.items
            .iter()
            .filter(move |item| item.id != id)
            .take(limit)
    }

    pub fn replace_all(&mut self, items: Vec<NewsItem>) {
        tracing::debug!(count = items.len(), "Replacing news");
        self.items = items;
        self.fetch.finish();
    }

    /// Insert at the front. Duplicate ids are not rejected.
    pub fn prepend(&mut self, item: NewsItem) {
        tracing::debug!(id = %item.id, "Prepending news item");
        self.items.insert(0, item);
    }
}
