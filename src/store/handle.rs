//! Shared handle to the application store.
//!
//! Mutations go through [`StoreHandle::dispatch`], or [`StoreHandle::update`]
//! for a single slice picked by type. Each closure runs to completion under
//! the write lock, so two updates never interleave.

use std::sync::Arc;

use parking_lot::RwLock;

use super::slice::SliceState;
use super::AppStore;

#[derive(Clone, Default)]
pub struct StoreHandle {
    inner: Arc<RwLock<AppStore>>,
}

impl StoreHandle {
    pub fn new(store: AppStore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    /// Run a selector against the current state.
    pub fn read<R>(&self, select: impl FnOnce(&AppStore) -> R) -> R {
        select(&*self.inner.read())
    }

    /// Apply one mutation.
    pub fn dispatch<R>(&self, update: impl FnOnce(&mut AppStore) -> R) -> R {
        update(&mut *self.inner.write())
    }

    /// Clone of one slice.
    pub fn slice<S: SliceState>(&self) -> S {
        self.inner.read().slice::<S>().clone()
    }

    /// Apply one mutation that touches a single slice.
    pub fn update<S: SliceState, R>(&self, update: impl FnOnce(&mut S) -> R) -> R {
        update(self.inner.write().slice_mut::<S>())
    }

    /// Clone of the whole state.
    pub fn snapshot(&self) -> AppStore {
        self.inner.read().clone()
    }
}

impl std::fmt::Debug for StoreHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreHandle").finish_non_exhaustive()
    }
}
