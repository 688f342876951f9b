use super::{FilterState, FilterStore};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Cloneable shared access to one [`FilterStore`].
///
/// Every surface holds a clone of the same handle, so they all read and write
/// the single session state. Calls are short and synchronous; a lock poisoned
/// by a panicking caller is recovered rather than propagated, since every
/// store mutation leaves the state consistent before it can panic.
#[derive(Debug, Clone, Default)]
pub struct FilterHandle {
    inner: Arc<Mutex<FilterStore>>,
}

impl FilterHandle {
    pub fn new(store: FilterStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, FilterStore> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run `f` with shared access to the store.
    pub fn read<T>(&self, f: impl FnOnce(&FilterStore) -> T) -> T {
        f(&*self.lock())
    }

    /// Run `f` with exclusive access to the store.
    pub fn update<T>(&self, f: impl FnOnce(&mut FilterStore) -> T) -> T {
        f(&mut *self.lock())
    }

    pub fn snapshot(&self) -> FilterState {
        self.read(FilterStore::snapshot)
    }

    pub fn revision(&self) -> u64 {
        self.read(FilterStore::revision)
    }

    /// True if both handles point at the same store.
    pub fn shares_store_with(&self, other: &FilterHandle) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}
