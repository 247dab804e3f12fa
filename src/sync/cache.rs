//! Query cache with in-flight deduplication
//!
//! One slot per [`QueryKey`]. The first fetch for a key installs a shared
//! future; concurrent fetches for the same key await that same future, so
//! at most one network call is in flight per key. A fetch result is
//! applied only if the slot generation still matches the generation at
//! issue time. Invalidation bumps the generation, so results that land
//! after an invalidation (or after the caller stopped caring) are
//! discarded instead of resurrecting stale state.

use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use futures_util::future::{BoxFuture, Shared};
use futures_util::FutureExt;
use tracing::debug;

use crate::error::{UserctlError, UserctlResult};
use crate::users::User;

/// Error shared between all readers of one failed in-flight request
pub type SharedError = Arc<UserctlError>;

type FetchFuture = Shared<BoxFuture<'static, Result<CachedValue, SharedError>>>;

/// Identity under which a cached read is stored and deduplicated
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QueryKey {
    UserList,
    UserDetail(u64),
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UserList => write!(f, "user list"),
            Self::UserDetail(id) => write!(f, "user {id}"),
        }
    }
}

/// Value held by a cache slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CachedValue {
    List(Vec<User>),
    One(User),
}

impl CachedValue {
    pub fn as_list(&self) -> Option<&[User]> {
        match self {
            Self::List(users) => Some(users),
            Self::One(_) => None,
        }
    }

    pub fn as_user(&self) -> Option<&User> {
        match self {
            Self::One(user) => Some(user),
            Self::List(_) => None,
        }
    }
}

/// Read status derived from a slot's contents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryStatus {
    Loading,
    Success,
    Error,
}

/// Point-in-time view of one cache slot, for rendering
#[derive(Debug, Clone)]
pub struct QuerySnapshot {
    pub status: QueryStatus,
    pub data: Option<CachedValue>,
    pub error: Option<SharedError>,
    pub refreshed_at: Option<DateTime<Utc>>,
}

impl QuerySnapshot {
    /// Snapshot for a slot that has not settled yet
    pub fn loading() -> Self {
        Self {
            status: QueryStatus::Loading,
            data: None,
            error: None,
            refreshed_at: None,
        }
    }
}

#[derive(Default)]
struct Slot {
    data: Option<CachedValue>,
    error: Option<SharedError>,
    inflight: Option<FetchFuture>,
    generation: u64,
    refreshed_at: Option<DateTime<Utc>>,
}

impl Slot {
    fn snapshot(&self) -> QuerySnapshot {
        let status = if self.error.is_some() {
            QueryStatus::Error
        } else if self.data.is_some() {
            QueryStatus::Success
        } else {
            QueryStatus::Loading
        };
        QuerySnapshot {
            status,
            data: self.data.clone(),
            error: self.error.clone(),
            refreshed_at: self.refreshed_at,
        }
    }
}

/// Cache keyed by resource identity; cheap to clone, shared state inside
#[derive(Clone, Default)]
pub struct QueryCache {
    slots: Arc<Mutex<HashMap<QueryKey, Slot>>>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<QueryKey, Slot>> {
        self.slots.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Fetch the value for `key`, sharing any request already in flight.
    ///
    /// When no request is pending the fetcher is invoked, so a settled key
    /// always refetches; cached data is served through [`Self::peek`],
    /// not here. A failed fetch records the error for banner rendering but
    /// never caches it; the next fetch retries.
    pub async fn fetch<F, Fut>(&self, key: QueryKey, fetcher: F) -> Result<CachedValue, SharedError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = UserctlResult<CachedValue>> + Send + 'static,
    {
        let (future, generation) = {
            let mut slots = self.lock();
            let slot = slots.entry(key.clone()).or_default();
            match slot.inflight.clone() {
                Some(inflight) => {
                    debug!("joining in-flight request for {}", key);
                    (inflight, slot.generation)
                }
                None => {
                    let future = fetcher().map(|r| r.map_err(Arc::new)).boxed().shared();
                    slot.inflight = Some(future.clone());
                    (future, slot.generation)
                }
            }
        };

        let result = future.await;
        self.settle(&key, generation, &result);
        result
    }

    /// Mark `key` stale: drop its value and any in-flight request so the
    /// next read goes back to the server.
    pub fn invalidate(&self, key: &QueryKey) {
        let mut slots = self.lock();
        let slot = slots.entry(key.clone()).or_default();
        slot.generation += 1;
        slot.data = None;
        slot.error = None;
        slot.inflight = None;
        debug!("invalidated {} (generation {})", key, slot.generation);
    }

    /// Current slot state for `key`, without triggering any I/O
    pub fn peek(&self, key: &QueryKey) -> Option<QuerySnapshot> {
        self.lock().get(key).map(Slot::snapshot)
    }

    /// The cached user list, if the list slot currently holds one
    pub fn cached_users(&self) -> Option<Vec<User>> {
        match self.peek(&QueryKey::UserList)?.data? {
            CachedValue::List(users) => Some(users),
            CachedValue::One(_) => None,
        }
    }

    fn settle(&self, key: &QueryKey, generation: u64, result: &Result<CachedValue, SharedError>) {
        let mut slots = self.lock();
        let Some(slot) = slots.get_mut(key) else {
            return;
        };
        if slot.generation != generation {
            debug!("discarding stale result for {}", key);
            return;
        }
        slot.inflight = None;
        match result {
            Ok(value) => {
                slot.data = Some(value.clone());
                slot.error = None;
                slot.refreshed_at = Some(Utc::now());
            }
            Err(err) => {
                slot.data = None;
                slot.error = Some(err.clone());
            }
        }
    }
}
