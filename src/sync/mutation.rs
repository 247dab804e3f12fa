//! Tracked write operations
//!
//! A [`Mutation`] runs one write against the backend while the shared
//! [`MutationTracker`] remembers which targets are mid-flight, so the list
//! view can mark individual rows as "removing" and a second trigger for a
//! target that is already pending is rejected instead of silently dropped.
//! Successful writes invalidate their registered query keys before the
//! caller composes any feedback; failed writes invalidate nothing.

use std::collections::HashSet;
use std::fmt;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard};

use tracing::debug;

use crate::error::{UserctlError, UserctlResult};
use crate::sync::cache::{QueryCache, QueryKey};

/// What a mutation is aimed at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MutationTarget {
    /// A single user row (update, delete)
    User(u64),
    /// The collection itself (create)
    Collection,
}

impl fmt::Display for MutationTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User(id) => write!(f, "user {id}"),
            Self::Collection => write!(f, "the user collection"),
        }
    }
}

/// Set of targets with a write currently in flight
#[derive(Debug, Clone, Default)]
pub struct MutationTracker {
    pending: Arc<Mutex<HashSet<MutationTarget>>>,
}

impl MutationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashSet<MutationTarget>> {
        self.pending.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Whether any mutation is in flight
    pub fn is_pending(&self) -> bool {
        !self.lock().is_empty()
    }

    /// Whether a mutation targeting this user id is in flight
    pub fn is_pending_for(&self, id: u64) -> bool {
        self.lock().contains(&MutationTarget::User(id))
    }

    pub(crate) fn begin(&self, target: MutationTarget) -> bool {
        self.lock().insert(target)
    }

    pub(crate) fn finish(&self, target: MutationTarget) {
        self.lock().remove(&target);
    }
}

/// One write operation with its cache-invalidation set
pub struct Mutation {
    cache: QueryCache,
    tracker: MutationTracker,
    operation: &'static str,
    invalidates: Vec<QueryKey>,
}

impl Mutation {
    pub fn new(cache: QueryCache, tracker: MutationTracker, operation: &'static str) -> Self {
        Self {
            cache,
            tracker,
            operation,
            invalidates: Vec::new(),
        }
    }

    /// Register a query key to invalidate when the write succeeds
    pub fn invalidates(mut self, key: QueryKey) -> Self {
        self.invalidates.push(key);
        self
    }

    /// Run the write. Rejected with `MutationInFlight` if a mutation for
    /// the same target is already pending.
    pub async fn trigger<T, Fut>(&self, target: MutationTarget, op: Fut) -> UserctlResult<T>
    where
        Fut: Future<Output = UserctlResult<T>>,
    {
        if !self.tracker.begin(target) {
            return Err(UserctlError::MutationInFlight {
                operation: format!("{} of {}", self.operation, target),
            });
        }

        debug!("{} of {} started", self.operation, target);
        let result = op.await;
        self.tracker.finish(target);

        match result {
            Ok(value) => {
                for key in &self.invalidates {
                    self.cache.invalidate(key);
                }
                debug!("{} of {} succeeded", self.operation, target);
                Ok(value)
            }
            Err(err) => {
                debug!("{} of {} failed: {}", self.operation, target, err);
                Err(err)
            }
        }
    }
}
