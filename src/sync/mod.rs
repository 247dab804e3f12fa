//! User-data synchronization layer
//!
//! Keeps client-visible state consistent with the server:
//!
//! - [`cache::QueryCache`] stores one authoritative value per query key,
//!   deduplicates concurrent reads of the same key into a single request,
//!   and drops results that resolve after the key was invalidated.
//! - [`mutation::Mutation`] runs writes, tracks which targets are
//!   mid-flight, and invalidates the affected keys on success so the next
//!   read refetches from the server instead of patching locally.
//! - [`notify::Notifier`] is the injected channel for user-facing
//!   success/error notices, keeping feedback out of the flow logic.
//!
//! Results are applied in completion order, not issue order; there is no
//! sequence-number guard, so a slow refresh finishing after a fast one can
//! briefly win with older data. Accepted limitation.

pub mod cache;
pub mod mutation;
pub mod notify;

pub use cache::{CachedValue, QueryCache, QueryKey, QuerySnapshot, QueryStatus, SharedError};
pub use mutation::{Mutation, MutationTarget, MutationTracker};
pub use notify::{MemoryNotifier, Notice, NoticeKind, Notifier, UiNotifier};
