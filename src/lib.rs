//! userctl - User management client
//!
//! Keeps a command-line view of a REST `/users` collection consistent
//! with the server through a deduplicating query cache and tracked,
//! cache-invalidating mutations.

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod sync;
pub mod ui;
pub mod users;
pub mod views;

pub use error::{UserctlError, UserctlResult};
