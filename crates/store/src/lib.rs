//! `entikit-store` — in-memory entity storage keyed by [`entikit_core::Entity`] ids.
//!
//! Intended for tests and local development; nothing here persists.

pub mod entity_store;
pub mod error;
pub mod queries;

pub use entity_store::{EntityStore, InMemoryEntityStore};
pub use error::{StoreError, StoreResult};
pub use queries::{UserQueries, select_first_by_name};
