//! `entikit-core` — entity building blocks.
//!
//! This crate contains **pure** primitives (no storage or logging concerns):
//! the identifier contract, the name lookup contract, a stable content hash
//! and the shared error type.

pub mod entity;
pub mod error;
pub mod hash_code;
pub mod nameable;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use hash_code::{HashCode, combine};
pub use nameable::Nameable;
pub use value_object::ValueObject;
