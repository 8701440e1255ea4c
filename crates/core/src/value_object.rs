//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**. They are defined entirely by their
//! attribute values, so two value objects with the same values are equal.

/// Marker trait for value objects.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: no identifier, compared by all attribute values
///   (e.g. a projection such as `UserDto { name, alias }`)
/// - **Entity**: reports an identifier through [`crate::Entity`]
///
/// The trait requires `Clone`, `PartialEq` and `Debug` so value objects can be
/// copied around freely, compared in assertions and logged.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct FullName {
///     first: String,
///     last: String,
/// }
///
/// impl ValueObject for FullName {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
