//! Entity trait: a type that can report its identifier.

/// Entity marker + minimal interface.
///
/// The identifier type is a generic parameter rather than an associated type,
/// so one type may be addressable by more than one kind of key. Whether the
/// identifier can be absent is up to the implementor (use `Option<_>`).
pub trait Entity<Id> {
    /// Returns the current identifier value.
    fn id(&self) -> Id;
}
