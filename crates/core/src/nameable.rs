//! Nameable trait: entities that can be looked up by display name.

pub trait Nameable {
    fn name(&self) -> &str;
}
