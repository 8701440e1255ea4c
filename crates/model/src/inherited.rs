//! An entity reached through two contracts at once: [`Entity`] and [`Nameable`].

use core::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use entikit_core::{Entity, HashCode, Nameable, combine};

/// Named entity keyed by a string id.
///
/// Equality and hashing cover `name` and `firstname` only. Two values with
/// different ids but the same names compare equal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Inherited {
    id: String,
    name: String,
    firstname: Option<String>,
}

impl Inherited {
    pub fn new(id: impl Into<String>, name: impl Into<String>, firstname: Option<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            firstname,
        }
    }

    pub fn firstname(&self) -> Option<&str> {
        self.firstname.as_deref()
    }
}

impl Entity<String> for Inherited {
    fn id(&self) -> String {
        self.id.clone()
    }
}

impl Nameable for Inherited {
    fn name(&self) -> &str {
        &self.name
    }
}

impl PartialEq for Inherited {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.firstname == other.firstname
    }
}

impl Eq for Inherited {}

impl Hash for Inherited {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.firstname.hash(state);
    }
}

impl HashCode for Inherited {
    fn hash_code(&self) -> i32 {
        combine([self.name.hash_code(), self.firstname.hash_code()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn id_is_excluded_from_equality() {
        let a = Inherited::new("1", "name", Some("first".to_string()));
        let b = Inherited::new("2", "name", Some("first".to_string()));

        assert_ne!(a.id(), b.id());
        assert_eq!(a, b);
        assert_eq!(a.hash_code(), b.hash_code());

        let set: HashSet<Inherited> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn firstname_participates_in_equality() {
        let a = Inherited::new("id", "name", Some("first".to_string()));
        let b = Inherited::new("id", "name", None);

        assert_ne!(a, b);
        assert_eq!(b.hash_code(), combine(["name".hash_code(), 0]));
    }

    #[test]
    fn reachable_through_both_contracts() {
        fn describe<T: Entity<String> + Nameable>(value: &T) -> String {
            format!("{}:{}", value.id(), value.name())
        }

        let value = Inherited::new("id", "name", None);
        assert_eq!(describe(&value), "id:name");
    }
}
