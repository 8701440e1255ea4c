//! Canonical sample entities.
//!
//! Each function builds a fresh value, so callers may mutate the result
//! without affecting other users of the fixture.

use crate::{Inherited, UserRecord};

/// John Doe: not an admin, no alias.
pub fn jdoe() -> UserRecord {
    UserRecord::new()
        .with_login("jdoe")
        .with_firstname("John")
        .with_lastname("Doe")
        .with_admin(false)
}

/// Big Boss: admin, aliased "TheBoss".
pub fn bboss() -> UserRecord {
    UserRecord::new()
        .with_login("bboss")
        .with_firstname("Big")
        .with_lastname("Boss")
        .with_admin(true)
        .with_alias("TheBoss")
}

pub fn inherited() -> Inherited {
    Inherited::new("id", "name", Some("firstname".to_string()))
}
