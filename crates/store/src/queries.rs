//! Canned lookups over entity stores.

use entikit_core::{Entity, Nameable};
use entikit_model::{UserDto, UserRecord};

use crate::EntityStore;

/// Lookups specific to [`UserRecord`] stores.
pub trait UserQueries {
    fn select_first_by_firstname(&self, firstname: &str) -> Option<UserRecord>;

    /// Users whose alias equals `alias`; `None` selects users without one.
    fn select_by_alias(&self, alias: Option<&str>) -> Vec<UserRecord>;

    fn select_all_mapped_to_dto(&self) -> Vec<UserDto>;
}

impl<S> UserQueries for S
where
    S: EntityStore<Option<String>, UserRecord> + ?Sized,
{
    fn select_first_by_firstname(&self, firstname: &str) -> Option<UserRecord> {
        self.select_first(&|user: &UserRecord| user.firstname() == Some(firstname))
    }

    fn select_by_alias(&self, alias: Option<&str>) -> Vec<UserRecord> {
        self.select_where(&|user: &UserRecord| user.alias() == alias)
    }

    fn select_all_mapped_to_dto(&self) -> Vec<UserDto> {
        self.select_all().iter().map(UserDto::from).collect()
    }
}

/// First entity named `name`, whatever its concrete type.
pub fn select_first_by_name<Id, E, S>(store: &S, name: &str) -> Option<E>
where
    E: Entity<Id> + Nameable,
    S: EntityStore<Id, E> + ?Sized,
{
    store.select_first(&|entity: &E| entity.name() == name)
}
