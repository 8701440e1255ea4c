//! Mutable user record: five independent fields compared structurally.
//!
//! The record is created empty, populated through setters and later compared
//! against an expected value. No field is validated; every text field can be
//! set back to absent at any time.

use core::any::Any;

use serde::{Deserialize, Serialize};

use entikit_core::{Entity, HashCode, combine};

// ─────────────────────────────────────────────────────────────────────────────
// Record
// ─────────────────────────────────────────────────────────────────────────────

/// A flat user row: login, first and last name, admin flag, optional alias.
///
/// Equality compares all five fields pairwise, with an absent value equal
/// only to another absent value. `Hash` and [`UserRecord::hash_code`] are
/// both consistent with that equality.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserRecord {
    login: Option<String>,
    firstname: Option<String>,
    lastname: Option<String>,
    admin: bool,
    alias: Option<String>,
}

impl UserRecord {
    /// Create a record with every text field unset and `admin == false`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn login(&self) -> Option<&str> {
        self.login.as_deref()
    }

    pub fn firstname(&self) -> Option<&str> {
        self.firstname.as_deref()
    }

    pub fn lastname(&self) -> Option<&str> {
        self.lastname.as_deref()
    }

    pub fn is_admin(&self) -> bool {
        self.admin
    }

    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    pub fn set_login(&mut self, login: Option<String>) {
        self.login = login;
    }

    pub fn set_firstname(&mut self, firstname: Option<String>) {
        self.firstname = firstname;
    }

    pub fn set_lastname(&mut self, lastname: Option<String>) {
        self.lastname = lastname;
    }

    pub fn set_admin(&mut self, admin: bool) {
        self.admin = admin;
    }

    pub fn set_alias(&mut self, alias: Option<String>) {
        self.alias = alias;
    }

    pub fn with_login(mut self, login: impl Into<String>) -> Self {
        self.login = Some(login.into());
        self
    }

    pub fn with_firstname(mut self, firstname: impl Into<String>) -> Self {
        self.firstname = Some(firstname.into());
        self
    }

    pub fn with_lastname(mut self, lastname: impl Into<String>) -> Self {
        self.lastname = Some(lastname.into());
        self
    }

    pub fn with_admin(mut self, admin: bool) -> Self {
        self.admin = admin;
        self
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Equality against a value of unknown concrete type.
    ///
    /// Returns `false` for anything that is not a `UserRecord`, even if it
    /// carries the same five fields.
    pub fn equals_any(&self, other: &dyn Any) -> bool {
        other
            .downcast_ref::<UserRecord>()
            .is_some_and(|other| self == other)
    }
}

impl HashCode for UserRecord {
    fn hash_code(&self) -> i32 {
        combine([
            self.login.hash_code(),
            self.firstname.hash_code(),
            self.lastname.hash_code(),
            self.admin.hash_code(),
            self.alias.hash_code(),
        ])
    }
}

/// The login doubles as the primary key.
impl Entity<Option<String>> for UserRecord {
    fn id(&self) -> Option<String> {
        self.login.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn john() -> UserRecord {
        let mut user = UserRecord::new();
        user.set_login(Some("john".to_string()));
        user.set_firstname(Some("John".to_string()));
        user.set_lastname(Some("Doe".to_string()));
        user.set_admin(false);
        user.set_alias(None);
        user
    }

    #[test]
    fn new_record_is_empty() {
        let user = UserRecord::new();
        assert_eq!(user.login(), None);
        assert_eq!(user.firstname(), None);
        assert_eq!(user.lastname(), None);
        assert!(!user.is_admin());
        assert_eq!(user.alias(), None);
        assert_eq!(user.hash_code(), 0);
        assert_eq!(user, UserRecord::default());
    }

    #[test]
    fn identical_records_are_equal_and_share_hash_code() {
        let a = john();
        let b = john();

        assert_eq!(a, b);
        assert_eq!(a.hash_code(), b.hash_code());
    }

    #[test]
    fn admin_flag_participates_in_equality() {
        let a = john();
        let mut b = john();
        b.set_admin(true);

        assert_ne!(a, b);
    }

    #[test]
    fn absent_alias_differs_from_present_alias() {
        let a = john();
        let b = john().with_alias("jdoe");

        assert_ne!(a, b);
    }

    #[test]
    fn mutation_changes_later_equality() {
        let a = john();
        let mut b = john();
        assert_eq!(a, b);

        b.set_lastname(Some("Smith".to_string()));
        assert_ne!(a, b);

        b.set_lastname(Some("Doe".to_string()));
        assert_eq!(a, b);
    }

    #[test]
    fn text_fields_can_be_cleared() {
        let mut user = john();
        user.set_login(None);
        user.set_firstname(None);
        user.set_lastname(None);

        assert_eq!(user.login(), None);
        assert_eq!(user.firstname(), None);
        assert_eq!(user.lastname(), None);
        assert_eq!(user, UserRecord::new());
    }

    #[test]
    fn hash_code_combines_fields_with_multiplier_31() {
        let user = john();
        let expected = combine([
            "john".hash_code(),
            "John".hash_code(),
            "Doe".hash_code(),
            0,
            0,
        ]);
        assert_eq!(user.hash_code(), expected);

        let admin = john().with_admin(true);
        assert_eq!(admin.hash_code(), expected.wrapping_add(31));
    }

    #[test]
    fn equals_any_rejects_other_concrete_types() {
        #[allow(dead_code)]
        struct LookAlike {
            login: Option<String>,
            firstname: Option<String>,
            lastname: Option<String>,
            admin: bool,
            alias: Option<String>,
        }

        let user = john();
        let look_alike = LookAlike {
            login: Some("john".to_string()),
            firstname: Some("John".to_string()),
            lastname: Some("Doe".to_string()),
            admin: false,
            alias: None,
        };

        assert!(user.equals_any(&john()));
        assert!(!user.equals_any(&look_alike));
        assert!(!user.equals_any(&"john"));
    }

    #[test]
    fn login_is_the_identifier() {
        assert_eq!(john().id(), Some("john".to_string()));
        assert_eq!(UserRecord::new().id(), None);
    }

    #[test]
    fn absent_fields_serialize_as_null() {
        let json = serde_json::to_value(john()).unwrap();
        assert_eq!(json["login"], "john");
        assert_eq!(json["admin"], false);
        assert!(json["alias"].is_null());

        let back: UserRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, john());
    }

    fn text() -> impl Strategy<Value = Option<String>> {
        prop::option::of("[A-Za-z]{0,8}")
    }

    fn record() -> impl Strategy<Value = UserRecord> {
        (text(), text(), text(), any::<bool>(), text()).prop_map(
            |(login, firstname, lastname, admin, alias)| {
                let mut user = UserRecord::new();
                user.set_login(login);
                user.set_firstname(firstname);
                user.set_lastname(lastname);
                user.set_admin(admin);
                user.set_alias(alias);
                user
            },
        )
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 512,
            ..ProptestConfig::default()
        })]

        /// Property: every setter is read back unchanged by its getter.
        #[test]
        fn setters_round_trip(
            login in text(),
            firstname in text(),
            lastname in text(),
            admin in any::<bool>(),
            alias in text()
        ) {
            let mut user = UserRecord::new();
            user.set_login(login.clone());
            user.set_firstname(firstname.clone());
            user.set_lastname(lastname.clone());
            user.set_admin(admin);
            user.set_alias(alias.clone());

            prop_assert_eq!(user.login(), login.as_deref());
            prop_assert_eq!(user.firstname(), firstname.as_deref());
            prop_assert_eq!(user.lastname(), lastname.as_deref());
            prop_assert_eq!(user.is_admin(), admin);
            prop_assert_eq!(user.alias(), alias.as_deref());
        }

        /// Property: equality holds iff every field is pairwise equal.
        #[test]
        fn equality_is_fieldwise(a in record(), b in record()) {
            let fieldwise = a.login() == b.login()
                && a.firstname() == b.firstname()
                && a.lastname() == b.lastname()
                && a.is_admin() == b.is_admin()
                && a.alias() == b.alias();

            prop_assert_eq!(a == b, fieldwise);
            prop_assert_eq!(a == b, b == a);
        }

        /// Property: equal records always share a hash code.
        #[test]
        fn equal_records_share_hash_code(a in record()) {
            let b = a.clone();
            prop_assert_eq!(&a, &b);
            prop_assert_eq!(a.hash_code(), b.hash_code());
            prop_assert_eq!(a.hash_code(), a.hash_code());
        }
    }
}
