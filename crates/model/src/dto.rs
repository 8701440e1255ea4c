//! Read-side projections of the user record.

use serde::{Deserialize, Serialize};

use entikit_core::ValueObject;

use crate::UserRecord;

/// Display name plus alias, as shown in user listings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserDto {
    pub name: String,
    pub alias: Option<String>,
}

impl UserDto {
    pub fn new(name: impl Into<String>, alias: Option<String>) -> Self {
        Self {
            name: name.into(),
            alias,
        }
    }
}

impl ValueObject for UserDto {}

/// `name` is `"<firstname> <lastname>"`; absent parts are skipped.
impl From<&UserRecord> for UserDto {
    fn from(user: &UserRecord) -> Self {
        let name = [user.firstname(), user.lastname()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ");

        Self {
            name,
            alias: user.alias().map(str::to_owned),
        }
    }
}
