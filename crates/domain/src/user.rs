//! User — the single record managed by the service.

use serde::{Deserialize, Serialize};

use crate::id::UserId;

/// A stored user row.
///
/// Field order matches the `users` table column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub age: i64,
    pub location: String,
}

/// The mutable fields of a [`User`].
///
/// Used both for inserts and for full-row overwrites; every field is
/// required and replaced unconditionally. Unknown fields (including `id`)
/// are ignored when deserializing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub age: i64,
    pub location: String,
}

impl User {
    /// Attach a store-assigned identifier to a profile.
    #[must_use]
    pub fn from_profile(id: UserId, profile: UserProfile) -> Self {
        Self {
            id,
            name: profile.name,
            age: profile.age,
            location: profile.location,
        }
    }
}
