//! Storage port — repository trait for user persistence.

use std::future::Future;

use roster_domain::error::RosterError;
use roster_domain::id::UserId;
use roster_domain::user::{User, UserProfile};

/// Persistence operations for [`User`] records.
///
/// Every method maps to exactly one statement against the store. A missing
/// row is never an error: reads return `None` and writes report zero
/// affected rows.
pub trait UserRepository {
    /// Insert a new row and return the identifier the store assigned.
    fn insert(
        &self,
        profile: UserProfile,
    ) -> impl Future<Output = Result<UserId, RosterError>> + Send;

    /// Fetch a single row, or `None` if no row has this id.
    fn get_by_id(
        &self,
        id: UserId,
    ) -> impl Future<Output = Result<Option<User>, RosterError>> + Send;

    /// Fetch every row.
    fn get_all(&self) -> impl Future<Output = Result<Vec<User>, RosterError>> + Send;

    /// Overwrite all mutable fields of the row with this id.
    ///
    /// Returns the number of affected rows (0 when the id does not exist).
    fn update(
        &self,
        id: UserId,
        profile: UserProfile,
    ) -> impl Future<Output = Result<u64, RosterError>> + Send;

    /// Remove the row with this id.
    ///
    /// Returns the number of affected rows (0 when the id does not exist).
    fn delete(&self, id: UserId) -> impl Future<Output = Result<u64, RosterError>> + Send;
}
