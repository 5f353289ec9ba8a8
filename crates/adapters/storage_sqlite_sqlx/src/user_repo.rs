//! `SQLite` implementation of [`UserRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use roster_app::ports::UserRepository;
use roster_domain::error::RosterError;
use roster_domain::id::UserId;
use roster_domain::user::{User, UserProfile};

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`User`].
struct Wrapper(User);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<User> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(User {
            id: UserId::from_raw(row.try_get("userid")?),
            name: row.try_get("name")?,
            age: row.try_get("age")?,
            location: row.try_get("location")?,
        }))
    }
}

const INSERT: &str = "INSERT INTO users (name, location, age) VALUES (?1, ?2, ?3) RETURNING userid";
const SELECT_BY_ID: &str = "SELECT userid, name, age, location FROM users WHERE userid = ?1";
const SELECT_ALL: &str = "SELECT userid, name, age, location FROM users ORDER BY userid";
const UPDATE: &str = "UPDATE users SET name = ?2, location = ?3, age = ?4 WHERE userid = ?1";
const DELETE_BY_ID: &str = "DELETE FROM users WHERE userid = ?1";

/// `SQLite`-backed user repository.
///
/// Each call checks one connection out of the shared pool for the duration of
/// its single statement.
pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl UserRepository for SqliteUserRepository {
    fn insert(
        &self,
        profile: UserProfile,
    ) -> impl Future<Output = Result<UserId, RosterError>> + Send {
        let pool = self.pool.clone();
        async move {
            let id: i64 = sqlx::query_scalar(INSERT)
                .bind(&profile.name)
                .bind(&profile.location)
                .bind(profile.age)
                .fetch_one(&pool)
                .await
                .map_err(StorageError::from)?;

            tracing::debug!(id, "inserted a single record");
            Ok(UserId::from_raw(id))
        }
    }

    fn get_by_id(
        &self,
        id: UserId,
    ) -> impl Future<Output = Result<Option<User>, RosterError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.as_raw())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            if row.is_none() {
                tracing::debug!(%id, "no rows were returned");
            }
            Ok(Wrapper::maybe(row))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<User>, RosterError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn update(
        &self,
        id: UserId,
        profile: UserProfile,
    ) -> impl Future<Output = Result<u64, RosterError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(UPDATE)
                .bind(id.as_raw())
                .bind(&profile.name)
                .bind(&profile.location)
                .bind(profile.age)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(result.rows_affected())
        }
    }

    fn delete(&self, id: UserId) -> impl Future<Output = Result<u64, RosterError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(DELETE_BY_ID)
                .bind(id.as_raw())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(result.rows_affected())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::Config;

    async fn setup() -> SqliteUserRepository {
        let db = Config::new("sqlite::memory:").build().await.unwrap();
        SqliteUserRepository::new(db.pool().clone())
    }

    fn alice() -> UserProfile {
        UserProfile {
            name: "Alice".to_string(),
            age: 30,
            location: "NYC".to_string(),
        }
    }

    fn bob() -> UserProfile {
        UserProfile {
            name: "Bob".to_string(),
            age: 41,
            location: "LA".to_string(),
        }
    }

    #[tokio::test]
    async fn should_insert_and_retrieve_user() {
        let repo = setup().await;

        let id = repo.insert(alice()).await.unwrap();
        assert!(id.as_raw() > 0);

        let fetched = repo.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(fetched, User::from_profile(id, alice()));
    }

    #[tokio::test]
    async fn should_assign_distinct_ids() {
        let repo = setup().await;
        let first = repo.insert(alice()).await.unwrap();
        let second = repo.insert(alice()).await.unwrap();
        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn should_return_none_when_user_not_found() {
        let repo = setup().await;
        let result = repo.get_by_id(UserId::from_raw(12345)).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn should_list_all_users_ordered_by_id() {
        let repo = setup().await;
        let first = repo.insert(alice()).await.unwrap();
        let second = repo.insert(bob()).await.unwrap();

        let all = repo.get_all().await.unwrap();
        let ids: Vec<UserId> = all.iter().map(|u| u.id).collect();
        assert_eq!(ids, [first, second]);
        assert_eq!(all[1].name, "Bob");
    }

    #[tokio::test]
    async fn should_return_empty_list_when_table_empty() {
        let repo = setup().await;
        assert!(repo.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_overwrite_all_fields_on_update() {
        let repo = setup().await;
        let id = repo.insert(alice()).await.unwrap();

        let affected = repo.update(id, bob()).await.unwrap();
        assert_eq!(affected, 1);

        let fetched = repo.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(fetched, User::from_profile(id, bob()));
    }

    #[tokio::test]
    async fn should_not_create_row_when_updating_missing_id() {
        let repo = setup().await;
        let affected = repo.update(UserId::from_raw(77), bob()).await.unwrap();
        assert_eq!(affected, 0);
        assert!(repo.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_delete_user_when_exists() {
        let repo = setup().await;
        let id = repo.insert(alice()).await.unwrap();

        assert_eq!(repo.delete(id).await.unwrap(), 1);
        assert!(repo.get_by_id(id).await.unwrap().is_none());
        assert_eq!(repo.delete(id).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn should_surface_storage_error_when_pool_closed() {
        let db = Config::new("sqlite::memory:").build().await.unwrap();
        let repo = SqliteUserRepository::new(db.pool().clone());
        db.pool().close().await;

        let result = repo.get_all().await;
        assert!(matches!(result, Err(RosterError::Storage(_))));
    }
}
