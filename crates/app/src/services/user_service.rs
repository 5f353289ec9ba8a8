//! User service — use-cases for managing users.

use roster_domain::error::{NotFoundError, RosterError};
use roster_domain::id::UserId;
use roster_domain::user::{User, UserProfile};

use crate::ports::UserRepository;

/// Application service for user CRUD operations.
pub struct UserService<R> {
    repo: R,
}

impl<R: UserRepository> UserService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Store a new user and return the identifier assigned to it.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self, profile), fields(user_name = %profile.name))]
    pub async fn create_user(&self, profile: UserProfile) -> Result<UserId, RosterError> {
        let id = self.repo.insert(profile).await?;
        tracing::info!(%id, "user created");
        Ok(id)
    }

    /// Look up a user by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::NotFound`] when no user with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_user(&self, id: UserId) -> Result<User, RosterError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "User",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// List all users.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_users(&self) -> Result<Vec<User>, RosterError> {
        self.repo.get_all().await
    }

    /// Overwrite every mutable field of an existing user.
    ///
    /// An unknown id is not an error; the returned count is simply 0.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self, profile))]
    pub async fn update_user(&self, id: UserId, profile: UserProfile) -> Result<u64, RosterError> {
        let affected = self.repo.update(id, profile).await?;
        tracing::info!(affected, "user update applied");
        Ok(affected)
    }

    /// Delete a user by id, returning the number of removed rows.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_user(&self, id: UserId) -> Result<u64, RosterError> {
        let affected = self.repo.delete(id).await?;
        tracing::info!(affected, "user delete applied");
        Ok(affected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use std::future::Future;
    use std::sync::Mutex;

    #[derive(Default)]
    struct InMemoryUserRepo {
        store: Mutex<BTreeMap<UserId, User>>,
    }

    impl UserRepository for InMemoryUserRepo {
        fn insert(
            &self,
            profile: UserProfile,
        ) -> impl Future<Output = Result<UserId, RosterError>> + Send {
            let mut store = self.store.lock().unwrap();
            let next = store.keys().next_back().map_or(1, |id| id.as_raw() + 1);
            let id = UserId::from_raw(next);
            store.insert(id, User::from_profile(id, profile));
            async move { Ok(id) }
        }

        fn get_by_id(
            &self,
            id: UserId,
        ) -> impl Future<Output = Result<Option<User>, RosterError>> + Send {
            let store = self.store.lock().unwrap();
            let result = store.get(&id).cloned();
            async { Ok(result) }
        }

        fn get_all(&self) -> impl Future<Output = Result<Vec<User>, RosterError>> + Send {
            let store = self.store.lock().unwrap();
            let result: Vec<User> = store.values().cloned().collect();
            async { Ok(result) }
        }

        fn update(
            &self,
            id: UserId,
            profile: UserProfile,
        ) -> impl Future<Output = Result<u64, RosterError>> + Send {
            let mut store = self.store.lock().unwrap();
            let affected = match store.get_mut(&id) {
                Some(user) => {
                    *user = User::from_profile(id, profile);
                    1
                }
                None => 0,
            };
            async move { Ok(affected) }
        }

        fn delete(&self, id: UserId) -> impl Future<Output = Result<u64, RosterError>> + Send {
            let mut store = self.store.lock().unwrap();
            let affected = u64::from(store.remove(&id).is_some());
            async move { Ok(affected) }
        }
    }

    struct FailingRepo;

    impl UserRepository for FailingRepo {
        async fn insert(&self, _profile: UserProfile) -> Result<UserId, RosterError> {
            Err(RosterError::Storage("disk on fire".into()))
        }
        async fn get_by_id(&self, _id: UserId) -> Result<Option<User>, RosterError> {
            Err(RosterError::Storage("disk on fire".into()))
        }
        async fn get_all(&self) -> Result<Vec<User>, RosterError> {
            Err(RosterError::Storage("disk on fire".into()))
        }
        async fn update(&self, _id: UserId, _profile: UserProfile) -> Result<u64, RosterError> {
            Err(RosterError::Storage("disk on fire".into()))
        }
        async fn delete(&self, _id: UserId) -> Result<u64, RosterError> {
            Err(RosterError::Storage("disk on fire".into()))
        }
    }

    fn make_service() -> UserService<InMemoryUserRepo> {
        UserService::new(InMemoryUserRepo::default())
    }

    fn profile(name: &str, age: i64, location: &str) -> UserProfile {
        UserProfile {
            name: name.to_string(),
            age,
            location: location.to_string(),
        }
    }

    #[tokio::test]
    async fn should_create_user_and_read_it_back() {
        let svc = make_service();
        let id = svc.create_user(profile("Alice", 30, "NYC")).await.unwrap();
        assert!(id.as_raw() > 0);

        let fetched = svc.get_user(id).await.unwrap();
        assert_eq!(fetched.name, "Alice");
        assert_eq!(fetched.age, 30);
        assert_eq!(fetched.location, "NYC");
    }

    #[tokio::test]
    async fn should_return_not_found_when_user_missing() {
        let svc = make_service();
        let result = svc.get_user(UserId::from_raw(404)).await;
        assert!(matches!(result, Err(RosterError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_list_all_users() {
        let svc = make_service();
        svc.create_user(profile("Alice", 30, "NYC")).await.unwrap();
        svc.create_user(profile("Bob", 41, "LA")).await.unwrap();

        let all = svc.list_users().await.unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn should_overwrite_every_field_on_update() {
        let svc = make_service();
        let id = svc.create_user(profile("Alice", 30, "NYC")).await.unwrap();

        let affected = svc
            .update_user(id, profile("Alicia", 31, "Boston"))
            .await
            .unwrap();
        assert_eq!(affected, 1);

        let fetched = svc.get_user(id).await.unwrap();
        assert_eq!(
            fetched,
            User::from_profile(id, profile("Alicia", 31, "Boston"))
        );
    }

    #[tokio::test]
    async fn should_report_zero_rows_when_updating_missing_user() {
        let svc = make_service();
        let affected = svc
            .update_user(UserId::from_raw(9), profile("Ghost", 1, "Nowhere"))
            .await
            .unwrap();
        assert_eq!(affected, 0);
        assert!(svc.list_users().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_return_not_found_after_delete() {
        let svc = make_service();
        let id = svc.create_user(profile("Alice", 30, "NYC")).await.unwrap();

        assert_eq!(svc.delete_user(id).await.unwrap(), 1);
        assert_eq!(svc.delete_user(id).await.unwrap(), 0);

        let result = svc.get_user(id).await;
        assert!(matches!(result, Err(RosterError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_propagate_storage_errors() {
        let svc = UserService::new(FailingRepo);
        assert!(matches!(
            svc.create_user(profile("Alice", 30, "NYC")).await,
            Err(RosterError::Storage(_))
        ));
        assert!(matches!(
            svc.get_user(UserId::from_raw(1)).await,
            Err(RosterError::Storage(_))
        ));
        assert!(matches!(
            svc.delete_user(UserId::from_raw(1)).await,
            Err(RosterError::Storage(_))
        ));
    }
}
