//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod users;

use axum::Router;
use axum::routing::{get, post};

use roster_app::ports::UserRepository;

use crate::state::AppState;

/// Build the user API sub-router.
pub fn routes<R>() -> Router<AppState<R>>
where
    R: UserRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/user", post(users::create::<R>))
        .route(
            "/user/{id}",
            get(users::get::<R>)
                .put(users::update::<R>)
                .delete(users::delete::<R>),
        )
        .route("/users", get(users::list::<R>))
}
