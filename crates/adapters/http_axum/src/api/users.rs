//! JSON REST handlers for users.

use std::str::FromStr;

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use roster_app::ports::UserRepository;
use roster_domain::error::ValidationError;
use roster_domain::id::UserId;
use roster_domain::user::{User, UserProfile};

use crate::error::ApiError;
use crate::state::AppState;

/// Acknowledgement body for write endpoints.
#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub id: UserId,
    pub message: String,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<User>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<User>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create, update, and delete endpoints.
///
/// Writes always answer `200 OK`, including updates and deletes that
/// matched no row; the affected count is reported in the message.
pub enum WriteResponse {
    Ok(Json<MessageBody>),
}

impl WriteResponse {
    fn created(id: UserId) -> Self {
        Self::Ok(Json(MessageBody {
            id,
            message: "User created successfully".to_string(),
        }))
    }

    fn updated(id: UserId, affected: u64) -> Self {
        Self::Ok(Json(MessageBody {
            id,
            message: format!("User updated successfully. Total rows/record affected {affected}"),
        }))
    }

    fn deleted(id: UserId, affected: u64) -> Self {
        Self::Ok(Json(MessageBody {
            id,
            message: format!("User deleted successfully. Total rows/record affected {affected}"),
        }))
    }
}

impl IntoResponse for WriteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

fn parse_id(raw: &str) -> Result<UserId, ApiError> {
    UserId::from_str(raw).map_err(|source| {
        ValidationError::InvalidId {
            value: raw.to_string(),
            source,
        }
        .into()
    })
}

/// `POST /user`
pub async fn create<R>(
    State(state): State<AppState<R>>,
    payload: Result<Json<UserProfile>, JsonRejection>,
) -> Result<WriteResponse, ApiError>
where
    R: UserRepository + Send + Sync + 'static,
{
    let Json(profile) = payload?;
    let id = state.user_service.create_user(profile).await?;
    Ok(WriteResponse::created(id))
}

/// `GET /user/{id}`
pub async fn get<R>(
    State(state): State<AppState<R>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<GetResponse, ApiError>
where
    R: UserRepository + Send + Sync + 'static,
{
    let Path(id) = path?;
    let user_id = parse_id(&id)?;
    let user = state.user_service.get_user(user_id).await?;
    Ok(GetResponse::Ok(Json(user)))
}

/// `GET /users`
pub async fn list<R>(State(state): State<AppState<R>>) -> Result<ListResponse, ApiError>
where
    R: UserRepository + Send + Sync + 'static,
{
    let users = state.user_service.list_users().await?;
    Ok(ListResponse::Ok(Json(users)))
}

/// `PUT /user/{id}`
pub async fn update<R>(
    State(state): State<AppState<R>>,
    path: Result<Path<String>, PathRejection>,
    payload: Result<Json<UserProfile>, JsonRejection>,
) -> Result<WriteResponse, ApiError>
where
    R: UserRepository + Send + Sync + 'static,
{
    let Path(id) = path?;
    let user_id = parse_id(&id)?;
    let Json(profile) = payload?;
    let affected = state.user_service.update_user(user_id, profile).await?;
    Ok(WriteResponse::updated(user_id, affected))
}

/// `DELETE /user/{id}`
pub async fn delete<R>(
    State(state): State<AppState<R>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<WriteResponse, ApiError>
where
    R: UserRepository + Send + Sync + 'static,
{
    let Path(id) = path?;
    let user_id = parse_id(&id)?;
    let affected = state.user_service.delete_user(user_id).await?;
    Ok(WriteResponse::deleted(user_id, affected))
}
