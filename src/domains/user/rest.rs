use axum::{
  body::Bytes,
  extract::{Path, State},
  http::StatusCode,
  response::Json as JsonResponse,
  routing::{delete, get, Router},
};

use super::model::{CreateUserRequest, MessageResponse, UpdateUserRequest, User};
use crate::{
  error::AppError,
  state::{AppState, SharedAppState},
};

// Path pluralization is inconsistent on purpose: /user/{id} for read and
// update, /users/{id} for delete. Existing clients depend on both forms.
pub fn user_routes() -> Router<SharedAppState> {
  Router::new()
    .route("/users", get(list_users_handler).post(create_user_handler))
    .route("/user/{id}", get(get_user_handler).put(update_user_handler))
    .route("/users/{id}", delete(delete_user_handler))
}

pub async fn create_user_handler(
  State(state): State<SharedAppState>,
  body: Bytes,
) -> Result<(StatusCode, JsonResponse<User>), AppError> {
  // Loose bind: an unparseable body or missing Name field falls back to an
  // empty name rather than a rejection.
  let payload = serde_json::from_slice::<CreateUserRequest>(&body).unwrap_or_default();

  let user = state.create_user(payload.name).await?;

  Ok((StatusCode::CREATED, JsonResponse(user)))
}

pub async fn get_user_handler(
  State(state): State<SharedAppState>,
  Path(id): Path<String>,
) -> Result<JsonResponse<User>, AppError> {
  let user = state.get_user(&id).await?;

  Ok(JsonResponse(user))
}

pub async fn list_users_handler(
  State(state): State<SharedAppState>,
) -> Result<JsonResponse<Vec<User>>, AppError> {
  let users = state.list_users().await?;

  Ok(JsonResponse(users))
}

pub async fn update_user_handler(
  State(state): State<SharedAppState>,
  Path(id): Path<String>,
  body: Bytes,
) -> Result<JsonResponse<MessageResponse>, AppError> {
  // Strict bind: malformed JSON is a 400 carrying the parse error text.
  let payload: UpdateUserRequest = serde_json::from_slice(&body)?;

  state.update_user(&id, payload.name).await?;

  Ok(JsonResponse(MessageResponse {
    message: format!("User with ID = {} was updated", id),
  }))
}

pub async fn delete_user_handler(
  State(state): State<SharedAppState>,
  Path(id): Path<String>,
) -> Result<JsonResponse<MessageResponse>, AppError> {
  state.delete_user(&id).await?;

  Ok(JsonResponse(MessageResponse {
    message: format!("User with ID = {} was deleted", id),
  }))
}
