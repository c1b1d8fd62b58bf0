use axum::{
  body::{Body, Bytes},
  http::{Request, StatusCode},
  Router,
};
use serde::Serialize;
use sqlx::PgPool;
use tower::ServiceExt;

use crate::{app::create_app, db::schema, state::SharedAppState};

pub async fn app_with_pool(pool: PgPool) -> Router {
  schema::init(&pool).await.expect("initialize schema");
  let state = SharedAppState::new(pool).await;
  create_app(state)
}

async fn send(app: Router, method: &str, uri: &str, body: Body) -> (StatusCode, Bytes) {
  let request = Request::builder()
    .method(method)
    .uri(uri)
    .header("content-type", "application/json")
    .body(body)
    .expect("build request");

  let response = app.oneshot(request).await.expect("handle request");
  let status = response.status();
  let body = axum::body::to_bytes(response.into_body(), usize::MAX)
    .await
    .expect("read response body");
  (status, body)
}

pub async fn post_json<T: Serialize>(app: Router, uri: &str, body: &T) -> (StatusCode, Bytes) {
  let bytes = serde_json::to_vec(body).expect("serialize request body");
  send(app, "POST", uri, Body::from(bytes)).await
}

pub async fn put_json<T: Serialize>(app: Router, uri: &str, body: &T) -> (StatusCode, Bytes) {
  let bytes = serde_json::to_vec(body).expect("serialize request body");
  send(app, "PUT", uri, Body::from(bytes)).await
}

pub async fn put_raw(app: Router, uri: &str, body: &'static str) -> (StatusCode, Bytes) {
  send(app, "PUT", uri, Body::from(body)).await
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, Bytes) {
  send(app, "GET", uri, Body::empty()).await
}

pub async fn delete(app: Router, uri: &str) -> (StatusCode, Bytes) {
  send(app, "DELETE", uri, Body::empty()).await
}
