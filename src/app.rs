use axum::Router;

use crate::{domains::user::rest::user_routes, state::SharedAppState};

pub fn create_app(state: SharedAppState) -> Router {
  user_routes().with_state(state)
}
