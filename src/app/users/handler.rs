//! 用户处理器

use axum::{extract::State, response::Json, routing::get, Router};

use super::{model::User, service::UserService};
use crate::core::error::CoreError;

#[derive(Clone)]
pub struct AppState {
    pub user_service: UserService,
}

pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, CoreError> {
    let users = state.user_service.list_users().await?;
    Ok(Json(users))
}

pub fn router(user_service: UserService) -> Router {
    Router::new()
        .route("/users", get(list_users))
        .with_state(AppState { user_service })
}
