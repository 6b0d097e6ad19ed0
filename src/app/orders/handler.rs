//! 订单处理器

use axum::{extract::State, response::Json, routing::get, Router};

use super::{model::Order, service::OrderService};
use crate::core::error::CoreError;

#[derive(Clone)]
pub struct AppState {
    pub order_service: OrderService,
}

pub async fn list_orders(State(state): State<AppState>) -> Result<Json<Vec<Order>>, CoreError> {
    let orders = state.order_service.list_orders().await?;
    Ok(Json(orders))
}

/// 订单路由
pub fn router(order_service: OrderService) -> Router {
    Router::new()
        .route("/orders", get(list_orders))
        .with_state(AppState { order_service })
}
