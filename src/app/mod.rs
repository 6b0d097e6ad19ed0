//! 应用层：订单和用户两个资源

pub mod orders;
pub mod users;

use axum::{middleware, Router};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use tracing::info;

use crate::core::middleware::{fallback, request_logging_middleware};
use crate::infrastructure::config::{Config, SourceKind};
use orders::OrderService;
use users::UserService;

/// 按配置选择数据源并组装完整路由
pub fn router(config: &Config) -> Router {
    let (order_service, user_service) = match config.data.source {
        SourceKind::Memory => (OrderService::in_memory(), UserService::in_memory()),
        SourceKind::File => (
            OrderService::from_dir(&config.data.dir),
            UserService::from_dir(&config.data.dir),
        ),
    };

    info!("订单数据源: {}", order_service.describe());
    info!("用户数据源: {}", user_service.describe());

    Router::new()
        .merge(orders::handler::router(order_service))
        .merge(users::handler::router(user_service))
        .fallback(fallback)
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(config.http.timeout()))
}
