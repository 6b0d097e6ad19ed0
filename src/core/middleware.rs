//! 核心中间件模块

use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;
use tracing::{info, warn};

/// 请求日志中间件
pub async fn request_logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();
    let user_agent = req
        .headers()
        .get("user-agent")
        .and_then(|h| h.to_str().ok())
        .map(|s| s.to_string());

    let response = next.run(req).await;
    let status = response.status();
    let duration = start.elapsed();

    if status.is_server_error() {
        warn!(
            "{} {} - {} - {}ms - User-Agent: {:?}",
            method,
            uri,
            status,
            duration.as_millis(),
            user_agent
        );
    } else {
        info!(
            "{} {} - {} - {}ms - User-Agent: {:?}",
            method,
            uri,
            status,
            duration.as_millis(),
            user_agent
        );
    }

    response
}

/// 未匹配路由的兜底处理器
pub async fn fallback(uri: axum::http::Uri) -> super::error::CoreError {
    super::error::CoreError::NotFound(uri.path().to_string())
}
