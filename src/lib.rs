//! # 订单和用户数据服务
//!
//! 提供两个只读的 JSON 接口：
//! - `GET /orders`：订单列表
//! - `GET /users`：用户列表
//!
//! 数据来自内置示例数据，或数据目录下的 `orders.yaml` / `users.yaml`
//! （每次请求重新读取）。

pub mod app;
pub mod core;
pub mod infrastructure;

pub use app::router;
pub use infrastructure::config::Config;
