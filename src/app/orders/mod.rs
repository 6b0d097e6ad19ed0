//! 订单资源

pub mod handler;
pub mod model;
pub mod service;

pub use model::{Order, OrderDate};
pub use service::OrderService;
