//! 订单业务服务

use std::path::Path;
use std::sync::Arc;
use tracing::error;

use super::model::{Order, OrderDate};
use crate::core::error::CoreError;
use crate::core::source::{RecordSource, StaticSource, YamlFileSource};

/// 订单数据文件名
pub const ORDERS_FILE: &str = "orders.yaml";

#[derive(Clone)]
pub struct OrderService {
    source: Arc<dyn RecordSource<Order>>,
}

impl OrderService {
    pub fn with_source(source: Arc<dyn RecordSource<Order>>) -> Self {
        Self { source }
    }

    /// 使用内置示例订单
    pub fn in_memory() -> Self {
        Self::with_source(Arc::new(StaticSource::new(sample_orders())))
    }

    /// 每次请求都从 `<dir>/orders.yaml` 读取
    pub fn from_dir(dir: impl AsRef<Path>) -> Self {
        Self::with_source(Arc::new(YamlFileSource::<Order>::new(dir, ORDERS_FILE)))
    }

    pub fn describe(&self) -> String {
        self.source.describe()
    }

    pub async fn list_orders(&self) -> Result<Vec<Order>, CoreError> {
        self.source.fetch().await.map_err(|err| {
            error!("订单数据加载失败: {}", err);
            CoreError::from(err)
        })
    }
}

fn order(id: i64, date: &str, user_id: i64, item: &str, quantity: i64) -> Order {
    Order {
        id,
        date: OrderDate(date.to_string()),
        user_id,
        item: item.to_string(),
        quantity,
    }
}

/// 内置示例订单
pub fn sample_orders() -> Vec<Order> {
    vec![
        order(1, "2025-10-26T04:58:33.000Z", 1, "Brotwirschtel", 7),
        order(2, "2025-10-27T04:58:33.000Z", 1, "Kasnocken", 8),
        order(3, "2025-10-29T04:58:33.000Z", 1, "Gsöchts", 9),
        order(4, "2025-10-29T04:58:33.000Z", 2, "Bier", 10),
        order(5, "2025-10-29T04:58:33.000Z", 3, "Klopapier", 10),
        order(6, "2025-10-29T04:58:33.000Z", 3, "Lego", 10),
    ]
}
