//! 订单数据模型

use chrono::DateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Order {
    pub id: i64,
    pub date: OrderDate,
    pub user_id: i64,
    #[serde(deserialize_with = "crate::core::strict::string")]
    pub item: String,
    pub quantity: i64,
}

/// 订单时间
///
/// 只接受 `YYYY-MM-DDTHH:MM:SS[.fff]Z` 或 `...+00:00` 形式的 UTC 时间戳，
/// 分隔符必须是大写 `T`。
/// 原始字符串原样保留，输出时不会丢失毫秒等精度信息。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OrderDate(pub(super) String);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OrderDateError {
    #[error("无效的时间格式 '{0}'，需要 RFC 3339 格式")]
    Format(String),
    #[error("时间 '{0}' 不是 UTC 时间")]
    NotUtc(String),
}

impl OrderDate {
    pub fn parse(value: impl Into<String>) -> Result<Self, OrderDateError> {
        let value = value.into();
        let parsed = match DateTime::parse_from_rfc3339(&value) {
            Ok(parsed) => parsed,
            Err(_) => return Err(OrderDateError::Format(value)),
        };
        // RFC 3339 也允许空格、小写 t/z 和 -00:00，这里只收一种写法
        if value.as_bytes().get(10) != Some(&b'T') {
            return Err(OrderDateError::Format(value));
        }
        if parsed.offset().local_minus_utc() != 0 {
            return Err(OrderDateError::NotUtc(value));
        }
        if !(value.ends_with('Z') || value.ends_with("+00:00")) {
            return Err(OrderDateError::Format(value));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for OrderDate {
    type Error = OrderDateError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<OrderDate> for String {
    fn from(date: OrderDate) -> Self {
        date.0
    }
}

impl fmt::Display for OrderDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_date_accepts_utc() {
        assert!(OrderDate::parse("2025-10-26T04:58:33.000Z").is_ok());
        assert!(OrderDate::parse("2025-10-26T04:58:33Z").is_ok());
        assert!(OrderDate::parse("2025-10-26T04:58:33+00:00").is_ok());
    }

    #[test]
    fn test_order_date_rejects_invalid() {
        assert!(matches!(
            OrderDate::parse("26.10.2025"),
            Err(OrderDateError::Format(_))
        ));
        assert!(matches!(
            OrderDate::parse("2025-10-26"),
            Err(OrderDateError::Format(_))
        ));
        assert!(matches!(
            OrderDate::parse("2025-10-26T06:58:33+02:00"),
            Err(OrderDateError::NotUtc(_))
        ));
    }

    #[test]
    fn test_order_date_rejects_non_canonical_utc() {
        for value in [
            "2025-01-01 00:00:00Z",
            "2025-01-01t00:00:00Z",
            "2025-01-01T00:00:00z",
            "2025-01-01T00:00:00-00:00",
        ] {
            assert!(
                matches!(OrderDate::parse(value), Err(OrderDateError::Format(_))),
                "{} 不应被接受",
                value
            );
        }
    }

    #[test]
    fn test_order_item_must_be_string() {
        let yaml = "- id: 1\n  date: \"2025-01-01T00:00:00Z\"\n  userId: 1\n  item: 42\n  quantity: 2\n";
        let result: Result<Vec<Order>, _> = serde_yaml_bw::from_str(yaml);
        assert!(result.is_err());

        let yaml = "- id: 1\n  date: \"2025-01-01T00:00:00Z\"\n  userId: 1\n  item: \"42\"\n  quantity: 2\n";
        let orders: Vec<Order> = serde_yaml_bw::from_str(yaml).unwrap();
        assert_eq!(orders[0].item, "42");
    }

    #[test]
    fn test_order_json_keeps_fields_verbatim() {
        let order = Order {
            id: 1,
            date: OrderDate::parse("2025-01-01T00:00:00.000Z").unwrap(),
            user_id: 1,
            item: "Bier".to_string(),
            quantity: 2,
        };

        let json = serde_json::to_string(&order).unwrap();
        assert_eq!(
            json,
            r#"{"id":1,"date":"2025-01-01T00:00:00.000Z","userId":1,"item":"Bier","quantity":2}"#
        );
    }

    #[test]
    fn test_order_yaml_with_invalid_date_fails() {
        let yaml = "- id: 1\n  date: gestern\n  userId: 1\n  item: Bier\n  quantity: 2\n";
        let result: Result<Vec<Order>, _> = serde_yaml_bw::from_str(yaml);
        assert!(result.is_err());
    }
}
