//! 严格的字段反序列化
//!
//! YAML 的普通标量在按 `String` 读取时会被直接转成字符串
//! （`name: 123` 得到 `"123"`）。文本字段用这里的函数读取，只接受字符串标量。

use serde::de::{self, Deserializer, Visitor};
use std::fmt;

/// 只接受字符串标量
pub fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    struct StringOnly;

    impl<'de> Visitor<'de> for StringOnly {
        type Value = String;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("字符串")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<String, E> {
            Ok(value.to_string())
        }

        fn visit_string<E: de::Error>(self, value: String) -> Result<String, E> {
            Ok(value)
        }
    }

    deserializer.deserialize_any(StringOnly)
}
