//! 用户业务服务

use std::path::Path;
use std::sync::Arc;
use tracing::error;

use super::model::User;
use crate::core::error::CoreError;
use crate::core::source::{RecordSource, StaticSource, YamlFileSource};

/// 用户数据文件名
pub const USERS_FILE: &str = "users.yaml";

#[derive(Clone)]
pub struct UserService {
    source: Arc<dyn RecordSource<User>>,
}

impl UserService {
    pub fn with_source(source: Arc<dyn RecordSource<User>>) -> Self {
        Self { source }
    }

    pub fn in_memory() -> Self {
        Self::with_source(Arc::new(StaticSource::new(sample_users())))
    }

    pub fn from_dir(dir: impl AsRef<Path>) -> Self {
        Self::with_source(Arc::new(YamlFileSource::<User>::new(dir, USERS_FILE)))
    }

    pub fn describe(&self) -> String {
        self.source.describe()
    }

    pub async fn list_users(&self) -> Result<Vec<User>, CoreError> {
        self.source.fetch().await.map_err(|err| {
            error!("用户数据加载失败: {}", err);
            CoreError::from(err)
        })
    }
}

/// 内置示例用户
pub fn sample_users() -> Vec<User> {
    [
        (1, "Hubert", "alice@example.com"),
        (2, "Leon", "bob@example.com"),
        (3, "Erik", "charlie@example.com"),
    ]
    .into_iter()
    .map(|(id, name, email)| User {
        id,
        name: name.to_string(),
        email: email.to_string(),
    })
    .collect()
}
