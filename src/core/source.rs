//! 记录数据源
//!
//! 订单和用户共用同一种读取方式：要么是编译进程序的固定列表，
//! 要么是数据目录下的 YAML 文件（每次请求都重新读取，不做缓存）。

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::io;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

/// 数据源错误
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("无法读取数据文件 {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("数据文件格式错误 {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_yaml_bw::Error,
    },
}

impl SourceError {
    /// 出错文件的文件名（不含目录），用于返回给客户端
    pub fn file_name(&self) -> String {
        let path = match self {
            SourceError::Read { path, .. } | SourceError::Parse { path, .. } => path,
        };
        path.file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// 记录数据源 trait
#[async_trait]
pub trait RecordSource<T>: Send + Sync {
    /// 取出全部记录
    async fn fetch(&self) -> Result<Vec<T>, SourceError>;

    /// 数据源描述，用于启动日志
    fn describe(&self) -> String;
}

/// 内存中的固定记录列表
pub struct StaticSource<T> {
    records: Arc<[T]>,
}

impl<T> StaticSource<T> {
    pub fn new(records: Vec<T>) -> Self {
        Self {
            records: records.into(),
        }
    }
}

#[async_trait]
impl<T> RecordSource<T> for StaticSource<T>
where
    T: Clone + Send + Sync + 'static,
{
    async fn fetch(&self) -> Result<Vec<T>, SourceError> {
        Ok(self.records.to_vec())
    }

    fn describe(&self) -> String {
        format!("内存 ({} 条记录)", self.records.len())
    }
}

/// 基于 YAML 文件的数据源
pub struct YamlFileSource<T> {
    path: PathBuf,
    _record: PhantomData<fn() -> T>,
}

impl<T> YamlFileSource<T> {
    /// 以数据目录和文件名构造数据源
    pub fn new(dir: impl AsRef<Path>, file_name: &str) -> Self {
        Self {
            path: dir.as_ref().join(file_name),
            _record: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl<T> RecordSource<T> for YamlFileSource<T>
where
    T: DeserializeOwned + Send + 'static,
{
    async fn fetch(&self) -> Result<Vec<T>, SourceError> {
        info!("读取数据文件: {}", self.path.display());

        let content =
            tokio::fs::read_to_string(&self.path)
                .await
                .map_err(|source| SourceError::Read {
                    path: self.path.clone(),
                    source,
                })?;

        parse_records(&content).map_err(|source| SourceError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    fn describe(&self) -> String {
        format!("文件 {}", self.path.display())
    }
}

/// 空文件和只有注释的文件都视为空列表
fn parse_records<T: DeserializeOwned>(content: &str) -> Result<Vec<T>, serde_yaml_bw::Error> {
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_yaml_bw::from_str(content)
}
