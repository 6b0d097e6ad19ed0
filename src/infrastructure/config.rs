//! 服务配置
//!
//! 先取默认值（或 `APP_CONFIG` 指定的 TOML 文件），再用环境变量覆盖。

use serde::{Deserialize, Serialize};
use std::fs;
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

/// 服务配置结构
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP 服务配置
    pub http: HttpConfig,
    /// 数据源配置
    pub data: DataConfig,
    /// 日志配置
    pub logging: LoggingConfig,
}

/// HTTP 服务配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// 绑定地址
    pub bind_address: String,
    /// HTTP 服务端口
    pub port: u16,
    /// 请求超时时间（秒）
    pub timeout_seconds: u64,
}

/// 数据源类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// 内置示例数据
    #[default]
    Memory,
    /// 数据目录下的 YAML 文件
    File,
}

/// 数据源配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    pub source: SourceKind,
    /// 存放 orders.yaml 和 users.yaml 的目录
    pub dir: PathBuf,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 日志级别 (trace, debug, info, warn, error)
    pub level: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            port: 8080,
            timeout_seconds: 30,
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            source: SourceKind::Memory,
            dir: PathBuf::from("./data"),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl FromStr for SourceKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(SourceKind::Memory),
            "file" => Ok(SourceKind::File),
            other => Err(ConfigError::Validation(format!(
                "无效的数据源类型: {}，有效值: memory, file",
                other
            ))),
        }
    }
}

impl HttpConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self.bind_address.trim().parse().map_err(|e| {
            ConfigError::Validation(format!("无效的绑定地址 {}: {}", self.bind_address, e))
        })?;
        Ok(SocketAddr::new(ip, self.port))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Config {
    /// 从进程环境加载配置
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match std::env::var("APP_CONFIG") {
            Ok(path) => Self::load_from_file(path)?,
            Err(_) => Self::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// 从配置文件加载配置
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::FileRead(e.to_string()))?;

        let mut config: Config =
            toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.logging.level = config.logging.level.to_ascii_lowercase();

        Ok(config)
    }

    /// 用环境变量覆盖配置项
    ///
    /// 只设置了 `DATA_DIR` 而没有设置 `DATA_SOURCE` 时，使用文件数据源。
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup("DATA_DIR") {
            self.data.dir = PathBuf::from(dir);
            self.data.source = SourceKind::File;
        }
        if let Some(source) = lookup("DATA_SOURCE") {
            self.data.source = source.parse()?;
        }
        if let Some(address) = lookup("HTTP_BIND_ADDRESS") {
            self.http.bind_address = address;
        }
        if let Some(port) = lookup("HTTP_PORT") {
            self.http.port = parse_number("HTTP_PORT", &port)?;
        }
        if let Some(timeout) = lookup("HTTP_TIMEOUT_SECONDS") {
            self.http.timeout_seconds = parse_number("HTTP_TIMEOUT_SECONDS", &timeout)?;
        }
        if let Some(level) = lookup("LOG_LEVEL") {
            self.logging.level = level.to_ascii_lowercase();
        }
        Ok(())
    }

    /// 验证配置的有效性
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.http.port == 0 {
            return Err(ConfigError::Validation("HTTP端口必须大于0".to_string()));
        }
        if self.http.bind_address.is_empty() {
            return Err(ConfigError::Validation("绑定地址不能为空".to_string()));
        }
        if self.http.timeout_seconds == 0 {
            return Err(ConfigError::Validation("请求超时时间必须大于0".to_string()));
        }

        // 数据文件每次请求都会重新读取，启动时不检查目录是否存在
        if self.data.source == SourceKind::File && self.data.dir.as_os_str().is_empty() {
            return Err(ConfigError::Validation("数据目录不能为空".to_string()));
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::Validation(format!(
                "无效的日志级别: {}，有效值: {:?}",
                self.logging.level, valid_levels
            )));
        }

        Ok(())
    }
}

fn parse_number<N: FromStr>(key: &str, value: &str) -> Result<N, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Validation(format!("{} 不是有效的数字: {}", key, value)))
}

/// 配置错误类型
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("文件读取错误: {0}")]
    FileRead(String),
    #[error("配置解析错误: {0}")]
    Parse(String),
    #[error("配置验证错误: {0}")]
    Validation(String),
}
