//! 核心错误处理模块

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use super::source::SourceError;

/// 核心错误类型
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("资源不存在: {0}")]
    NotFound(String),
    #[error(transparent)]
    DataSource(#[from] SourceError),
}

/// 错误响应结构
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub code: u16,
    pub timestamp: String,
}

impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        let (status, error_message, user_message) = match self {
            CoreError::NotFound(path) => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                format!("资源不存在: {}", path),
            ),
            CoreError::DataSource(err) => {
                let message = match &err {
                    SourceError::Read { .. } => format!("无法读取数据文件 {}", err.file_name()),
                    SourceError::Parse { .. } => format!("数据文件格式错误 {}", err.file_name()),
                };
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DATA_SOURCE_UNAVAILABLE",
                    message,
                )
            }
        };

        let error_response = ErrorResponse {
            error: error_message.to_string(),
            message: user_message,
            code: status.as_u16(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        };

        (status, axum::Json(error_response)).into_response()
    }
}
