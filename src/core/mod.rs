//! 核心层：错误处理、中间件、数据源抽象

pub mod error;
pub mod middleware;
pub mod source;
pub mod strict;
