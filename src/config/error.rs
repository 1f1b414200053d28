// ==========================================
// 陶瓷生产 OEE 驾驶舱 - 配置层错误类型
// ==========================================

use thiserror::Error;

/// 配置层错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置库访问失败: {0}")]
    Database(String),

    #[error("配置值无效: key={key}, value={value}")]
    InvalidValue { key: String, value: String },
}

impl From<rusqlite::Error> for ConfigError {
    fn from(err: rusqlite::Error) -> Self {
        ConfigError::Database(err.to_string())
    }
}

pub type ConfigResult<T> = Result<T, ConfigError>;
