// ==========================================
// 陶瓷生产 OEE 驾驶舱 - API层错误类型
// ==========================================
// 职责: 汇总台账/引擎/配置层错误,转换为调用方可展示的错误
// 所有错误均可恢复: 操作被拒绝,状态保持不变
// ==========================================

use crate::config::error::ConfigError;
use crate::engine::oee::CalcError;
use crate::ledger::error::LedgerError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 输入错误
    // ==========================================
    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error("资源未找到: {0}")]
    NotFound(String),

    #[error("数据验证失败: {0}")]
    ValidationError(String),

    // ==========================================
    // 计算错误
    // ==========================================
    #[error("计算失败: {0}")]
    CalculationError(#[from] CalcError),

    // ==========================================
    // 配置/导出错误
    // ==========================================
    #[error("配置错误: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("导出失败: {0}")]
    ExportError(String),
}

// ==========================================
// 从 LedgerError 转换
// ==========================================
impl From<LedgerError> for ApiError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::NotFound { step_name } => {
                ApiError::NotFound(format!("工序(name={})不存在", step_name))
            }
            e @ LedgerError::Validation { .. } => ApiError::ValidationError(e.to_string()),
        }
    }
}

impl From<csv::Error> for ApiError {
    fn from(err: csv::Error) -> Self {
        ApiError::ExportError(err.to_string())
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
