// ==========================================
// 陶瓷生产 OEE 驾驶舱 - 工序台账错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

use crate::domain::step::StepField;

/// 工序台账错误类型
///
/// 两类错误均可恢复: 操作被拒绝,台账保持原值
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("工序未找到: {step_name}")]
    NotFound { step_name: String },

    #[error("字段值越界: step={step_name}, field={field}, value={value}, 最小值={min}")]
    Validation {
        step_name: String,
        field: StepField,
        value: i64,
        min: i64,
    },
}

/// Result 类型别名
pub type LedgerResult<T> = Result<T, LedgerError>;
