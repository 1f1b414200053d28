// ==========================================
// 陶瓷生产 OEE 驾驶舱 - 领域模型层
// ==========================================
// 职责: 定义工序记录、派生指标、编辑日志与领域类型
// 红线: 不含计算逻辑,不含展示逻辑
// ==========================================

pub mod edit_log;
pub mod metrics;
pub mod step;
pub mod types;

// 重导出核心类型
pub use edit_log::{EditEntry, EditLog};
pub use metrics::{DerivedMetrics, OeeReport, StepMetrics};
pub use step::{seed_records, StepField, StepRecord, STEP_NAMES};
pub use types::{EditSection, OeeTier};
