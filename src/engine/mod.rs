// ==========================================
// 陶瓷生产 OEE 驾驶舱 - 引擎层
// ==========================================
// 职责: 纯计算 (OEE 指标、分级、增值分析),不持有状态
// 红线: 引擎不修改台账,不涉及展示
// ==========================================

pub mod oee;
pub mod tier;
pub mod value_added;

// 重导出核心引擎
pub use oee::{CalcError, CalcResult, OeeCalculator};
pub use tier::OeeTierClassifier;
pub use value_added::{ValueAddedAnalyzer, ValueAddedBreakdown, ValueAddedSeries};
