// ==========================================
// 陶瓷生产 OEE 驾驶舱 - API 层
// ==========================================
// 职责: 为展示层提供工序选择、字段编辑、驾驶舱视图与导出
// ==========================================

pub mod dashboard_api;
pub mod dto;
pub mod error;
pub mod export;

// 重导出核心类型
pub use dashboard_api::DashboardApi;
pub use dto::{DashboardSnapshot, GaugePanel, GaugeView, KpiCards, PerformanceRow, QualitySplit};
pub use error::{ApiError, ApiResult};
pub use export::write_performance_csv;
