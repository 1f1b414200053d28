// ==========================================
// 陶瓷生产 OEE 驾驶舱 - 核心库
// ==========================================
// 系统定位: 10 道陶瓷工序的 OEE 计算与驾驶舱视图
// 结构: 工序台账 (唯一可变状态) + 纯计算引擎 + 展示层 API
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "zh-CN");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 台账层 - 工序原始数据
pub mod ledger;

// 引擎层 - OEE 计算
pub mod engine;

// 配置层 - 目标值与分级阈值
pub mod config;

// 数据库基础设施（配置库连接）
pub mod db;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// API 层 - 驾驶舱接口
pub mod api;

// 应用层 - 装配与报表
pub mod app;

// ==========================================
// 重导出核心类型
// ==========================================

pub use domain::{
    DerivedMetrics, EditEntry, EditLog, OeeReport, OeeTier, StepField, StepMetrics, StepRecord,
    STEP_NAMES,
};
pub use ledger::{LedgerError, StepLedger};
pub use engine::{CalcError, OeeCalculator, OeeTierClassifier, ValueAddedAnalyzer};
pub use config::{ConfigManager, DashboardConfig};
pub use api::{ApiError, ApiResult, DashboardApi, DashboardSnapshot};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "陶瓷生产 OEE 驾驶舱";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
