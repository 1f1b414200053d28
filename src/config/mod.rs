// ==========================================
// 陶瓷生产 OEE 驾驶舱 - 配置层
// ==========================================
// 职责: 目标值/分级阈值/截断开关/语言的默认值与覆写
// 存储: config_kv 表 (可选,缺省时使用默认值)
// ==========================================

pub mod config_manager;
pub mod config_reader_trait;
pub mod dashboard_config;
pub mod error;

// 重导出核心配置类型
pub use config_manager::ConfigManager;
pub use config_reader_trait::DashboardConfigReader;
pub use dashboard_config::DashboardConfig;
pub use error::{ConfigError, ConfigResult};

// ==========================================
// 默认值
// ==========================================
pub const DEFAULT_OEE_TARGET_PCT: f64 = 85.0;
pub const DEFAULT_TIER_MID_THRESHOLD_PCT: f64 = 70.0;
pub const DEFAULT_TIER_HIGH_THRESHOLD_PCT: f64 = 85.0;
pub const DEFAULT_LOCALE: &str = "zh-CN";
pub const SUPPORTED_LOCALES: [&str; 2] = ["zh-CN", "en"];

// ==========================================
// 配置键常量
// ==========================================
pub mod config_keys {
    // 目标
    pub const OEE_TARGET_PCT: &str = "oee_target_pct";

    // 分级
    pub const TIER_MID_THRESHOLD_PCT: &str = "tier_mid_threshold_pct";
    pub const TIER_HIGH_THRESHOLD_PCT: &str = "tier_high_threshold_pct";

    // 计算
    pub const CLAMP_PERCENTAGES: &str = "clamp_percentages";

    // 展示
    pub const LOCALE: &str = "locale";
}
