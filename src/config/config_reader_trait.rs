// ==========================================
// 陶瓷生产 OEE 驾驶舱 - 配置读取 Trait
// ==========================================
// 职责: 定义驾驶舱所需的配置读取接口 (不包含实现)
// 实现者: ConfigManager (config_kv 表),测试中的 Mock
// 红线: 不包含配置写入、不包含业务逻辑
// ==========================================

use async_trait::async_trait;

use crate::config::error::ConfigResult;

#[async_trait]
pub trait DashboardConfigReader: Send + Sync {
    /// 获取 OEE 目标值 (%)
    ///
    /// # 默认值
    /// - 85.0
    async fn get_oee_target_pct(&self) -> ConfigResult<f64>;

    /// 获取中档下限 (%)
    ///
    /// # 默认值
    /// - 70.0
    async fn get_tier_mid_threshold_pct(&self) -> ConfigResult<f64>;

    /// 获取高档下限 (%)
    ///
    /// # 默认值
    /// - 85.0
    async fn get_tier_high_threshold_pct(&self) -> ConfigResult<f64>;

    /// 是否截断百分比
    ///
    /// # 默认值
    /// - false (保持 Quality/Performance 可超过 100%)
    async fn get_clamp_percentages(&self) -> ConfigResult<bool>;

    /// 获取报表语言
    ///
    /// # 默认值
    /// - "zh-CN"
    async fn get_locale(&self) -> ConfigResult<String>;
}
