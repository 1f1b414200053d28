// ==========================================
// Mock 配置实现 - 用于集成测试
// ==========================================

use async_trait::async_trait;
use ceramic_oee::config::{ConfigResult, DashboardConfigReader};

/// Mock 配置结构
#[derive(Debug, Clone)]
pub struct MockConfig {
    pub oee_target_pct: f64,
    pub tier_mid_threshold_pct: f64,
    pub tier_high_threshold_pct: f64,
    pub clamp_percentages: bool,
    pub locale: String,
}

impl MockConfig {
    /// 创建默认配置
    pub fn default() -> Self {
        Self {
            oee_target_pct: 85.0,
            tier_mid_threshold_pct: 70.0,
            tier_high_threshold_pct: 85.0,
            clamp_percentages: false,
            locale: "zh-CN".to_string(),
        }
    }

    /// 创建自定义目标值配置
    pub fn with_target(target: f64) -> Self {
        let mut config = Self::default();
        config.oee_target_pct = target;
        config
    }

    /// 创建自定义阈值配置
    pub fn with_thresholds(mid: f64, high: f64) -> Self {
        let mut config = Self::default();
        config.tier_mid_threshold_pct = mid;
        config.tier_high_threshold_pct = high;
        config
    }

    /// 创建截断配置
    pub fn clamped() -> Self {
        let mut config = Self::default();
        config.clamp_percentages = true;
        config
    }
}

#[async_trait]
impl DashboardConfigReader for MockConfig {
    async fn get_oee_target_pct(&self) -> ConfigResult<f64> {
        Ok(self.oee_target_pct)
    }

    async fn get_tier_mid_threshold_pct(&self) -> ConfigResult<f64> {
        Ok(self.tier_mid_threshold_pct)
    }

    async fn get_tier_high_threshold_pct(&self) -> ConfigResult<f64> {
        Ok(self.tier_high_threshold_pct)
    }

    async fn get_clamp_percentages(&self) -> ConfigResult<bool> {
        Ok(self.clamp_percentages)
    }

    async fn get_locale(&self) -> ConfigResult<String> {
        Ok(self.locale.clone())
    }
}
