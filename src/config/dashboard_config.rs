// ==========================================
// 陶瓷生产 OEE 驾驶舱 - 驾驶舱配置
// ==========================================
// 职责: 汇总目标值、分级阈值、截断开关、语言
// 来源: 默认值,或通过 DashboardConfigReader 逐项读取
// ==========================================

use serde::{Deserialize, Serialize};

use crate::config::config_reader_trait::DashboardConfigReader;
use crate::config::error::ConfigResult;
use crate::config::{
    DEFAULT_LOCALE, DEFAULT_OEE_TARGET_PCT, DEFAULT_TIER_HIGH_THRESHOLD_PCT,
    DEFAULT_TIER_MID_THRESHOLD_PCT,
};
use crate::engine::{OeeCalculator, OeeTierClassifier};

/// 驾驶舱配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// OEE 目标值 (%),用于 KPI 差值与总 OEE 仪表盘参考线
    pub oee_target_pct: f64,

    /// 中档下限 (%),低于该值为 Low
    pub tier_mid_threshold_pct: f64,

    /// 高档下限 (%),达到该值为 High
    pub tier_high_threshold_pct: f64,

    /// 是否把 A/P/Q 截断到 [0, 100]
    #[serde(default)]
    pub clamp_percentages: bool,

    /// 报表语言 ("zh-CN" / "en")
    pub locale: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            oee_target_pct: DEFAULT_OEE_TARGET_PCT,
            tier_mid_threshold_pct: DEFAULT_TIER_MID_THRESHOLD_PCT,
            tier_high_threshold_pct: DEFAULT_TIER_HIGH_THRESHOLD_PCT,
            clamp_percentages: false,
            locale: DEFAULT_LOCALE.to_string(),
        }
    }
}

impl DashboardConfig {
    /// 从配置读取器逐项装配
    pub async fn load(reader: &dyn DashboardConfigReader) -> ConfigResult<Self> {
        let config = Self {
            oee_target_pct: reader.get_oee_target_pct().await?,
            tier_mid_threshold_pct: reader.get_tier_mid_threshold_pct().await?,
            tier_high_threshold_pct: reader.get_tier_high_threshold_pct().await?,
            clamp_percentages: reader.get_clamp_percentages().await?,
            locale: reader.get_locale().await?,
        };

        // 阈值组合非法时直接报错,不静默回退
        config.tier_classifier()?;

        tracing::info!(
            oee_target_pct = config.oee_target_pct,
            tier_mid = config.tier_mid_threshold_pct,
            tier_high = config.tier_high_threshold_pct,
            clamp = config.clamp_percentages,
            locale = %config.locale,
            "驾驶舱配置已加载"
        );
        Ok(config)
    }

    pub fn tier_classifier(&self) -> ConfigResult<OeeTierClassifier> {
        OeeTierClassifier::new(self.tier_mid_threshold_pct, self.tier_high_threshold_pct)
    }

    pub fn calculator(&self) -> OeeCalculator {
        OeeCalculator::with_clamp(self.clamp_percentages)
    }
}
