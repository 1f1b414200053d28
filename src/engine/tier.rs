// ==========================================
// 陶瓷生产 OEE 驾驶舱 - OEE 分级器
// ==========================================
// 职责: 将 OEE 值映射为 Low / Mid / High 三档
// 规则: oee < mid → Low; mid <= oee < high → Mid; oee >= high → High
// ==========================================

use crate::config::error::{ConfigError, ConfigResult};
use crate::config::{DEFAULT_TIER_HIGH_THRESHOLD_PCT, DEFAULT_TIER_MID_THRESHOLD_PCT};
use crate::domain::types::OeeTier;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OeeTierClassifier {
    mid_threshold: f64,
    high_threshold: f64,
}

impl OeeTierClassifier {
    /// 构造分级器
    ///
    /// # 返回
    /// - Err(ConfigError::InvalidValue): 阈值非有限值,或 mid >= high
    pub fn new(mid_threshold: f64, high_threshold: f64) -> ConfigResult<Self> {
        if !mid_threshold.is_finite() || !high_threshold.is_finite() {
            return Err(ConfigError::InvalidValue {
                key: "tier_thresholds".to_string(),
                value: format!("{}/{}", mid_threshold, high_threshold),
            });
        }
        if mid_threshold >= high_threshold {
            return Err(ConfigError::InvalidValue {
                key: "tier_thresholds".to_string(),
                value: format!("mid={} >= high={}", mid_threshold, high_threshold),
            });
        }
        Ok(Self {
            mid_threshold,
            high_threshold,
        })
    }

    pub fn classify(&self, oee: f64) -> OeeTier {
        if oee < self.mid_threshold {
            OeeTier::Low
        } else if oee < self.high_threshold {
            OeeTier::Mid
        } else {
            OeeTier::High
        }
    }

    pub fn mid_threshold(&self) -> f64 {
        self.mid_threshold
    }

    pub fn high_threshold(&self) -> f64 {
        self.high_threshold
    }
}

impl Default for OeeTierClassifier {
    fn default() -> Self {
        Self {
            mid_threshold: DEFAULT_TIER_MID_THRESHOLD_PCT,
            high_threshold: DEFAULT_TIER_HIGH_THRESHOLD_PCT,
        }
    }
}
