// ==========================================
// 陶瓷生产 OEE 驾驶舱 - OEE 指标领域模型
// ==========================================
// 职责: 定义派生指标 (DerivedMetrics) 与计算结果 (OeeReport)
// 红线: 派生指标不存储,每次读取重新计算
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// DerivedMetrics - 派生指标 (百分比, 0-100 但不强制)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedMetrics {
    pub availability: f64, // 时间开动率 (%)
    pub performance: f64,  // 性能开动率 (%)
    pub quality: f64,      // 合格品率 (%)
    pub oee: f64,          // 设备综合效率 (%)
}

// ==========================================
// StepMetrics - 单道工序的指标
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepMetrics {
    pub step_name: String,
    pub metrics: DerivedMetrics,
}

// ==========================================
// OeeReport - 一次完整计算的输出
// ==========================================
// per_step 保持输入顺序 (即生产顺序)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OeeReport {
    pub per_step: Vec<StepMetrics>,
    pub aggregate: DerivedMetrics, // 各指标的算术平均 (不加权)
}

impl OeeReport {
    /// 按工序名称查找指标
    pub fn get(&self, step_name: &str) -> Option<&DerivedMetrics> {
        self.per_step
            .iter()
            .find(|s| s.step_name == step_name)
            .map(|s| &s.metrics)
    }

    pub fn step_count(&self) -> usize {
        self.per_step.len()
    }
}
