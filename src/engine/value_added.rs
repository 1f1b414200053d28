// ==========================================
// 陶瓷生产 OEE 驾驶舱 - 增值分析引擎
// ==========================================
// 职责: VA / NVA / NNVA 时间分解 (精益生产时间分类)
// 输出: 每道工序的分钟数、合计、增值比率;以及堆叠柱状图序列
// ==========================================

use serde::{Deserialize, Serialize};

use crate::domain::step::StepRecord;

/// 单道工序的时间分解
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueAddedBreakdown {
    pub step_name: String,
    pub va_min: i64,
    pub nva_min: i64,
    pub nnva_min: i64,
    pub total_min: Option<i64>,    // 合计溢出 i64 时为 None
    pub va_ratio_pct: Option<f64>, // 合计为 0 或溢出时为 None
}

/// 堆叠柱状图序列 (x 轴为工序)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueAddedSeries {
    pub step_names: Vec<String>,
    pub va: Vec<i64>,
    pub nva: Vec<i64>,
    pub nnva: Vec<i64>,
}

pub struct ValueAddedAnalyzer;

impl ValueAddedAnalyzer {
    pub fn breakdown(record: &StepRecord) -> ValueAddedBreakdown {
        // 三个字段只有下限,合计可能溢出
        let total_min = record
            .value_added_min
            .checked_add(record.non_value_added_min)
            .and_then(|sum| sum.checked_add(record.necessary_non_value_added_min));
        let va_ratio_pct = match total_min {
            Some(total) if total > 0 => Some(record.value_added_min as f64 / total as f64 * 100.0),
            _ => None,
        };

        ValueAddedBreakdown {
            step_name: record.step_name.clone(),
            va_min: record.value_added_min,
            nva_min: record.non_value_added_min,
            nnva_min: record.necessary_non_value_added_min,
            total_min,
            va_ratio_pct,
        }
    }

    pub fn breakdown_all(records: &[StepRecord]) -> Vec<ValueAddedBreakdown> {
        records.iter().map(Self::breakdown).collect()
    }

    pub fn series(records: &[StepRecord]) -> ValueAddedSeries {
        ValueAddedSeries {
            step_names: records.iter().map(|r| r.step_name.clone()).collect(),
            va: records.iter().map(|r| r.value_added_min).collect(),
            nva: records.iter().map(|r| r.non_value_added_min).collect(),
            nnva: records.iter().map(|r| r.necessary_non_value_added_min).collect(),
        }
    }
}
