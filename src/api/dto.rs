// ==========================================
// 陶瓷生产 OEE 驾驶舱 - 展示层数据传输对象
// ==========================================
// 职责: 驾驶舱各部件所需的只读视图
// 序列化: serde (JSON 输出)
// ==========================================

use serde::{Deserialize, Serialize};

use crate::domain::edit_log::EditEntry;
use crate::domain::metrics::DerivedMetrics;
use crate::domain::types::OeeTier;
use crate::engine::ValueAddedSeries;

/// KPI 卡片 (4 个平均值 + OEE 与目标差值)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiCards {
    pub avg_availability: f64,
    pub avg_performance: f64,
    pub avg_quality: f64,
    pub avg_oee: f64,
    pub oee_target_pct: f64,
    pub oee_delta_vs_target: f64, // avg_oee - target
}

/// 仪表盘
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaugeView {
    pub title_key: String,      // 国际化键
    pub value: f64,
    pub reference: Option<f64>, // 参考线 (仅总 OEE)
    pub delta: Option<f64>,     // value - reference
    pub tier: Option<OeeTier>,  // 色带分级 (仅总 OEE)
}

/// 三个仪表盘: 总 OEE、所选工序 Availability、所选工序 Performance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaugePanel {
    pub total_oee: GaugeView,
    pub selected_availability: GaugeView,
    pub selected_performance: GaugeView,
}

/// 所选工序的合格/不合格占比
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualitySplit {
    pub step_name: String,
    pub good_pct: f64,
    pub reject_pct: f64, // 100 - good_pct (Quality 超过 100 时为负)
}

/// 工序绩效表的一行
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceRow {
    pub step_name: String,
    pub planned_run_time_min: i64,
    pub actual_run_time_min: i64,
    pub ideal_output: i64,
    pub actual_output: i64,
    pub total_output: i64,
    pub good_output: i64,
    pub value_added_min: i64,
    pub non_value_added_min: i64,
    pub necessary_non_value_added_min: i64,
    pub availability: f64,
    pub performance: f64,
    pub quality: f64,
    pub oee: f64,
    pub tier: OeeTier,
}

/// 驾驶舱完整快照 (每次读取重新计算)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub selected_step: String,
    pub kpi: KpiCards,
    pub gauges: GaugePanel,
    pub quality_split: QualitySplit,
    pub value_added: ValueAddedSeries,
    pub table: Vec<PerformanceRow>,
    pub aggregate: DerivedMetrics,
    pub recent_edits: Vec<EditEntry>, // 最近编辑 (新的在前)
}
