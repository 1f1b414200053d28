// ==========================================
// 陶瓷生产 OEE 驾驶舱 - 驾驶舱 API
// ==========================================
// 职责: 展示层的唯一入口
// 1. 工序选择 (选择器状态)
// 2. 字段编辑 → 写入台账 → 记录编辑日志
// 3. 每次读取重新计算 KPI / 仪表盘 / 饼图 / 堆叠柱状图 / 绩效表
// 架构: API 层 → Ledger (状态) + Engine (纯计算)
// ==========================================

use crate::api::dto::{
    DashboardSnapshot, GaugePanel, GaugeView, KpiCards, PerformanceRow, QualitySplit,
};
use crate::api::error::{ApiError, ApiResult};
use crate::config::DashboardConfig;
use crate::domain::edit_log::{EditEntry, EditLog};
use crate::domain::metrics::OeeReport;
use crate::domain::step::{StepField, StepRecord, STEP_NAMES};
use crate::engine::{
    OeeCalculator, OeeTierClassifier, ValueAddedAnalyzer, ValueAddedBreakdown, ValueAddedSeries,
};
use crate::ledger::StepLedger;

/// 快照中附带的最近编辑条数
pub const RECENT_EDITS_IN_SNAPSHOT: usize = 5;

// ==========================================
// DashboardApi - 驾驶舱 API
// ==========================================

/// 驾驶舱API
///
/// 持有会话内唯一的工序台账;所有写入经由本对象,
/// 所有读取都从台账当前状态重新计算,不缓存。
pub struct DashboardApi {
    ledger: StepLedger,
    selected_step: String,
    config: DashboardConfig,
    calculator: OeeCalculator,
    classifier: OeeTierClassifier,
    edit_log: EditLog,
}

impl DashboardApi {
    /// 使用种子台账创建
    ///
    /// # 返回
    /// - Err(ApiError::ConfigError): 分级阈值配置非法
    pub fn new(config: DashboardConfig) -> ApiResult<Self> {
        Self::with_ledger(StepLedger::seeded(), config)
    }

    /// 使用指定台账创建 (默认选中第一道工序)
    pub fn with_ledger(ledger: StepLedger, config: DashboardConfig) -> ApiResult<Self> {
        let classifier = config.tier_classifier()?;
        let calculator = config.calculator();
        let selected_step = ledger
            .step_names()
            .first()
            .map(|s| s.to_string())
            .unwrap_or_else(|| STEP_NAMES[0].to_string());

        Ok(Self {
            ledger,
            selected_step,
            config,
            calculator,
            classifier,
            edit_log: EditLog::new(),
        })
    }

    // ==========================================
    // 选择器 / 台账访问
    // ==========================================

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn ledger(&self) -> &StepLedger {
        &self.ledger
    }

    pub fn step_names(&self) -> Vec<&str> {
        self.ledger.step_names()
    }

    pub fn selected_step(&self) -> &str {
        &self.selected_step
    }

    /// 切换选中工序
    pub fn select_step(&mut self, step_name: &str) -> ApiResult<()> {
        self.ledger.get(step_name)?;
        self.selected_step = step_name.to_string();
        tracing::debug!(step_name = step_name, "切换选中工序");
        Ok(())
    }

    pub fn step_record(&self, step_name: &str) -> ApiResult<&StepRecord> {
        Ok(self.ledger.get(step_name)?)
    }

    pub fn records(&self) -> &[StepRecord] {
        self.ledger.all()
    }

    // ==========================================
    // 写入
    // ==========================================

    /// 按字段名修改 (字段名接受 snake_case 或报表列名)
    pub fn update_field(&mut self, step_name: &str, field_name: &str, value: i64) -> ApiResult<()> {
        let field: StepField = field_name.parse().map_err(ApiError::InvalidInput)?;
        self.set_field(step_name, field, value)
    }

    /// 修改单个字段并记录编辑日志
    ///
    /// 失败时台账与编辑日志均不变
    pub fn set_field(&mut self, step_name: &str, field: StepField, value: i64) -> ApiResult<()> {
        let old_value = self.ledger.set(step_name, field, value)?;
        let entry = EditEntry::new(step_name, field, old_value, value);

        tracing::info!(
            edit_id = %entry.edit_id,
            step_name = step_name,
            field = %field,
            section = %entry.section,
            old_value,
            new_value = value,
            "工序字段已修改"
        );
        self.edit_log.record(entry);
        Ok(())
    }

    pub fn edit_log(&self) -> &EditLog {
        &self.edit_log
    }

    // ==========================================
    // 读取 (每次重新计算)
    // ==========================================

    pub fn compute(&self) -> ApiResult<OeeReport> {
        Ok(self.calculator.compute_ledger(&self.ledger)?)
    }

    pub fn kpi_cards(&self) -> ApiResult<KpiCards> {
        Ok(self.build_kpi(&self.compute()?))
    }

    pub fn gauges(&self) -> ApiResult<GaugePanel> {
        self.build_gauges(&self.compute()?)
    }

    pub fn quality_split(&self) -> ApiResult<QualitySplit> {
        self.build_quality_split(&self.compute()?)
    }

    pub fn value_added_series(&self) -> ValueAddedSeries {
        ValueAddedAnalyzer::series(self.ledger.all())
    }

    pub fn value_added_breakdown(&self) -> Vec<ValueAddedBreakdown> {
        ValueAddedAnalyzer::breakdown_all(self.ledger.all())
    }

    pub fn performance_table(&self) -> ApiResult<Vec<PerformanceRow>> {
        Ok(self.build_table(&self.compute()?))
    }

    /// 全部部件的一次性快照 (基于同一次计算结果)
    pub fn snapshot(&self) -> ApiResult<DashboardSnapshot> {
        let report = self.compute()?;

        Ok(DashboardSnapshot {
            selected_step: self.selected_step.clone(),
            kpi: self.build_kpi(&report),
            gauges: self.build_gauges(&report)?,
            quality_split: self.build_quality_split(&report)?,
            value_added: self.value_added_series(),
            table: self.build_table(&report),
            aggregate: report.aggregate,
            recent_edits: self
                .edit_log
                .recent(RECENT_EDITS_IN_SNAPSHOT)
                .into_iter()
                .cloned()
                .collect(),
        })
    }

    // ==========================================
    // 视图装配
    // ==========================================

    fn build_kpi(&self, report: &OeeReport) -> KpiCards {
        let agg = &report.aggregate;
        KpiCards {
            avg_availability: agg.availability,
            avg_performance: agg.performance,
            avg_quality: agg.quality,
            avg_oee: agg.oee,
            oee_target_pct: self.config.oee_target_pct,
            oee_delta_vs_target: agg.oee - self.config.oee_target_pct,
        }
    }

    fn build_gauges(&self, report: &OeeReport) -> ApiResult<GaugePanel> {
        let selected = self.selected_metrics(report)?;
        let target = self.config.oee_target_pct;
        let avg_oee = report.aggregate.oee;

        Ok(GaugePanel {
            total_oee: GaugeView {
                title_key: "gauge.total_oee".to_string(),
                value: avg_oee,
                reference: Some(target),
                delta: Some(avg_oee - target),
                tier: Some(self.classifier.classify(avg_oee)),
            },
            selected_availability: GaugeView {
                title_key: "gauge.availability".to_string(),
                value: selected.availability,
                reference: None,
                delta: None,
                tier: None,
            },
            selected_performance: GaugeView {
                title_key: "gauge.performance".to_string(),
                value: selected.performance,
                reference: None,
                delta: None,
                tier: None,
            },
        })
    }

    fn build_quality_split(&self, report: &OeeReport) -> ApiResult<QualitySplit> {
        let quality = self.selected_metrics(report)?.quality;
        Ok(QualitySplit {
            step_name: self.selected_step.clone(),
            good_pct: quality,
            reject_pct: 100.0 - quality,
        })
    }

    fn build_table(&self, report: &OeeReport) -> Vec<PerformanceRow> {
        self.ledger
            .all()
            .iter()
            .zip(report.per_step.iter())
            .map(|(r, s)| PerformanceRow {
                step_name: r.step_name.clone(),
                planned_run_time_min: r.planned_run_time_min,
                actual_run_time_min: r.actual_run_time_min,
                ideal_output: r.ideal_output,
                actual_output: r.actual_output,
                total_output: r.total_output,
                good_output: r.good_output,
                value_added_min: r.value_added_min,
                non_value_added_min: r.non_value_added_min,
                necessary_non_value_added_min: r.necessary_non_value_added_min,
                availability: s.metrics.availability,
                performance: s.metrics.performance,
                quality: s.metrics.quality,
                oee: s.metrics.oee,
                tier: self.classifier.classify(s.metrics.oee),
            })
            .collect()
    }

    fn selected_metrics<'a>(
        &self,
        report: &'a OeeReport,
    ) -> ApiResult<&'a crate::domain::metrics::DerivedMetrics> {
        report
            .get(&self.selected_step)
            .ok_or_else(|| ApiError::NotFound(format!("工序(name={})不存在", self.selected_step)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::OeeTier;

    fn api() -> DashboardApi {
        DashboardApi::new(DashboardConfig::default()).unwrap()
    }

    #[test]
    fn test_default_selection() {
        assert_eq!(api().selected_step(), "Step 1: Batching");
    }

    #[test]
    fn test_select_unknown_step() {
        let mut api = api();
        assert!(matches!(api.select_step("Step 0"), Err(ApiError::NotFound(_))));
        assert_eq!(api.selected_step(), "Step 1: Batching");
    }

    #[test]
    fn test_update_field_unknown_name() {
        let mut api = api();
        let err = api.update_field("Step 1: Batching", "speed", 5).unwrap_err();
        assert!(matches!(err, ApiError::InvalidInput(_)));
        assert!(api.edit_log().is_empty());
    }

    #[test]
    fn test_failed_write_not_logged() {
        let mut api = api();
        let err = api.update_field("Step 1: Batching", "TotalOutput", 0).unwrap_err();
        assert!(matches!(err, ApiError::ValidationError(_)));
        assert!(api.edit_log().is_empty());
        assert_eq!(api.step_record("Step 1: Batching").unwrap().total_output, 960);
    }

    #[test]
    fn test_quality_split_follows_selection() {
        let mut api = api();
        api.select_step("Step 10: Selection & Packing").unwrap();
        let split = api.quality_split().unwrap();
        assert_eq!(split.step_name, "Step 10: Selection & Packing");
        assert!((split.good_pct - 980.0 / 990.0 * 100.0).abs() < 1e-9);
        assert!((split.good_pct + split.reject_pct - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_table_tiers() {
        let mut api = api();
        // 实际运行时间减半使该工序跌入低档
        api.set_field("Step 8: Firing", StepField::ActualRunTime, 200).unwrap();
        let table = api.performance_table().unwrap();
        assert_eq!(table.len(), 10);
        assert_eq!(table[7].tier, OeeTier::Low);
        assert_eq!(table[9].tier, OeeTier::High);
    }
}
