// ==========================================
// 陶瓷生产 OEE 驾驶舱 - OEE 计算引擎
// ==========================================
// 职责: 由台账快照计算每道工序的 A/P/Q/OEE 以及全工序平均值
// 输入: &[StepRecord]
// 输出: OeeReport
// 红线: 纯函数,无副作用,无缓存;分母为 0 时报错而不是返回 inf/NaN
// ==========================================

use thiserror::Error;

use crate::domain::metrics::{DerivedMetrics, OeeReport, StepMetrics};
use crate::domain::step::{StepField, StepRecord};
use crate::ledger::StepLedger;

/// 计算错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    #[error("除数为零: step={step_name}, field={field}")]
    DivisionByZero { step_name: String, field: StepField },

    #[error("台账为空,无法计算平均值")]
    EmptyLedger,
}

pub type CalcResult<T> = Result<T, CalcError>;

// ==========================================
// OeeCalculator - OEE 计算引擎
// ==========================================
#[derive(Debug, Clone, Copy, Default)]
pub struct OeeCalculator {
    // 是否把 A/P/Q 截断到 [0, 100] (默认不截断)
    clamp_percentages: bool,
}

impl OeeCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_clamp(clamp_percentages: bool) -> Self {
        Self { clamp_percentages }
    }

    pub fn clamps_percentages(&self) -> bool {
        self.clamp_percentages
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 计算全部工序指标与平均值
    ///
    /// # 返回
    /// - Ok(OeeReport): per_step 与输入顺序一致
    /// - Err(CalcError::DivisionByZero): 任一工序分母字段为 0
    /// - Err(CalcError::EmptyLedger): 输入为空
    pub fn compute(&self, records: &[StepRecord]) -> CalcResult<OeeReport> {
        if records.is_empty() {
            return Err(CalcError::EmptyLedger);
        }

        let per_step = records
            .iter()
            .map(|record| {
                self.compute_step(record).map(|metrics| StepMetrics {
                    step_name: record.step_name.clone(),
                    metrics,
                })
            })
            .collect::<CalcResult<Vec<_>>>()?;

        let aggregate = mean_metrics(&per_step);

        tracing::debug!(
            steps = per_step.len(),
            avg_oee = aggregate.oee,
            clamp = self.clamp_percentages,
            "OEE 计算完成"
        );

        Ok(OeeReport {
            per_step,
            aggregate,
        })
    }

    /// 计算台账当前状态
    pub fn compute_ledger(&self, ledger: &StepLedger) -> CalcResult<OeeReport> {
        self.compute(ledger.all())
    }

    /// 单道工序指标 (只依赖该工序自身记录)
    pub fn compute_step(&self, record: &StepRecord) -> CalcResult<DerivedMetrics> {
        let availability = self.percentage(
            record,
            record.actual_run_time_min,
            record.planned_run_time_min,
            StepField::PlannedRunTime,
        )?;
        let performance = self.percentage(
            record,
            record.actual_output,
            record.ideal_output,
            StepField::IdealOutput,
        )?;
        let quality = self.percentage(
            record,
            record.good_output,
            record.total_output,
            StepField::TotalOutput,
        )?;

        Ok(DerivedMetrics {
            availability,
            performance,
            quality,
            oee: availability * performance * quality / 10000.0,
        })
    }

    fn percentage(
        &self,
        record: &StepRecord,
        numerator: i64,
        denominator: i64,
        denominator_field: StepField,
    ) -> CalcResult<f64> {
        if denominator == 0 {
            return Err(CalcError::DivisionByZero {
                step_name: record.step_name.clone(),
                field: denominator_field,
            });
        }

        let pct = numerator as f64 / denominator as f64 * 100.0;
        if self.clamp_percentages {
            Ok(pct.clamp(0.0, 100.0))
        } else {
            Ok(pct)
        }
    }
}

/// 各指标独立取算术平均 (调用方保证非空)
fn mean_metrics(per_step: &[StepMetrics]) -> DerivedMetrics {
    let n = per_step.len() as f64;
    let sum = per_step.iter().fold(
        DerivedMetrics {
            availability: 0.0,
            performance: 0.0,
            quality: 0.0,
            oee: 0.0,
        },
        |acc, s| DerivedMetrics {
            availability: acc.availability + s.metrics.availability,
            performance: acc.performance + s.metrics.performance,
            quality: acc.quality + s.metrics.quality,
            oee: acc.oee + s.metrics.oee,
        },
    );

    DerivedMetrics {
        availability: sum.availability / n,
        performance: sum.performance / n,
        quality: sum.quality / n,
        oee: sum.oee / n,
    }
}
