// ==========================================
// 测试数据构建器 - 用于集成测试
// ==========================================

use ceramic_oee::domain::StepRecord;

// ==========================================
// StepRecord 构建器
// ==========================================
// 默认值为合法且指标整齐的记录 (A=90, P=90, Q=90)

pub struct StepRecordBuilder {
    record: StepRecord,
}

impl StepRecordBuilder {
    pub fn new(step_name: &str) -> Self {
        Self {
            record: StepRecord {
                step_name: step_name.to_string(),
                planned_run_time_min: 100,
                actual_run_time_min: 90,
                ideal_output: 100,
                actual_output: 90,
                total_output: 100,
                good_output: 90,
                value_added_min: 60,
                non_value_added_min: 30,
                necessary_non_value_added_min: 10,
            },
        }
    }

    pub fn run_time(mut self, planned: i64, actual: i64) -> Self {
        self.record.planned_run_time_min = planned;
        self.record.actual_run_time_min = actual;
        self
    }

    pub fn output(mut self, ideal: i64, actual: i64) -> Self {
        self.record.ideal_output = ideal;
        self.record.actual_output = actual;
        self
    }

    pub fn yield_(mut self, total: i64, good: i64) -> Self {
        self.record.total_output = total;
        self.record.good_output = good;
        self
    }

    pub fn value_added(mut self, va: i64, nva: i64, nnva: i64) -> Self {
        self.record.value_added_min = va;
        self.record.non_value_added_min = nva;
        self.record.necessary_non_value_added_min = nnva;
        self
    }

    pub fn build(self) -> StepRecord {
        self.record
    }
}
