// ==========================================
// 陶瓷生产 OEE 驾驶舱 - 工序记录领域模型
// ==========================================
// 职责: 定义工序记录 (StepRecord)、可编辑字段 (StepField)、初始种子数据
// 红线: 工序名称固定且不可变,数值字段只允许整数
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ==========================================
// 工序名称 (按生产顺序)
// ==========================================
pub const STEP_NAMES: [&str; 10] = [
    "Step 1: Batching",
    "Step 2: Mixing & Grinding",
    "Step 3: Colour Mixing",
    "Step 4: Spray Drying",
    "Step 5: Creating the Tile",
    "Step 6: Drying",
    "Step 7: Print & Glaze",
    "Step 8: Firing",
    "Step 9: Polishing & Squaring",
    "Step 10: Selection & Packing",
];

// ==========================================
// 种子数据 (与 STEP_NAMES 一一对应)
// ==========================================
const SEED_PLANNED_RUN_TIME: [i64; 10] = [480; 10];
const SEED_ACTUAL_RUN_TIME: [i64; 10] = [450, 430, 470, 460, 440, 430, 450, 470, 460, 480];
const SEED_IDEAL_OUTPUT: [i64; 10] = [1000; 10];
const SEED_ACTUAL_OUTPUT: [i64; 10] = [950, 900, 970, 940, 960, 930, 950, 970, 960, 980];
const SEED_TOTAL_OUTPUT: [i64; 10] = [960, 920, 980, 950, 970, 940, 960, 980, 970, 990];
const SEED_GOOD_OUTPUT: [i64; 10] = [940, 880, 960, 930, 950, 920, 940, 960, 950, 980];
const SEED_VA: [i64; 10] = [200, 180, 190, 210, 220, 200, 205, 215, 210, 225];
const SEED_NVA: [i64; 10] = [50, 60, 45, 55, 50, 48, 52, 55, 50, 60];
const SEED_NNVA: [i64; 10] = [20, 30, 25, 22, 20, 25, 23, 22, 21, 25];

// ==========================================
// StepRecord - 工序记录
// ==========================================
// 用途: OEE 计算的原始输入,一道工序一行
// 注意: good_output <= total_output 不做校验 (Quality 可超过 100%)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepRecord {
    // ===== 标识 =====
    pub step_name: String, // 工序名称 (不可变)

    // ===== 运行时间 (生产部门) =====
    pub planned_run_time_min: i64, // 计划运行时间 (分钟, >= 1)
    pub actual_run_time_min: i64,  // 实际运行时间 (分钟, >= 0)

    // ===== 产出 (质检部门) =====
    pub ideal_output: i64,  // 理论产出 (>= 1)
    pub actual_output: i64, // 实际产出 (>= 0)
    pub total_output: i64,  // 总产出 (>= 1)
    pub good_output: i64,   // 合格品 (>= 0)

    // ===== 增值分析 (工程部门) =====
    pub value_added_min: i64,                   // VA (分钟)
    pub non_value_added_min: i64,               // NVA (分钟)
    pub necessary_non_value_added_min: i64,     // NNVA (分钟)
}

impl StepRecord {
    /// 读取指定字段的当前值
    pub fn field_value(&self, field: StepField) -> i64 {
        match field {
            StepField::PlannedRunTime => self.planned_run_time_min,
            StepField::ActualRunTime => self.actual_run_time_min,
            StepField::IdealOutput => self.ideal_output,
            StepField::ActualOutput => self.actual_output,
            StepField::TotalOutput => self.total_output,
            StepField::GoodOutput => self.good_output,
            StepField::ValueAdded => self.value_added_min,
            StepField::NonValueAdded => self.non_value_added_min,
            StepField::NecessaryNonValueAdded => self.necessary_non_value_added_min,
        }
    }

    /// 覆写指定字段 (不做范围校验,校验由 StepLedger 负责)
    pub(crate) fn write_field(&mut self, field: StepField, value: i64) {
        let slot = match field {
            StepField::PlannedRunTime => &mut self.planned_run_time_min,
            StepField::ActualRunTime => &mut self.actual_run_time_min,
            StepField::IdealOutput => &mut self.ideal_output,
            StepField::ActualOutput => &mut self.actual_output,
            StepField::TotalOutput => &mut self.total_output,
            StepField::GoodOutput => &mut self.good_output,
            StepField::ValueAdded => &mut self.value_added_min,
            StepField::NonValueAdded => &mut self.non_value_added_min,
            StepField::NecessaryNonValueAdded => &mut self.necessary_non_value_added_min,
        };
        *slot = value;
    }
}

/// 生成 10 道工序的初始种子数据 (按生产顺序)
pub fn seed_records() -> Vec<StepRecord> {
    STEP_NAMES
        .iter()
        .enumerate()
        .map(|(i, name)| StepRecord {
            step_name: name.to_string(),
            planned_run_time_min: SEED_PLANNED_RUN_TIME[i],
            actual_run_time_min: SEED_ACTUAL_RUN_TIME[i],
            ideal_output: SEED_IDEAL_OUTPUT[i],
            actual_output: SEED_ACTUAL_OUTPUT[i],
            total_output: SEED_TOTAL_OUTPUT[i],
            good_output: SEED_GOOD_OUTPUT[i],
            value_added_min: SEED_VA[i],
            non_value_added_min: SEED_NVA[i],
            necessary_non_value_added_min: SEED_NNVA[i],
        })
        .collect()
}

// ==========================================
// StepField - 可编辑字段
// ==========================================
// 序列化格式: snake_case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepField {
    PlannedRunTime,         // 计划运行时间
    ActualRunTime,          // 实际运行时间
    IdealOutput,            // 理论产出
    ActualOutput,           // 实际产出
    TotalOutput,            // 总产出
    GoodOutput,             // 合格品
    ValueAdded,             // VA
    NonValueAdded,          // NVA
    NecessaryNonValueAdded, // NNVA
}

impl StepField {
    pub const ALL: [StepField; 9] = [
        StepField::PlannedRunTime,
        StepField::ActualRunTime,
        StepField::IdealOutput,
        StepField::ActualOutput,
        StepField::TotalOutput,
        StepField::GoodOutput,
        StepField::ValueAdded,
        StepField::NonValueAdded,
        StepField::NecessaryNonValueAdded,
    ];

    /// 字段允许的最小值
    ///
    /// 分母字段 (计划运行时间/理论产出/总产出) 必须 >= 1,其余 >= 0
    pub fn min_value(&self) -> i64 {
        match self {
            StepField::PlannedRunTime | StepField::IdealOutput | StepField::TotalOutput => 1,
            _ => 0,
        }
    }

    /// snake_case 字段名
    pub fn as_str(&self) -> &'static str {
        match self {
            StepField::PlannedRunTime => "planned_run_time",
            StepField::ActualRunTime => "actual_run_time",
            StepField::IdealOutput => "ideal_output",
            StepField::ActualOutput => "actual_output",
            StepField::TotalOutput => "total_output",
            StepField::GoodOutput => "good_output",
            StepField::ValueAdded => "value_added",
            StepField::NonValueAdded => "non_value_added",
            StepField::NecessaryNonValueAdded => "necessary_non_value_added",
        }
    }
}

impl fmt::Display for StepField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for StepField {
    type Err = String;

    /// 解析字段名
    ///
    /// 同时接受 snake_case 与报表列名 (PlannedRunTime / VA / NVA / NNVA),忽略大小写
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-' && *c != ' ')
            .collect::<String>()
            .to_lowercase();

        match key.as_str() {
            "plannedruntime" => Ok(StepField::PlannedRunTime),
            "actualruntime" => Ok(StepField::ActualRunTime),
            "idealoutput" => Ok(StepField::IdealOutput),
            "actualoutput" => Ok(StepField::ActualOutput),
            "totaloutput" => Ok(StepField::TotalOutput),
            "goodoutput" => Ok(StepField::GoodOutput),
            "va" | "valueadded" => Ok(StepField::ValueAdded),
            "nva" | "nonvalueadded" => Ok(StepField::NonValueAdded),
            "nnva" | "necessarynonvalueadded" => Ok(StepField::NecessaryNonValueAdded),
            _ => Err(format!("未知字段: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_records_order_and_values() {
        let records = seed_records();
        assert_eq!(records.len(), 10);
        assert_eq!(records[0].step_name, "Step 1: Batching");
        assert_eq!(records[9].step_name, "Step 10: Selection & Packing");

        let step2 = &records[1];
        assert_eq!(step2.planned_run_time_min, 480);
        assert_eq!(step2.actual_run_time_min, 430);
        assert_eq!(step2.actual_output, 900);
        assert_eq!(step2.total_output, 920);
        assert_eq!(step2.good_output, 880);
        assert_eq!(step2.value_added_min, 180);
        assert_eq!(step2.non_value_added_min, 60);
        assert_eq!(step2.necessary_non_value_added_min, 30);
    }

    #[test]
    fn test_field_parse_aliases() {
        assert_eq!("planned_run_time".parse::<StepField>().unwrap(), StepField::PlannedRunTime);
        assert_eq!("PlannedRunTime".parse::<StepField>().unwrap(), StepField::PlannedRunTime);
        assert_eq!("VA".parse::<StepField>().unwrap(), StepField::ValueAdded);
        assert_eq!("nnva".parse::<StepField>().unwrap(), StepField::NecessaryNonValueAdded);
        assert!("speed".parse::<StepField>().is_err());
    }

    #[test]
    fn test_field_min_values() {
        assert_eq!(StepField::PlannedRunTime.min_value(), 1);
        assert_eq!(StepField::IdealOutput.min_value(), 1);
        assert_eq!(StepField::TotalOutput.min_value(), 1);
        assert_eq!(StepField::GoodOutput.min_value(), 0);
        assert_eq!(StepField::NonValueAdded.min_value(), 0);
    }

    #[test]
    fn test_field_value_and_write() {
        let mut record = seed_records().remove(0);
        for field in StepField::ALL {
            record.write_field(field, 7);
            assert_eq!(record.field_value(field), 7);
        }
    }
}
