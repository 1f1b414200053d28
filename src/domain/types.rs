// ==========================================
// 陶瓷生产 OEE 驾驶舱 - 领域类型定义
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// OEE 等级 (OEE Tier)
// ==========================================
// 用途: 工序绩效表 OEE 列的三色分级
// 顺序: Low < Mid < High
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OeeTier {
    Low,  // 低于中档阈值 (红)
    Mid,  // 中档 (橙)
    High, // 达到目标 (绿)
}

impl OeeTier {
    /// 国际化键 (locales/*.yml)
    pub fn i18n_key(&self) -> &'static str {
        match self {
            OeeTier::Low => "tier.low",
            OeeTier::Mid => "tier.mid",
            OeeTier::High => "tier.high",
        }
    }
}

impl fmt::Display for OeeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OeeTier::Low => write!(f, "LOW"),
            OeeTier::Mid => write!(f, "MID"),
            OeeTier::High => write!(f, "HIGH"),
        }
    }
}

// ==========================================
// 编辑来源部门 (Edit Section)
// ==========================================
// 对应输入面板的三个分组
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EditSection {
    RunTime,    // 运行时间 (生产部门)
    Output,     // 产出/良率 (质检部门)
    ValueAdded, // 增值分析 (工程部门)
}

impl fmt::Display for EditSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditSection::RunTime => write!(f, "RUN_TIME"),
            EditSection::Output => write!(f, "OUTPUT"),
            EditSection::ValueAdded => write!(f, "VALUE_ADDED"),
        }
    }
}

impl From<crate::domain::step::StepField> for EditSection {
    fn from(field: crate::domain::step::StepField) -> Self {
        use crate::domain::step::StepField;
        match field {
            StepField::PlannedRunTime | StepField::ActualRunTime => EditSection::RunTime,
            StepField::IdealOutput
            | StepField::ActualOutput
            | StepField::TotalOutput
            | StepField::GoodOutput => EditSection::Output,
            StepField::ValueAdded
            | StepField::NonValueAdded
            | StepField::NecessaryNonValueAdded => EditSection::ValueAdded,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::step::StepField;

    #[test]
    fn test_tier_order() {
        assert!(OeeTier::Low < OeeTier::Mid);
        assert!(OeeTier::Mid < OeeTier::High);
        assert_eq!(OeeTier::Mid.to_string(), "MID");
    }

    #[test]
    fn test_edit_section_from_field() {
        assert_eq!(EditSection::from(StepField::ActualRunTime), EditSection::RunTime);
        assert_eq!(EditSection::from(StepField::GoodOutput), EditSection::Output);
        assert_eq!(EditSection::from(StepField::NonValueAdded), EditSection::ValueAdded);
    }
}
