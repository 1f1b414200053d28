// ==========================================
// 陶瓷生产 OEE 驾驶舱 - 编辑日志领域模型
// ==========================================
// 红线: 所有成功写入必须记录,失败写入不记录
// 用途: 会话内审计追踪 (不持久化,进程结束即丢弃)
// ==========================================

use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::step::StepField;
use crate::domain::types::EditSection;

// ==========================================
// EditEntry - 单次字段编辑
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditEntry {
    pub edit_id: String,          // 日志ID (uuid v4)
    pub step_name: String,        // 工序名称
    pub field: StepField,         // 被修改字段
    pub section: EditSection,     // 所属输入分组
    pub old_value: i64,           // 修改前
    pub new_value: i64,           // 修改后
    pub edited_at: NaiveDateTime, // 修改时间 (UTC)
}

impl EditEntry {
    pub fn new(step_name: &str, field: StepField, old_value: i64, new_value: i64) -> Self {
        Self {
            edit_id: Uuid::new_v4().to_string(),
            step_name: step_name.to_string(),
            field,
            section: EditSection::from(field),
            old_value,
            new_value,
            edited_at: Utc::now().naive_utc(),
        }
    }

    /// 值是否真的发生了变化
    pub fn is_noop(&self) -> bool {
        self.old_value == self.new_value
    }
}

// ==========================================
// EditLog - 会话编辑日志 (按时间顺序追加)
// ==========================================
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EditLog {
    entries: Vec<EditEntry>,
}

impl EditLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, entry: EditEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[EditEntry] {
        &self.entries
    }

    /// 最近 n 条 (新的在前)
    pub fn recent(&self, n: usize) -> Vec<&EditEntry> {
        self.entries.iter().rev().take(n).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
