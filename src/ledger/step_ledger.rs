// ==========================================
// 陶瓷生产 OEE 驾驶舱 - 工序台账
// ==========================================
// 职责: 持有 10 道工序的原始输入,接受字段级修改
// 红线: 台账是唯一可变数据源;非法写入不产生任何部分修改
// ==========================================

use crate::domain::step::{seed_records, StepField, StepRecord};
use crate::ledger::error::{LedgerError, LedgerResult};

// ==========================================
// StepLedger - 工序台账
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepLedger {
    records: Vec<StepRecord>, // 按生产顺序
}

impl StepLedger {
    /// 使用固定种子数据初始化台账
    pub fn seeded() -> Self {
        Self {
            records: seed_records(),
        }
    }

    /// 工序名称在台账中的位置
    pub fn index_of(&self, step_name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.step_name == step_name)
    }

    /// 按工序名称读取记录
    ///
    /// # 返回
    /// - Ok(&StepRecord): 工序记录
    /// - Err(LedgerError::NotFound): 名称不在 10 道预定义工序中
    pub fn get(&self, step_name: &str) -> LedgerResult<&StepRecord> {
        self.index_of(step_name)
            .map(|i| &self.records[i])
            .ok_or_else(|| LedgerError::NotFound {
                step_name: step_name.to_string(),
            })
    }

    /// 覆写单个字段
    ///
    /// # 参数
    /// - step_name: 工序名称
    /// - field: 字段
    /// - value: 新值
    ///
    /// # 返回
    /// - Ok(i64): 修改前的值
    /// - Err(LedgerError::NotFound): 工序不存在
    /// - Err(LedgerError::Validation): 新值低于字段最小值,记录保持不变
    pub fn set(&mut self, step_name: &str, field: StepField, value: i64) -> LedgerResult<i64> {
        let index = self.index_of(step_name).ok_or_else(|| LedgerError::NotFound {
            step_name: step_name.to_string(),
        })?;

        let min = field.min_value();
        if value < min {
            tracing::warn!(
                step_name = step_name,
                field = %field,
                value,
                min,
                "字段写入被拒绝"
            );
            return Err(LedgerError::Validation {
                step_name: step_name.to_string(),
                field,
                value,
                min,
            });
        }

        let record = &mut self.records[index];
        let old_value = record.field_value(field);
        record.write_field(field, value);

        tracing::debug!(step_name = step_name, field = %field, old_value, value, "字段已更新");
        Ok(old_value)
    }

    /// 全部记录 (生产顺序,只读)
    pub fn all(&self) -> &[StepRecord] {
        &self.records
    }

    pub fn step_names(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.step_name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for StepLedger {
    fn default() -> Self {
        Self::seeded()
    }
}
