// ==========================================
// 陶瓷生产 OEE 驾驶舱 - 工序台账层
// ==========================================
// 职责: 持有会话内唯一的工序原始数据,负责字段级写入与范围校验
// 红线: 不持久化,不含计算逻辑
// ==========================================

pub mod error;
pub mod step_ledger;

pub use error::{LedgerError, LedgerResult};
pub use step_ledger::StepLedger;
