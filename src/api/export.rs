// ==========================================
// 陶瓷生产 OEE 驾驶舱 - 绩效表导出
// ==========================================
// 职责: 将工序绩效表写为 CSV (表头取字段名,等级写为 LOW/MID/HIGH)
// ==========================================

use std::io::Write;

use csv::WriterBuilder;

use crate::api::dashboard_api::DashboardApi;
use crate::api::dto::PerformanceRow;
use crate::api::error::ApiResult;

/// 写出绩效表
///
/// # 返回
/// - Ok(usize): 写出的数据行数 (不含表头)
pub fn write_performance_csv<W: Write>(rows: &[PerformanceRow], writer: W) -> ApiResult<usize> {
    let mut wtr = WriterBuilder::new().has_headers(true).from_writer(writer);
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush().map_err(csv::Error::from)?;
    Ok(rows.len())
}

impl DashboardApi {
    /// 导出当前台账的绩效表 (重新计算)
    pub fn export_table_csv<W: Write>(&self, writer: W) -> ApiResult<usize> {
        let rows = self.performance_table()?;
        let count = write_performance_csv(&rows, writer)?;
        tracing::info!(rows = count, "绩效表已导出");
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DashboardConfig;

    #[test]
    fn test_export_header_and_rows() {
        let api = DashboardApi::new(DashboardConfig::default()).unwrap();
        let mut buf = Vec::new();
        let count = api.export_table_csv(&mut buf).unwrap();
        assert_eq!(count, 10);

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 11);
        assert!(lines[0].starts_with("step_name,planned_run_time_min,"));
        assert!(lines[0].ends_with(",oee,tier"));
        assert!(lines[2].starts_with("Step 2: Mixing & Grinding,480,430,"));
        assert!(lines[2].ends_with(",MID"));
    }
}
