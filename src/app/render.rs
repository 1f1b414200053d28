// ==========================================
// 陶瓷生产 OEE 驾驶舱 - 终端报表
// ==========================================
// 职责: 把 DashboardSnapshot 渲染为文本或 JSON
// 文本标签走 i18n,数值统一保留两位小数
// ==========================================

use std::fmt;

use crate::api::dto::{DashboardSnapshot, GaugeView};
use crate::i18n::{t, t_with_args};

/// 渲染为 JSON (缩进格式)
pub fn render_json(snapshot: &DashboardSnapshot) -> serde_json::Result<String> {
    serde_json::to_string_pretty(snapshot)
}

/// 渲染为文本报表
pub fn render_text(snapshot: &DashboardSnapshot) -> String {
    TextReport(snapshot).to_string()
}

/// 文本报表 (按部件顺序输出)
pub struct TextReport<'a>(pub &'a DashboardSnapshot);

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let snapshot = self.0;

        writeln!(f, "{}", t("app.title"))?;
        writeln!(
            f,
            "{}",
            t_with_args("app.selected_step", &[("step", snapshot.selected_step.as_str())])
        )?;
        writeln!(f)?;

        // ===== KPI =====
        let kpi = &snapshot.kpi;
        writeln!(f, "== {} ==", t("kpi.title"))?;
        writeln!(f, "{:<24}{:>8.2}%", t("kpi.avg_availability"), kpi.avg_availability)?;
        writeln!(f, "{:<24}{:>8.2}%", t("kpi.avg_performance"), kpi.avg_performance)?;
        writeln!(f, "{:<24}{:>8.2}%", t("kpi.avg_quality"), kpi.avg_quality)?;
        let delta = format!("{:+.2}", kpi.oee_delta_vs_target);
        writeln!(
            f,
            "{:<24}{:>8.2}%  ({})",
            t("kpi.avg_oee"),
            kpi.avg_oee,
            t_with_args("kpi.vs_target", &[("delta", delta.as_str())])
        )?;
        writeln!(f)?;

        // ===== 仪表盘 =====
        writeln!(f, "== {} ==", t("gauge.title"))?;
        for gauge in [
            &snapshot.gauges.total_oee,
            &snapshot.gauges.selected_availability,
            &snapshot.gauges.selected_performance,
        ] {
            writeln!(f, "{}", gauge_line(gauge))?;
        }
        writeln!(f)?;

        // ===== 质量饼图 =====
        let split = &snapshot.quality_split;
        writeln!(
            f,
            "== {} ==",
            t_with_args("pie.title", &[("step", split.step_name.as_str())])
        )?;
        writeln!(
            f,
            "{}: {:.2}%  {}: {:.2}%",
            t("pie.good"),
            split.good_pct,
            t("pie.reject"),
            split.reject_pct
        )?;
        writeln!(f)?;

        // ===== 增值分析 =====
        let va = &snapshot.value_added;
        writeln!(f, "== {} ==", t("chart.value_added"))?;
        writeln!(f, "{:<30}{:>6}{:>6}{:>6}", t("table.step"), "VA", "NVA", "NNVA")?;
        for (i, name) in va.step_names.iter().enumerate() {
            writeln!(f, "{:<30}{:>6}{:>6}{:>6}", name, va.va[i], va.nva[i], va.nnva[i])?;
        }
        writeln!(f)?;

        // ===== 绩效表 =====
        writeln!(f, "== {} ==", t("table.title"))?;
        writeln!(
            f,
            "{:<30}{:>9}{:>9}{:>9}{:>9}  {}",
            t("table.step"),
            "A%",
            "P%",
            "Q%",
            "OEE%",
            t("table.tier")
        )?;
        for row in &snapshot.table {
            writeln!(
                f,
                "{:<30}{:>9.2}{:>9.2}{:>9.2}{:>9.2}  {}",
                row.step_name,
                row.availability,
                row.performance,
                row.quality,
                row.oee,
                t(row.tier.i18n_key())
            )?;
        }

        // ===== 最近编辑 =====
        if !snapshot.recent_edits.is_empty() {
            writeln!(f)?;
            writeln!(f, "== {} ==", t("edits.title"))?;
            for edit in &snapshot.recent_edits {
                let old = edit.old_value.to_string();
                let new = edit.new_value.to_string();
                writeln!(
                    f,
                    "{}",
                    t_with_args(
                        "edits.line",
                        &[
                            ("step", edit.step_name.as_str()),
                            ("field", edit.field.as_str()),
                            ("old", old.as_str()),
                            ("new", new.as_str()),
                        ]
                    )
                )?;
            }
        }

        Ok(())
    }
}

fn gauge_line(gauge: &GaugeView) -> String {
    let mut line = format!("{:<24}{:>8.2}", t(&gauge.title_key), gauge.value);
    if let (Some(reference), Some(delta)) = (gauge.reference, gauge.delta) {
        line.push_str(&format!("  (ref {:.0}, {:+.2})", reference, delta));
    }
    if let Some(tier) = gauge.tier {
        line.push_str(&format!("  [{}]", t(tier.i18n_key())));
    }
    line
}
