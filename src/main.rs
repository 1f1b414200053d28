// ==========================================
// 陶瓷生产 OEE 驾驶舱 - 终端入口
// ==========================================
// 环境变量:
// - CERAMIC_OEE_DB: 配置库路径 (可选)
// - CERAMIC_OEE_EDITS: 启动后执行的编辑 `工序|字段|值;...` (可选)
// - CERAMIC_OEE_STEP: 选中工序 (可选)
// - CERAMIC_OEE_OUTPUT: text (默认) / json / csv
// - RUST_LOG: 日志级别
// ==========================================

use anyhow::Context;
use ceramic_oee::app::{render_json, render_text, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 初始化日志系统
    ceramic_oee::logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", ceramic_oee::APP_NAME);
    tracing::info!("系统版本: {}", ceramic_oee::VERSION);
    tracing::info!("==================================================");

    let mut state = AppState::from_env().await.context("初始化失败")?;

    if let Ok(script) = std::env::var("CERAMIC_OEE_EDITS") {
        let applied = state
            .apply_edit_script(&script)
            .context("执行 CERAMIC_OEE_EDITS 失败")?;
        tracing::info!("已执行 {} 条编辑", applied);
    }

    if let Ok(step) = std::env::var("CERAMIC_OEE_STEP") {
        state
            .dashboard_api
            .select_step(step.trim())
            .context("CERAMIC_OEE_STEP 无效")?;
    }

    let output = std::env::var("CERAMIC_OEE_OUTPUT").unwrap_or_else(|_| "text".to_string());
    match output.trim().to_lowercase().as_str() {
        "csv" => {
            state
                .dashboard_api
                .export_table_csv(std::io::stdout().lock())
                .context("导出 CSV 失败")?;
        }
        "json" => {
            let snapshot = state.dashboard_api.snapshot().context("计算失败")?;
            println!("{}", render_json(&snapshot)?);
        }
        _ => {
            let snapshot = state.dashboard_api.snapshot().context("计算失败")?;
            print!("{}", render_text(&snapshot));
        }
    }

    Ok(())
}
