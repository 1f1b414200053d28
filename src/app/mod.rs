// ==========================================
// 陶瓷生产 OEE 驾驶舱 - 应用层
// ==========================================
// 职责: 配置装配 + 终端报表输出
// ==========================================

pub mod render;
pub mod state;

// 重导出
pub use render::{render_json, render_text};
pub use state::{get_default_db_path, parse_edit_script, resolve_db_path, AppState};
