// ==========================================
// 陶瓷生产 OEE 驾驶舱 - 应用状态
// ==========================================
// 职责: 加载配置、设置语言、创建 DashboardApi
// 说明: 配置库可选;工序台账只存在于进程内存
// ==========================================

use std::path::{Path, PathBuf};

use crate::api::{ApiError, ApiResult, DashboardApi};
use crate::config::{ConfigManager, DashboardConfig};

/// 环境变量: 显式指定配置库路径
pub const ENV_DB_PATH: &str = "CERAMIC_OEE_DB";

/// 应用状态
pub struct AppState {
    /// 实际使用的配置库路径 (None 表示使用默认配置)
    pub db_path: Option<String>,

    /// 加载配置时的 config_kv 快照 (JSON)
    pub config_snapshot: Option<String>,

    /// 驾驶舱API (持有工序台账)
    pub dashboard_api: DashboardApi,
}

impl AppState {
    /// 创建新的AppState实例
    ///
    /// # 参数
    /// - db_path: 配置库路径;None 时使用默认配置
    ///
    /// # 说明
    /// 显式给出的路径不存在时会新建 (空配置库)
    pub async fn new(db_path: Option<String>) -> ApiResult<Self> {
        let (config, config_snapshot) = match db_path.as_deref() {
            Some(path) => {
                tracing::info!("加载配置库: {}", path);
                let manager = ConfigManager::new(path)?;
                let config = DashboardConfig::load(&manager).await?;
                (config, Some(manager.get_config_snapshot()?))
            }
            None => {
                tracing::info!("未找到配置库，使用默认配置");
                (DashboardConfig::default(), None)
            }
        };

        crate::i18n::set_locale(&config.locale);
        let dashboard_api = DashboardApi::new(config)?;

        Ok(Self {
            db_path,
            config_snapshot,
            dashboard_api,
        })
    }

    /// 按环境变量/默认路径解析配置库后创建
    pub async fn from_env() -> ApiResult<Self> {
        Self::new(resolve_db_path()).await
    }

    /// 应用一段编辑脚本
    ///
    /// 格式: `工序|字段|值;工序|字段|值`,按顺序执行,遇错即停 (已执行的编辑保留)
    ///
    /// # 返回
    /// - Ok(usize): 成功执行的编辑数
    pub fn apply_edit_script(&mut self, script: &str) -> ApiResult<usize> {
        let edits = parse_edit_script(script)?;
        for (step_name, field_name, value) in &edits {
            self.dashboard_api.update_field(step_name, field_name, *value)?;
        }
        Ok(edits.len())
    }
}

/// 解析编辑脚本
pub fn parse_edit_script(script: &str) -> ApiResult<Vec<(String, String, i64)>> {
    script
        .split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|item| {
            let parts: Vec<&str> = item.split('|').map(str::trim).collect();
            match parts.as_slice() {
                [step, field, value] => {
                    let value = value.parse::<i64>().map_err(|_| {
                        ApiError::InvalidInput(format!("编辑值不是整数: {}", item))
                    })?;
                    Ok((step.to_string(), field.to_string(), value))
                }
                _ => Err(ApiError::InvalidInput(format!(
                    "编辑格式应为 工序|字段|值: {}",
                    item
                ))),
            }
        })
        .collect()
}

/// 解析配置库路径
///
/// 1. 环境变量 CERAMIC_OEE_DB (非空即使用,不存在时新建)
/// 2. 用户数据目录下的默认配置库 (仅当文件已存在)
pub fn resolve_db_path() -> Option<String> {
    if let Ok(path) = std::env::var(ENV_DB_PATH) {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return Some(trimmed.to_string());
        }
    }

    let default_path = get_default_db_path();
    if Path::new(&default_path).exists() {
        Some(default_path)
    } else {
        None
    }
}

/// 默认配置库路径 (用户数据目录;取不到时为当前目录)
pub fn get_default_db_path() -> String {
    let path = match dirs::data_dir() {
        Some(data_dir) => data_dir.join("ceramic-oee").join("ceramic_oee_config.db"),
        None => PathBuf::from("./ceramic_oee_config.db"),
    };
    path.to_string_lossy().to_string()
}
