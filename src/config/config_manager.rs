// ==========================================
// 陶瓷生产 OEE 驾驶舱 - 配置管理器
// ==========================================
// 职责: 配置加载、查询、覆写
// 存储: config_kv 表 (key-value + scope,仅使用 scope_id='global')
// 注意: 只保存配置,不保存工序台账
// ==========================================

use crate::config::config_keys;
use crate::config::config_reader_trait::DashboardConfigReader;
use crate::config::error::{ConfigError, ConfigResult};
use crate::config::{
    DEFAULT_LOCALE, DEFAULT_OEE_TARGET_PCT, DEFAULT_TIER_HIGH_THRESHOLD_PCT,
    DEFAULT_TIER_MID_THRESHOLD_PCT, SUPPORTED_LOCALES,
};
use crate::db::{ensure_config_schema, open_sqlite_connection};
use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
pub struct ConfigManager {
    conn: Arc<Mutex<Connection>>,
}

impl ConfigManager {
    /// 创建新的 ConfigManager 实例 (表不存在时自动创建)
    ///
    /// # 参数
    /// - db_path: 数据库文件路径
    pub fn new(db_path: &str) -> ConfigResult<Self> {
        let conn = open_sqlite_connection(db_path)?;
        ensure_config_schema(&conn)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// 从已有连接创建 ConfigManager
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> ConfigResult<Self> {
        {
            let guard = conn
                .lock()
                .map_err(|e| ConfigError::Database(format!("锁获取失败: {}", e)))?;
            crate::db::configure_sqlite_connection(&guard)?;
            ensure_config_schema(&guard)?;
        }

        Ok(Self { conn })
    }

    fn lock(&self) -> ConfigResult<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| ConfigError::Database(format!("锁获取失败: {}", e)))
    }

    /// 读取 global scope 的配置值
    ///
    /// # 返回
    /// - Some(String): 配置值
    /// - None: 配置不存在
    pub fn get_config_value(&self, key: &str) -> ConfigResult<Option<String>> {
        let conn = self.lock()?;

        let value = conn
            .query_row(
                "SELECT value FROM config_kv WHERE scope_id = 'global' AND key = ?1",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    /// 写入 global scope 的配置值 (UPSERT)
    pub fn set_config_value(&self, key: &str, value: &str) -> ConfigResult<()> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO config_kv (scope_id, key, value) VALUES ('global', ?1, ?2)
             ON CONFLICT(scope_id, key) DO UPDATE SET value = ?2",
            params![key, value],
        )?;
        tracing::info!(key = key, value = value, "配置已更新");
        Ok(())
    }

    /// 获取所有 global 配置的快照 (JSON, 按键排序)
    pub fn get_config_snapshot(&self) -> ConfigResult<String> {
        let conn = self.lock()?;
        let mut stmt =
            conn.prepare("SELECT key, value FROM config_kv WHERE scope_id = 'global' ORDER BY key")?;

        let rows = stmt.query_map([], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })?;

        let mut config_map = BTreeMap::new();
        for row in rows {
            let (key, value) = row?;
            config_map.insert(key, value);
        }

        serde_json::to_string(&config_map).map_err(|e| ConfigError::Database(e.to_string()))
    }

    /// 读取数值配置,不存在或格式错误时回退默认值
    fn get_f64_or_default(&self, key: &str, default: f64) -> ConfigResult<f64> {
        let Some(raw) = self.get_config_value(key)? else {
            return Ok(default);
        };
        match raw.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(v),
            _ => {
                tracing::warn!(config_key = key, raw_value = %raw, "配置格式错误，使用默认值");
                Ok(default)
            }
        }
    }
}

fn is_true(v: &str) -> bool {
    matches!(
        v.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "y" | "on"
    )
}

// ==========================================
// DashboardConfigReader Trait 实现
// ==========================================
#[async_trait]
impl DashboardConfigReader for ConfigManager {
    async fn get_oee_target_pct(&self) -> ConfigResult<f64> {
        self.get_f64_or_default(config_keys::OEE_TARGET_PCT, DEFAULT_OEE_TARGET_PCT)
    }

    async fn get_tier_mid_threshold_pct(&self) -> ConfigResult<f64> {
        self.get_f64_or_default(
            config_keys::TIER_MID_THRESHOLD_PCT,
            DEFAULT_TIER_MID_THRESHOLD_PCT,
        )
    }

    async fn get_tier_high_threshold_pct(&self) -> ConfigResult<f64> {
        self.get_f64_or_default(
            config_keys::TIER_HIGH_THRESHOLD_PCT,
            DEFAULT_TIER_HIGH_THRESHOLD_PCT,
        )
    }

    async fn get_clamp_percentages(&self) -> ConfigResult<bool> {
        Ok(self
            .get_config_value(config_keys::CLAMP_PERCENTAGES)?
            .map(|v| is_true(&v))
            .unwrap_or(false))
    }

    async fn get_locale(&self) -> ConfigResult<String> {
        let value = self
            .get_config_value(config_keys::LOCALE)?
            .unwrap_or_else(|| DEFAULT_LOCALE.to_string());

        if SUPPORTED_LOCALES.contains(&value.trim()) {
            Ok(value.trim().to_string())
        } else {
            tracing::warn!(config_key = config_keys::LOCALE, raw_value = %value, "不支持的语言，使用默认值");
            Ok(DEFAULT_LOCALE.to_string())
        }
    }
}
