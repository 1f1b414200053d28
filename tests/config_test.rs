// ==========================================
// ConfigManager 集成测试
// ==========================================
// 测试目标: 验证 config_kv 读取、默认值回退、AppState 装配
// ==========================================

use ceramic_oee::app::AppState;
use ceramic_oee::config::{config_keys, ConfigManager, DashboardConfig, DashboardConfigReader};
use tempfile::NamedTempFile;

/// 创建临时配置库
///
/// # 返回
/// - NamedTempFile: 临时数据库文件（需要保持存活）
/// - String: 数据库文件路径
fn create_test_db() -> (NamedTempFile, String) {
    let temp_file = NamedTempFile::new().expect("无法创建临时文件");
    let db_path = temp_file.path().to_str().unwrap().to_string();
    (temp_file, db_path)
}

#[tokio::test]
async fn test_config_manager_creation() {
    let (_temp_file, db_path) = create_test_db();
    let config_manager = ConfigManager::new(&db_path);
    assert!(config_manager.is_ok(), "ConfigManager should be created successfully");
}

#[tokio::test]
async fn test_empty_db_uses_defaults() {
    let (_temp_file, db_path) = create_test_db();
    let manager = ConfigManager::new(&db_path).unwrap();

    let config = DashboardConfig::load(&manager).await.expect("加载失败");
    assert_eq!(config, DashboardConfig::default());
}

#[tokio::test]
async fn test_overrides_from_config_kv() {
    let (_temp_file, db_path) = create_test_db();
    let manager = ConfigManager::new(&db_path).unwrap();
    manager.set_config_value(config_keys::OEE_TARGET_PCT, "80").unwrap();
    manager.set_config_value(config_keys::TIER_MID_THRESHOLD_PCT, "60").unwrap();
    manager.set_config_value(config_keys::TIER_HIGH_THRESHOLD_PCT, "80").unwrap();
    manager.set_config_value(config_keys::CLAMP_PERCENTAGES, "on").unwrap();
    manager.set_config_value(config_keys::LOCALE, "en").unwrap();

    let config = DashboardConfig::load(&manager).await.expect("加载失败");
    assert_eq!(config.oee_target_pct, 80.0);
    assert_eq!(config.tier_mid_threshold_pct, 60.0);
    assert_eq!(config.tier_high_threshold_pct, 80.0);
    assert!(config.clamp_percentages);
    assert_eq!(config.locale, "en");
}

#[tokio::test]
async fn test_bad_values_fall_back() {
    let (_temp_file, db_path) = create_test_db();
    let manager = ConfigManager::new(&db_path).unwrap();
    manager.set_config_value(config_keys::OEE_TARGET_PCT, "eighty").unwrap();
    manager.set_config_value(config_keys::LOCALE, "fr").unwrap();

    assert_eq!(manager.get_oee_target_pct().await.unwrap(), 85.0);
    assert_eq!(manager.get_locale().await.unwrap(), "zh-CN");
    assert!(!manager.get_clamp_percentages().await.unwrap());
}

#[tokio::test]
async fn test_config_persists_across_managers() {
    let (_temp_file, db_path) = create_test_db();
    {
        let manager = ConfigManager::new(&db_path).unwrap();
        manager.set_config_value(config_keys::OEE_TARGET_PCT, "75.5").unwrap();
    }

    let manager = ConfigManager::new(&db_path).unwrap();
    assert_eq!(manager.get_oee_target_pct().await.unwrap(), 75.5);
}

#[tokio::test]
async fn test_app_state_with_db() {
    let (_temp_file, db_path) = create_test_db();
    {
        let manager = ConfigManager::new(&db_path).unwrap();
        manager.set_config_value(config_keys::OEE_TARGET_PCT, "88").unwrap();
    }

    let mut state = AppState::new(Some(db_path.clone())).await.expect("初始化失败");
    assert_eq!(state.db_path.as_deref(), Some(db_path.as_str()));
    assert!(state.config_snapshot.as_deref().unwrap().contains("oee_target_pct"));
    assert_eq!(state.dashboard_api.config().oee_target_pct, 88.0);

    let applied = state
        .apply_edit_script("Step 1: Batching|ActualRunTime|480;Step 1: Batching|VA|230")
        .expect("编辑失败");
    assert_eq!(applied, 2);
    assert_eq!(state.dashboard_api.edit_log().len(), 2);
}

#[tokio::test]
async fn test_app_state_without_db() {
    let state = AppState::new(None).await.expect("初始化失败");
    assert!(state.config_snapshot.is_none());
    assert_eq!(state.dashboard_api.config(), &DashboardConfig::default());
}
