// ==========================================
// 配置与日历文件加载测试
// ==========================================
// 测试目标: JSON 文件加载、校验失败、环境变量指定路径
// ==========================================

mod helpers;

use helpers::holiday_fixture::{brazil_2024, d};
use std::io::Write;
use std::sync::Arc;
use tempfile::NamedTempFile;
use vacation_optimizer::calendar::{CalendarError, HolidayCalendar, InMemoryCalendar};
use vacation_optimizer::config::{config_keys, ConfigError, ConfigManager, ConfigSource};
use vacation_optimizer::domain::HolidayCategory;
use vacation_optimizer::{ApiError, OptimizerApi};

fn write_temp(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

// ==========================================
// 配置
// ==========================================

#[test]
fn test_config_from_file() {
    let file = write_temp(r#"{"shift_window": 3, "bridge_top_n": 1, "scoring_policy": "linear"}"#);
    let manager = ConfigManager::from_file(file.path()).unwrap();

    assert_eq!(manager.config().shift_window, 3);
    assert_eq!(manager.config().bridge_top_n, 1);
    assert_eq!(manager.config().fraction_count, 6);
    assert_eq!(manager.source(), &ConfigSource::File(file.path().to_path_buf()));
}

#[test]
fn test_config_file_missing() {
    let dir = tempfile::tempdir().unwrap();
    let err = ConfigManager::from_file(dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, ConfigError::FileRead { .. }));
}

#[test]
fn test_config_out_of_range_rejected_by_api() {
    let file = write_temp(r#"{"max_window": 31, "shift_window": 90}"#);
    let err = ConfigManager::from_file(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::OutOfRange { key: "shift_window", .. }));

    let api_err: ApiError = err.into();
    assert!(api_err.to_string().contains("shift_window"));
}

#[test]
fn test_config_from_env_path() {
    let file = write_temp(r#"{"fraction_count": 4}"#);
    std::env::set_var(config_keys::ENV_CONFIG_PATH, file.path());
    let manager = ConfigManager::load();
    std::env::remove_var(config_keys::ENV_CONFIG_PATH);

    let manager = manager.unwrap();
    assert_eq!(manager.config().fraction_count, 4);

    let api = OptimizerApi::from_config_manager(Arc::new(InMemoryCalendar::new()), &manager).unwrap();
    assert_eq!(api.config().fraction_count, 4);
}

// ==========================================
// 日历
// ==========================================

#[test]
fn test_calendar_from_json_file() {
    let records: Vec<serde_json::Value> = brazil_2024()
        .iter()
        .map(|h| serde_json::to_value(h).unwrap())
        .collect();
    let file = write_temp(&serde_json::to_string(&records).unwrap());

    let calendar = InMemoryCalendar::from_json_file(file.path()).unwrap();
    let labour_day = calendar.is_holiday(d(2024, 5, 1)).unwrap();
    assert_eq!(labour_day.name, "Dia do Trabalho");

    // 1/1 既是全国节日也是休庭期: 保留首条
    let new_year = calendar.is_holiday(d(2024, 1, 1)).unwrap();
    assert_eq!(new_year.category, HolidayCategory::National);
    assert_eq!(calendar.years(), vec![2023, 2024, 2025]);
}

#[test]
fn test_calendar_bad_records() {
    let file = write_temp(r#"[{"date": "01/05/2024", "name": "Dia do Trabalho"}]"#);
    assert!(matches!(
        InMemoryCalendar::from_json_file(file.path()),
        Err(CalendarError::InvalidDate { index: 0, .. })
    ));

    let file = write_temp(
        r#"[{"date": "2024-05-01", "name": "A"}, {"date": "2024-05-02", "name": "B", "type": "municipal"}]"#,
    );
    assert!(matches!(
        InMemoryCalendar::from_json_file(file.path()),
        Err(CalendarError::InvalidCategory { index: 1, .. })
    ));

    let file = write_temp("not json");
    assert!(matches!(
        InMemoryCalendar::from_json_file(file.path()),
        Err(CalendarError::JsonParse(_))
    ));
}
