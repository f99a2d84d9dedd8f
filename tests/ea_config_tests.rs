use ea_system::common::config::{init_config, get_config, EaConfig};
use ea_system::common::enums::{EaDataType, EaStateFlags};
use ea_system::common::error::ConfigError;
use ea_system::models::EaState;
use std::fs;
use std::path::PathBuf;

fn write_temp_config(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_load_config_from_file() {
    let path = write_temp_config(
        "ea_config_basic.toml",
        r#"
name = "trend_follower"
symbol = "EURUSD"
data = "CHART | INDICATOR | SYMBOL"
enabled = true
libs_allowed = false
trade_allowed = true

[logging]
log_dir = "logs"
enable_console = false
"#,
    );

    let config = EaConfig::load_from_file(&path).unwrap();

    assert_eq!(config.name, "trend_follower");
    assert_eq!(config.symbol, "EURUSD");
    assert_eq!(
        config.data,
        EaDataType::CHART | EaDataType::INDICATOR | EaDataType::SYMBOL
    );
    assert!(config.subscribes_to(EaDataType::INDICATOR));
    assert!(!config.subscribes_to(EaDataType::TRADE));
    assert_eq!(config.logging.log_dir, "logs");
    assert!(!config.logging.enable_console);
}

#[test]
fn test_state_lifecycle_from_config() {
    let path = write_temp_config(
        "ea_config_lifecycle.toml",
        r#"
name = "scalper"
symbol = "BTCUSD"
data = "CHART | TRADE"
enabled = true
libs_allowed = true
trade_allowed = true
"#,
    );

    let config = EaConfig::load_from_file(&path).unwrap();
    let mut state = EaState::from_config(&config);

    // permissions come from the config, connectivity does not
    assert!(state.is_enabled());
    assert!(state.is_active());
    assert!(state.is_libs_allowed());
    assert!(state.is_trade_allowed());
    assert!(!state.is_connected());
    assert!(!state.can_trade());

    state.set_connected(true);
    assert!(state.can_trade());

    state.disable();
    assert!(!state.can_trade());

    state.enable();
    assert!(state.can_trade());
}

#[test]
fn test_missing_config_file() {
    let err = EaConfig::load_from_file("/nonexistent/ea.toml").unwrap_err();
    assert!(matches!(err, ConfigError::FileRead(_)));
}

#[test]
fn test_invalid_flag_list() {
    let path = write_temp_config(
        "ea_config_invalid.toml",
        r#"
name = "broken"
symbol = "EURUSD"
data = "CHART | SPREADSHEET"
enabled = true
libs_allowed = false
trade_allowed = false
"#,
    );

    let err = EaConfig::load_from_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::TomlParse(_)));
}

#[test]
fn test_global_config() {
    let path = write_temp_config(
        "ea_config_global.toml",
        r#"
name = "global"
symbol = "EURUSD"
data = "SYMBOL"
enabled = true
libs_allowed = false
trade_allowed = false
"#,
    );

    unsafe {
        std::env::set_var("EA_CONFIG_PATH", &path);
    }

    init_config().unwrap();
    let config = get_config();

    assert_eq!(config.name, "global");
    assert_eq!(config.data, EaDataType::SYMBOL);

    // a second init must be rejected
    let err = init_config().unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue(_)));

    let flags = config.initial_flags();
    assert_eq!(flags, EaStateFlags::ENABLED | EaStateFlags::ACTIVE);
}
