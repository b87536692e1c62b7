use expense_ledger::config::{Config, ConfigManager};
use tempfile::TempDir;

fn manager() -> (TempDir, ConfigManager) {
    let temp = TempDir::new().expect("create temp dir");
    let manager = ConfigManager::with_base_dir(temp.path());
    (temp, manager)
}

#[test]
fn saved_config_drives_ledger_creation() {
    let (_temp, manager) = manager();
    let config = Config {
        ledger_name: "Tienda".into(),
        recent_limit: 2,
        seed_sample_data: true,
        log_filter: None,
    };
    manager.save(&config).expect("save config");

    let loaded = manager.load().expect("load config");
    let ledger = loaded.open_ledger().expect("open ledger");
    assert_eq!(ledger.name, "Tienda");
    assert_eq!(ledger.len(), 5);
}

#[test]
fn empty_ledger_name_cannot_be_saved() {
    let (_temp, manager) = manager();
    let config = Config {
        ledger_name: "  ".into(),
        ..Config::default()
    };
    assert!(manager.save(&config).is_err());
    assert!(!manager.path().exists());
}
