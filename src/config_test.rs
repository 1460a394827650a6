use super::*;
use crate::fs::mock::MockFs;
use crate::fs::RealFs;
use tempfile::TempDir;

const PATH: &str = "/data/EditMenuFilter.menu.json";

fn mock_store(fs: &Arc<MockFs>) -> ConfigStore {
    let gateway = JsonConfigGateway::new(fs.clone());
    ConfigStore::open(PathBuf::from(PATH), Box::new(gateway))
}

// ==================== FilterConfig ====================

#[test]
fn default_config_values() {
    let config = FilterConfig::default();
    assert_eq!(config.history_max, 35);
    assert!(!config.ignore_case);
    assert!(!config.filter_desc);
    assert!(config.is_and);
    assert!(config.history.is_empty());
}

#[test]
fn options_reflect_flags() {
    let mut config = FilterConfig {
        ignore_case: true,
        ..FilterConfig::default()
    };
    config.set_mode(FilterMode::Or);

    let options = config.options();
    assert_eq!(options.mode, FilterMode::Or);
    assert!(options.ignore_case);
    assert!(!options.include_description);
}

#[test]
fn serializes_with_camel_case_keys() {
    let json = serde_json::to_value(FilterConfig::default()).unwrap();
    for key in ["historyMax", "ignoreCase", "filterDesc", "isAnd", "history"] {
        assert!(json.get(key).is_some(), "missing {key}");
    }
}

#[test]
fn missing_fields_use_defaults() {
    let config: FilterConfig = serde_json::from_str(r#"{"ignoreCase": true}"#).unwrap();
    assert!(config.ignore_case);
    assert_eq!(config.history_max, DEFAULT_HISTORY_MAX);
    assert!(config.is_and);
}

// ==================== JsonConfigGateway ====================

#[test]
fn load_missing_file_returns_default() {
    let fs = Arc::new(MockFs::new());
    let gateway = JsonConfigGateway::new(fs);
    assert_eq!(gateway.load(Path::new(PATH)), FilterConfig::default());
}

#[test]
fn load_malformed_file_returns_default() {
    let fs = Arc::new(MockFs::new());
    fs.add_file(PATH, "<ConfigData>not json</ConfigData>");
    let gateway = JsonConfigGateway::new(fs);
    assert_eq!(gateway.load(Path::new(PATH)), FilterConfig::default());
}

#[test]
fn load_repairs_history_invariants() {
    let fs = Arc::new(MockFs::new());
    fs.add_file(
        PATH,
        r#"{"historyMax": 2, "history": ["a", "a", "", "b", "c"]}"#,
    );
    let gateway = JsonConfigGateway::new(fs);

    let config = gateway.load(Path::new(PATH));
    assert_eq!(config.history, ["a", "b"]);
}

#[test]
fn save_then_load_real_fs() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("settings").join("EditMenuFilter.set.json");
    let gateway = JsonConfigGateway::new(Arc::new(RealFs));

    let config = FilterConfig {
        filter_desc: true,
        history: vec!["メイド".to_string()],
        ..FilterConfig::default()
    };
    gateway.save(&path, &config).unwrap();

    assert_eq!(gateway.load(&path), config);
}

// ==================== ConfigStore ====================

#[test]
fn update_flushes_immediately() {
    let fs = Arc::new(MockFs::new());
    let mut store = mock_store(&fs);

    store.update(|c| c.ignore_case = true).unwrap();

    assert_eq!(fs.write_count(), 1);
    let saved: FilterConfig = serde_json::from_str(&fs.content(PATH).unwrap()).unwrap();
    assert!(saved.ignore_case);
}

#[test]
fn update_shrinking_history_max_truncates() {
    let fs = Arc::new(MockFs::new());
    let mut store = mock_store(&fs);
    for text in ["a", "b", "c"] {
        store.record_history(text).unwrap();
    }

    store.update(|c| c.history_max = 1).unwrap();

    assert_eq!(store.config().history, ["c"]);
}

#[test]
fn record_history_flushes_only_on_change() {
    let fs = Arc::new(MockFs::new());
    let mut store = mock_store(&fs);

    assert!(store.record_history("apple").unwrap());
    assert!(!store.record_history("apple").unwrap());
    assert!(!store.record_history("").unwrap());

    assert_eq!(fs.write_count(), 1);
    assert_eq!(store.history(10), ["apple"]);
}

#[test]
fn record_history_with_zero_max_never_flushes() {
    let fs = Arc::new(MockFs::new());
    let mut store = mock_store(&fs);
    store.update(|c| c.history_max = 0).unwrap();

    assert!(!store.record_history("apple").unwrap());
    assert!(!store.record_history("apple").unwrap());

    assert_eq!(fs.write_count(), 1);
    assert!(store.config().history.is_empty());
}

#[test]
fn clear_history_flushes_only_when_non_empty() {
    let fs = Arc::new(MockFs::new());
    let mut store = mock_store(&fs);

    assert!(!store.clear_history().unwrap());
    store.record_history("a").unwrap();
    assert!(store.clear_history().unwrap());

    assert_eq!(fs.write_count(), 2);
    assert!(store.history(10).is_empty());
}

#[test]
fn save_failure_propagates() {
    let fs = Arc::new(MockFs::new());
    let mut store = mock_store(&fs);
    fs.fail_writes();

    assert!(store.update(|c| c.filter_desc = true).is_err());
    assert!(store.record_history("x").is_err());
}

#[test]
fn store_reloads_persisted_state() {
    let fs = Arc::new(MockFs::new());
    {
        let mut store = mock_store(&fs);
        store.record_history("a").unwrap();
        store.update(|c| c.set_mode(FilterMode::Or)).unwrap();
    }

    let store = mock_store(&fs);
    assert_eq!(store.history(10), ["a"]);
    assert_eq!(store.options().mode, FilterMode::Or);
}
