//! Unit Tests for Configuration Loading

use std::fs;

use tempfile::TempDir;
use termfolio::config::loader::ConfigLoader;
use termfolio::config::{Config, RuntimeConfig};
use termfolio::Error;

#[test]
fn test_full_toml_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
[terminal]
prompt = "visitor@termfolio:~$"
typing_interval_ms = 5

[stats]
username = "Zezima"
proxies = ["https://proxy.one/"]
request_timeout_secs = 3

[cv]
source = "/opt/cv.pdf"
download_name = "cv.pdf"
destination = "/tmp/cv"

[ui]
font_size = 16
theme_name = "green-screen"
"#,
    )
    .unwrap();

    let runtime = RuntimeConfig::load_from_file(&path).unwrap();
    let config = runtime.config();
    assert_eq!(config.terminal.prompt, "visitor@termfolio:~$");
    assert_eq!(config.stats.target(), format!("{}?player=Zezima", config.stats.target_url));
    assert_eq!(config.stats.proxies, vec!["https://proxy.one/"]);
    assert_eq!(config.cv.destination.as_deref(), Some(std::path::Path::new("/tmp/cv")));
    assert_eq!(runtime.theme_manager().current_theme_name(), "green-screen");
    assert_eq!(runtime.config_path(), Some(path.as_path()));
}

#[test]
fn test_json_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{"ui": {"font_size": 20}}"#).unwrap();

    let config = ConfigLoader::load_from_path(&path).unwrap();
    assert_eq!(config.ui.font_size, 20);
    assert_eq!(config.terminal, Config::default().terminal);
}

#[test]
fn test_invalid_values_are_rejected() {
    let dir = TempDir::new().unwrap();
    let cases = [
        ("empty_prompt.toml", "[terminal]\nprompt = \"\"\n", "terminal.prompt"),
        ("no_proxies.toml", "[stats]\nproxies = []\n", "stats.proxies"),
        ("zero_timeout.toml", "[stats]\nrequest_timeout_secs = 0\n", "stats.request_timeout_secs"),
        ("bad_theme.toml", "[ui]\ntheme_name = \"neon\"\n", "ui.theme_name"),
        ("huge_font.toml", "[ui]\nfont_size = 100\n", "ui.font_size"),
    ];

    for (name, content, expected_field) in cases {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        match ConfigLoader::load_from_path(&path) {
            Err(Error::ConfigValidationFailed { field, .. }) => assert_eq!(field, expected_field),
            other => panic!("{}: unexpected {:?}", name, other.map(|_| ())),
        }
    }
}

#[test]
fn test_unparseable_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[terminal\nprompt = ").unwrap();
    assert!(matches!(
        ConfigLoader::load_from_path(&path),
        Err(Error::ConfigParseFailed { .. })
    ));
}

#[test]
fn test_search_path_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let mut loader = ConfigLoader::with_search_paths(vec![dir.path().join("config")]);
    let (config, path) = loader.load_with_path().unwrap();
    // TERMFOLIO_CONFIG is not set in the test environment
    if std::env::var("TERMFOLIO_CONFIG").is_err() {
        assert_eq!(config, Config::default());
        assert!(path.is_none());
    }
}

#[test]
fn test_save_round_trip_toml() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out").join("config.toml");
    let mut config = Config::default();
    config.terminal.banner = String::new();
    config.ui.theme_name = "green-screen".to_string();

    ConfigLoader::save_to_path(&config, &path).unwrap();
    assert_eq!(ConfigLoader::load_from_path(&path).unwrap(), config);
}
