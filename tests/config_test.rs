use std::path::Path;

use mergington_activities::config::{AppConfig, LogFormat};
use tempfile::TempDir;

#[test]
fn defaults_when_no_file_present() {
    let config = AppConfig::load_from(Path::new("definitely/not/here.toml"))
        .expect("missing config file should fall back to defaults");

    assert_eq!(config.bind_addr(), "0.0.0.0:8000");
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.format, LogFormat::Text);
    assert_eq!(
        config.static_dir().as_deref(),
        Some(Path::new("static"))
    );
}

#[test]
fn file_values_override_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[server]
host = "127.0.0.1"
port = 9100

[logging]
level = ""
format = "json"

[static_files]
dir = "  "
"#,
    )
    .unwrap();

    let config = AppConfig::load_from(&path).unwrap();

    assert_eq!(config.bind_addr(), "127.0.0.1:9100");
    assert_eq!(config.logging.format, LogFormat::Json);
    // blank level falls back to info
    assert_eq!(config.logging.level, "info");
    assert!(config.static_dir().is_none());
}

#[test]
fn unknown_log_format_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    std::fs::write(&path, "[logging]\nformat = \"xml\"\n").unwrap();

    assert!(AppConfig::load_from(&path).is_err());
}
