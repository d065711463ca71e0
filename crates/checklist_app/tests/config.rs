use std::path::{Path, PathBuf};
use std::time::Duration;

use checklist_app::{load_config, load_or_default, AppConfig, ConfigError, HttpSource, SourceConfig};
use checklist_core::Check;
use checklist_logging::LogDestination;
use log::LevelFilter;

fn write_config(content: &str) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("checklist.ron");
    std::fs::write(&path, content).expect("write config");
    (dir, path)
}

#[test]
fn missing_default_config_yields_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");

    let config = load_or_default(&dir.path().join("absent.ron")).expect("defaults");

    assert_eq!(config, AppConfig::default());
    assert_eq!(config.source, SourceConfig::Demo);
}

#[test]
fn missing_explicit_config_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");

    let err = load_config(&dir.path().join("absent.ron")).expect_err("should fail");

    assert!(matches!(err, ConfigError::Read { .. }));
}

#[test]
fn http_source_fills_in_defaults() {
    let (_dir, path) = write_config(
        r#"(
            source: Http((url: "http://localhost:9000/checks", request_timeout_secs: 3)),
            log: (destination: Both, level: Debug),
        )"#,
    );

    let config = load_config(&path).expect("config");

    let SourceConfig::Http(http) = &config.source else {
        panic!("expected http source, got {:?}", config.source);
    };
    assert_eq!(http.url, "http://localhost:9000/checks");
    assert_eq!(http.request_timeout_secs, 3);
    assert_eq!(http.connect_timeout_secs, HttpSource::default().connect_timeout_secs);
    assert_eq!(config.log.destination, LogDestination::Both);
    assert_eq!(config.log.level, LevelFilter::Debug);
}

#[test]
fn static_source_lists_checks() {
    let (_dir, path) = write_config(
        r#"(source: Static([(title: "milk"), (title: "eggs", detail: Some("a dozen"))]))"#,
    );

    let config = load_config(&path).expect("config");

    assert_eq!(
        config.source,
        SourceConfig::Static(vec![
            Check::new("milk"),
            Check {
                title: "eggs".to_string(),
                detail: Some("a dozen".to_string()),
            },
        ])
    );
}

#[test]
fn malformed_config_is_a_parse_error() {
    let (_dir, path) = write_config("(source: Nowhere)");

    let err = load_config(&path).expect_err("should fail");

    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn bad_log_level_is_rejected() {
    let (_dir, path) = write_config("(log: (level: Loud))");

    let err = load_config(&path).expect_err("should fail");

    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn shipped_demo_config_loads() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../demos/checklist.ron");

    let config = load_config(&path).expect("demo config parses");

    assert_eq!(
        config.source,
        SourceConfig::File(PathBuf::from("demos/checks.json"))
    );
    assert_eq!(config.log.destination, LogDestination::File);
    assert_eq!(config.log.level, LevelFilter::Debug);
    assert_eq!(config.log.file, PathBuf::from("checklist.log"));
}

#[test]
fn http_fetch_timeout_covers_connect_and_request() {
    let http = SourceConfig::Http(HttpSource {
        url: "http://localhost:9000/checks".to_string(),
        connect_timeout_secs: 2,
        request_timeout_secs: 3,
        ..HttpSource::default()
    });

    assert_eq!(http.fetch_timeout(), Duration::from_secs(5));
}
