//! Configuration loading and its effect on the rest of the crate.

use std::collections::BTreeMap;
use std::time::Duration;
use tour_carousel::observability::init_tracing;
use tour_carousel::{initialize, CarouselError, Config, SourceKind};

const FULL: &str = r#"
trace_level = "debug"
log_file = "/var/log/tour-carousel.log"

[cms]
base_url = "https://cms.tanzaniawonderland.example"
api_token = "token-from-file"
timeout_secs = 7

[content]
source = "file"
file = "~/tours.json"
placeholder_image = "/img/placeholder.png"
page_size = 50

[carousel]
autoplay_interval_ms = 2400
teleport_guard_ms = 45
slide_width = 320.0
slide_gap = 16.0
smooth_scroll_ms = 250
"#;

#[test]
fn full_file_round_trips_every_setting() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("carousel.toml");
    std::fs::write(&file, FULL).unwrap();

    let config = Config::from_file(&file).unwrap();
    assert_eq!(config.trace_level, "debug");
    assert_eq!(config.cms.api_token.as_deref(), Some("token-from-file"));
    assert_eq!(config.cms_timeout(), Duration::from_secs(7));
    assert_eq!(config.content.source, SourceKind::File);
    assert_eq!(config.content.placeholder_image, "/img/placeholder.png");

    let options = config.carousel_options();
    assert_eq!(options.autoplay_interval, Duration::from_millis(2400));
    assert_eq!(options.teleport_guard, Duration::from_millis(45));
    assert_eq!(options.page_size, 50);

    let host = config.host_options();
    assert_eq!(host.slide_width, 320.0);
    assert_eq!(host.slide_gap, 16.0);
    assert_eq!(host.smooth_scroll, Duration::from_millis(250));

    let reparsed = Config::from_toml_str(&toml::to_string(&config).unwrap()).unwrap();
    assert_eq!(reparsed, config);
}

#[test]
fn env_wins_over_file() {
    let config = Config::from_toml_str(FULL).unwrap().with_env(&BTreeMap::from([
        ("TOUR_CAROUSEL_SOURCE".to_string(), "HTTP".to_string()),
        ("TOUR_CAROUSEL_API_TOKEN".to_string(), "token-from-env".to_string()),
        ("TOUR_CAROUSEL_FILE".to_string(), "/srv/other.json".to_string()),
        ("UNRELATED".to_string(), "ignored".to_string()),
    ]));

    assert_eq!(config.content.source, SourceKind::Http);
    assert_eq!(config.cms.api_token.as_deref(), Some("token-from-env"));
    assert_eq!(config.content.file.as_deref(), Some(std::path::Path::new("/srv/other.json")));
    assert_eq!(config.cms.base_url, "https://cms.tanzaniawonderland.example");
}

#[test]
fn missing_and_malformed_files_are_reported() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(Config::from_file(&dir.path().join("nope.toml")), Err(CarouselError::Io(_))));

    let bad = dir.path().join("bad.toml");
    std::fs::write(&bad, "[carousel]\nautoplay_interval_ms = \"fast\"\n").unwrap();
    assert!(matches!(Config::from_file(&bad), Err(CarouselError::Config(_))));
}

#[test]
fn zero_autoplay_interval_is_rejected() {
    let err = Config::from_toml_str("[carousel]\nautoplay_interval_ms = 0\n").unwrap_err();
    assert!(matches!(&err, CarouselError::Config(m) if m.contains("autoplay_interval_ms")));

    let config = Config::from_toml_str("[carousel]\nautoplay_interval_ms = 1\n").unwrap();
    assert_eq!(config.carousel_options().autoplay_interval, Duration::from_millis(1));
}

#[test]
fn initialize_applies_carousel_settings() {
    let config = Config::from_toml_str(FULL).unwrap();
    let state = initialize(&config);
    assert_eq!(state.options, config.carousel_options());
    assert_eq!(state.item_count(), 0);
}

#[test]
fn tracing_writes_to_configured_log_file() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("logs").join("carousel.log");
    let config = Config {
        log_file: Some(log.clone()),
        ..Config::default()
    };

    init_tracing(&config);
    init_tracing(&config);
    tracing::error!(probe = "config-test", "log file probe");

    let written = std::fs::read_to_string(&log).unwrap();
    assert!(written.contains("log file probe"));
    assert!(written.contains("config-test"));
}
