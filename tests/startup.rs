//! Configuration loading through startup.

use meeting_router::config::loader::ConfigError;
use meeting_router::lifecycle::startup::{self, StartupError};
use meeting_router::routing::RouteStatus;
use meeting_router::History;

mod common;

#[test]
fn test_start_from_config_file() {
    let path = common::write_temp_config(
        "start",
        r##"
            [router]
            initial_fragment = "#/settings"

            [[routes]]
            path = "/"
            name = "meeting"
            view = "TauriCallView"

            [[routes]]
            path = "/settings"
            name = "settings"
            view = "SettingsView"

            [[routes]]
            path = "/devices"
            name = "devices"
            view = "DeviceView"
        "##,
    );

    let config = startup::load_or_default(Some(&path)).unwrap();
    std::fs::remove_file(&path).unwrap_or_default();

    let mut started = startup::start(&config).unwrap();
    assert_eq!(started.router.table().len(), 3);
    assert_eq!(started.router.current_route_snapshot().route_name(), Some("settings"));

    started.router.navigate_to("devices", Default::default()).unwrap();
    assert_eq!(started.history.fragment(), "#/devices");
}

#[test]
fn test_invalid_config_file_aborts() {
    let path = common::write_temp_config(
        "invalid",
        r#"
            [router.unresolved]
            policy = "redirect"
            route = "lobby"

            [[routes]]
            path = "settings"
            name = "settings"
            view = "SettingsView"
        "#,
    );

    let err = startup::load_or_default(Some(&path)).unwrap_err();
    std::fs::remove_file(&path).unwrap_or_default();

    match err {
        StartupError::Config(ConfigError::Validation(errors)) => assert_eq!(errors.len(), 2),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_start_on_unknown_fragment() {
    let mut config = startup::load_or_default(None).unwrap();
    config.router.initial_fragment = "#/lobby".into();

    let started = startup::start(&config).unwrap();
    let snapshot = started.router.current_route_snapshot();
    assert_eq!(snapshot.status, RouteStatus::Unresolved);
    assert_eq!(snapshot.current_path, "/lobby");
}
