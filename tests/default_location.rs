//! Settings at the per-user default location
//!
//! Kept in its own test binary: it points `XDG_CONFIG_HOME` at a temp dir,
//! which would race with other tests reading the environment.

#![cfg(not(target_os = "windows"))]

mod common;

use std::fs;
use std::time::Instant;

use common::{FakeHost, WINDOW_HEIGHT, WINDOW_WIDTH};
use tempfile::TempDir;

use hover_sidebar::config_paths;
use hover_sidebar::geometry::Viewport;
use hover_sidebar::PanelSide::Right;
use hover_sidebar::{HoverConfig, HoverSidebar};

#[test]
fn test_activate_default_loads_and_saves_config_dir() {
    let dir = TempDir::new().unwrap();
    std::env::set_var("XDG_CONFIG_HOME", dir.path());

    let config_file = config_paths::config_file().unwrap();
    assert_eq!(
        config_file,
        dir.path().join("hover-sidebar").join("config.json")
    );

    fs::create_dir_all(config_file.parent().unwrap()).unwrap();
    fs::write(&config_file, r#"{ "rightTriggerDistance": 55, "rightCloseDelay": 300.5 }"#)
        .unwrap();

    let t0 = Instant::now();
    let mut sidebar = HoverSidebar::activate_default(
        FakeHost::default(),
        Viewport::new(WINDOW_WIDTH, WINDOW_HEIGHT),
        t0,
    );
    assert_eq!(sidebar.config().right_trigger_distance, 55.0);
    assert_eq!(sidebar.config().right_close_delay, 300.5);
    assert!(sidebar.host().calls.iter().all(|c| !matches!(c, common::HostCall::Notice(_))));

    sidebar.toggle_floating(Right, t0);

    let saved = HoverConfig::load_from(&config_file);
    assert!(saved.notice.is_none());
    assert!(saved.config.right_floating);
    assert_eq!(saved.config.right_trigger_distance, 55.0);

    let logs = config_paths::ensure_logs_dir().unwrap();
    assert!(logs.starts_with(dir.path()));
    assert!(logs.is_dir());
}
