mod common;

use common::TestEnv;
use peekphone::config::Config;
use peekphone::state::{ControlSwitch, ScreenMachine, ScreenMode, MOUSE_THRESHOLD_PX};
use peekphone::styles::Wallpaper;

#[test]
fn test_defaults_written_on_first_load() {
    let env = TestEnv::new();
    assert!(!env.config_path.exists());

    let config = env.load();
    assert!(env.config_path.exists());
    assert_eq!(config.theme, "dark");
    assert_eq!(config.screen_height, 100);
    assert_eq!(config.wallpaper, Wallpaper::BlueStarryNight);

    let content = std::fs::read_to_string(&env.config_path).unwrap();
    assert!(content.contains("[gestures]"));
    assert!(content.contains("touch_threshold_px = 50.0"));
    assert!(content.contains("[controls]"));
}

#[test]
fn test_phone_settings_roundtrip() {
    let env = TestEnv::new();

    let mut config = Config::default();
    config.theme = "light".to_string();
    config.wallpaper = Wallpaper::RiverValley;
    config.screen_height = 85;
    config.controls.bluetooth = false;
    config.controls.brightness = 20;
    config.gestures.row_height_px = 8.0;
    env.save(&config);

    let loaded = env.load();
    assert_eq!(loaded.theme, "light");
    assert_eq!(loaded.wallpaper, Wallpaper::RiverValley);
    assert_eq!(loaded.screen_height, 85);
    assert!(!loaded.controls.bluetooth);
    assert_eq!(loaded.controls.brightness, 20);
    assert_eq!(loaded.gestures.row_to_px(5), 40.0);
}

#[test]
fn test_partial_file_fills_defaults() {
    let env = TestEnv::new();
    env.write_raw("wallpaper = \"dark_pattern\"\n[controls]\nairplane = true\n");

    let config = env.load();
    assert_eq!(config.wallpaper, Wallpaper::DarkPattern);
    assert_eq!(config.theme, "dark");
    assert!(config.controls.airplane);
    assert!(config.controls.wifi);
    assert_eq!(config.controls.brightness, 75);
    assert_eq!(config.gestures.mouse_threshold_px, MOUSE_THRESHOLD_PX);
}

#[test]
fn test_out_of_range_values_are_clamped() {
    let env = TestEnv::new();
    env.write_raw(
        "screen_height = 200\n\
         [gestures]\n\
         touch_threshold_px = -4.0\n\
         [controls]\n\
         brightness = 250\n",
    );

    let config = env.load();
    assert_eq!(config.screen_height, 130);
    assert_eq!(config.gestures.touch_threshold_px, 50.0);
    assert_eq!(config.controls.brightness, 100);
}

#[test]
fn test_malformed_file_is_an_error() {
    let env = TestEnv::new();
    env.write_raw("screen_height = \"tall\"\n");

    let err = Config::load_or_create(&env.config_path).unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to parse config file"));
}

#[test]
fn test_config_seeds_the_machine() {
    let env = TestEnv::new();
    env.write_raw("[gestures]\ntouch_threshold_px = 20.0\n[controls]\nairplane = true\n");
    let config = env.load();

    let mut machine = ScreenMachine::new()
        .with_thresholds(config.gestures.thresholds())
        .with_controls(config.controls.clone());
    assert!(machine.controls().get(ControlSwitch::Airplane));

    machine.on_pointer_down(100.0);
    assert!(machine.on_pointer_move(80.0).is_some());
    assert_eq!(machine.current_mode(), &ScreenMode::Home);
}
