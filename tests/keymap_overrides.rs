mod common;

use common::TestEnv;
use crossterm::event::{KeyCode, KeyModifiers};
use peekphone::config::Config;
use peekphone::keymap::{Action, KeyBinding, KeymapPreset};

#[test]
fn test_vim_overrides_survive_reload() {
    let env = TestEnv::new();

    let mut config = Config::default();
    config.keymap.preset = KeymapPreset::Vim;
    // 'w' swipes up instead of shift+k / pageup
    config
        .keymap
        .overrides
        .push(KeyBinding::new("w", Action::SwipeUp));
    // 'e' closes the app instead of 'x'
    config
        .keymap
        .overrides
        .push(KeyBinding::new("e", Action::CloseApp));
    env.save(&config);

    let loaded = env.load();
    assert_eq!(loaded.keymap.preset, KeymapPreset::Vim);
    assert_eq!(loaded.keymap.overrides.len(), 2);

    let keymap = &loaded.keymap;
    assert_eq!(
        keymap.get_action(KeyCode::Char('w'), KeyModifiers::NONE),
        Some(Action::SwipeUp)
    );
    assert_eq!(
        keymap.get_action(KeyCode::Char('e'), KeyModifiers::NONE),
        Some(Action::CloseApp)
    );

    // Overriding an action removes every preset binding for it.
    assert_eq!(
        keymap.get_action(KeyCode::Char('K'), KeyModifiers::SHIFT),
        None
    );
    assert_eq!(keymap.get_action(KeyCode::PageUp, KeyModifiers::NONE), None);
    assert_eq!(
        keymap.get_action(KeyCode::Char('x'), KeyModifiers::NONE),
        None
    );

    // Untouched preset bindings keep working.
    assert_eq!(
        keymap.get_action(KeyCode::Char('J'), KeyModifiers::SHIFT),
        Some(Action::SwipeDown)
    );
    assert_eq!(
        keymap.get_action(KeyCode::Char('k'), KeyModifiers::NONE),
        Some(Action::MoveUp)
    );
}

#[test]
fn test_override_shadows_preset_key() {
    let env = TestEnv::new();

    let mut config = Config::default();
    config.keymap.preset = KeymapPreset::Vim;
    // 'j' becomes a swipe down instead of MoveDown
    config
        .keymap
        .overrides
        .push(KeyBinding::new("j", Action::SwipeDown));
    env.save(&config);

    let keymap = env.load().keymap;
    assert_eq!(
        keymap.get_action(KeyCode::Char('j'), KeyModifiers::NONE),
        Some(Action::SwipeDown)
    );
    // MoveDown keeps its arrow binding
    assert_eq!(
        keymap.get_action(KeyCode::Down, KeyModifiers::NONE),
        Some(Action::MoveDown)
    );
    assert_eq!(
        keymap.get_action(KeyCode::Char('h'), KeyModifiers::NONE),
        Some(Action::MoveLeft)
    );
}

#[test]
fn test_override_with_modifiers() {
    let env = TestEnv::new();

    let mut config = Config::default();
    config
        .keymap
        .overrides
        .push(KeyBinding::new("ctrl+b", Action::BrightnessUp));
    env.save(&config);

    let keymap = env.load().keymap;
    assert_eq!(
        keymap.get_action(KeyCode::Char('b'), KeyModifiers::CONTROL),
        Some(Action::BrightnessUp)
    );
    assert_ne!(
        keymap.get_action(KeyCode::Char('b'), KeyModifiers::NONE),
        Some(Action::BrightnessUp)
    );
    assert_eq!(
        keymap.get_action(KeyCode::Char('+'), KeyModifiers::NONE),
        None
    );
}

#[test]
fn test_keymap_serialization_format() {
    let env = TestEnv::new();

    let mut config = Config::default();
    config.keymap.preset = KeymapPreset::Vim;
    config
        .keymap
        .overrides
        .push(KeyBinding::new("f1", Action::Help));
    config
        .keymap
        .overrides
        .push(KeyBinding::new("ctrl+q", Action::Quit));
    env.save(&config);

    let content = std::fs::read_to_string(&env.config_path).unwrap();
    assert!(content.contains("[keymap]"));
    assert!(content.contains("preset = \"vim\""));
    assert!(content.contains("overrides"));
    assert!(content.contains("action = \"help\""));

    let keymap = env.load().keymap;
    assert_eq!(keymap.preset, KeymapPreset::Vim);
    assert_eq!(
        keymap.get_action(KeyCode::F(1), KeyModifiers::NONE),
        Some(Action::Help)
    );
    assert_eq!(
        keymap.get_action(KeyCode::Char('q'), KeyModifiers::CONTROL),
        Some(Action::Quit)
    );
    assert_eq!(
        keymap.get_action(KeyCode::Char('q'), KeyModifiers::NONE),
        None
    );
}
