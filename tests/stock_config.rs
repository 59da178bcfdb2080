//! Smoke tests over the stock configuration and the TOML loader.

use std::collections::HashSet;
use std::io::Write;

use tatami_config::action::{Action, GroupAction};
use tatami_config::bar::Widget;
use tatami_config::config::FocusBehavior;
use tatami_config::theme::PaletteIndex;
use tatami_config::Config;
use test_log::test;

#[test]
fn stock_keybinds_are_unique() {
    let config = Config::default();

    let mut seen = HashSet::new();
    for bind in &config.keys {
        assert!(
            seen.insert((bind.mods, bind.key)),
            "stock keybind {}+{} is bound twice",
            bind.mods,
            bind.key,
        );
    }
}

#[test]
fn stock_groups_get_two_numeric_binds_each() {
    let config = Config::default();

    let group_names: HashSet<&str> = config.groups.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(group_names.len(), config.groups.len(), "group names repeat");

    let group_binds = config
        .keys
        .iter()
        .filter(|bind| matches!(bind.action, Action::Group(_)))
        .count();
    assert_eq!(group_binds, config.groups.len() * 2);

    // Every group bind points at a declared group.
    for bind in &config.keys {
        if let Action::Group(action) = &bind.action {
            assert!(group_names.contains(action.group_name()));
        }
    }
}

#[test]
fn stock_palette_indices_are_in_bounds() {
    let config = Config::default();

    let mut indices: Vec<PaletteIndex> = vec![
        config.widget_defaults.background,
        config.extension_defaults.background,
    ];
    for bind in &config.keys {
        indices.extend(bind.action.palette_refs());
    }
    for screen in &config.screens {
        let bar = screen.top.as_ref().expect("stock screens have a top bar");
        for widget in &bar.widgets {
            indices.extend(widget.palette_refs());
        }
    }

    assert!(!indices.is_empty());
    for index in indices {
        assert!(
            config.palette.get(index).is_some(),
            "palette index {index} is out of bounds",
        );
    }
}

#[test]
fn stock_config_passes_validation() {
    assert_eq!(Config::default().check(), Vec::new());
}

#[test]
fn stock_config_roundtrips_through_toml() {
    let config = Config::default();

    let toml = toml::to_string(&config).expect("stock config serializes");
    let back: Config = toml::from_str(&toml).expect("serialized stock config deserializes");

    assert_eq!(back, config);
}

#[test]
fn loader_reads_config_from_directory() {
    let dir = tempfile::tempdir().unwrap();
    let mut file = std::fs::File::create(dir.path().join("config.toml")).unwrap();
    write!(
        file,
        r#"
            wmname = "compiz"
            follow_mouse_focus = false
            focus_on_window_activation = "urgent"
        "#
    )
    .unwrap();

    let config = Config::load(dir.path()).unwrap();

    // Overridden fields take the file's values, everything else is stock.
    assert_eq!(config.wmname, "compiz");
    assert!(!config.follow_mouse_focus);
    assert_eq!(config.focus_on_window_activation, FocusBehavior::Urgent);
    assert_eq!(config.groups.len(), 7);
    assert_eq!(config.screens.len(), 2);
}

#[test]
fn loader_falls_back_to_stock_on_missing_file() {
    let dir = tempfile::tempdir().unwrap();

    assert!(Config::load(dir.path()).is_err());
    assert_eq!(Config::load_or_default(dir.path()), Config::default());
}

#[test]
fn loader_falls_back_to_stock_on_malformed_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("config.toml"), "wmname = [not toml").unwrap();

    assert!(Config::load(dir.path()).is_err());
    assert_eq!(Config::load_or_default(dir.path()), Config::default());
}

#[test]
fn stock_bars_follow_the_widget_order() {
    let config = Config::default();
    let bar = config.screens[0]
        .top
        .as_ref()
        .expect("stock screens have a top bar");

    assert_eq!(bar.size, 30);
    assert_eq!(bar.opacity, 0.9);

    assert!(matches!(bar.widgets.first(), Some(Widget::GroupBox(_))));
    assert!(matches!(
        bar.widgets.iter().nth_back(1),
        Some(Widget::CurrentLayout)
    ));
    assert!(matches!(bar.widgets.last(), Some(Widget::Sep)));

    let clock = bar.widgets.iter().find_map(|w| match w {
        Widget::Clock { format } => Some(format.as_str()),
        _ => None,
    });
    assert_eq!(clock, Some("%d/%m|%H:%M:%S"));
}

#[test]
fn numeric_binds_follow_group_order() {
    let config = Config::default();

    let switches: Vec<&str> = config
        .keys
        .iter()
        .filter_map(|bind| match &bind.action {
            Action::Group(GroupAction::Switch { name }) => Some(name.as_str()),
            _ => None,
        })
        .collect();

    assert_eq!(switches, ["WWW", "DEV", "SYS", "CHAT", "MUS", "VIS", "ETC"]);
}
