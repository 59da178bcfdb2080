//! The top-level configuration.
//!
//! [`Config::default`] assembles the stock configuration the same way the
//! host would read it from disk: top to bottom, once, never mutated
//! afterwards. [`Config::load`] reads the same structure from
//! `config.toml` in a config directory, falling back to the stock
//! configuration when the file is missing or malformed.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::action::{Action, DragAction, LayoutAction, MenuRun, WindowAction};
use crate::bar::{Screen, WidgetDefaults};
use crate::group::{numeric_group_binds, Group};
use crate::input::{Key, Keybind, Mod, MouseBind, MouseButton};
use crate::layout::{FloatingLayout, LayoutKind, LayoutStyle, Layouts};
use crate::rules::MatchRule;
use crate::theme::{Palette, PaletteIndex};

/// What the host does when a window requests activation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FocusBehavior {
    /// Focus the window only if it is on the current group.
    Smart,
    /// Mark the window urgent instead of focusing it.
    Urgent,
    /// Always focus the window.
    Focus,
    /// Ignore the request.
    Never,
}

/// Everything the host reads at startup.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// The primary modifier every stock bind hangs off of.
    #[serde(rename = "mod")]
    pub mod_key: Mod,
    /// The terminal emulator spawned by `mod+return`.
    pub terminal: String,
    pub palette: Palette,
    pub keys: Vec<Keybind>,
    pub groups: Vec<Group>,
    pub layouts: Layouts,
    pub screens: Vec<Screen>,
    pub mouse: Vec<MouseBind>,
    pub widget_defaults: WidgetDefaults,
    pub extension_defaults: WidgetDefaults,
    /// Name of a host-side binder for dynamically created groups. The stock
    /// configuration binds its groups explicitly, so this stays unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dgroups_key_binder: Option<String>,
    /// Rules applied to windows spawned into dynamic groups.
    pub dgroups_app_rules: Vec<MatchRule>,
    pub follow_mouse_focus: bool,
    pub bring_front_click: bool,
    pub cursor_warp: bool,
    pub floating_layout: FloatingLayout,
    pub auto_fullscreen: bool,
    pub focus_on_window_activation: FocusBehavior,
    pub reconfigure_screens: bool,
    /// Whether windows may minimize themselves when they lose focus.
    pub auto_minimize: bool,
    /// The WM name reported to clients. Some Java toolkits only behave when
    /// it names a WM on their whitelist.
    pub wmname: String,
}

impl Default for Config {
    fn default() -> Self {
        let mod_key = Mod::SUPER;
        let terminal = guess_terminal();
        let palette = Palette::stock();

        let mut keys = stock_keys(mod_key, &terminal, &palette);
        let groups = stock_groups();
        keys.extend(
            numeric_group_binds(mod_key, &groups)
                .expect("the stock group count fits the digit row"),
        );

        let widget_defaults = WidgetDefaults::stock();

        Self {
            mod_key,
            palette,
            keys,
            groups,
            layouts: Layouts::new(
                [LayoutKind::MasterStack, LayoutKind::Bsp, LayoutKind::RatioTile],
                LayoutStyle::stock(),
            ),
            screens: vec![
                Screen::with_stock_bar(&terminal),
                Screen::with_stock_bar(&terminal),
            ],
            mouse: vec![
                MouseBind::Drag {
                    mods: mod_key,
                    button: MouseButton::Left,
                    action: DragAction::MoveFloating,
                },
                MouseBind::Drag {
                    mods: mod_key,
                    button: MouseButton::Right,
                    action: DragAction::ResizeFloating,
                },
                MouseBind::Click {
                    mods: mod_key,
                    button: MouseButton::Middle,
                    action: Action::Window(WindowAction::BringToFront),
                },
            ],
            extension_defaults: widget_defaults.clone(),
            widget_defaults,
            dgroups_key_binder: None,
            dgroups_app_rules: Vec::new(),
            follow_mouse_focus: true,
            bring_front_click: false,
            cursor_warp: false,
            floating_layout: FloatingLayout::with_default_rules(
                LayoutStyle::stock(),
                [
                    // gitk
                    MatchRule::class("confirmreset"),
                    MatchRule::class("makebranch"),
                    MatchRule::class("maketag"),
                    MatchRule::class("ssh-askpass"),
                    MatchRule::title("branchdialog"),
                    // GPG key password entry
                    MatchRule::title("pinentry"),
                ],
            ),
            auto_fullscreen: true,
            focus_on_window_activation: FocusBehavior::Smart,
            reconfigure_screens: true,
            auto_minimize: false,
            wmname: "LG3D".into(),
            terminal,
        }
    }
}

/// The stock groups, all starting on the master-stack layout.
pub fn stock_groups() -> Vec<Group> {
    "WWW DEV SYS CHAT MUS VIS ETC"
        .split_whitespace()
        .map(|name| Group::new(name, LayoutKind::MasterStack))
        .collect()
}

/// The stock keybind list, before numeric group binds are appended.
fn stock_keys(mod_key: Mod, terminal: &str, palette: &Palette) -> Vec<Keybind> {
    let spawn = |command: &str| Action::Spawn {
        command: command.into(),
    };

    vec![
        // Focus movement
        Keybind::new(mod_key, Key::H, Action::Layout(LayoutAction::FocusLeft))
            .desc("Move focus to left"),
        Keybind::new(mod_key, Key::L, Action::Layout(LayoutAction::FocusRight))
            .desc("Move focus to right"),
        Keybind::new(mod_key, Key::J, Action::Layout(LayoutAction::FocusDown))
            .desc("Move focus down"),
        Keybind::new(mod_key, Key::K, Action::Layout(LayoutAction::FocusUp)).desc("Move focus up"),
        Keybind::new(mod_key, Key::Space, Action::Layout(LayoutAction::FocusNext))
            .desc("Move window focus to other window"),
        // Window movement within the current stack
        Keybind::new(
            mod_key | Mod::SHIFT,
            Key::H,
            Action::Layout(LayoutAction::ShuffleLeft),
        )
        .desc("Move window to the left"),
        Keybind::new(
            mod_key | Mod::SHIFT,
            Key::L,
            Action::Layout(LayoutAction::ShuffleRight),
        )
        .desc("Move window to the right"),
        Keybind::new(
            mod_key | Mod::SHIFT,
            Key::J,
            Action::Layout(LayoutAction::ShuffleDown),
        )
        .desc("Move window down"),
        Keybind::new(
            mod_key | Mod::SHIFT,
            Key::K,
            Action::Layout(LayoutAction::ShuffleUp),
        )
        .desc("Move window up"),
        // Resizing. Growing into a screen edge shrinks the window instead.
        Keybind::new(
            mod_key | Mod::CTRL,
            Key::H,
            Action::Layout(LayoutAction::GrowLeft),
        )
        .desc("Grow window to the left"),
        Keybind::new(
            mod_key | Mod::CTRL,
            Key::L,
            Action::Layout(LayoutAction::GrowRight),
        )
        .desc("Grow window to the right"),
        Keybind::new(
            mod_key | Mod::CTRL,
            Key::J,
            Action::Layout(LayoutAction::GrowDown),
        )
        .desc("Grow window down"),
        Keybind::new(
            mod_key | Mod::CTRL,
            Key::K,
            Action::Layout(LayoutAction::GrowUp),
        )
        .desc("Grow window up"),
        Keybind::new(mod_key, Key::N, Action::Layout(LayoutAction::Normalize))
            .desc("Reset all window sizes"),
        Keybind::new(
            mod_key | Mod::SHIFT,
            Key::Return,
            Action::Layout(LayoutAction::ToggleSplit),
        )
        .desc("Toggle between split and unsplit sides of stack"),
        // Application launchers
        Keybind::new(mod_key, Key::Return, spawn(terminal)).desc("Launch terminal"),
        Keybind::new(mod_key, Key::T, spawn("brave")).desc("Launch Brave"),
        Keybind::new(mod_key, Key::Y, spawn("ytmdesktop")).desc("Launch Youtube Music"),
        Keybind::new(mod_key, Key::D, spawn("discord")).desc("Launch Discord"),
        Keybind::new(mod_key, Key::A, spawn("anki")).desc("Launch Anki"),
        // Layout cycling and session control
        Keybind::new(mod_key, Key::Tab, Action::NextLayout).desc("Toggle between layouts"),
        Keybind::new(mod_key, Key::W, Action::Window(WindowAction::Close))
            .desc("Kill focused window"),
        Keybind::new(mod_key | Mod::CTRL, Key::R, Action::ReloadConfig)
            .desc("Reload the configuration"),
        Keybind::new(mod_key | Mod::CTRL, Key::Q, Action::Quit).desc("Shut down tatami"),
        // Menu runners
        Keybind::new(
            mod_key,
            Key::R,
            Action::MenuRun(MenuRun {
                prompt: ">".into(),
                font: "mononoki Nerd Font Mono".into(),
                height: 30,
                background: PaletteIndex(0),
                foreground: PaletteIndex(7),
                selected_background: PaletteIndex(4),
                selected_foreground: PaletteIndex(2),
            }),
        ),
        Keybind::new(mod_key, Key::P, spawn(&passmenu_command(palette))).desc("Run Passmenu"),
        // Screen focus
        Keybind::new(mod_key, Key::V, Action::FocusScreen(0)),
        Keybind::new(mod_key, Key::B, Action::FocusScreen(1)),
    ]
}

/// The passmenu invocation, styled from the palette. The launcher takes
/// colors on its command line, so indices are resolved here at assembly
/// time rather than carried as data.
fn passmenu_command(palette: &Palette) -> String {
    let top = |index: usize| {
        palette
            .get(PaletteIndex(index))
            .map(|pair| pair.top.to_string())
            .unwrap_or_default()
    };

    format!(
        "passmenu -nb {} -nf {} -sb {} -sf {} -fn \"mononoki Nerd Font Mono\" -h 30 -p £",
        top(0),
        top(7),
        top(4),
        top(2),
    )
}

/// Terminal emulators probed by [`guess_terminal`], in preference order.
const TERMINALS: [&str; 8] = [
    "alacritty", "kitty", "foot", "wezterm", "st", "urxvt", "uxterm", "xterm",
];

/// Picks the first known terminal emulator found on `PATH`.
pub fn guess_terminal() -> String {
    let path = std::env::var_os("PATH").unwrap_or_default();

    for terminal in TERMINALS {
        if std::env::split_paths(&path).any(|dir| dir.join(terminal).is_file()) {
            return terminal.to_string();
        }
    }

    tracing::warn!("No known terminal emulator found on PATH, defaulting to xterm");
    "xterm".to_string()
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Returns the config dir. This is `$TATAMI_CONFIG_DIR` shell-expanded, or
/// the XDG config home for `tatami` if that isn't set.
pub fn config_dir() -> Option<PathBuf> {
    let from_env = std::env::var("TATAMI_CONFIG_DIR")
        .ok()
        .and_then(|s| Some(PathBuf::from(shellexpand::full(&s).ok()?.to_string())));

    from_env.or_else(|| xdg::BaseDirectories::with_prefix("tatami").get_config_home())
}

impl Config {
    /// Reads `config.toml` from `config_dir`. Missing fields take their
    /// stock values.
    pub fn load(config_dir: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = config_dir.as_ref().join("config.toml");

        tracing::info!("Loading config at {}", path.display());

        let text = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;

        toml::from_str(&text).map_err(|source| ConfigError::Parse { path, source })
    }

    /// Like [`Config::load`], but falls back to the stock configuration
    /// when the file is missing or malformed.
    pub fn load_or_default(config_dir: impl AsRef<Path>) -> Self {
        match Self::load(config_dir) {
            Ok(config) => config,
            Err(err) => {
                tracing::error!("Failed to load config: {err}");
                tracing::info!("Falling back to the stock configuration");
                Self::default()
            }
        }
    }
}
