//! The host command vocabulary.
//!
//! Bindings carry these as inert data; the host interprets them at dispatch
//! time. Spawned command lines are passed through verbatim, so a missing
//! binary only surfaces in the host when the bind fires.

use serde::{Deserialize, Serialize};

use crate::theme::PaletteIndex;

/// A command the host runs when a bind triggers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// A command within the current layout.
    Layout(LayoutAction),
    /// A command on the focused window.
    Window(WindowAction),
    /// A command on a named group.
    Group(GroupAction),
    /// Focuses the screen at the given index.
    FocusScreen(usize),
    /// Cycles to the next layout in the layout list.
    NextLayout,
    /// Spawns a command line.
    Spawn { command: String },
    /// Runs the menu launcher.
    MenuRun(MenuRun),
    /// Reloads the configuration.
    ReloadConfig,
    /// Exits the host.
    Quit,
}

/// Layout navigation and window-arrangement commands.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutAction {
    FocusLeft,
    FocusRight,
    FocusDown,
    FocusUp,
    /// Moves focus to the next window in stacking order.
    FocusNext,
    ShuffleLeft,
    ShuffleRight,
    ShuffleDown,
    ShuffleUp,
    GrowLeft,
    GrowRight,
    GrowDown,
    GrowUp,
    /// Resets all window sizes.
    Normalize,
    /// Toggles between split and unsplit sides of the stack.
    ToggleSplit,
}

/// Commands on the focused window.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowAction {
    /// Closes the focused window.
    Close,
    /// Raises the window above other floating windows.
    BringToFront,
}

/// Commands on a named group.
#[derive(Clone, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupAction {
    /// Switches the current screen to the group.
    Switch { name: String },
    /// Moves the focused window to the group.
    MoveWindow { name: String },
}

impl GroupAction {
    pub fn group_name(&self) -> &str {
        match self {
            GroupAction::Switch { name } | GroupAction::MoveWindow { name } => name,
        }
    }
}

/// What a drag mousebind does to the grabbed floating window.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragAction {
    /// Moves the window with the pointer, floating it if needed.
    MoveFloating,
    /// Resizes the window with the pointer, floating it if needed.
    ResizeFloating,
}

/// The menu launcher invocation, styled from the palette by index.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuRun {
    pub prompt: String,
    pub font: String,
    pub height: u32,
    pub background: PaletteIndex,
    pub foreground: PaletteIndex,
    pub selected_background: PaletteIndex,
    pub selected_foreground: PaletteIndex,
}

impl Action {
    /// Every palette index this action references.
    pub fn palette_refs(&self) -> Vec<PaletteIndex> {
        match self {
            Action::MenuRun(menu) => vec![
                menu.background,
                menu.foreground,
                menu.selected_background,
                menu.selected_foreground,
            ],
            _ => Vec::new(),
        }
    }
}
