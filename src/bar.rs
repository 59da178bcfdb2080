//! Status bars and their widgets.
//!
//! Widgets are descriptors the host's bar renderer consumes; their order is
//! left-to-right placement, with a stretch spacer pushing everything after
//! it to the right edge.

use serde::{Deserialize, Serialize};

use crate::theme::PaletteIndex;

/// How a spacer takes up room.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpacerLength {
    /// Consumes all remaining space, pushing later widgets to the right.
    Stretch,
    /// A fixed length in pixels.
    Fixed(u32),
}

/// How the group box highlights the current group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HighlightMethod {
    Line,
    Block,
    Text,
}

/// The group indicator widget.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupBox {
    pub active: PaletteIndex,
    pub inactive: PaletteIndex,
    pub rounded: bool,
    pub highlight_color: PaletteIndex,
    pub highlight_method: HighlightMethod,
    pub this_current_screen_border: PaletteIndex,
    pub this_screen_border: PaletteIndex,
    pub other_current_screen_border: PaletteIndex,
    pub other_screen_border: PaletteIndex,
    pub foreground: PaletteIndex,
    pub background: PaletteIndex,
}

/// The distribution update checker widget.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckUpdates {
    /// Seconds between checks.
    pub update_interval: u64,
    pub distro: String,
    pub display_format: String,
    pub foreground: PaletteIndex,
    pub background: PaletteIndex,
    /// Command line spawned when the widget is clicked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub click_command: Option<String>,
}

/// A bar widget descriptor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Widget {
    GroupBox(GroupBox),
    Spacer { length: SpacerLength },
    Systray,
    Sep,
    Battery { format: String },
    CheckUpdates(CheckUpdates),
    Clock { format: String },
    CurrentLayout,
}

impl Widget {
    /// Every palette index this widget references.
    pub fn palette_refs(&self) -> Vec<PaletteIndex> {
        match self {
            Widget::GroupBox(group_box) => vec![
                group_box.active,
                group_box.inactive,
                group_box.highlight_color,
                group_box.this_current_screen_border,
                group_box.this_screen_border,
                group_box.other_current_screen_border,
                group_box.other_screen_border,
                group_box.foreground,
                group_box.background,
            ],
            Widget::CheckUpdates(check) => vec![check.foreground, check.background],
            _ => Vec::new(),
        }
    }
}

/// Font and padding defaults applied to every widget.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetDefaults {
    pub font: String,
    pub fontsize: u32,
    pub padding: u32,
    pub background: PaletteIndex,
}

impl WidgetDefaults {
    /// The stock widget defaults.
    pub fn stock() -> Self {
        Self {
            font: "mononoki Nerd Font Mono".into(),
            fontsize: 15,
            padding: 2,
            background: PaletteIndex(0),
        }
    }
}

/// A status bar: its widgets plus size and opacity.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub size: u32,
    pub opacity: f64,
    pub widgets: Vec<Widget>,
}

/// A physical display, with an optional bar along its top edge.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Screen {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<Bar>,
}

impl Screen {
    /// A screen with the stock top bar.
    pub fn with_stock_bar(terminal: &str) -> Self {
        Self {
            top: Some(Bar {
                size: 30,
                opacity: 0.9,
                widgets: status_widgets(terminal),
            }),
        }
    }
}

/// Builds the stock widget list. Called once per screen so each bar owns its
/// own widget instances; palette indices refer to the stock palette. The
/// update checker spawns a system upgrade in `terminal` when clicked.
pub fn status_widgets(terminal: &str) -> Vec<Widget> {
    vec![
        Widget::GroupBox(GroupBox {
            active: PaletteIndex(2),
            inactive: PaletteIndex(7),
            rounded: false,
            highlight_color: PaletteIndex(1),
            highlight_method: HighlightMethod::Line,
            this_current_screen_border: PaletteIndex(6),
            this_screen_border: PaletteIndex(4),
            other_current_screen_border: PaletteIndex(6),
            other_screen_border: PaletteIndex(4),
            foreground: PaletteIndex(2),
            background: PaletteIndex(0),
        }),
        Widget::Spacer {
            length: SpacerLength::Stretch,
        },
        Widget::Systray,
        Widget::Sep,
        Widget::Battery {
            format: "{percent:2.0%}".into(),
        },
        Widget::Sep,
        Widget::CheckUpdates(CheckUpdates {
            update_interval: 1800,
            distro: "Arch_checkupdates".into(),
            display_format: "{updates} Updates".into(),
            foreground: PaletteIndex(2),
            background: PaletteIndex(5),
            click_command: Some(format!("{terminal} -e sudo pacman -Syu")),
        }),
        Widget::Sep,
        Widget::Clock {
            format: "%d/%m|%H:%M:%S".into(),
        },
        Widget::Sep,
        Widget::CurrentLayout,
        Widget::Sep,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_returns_equal_but_independent_lists() {
        let mut first = status_widgets("alacritty");
        let second = status_widgets("alacritty");

        assert_eq!(first, second);

        // Mutating one list leaves the other untouched.
        first.pop();
        assert_ne!(first, second);
        assert_eq!(second, status_widgets("alacritty"));
    }

    #[test]
    fn group_box_reports_all_palette_refs() {
        let widgets = status_widgets("alacritty");
        let Widget::GroupBox(_) = &widgets[0] else {
            panic!("first widget should be the group box");
        };

        assert_eq!(widgets[0].palette_refs().len(), 9);
        assert!(widgets[1].palette_refs().is_empty());
    }

    #[test]
    fn stretch_spacer_sits_between_left_and_right_halves() {
        let widgets = status_widgets("alacritty");
        let stretch = widgets.iter().position(|w| {
            matches!(
                w,
                Widget::Spacer {
                    length: SpacerLength::Stretch
                }
            )
        });

        assert_eq!(stretch, Some(1));
    }
}
