//! Layouts: the cyclic layout list, shared styling, and the floating layout.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::rules::MatchRule;
use crate::theme::Color;

/// A tiling algorithm the host implements.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutKind {
    /// One master window beside a stack.
    MasterStack,
    /// Binary space partitioning.
    Bsp,
    /// Evenly sized tiles in rows.
    RatioTile,
}

/// Border and margin styling shared by every entry in the layout list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutStyle {
    pub border_width: u32,
    pub margin: u32,
    pub border_focus: Color,
    pub border_normal: Color,
}

impl LayoutStyle {
    /// The stock layout theme.
    pub fn stock() -> Self {
        Self {
            border_width: 1,
            margin: 0,
            border_focus: Color::new(0xe1, 0xac, 0xff),
            border_normal: Color::new(0x1d, 0x23, 0x30),
        }
    }
}

/// The ordered layout list. Order defines the cyclic "next layout" sequence,
/// so the list must not be empty.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Layouts {
    pub entries: Vec<LayoutKind>,
    pub style: LayoutStyle,
}

impl Layouts {
    pub fn new(entries: impl IntoIterator<Item = LayoutKind>, style: LayoutStyle) -> Self {
        Self {
            entries: entries.into_iter().collect(),
            style,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Tracks the current layout per group and cycles through the layout list
/// with wraparound.
#[derive(Debug, Default, Clone)]
pub struct LayoutCycle {
    group_indices: IndexMap<String, usize>,
}

impl LayoutCycle {
    pub fn new() -> Self {
        Default::default()
    }

    /// The current layout for `group`, or `None` if the list is empty.
    pub fn current(&self, layouts: &Layouts, group: &str) -> Option<LayoutKind> {
        let index = self.group_indices.get(group).copied().unwrap_or_default();
        layouts.entries.get(index).copied()
    }

    /// Cycles the layout forward for `group`.
    pub fn forward(&mut self, layouts: &Layouts, group: &str) -> Option<LayoutKind> {
        if layouts.is_empty() {
            return None;
        }

        let index = self.group_indices.entry(group.to_string()).or_default();
        *index += 1;
        if *index >= layouts.len() {
            *index = 0;
        }
        layouts.entries.get(*index).copied()
    }

    /// Cycles the layout backward for `group`.
    pub fn backward(&mut self, layouts: &Layouts, group: &str) -> Option<LayoutKind> {
        if layouts.is_empty() {
            return None;
        }

        let index = self.group_indices.entry(group.to_string()).or_default();
        if let Some(i) = index.checked_sub(1) {
            *index = i;
        } else {
            *index = layouts.len() - 1;
        }
        layouts.entries.get(*index).copied()
    }
}

/// The floating layout: its own styling plus the rules selecting which
/// windows float by default.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FloatingLayout {
    pub style: LayoutStyle,
    pub rules: Vec<MatchRule>,
}

impl FloatingLayout {
    /// Builds the floating layout from the host's default float rules
    /// followed by `extra_rules`, preserving first-match-wins order.
    pub fn with_default_rules(
        style: LayoutStyle,
        extra_rules: impl IntoIterator<Item = MatchRule>,
    ) -> Self {
        let mut rules = default_float_rules();
        rules.extend(extra_rules);
        Self { style, rules }
    }
}

/// Window classes that float by default regardless of user rules.
pub fn default_float_rules() -> Vec<MatchRule> {
    [
        "confirm",
        "dialog",
        "download",
        "error",
        "file_progress",
        "notification",
        "splash",
        "toolbar",
    ]
    .into_iter()
    .map(MatchRule::class)
    .collect()
}
