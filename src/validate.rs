//! Structural validation.
//!
//! These are the checks a host would otherwise only hit at dispatch time:
//! shadowed binds, groups nobody can reach, palette indices pointing past
//! the end of the palette. [`Config::check`] collects every violation so a
//! user fixes them in one pass; [`Config::validate`] turns a non-empty list
//! into an error.

use std::fmt;

use indexmap::IndexSet;

use crate::action::Action;
use crate::config::Config;
use crate::group::MAX_NUMERIC_GROUPS;
use crate::input::{Key, Mod, MouseBind, MouseButton};
use crate::theme::PaletteIndex;

/// A single structural violation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Two keybinds share a modifier set and key; the host would let the
    /// later one silently shadow the earlier one.
    #[error("duplicate keybind {mods}+{key}")]
    DuplicateKeybind { mods: Mod, key: Key },
    #[error("duplicate {kind} mousebind {mods}+{button}")]
    DuplicateMousebind {
        mods: Mod,
        button: MouseButton,
        kind: &'static str,
    },
    #[error("duplicate group `{name}`")]
    DuplicateGroup { name: String },
    #[error("{count} groups declared, but numeric keys only cover {MAX_NUMERIC_GROUPS}")]
    TooManyGroups { count: usize },
    /// A group is missing its `mod+n` switch bind or `mod+shift+n` move
    /// bind, so the generated numeric binds don't number two per group.
    #[error("group `{name}` is missing its numeric keybinds")]
    MissingGroupBinds { name: String },
    #[error("`{name}` is not a declared group (referenced by {location})")]
    UnknownGroup { name: String, location: String },
    #[error("palette index {index} is out of bounds ({len} entries) at {location}")]
    PaletteIndexOutOfBounds {
        index: PaletteIndex,
        len: usize,
        location: String,
    },
    /// Layout cycling needs at least one entry to land on.
    #[error("the layout list is empty")]
    EmptyLayoutList,
}

/// All violations found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub struct InvalidConfig(pub Vec<ValidationError>);

impl fmt::Display for InvalidConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} configuration error(s):", self.0.len())?;
        for error in &self.0 {
            writeln!(f, "  - {error}")?;
        }
        Ok(())
    }
}

impl Config {
    /// Collects every structural violation in this configuration.
    pub fn check(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        self.check_keybinds(&mut errors);
        self.check_mousebinds(&mut errors);
        self.check_groups(&mut errors);
        self.check_palette_refs(&mut errors);

        if self.layouts.is_empty() {
            errors.push(ValidationError::EmptyLayoutList);
        }

        errors
    }

    /// Errors if [`Config::check`] finds anything.
    pub fn validate(&self) -> Result<(), InvalidConfig> {
        let errors = self.check();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(InvalidConfig(errors))
        }
    }

    fn check_keybinds(&self, errors: &mut Vec<ValidationError>) {
        let mut seen = IndexSet::new();

        for bind in &self.keys {
            if !seen.insert((bind.mods, bind.key)) {
                errors.push(ValidationError::DuplicateKeybind {
                    mods: bind.mods,
                    key: bind.key,
                });
            }
        }
    }

    fn check_mousebinds(&self, errors: &mut Vec<ValidationError>) {
        let mut seen = IndexSet::new();

        for bind in &self.mouse {
            let kind = match bind {
                MouseBind::Drag { .. } => "drag",
                MouseBind::Click { .. } => "click",
            };

            if !seen.insert((bind.mods(), bind.button(), kind)) {
                errors.push(ValidationError::DuplicateMousebind {
                    mods: bind.mods(),
                    button: bind.button(),
                    kind,
                });
            }
        }
    }

    fn check_groups(&self, errors: &mut Vec<ValidationError>) {
        let mut names = IndexSet::new();

        for group in &self.groups {
            if !names.insert(group.name.as_str()) {
                errors.push(ValidationError::DuplicateGroup {
                    name: group.name.clone(),
                });
            }
        }

        if self.groups.len() > MAX_NUMERIC_GROUPS {
            errors.push(ValidationError::TooManyGroups {
                count: self.groups.len(),
            });
        } else {
            self.check_numeric_binds(errors);
        }

        // Binds pointing at groups that don't exist
        for (i, bind) in self.keys.iter().enumerate() {
            if let Action::Group(group_action) = &bind.action {
                let name = group_action.group_name();
                if !names.contains(name) {
                    errors.push(ValidationError::UnknownGroup {
                        name: name.to_string(),
                        location: format!("keys[{i}]"),
                    });
                }
            }
        }
    }

    /// Each group at 1-based position `n` needs both its `mod+n` switch
    /// bind and its `mod+shift+n` move bind.
    fn check_numeric_binds(&self, errors: &mut Vec<ValidationError>) {
        for (i, group) in self.groups.iter().enumerate() {
            let Some(key) = Key::digit(i + 1) else {
                continue;
            };

            let has = |mods: Mod, action: &Action| {
                self.keys
                    .iter()
                    .any(|bind| bind.mods == mods && bind.key == key && bind.action == *action)
            };

            let switch = Action::Group(crate::action::GroupAction::Switch {
                name: group.name.clone(),
            });
            let move_window = Action::Group(crate::action::GroupAction::MoveWindow {
                name: group.name.clone(),
            });

            if !has(self.mod_key, &switch) || !has(self.mod_key | Mod::SHIFT, &move_window) {
                errors.push(ValidationError::MissingGroupBinds {
                    name: group.name.clone(),
                });
            }
        }
    }

    fn check_palette_refs(&self, errors: &mut Vec<ValidationError>) {
        let len = self.palette.len();

        let check = |index: PaletteIndex, location: String, errors: &mut Vec<ValidationError>| {
            if self.palette.get(index).is_none() {
                errors.push(ValidationError::PaletteIndexOutOfBounds {
                    index,
                    len,
                    location,
                });
            }
        };

        check(
            self.widget_defaults.background,
            "widget_defaults.background".into(),
            errors,
        );
        check(
            self.extension_defaults.background,
            "extension_defaults.background".into(),
            errors,
        );

        for (i, bind) in self.keys.iter().enumerate() {
            for index in bind.action.palette_refs() {
                check(index, format!("keys[{i}]"), errors);
            }
        }

        for (s, screen) in self.screens.iter().enumerate() {
            let Some(bar) = &screen.top else { continue };
            for (w, widget) in bar.widgets.iter().enumerate() {
                for index in widget.palette_refs() {
                    check(index, format!("screens[{s}].top.widgets[{w}]"), errors);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::group::Group;
    use crate::input::Keybind;
    use crate::layout::LayoutKind;
    use crate::theme::Palette;

    #[test]
    fn stock_config_is_valid() {
        let config = Config::default();
        assert_eq!(config.check(), Vec::new());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn duplicate_keybinds_are_reported() {
        let mut config = Config::default();
        config.keys.push(Keybind::new(
            Mod::SUPER,
            Key::Return,
            Action::Quit,
        ));

        let errors = config.check();
        assert!(errors.contains(&ValidationError::DuplicateKeybind {
            mods: Mod::SUPER,
            key: Key::Return,
        }));
    }

    #[test]
    fn duplicate_mousebinds_are_reported() {
        let mut config = Config::default();
        config.mouse.push(config.mouse[0].clone());

        let errors = config.check();
        assert!(errors.iter().any(|e| matches!(
            e,
            ValidationError::DuplicateMousebind { kind: "drag", .. }
        )));
    }

    #[test]
    fn too_many_groups_is_an_error() {
        let mut config = Config::default();
        for name in ["G8", "G9", "G10"] {
            config.groups.push(Group::new(name, LayoutKind::Bsp));
        }

        let errors = config.check();
        assert!(errors.contains(&ValidationError::TooManyGroups { count: 10 }));
        // The per-group bind check is skipped when the count is over the limit.
        assert!(!errors
            .iter()
            .any(|e| matches!(e, ValidationError::MissingGroupBinds { .. })));
    }

    #[test]
    fn group_without_numeric_binds_is_reported() {
        let mut config = Config::default();
        config.groups.push(Group::new("GFX", LayoutKind::Bsp));

        let errors = config.check();
        assert!(errors.contains(&ValidationError::MissingGroupBinds {
            name: "GFX".into(),
        }));
    }

    #[test]
    fn unknown_group_reference_is_reported() {
        let mut config = Config::default();
        config.keys.push(Keybind::new(
            Mod::SUPER | Mod::CTRL,
            Key::Z,
            Action::Group(crate::action::GroupAction::Switch {
                name: "NOPE".into(),
            }),
        ));

        let errors = config.check();
        assert!(errors.iter().any(|e| matches!(
            e,
            ValidationError::UnknownGroup { name, .. } if name == "NOPE"
        )));
    }

    #[test]
    fn out_of_bounds_palette_index_is_reported() {
        let mut config = Config::default();
        config.palette = Palette::new([]);

        let errors = config.check();
        assert!(errors.iter().any(|e| matches!(
            e,
            ValidationError::PaletteIndexOutOfBounds { len: 0, .. }
        )));
    }

    #[test]
    fn empty_layout_list_is_an_error() {
        let mut config = Config::default();
        config.layouts.entries.clear();

        assert!(config.check().contains(&ValidationError::EmptyLayoutList));
    }
}
