//! Groups (virtual desktops) and their numeric keybinds.

use serde::{Deserialize, Serialize};

use crate::action::{Action, GroupAction};
use crate::input::{Key, Keybind, Mod};
use crate::layout::LayoutKind;

/// Numeric group binds use the digit row, so positions past 9 have no key.
pub const MAX_NUMERIC_GROUPS: usize = 9;

/// A named group with the layout it starts on.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub name: String,
    pub layout: LayoutKind,
}

impl Group {
    pub fn new(name: impl Into<String>, layout: LayoutKind) -> Self {
        Self {
            name: name.into(),
            layout,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{count} groups declared, but numeric keys only cover {MAX_NUMERIC_GROUPS}")]
pub struct TooManyGroups {
    pub count: usize,
}

/// Generates the two keybinds each group gets from its 1-based position:
/// `mod+n` switches to the group and `mod+shift+n` moves the focused window
/// to it.
pub fn numeric_group_binds(mod_key: Mod, groups: &[Group]) -> Result<Vec<Keybind>, TooManyGroups> {
    if groups.len() > MAX_NUMERIC_GROUPS {
        return Err(TooManyGroups {
            count: groups.len(),
        });
    }

    let mut binds = Vec::with_capacity(groups.len() * 2);

    for (i, group) in groups.iter().enumerate() {
        let key = Key::digit(i + 1).expect("group count is within the digit range");

        binds.push(
            Keybind::new(
                mod_key,
                key,
                Action::Group(GroupAction::Switch {
                    name: group.name.clone(),
                }),
            )
            .desc(format!("Switch to group {}", group.name)),
        );
        binds.push(
            Keybind::new(
                mod_key | Mod::SHIFT,
                key,
                Action::Group(GroupAction::MoveWindow {
                    name: group.name.clone(),
                }),
            )
            .desc(format!("Move focused window to group {}", group.name)),
        );
    }

    Ok(binds)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn groups(names: &[&str]) -> Vec<Group> {
        names
            .iter()
            .map(|name| Group::new(*name, LayoutKind::MasterStack))
            .collect()
    }

    #[test]
    fn two_binds_per_group() {
        let groups = groups(&["WWW", "DEV", "SYS"]);
        let binds = numeric_group_binds(Mod::SUPER, &groups).unwrap();

        assert_eq!(binds.len(), groups.len() * 2);

        assert_eq!(binds[0].mods, Mod::SUPER);
        assert_eq!(binds[0].key, Key::One);
        assert_eq!(
            binds[0].action,
            Action::Group(GroupAction::Switch { name: "WWW".into() })
        );

        assert_eq!(binds[5].mods, Mod::SUPER | Mod::SHIFT);
        assert_eq!(binds[5].key, Key::Three);
        assert_eq!(
            binds[5].action,
            Action::Group(GroupAction::MoveWindow { name: "SYS".into() })
        );
    }

    #[test]
    fn nine_groups_is_the_limit() {
        let nine = groups(&["1", "2", "3", "4", "5", "6", "7", "8", "9"]);
        assert!(numeric_group_binds(Mod::SUPER, &nine).is_ok());

        let ten = groups(&["1", "2", "3", "4", "5", "6", "7", "8", "9", "10"]);
        assert_eq!(
            numeric_group_binds(Mod::SUPER, &ten),
            Err(TooManyGroups { count: 10 })
        );
    }
}
