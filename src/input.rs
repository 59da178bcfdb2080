//! Input bindings.
//!
//! Key and mouse bindings are inert records: a modifier set, a key or
//! button, and the host command to run. The host owns dispatch; this module
//! only declares the data and the identity the validator enforces (no two
//! keybinds may share the same modifier set and key).

use std::fmt;

use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};
use xkeysym::Keysym;

use crate::action::{Action, DragAction};

bitflags::bitflags! {
    /// A keyboard modifier set for use in binds.
    ///
    /// A bind with `Mod::SUPER | Mod::SHIFT` requires both the super and
    /// shift keys to be held down to trigger.
    #[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Default)]
    pub struct Mod: u8 {
        /// The shift key
        const SHIFT = 1;
        /// The ctrl key
        const CTRL = 1 << 1;
        /// The alt key
        const ALT = 1 << 2;
        /// The super key, aka meta, win, mod4
        const SUPER = 1 << 3;
    }
}

/// A single named modifier, the unit [`Mod`] serializes to and from.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Modifier {
    Shift,
    Ctrl,
    Alt,
    Super,
}

impl From<Modifier> for Mod {
    fn from(modifier: Modifier) -> Self {
        match modifier {
            Modifier::Shift => Mod::SHIFT,
            Modifier::Ctrl => Mod::CTRL,
            Modifier::Alt => Mod::ALT,
            Modifier::Super => Mod::SUPER,
        }
    }
}

impl Mod {
    fn modifiers(self) -> Vec<Modifier> {
        let mut mods = Vec::new();
        if self.contains(Mod::SHIFT) {
            mods.push(Modifier::Shift);
        }
        if self.contains(Mod::CTRL) {
            mods.push(Modifier::Ctrl);
        }
        if self.contains(Mod::ALT) {
            mods.push(Modifier::Alt);
        }
        if self.contains(Mod::SUPER) {
            mods.push(Modifier::Super);
        }
        mods
    }
}

impl fmt::Display for Mod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self
            .modifiers()
            .into_iter()
            .map(|m| match m {
                Modifier::Shift => "shift",
                Modifier::Ctrl => "ctrl",
                Modifier::Alt => "alt",
                Modifier::Super => "super",
            })
            .collect();
        write!(f, "{}", names.join("+"))
    }
}

impl Serialize for Mod {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.modifiers().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Mod {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let modifiers = Vec::<Modifier>::deserialize(deserializer)?;
        Ok(modifiers
            .into_iter()
            .fold(Mod::empty(), |acc, m| acc | Mod::from(m)))
    }
}

/// A key name usable in binds, mapping to an X11 keysym.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Key {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,
    #[serde(rename = "0")]
    Zero,
    #[serde(rename = "1")]
    One,
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "4")]
    Four,
    #[serde(rename = "5")]
    Five,
    #[serde(rename = "6")]
    Six,
    #[serde(rename = "7")]
    Seven,
    #[serde(rename = "8")]
    Eight,
    #[serde(rename = "9")]
    Nine,
    Space,
    Return,
    Tab,
    #[serde(alias = "esc")]
    Escape,
}

impl Key {
    /// The keysym the host resolves this key to.
    pub fn keysym(self) -> Keysym {
        match self {
            Key::A => Keysym::a,
            Key::B => Keysym::b,
            Key::C => Keysym::c,
            Key::D => Keysym::d,
            Key::E => Keysym::e,
            Key::F => Keysym::f,
            Key::G => Keysym::g,
            Key::H => Keysym::h,
            Key::I => Keysym::i,
            Key::J => Keysym::j,
            Key::K => Keysym::k,
            Key::L => Keysym::l,
            Key::M => Keysym::m,
            Key::N => Keysym::n,
            Key::O => Keysym::o,
            Key::P => Keysym::p,
            Key::Q => Keysym::q,
            Key::R => Keysym::r,
            Key::S => Keysym::s,
            Key::T => Keysym::t,
            Key::U => Keysym::u,
            Key::V => Keysym::v,
            Key::W => Keysym::w,
            Key::X => Keysym::x,
            Key::Y => Keysym::y,
            Key::Z => Keysym::z,
            Key::Zero => Keysym::_0,
            Key::One => Keysym::_1,
            Key::Two => Keysym::_2,
            Key::Three => Keysym::_3,
            Key::Four => Keysym::_4,
            Key::Five => Keysym::_5,
            Key::Six => Keysym::_6,
            Key::Seven => Keysym::_7,
            Key::Eight => Keysym::_8,
            Key::Nine => Keysym::_9,
            Key::Space => Keysym::space,
            Key::Return => Keysym::Return,
            Key::Tab => Keysym::Tab,
            Key::Escape => Keysym::Escape,
        }
    }

    /// The digit key for a 1-based position, covering positions 1 through 9.
    pub fn digit(position: usize) -> Option<Key> {
        Some(match position {
            1 => Key::One,
            2 => Key::Two,
            3 => Key::Three,
            4 => Key::Four,
            5 => Key::Five,
            6 => Key::Six,
            7 => Key::Seven,
            8 => Key::Eight,
            9 => Key::Nine,
            _ => return None,
        })
    }

    pub fn name(self) -> &'static str {
        match self {
            Key::A => "a",
            Key::B => "b",
            Key::C => "c",
            Key::D => "d",
            Key::E => "e",
            Key::F => "f",
            Key::G => "g",
            Key::H => "h",
            Key::I => "i",
            Key::J => "j",
            Key::K => "k",
            Key::L => "l",
            Key::M => "m",
            Key::N => "n",
            Key::O => "o",
            Key::P => "p",
            Key::Q => "q",
            Key::R => "r",
            Key::S => "s",
            Key::T => "t",
            Key::U => "u",
            Key::V => "v",
            Key::W => "w",
            Key::X => "x",
            Key::Y => "y",
            Key::Z => "z",
            Key::Zero => "0",
            Key::One => "1",
            Key::Two => "2",
            Key::Three => "3",
            Key::Four => "4",
            Key::Five => "5",
            Key::Six => "6",
            Key::Seven => "7",
            Key::Eight => "8",
            Key::Nine => "9",
            Key::Space => "space",
            Key::Return => "return",
            Key::Tab => "tab",
            Key::Escape => "escape",
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A mouse button.
#[derive(
    Clone,
    Copy,
    Debug,
    Hash,
    PartialEq,
    Eq,
    IntoPrimitive,
    TryFromPrimitive,
    Serialize,
    Deserialize,
)]
#[repr(u32)]
#[serde(rename_all = "snake_case")]
pub enum MouseButton {
    /// The left mouse button
    #[serde(alias = "button1")]
    Left = 0x110,
    /// The right mouse button
    #[serde(alias = "button3")]
    Right = 0x111,
    /// The middle mouse button
    #[serde(alias = "button2")]
    Middle = 0x112,
    /// The side mouse button
    Side = 0x113,
    /// The extra mouse button
    Extra = 0x114,
    /// The forward mouse button
    Forward = 0x115,
    /// The backward mouse button
    Back = 0x116,
}

impl fmt::Display for MouseButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MouseButton::Left => "left",
            MouseButton::Right => "right",
            MouseButton::Middle => "middle",
            MouseButton::Side => "side",
            MouseButton::Extra => "extra",
            MouseButton::Forward => "forward",
            MouseButton::Back => "back",
        };
        f.write_str(name)
    }
}

/// A keybind: modifiers, key, the host command it runs, and a description
/// for the bind overlay.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Keybind {
    pub mods: Mod,
    pub key: Key,
    pub action: Action,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
}

impl Keybind {
    pub fn new(mods: Mod, key: Key, action: Action) -> Self {
        Self {
            mods,
            key,
            action,
            desc: None,
        }
    }

    /// Sets this bind's description.
    pub fn desc(mut self, desc: impl Into<String>) -> Self {
        self.desc = Some(desc.into());
        self
    }
}

/// A mousebind for floating-window manipulation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MouseBind {
    /// Hold the button and drag to apply the action continuously.
    Drag {
        mods: Mod,
        button: MouseButton,
        action: DragAction,
    },
    /// Press the button to run the action once.
    Click {
        mods: Mod,
        button: MouseButton,
        action: Action,
    },
}

impl MouseBind {
    pub fn mods(&self) -> Mod {
        match self {
            MouseBind::Drag { mods, .. } | MouseBind::Click { mods, .. } => *mods,
        }
    }

    pub fn button(&self) -> MouseButton {
        match self {
            MouseBind::Drag { button, .. } | MouseBind::Click { button, .. } => *button,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize, Deserialize)]
    struct ModHolder {
        mods: Mod,
    }

    #[derive(Deserialize)]
    struct KeyHolder {
        key: Key,
    }

    #[test]
    fn mods_roundtrip_through_serde() {
        let mods = Mod::SUPER | Mod::SHIFT;
        let toml = toml::to_string(&ModHolder { mods }).unwrap();
        assert!(toml.contains("shift") && toml.contains("super"));

        let back: ModHolder = toml::from_str(&toml).unwrap();
        assert_eq!(back.mods, mods);
    }

    #[test]
    fn digit_keys_cover_one_through_nine() {
        assert_eq!(Key::digit(1), Some(Key::One));
        assert_eq!(Key::digit(9), Some(Key::Nine));
        assert_eq!(Key::digit(0), None);
        assert_eq!(Key::digit(10), None);
    }

    #[test]
    fn keys_resolve_to_keysyms() {
        assert_eq!(Key::H.keysym(), Keysym::h);
        assert_eq!(Key::One.keysym(), Keysym::_1);
        assert_eq!(Key::Return.keysym(), Keysym::Return);
    }

    #[test]
    fn mouse_buttons_use_evdev_codes() {
        assert_eq!(u32::from(MouseButton::Left), 0x110);
        assert_eq!(MouseButton::try_from(0x112u32).unwrap(), MouseButton::Middle);
        assert!(MouseButton::try_from(0x1u32).is_err());
    }

    #[test]
    fn digit_keys_deserialize_from_digits() {
        let holder: KeyHolder = toml::from_str(r#"key = "1""#).unwrap();
        assert_eq!(holder.key, Key::One);
    }
}
