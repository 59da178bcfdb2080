//! The color palette.
//!
//! Every color used by the bar widgets and the menu runner is referenced by
//! positional index into a single [`Palette`]. Reordering palette entries
//! changes the meaning of every index that points into it, so lookups are
//! bounds-checked and the validator walks all indices.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A 24-bit RGB color, written as `#rrggbb`.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorParseError {
    #[error("expected 6 hex digits, got {0} characters")]
    Length(usize),
    #[error("`{0}` is not valid hex")]
    Digit(String),
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn components(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').unwrap_or(s);

        if hex.len() != 6 {
            return Err(ColorParseError::Length(hex.len()));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| ColorParseError::Digit(hex.to_string()))
        };

        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

/// A pair of gradient stops. Solid colors are a pair of equal stops.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorPair {
    pub top: Color,
    pub bottom: Color,
}

impl ColorPair {
    pub const fn new(top: Color, bottom: Color) -> Self {
        Self { top, bottom }
    }

    pub const fn solid(color: Color) -> Self {
        Self {
            top: color,
            bottom: color,
        }
    }
}

/// A positional reference into the [`Palette`].
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaletteIndex(pub usize);

impl fmt::Display for PaletteIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The ordered list of color pairs the rest of the configuration indexes into.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette(Vec<ColorPair>);

impl Palette {
    pub fn new(pairs: impl IntoIterator<Item = ColorPair>) -> Self {
        Self(pairs.into_iter().collect())
    }

    pub fn get(&self, index: PaletteIndex) -> Option<&ColorPair> {
        self.0.get(index.0)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ColorPair> {
        self.0.iter()
    }

    /// The stock theme.
    pub fn stock() -> Self {
        Self(vec![
            // panel background
            ColorPair::solid(Color::new(0x28, 0x2c, 0x34)),
            // background for the current group tab
            ColorPair::new(Color::new(0x3d, 0x3f, 0x4b), Color::new(0x43, 0x47, 0x58)),
            // group name foreground
            ColorPair::solid(Color::new(0xff, 0xff, 0xff)),
            // border of the current tab
            ColorPair::solid(Color::new(0xff, 0x55, 0x55)),
            // border of other tabs, and odd widgets
            ColorPair::solid(Color::new(0x74, 0x43, 0x8f)),
            // even widgets
            ColorPair::solid(Color::new(0x4f, 0x76, 0xc7)),
            // window name
            ColorPair::solid(Color::new(0xe1, 0xac, 0xff)),
            // background for inactive screens
            ColorPair::solid(Color::new(0xec, 0xbb, 0xfb)),
        ])
    }
}
