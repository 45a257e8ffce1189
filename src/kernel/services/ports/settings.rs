use serde::{Deserialize, Deserializer, Serialize};

use super::search::SearchOptions;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchSettings {
    #[serde(default)]
    pub case_sensitive: bool,
    #[serde(default = "default_use_regex")]
    pub use_regex: bool,
    #[serde(default)]
    pub highlight: HighlightSettings,
}

fn default_use_regex() -> bool {
    true
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            case_sensitive: false,
            use_regex: default_use_regex(),
            highlight: HighlightSettings::default(),
        }
    }
}

impl SearchSettings {
    pub fn options(&self) -> SearchOptions {
        SearchOptions {
            case_sensitive: self.case_sensitive,
            use_regex: self.use_regex,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightSettings {
    #[serde(
        default = "HighlightStyle::default_match",
        deserialize_with = "deserialize_match_style"
    )]
    pub match_style: HighlightStyle,
    #[serde(
        default = "HighlightStyle::default_active",
        deserialize_with = "deserialize_active_style"
    )]
    pub active_style: HighlightStyle,
}

/// Style as written in the settings file; absent fields keep the per-kind default.
#[derive(Deserialize)]
struct StylePatch {
    #[serde(default)]
    background: Option<Rgba>,
    #[serde(default)]
    bold: Option<bool>,
}

impl StylePatch {
    fn apply(self, base: HighlightStyle) -> HighlightStyle {
        HighlightStyle {
            background: self.background.unwrap_or(base.background),
            bold: self.bold.unwrap_or(base.bold),
        }
    }
}

fn deserialize_match_style<'de, D: Deserializer<'de>>(d: D) -> Result<HighlightStyle, D::Error> {
    Ok(StylePatch::deserialize(d)?.apply(HighlightStyle::default_match()))
}

fn deserialize_active_style<'de, D: Deserializer<'de>>(d: D) -> Result<HighlightStyle, D::Error> {
    Ok(StylePatch::deserialize(d)?.apply(HighlightStyle::default_active()))
}

impl Default for HighlightSettings {
    fn default() -> Self {
        Self {
            match_style: HighlightStyle::default_match(),
            active_style: HighlightStyle::default_active(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightStyle {
    pub background: Rgba,
    #[serde(default)]
    pub bold: bool,
}

impl HighlightStyle {
    pub fn default_match() -> Self {
        Self {
            background: Rgba::new(128, 128, 128, 128),
            bold: true,
        }
    }

    pub fn default_active() -> Self {
        Self {
            background: Rgba::new(255, 165, 0, 255),
            bold: true,
        }
    }
}

/// Color serialized as `#rrggbb` or `#rrggbbaa`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let hex = value.trim().strip_prefix('#')?;
        if !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        match hex.len() {
            6 => Some(Self::new(channel(0)?, channel(2)?, channel(4)?, 255)),
            8 => Some(Self::new(channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
            _ => None,
        }
    }
}

impl std::fmt::Display for Rgba {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(
                f,
                "#{:02x}{:02x}{:02x}{:02x}",
                self.r, self.g, self.b, self.a
            )
        }
    }
}

impl TryFrom<String> for Rgba {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Rgba::parse(&value).ok_or_else(|| format!("invalid color: {value:?}"))
    }
}

impl From<Rgba> for String {
    fn from(value: Rgba) -> Self {
        value.to_string()
    }
}
