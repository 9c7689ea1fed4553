use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Opaque sRGB colour, written as `#rrggbb`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` or `#rgb` (leading `#` optional, case-insensitive).
    pub fn parse_hex(s: &str) -> Option<Self> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);
        if !s.is_ascii() {
            return None;
        }

        fn hex_byte(pair: &str) -> Option<u8> {
            u8::from_str_radix(pair, 16).ok()
        }

        match s.len() {
            6 => Some(Self::new(
                hex_byte(&s[0..2])?,
                hex_byte(&s[2..4])?,
                hex_byte(&s[4..6])?,
            )),
            3 => {
                let nib = |i: usize| hex_byte(&s[i..=i]).map(|v| v * 17);
                Some(Self::new(nib(0)?, nib(1)?, nib(2)?))
            }
            _ => None,
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse_hex(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid hex colour \"{s}\"")))
    }
}

/// Colours for the two layers.
///
/// `paper`/`ink` paint the base layer; `invert_paper` is the solid spotlight fill and
/// `invert_ink` the inverted pattern drawn over it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub paper: Rgb,
    pub ink: Rgb,
    pub invert_paper: Rgb,
    pub invert_ink: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            paper: Rgb::new(0xf5, 0xf4, 0xef),
            ink: Rgb::new(0x16, 0x16, 0x1d),
            invert_paper: Rgb::new(0x16, 0x16, 0x1d),
            invert_ink: Rgb::new(0xf5, 0xf4, 0xef),
        }
    }
}

// Invalid or missing colours fall back per field instead of rejecting the document.
impl<'de> Deserialize<'de> for Palette {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum ColorRepr {
            Hex(String),
            Other(serde::de::IgnoredAny),
        }

        #[derive(Deserialize, Default)]
        #[serde(default)]
        struct Repr {
            paper: Option<ColorRepr>,
            ink: Option<ColorRepr>,
            #[serde(alias = "invertPaper")]
            invert_paper: Option<ColorRepr>,
            #[serde(alias = "invertInk")]
            invert_ink: Option<ColorRepr>,
        }

        fn pick(c: Option<ColorRepr>, fallback: Rgb) -> Rgb {
            match c {
                Some(ColorRepr::Hex(s)) => Rgb::parse_hex(&s).unwrap_or(fallback),
                _ => fallback,
            }
        }

        let repr = Repr::deserialize(deserializer)?;
        let d = Palette::default();
        Ok(Self {
            paper: pick(repr.paper, d.paper),
            ink: pick(repr.ink, d.ink),
            invert_paper: pick(repr.invert_paper, d.invert_paper),
            invert_ink: pick(repr.invert_ink, d.invert_ink),
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/palette.rs"]
mod tests;
