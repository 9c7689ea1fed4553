use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Token shown when the caller supplies no usable label.
pub const FALLBACK_TOKEN: &str = "H Y P E R B L O G";

/// Padding placed between words of a multi-word label.
pub const WORD_SEPARATOR: &str = "  ·  ";

const DELIMITERS: [char; 4] = ['.', '_', '/', '-'];

/// Canonical letter-spaced label that gets tiled across the backdrop.
///
/// Only [`normalize`] and [`normalize_opt`] construct tokens, so a token is never empty.
/// Deserializing goes through [`normalize`] as well.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct DisplayToken(String);

impl DisplayToken {
    /// Borrow the token text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in Unicode scalar values, spaces included.
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }

    /// Consume the token and return the owned text.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for DisplayToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DisplayToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for DisplayToken {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(normalize_opt(raw.as_deref()))
    }
}

impl Default for DisplayToken {
    fn default() -> Self {
        Self(FALLBACK_TOKEN.to_owned())
    }
}

/// Normalize a possibly-missing label. `None` behaves like the empty string.
pub fn normalize_opt(input: Option<&str>) -> DisplayToken {
    normalize(input.unwrap_or_default())
}

/// Turn an arbitrary label into a [`DisplayToken`].
///
/// - `"@mimo"` becomes `"M I M O"`.
/// - `"AI Infra"` becomes `"A I  ·  I N F R A"`.
/// - Labels with anything beyond ASCII letters, digits, whitespace and `. _ / -` come back
///   trimmed but otherwise untouched, so `"日本語"` stays `"日本語"`.
/// - Empty labels fall back to [`FALLBACK_TOKEN`].
pub fn normalize(input: &str) -> DisplayToken {
    let trimmed = input.trim();
    let rest = trimmed.strip_prefix('@').unwrap_or(trimmed).trim();

    if rest.is_empty() {
        tracing::debug!("empty label, using fallback token");
        return DisplayToken::default();
    }

    if !is_spaceable(rest) {
        tracing::debug!(label = rest, "label is not ascii-word, keeping verbatim");
        return DisplayToken(rest.to_owned());
    }

    match space_out(rest) {
        Some(spaced) => DisplayToken(spaced),
        None => {
            tracing::debug!(label = rest, "label is only delimiters, using fallback token");
            DisplayToken::default()
        }
    }
}

fn is_spaceable(s: &str) -> bool {
    s.chars().all(|c| {
        c.is_ascii_alphanumeric() || c.is_ascii_whitespace() || DELIMITERS.contains(&c)
    })
}

fn space_out(s: &str) -> Option<String> {
    let flattened: String = s
        .chars()
        .map(|c| {
            if DELIMITERS.contains(&c) {
                ' '
            } else {
                c.to_ascii_uppercase()
            }
        })
        .collect();

    let words: Vec<&str> = flattened.split_ascii_whitespace().collect();
    if words.is_empty() {
        return None;
    }

    // Already letter-spaced ("M I M O"): one word, not four.
    if words.len() > 1 && words.iter().all(|w| w.len() == 1) {
        return Some(words.join(" "));
    }

    let spread: Vec<String> = words.iter().map(|w| letter_space(w)).collect();
    Some(spread.join(WORD_SEPARATOR))
}

fn letter_space(word: &str) -> String {
    let mut out = String::with_capacity(word.len() * 2);
    for (i, c) in word.chars().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/token/normalize.rs"]
mod tests;
