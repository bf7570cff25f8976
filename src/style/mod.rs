//! # Element Style
//!
//! The editor stores element geometry as CSS-like strings (`"42.50%"`). This
//! module is the only place those strings are parsed. Everything past
//! deserialization works with [`Percent`] values, which are plain `f64`s.
//!
//! Parsing never fails. A value that can't be read as a finite number
//! becomes `0`, the same thing the browser preview falls back to, and a
//! warning is logged. A half-filled element still gets laid out.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::layout::geometry::PercentBox;

/// A percentage of the containing section's box.
///
/// Deserializes from a number (`42.5`) or a string (`"42.5%"`, `"42.5"`).
/// Serializes as `"42.5%"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "RawLength", into = "String")]
pub struct Percent(pub f64);

impl Percent {
    /// Signed zero is folded to `+0.0` so `"-0%"` sorts and ties with `"0%"`.
    pub fn new(v: f64) -> Self {
        Percent(v + 0.0)
    }

    pub fn value(self) -> f64 {
        self.0 + 0.0
    }
}

impl From<f64> for Percent {
    fn from(v: f64) -> Self {
        Percent::new(v)
    }
}

impl From<Percent> for String {
    fn from(p: Percent) -> Self {
        format!("{}%", p.value())
    }
}

/// Whatever the editor happened to put in a geometry property.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawLength {
    Number(f64),
    Text(String),
    Other(Value),
}

impl From<RawLength> for Percent {
    fn from(raw: RawLength) -> Self {
        match raw {
            RawLength::Number(n) if n.is_finite() => Percent::new(n),
            RawLength::Number(n) => {
                log::warn!("non-finite percentage {} treated as 0", n);
                Percent(0.0)
            }
            RawLength::Text(s) => parse_percent(&s).map(Percent::new).unwrap_or_else(|| {
                log::warn!("unparsable percentage {:?} treated as 0", s);
                Percent(0.0)
            }),
            RawLength::Other(v) => {
                if !v.is_null() {
                    log::warn!("percentage value {} is not a number or string, treated as 0", v);
                }
                Percent(0.0)
            }
        }
    }
}

/// Parse `"42.5%"`, `"42.5"` or `" 42.5 % "` into `42.5`.
///
/// Returns `None` for anything else, including `"inf"` and `"NaN"` which
/// `f64::from_str` would otherwise accept.
pub fn parse_percent(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    let number = trimmed.strip_suffix('%').unwrap_or(trimmed).trim_end();
    if number.is_empty() {
        return None;
    }
    let starts_numeric = number
        .trim_start_matches(['+', '-'])
        .starts_with(|c: char| c.is_ascii_digit() || c == '.');
    if !starts_numeric {
        return None;
    }
    number.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Style of a page-builder element.
///
/// Only the four geometry properties are typed. Everything else the editor
/// sets (colors, fonts, z-index...) rides along in `extra` for the renderer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementStyle {
    #[serde(default)]
    pub left: Percent,
    #[serde(default)]
    pub top: Percent,
    #[serde(default)]
    pub width: Percent,
    #[serde(default)]
    pub height: Percent,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ElementStyle {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        ElementStyle {
            left: Percent::new(left),
            top: Percent::new(top),
            width: Percent::new(width),
            height: Percent::new(height),
            extra: Map::new(),
        }
    }

    pub fn bounds(&self) -> PercentBox {
        PercentBox {
            left: self.left.value(),
            top: self.top.value(),
            width: self.width.value(),
            height: self.height.value(),
        }
    }
}
