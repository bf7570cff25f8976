//! # Breakpoints and Layout Configuration
//!
//! The device widths and the row-grouping tolerance are conventions, not
//! measurements, so they live in a config value with sensible defaults
//! instead of being baked into the algorithms.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PageGridError;

/// A named viewport class with its own layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    Desktop,
    Tablet,
    Mobile,
}

impl Breakpoint {
    /// Widest first.
    pub const ALL: [Breakpoint; 3] = [Breakpoint::Desktop, Breakpoint::Tablet, Breakpoint::Mobile];

    pub fn key(self) -> &'static str {
        match self {
            Breakpoint::Desktop => "desktop",
            Breakpoint::Tablet => "tablet",
            Breakpoint::Mobile => "mobile",
        }
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Breakpoint {
    type Err = PageGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "desktop" => Ok(Breakpoint::Desktop),
            "tablet" => Ok(Breakpoint::Tablet),
            "mobile" => Ok(Breakpoint::Mobile),
            _ => Err(PageGridError::InvalidArgument(format!(
                "unknown breakpoint '{}' (expected desktop, tablet or mobile)",
                s
            ))),
        }
    }
}

/// Reference sizes and tolerances used by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutConfig {
    /// Mobile reference width in px. At or below this width, sections stack.
    pub mobile_width: f64,
    /// Tablet reference width in px.
    pub tablet_width: f64,
    /// Rendered desktop container width in px. Callers that know the real
    /// container width should set it.
    pub desktop_width: f64,
    /// Height in px that vertical percentages are resolved against.
    pub reference_height: f64,
    /// Max vertical distance in px between consecutive elements of a row group.
    pub row_tolerance: f64,
}

pub const DEFAULT_MOBILE_WIDTH: f64 = 375.0;
pub const DEFAULT_TABLET_WIDTH: f64 = 768.0;
pub const DEFAULT_DESKTOP_WIDTH: f64 = 1440.0;
pub const DEFAULT_REFERENCE_HEIGHT: f64 = 768.0;

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            mobile_width: DEFAULT_MOBILE_WIDTH,
            tablet_width: DEFAULT_TABLET_WIDTH,
            desktop_width: DEFAULT_DESKTOP_WIDTH,
            reference_height: DEFAULT_REFERENCE_HEIGHT,
            row_tolerance: crate::layout::rows::DEFAULT_ROW_TOLERANCE,
        }
    }
}

impl LayoutConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, PageGridError> {
        let config: LayoutConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), PageGridError> {
        let widths = [
            ("mobileWidth", self.mobile_width),
            ("tabletWidth", self.tablet_width),
            ("desktopWidth", self.desktop_width),
            ("referenceHeight", self.reference_height),
        ];
        for (name, value) in widths {
            if !(value.is_finite() && value > 0.0) {
                return Err(PageGridError::InvalidArgument(format!(
                    "{} must be a positive number, got {}",
                    name, value
                )));
            }
        }
        if !(self.row_tolerance.is_finite() && self.row_tolerance >= 0.0) {
            return Err(PageGridError::InvalidArgument(format!(
                "rowTolerance must be zero or positive, got {}",
                self.row_tolerance
            )));
        }
        Ok(())
    }

    /// Container width in px that a breakpoint lays out against.
    pub fn reference_width(&self, breakpoint: Breakpoint) -> f64 {
        match breakpoint {
            Breakpoint::Desktop => self.desktop_width,
            Breakpoint::Tablet => self.tablet_width,
            Breakpoint::Mobile => self.mobile_width,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoint_keys() {
        assert_eq!("desktop".parse::<Breakpoint>().unwrap(), Breakpoint::Desktop);
        assert_eq!(" Tablet ".parse::<Breakpoint>().unwrap(), Breakpoint::Tablet);
        assert_eq!("MOBILE".parse::<Breakpoint>().unwrap(), Breakpoint::Mobile);
        assert_eq!(Breakpoint::Tablet.to_string(), "tablet");
    }

    #[test]
    fn test_unknown_breakpoint_is_invalid_argument() {
        let err = "watch".parse::<Breakpoint>().unwrap_err();
        assert!(matches!(err, PageGridError::InvalidArgument(_)));
        assert!(err.to_string().contains("watch"));
    }

    #[test]
    fn test_defaults() {
        let c = LayoutConfig::default();
        assert_eq!(c.reference_width(Breakpoint::Mobile), 375.0);
        assert_eq!(c.reference_width(Breakpoint::Tablet), 768.0);
        assert_eq!(c.reference_width(Breakpoint::Desktop), 1440.0);
        assert_eq!(c.row_tolerance, 50.0);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_partial_json_config() {
        let c = LayoutConfig::from_json(r#"{ "tabletWidth": 820, "rowTolerance": 24 }"#).unwrap();
        assert_eq!(c.tablet_width, 820.0);
        assert_eq!(c.row_tolerance, 24.0);
        assert_eq!(c.mobile_width, 375.0);
    }

    #[test]
    fn test_invalid_config_values() {
        assert!(matches!(
            LayoutConfig::from_json(r#"{ "mobileWidth": 0 }"#),
            Err(PageGridError::InvalidArgument(_))
        ));
        assert!(matches!(
            LayoutConfig::from_json(r#"{ "rowTolerance": -1 }"#),
            Err(PageGridError::InvalidArgument(_))
        ));
        assert!(matches!(
            LayoutConfig::from_json(r#"{ "mobileWidth": "wide" }"#),
            Err(PageGridError::ParseError { .. })
        ));
    }
}
