//! Markup attribute parsing.
//!
//! Hosts describe a widget with string attributes (`wave-speed="60"`,
//! `link-color="#3af"`, ...). Each attribute is parsed on its own; a bad
//! value is reported and skipped so the widget still comes up with the
//! remaining settings.

use crate::color::Color;
use crate::config::{dp_to_px, WaveSettings};
use std::num::IntErrorKind;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum AttributeError {
    #[error("unknown attribute `{0}`")]
    Unknown(String),
    #[error("attribute `{name}`: `{value}` is not an integer")]
    InvalidInteger { name: &'static str, value: String },
    #[error("attribute `{name}`: `{value}` is not a boolean")]
    InvalidBool { name: &'static str, value: String },
    #[error("attribute `{name}`: `{value}` is not a dimension (expected `<n>dp`, `<n>px` or `<n>`)")]
    InvalidDimension { name: &'static str, value: String },
    #[error("`{0}` is not a color")]
    InvalidColor(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WaveAttribute {
    Speed,
    Color,
    RingCount,
    Running,
    CenterWidth,
}

impl WaveAttribute {
    pub const ALL: [WaveAttribute; 5] = [
        WaveAttribute::Speed,
        WaveAttribute::Color,
        WaveAttribute::RingCount,
        WaveAttribute::Running,
        WaveAttribute::CenterWidth,
    ];

    /// Canonical markup name, without any `data-` prefix.
    pub fn name(self) -> &'static str {
        match self {
            WaveAttribute::Speed => "wave-speed",
            WaveAttribute::Color => "link-color",
            WaveAttribute::RingCount => "link-count",
            WaveAttribute::Running => "running",
            WaveAttribute::CenterWidth => "center-width",
        }
    }

    /// Accepts the canonical markup names (optionally `data-` prefixed) and
    /// the camelCase keys used by script options.
    pub fn from_name(name: &str) -> Option<Self> {
        let bare = name.strip_prefix("data-").unwrap_or(name);
        match bare {
            "wave-speed" | "speed" | "waveSpeed" => Some(WaveAttribute::Speed),
            "link-color" | "color" | "linkColor" => Some(WaveAttribute::Color),
            "link-count" | "ringCount" | "linkCount" => Some(WaveAttribute::RingCount),
            "running" | "is-starting" | "isStarting" => Some(WaveAttribute::Running),
            "center-width" | "centerWidth" | "centre-view-width" => {
                Some(WaveAttribute::CenterWidth)
            }
            _ => None,
        }
    }
}

/// A length in markup units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Dimension {
    Dp(f32),
    Px(u32),
}

impl Dimension {
    pub fn parse(name: &'static str, value: &str) -> Result<Self, AttributeError> {
        let v = value.trim();
        let invalid = || AttributeError::InvalidDimension {
            name,
            value: value.to_string(),
        };
        if let Some(px) = v.strip_suffix("px") {
            return px.trim().parse::<u32>().map(Dimension::Px).map_err(|_| invalid());
        }
        let dp = v.strip_suffix("dp").or_else(|| v.strip_suffix("dip")).unwrap_or(v);
        match dp.trim().parse::<f32>() {
            Ok(n) if n.is_finite() && n >= 0.0 => Ok(Dimension::Dp(n)),
            _ => Err(invalid()),
        }
    }

    pub fn to_px(self, density: f32) -> u32 {
        match self {
            Dimension::Dp(dp) => dp_to_px(dp, density),
            Dimension::Px(px) => px,
        }
    }
}

/// Integers beyond `i32` saturate so the setter can clamp them like any
/// other out-of-range value.
fn parse_int(name: &'static str, value: &str) -> Result<i32, AttributeError> {
    match value.trim().parse::<i32>() {
        Ok(n) => Ok(n),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Ok(i32::MAX),
            IntErrorKind::NegOverflow => Ok(i32::MIN),
            _ => Err(AttributeError::InvalidInteger {
                name,
                value: value.to_string(),
            }),
        },
    }
}

fn parse_bool(name: &'static str, value: &str) -> Result<bool, AttributeError> {
    match value.trim().to_ascii_lowercase().as_str() {
        // a bare attribute (`<canvas running>`) reads as empty
        "" | "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(AttributeError::InvalidBool {
            name,
            value: value.to_string(),
        }),
    }
}

impl WaveSettings {
    /// Apply one attribute. Out-of-range numbers are clamped like the
    /// matching setter; only unparseable input is an error.
    pub fn apply_attribute(
        &mut self,
        name: &str,
        value: &str,
        density: f32,
    ) -> Result<(), AttributeError> {
        let attr =
            WaveAttribute::from_name(name).ok_or_else(|| AttributeError::Unknown(name.into()))?;
        let key = attr.name();
        match attr {
            WaveAttribute::Speed => self.set_speed(parse_int(key, value)?),
            WaveAttribute::Color => self.set_color(value.parse::<Color>()?),
            WaveAttribute::RingCount => self.set_ring_count(parse_int(key, value)?),
            WaveAttribute::Running => self.set_running(parse_bool(key, value)?),
            WaveAttribute::CenterWidth => {
                let px = Dimension::parse(key, value)?.to_px(density);
                self.set_center_width(px.min(i32::MAX as u32) as i32);
            }
        }
        Ok(())
    }

    /// Build settings from attribute pairs. Names that are not wave
    /// attributes are ignored; bad values are logged and skipped.
    pub fn from_attributes<'a, I>(attrs: I, density: f32) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut settings = WaveSettings::with_density(density);
        for (name, value) in attrs {
            if WaveAttribute::from_name(name).is_none() {
                continue;
            }
            if let Err(e) = settings.apply_attribute(name, value, density) {
                log::warn!("[attrs] skipping {e}");
            }
        }
        settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_resolve_with_and_without_prefix() {
        for attr in WaveAttribute::ALL {
            assert_eq!(WaveAttribute::from_name(attr.name()), Some(attr));
            let prefixed = format!("data-{}", attr.name());
            assert_eq!(WaveAttribute::from_name(&prefixed), Some(attr));
        }
        assert_eq!(WaveAttribute::from_name("ringCount"), Some(WaveAttribute::RingCount));
        assert_eq!(WaveAttribute::from_name("width"), None);
    }

    #[test]
    fn dimensions() {
        assert_eq!(Dimension::parse("w", "90dp").unwrap(), Dimension::Dp(90.0));
        assert_eq!(Dimension::parse("w", "90").unwrap(), Dimension::Dp(90.0));
        assert_eq!(Dimension::parse("w", " 120px ").unwrap(), Dimension::Px(120));
        assert!(Dimension::parse("w", "-3dp").is_err());
        assert!(Dimension::parse("w", "wide").is_err());
        assert_eq!(Dimension::Dp(90.0).to_px(2.0), 180);
        assert_eq!(Dimension::Px(90).to_px(2.0), 90);
    }

    #[test]
    fn bools() {
        assert_eq!(parse_bool("running", ""), Ok(true));
        assert_eq!(parse_bool("running", "TRUE"), Ok(true));
        assert_eq!(parse_bool("running", "off"), Ok(false));
        assert!(parse_bool("running", "maybe").is_err());
    }

    #[test]
    fn apply_clamps_numbers() {
        let mut s = WaveSettings::default();
        s.apply_attribute("wave-speed", "500", 1.0).unwrap();
        assert_eq!(s.speed(), 99);
        s.apply_attribute("link-count", "-2", 1.0).unwrap();
        assert_eq!(s.ring_count(), 1);
    }

    #[test]
    fn apply_saturates_huge_integers() {
        let mut s = WaveSettings::default();
        s.apply_attribute("wave-speed", "10000000000", 1.0).unwrap();
        assert_eq!(s.speed(), 99);
        s.apply_attribute("link-count", "-99999999999", 1.0).unwrap();
        assert_eq!(s.ring_count(), 1);
        s.apply_attribute("link-count", "99999999999999999999999", 1.0).unwrap();
        assert_eq!(s.ring_count(), 10);
    }

    #[test]
    fn apply_reports_bad_values() {
        let mut s = WaveSettings::default();
        assert_eq!(
            s.apply_attribute("wave-speed", "fast", 1.0),
            Err(AttributeError::InvalidInteger {
                name: "wave-speed",
                value: "fast".into()
            })
        );
        assert!(matches!(
            s.apply_attribute("link-color", "#xyz", 1.0),
            Err(AttributeError::InvalidColor(_))
        ));
        assert!(matches!(
            s.apply_attribute("sparkle", "1", 1.0),
            Err(AttributeError::Unknown(_))
        ));
        assert_eq!(s, WaveSettings::default());
    }

    #[test]
    fn from_attributes_skips_bad_and_foreign_entries() {
        let s = WaveSettings::from_attributes(
            [
                ("class", "hero"),
                ("data-link-wave", ""),
                ("data-wave-speed", "70"),
                ("data-link-color", "not-a-color"),
                ("data-link-count", "3"),
                ("data-running", ""),
                ("data-center-width", "50dp"),
            ],
            2.0,
        );
        assert_eq!(s.speed(), 70);
        assert_eq!(s.color(), Color::RED);
        assert_eq!(s.ring_count(), 3);
        assert!(s.running());
        assert_eq!(s.center_width(), 100);
    }
}
