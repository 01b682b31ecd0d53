//! Ring color value.
//!
//! Colors are stored as straight (non-premultiplied) RGBA bytes. Hex strings
//! follow the host convention where an 8-digit value is `#AARRGGBB`.

use crate::attrs::AttributeError;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const RED: Color = Color::rgb(0xFF, 0x00, 0x00);
    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Build from a packed `0xAARRGGBB` integer.
    pub const fn from_argb(argb: u32) -> Self {
        Self {
            a: (argb >> 24) as u8,
            r: (argb >> 16) as u8,
            g: (argb >> 8) as u8,
            b: argb as u8,
        }
    }

    pub const fn to_argb(self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Same color with its alpha replaced.
    #[inline]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// CSS `rgba()` string usable as a canvas stroke style.
    pub fn to_css(self) -> String {
        format!(
            "rgba({}, {}, {}, {:.3})",
            self.r,
            self.g,
            self.b,
            self.a as f32 / 255.0
        )
    }

    fn named(name: &str) -> Option<Self> {
        let c = match name {
            "red" => Color::RED,
            "white" => Color::WHITE,
            "black" => Color::BLACK,
            "transparent" => Color::TRANSPARENT,
            "green" => Color::rgb(0x00, 0xFF, 0x00),
            "blue" => Color::rgb(0x00, 0x00, 0xFF),
            "yellow" => Color::rgb(0xFF, 0xFF, 0x00),
            "cyan" | "aqua" => Color::rgb(0x00, 0xFF, 0xFF),
            "magenta" | "fuchsia" => Color::rgb(0xFF, 0x00, 0xFF),
            "gray" | "grey" => Color::rgb(0x88, 0x88, 0x88),
            "lightgray" | "lightgrey" => Color::rgb(0xCC, 0xCC, 0xCC),
            "darkgray" | "darkgrey" => Color::rgb(0x44, 0x44, 0x44),
            _ => return None,
        };
        Some(c)
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::RED
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 0xFF {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:08x}", self.to_argb())
        }
    }
}

impl FromStr for Color {
    type Err = AttributeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let invalid = || AttributeError::InvalidColor(s.to_string());
        let Some(hex) = trimmed.strip_prefix('#') else {
            return Color::named(&trimmed.to_ascii_lowercase()).ok_or_else(invalid);
        };
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let v = u32::from_str_radix(hex, 16).map_err(|_| invalid())?;
        match hex.len() {
            3 => {
                let expand = |n: u32| ((n & 0xF) * 0x11) as u8;
                Ok(Color::rgb(expand(v >> 8), expand(v >> 4), expand(v)))
            }
            6 => Ok(Color::from_argb(0xFF00_0000 | v)),
            8 => Ok(Color::from_argb(v)),
            _ => Err(invalid()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_forms() {
        assert_eq!("#f00".parse::<Color>().unwrap(), Color::RED);
        assert_eq!("#00ff00".parse::<Color>().unwrap(), Color::rgb(0, 255, 0));
        assert_eq!(
            "#80112233".parse::<Color>().unwrap(),
            Color::rgba(0x11, 0x22, 0x33, 0x80)
        );
    }

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("White".parse::<Color>().unwrap(), Color::WHITE);
        assert_eq!(" red ".parse::<Color>().unwrap(), Color::RED);
    }

    #[test]
    fn rejects_garbage() {
        for bad in ["", "#", "#12", "#12345", "#gg0000", "chartreuse-ish", "#+12"] {
            assert!(bad.parse::<Color>().is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn argb_packing_is_symmetric() {
        let c = Color::from_argb(0x7F10_2030);
        assert_eq!(c, Color::rgba(0x10, 0x20, 0x30, 0x7F));
        assert_eq!(c.to_argb(), 0x7F10_2030);
    }

    #[test]
    fn display_and_css() {
        assert_eq!(Color::RED.to_string(), "#ff0000");
        assert_eq!(Color::RED.with_alpha(0x80).to_string(), "#80ff0000");
        assert_eq!(Color::RED.with_alpha(0).to_css(), "rgba(255, 0, 0, 0.000)");
        assert_eq!(Color::WHITE.to_css(), "rgba(255, 255, 255, 1.000)");
    }
}
