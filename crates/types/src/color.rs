//! Colour values used by the colour editors.
//!
//! `Rgb` and `Rgba` parse from fixed-length hex strings ("ff0000",
//! "ff000080") and can be used directly as clap value parsers.

use crate::error::{ArgError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Opaque 8-bit colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// 8-bit colour with alpha channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba(pub u8, pub u8, pub u8, pub u8);

/// Parse a 6 character hex string into (r, g, b).
pub fn parse_rgb(input: &str) -> Result<(u8, u8, u8)> {
    let [r, g, b] = parse_hex_channels::<3>(input)?;
    Ok((r, g, b))
}

/// Parse an 8 character hex string into (r, g, b, a).
pub fn parse_rgba(input: &str) -> Result<(u8, u8, u8, u8)> {
    let [r, g, b, a] = parse_hex_channels::<4>(input)?;
    Ok((r, g, b, a))
}

fn parse_hex_channels<const N: usize>(input: &str) -> Result<[u8; N]> {
    let expected = N * 2;
    if input.chars().count() != expected {
        return Err(ArgError::ColorLength {
            expected,
            input: input.to_string(),
        });
    }
    // from_str_radix accepts a leading '+', which is not a hex digit
    if !input.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ArgError::InvalidHex(input.to_string()));
    }

    let mut channels = [0u8; N];
    for (i, channel) in channels.iter_mut().enumerate() {
        *channel = u8::from_str_radix(&input[i * 2..i * 2 + 2], 16)
            .map_err(|_| ArgError::InvalidHex(input.to_string()))?;
    }
    Ok(channels)
}

/// Read up to `N` 0-255 channels from a JSON array, or a hex string of the right length.
pub(crate) fn channels_from_value<const N: usize>(value: &Value) -> Option<[u8; N]> {
    match value {
        Value::Array(items) if items.len() == N => {
            let mut channels = [0u8; N];
            for (channel, item) in channels.iter_mut().zip(items) {
                *channel = u8::try_from(item.as_u64()?).ok()?;
            }
            Some(channels)
        }
        Value::String(s) => parse_hex_channels::<N>(s.trim_start_matches('#')).ok(),
        _ => None,
    }
}

impl Rgb {
    pub fn to_value(self) -> Value {
        Value::from(vec![self.0, self.1, self.2])
    }

    pub fn from_value(value: &Value) -> Option<Self> {
        channels_from_value::<3>(value).map(|[r, g, b]| Self(r, g, b))
    }

    /// Convert to GDK RGBA
    #[cfg(feature = "gtk")]
    pub fn to_gdk_rgba(self) -> gdk4::RGBA {
        Rgba(self.0, self.1, self.2, 255).to_gdk_rgba()
    }
}

impl Rgba {
    pub fn to_value(self) -> Value {
        Value::from(vec![self.0, self.1, self.2, self.3])
    }

    pub fn from_value(value: &Value) -> Option<Self> {
        channels_from_value::<4>(value).map(|[r, g, b, a]| Self(r, g, b, a))
    }

    /// Convert to GDK RGBA
    #[cfg(feature = "gtk")]
    pub fn to_gdk_rgba(self) -> gdk4::RGBA {
        gdk4::RGBA::new(
            self.0 as f32 / 255.0,
            self.1 as f32 / 255.0,
            self.2 as f32 / 255.0,
            self.3 as f32 / 255.0,
        )
    }

    /// Create from GDK RGBA
    #[cfg(feature = "gtk")]
    pub fn from_gdk_rgba(rgba: &gdk4::RGBA) -> Self {
        let to_u8 = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self(
            to_u8(rgba.red()),
            to_u8(rgba.green()),
            to_u8(rgba.blue()),
            to_u8(rgba.alpha()),
        )
    }
}

impl FromStr for Rgb {
    type Err = ArgError;

    fn from_str(s: &str) -> Result<Self> {
        parse_rgb(s).map(|(r, g, b)| Self(r, g, b))
    }
}

impl FromStr for Rgba {
    type Err = ArgError;

    fn from_str(s: &str) -> Result<Self> {
        parse_rgba(s).map(|(r, g, b, a)| Self(r, g, b, a))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02x}{:02x}{:02x}{:02x}", self.0, self.1, self.2, self.3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_rgb() {
        assert_eq!(parse_rgb("ff0000").unwrap(), (255, 0, 0));
        assert_eq!(parse_rgb("00Ff7f").unwrap(), (0, 255, 127));
    }

    #[test]
    fn test_parse_rgba() {
        assert_eq!(parse_rgba("ff000080").unwrap(), (255, 0, 0, 128));
    }

    #[test]
    fn test_wrong_length_is_rejected() {
        let err = parse_rgb("ff000").unwrap_err();
        assert_eq!(
            err,
            ArgError::ColorLength {
                expected: 6,
                input: "ff000".to_string()
            }
        );
        assert!(err.to_string().contains("Expected 6 characters"));

        assert!(matches!(
            parse_rgba("ff0000"),
            Err(ArgError::ColorLength { expected: 8, .. })
        ));
    }

    #[test]
    fn test_non_hex_is_rejected() {
        assert_eq!(
            parse_rgb("gg0000"),
            Err(ArgError::InvalidHex("gg0000".to_string()))
        );
        assert!(matches!(parse_rgb("+f0000"), Err(ArgError::InvalidHex(_))));
        assert!(matches!(parse_rgba("ff00zz80"), Err(ArgError::InvalidHex(_))));
    }

    #[test]
    fn test_display_roundtrip() {
        let color: Rgba = "0a0b0cff".parse().unwrap();
        assert_eq!(color, Rgba(10, 11, 12, 255));
        assert_eq!(color.to_string(), "0a0b0cff");
        assert_eq!(Rgb(255, 0, 16).to_string(), "ff0010");
    }

    #[test]
    fn test_from_value() {
        assert_eq!(Rgb::from_value(&json!([1, 2, 3])), Some(Rgb(1, 2, 3)));
        assert_eq!(Rgb::from_value(&json!("#ff0000")), Some(Rgb(255, 0, 0)));
        assert_eq!(Rgb::from_value(&json!([1, 2, 300])), None);
        assert_eq!(Rgb::from_value(&json!([1, 2, 3, 4])), None);
        assert_eq!(
            Rgba::from_value(&json!([1, 2, 3, 4])),
            Some(Rgba(1, 2, 3, 4))
        );
        assert_eq!(Rgba(1, 2, 3, 4).to_value(), json!([1, 2, 3, 4]));
    }
}
