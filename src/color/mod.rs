//! Random RGB colors and their textual forms

use rand::Rng;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Lowest value a generated channel can take. Pure-zero channels are never produced.
pub const CHANNEL_MIN: u8 = 1;
pub const CHANNEL_MAX: u8 = 255;

/// An immutable RGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Each channel is sampled independently and uniformly from `[1, 255]`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            r: rng.random_range(CHANNEL_MIN..=CHANNEL_MAX),
            g: rng.random_range(CHANNEL_MIN..=CHANNEL_MAX),
            b: rng.random_range(CHANNEL_MIN..=CHANNEL_MAX),
        }
    }

    pub fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// `"0AFF10"`
    pub fn to_hex_string(self) -> String {
        hex::encode_upper(self.channels())
    }

    /// `"#0AFF10"`
    pub fn to_hex_css_string(self) -> String {
        format!("#{}", self.to_hex_string())
    }

    /// `"10, 255, 16"`
    pub fn to_rgb_string(self) -> String {
        format!("{}, {}, {}", self.r, self.g, self.b)
    }

    /// `"rgb(10, 255, 16)"`
    pub fn to_css_string(self) -> String {
        format!("rgb({})", self.to_rgb_string())
    }

    /// Relative luminance approximation, used to pick readable text on top of the color.
    pub fn is_light(self) -> bool {
        let y = 0.299 * f64::from(self.r) + 0.587 * f64::from(self.g) + 0.114 * f64::from(self.b);
        y > 150.0
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_css_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid hex color: {0:?}")]
pub struct ParseRgbError(String);

impl FromStr for Rgb {
    type Err = ParseRgbError;

    /// Accepts `#RRGGBB` or `RRGGBB`, either case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.trim().strip_prefix('#').unwrap_or(s.trim());
        let mut out = [0u8; 3];
        hex::decode_to_slice(digits, &mut out).map_err(|_| ParseRgbError(s.to_string()))?;
        Ok(Self::new(out[0], out[1], out[2]))
    }
}

/// Generate `count` colors in display order.
pub fn random_palette<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Rgb> {
    (0..count).map(|_| Rgb::random(rng)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_hex_css_string_is_padded_and_uppercase() {
        assert_eq!(Rgb::new(1, 15, 255).to_hex_css_string(), "#010FFF");
        assert_eq!(Rgb::new(171, 205, 239).to_hex_css_string(), "#ABCDEF");
    }

    #[test]
    fn test_css_string() {
        assert_eq!(Rgb::new(10, 200, 3).to_css_string(), "rgb(10, 200, 3)");
    }

    #[test]
    fn test_random_channels_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..5_000 {
            let c = Rgb::random(&mut rng);
            for ch in c.channels() {
                assert!(ch >= CHANNEL_MIN, "channel {ch} below minimum");
            }
        }
    }

    #[test]
    fn test_hex_bytes_parse_back_individually() {
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..500 {
            let c = Rgb::random(&mut rng);
            let s = c.to_hex_css_string();
            assert_eq!(s.len(), 7);
            assert!(s.starts_with('#'));
            assert!(s[1..].chars().all(|ch| ch.is_ascii_digit() || ch.is_ascii_uppercase()));
            let bytes: Vec<u8> = (0..3)
                .map(|i| u8::from_str_radix(&s[1 + i * 2..3 + i * 2], 16).unwrap())
                .collect();
            assert_eq!(bytes, c.channels());
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!("#ff0001".parse::<Rgb>().unwrap(), Rgb::new(255, 0, 1));
        assert_eq!("A0B0C0".parse::<Rgb>().unwrap(), Rgb::new(0xA0, 0xB0, 0xC0));
        assert!("#12345".parse::<Rgb>().is_err());
        assert!("#GG0000".parse::<Rgb>().is_err());
    }

    #[test]
    fn test_random_palette_len() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(random_palette(&mut rng, 6).len(), 6);
        assert!(random_palette(&mut rng, 0).is_empty());
    }

    #[test]
    fn test_is_light() {
        assert!(Rgb::new(250, 250, 250).is_light());
        assert!(!Rgb::new(10, 10, 40).is_light());
    }
}
