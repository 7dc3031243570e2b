//! CSS-style colour values used by the chart renderer

use lazy_static::lazy_static;
use regex::Regex;

/// Trend colour used whenever a colour string cannot be parsed
pub const DEFAULT_TREND_COLOR: Rgb = Rgb::new(51, 92, 255);

/// An opaque 8-bit RGB triple
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    pub fn with_alpha(self, alpha: f64) -> Rgba {
        Rgba {
            r: self.r,
            g: self.g,
            b: self.b,
            a: alpha.clamp(0.0, 1.0),
        }
    }

    /// Format as `rgb(r, g, b)`
    pub fn to_css(self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// RGB with a straight (non-premultiplied) alpha in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Rgba { r, g, b, a }
    }

    /// Linear interpolation of every channel, `t` in `0.0..=1.0`
    pub fn lerp(self, other: Rgba, t: f64) -> Rgba {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Rgba {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: self.a + (other.a - self.a) * t,
        }
    }
}

lazy_static! {
    static ref RGB_PATTERN: Regex = Regex::new(r"rgb\(([0-9]+),\s*([0-9]+),\s*([0-9]+)\)").expect("rgb pattern compiles");
}

/// Parse an `rgb(r, g, b)` colour, falling back to [`DEFAULT_TREND_COLOR`].
///
/// The first `rgb(` group anywhere in the input is accepted; whitespace is only
/// allowed after the commas. Malformed input never fails.
pub fn parse_rgb(input: &str) -> Rgb {
    try_parse_rgb(input).unwrap_or(DEFAULT_TREND_COLOR)
}

pub fn try_parse_rgb(input: &str) -> Option<Rgb> {
    let caps = RGB_PATTERN.captures(input)?;
    let channel = |i: usize| caps.get(i)?.as_str().parse::<u8>().ok();
    Some(Rgb::new(channel(1)?, channel(2)?, channel(3)?))
}

/// Parse `#rgb`, `#rrggbb` or `#rrggbbaa`
pub fn parse_hex(input: &str) -> Option<Rgba> {
    let hex = input.strip_prefix('#')?;
    let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    match hex.len() {
        3 => {
            let mut c = hex.chars().map(|c| c.to_digit(16).map(|d| (d * 17) as u8));
            Some(Rgba::new(c.next()??, c.next()??, c.next()??, 1.0))
        }
        6 => Some(Rgba::new(channel(0)?, channel(2)?, channel(4)?, 1.0)),
        8 => Some(Rgba::new(
            channel(0)?,
            channel(2)?,
            channel(4)?,
            channel(6)? as f64 / 255.0,
        )),
        _ => None,
    }
}
