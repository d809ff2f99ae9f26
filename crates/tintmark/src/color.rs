//! Color type for terminal styling.
//!
//! Colors are plain 24-bit RGB values. They can be written in markup as a
//! palette name (`red`) or as a parenthesized literal (`(10,20,30)`); the
//! standalone parser also accepts `#RRGGBB` and `#RGB` hex.

use std::fmt;
use std::ops::{Div, Mul};
use std::str::FromStr;

use crate::error::ColorParseError;
use crate::palette;

/// An RGB color with three 8-bit channels and no alpha.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);
    pub const RED: Color = Color::new(255, 0, 0);
    pub const GREEN: Color = Color::new(0, 128, 0);
    pub const BLUE: Color = Color::new(0, 0, 255);
    pub const YELLOW: Color = Color::new(255, 255, 0);
    pub const CYAN: Color = Color::new(0, 255, 255);
    pub const MAGENTA: Color = Color::new(255, 0, 255);
    pub const GRAY: Color = Color::new(128, 128, 128);

    /// Create a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn r(&self) -> u8 {
        self.r
    }

    pub const fn g(&self) -> u8 {
        self.g
    }

    pub const fn b(&self) -> u8 {
        self.b
    }

    /// The channels as an `(r, g, b)` tuple.
    pub const fn to_rgb(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Multiply every channel by `factor`.
    ///
    /// Each channel is converted back with a truncating cast, so `101 * 0.5`
    /// yields `50`, never `51`. Results outside `0..=255` saturate at the
    /// nearest bound and a NaN product becomes `0`.
    ///
    /// ```
    /// use tintmark::Color;
    ///
    /// let color = Color::new(200, 100, 50);
    /// assert_eq!(color.scale(0.5), Color::new(100, 50, 25));
    /// assert_eq!(color.scale(2.0), Color::new(255, 200, 100));
    /// ```
    pub fn scale(self, factor: f32) -> Color {
        self.map_channels(|c| f32::from(c) * factor)
    }

    /// Divide every channel by `divisor`, truncating like [`Color::scale`].
    ///
    /// Dividing by zero saturates non-zero channels to `255`.
    pub fn shrink(self, divisor: f32) -> Color {
        self.map_channels(|c| f32::from(c) / divisor)
    }

    fn map_channels(self, f: impl Fn(u8) -> f32) -> Color {
        // `as u8` truncates toward zero and saturates, which is the
        // conversion both scaling operations promise.
        Color::new(f(self.r) as u8, f(self.g) as u8, f(self.b) as u8)
    }

    /// Parse a color from a string.
    ///
    /// Supports:
    /// - Palette names, case-insensitive: `red`, `DarkSlateGray`
    /// - Channel literals: `(10,20,30)`
    /// - Hex colors: `#RGB`, `#RRGGBB`
    ///
    /// # Examples
    ///
    /// ```
    /// use tintmark::Color;
    ///
    /// assert_eq!(Color::parse("red").unwrap(), Color::RED);
    /// assert_eq!(Color::parse("(10,20,30)").unwrap(), Color::new(10, 20, 30));
    /// assert_eq!(Color::parse("#ff5733").unwrap(), Color::new(255, 87, 51));
    /// ```
    pub fn parse(input: &str) -> Result<Self, ColorParseError> {
        let input = input.trim();

        if input.is_empty() {
            return Err(ColorParseError::Empty);
        }

        if let Some(hex) = input.strip_prefix('#') {
            return Self::parse_hex(hex);
        }

        if input.starts_with('(') {
            return Self::parse_literal(input)
                .ok_or_else(|| ColorParseError::InvalidRgb(input.to_string()));
        }

        palette::lookup(input).ok_or_else(|| ColorParseError::UnknownName(input.to_string()))
    }

    /// Parse a `(R,G,B)` literal with decimal byte channels and no spaces.
    ///
    /// Returns `None` for anything else: wrong arity, non-numeric channels,
    /// values above 255, or missing parentheses.
    pub fn parse_literal(input: &str) -> Option<Self> {
        let body = input.strip_prefix('(')?.strip_suffix(')')?;
        let mut channels = body.split(',').map(|part| part.parse::<u8>().ok());

        let r = channels.next()??;
        let g = channels.next()??;
        let b = channels.next()??;
        if channels.next().is_some() {
            return None;
        }

        Some(Color::new(r, g, b))
    }

    /// Parse a hex color (without the `#` prefix).
    fn parse_hex(hex: &str) -> Result<Self, ColorParseError> {
        let invalid = || ColorParseError::InvalidHex(format!("#{hex}"));

        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let digit = |i: usize| u8::from_str_radix(&hex[i..=i], 16).map_err(|_| invalid());
        let pair = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());

        match hex.len() {
            3 => Ok(Color::new(digit(0)? * 17, digit(1)? * 17, digit(2)? * 17)),
            6 => Ok(Color::new(pair(0)?, pair(2)?, pair(4)?)),
            _ => Err(invalid()),
        }
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::parse(s)
    }
}

/// Formats as a markup channel literal, e.g. `(10,20,30)`.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{})", self.r, self.g, self.b)
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Color::new(r, g, b)
    }
}

impl Mul<f32> for Color {
    type Output = Color;

    fn mul(self, factor: f32) -> Color {
        self.scale(factor)
    }
}

impl Div<f32> for Color {
    type Output = Color;

    fn div(self, divisor: f32) -> Color {
        self.shrink(divisor)
    }
}
