// SPDX-License-Identifier: MIT
//
// tint color value — RGB and HSL held side by side.
//
// Single-character names (r, g, b, a, h, s, l) are the standard notation in
// color science and mirror the configuration object keys.
#![allow(clippy::many_single_char_names)]
//
// A `Color` is built once from either representation and derives the other
// on the spot. Both triples are stored, so reading either side is a field
// load. Fields are private: the only way to get a `Color` is through a
// constructor, which keeps the two triples describing the same color.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::convert::{hsl_to_rgb8, rgb8_to_hsl, to_u8};
use crate::error::ColorError;
use crate::input::{self, ColorConfig, ColorInput, HslConfig, RgbConfig};

// ─── Color ───────────────────────────────────────────────────────────────────

/// A color with both its RGB and HSL representation populated.
///
/// RGB channels are 0–255, hue is whole degrees in [0, 360), saturation and
/// lightness are whole percentages, alpha is 0.0–1.0.
///
/// # Round-trip
///
/// A whole percent of saturation or lightness is coarser than one step of
/// an 8-bit channel. Rebuilding a color from its stored HSL with
/// `Color::hsl(c.h(), c.s(), c.l())` can therefore land a few units away
/// from the original RGB (up to 3 per channel). The unrounded conversion in
/// [`crate::convert`] (`rgb_to_hsl` then `hsl_to_rgb`) is exact to within
/// ±1. A `Color` keeps the RGB it was built from, so `to_rgb8()` never drifts.
///
/// # Examples
///
/// ```
/// use tint_color::{Color, HslConfig, RgbConfig};
///
/// // Three channel numbers
/// let ochre = Color::rgb(0xaa, 0x88, 0x33);
/// assert_eq!(ochre.to_hsl(), (43, 54, 43));
///
/// // RGB configuration object
/// let same = Color::from_rgb(RgbConfig::new(170.0, 136.0, 51.0)).unwrap();
/// assert_eq!(same.to_hsl(), ochre.to_hsl());
///
/// // HSL configuration object
/// let derived = Color::from_hsl(HslConfig::new(43.0, 54.0, 43.0)).unwrap();
/// assert_eq!(derived.to_rgb8(), (169, 135, 50));
///
/// // Hex
/// let hex = Color::hex("#aa8833").unwrap();
/// assert_eq!(hex, ochre);
/// ```
#[derive(Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(into = "RgbConfig", try_from = "ColorConfig")]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
    a: f32,
    h: u16,
    s: u8,
    l: u8,
}

impl Color {
    // ─── Constructors ────────────────────────────────────────────────────

    /// Create an opaque color from 8-bit RGB channels, deriving HSL.
    #[must_use]
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        let (h, s, l) = rgb8_to_hsl(r, g, b);
        Self { r, g, b, a: 1.0, h, s, l }
    }

    /// Create a color from 8-bit RGB channels and alpha, deriving HSL.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError`] if `a` is not finite or outside 0.0–1.0.
    pub fn rgba(r: u8, g: u8, b: u8, a: f32) -> Result<Self, ColorError> {
        Self::rgb(r, g, b).with_alpha(a)
    }

    /// Create an opaque color from whole-unit HSL, deriving RGB.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError`] if `h >= 360` or `s`/`l` exceed 100.
    pub fn hsl(h: u16, s: u8, l: u8) -> Result<Self, ColorError> {
        Self::from_hsl(HslConfig::new(f64::from(h), f64::from(s), f64::from(l)))
    }

    /// Create a color from whole-unit HSL and alpha, deriving RGB.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError`] if any component is out of range.
    pub fn hsla(h: u16, s: u8, l: u8, a: f32) -> Result<Self, ColorError> {
        Self::hsl(h, s, l)?.with_alpha(a)
    }

    /// Create a color from an RGB configuration object, deriving HSL.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError`] if a channel is not a whole number in 0–255 or
    /// the alpha is outside 0.0–1.0.
    pub fn from_rgb(config: RgbConfig) -> Result<Self, ColorError> {
        let parsed = Self::parse_rgb(config);
        match &parsed {
            Ok(color) => tracing::trace!(?color, "derived HSL from RGB"),
            Err(err) => tracing::debug!(%err, ?config, "rejected RGB configuration"),
        }
        parsed
    }

    /// Create a color from an HSL configuration object, deriving RGB.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError`] if the hue is not a whole number in [0, 360),
    /// saturation or lightness is not a whole number in 0–100, or the alpha
    /// is outside 0.0–1.0.
    pub fn from_hsl(config: HslConfig) -> Result<Self, ColorError> {
        let parsed = Self::parse_hsl(config);
        match &parsed {
            Ok(color) => tracing::trace!(?color, "derived RGB from HSL"),
            Err(err) => tracing::debug!(%err, ?config, "rejected HSL configuration"),
        }
        parsed
    }

    fn parse_rgb(config: RgbConfig) -> Result<Self, ColorError> {
        let r = input::channel("r", config.r)?;
        let g = input::channel("g", config.g)?;
        let b = input::channel("b", config.b)?;
        let a = config.a.map_or(Ok(1.0), input::alpha)?;
        Ok(Self { a, ..Self::rgb(r, g, b) })
    }

    fn parse_hsl(config: HslConfig) -> Result<Self, ColorError> {
        let h = input::hue(config.h)?;
        let s = input::percent("s", config.s)?;
        let l = input::percent("l", config.l)?;
        let a = config.a.map_or(Ok(1.0), input::alpha)?;
        let (r, g, b) = hsl_to_rgb8(h, s, l);
        Ok(Self { r, g, b, a, h, s, l })
    }

    /// Create a color from any accepted input shape.
    ///
    /// Three bare numbers are RGB channels with alpha 1. A configuration
    /// object is dispatched to [`Color::from_rgb`] or [`Color::from_hsl`].
    ///
    /// ```
    /// use tint_color::{Color, ColorConfig};
    ///
    /// let a = Color::new((170.0, 136.0, 51.0)).unwrap();
    /// let hsl = ColorConfig::from_fields([("h", 43.0), ("s", 54.0), ("l", 43.0)]).unwrap();
    /// let b = Color::new(hsl).unwrap();
    /// assert_eq!(a.to_hsl(), b.to_hsl());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ColorError`] if any value is out of range.
    pub fn new(input: impl Into<ColorInput>) -> Result<Self, ColorError> {
        match input.into() {
            ColorInput::Channels(r, g, b) => Self::from_rgb(RgbConfig::new(r, g, b)),
            ColorInput::Config(ColorConfig::Rgb(rgb)) => Self::from_rgb(rgb),
            ColorInput::Config(ColorConfig::Hsl(hsl)) => Self::from_hsl(hsl),
        }
    }

    /// Create a color from a hex string.
    ///
    /// Supports: `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA` (with or without `#`).
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidHex`] if the string is not a valid hex color.
    pub fn hex(s: &str) -> Result<Self, ColorError> {
        parse_hex(s).ok_or_else(|| ColorError::InvalidHex(s.to_owned()))
    }

    /// Pure black.
    pub const BLACK: Self = Self {
        r: 0,
        g: 0,
        b: 0,
        a: 1.0,
        h: 0,
        s: 0,
        l: 0,
    };

    /// Pure white.
    pub const WHITE: Self = Self {
        r: 255,
        g: 255,
        b: 255,
        a: 1.0,
        h: 0,
        s: 0,
        l: 100,
    };

    // ─── Accessors ───────────────────────────────────────────────────────

    /// Red channel, 0–255.
    #[inline]
    #[must_use]
    pub const fn r(self) -> u8 {
        self.r
    }

    /// Green channel, 0–255.
    #[inline]
    #[must_use]
    pub const fn g(self) -> u8 {
        self.g
    }

    /// Blue channel, 0–255.
    #[inline]
    #[must_use]
    pub const fn b(self) -> u8 {
        self.b
    }

    /// Alpha, 0.0 (transparent) to 1.0 (opaque).
    #[inline]
    #[must_use]
    pub const fn a(self) -> f32 {
        self.a
    }

    /// Hue in whole degrees, 0–359.
    #[inline]
    #[must_use]
    pub const fn h(self) -> u16 {
        self.h
    }

    /// Saturation in whole percent, 0–100.
    #[inline]
    #[must_use]
    pub const fn s(self) -> u8 {
        self.s
    }

    /// Lightness in whole percent, 0–100.
    #[inline]
    #[must_use]
    pub const fn l(self) -> u8 {
        self.l
    }

    /// The RGB triple.
    #[inline]
    #[must_use]
    pub const fn to_rgb8(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// The HSL triple as `(degrees, percent, percent)`.
    #[inline]
    #[must_use]
    pub const fn to_hsl(self) -> (u16, u8, u8) {
        (self.h, self.s, self.l)
    }

    // ─── Alpha ───────────────────────────────────────────────────────────

    /// Return a copy with the given alpha value.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError`] if `a` is not finite or outside 0.0–1.0.
    pub fn with_alpha(self, a: f32) -> Result<Self, ColorError> {
        let a = input::alpha(f64::from(a))?;
        Ok(Self { a, ..self })
    }

    /// Whether this color is fully opaque (alpha >= 1.0).
    #[inline]
    #[must_use]
    pub fn is_opaque(self) -> bool {
        self.a >= 1.0
    }

    /// Whether this color is achromatic (a gray, zero saturation).
    #[inline]
    #[must_use]
    pub const fn is_achromatic(self) -> bool {
        self.s == 0
    }

    // ─── Hex ─────────────────────────────────────────────────────────────

    /// Convert to hex string (`#rrggbb` or `#rrggbbaa` if alpha < 1.0).
    #[must_use]
    pub fn to_hex(self) -> String {
        let Self { r, g, b, .. } = self;
        if self.is_opaque() {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            let a = to_u8(self.a);
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Color(rgb({}, {}, {}) hsl({}, {}%, {}%) a={:.3})",
            self.r, self.g, self.b, self.h, self.s, self.l, self.a
        )
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Default for Color {
    /// Default is fully opaque black.
    fn default() -> Self {
        Self::BLACK
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::hex(s)
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::rgb(r, g, b)
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::rgb(r, g, b)
    }
}

impl TryFrom<ColorConfig> for Color {
    type Error = ColorError;

    fn try_from(config: ColorConfig) -> Result<Self, Self::Error> {
        Self::new(config)
    }
}

impl From<Color> for RgbConfig {
    fn from(color: Color) -> Self {
        Self {
            r: f64::from(color.r),
            g: f64::from(color.g),
            b: f64::from(color.b),
            a: Some(f64::from(color.a)),
        }
    }
}

// ─── Hex Parsing ─────────────────────────────────────────────────────────────

/// Parse `RGB`, `RGBA`, `RRGGBB` or `RRGGBBAA` (optional `#`) into a Color.
///
/// Short forms use one digit per component and repeat it (`f` → `ff`).
/// A missing alpha component reads as `ff`, which is exactly 1.0.
fn parse_hex(s: &str) -> Option<Color> {
    let digits = s.strip_prefix('#').unwrap_or(s).as_bytes();
    let (width, repeat) = match digits.len() {
        3 | 4 => (1, 0x11),
        6 | 8 => (2, 1),
        _ => return None,
    };

    let mut rgba = [u8::MAX; 4];
    for (slot, component) in rgba.iter_mut().zip(digits.chunks(width)) {
        let value = component
            .iter()
            .try_fold(0u8, |acc, &c| Some(acc << 4 | hex_nibble(c)?))?;
        *slot = value * repeat;
    }

    let [r, g, b, a] = rgba;
    Some(Color {
        a: f32::from(a) / 255.0,
        ..Color::rgb(r, g, b)
    })
}

#[inline]
fn hex_nibble(c: u8) -> Option<u8> {
    char::from(c)
        .to_digit(16)
        .and_then(|d| u8::try_from(d).ok())
}

// ─── Tests ───────────────────────────────────────────────────────────────────
