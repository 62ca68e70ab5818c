//! Input shapes accepted by [`Color::new`](crate::Color::new).
//!
//! A color can be built from three bare channel numbers or from a
//! configuration object. The object is one of two mutually exclusive shapes:
//!
//! | Shape | Keys                 | Derives     |
//! |-------|----------------------|-------------|
//! | RGB   | `r`, `g`, `b`, `a`?  | `h, s, l`   |
//! | HSL   | `h`, `s`, `l`, `a`?  | `r, g, b`   |
//!
//! Untyped objects (JSON, key/value maps) are classified by the keys they
//! carry. Any of `r`/`g`/`b` selects RGB, any of `h`/`s`/`l` selects HSL.
//! Mixing the two, or carrying neither, is an [`InvalidArgument`] error.
//! Unrecognized keys are ignored.
//!
//! Numbers stay `f64` until validation so that out-of-range, fractional and
//! non-finite values can be reported instead of silently truncated.
//!
//! [`InvalidArgument`]: crate::ErrorKind::InvalidArgument

use serde::{Deserialize, Serialize, Serializer};

use crate::error::ColorError;

// ---------------------------------------------------------------------------
// Typed shapes
// ---------------------------------------------------------------------------

/// The RGB configuration object: `{ r, g, b, a? }`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RgbConfig {
    /// Red channel, integer 0–255.
    pub r: f64,
    /// Green channel, integer 0–255.
    pub g: f64,
    /// Blue channel, integer 0–255.
    pub b: f64,
    /// Alpha, 0.0–1.0. Defaults to 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub a: Option<f64>,
}

impl RgbConfig {
    /// An opaque RGB configuration.
    #[must_use]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: None }
    }

    /// Return a copy with the given alpha.
    #[must_use]
    pub const fn with_alpha(self, a: f64) -> Self {
        Self { a: Some(a), ..self }
    }
}

/// The HSL configuration object: `{ h, s, l, a? }`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HslConfig {
    /// Hue, integer degrees in [0, 360).
    pub h: f64,
    /// Saturation, integer percent 0–100.
    pub s: f64,
    /// Lightness, integer percent 0–100.
    pub l: f64,
    /// Alpha, 0.0–1.0. Defaults to 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub a: Option<f64>,
}

impl HslConfig {
    /// An opaque HSL configuration.
    #[must_use]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l, a: None }
    }

    /// Return a copy with the given alpha.
    #[must_use]
    pub const fn with_alpha(self, a: f64) -> Self {
        Self { a: Some(a), ..self }
    }
}

/// A configuration object of either shape.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "ColorFields")]
pub enum ColorConfig {
    /// RGB given, HSL derived.
    Rgb(RgbConfig),
    /// HSL given, RGB derived.
    Hsl(HslConfig),
}

impl ColorConfig {
    /// Classify an untyped object by its keys.
    ///
    /// Keys other than `r g b h s l a` are ignored. A repeated key keeps its
    /// last value.
    ///
    /// # Errors
    ///
    /// [`ColorError::UnrecognizedShape`] when no color key is present,
    /// [`ColorError::AmbiguousShape`] when both shapes are present, and
    /// [`ColorError::MissingField`] when a triple is incomplete.
    pub fn from_fields<'a, I>(fields: I) -> Result<Self, ColorError>
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        let mut raw = ColorFields::default();
        for (key, value) in fields {
            let slot = match key {
                "r" => &mut raw.r,
                "g" => &mut raw.g,
                "b" => &mut raw.b,
                "a" => &mut raw.a,
                "h" => &mut raw.h,
                "s" => &mut raw.s,
                "l" => &mut raw.l,
                _ => continue,
            };
            *slot = Some(value);
        }
        Self::try_from(raw)
    }

    /// The alpha carried by either shape, if any.
    #[must_use]
    pub const fn alpha(&self) -> Option<f64> {
        match self {
            Self::Rgb(rgb) => rgb.a,
            Self::Hsl(hsl) => hsl.a,
        }
    }
}

impl Serialize for ColorConfig {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Rgb(rgb) => rgb.serialize(serializer),
            Self::Hsl(hsl) => hsl.serialize(serializer),
        }
    }
}

impl From<RgbConfig> for ColorConfig {
    fn from(config: RgbConfig) -> Self {
        Self::Rgb(config)
    }
}

impl From<HslConfig> for ColorConfig {
    fn from(config: HslConfig) -> Self {
        Self::Hsl(config)
    }
}

// ---------------------------------------------------------------------------
// Key inspection
// ---------------------------------------------------------------------------

/// Every key either shape may carry, all optional.
///
/// This is what an untyped object deserializes into before it is classified.
/// A `null` value reads as an absent key; any other non-number is a
/// deserialization error. Other keys are ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct ColorFields {
    /// Red channel.
    pub r: Option<f64>,
    /// Green channel.
    pub g: Option<f64>,
    /// Blue channel.
    pub b: Option<f64>,
    /// Alpha, either shape.
    pub a: Option<f64>,
    /// Hue.
    pub h: Option<f64>,
    /// Saturation.
    pub s: Option<f64>,
    /// Lightness.
    pub l: Option<f64>,
}

impl TryFrom<ColorFields> for ColorConfig {
    type Error = ColorError;

    fn try_from(raw: ColorFields) -> Result<Self, Self::Error> {
        let has_rgb = raw.r.is_some() || raw.g.is_some() || raw.b.is_some();
        let has_hsl = raw.h.is_some() || raw.s.is_some() || raw.l.is_some();

        match (has_rgb, has_hsl) {
            (true, true) => Err(ColorError::AmbiguousShape),
            (false, false) => Err(ColorError::UnrecognizedShape),
            (true, false) => Ok(Self::Rgb(RgbConfig {
                r: raw.r.ok_or(ColorError::MissingField("r"))?,
                g: raw.g.ok_or(ColorError::MissingField("g"))?,
                b: raw.b.ok_or(ColorError::MissingField("b"))?,
                a: raw.a,
            })),
            (false, true) => Ok(Self::Hsl(HslConfig {
                h: raw.h.ok_or(ColorError::MissingField("h"))?,
                s: raw.s.ok_or(ColorError::MissingField("s"))?,
                l: raw.l.ok_or(ColorError::MissingField("l"))?,
                a: raw.a,
            })),
        }
    }
}

// ---------------------------------------------------------------------------
// ColorInput
// ---------------------------------------------------------------------------

/// Everything the flexible constructor accepts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorInput {
    /// Three bare channel numbers `(r, g, b)`, alpha 1.
    Channels(f64, f64, f64),
    /// A configuration object.
    Config(ColorConfig),
}

impl From<(f64, f64, f64)> for ColorInput {
    fn from((r, g, b): (f64, f64, f64)) -> Self {
        Self::Channels(r, g, b)
    }
}

impl From<(u8, u8, u8)> for ColorInput {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::Channels(f64::from(r), f64::from(g), f64::from(b))
    }
}

impl From<ColorConfig> for ColorInput {
    fn from(config: ColorConfig) -> Self {
        Self::Config(config)
    }
}

impl From<RgbConfig> for ColorInput {
    fn from(config: RgbConfig) -> Self {
        Self::Config(ColorConfig::Rgb(config))
    }
}

impl From<HslConfig> for ColorInput {
    fn from(config: HslConfig) -> Self {
        Self::Config(ColorConfig::Hsl(config))
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// A finite, whole number in `[0, max]`.
fn whole(
    field: &'static str,
    value: f64,
    max: f64,
    range: &'static str,
) -> Result<f64, ColorError> {
    if !value.is_finite() {
        return Err(ColorError::NotFinite { field });
    }
    if value < 0.0 || value > max {
        return Err(ColorError::OutOfRange { field, value, range });
    }
    if value.fract() != 0.0 {
        return Err(ColorError::NotIntegral { field, value });
    }
    Ok(value)
}

/// Validate an RGB channel (integer 0–255).
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn channel(field: &'static str, value: f64) -> Result<u8, ColorError> {
    // Safe: `whole` bounds the value to 0..=255.
    whole(field, value, 255.0, "[0, 255]").map(|v| v as u8)
}

/// Validate a hue (integer degrees in [0, 360)).
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn hue(value: f64) -> Result<u16, ColorError> {
    whole("h", value, 359.0, "[0, 360)").map(|v| v as u16)
}

/// Validate a saturation or lightness (integer percent 0–100).
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn percent(field: &'static str, value: f64) -> Result<u8, ColorError> {
    whole(field, value, 100.0, "[0, 100]").map(|v| v as u8)
}

/// Validate an alpha (finite, 0.0–1.0).
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn alpha(value: f64) -> Result<f32, ColorError> {
    if !value.is_finite() {
        return Err(ColorError::NotFinite { field: "a" });
    }
    if !(0.0..=1.0).contains(&value) {
        return Err(ColorError::OutOfRange {
            field: "a",
            value,
            range: "[0, 1]",
        });
    }
    Ok(value as f32)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
