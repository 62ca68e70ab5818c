// SPDX-License-Identifier: MIT
//
// tint — RGB/HSL color values.
//
// The facade re-exports `tint-color` and adds the JSON entry points, so a
// configuration object written as `{"r": 170, "g": 136, "b": 51}` or
// `{"h": 43, "s": 54, "l": 43}` becomes a `Color` in one call:
//
//   JSON text → serde_json::Value → ColorFields → ColorConfig (key inspection) → Color
//
// Every failure along that path, syntax errors included, surfaces as a
// `ColorError` of kind `InvalidArgument`.

pub use tint_color::{
    Color, ColorConfig, ColorError, ColorFields, ColorInput, ErrorKind, Hsl, HslConfig, Rgb,
    RgbConfig, color, convert, error, input,
};

use serde::Deserialize;
use serde_json::Value;

/// Build a color from a JSON configuration object.
///
/// ```
/// let color = tint::from_json(r#"{"r": 170, "g": 136, "b": 51}"#).unwrap();
/// assert_eq!(color.to_hsl(), (43, 54, 43));
/// ```
///
/// # Errors
///
/// Returns [`ColorError::Malformed`] for text that is not JSON, and the
/// shape or range error for a JSON value that is not a color.
pub fn from_json(json: &str) -> Result<Color, ColorError> {
    let value: Value = serde_json::from_str(json).map_err(|err| {
        tracing::debug!(%err, "color configuration is not valid JSON");
        ColorError::Malformed(err.to_string())
    })?;
    from_value(&value)
}

/// Build a color from an already-parsed JSON value.
///
/// Objects go through the same [`ColorFields`] reading serde uses for
/// [`Color`], so `null` under a color key counts as absent and any other
/// non-number there is [`ColorError::Malformed`]. A three-element array is
/// read as bare `[r, g, b]` channel numbers.
///
/// # Errors
///
/// Returns [`ColorError`] of kind [`ErrorKind::InvalidArgument`] if the
/// value is neither shape or carries an out-of-range number.
pub fn from_value(value: &Value) -> Result<Color, ColorError> {
    match value {
        Value::Object(_) => {
            let fields = ColorFields::deserialize(value).map_err(|err| {
                tracing::debug!(%err, "color configuration has a non-numeric color key");
                ColorError::Malformed(err.to_string())
            })?;
            Color::new(ColorConfig::try_from(fields)?)
        }
        Value::Array(items) => match items.as_slice() {
            [r, g, b] => {
                let channel = |v: &Value| {
                    v.as_f64().ok_or_else(|| {
                        ColorError::Malformed(format!("channel must be a number, found {v}"))
                    })
                };
                Color::new((channel(r)?, channel(g)?, channel(b)?))
            }
            _ => Err(ColorError::UnrecognizedShape),
        },
        _ => Err(ColorError::UnrecognizedShape),
    }
}

/// Serialize a color as its lossless RGB configuration object.
///
/// ```
/// let color = tint::Color::rgb(170, 136, 51);
/// assert_eq!(tint::to_json(&color).unwrap(), r#"{"r":170.0,"g":136.0,"b":51.0,"a":1.0}"#);
/// ```
///
/// # Errors
///
/// Returns [`ColorError::Malformed`] if the serializer fails.
pub fn to_json(color: &Color) -> Result<String, ColorError> {
    serde_json::to_string(color).map_err(|err| ColorError::Malformed(err.to_string()))
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn rgb_object_derives_hsl() {
        let color = from_json(r#"{"r": 170, "g": 136, "b": 51}"#).unwrap();
        assert_eq!(color.to_hsl(), (43, 54, 43));
        assert_eq!(color.a(), 1.0);
    }

    #[test]
    fn hsl_object_derives_rgb() {
        let color = from_json(r#"{"h": 43, "s": 54, "l": 43}"#).unwrap();
        assert_eq!(color.to_rgb8(), (169, 135, 50));
    }

    #[test]
    fn channel_array_is_rgb() {
        let color = from_json("[170, 136, 51]").unwrap();
        assert_eq!(color, Color::rgb(170, 136, 51));
    }

    #[test]
    fn unrelated_non_numeric_keys_are_ignored() {
        let color = from_json(r#"{"name": "ochre", "r": 170, "g": 136, "b": 51}"#).unwrap();
        assert_eq!(color, Color::rgb(170, 136, 51));
    }

    #[test]
    fn invalid_inputs_are_invalid_arguments() {
        let cases = [
            "{}",
            r#"{"foo": 1}"#,
            r#"{"r": 1, "g": 2}"#,
            r#"{"r": 1, "g": 2, "b": 3, "h": 4, "s": 5, "l": 6}"#,
            r#"{"r": "red", "g": 2, "b": 3}"#,
            r#"{"r": 1, "g": 2, "b": 3, "a": 2}"#,
            r#"{"h": 360, "s": 50, "l": 50}"#,
            "[1, 2]",
            "42",
            "not json",
        ];
        for json in cases {
            let err = from_json(json).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidArgument, "{json}: {err}");
        }
    }

    #[test]
    fn shape_errors_keep_their_detail() {
        assert_eq!(from_json("{}"), Err(ColorError::UnrecognizedShape));
        assert_eq!(
            from_json(r#"{"r": 1, "l": 2}"#),
            Err(ColorError::AmbiguousShape)
        );
        assert!(matches!(from_json("{"), Err(ColorError::Malformed(_))));
    }

    #[test]
    fn from_json_agrees_with_serde_on_null_and_non_numeric_keys() {
        let cases = [
            r#"{"r": 1, "g": 2, "b": 3, "a": null}"#,
            r#"{"r": null, "g": 2, "b": 3}"#,
            r#"{"r": "red", "g": 2, "b": 3}"#,
            r#"{"h": 10, "s": true, "l": 3}"#,
            r#"{"name": "x", "r": 1, "g": 2, "b": 3}"#,
            r#"{"name": null, "h": 10, "s": 20, "l": 30}"#,
        ];
        for json in cases {
            let via_facade = from_json(json).ok();
            let via_serde = serde_json::from_str::<Color>(json).ok();
            assert_eq!(via_facade, via_serde, "{json}");
        }
    }

    #[test]
    fn null_alpha_reads_as_opaque() {
        let color = from_json(r#"{"r": 1, "g": 2, "b": 3, "a": null}"#).unwrap();
        assert_eq!(color, Color::rgb(1, 2, 3));
        assert_eq!(color.a(), 1.0);
        assert_eq!(
            from_json(r#"{"r": null, "g": 2, "b": 3}"#),
            Err(ColorError::MissingField("r"))
        );
        assert!(matches!(
            from_json(r#"{"r": "red", "g": 2, "b": 3}"#),
            Err(ColorError::Malformed(_))
        ));
    }

    #[test]
    fn json_roundtrip_preserves_alpha() {
        let color = Color::rgba(10, 20, 30, 0.5).unwrap();
        let json = to_json(&color).unwrap();
        assert_eq!(from_json(&json), Ok(color));
    }
}
