// SPDX-License-Identifier: MIT
//
// RGB ↔ HSL conversion math.
//
// Single-character variable names (r, g, b, h, s, l, c, x, m) are the
// standard notation in color science and match the published formulas.
#![allow(clippy::many_single_char_names)]
//
// Two layers:
//
//   Rgb (0.0–1.0)      ↔ Hsl (degrees, 0.0–1.0)   unrounded, lossless
//   (u8, u8, u8)       ↔ (u16, u8, u8)            rounded to whole units
//
// The unrounded layer is what round-trips exactly. The rounded layer is what
// `Color` stores: whole degrees and whole percentages.

/// An sRGB triple with each channel in 0.0–1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    /// Red, 0.0–1.0.
    pub r: f32,
    /// Green, 0.0–1.0.
    pub g: f32,
    /// Blue, 0.0–1.0.
    pub b: f32,
}

impl Rgb {
    /// Create from unit-range channels.
    #[inline]
    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Create from 8-bit channels.
    #[must_use]
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: f32::from(r) / 255.0,
            g: f32::from(g) / 255.0,
            b: f32::from(b) / 255.0,
        }
    }

    /// Scale to 8-bit channels, rounding to nearest and clamping to 0–255.
    #[must_use]
    pub fn to_u8(self) -> (u8, u8, u8) {
        (to_u8(self.r), to_u8(self.g), to_u8(self.b))
    }
}

/// An HSL triple: hue in degrees, saturation and lightness in 0.0–1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue angle in degrees, 0.0 to 360.0 (exclusive).
    pub h: f32,
    /// Saturation, 0.0 (gray) to 1.0 (fully saturated).
    pub s: f32,
    /// Lightness, 0.0 (black) to 1.0 (white).
    pub l: f32,
}

impl Hsl {
    /// Create from a hue in degrees and unit-range saturation and lightness.
    #[inline]
    #[must_use]
    pub const fn new(h: f32, s: f32, l: f32) -> Self {
        Self { h, s, l }
    }

    /// Create from whole degrees and whole percentages.
    #[must_use]
    pub fn from_percent(h: u16, s: u8, l: u8) -> Self {
        Self {
            h: f32::from(h),
            s: f32::from(s) / 100.0,
            l: f32::from(l) / 100.0,
        }
    }

    /// Round to whole degrees and whole percentages.
    ///
    /// A hue that rounds up to 360° wraps to 0°.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn to_percent(self) -> (u16, u8, u8) {
        // Clamp guarantees the casts stay in range.
        let h = normalize_hue(self.h).round();
        let h = if h >= 360.0 { 0 } else { h as u16 };
        let s = (self.s * 100.0).round().clamp(0.0, 100.0) as u8;
        let l = (self.l * 100.0).round().clamp(0.0, 100.0) as u8;
        (h, s, l)
    }
}

// ─── RGB → HSL ───────────────────────────────────────────────────────────────

/// Convert unit-range RGB to HSL.
///
/// Achromatic input (all channels equal) yields hue 0 and saturation 0, so
/// the hue branch never divides by a zero delta.
#[must_use]
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let Rgb { r, g, b } = rgb;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    let l = (max + min) / 2.0;

    if delta <= 0.0 {
        return Hsl { h: 0.0, s: 0.0, l };
    }

    let s = delta / (1.0 - 2.0f32.mul_add(l, -1.0).abs());

    // `max` is bit-identical to whichever channel produced it.
    #[allow(clippy::float_cmp)]
    let h = if max == r {
        60.0 * ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };

    Hsl {
        h: normalize_hue(h),
        s: s.clamp(0.0, 1.0),
        l,
    }
}

/// Convert 8-bit RGB to whole-unit HSL `(degrees, percent, percent)`.
#[must_use]
pub fn rgb8_to_hsl(r: u8, g: u8, b: u8) -> (u16, u8, u8) {
    rgb_to_hsl(Rgb::from_u8(r, g, b)).to_percent()
}

// ─── HSL → RGB ───────────────────────────────────────────────────────────────

/// Convert HSL to unit-range RGB.
///
/// The hue is wrapped into [0, 360) first. Sector boundaries belong to the
/// sector they open: 60° is yellow's sector `(x, c, 0)`, not red's.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let h = normalize_hue(hsl.h);
    let s = hsl.s.clamp(0.0, 1.0);
    let l = hsl.l.clamp(0.0, 1.0);

    let c = (1.0 - 2.0f32.mul_add(l, -1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    // h is in [0, 360), so the sector index is 0–5.
    let (r, g, b) = match (h / 60.0) as u8 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    Rgb {
        r: r + m,
        g: g + m,
        b: b + m,
    }
}

/// Convert whole-unit HSL `(degrees, percent, percent)` to 8-bit RGB.
#[must_use]
pub fn hsl_to_rgb8(h: u16, s: u8, l: u8) -> (u8, u8, u8) {
    hsl_to_rgb(Hsl::from_percent(h, s, l)).to_u8()
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

/// Normalize a hue angle to the range [0, 360).
#[inline]
fn normalize_hue(h: f32) -> f32 {
    let h = h.rem_euclid(360.0);
    // rem_euclid can return exactly 360.0 for tiny negative inputs.
    if h >= 360.0 { 0.0 } else { h }
}

/// Convert a float (0.0–1.0) to a u8 (0–255) with correct rounding.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn to_u8(v: f32) -> u8 {
    // Safe: clamp guarantees 0.0 <= value <= 255.0 before truncation.
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn approx_eq(a: f32, b: f32, epsilon: f32) -> bool {
        (a - b).abs() < epsilon
    }

    // Helper: assert RGB values are close (within ±1 out of 255).
    fn assert_rgb8_close(actual: (u8, u8, u8), expected: (u8, u8, u8)) {
        let (ar, ag, ab) = actual;
        let (er, eg, eb) = expected;
        assert!(
            ar.abs_diff(er) <= 1 && ag.abs_diff(eg) <= 1 && ab.abs_diff(eb) <= 1,
            "RGB mismatch: got ({ar}, {ag}, {ab}), expected ({er}, {eg}, {eb})"
        );
    }

    // ── Known Values ─────────────────────────────────────────────────────

    #[test]
    fn ochre_to_hsl() {
        assert_eq!(rgb8_to_hsl(0xaa, 0x88, 0x33), (43, 54, 43));
    }

    #[test]
    fn ochre_from_hsl() {
        assert_rgb8_close(hsl_to_rgb8(43, 54, 43), (0xaa, 0x88, 0x33));
    }

    #[test]
    fn primaries_and_secondaries() {
        let cases = [
            ((255, 0, 0), (0, 100, 50)),
            ((255, 255, 0), (60, 100, 50)),
            ((0, 255, 0), (120, 100, 50)),
            ((0, 255, 255), (180, 100, 50)),
            ((0, 0, 255), (240, 100, 50)),
            ((255, 0, 255), (300, 100, 50)),
        ];
        for ((r, g, b), hsl) in cases {
            assert_eq!(rgb8_to_hsl(r, g, b), hsl, "rgb({r}, {g}, {b})");
            assert_eq!(hsl_to_rgb8(hsl.0, hsl.1, hsl.2), (r, g, b), "hsl{hsl:?}");
        }
    }

    #[test]
    fn black_and_white() {
        assert_eq!(rgb8_to_hsl(0, 0, 0), (0, 0, 0));
        assert_eq!(rgb8_to_hsl(255, 255, 255), (0, 0, 100));
        assert_eq!(hsl_to_rgb8(0, 0, 0), (0, 0, 0));
        assert_eq!(hsl_to_rgb8(0, 0, 100), (255, 255, 255));
    }

    // ── Achromatic ───────────────────────────────────────────────────────

    #[test]
    fn gray_has_no_saturation() {
        let hsl = rgb_to_hsl(Rgb::from_u8(128, 128, 128));
        assert!(approx_eq(hsl.s, 0.0, f32::EPSILON));
        assert!(approx_eq(hsl.h, 0.0, f32::EPSILON));
        assert!(hsl.l.is_finite());
    }

    #[test]
    fn zero_saturation_ignores_hue() {
        for h in [0, 90, 200, 359] {
            assert_eq!(hsl_to_rgb8(h, 0, 50), (128, 128, 128), "hue {h}");
        }
    }

    // ── Sector Boundaries ────────────────────────────────────────────────

    #[test]
    fn sector_boundaries_pick_the_opening_sector() {
        let cases = [
            (0.0, (1.0, 0.0, 0.0)),
            (60.0, (1.0, 1.0, 0.0)),
            (120.0, (0.0, 1.0, 0.0)),
            (180.0, (0.0, 1.0, 1.0)),
            (240.0, (0.0, 0.0, 1.0)),
            (300.0, (1.0, 0.0, 1.0)),
        ];
        for (h, (r, g, b)) in cases {
            let rgb = hsl_to_rgb(Hsl::new(h, 1.0, 0.5));
            assert!(
                approx_eq(rgb.r, r, 1e-6) && approx_eq(rgb.g, g, 1e-6) && approx_eq(rgb.b, b, 1e-6),
                "hue {h}: got {rgb:?}"
            );
        }
    }

    #[test]
    fn just_below_boundary_stays_in_previous_sector() {
        // 119.9° is still in the (x, c, 0) sector: red is small but nonzero,
        // blue stays at zero.
        let rgb = hsl_to_rgb(Hsl::new(119.9, 1.0, 0.5));
        assert!(rgb.r > 0.0 && rgb.r < 0.01, "{rgb:?}");
        assert!(approx_eq(rgb.b, 0.0, 1e-6), "{rgb:?}");
    }

    #[test]
    fn hue_wraps_around() {
        assert_eq!(
            hsl_to_rgb(Hsl::new(360.0, 1.0, 0.5)),
            hsl_to_rgb(Hsl::new(0.0, 1.0, 0.5))
        );
        assert_eq!(
            hsl_to_rgb(Hsl::new(-120.0, 1.0, 0.5)),
            hsl_to_rgb(Hsl::new(240.0, 1.0, 0.5))
        );
    }

    #[test]
    fn rounded_hue_never_reaches_360() {
        // rgb(255, 0, 1) sits at ~359.76°, which rounds to 360 and wraps.
        let (h, _, _) = rgb8_to_hsl(255, 0, 1);
        assert_eq!(h, 0);
        assert_eq!(Hsl::new(359.6, 0.5, 0.5).to_percent().0, 0);
        assert_eq!(Hsl::new(359.4, 0.5, 0.5).to_percent().0, 359);
    }

    #[test]
    fn red_max_with_blue_above_green_wraps_positive() {
        // (g - b) / delta is negative here; the mod must land in [300, 360).
        let hsl = rgb_to_hsl(Rgb::from_u8(255, 0, 128));
        assert!(hsl.h > 300.0 && hsl.h < 360.0, "hue {}", hsl.h);
    }

    // ── Roundtrip ────────────────────────────────────────────────────────

    #[test]
    fn unrounded_roundtrip_is_exact_across_the_cube() {
        // 0, 3, …, 255 on every axis: 86³ samples including all corners.
        for r in (0..=255u8).step_by(3) {
            for g in (0..=255u8).step_by(3) {
                for b in (0..=255u8).step_by(3) {
                    let back = hsl_to_rgb(rgb_to_hsl(Rgb::from_u8(r, g, b))).to_u8();
                    assert_rgb8_close(back, (r, g, b));
                }
            }
        }
    }

    proptest! {
        #[test]
        fn unrounded_roundtrip_within_one(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
            let (rr, rg, rb) = hsl_to_rgb(rgb_to_hsl(Rgb::from_u8(r, g, b))).to_u8();
            prop_assert!(rr.abs_diff(r) <= 1, "r {r} -> {rr}");
            prop_assert!(rg.abs_diff(g) <= 1, "g {g} -> {rg}");
            prop_assert!(rb.abs_diff(b) <= 1, "b {b} -> {rb}");
        }

        #[test]
        fn hsl_components_stay_in_range(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
            let (h, s, l) = rgb8_to_hsl(r, g, b);
            prop_assert!(h < 360);
            prop_assert!(s <= 100);
            prop_assert!(l <= 100);
        }
    }
}
