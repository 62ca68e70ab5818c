// SPDX-License-Identifier: MIT
//
// tint-color — a color value that keeps RGB and HSL in lockstep.
//
// Build a `Color` from either side and the other side is derived at
// construction. Channel numbers, RGB objects and HSL objects all funnel
// through two explicit factories (`Color::from_rgb`, `Color::from_hsl`), so
// the conversion math stays addressable by name and testable on its own.
//
// Inputs that cannot be read as a color fail up front with a single error
// kind, `InvalidArgument`. A `Color` is never half-built.

pub mod color;
pub mod convert;
pub mod error;
pub mod input;

pub use color::Color;
pub use convert::{Hsl, Rgb};
pub use error::{ColorError, ErrorKind};
pub use input::{ColorConfig, ColorFields, ColorInput, HslConfig, RgbConfig};
