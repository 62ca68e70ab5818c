// SPDX-License-Identifier: MIT
//
// Construction errors.
//
// Every failure a caller can hit while building a `Color` is an invalid
// argument: the input either has no recognizable shape or carries a value
// outside its range. The enum keeps the detail for messages and tests,
// while `ErrorKind` collapses it to the single kind callers branch on.

use thiserror::Error;

/// Coarse classification of a [`ColorError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The input could not be turned into a color.
    InvalidArgument,
}

/// Why a color could not be constructed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorError {
    /// The configuration object had neither RGB nor HSL keys.
    #[error("invalid argument: expected an object with `r`, `g`, `b` or `h`, `s`, `l` fields")]
    UnrecognizedShape,

    /// The configuration object mixed RGB and HSL keys.
    #[error("invalid argument: object has both RGB and HSL fields")]
    AmbiguousShape,

    /// One field of a selected triple was absent.
    #[error("invalid argument: missing field `{0}`")]
    MissingField(&'static str),

    /// NaN or infinity.
    #[error("invalid argument: `{field}` is not a finite number")]
    NotFinite {
        /// Field name as it appears in the configuration object.
        field: &'static str,
    },

    /// A fractional value for a field that only holds integers.
    #[error("invalid argument: `{field}` = {value} is not an integer")]
    NotIntegral {
        /// Field name as it appears in the configuration object.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A value outside the field's bounds.
    #[error("invalid argument: `{field}` = {value} is outside {range}")]
    OutOfRange {
        /// Field name as it appears in the configuration object.
        field: &'static str,
        /// The rejected value.
        value: f64,
        /// Human-readable bounds, e.g. `[0, 255]`.
        range: &'static str,
    },

    /// A hex string that is not `#RGB`, `#RGBA`, `#RRGGBB` or `#RRGGBBAA`.
    #[error("invalid argument: `{0}` is not a hex color")]
    InvalidHex(String),

    /// A serialized configuration object that could not be read.
    #[error("invalid argument: {0}")]
    Malformed(String),
}

impl ColorError {
    /// The kind of this error. Always [`ErrorKind::InvalidArgument`].
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::UnrecognizedShape
            | Self::AmbiguousShape
            | Self::MissingField(_)
            | Self::NotFinite { .. }
            | Self::NotIntegral { .. }
            | Self::OutOfRange { .. }
            | Self::InvalidHex(_)
            | Self::Malformed(_) => ErrorKind::InvalidArgument,
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
