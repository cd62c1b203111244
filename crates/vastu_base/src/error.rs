//! Error types for caller-side input validation.
//!
//! The scoring engine and zone queries never fail; these errors come only
//! from building a [`Measurement`](crate::Measurement) or parsing units and
//! direction labels from text.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from validating or parsing Vastu inputs.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum VastuError {
    /// A dimension was zero or negative. Carries the dimension name.
    NonPositiveDimension(&'static str),
    /// A dimension was NaN or infinite. Carries the dimension name.
    NonFiniteDimension(&'static str),
    /// Unit label was not one of `ft`, `feet`, `m`, `meters`.
    UnknownUnit(String),
    /// Direction label was not one of the 16 canonical names.
    UnknownDirection(String),
}

impl Display for VastuError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonPositiveDimension(dim) => write!(f, "{dim} must be greater than zero"),
            Self::NonFiniteDimension(dim) => write!(f, "{dim} must be a finite number"),
            Self::UnknownUnit(s) => write!(f, "unknown unit: {s:?} (expected ft or m)"),
            Self::UnknownDirection(s) => write!(f, "unknown direction: {s:?}"),
        }
    }
}

impl Error for VastuError {}
