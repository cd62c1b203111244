//! The 16 canonical compass directions.
//!
//! Directions are ordered clockwise from North in steps of 22.5 deg, so the
//! 0-based index times 22.5 is the bearing of the direction's center line.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::VastuError;

/// A canonical compass direction (16-point rose).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[allow(clippy::upper_case_acronyms)]
pub enum Direction {
    N,
    NNE,
    NE,
    ENE,
    E,
    ESE,
    SE,
    SSE,
    S,
    SSW,
    SW,
    WSW,
    W,
    WNW,
    NW,
    NNW,
}

/// All 16 directions in clockwise order (0 = N, 15 = NNW).
pub const ALL_DIRECTIONS: [Direction; 16] = [
    Direction::N,
    Direction::NNE,
    Direction::NE,
    Direction::ENE,
    Direction::E,
    Direction::ESE,
    Direction::SE,
    Direction::SSE,
    Direction::S,
    Direction::SSW,
    Direction::SW,
    Direction::WSW,
    Direction::W,
    Direction::WNW,
    Direction::NW,
    Direction::NNW,
];

impl Direction {
    /// Canonical label, e.g. `"NNE"`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::N => "N",
            Self::NNE => "NNE",
            Self::NE => "NE",
            Self::ENE => "ENE",
            Self::E => "E",
            Self::ESE => "ESE",
            Self::SE => "SE",
            Self::SSE => "SSE",
            Self::S => "S",
            Self::SSW => "SSW",
            Self::SW => "SW",
            Self::WSW => "WSW",
            Self::W => "W",
            Self::WNW => "WNW",
            Self::NW => "NW",
            Self::NNW => "NNW",
        }
    }

    /// 0-based index (N=0 .. NNW=15).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Bearing of the direction's center line in degrees.
    pub fn bearing_deg(self) -> f64 {
        f64::from(self.index()) * 22.5
    }

    /// All 16 directions in order.
    pub const fn all() -> &'static [Direction; 16] {
        &ALL_DIRECTIONS
    }

    /// Exact, case-sensitive lookup by canonical label.
    ///
    /// Returns `None` for anything that is not one of the 16 labels.
    pub fn from_name(name: &str) -> Option<Self> {
        ALL_DIRECTIONS.iter().copied().find(|d| d.name() == name)
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = VastuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| VastuError::UnknownDirection(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_directions_count() {
        assert_eq!(ALL_DIRECTIONS.len(), 16);
    }

    #[test]
    fn direction_indices_sequential() {
        for (i, d) in ALL_DIRECTIONS.iter().enumerate() {
            assert_eq!(d.index() as usize, i);
        }
    }

    #[test]
    fn names_unique() {
        for (i, a) in ALL_DIRECTIONS.iter().enumerate() {
            for b in &ALL_DIRECTIONS[i + 1..] {
                assert_ne!(a.name(), b.name());
            }
        }
    }

    #[test]
    fn from_name_round_trips_every_label() {
        for d in ALL_DIRECTIONS {
            assert_eq!(Direction::from_name(d.name()), Some(d));
        }
    }

    #[test]
    fn from_name_is_case_sensitive() {
        assert_eq!(Direction::from_name("ne"), None);
        assert_eq!(Direction::from_name("Ne"), None);
        assert_eq!(Direction::from_name(" NE"), None);
    }

    #[test]
    fn from_str_unknown_is_error() {
        let err = "bogus".parse::<Direction>().unwrap_err();
        assert_eq!(err, VastuError::UnknownDirection("bogus".to_string()));
    }

    #[test]
    fn bearings() {
        assert!((Direction::N.bearing_deg() - 0.0).abs() < 1e-12);
        assert!((Direction::E.bearing_deg() - 90.0).abs() < 1e-12);
        assert!((Direction::NNW.bearing_deg() - 337.5).abs() < 1e-12);
    }

    #[test]
    fn serializes_as_label() {
        let json = serde_json::to_string(&Direction::WNW).unwrap();
        assert_eq!(json, "\"WNW\"");
    }
}
