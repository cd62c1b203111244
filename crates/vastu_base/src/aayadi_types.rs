//! Types for Aayadi evaluation: units, measurements, scoring configuration
//! and the result record.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};

use crate::aayadi::{AUSPICIOUS_ENTRANCES, GOOD_YONI};
use crate::direction::Direction;
use crate::error::VastuError;

/// Feet per meter (international foot).
pub const FEET_PER_METER: f64 = 3.28084;

/// Length unit of a measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[default]
    Feet,
    Meters,
}

impl Unit {
    /// Short label used in reports: `ft` or `m`.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Feet => "ft",
            Self::Meters => "m",
        }
    }

    /// Multiplier that converts a value in this unit to feet.
    pub const fn to_feet_factor(self) -> f64 {
        match self {
            Self::Feet => 1.0,
            Self::Meters => FEET_PER_METER,
        }
    }
}

impl Display for Unit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Unit {
    type Err = VastuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ft" | "feet" => Ok(Self::Feet),
            "m" | "meters" => Ok(Self::Meters),
            _ => Err(VastuError::UnknownUnit(s.to_string())),
        }
    }
}

/// A validated building footprint: all three dimensions finite and > 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Measurement {
    length: f64,
    breadth: f64,
    height: f64,
    unit: Unit,
}

impl Measurement {
    /// Validate and build a measurement.
    ///
    /// This is the gate callers apply before evaluating; the engine itself
    /// never rejects input.
    pub fn new(length: f64, breadth: f64, height: f64, unit: Unit) -> Result<Self, VastuError> {
        for (name, value) in [("length", length), ("breadth", breadth), ("height", height)] {
            if !value.is_finite() {
                return Err(VastuError::NonFiniteDimension(name));
            }
            if value <= 0.0 {
                return Err(VastuError::NonPositiveDimension(name));
            }
        }
        Ok(Self {
            length,
            breadth,
            height,
            unit,
        })
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn breadth(&self) -> f64 {
        self.breadth
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    /// `(length, breadth, height)` converted to feet.
    pub fn to_feet(&self) -> (f64, f64, f64) {
        let k = self.unit.to_feet_factor();
        (self.length * k, self.breadth * k, self.height * k)
    }

    /// Perimeter of the footprint in feet: `2 × (L + B)`.
    pub fn perimeter_ft(&self) -> f64 {
        let (l, b, _) = self.to_feet();
        2.0 * (l + b)
    }
}

/// Fixed weights and sets behind the compatibility score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringConfig {
    /// Score before any bonus. Default: 50.
    pub base: u8,
    /// Bonus when aaya exceeds vyaya. Default: 20.
    pub gain_bonus: u8,
    /// Bonus when yoni is one of `good_yoni`. Default: 15.
    pub yoni_bonus: u8,
    /// Bonus when the entrance is one of `auspicious_entrances`. Default: 15.
    pub entrance_bonus: u8,
    /// Favorable yoni values. Default: 1, 3, 5, 7.
    pub good_yoni: [u8; 4],
    /// Favorable entrance directions. Default: N, NE, E, NNE.
    pub auspicious_entrances: [Direction; 4],
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            base: 50,
            gain_bonus: 20,
            yoni_bonus: 15,
            entrance_bonus: 15,
            good_yoni: GOOD_YONI,
            auspicious_entrances: AUSPICIOUS_ENTRANCES,
        }
    }
}

/// A recommendation emitted by the evaluation, in a fixed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Recommendation {
    /// aaya ≤ vyaya.
    IncomeNotAboveExpenditure,
    /// yoni is not a favorable value.
    SuboptimalYoni,
    /// Entrance is one of the auspicious directions.
    AuspiciousEntrance,
    /// Entrance is any other direction, or not a known label.
    NeutralEntrance,
}

impl Recommendation {
    /// Text shown to the user.
    pub const fn message(self) -> &'static str {
        match self {
            Self::IncomeNotAboveExpenditure => {
                "Income (Aaya) is less than Expenditure (Vyaya). Consider adjusting dimensions slightly."
            }
            Self::SuboptimalYoni => {
                "Yoni index is not optimal. This affects the energy flow of the structure."
            }
            Self::AuspiciousEntrance => "Excellent Main Entrance direction chosen.",
            Self::NeutralEntrance => {
                "Entrance direction is neutral or requires remedies (pyramids/yantras)."
            }
        }
    }

    /// Whether this is one of the two entrance-direction messages.
    pub const fn is_entrance(self) -> bool {
        matches!(self, Self::AuspiciousEntrance | Self::NeutralEntrance)
    }
}

impl Display for Recommendation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl Serialize for Recommendation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.message())
    }
}

/// Output of an Aayadi evaluation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AayadiResult {
    /// Gain index, real-valued in [0, 12).
    pub aaya: f64,
    /// Loss index, real-valued in [0, 12).
    pub vyaya: f64,
    /// 1..=8.
    pub yoni: u8,
    /// 1..=7.
    pub vara: u8,
    /// 1..=30.
    pub tithi: u8,
    /// 1..=27.
    pub nakshatra: u8,
    /// Compatibility score out of 100.
    pub score: u8,
    /// One to three entries; the entrance message is always last.
    pub recommendations: Vec<Recommendation>,
}

impl AayadiResult {
    /// Recommendation texts in order.
    pub fn recommendation_messages(&self) -> Vec<&'static str> {
        self.recommendations.iter().map(|r| r.message()).collect()
    }

    /// Scores above 70 count as favorable.
    pub fn is_favorable(&self) -> bool {
        self.score > 70
    }
}
