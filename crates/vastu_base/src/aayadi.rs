//! Aayadi indices and the Vastu compatibility score.
//!
//! All six indices come from the footprint perimeter or the height, both
//! in feet:
//!
//! ```text
//! aaya      = (P * 8 / 12) mod 12            (real remainder)
//! vyaya     = (P * 3 / 10) mod 12            (real remainder)
//! yoni      = floor(P * 3 / 8)  mod 8  + 1
//! vara      = floor(H * 8 / 7)  mod 7  + 1
//! tithi     = floor(H * 9 / 30) mod 30 + 1
//! nakshatra = floor(P * 3 / 27) mod 27 + 1
//! ```
//!
//! aaya and vyaya keep their fractional part; the others are ordinal
//! indices and floor before the remainder.
//!
//! The score starts at 50 and gains +20 when aaya > vyaya, +15 for a
//! favorable yoni and +15 for an auspicious entrance.

use log::{debug, trace};

use crate::aayadi_types::{AayadiResult, Measurement, Recommendation, ScoringConfig, Unit};
use crate::direction::Direction;
use crate::util::cyclic_index;

/// Yoni values that earn the yoni bonus.
pub const GOOD_YONI: [u8; 4] = [1, 3, 5, 7];

/// Entrance directions that earn the entrance bonus.
pub const AUSPICIOUS_ENTRANCES: [Direction; 4] =
    [Direction::N, Direction::NE, Direction::E, Direction::NNE];

/// Whether `yoni` is one of the favorable values.
pub fn is_good_yoni(yoni: u8) -> bool {
    GOOD_YONI.contains(&yoni)
}

/// Whether `entrance` is exactly one of `N`, `NE`, `E`, `NNE`.
///
/// Anything else, including labels that are not directions at all, is
/// simply not auspicious.
pub fn is_auspicious_entrance(entrance: &str) -> bool {
    Direction::from_name(entrance).is_some_and(|d| AUSPICIOUS_ENTRANCES.contains(&d))
}

/// Evaluate a footprint from raw inputs.
///
/// Dimensions must be positive; the caller gates this (see
/// [`Measurement::new`]). `entrance` is matched against the 16 canonical
/// labels and an unknown label just misses the entrance bonus.
pub fn evaluate(length: f64, breadth: f64, height: f64, unit: Unit, entrance: &str) -> AayadiResult {
    let direction = Direction::from_name(entrance);
    if direction.is_none() {
        trace!("entrance {entrance:?} is not a canonical direction");
    }
    let k = unit.to_feet_factor();
    compute(
        length * k,
        breadth * k,
        height * k,
        direction,
        &ScoringConfig::default(),
    )
}

/// Evaluate a validated measurement with the default scoring rules.
pub fn evaluate_measurement(m: &Measurement, entrance: Option<Direction>) -> AayadiResult {
    evaluate_with(m, entrance, &ScoringConfig::default())
}

/// Evaluate a validated measurement with custom scoring weights.
///
/// The score saturates at 100.
pub fn evaluate_with(
    m: &Measurement,
    entrance: Option<Direction>,
    config: &ScoringConfig,
) -> AayadiResult {
    let (l, b, h) = m.to_feet();
    compute(l, b, h, entrance, config)
}

fn compute(
    length_ft: f64,
    breadth_ft: f64,
    height_ft: f64,
    entrance: Option<Direction>,
    config: &ScoringConfig,
) -> AayadiResult {
    let perimeter = 2.0 * (length_ft + breadth_ft);

    let aaya = ((perimeter * 8.0) / 12.0) % 12.0;
    let vyaya = ((perimeter * 3.0) / 10.0) % 12.0;
    let yoni = cyclic_index((perimeter * 3.0) / 8.0, 8);
    let vara = cyclic_index((height_ft * 8.0) / 7.0, 7);
    let tithi = cyclic_index((height_ft * 9.0) / 30.0, 30);
    let nakshatra = cyclic_index((perimeter * 3.0) / 27.0, 27);

    let gain = aaya > vyaya;
    let good_yoni = config.good_yoni.contains(&yoni);
    let auspicious = entrance.is_some_and(|d| config.auspicious_entrances.contains(&d));

    let mut score = config.base;
    if gain {
        score = score.saturating_add(config.gain_bonus);
    }
    if good_yoni {
        score = score.saturating_add(config.yoni_bonus);
    }
    if auspicious {
        score = score.saturating_add(config.entrance_bonus);
    }
    let score = score.min(100);

    let mut recommendations = Vec::with_capacity(3);
    if !gain {
        recommendations.push(Recommendation::IncomeNotAboveExpenditure);
    }
    if !good_yoni {
        recommendations.push(Recommendation::SuboptimalYoni);
    }
    recommendations.push(if auspicious {
        Recommendation::AuspiciousEntrance
    } else {
        Recommendation::NeutralEntrance
    });

    debug!(
        "aayadi: perimeter={perimeter:.4} ft aaya={aaya:.4} vyaya={vyaya:.4} yoni={yoni} score={score}"
    );

    AayadiResult {
        aaya,
        vyaya,
        yoni,
        vara,
        tithi,
        nakshatra,
        score,
        recommendations,
    }
}
