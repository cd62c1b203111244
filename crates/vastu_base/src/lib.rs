//! Aayadi scoring and directional-zone model for Vastu evaluation.
//!
//! This crate provides:
//! - The 16 canonical compass directions and their zone catalog
//! - Sector geometry for drawing the compass (bearing convention, 0 deg = North)
//! - Aayadi indices (aaya, vyaya, yoni, vara, tithi, nakshatra) and the
//!   compatibility score derived from a rectangular footprint
//!
//! Everything here is pure: no I/O, no shared mutable state.

pub mod aayadi;
pub mod aayadi_types;
pub mod direction;
pub mod error;
pub mod util;
pub mod zone;

pub use aayadi::{
    AUSPICIOUS_ENTRANCES, GOOD_YONI, evaluate, evaluate_measurement, evaluate_with,
    is_auspicious_entrance, is_good_yoni,
};
pub use aayadi_types::{
    AayadiResult, FEET_PER_METER, Measurement, Recommendation, ScoringConfig, Unit,
};
pub use direction::{ALL_DIRECTIONS, Direction};
pub use error::VastuError;
pub use zone::{
    LABEL_RADIUS_FACTOR, MARKER_OFFSET, Point, SECTOR_HALF_WIDTH, SECTOR_SPAN, SectorArc, ZONES,
    Zone, all_zones, bearing_to_point, entrance_marker_position, find_by_name, label_position,
    marker_position, sector_arc, sector_boundary_angles, sector_path_data, zone_for,
    zone_from_bearing,
};
