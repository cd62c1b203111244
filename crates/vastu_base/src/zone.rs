//! The 16-sector Vastu zone catalog and compass geometry.
//!
//! The compass circle is divided into 16 equal sectors of 22.5 deg each,
//! one per [`Direction`]. Sector `i` is centered on bearing `i * 22.5` and
//! spans `center ± 11.25`, so the sectors tile the circle with no gap or
//! overlap. North's sector straddles 0 deg: [348.75, 360) ∪ [0, 11.25).
//!
//! Angles here use the bearing convention (0 deg = North, increasing
//! clockwise). Drawing surfaces put angle zero to the right with y growing
//! downward, so every conversion to screen coordinates subtracts 90 deg
//! first; see [`bearing_to_point`].

use std::f64::consts::PI;

use log::trace;
use serde::Serialize;

use crate::direction::Direction;
use crate::util::normalize_360;

/// Angular width of one sector: 360/16 = 22.5 degrees.
pub const SECTOR_SPAN: f64 = 360.0 / 16.0;

/// Half of a sector's width: 11.25 degrees.
pub const SECTOR_HALF_WIDTH: f64 = SECTOR_SPAN / 2.0;

/// Sector labels sit at this fraction of the compass radius.
pub const LABEL_RADIUS_FACTOR: f64 = 0.75;

/// The entrance marker sits this far outside the compass rim.
pub const MARKER_OFFSET: f64 = 15.0;

/// One directional zone of the compass.
///
/// Only `direction` and `center_deg` take part in geometry; the remaining
/// fields are descriptive and exist for presentation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Zone {
    #[serde(rename = "name")]
    pub direction: Direction,
    /// Bearing of the sector's center line, degrees in [0, 360).
    pub center_deg: f64,
    /// What the zone is traditionally best used for.
    pub ideal: &'static str,
    /// Display color as a CSS hex string.
    pub color: &'static str,
    pub description: &'static str,
    /// Governing element(s).
    pub element: &'static str,
    pub dos: &'static [&'static str],
    pub donts: &'static [&'static str],
}

impl Zone {
    /// Canonical label of the zone's direction.
    pub const fn name(&self) -> &'static str {
        self.direction.name()
    }

    /// `(start, end)` bearings of this sector; see [`sector_boundary_angles`].
    pub fn boundary_angles(&self) -> (f64, f64) {
        sector_boundary_angles(self)
    }
}

/// The 16 zones in ascending bearing order (index `i` = `Direction` index `i`).
pub static ZONES: [Zone; 16] = [
    Zone {
        direction: Direction::N,
        center_deg: 0.0,
        ideal: "Wealth, Treasury",
        color: "#80deea",
        description: "Kuber Stan (Wealth). Keep light & open.",
        element: "Water",
        dos: &["Place Money Locker/Safe", "Use Blue/Green colors", "Open spaces, Mirrors"],
        donts: &["Heavy furniture", "Kitchen", "Toilet", "Red/Yellow colors"],
    },
    Zone {
        direction: Direction::NNE,
        center_deg: 22.5,
        ideal: "Health",
        color: "#a5d6a7",
        description: "Health & Immunity zone.",
        element: "Water",
        dos: &["Medicine storage", "Healing activities", "Keep very clean"],
        donts: &["Toilet", "Dustbin", "Clutter"],
    },
    Zone {
        direction: Direction::NE,
        center_deg: 45.0,
        ideal: "Pooja, Water",
        color: "#81c784",
        description: "Ishanya (God). Best for Meditation & Underground Water tank.",
        element: "Water/Space",
        dos: &["Pooja Room", "Meditation", "Underground Water Tank", "Entrance"],
        donts: &["Toilet", "Kitchen", "Septic Tank", "Heavy Storage", "Master Bedroom"],
    },
    Zone {
        direction: Direction::ENE,
        center_deg: 67.5,
        ideal: "Fun, Recreation",
        color: "#c8e6c9",
        description: "Rejuvenation zone.",
        element: "Air/Space",
        dos: &["Living Room area", "Play area", "Bathrooms (no WC)"],
        donts: &["Heavy storage", "Toilet seat"],
    },
    Zone {
        direction: Direction::E,
        center_deg: 90.0,
        ideal: "Social Connections",
        color: "#fff59d",
        description: "Indra Stan. Good for Living room.",
        element: "Air/Sun",
        dos: &["Main Entrance", "Living Room", "Guest Room", "Greenery"],
        donts: &["Toilet", "Store room", "Kitchen (partial ok but avoid)"],
    },
    Zone {
        direction: Direction::ESE,
        center_deg: 112.5,
        ideal: "Churning, Anxiety",
        color: "#ffccbc",
        description: "Avoid Bedroom here. Good for Mixer/Grinder.",
        element: "Air",
        dos: &["Washing Machine", "Mixer/Grinder", "Toilet (Acceptable)"],
        donts: &["Bedroom (Causes anxiety)", "Study table"],
    },
    Zone {
        direction: Direction::SE,
        center_deg: 135.0,
        ideal: "Kitchen (Fire)",
        color: "#ff8a65",
        description: "Agneya (Fire). Best for Kitchen.",
        element: "Fire",
        dos: &["Kitchen (Burner)", "Electric Meter", "Inverters/Generators"],
        donts: &["Water tank", "Toilet", "Bedroom (Causes aggression)", "Blue color"],
    },
    Zone {
        direction: Direction::SSE,
        center_deg: 157.5,
        ideal: "Strength, Confidence",
        color: "#ffab91",
        description: "Power & Confidence zone.",
        element: "Fire",
        dos: &["Gym", "Yoga", "Bedroom (for confidence)"],
        donts: &["Water features", "Toilet"],
    },
    Zone {
        direction: Direction::S,
        center_deg: 180.0,
        ideal: "Fame, Relaxation",
        color: "#ffccbc",
        description: "Yama Stan. Good for Bedroom.",
        element: "Fire/Earth",
        dos: &["Bedroom", "Office cabin (for fame)"],
        donts: &["Water", "Mirrors", "Main Entrance (needs remedy)"],
    },
    Zone {
        direction: Direction::SSW,
        center_deg: 202.5,
        ideal: "Disposal, Wastage",
        color: "#ef9a9a",
        description: "Best for Toilet/Dustbin. Avoid sleeping here.",
        element: "Earth",
        dos: &["Toilet", "Dustbin", "Septic Tank", "Broom storage"],
        donts: &["Bedroom", "Kitchen", "Entrance", "Pooja"],
    },
    Zone {
        direction: Direction::SW,
        center_deg: 225.0,
        ideal: "Master Bedroom",
        color: "#f48fb1",
        description: "Nairitya (Stability). Head of family should sleep here.",
        element: "Earth",
        dos: &[
            "Master Bedroom",
            "Heavy Wardrobes",
            "Safe/Locker (opening North)",
            "Family Photos",
        ],
        donts: &[
            "Toilet",
            "Kitchen",
            "Water tank (underground)",
            "Entrance",
            "Cut/Extension",
        ],
    },
    Zone {
        direction: Direction::WSW,
        center_deg: 247.5,
        ideal: "Education",
        color: "#ce93d8",
        description: "Vidya Stan. Good for Study table.",
        element: "Space",
        dos: &["Study Room", "Library", "Children Bedroom"],
        donts: &["Toilet", "Kitchen", "TV"],
    },
    Zone {
        direction: Direction::W,
        center_deg: 270.0,
        ideal: "Gains, Profits",
        color: "#b39ddb",
        description: "Varuna Stan. Dining or Bedroom.",
        element: "Space",
        dos: &["Dining Room", "Bedroom", "Safe/Locker", "Living Room"],
        donts: &["Toilet", "Entrance (check pada)", "Kitchen"],
    },
    Zone {
        direction: Direction::WNW,
        center_deg: 292.5,
        ideal: "Depression, Detox",
        color: "#9fa8da",
        description: "Rodana (Crying). Good for washing machine/detox.",
        element: "Space",
        dos: &["Toilet", "Washing Machine", "Guest Room (short stay)"],
        donts: &["Master Bedroom", "Study", "Pooja"],
    },
    Zone {
        direction: Direction::NW,
        center_deg: 315.0,
        ideal: "Support, Banking",
        color: "#90caf9",
        description: "Vayu Stan. Guest room or Finished Goods.",
        element: "Air",
        dos: &["Guest Room", "Finished Goods Store", "Parking", "Pets"],
        donts: &[
            "Master Bedroom",
            "Kitchen (secondary option)",
            "Heavy construction",
        ],
    },
    Zone {
        direction: Direction::NNW,
        center_deg: 337.5,
        ideal: "Attraction, Sex",
        color: "#a5d6a7",
        description: "Rati Stan. Avoid for children.",
        element: "Water/Air",
        dos: &["Bedroom for couples", "Dressing room"],
        donts: &["Study", "Pooja", "Kitchen"],
    },
];

/// A point on the drawing surface (x right, y down).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The two rim points of a sector's arc, in clockwise order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectorArc {
    pub start: Point,
    pub end: Point,
}

/// All 16 zones in ascending bearing order.
pub fn all_zones() -> &'static [Zone; 16] {
    &ZONES
}

/// Exact, case-sensitive lookup by canonical label.
///
/// Unknown labels are a normal outcome and return `None`; callers drawing
/// an entrance marker simply omit it.
pub fn find_by_name(name: &str) -> Option<&'static Zone> {
    let zone = ZONES.iter().find(|z| z.name() == name);
    if zone.is_none() {
        trace!("no zone named {name:?}");
    }
    zone
}

/// Zone for a known direction.
pub fn zone_for(direction: Direction) -> &'static Zone {
    &ZONES[direction.index() as usize]
}

/// Zone whose sector contains the given bearing.
///
/// The bearing is normalized to [0, 360) first. Each sector is half-open,
/// `[center - 11.25, center + 11.25)`, so 348.75 and above belong to N and
/// 11.25 belongs to NNE.
pub fn zone_from_bearing(bearing_deg: f64) -> &'static Zone {
    let b = normalize_360(bearing_deg);
    let idx = ((b + SECTOR_HALF_WIDTH) / SECTOR_SPAN).floor() as usize % 16;
    &ZONES[idx]
}

/// `(start, end)` bearings of a zone's sector: `center ∓ 11.25`.
///
/// Not normalized: N yields `(-11.25, 11.25)`.
pub fn sector_boundary_angles(zone: &Zone) -> (f64, f64) {
    (
        zone.center_deg - SECTOR_HALF_WIDTH,
        zone.center_deg + SECTOR_HALF_WIDTH,
    )
}

/// Convert a bearing to a point at `radius` from `center`.
///
/// `θ = bearing - 90` (drawing angle zero points right, bearing zero points
/// up), then `x = cx + r·cos θ`, `y = cy + r·sin θ`.
pub fn bearing_to_point(bearing_deg: f64, center: Point, radius: f64) -> Point {
    let theta = ((bearing_deg - 90.0) * PI) / 180.0;
    Point {
        x: center.x + radius * theta.cos(),
        y: center.y + radius * theta.sin(),
    }
}

/// Point on the zone's center line at `radius` from `center`.
pub fn marker_position(zone: &Zone, center: Point, radius: f64) -> Point {
    bearing_to_point(zone.center_deg, center, radius)
}

/// Where a zone's label is drawn on a compass of the given radius.
pub fn label_position(zone: &Zone, center: Point, radius: f64) -> Point {
    marker_position(zone, center, radius * LABEL_RADIUS_FACTOR)
}

/// Where the entrance marker goes, just outside the rim of the compass.
///
/// `None` when `entrance` is not a canonical label.
pub fn entrance_marker_position(entrance: &str, center: Point, radius: f64) -> Option<Point> {
    find_by_name(entrance).map(|z| marker_position(z, center, radius + MARKER_OFFSET))
}

/// Rim endpoints of a zone's sector.
pub fn sector_arc(zone: &Zone, center: Point, radius: f64) -> SectorArc {
    let (start, end) = sector_boundary_angles(zone);
    SectorArc {
        start: bearing_to_point(start, center, radius),
        end: bearing_to_point(end, center, radius),
    }
}

/// SVG path data for a zone's pie sector.
///
/// `M cx cy L x1 y1 A r r 0 0 1 x2 y2 Z`: a line from the center to the
/// start of the arc, a clockwise minor arc to its end, then close.
pub fn sector_path_data(zone: &Zone, center: Point, radius: f64) -> String {
    let arc = sector_arc(zone, center, radius);
    format!(
        "M {} {} L {} {} A {r} {r} 0 0 1 {} {} Z",
        center.x,
        center.y,
        arc.start.x,
        arc.start.y,
        arc.end.x,
        arc.end.y,
        r = radius,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::ALL_DIRECTIONS;

    const ORIGIN: Point = Point::new(0.0, 0.0);

    #[test]
    fn zone_order_matches_directions() {
        for (i, z) in ZONES.iter().enumerate() {
            assert_eq!(z.direction, ALL_DIRECTIONS[i]);
        }
    }

    #[test]
    fn centers_spaced_22_5() {
        for (i, z) in ZONES.iter().enumerate() {
            assert!((z.center_deg - i as f64 * 22.5).abs() < 1e-12, "{}", z.name());
        }
    }

    #[test]
    fn descriptive_fields_nonempty() {
        for z in &ZONES {
            assert!(!z.ideal.is_empty());
            assert!(z.color.starts_with('#') && z.color.len() == 7);
            assert!(!z.description.is_empty());
            assert!(!z.element.is_empty());
            assert!(!z.dos.is_empty());
            assert!(!z.donts.is_empty());
        }
    }

    #[test]
    fn find_by_name_ne() {
        let z = find_by_name("NE").unwrap();
        assert_eq!(z.direction, Direction::NE);
        assert!((z.center_deg - 45.0).abs() < 1e-12);
    }

    #[test]
    fn find_by_name_unknown() {
        assert!(find_by_name("bogus").is_none());
        assert!(find_by_name("ne").is_none());
        assert!(find_by_name("").is_none());
    }

    #[test]
    fn zone_for_matches_find_by_name() {
        for d in ALL_DIRECTIONS {
            assert_eq!(Some(zone_for(d)), find_by_name(d.name()));
        }
    }

    #[test]
    fn boundary_angles_ne() {
        let (s, e) = sector_boundary_angles(zone_for(Direction::NE));
        assert!((s - 33.75).abs() < 1e-12);
        assert!((e - 56.25).abs() < 1e-12);
    }

    #[test]
    fn boundary_angles_north_straddles_zero() {
        let (s, e) = zone_for(Direction::N).boundary_angles();
        assert!((s + 11.25).abs() < 1e-12);
        assert!((e - 11.25).abs() < 1e-12);
    }

    #[test]
    fn bearing_lookup_centers() {
        for z in &ZONES {
            assert_eq!(zone_from_bearing(z.center_deg).direction, z.direction);
        }
    }

    #[test]
    fn bearing_lookup_edges_are_half_open() {
        assert_eq!(zone_from_bearing(11.25).direction, Direction::NNE);
        assert_eq!(zone_from_bearing(11.2499).direction, Direction::N);
        assert_eq!(zone_from_bearing(348.75).direction, Direction::N);
        assert_eq!(zone_from_bearing(348.7499).direction, Direction::NNW);
    }

    #[test]
    fn bearing_lookup_wraps() {
        assert_eq!(zone_from_bearing(360.0).direction, Direction::N);
        assert_eq!(zone_from_bearing(-90.0).direction, Direction::W);
        assert_eq!(zone_from_bearing(405.0).direction, Direction::NE);
    }

    #[test]
    fn north_marker_is_straight_up() {
        let p = marker_position(zone_for(Direction::N), Point::new(160.0, 160.0), 150.0);
        assert!((p.x - 160.0).abs() < 1e-9);
        assert!((p.y - 10.0).abs() < 1e-9);
    }

    #[test]
    fn east_marker_is_to_the_right() {
        let p = marker_position(zone_for(Direction::E), ORIGIN, 100.0);
        assert!((p.x - 100.0).abs() < 1e-9);
        assert!(p.y.abs() < 1e-9);
    }

    #[test]
    fn south_marker_is_down() {
        let p = marker_position(zone_for(Direction::S), ORIGIN, 100.0);
        assert!(p.x.abs() < 1e-9);
        assert!((p.y - 100.0).abs() < 1e-9);
    }

    #[test]
    fn label_sits_inside_rim() {
        let p = label_position(zone_for(Direction::W), ORIGIN, 100.0);
        assert!((p.x + 75.0).abs() < 1e-9);
        assert!(p.y.abs() < 1e-9);
    }

    #[test]
    fn entrance_marker_outside_rim() {
        let p = entrance_marker_position("E", ORIGIN, 150.0).unwrap();
        assert!((p.x - 165.0).abs() < 1e-9);
        assert!(entrance_marker_position("bogus", ORIGIN, 150.0).is_none());
    }

    #[test]
    fn sector_arc_north_endpoints() {
        let arc = sector_arc(zone_for(Direction::N), ORIGIN, 1.0);
        let t = 11.25_f64.to_radians();
        assert!((arc.start.x + t.sin()).abs() < 1e-9);
        assert!((arc.start.y + t.cos()).abs() < 1e-9);
        assert!((arc.end.x - t.sin()).abs() < 1e-9);
        assert!((arc.end.y + t.cos()).abs() < 1e-9);
    }

    #[test]
    fn sector_path_shape() {
        let d = sector_path_data(zone_for(Direction::E), Point::new(160.0, 160.0), 150.0);
        assert!(d.starts_with("M 160 160 L "));
        assert!(d.contains(" A 150 150 0 0 1 "));
        assert!(d.ends_with(" Z"));
    }
}
