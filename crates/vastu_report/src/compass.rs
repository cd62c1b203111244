//! SVG rendering of the 16-zone compass.
//!
//! One pie sector per zone filled with the zone color, the zone label at
//! three quarters of the radius, a "Brahma" hub in the middle, and a
//! triangular ENTRY marker just outside the rim on the entrance bearing.
//! An entrance that is not a canonical label draws no marker and no
//! highlight.

use std::fmt::{Display, Formatter};

use log::debug;
use vastu_base::{
    MARKER_OFFSET, Point, all_zones, find_by_name, label_position, marker_position,
    sector_path_data,
};

/// Default canvas edge in pixels.
pub const DEFAULT_COMPASS_SIZE: f64 = 320.0;

/// Gap between the canvas edge and the compass rim.
const RIM_PADDING: f64 = 10.0;

/// Radius of the central hub.
const HUB_RADIUS: f64 = 40.0;

const ENTRANCE_COLOR: &str = "#10b981";

/// Compass drawing for a given entrance. Render with `to_string()`.
#[derive(Debug, Clone, Copy)]
pub struct CompassSvg<'a> {
    pub entrance: &'a str,
    /// Width and height of the square canvas in pixels.
    pub size: f64,
}

impl<'a> CompassSvg<'a> {
    pub fn new(entrance: &'a str) -> Self {
        Self {
            entrance,
            size: DEFAULT_COMPASS_SIZE,
        }
    }

    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    /// Center of the canvas.
    pub fn center(&self) -> Point {
        Point::new(self.size / 2.0, self.size / 2.0)
    }

    /// Radius of the compass rim.
    pub fn radius(&self) -> f64 {
        (self.size / 2.0 - RIM_PADDING).max(1.0)
    }
}

impl Display for CompassSvg<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let size = self.size;
        let c = self.center();
        let r = self.radius();
        let entrance_zone = find_by_name(self.entrance);
        debug!(
            "compass: size={size} radius={r} entrance={:?}",
            entrance_zone.map(|z| z.name())
        );

        writeln!(
            f,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {size} {size}">"#
        )?;
        writeln!(
            f,
            r##"  <circle cx="{}" cy="{}" r="{r}" fill="transparent" stroke="#e2e8f0" stroke-width="1"/>"##,
            c.x, c.y
        )?;

        for zone in all_zones() {
            let is_entrance = entrance_zone.is_some_and(|e| e.direction == zone.direction);
            let (stroke, stroke_width) = if is_entrance {
                (ENTRANCE_COLOR, 3)
            } else {
                ("#fff", 1)
            };
            let label = label_position(zone, c, r);
            writeln!(f, r#"  <g id="zone-{}">"#, zone.name())?;
            writeln!(
                f,
                r#"    <path d="{}" fill="{}" stroke="{stroke}" stroke-width="{stroke_width}"/>"#,
                sector_path_data(zone, c, r),
                zone.color
            )?;
            writeln!(
                f,
                r#"    <text x="{}" y="{}" text-anchor="middle" dominant-baseline="middle" font-size="9" font-weight="bold">{}</text>"#,
                label.x,
                label.y,
                zone.name()
            )?;
            writeln!(f, "  </g>")?;
        }

        writeln!(
            f,
            r#"  <circle cx="{}" cy="{}" r="{HUB_RADIUS}" fill="white"/>"#,
            c.x, c.y
        )?;
        writeln!(
            f,
            r#"  <text x="{}" y="{}" text-anchor="middle" dominant-baseline="middle" font-size="12">Brahma</text>"#,
            c.x, c.y
        )?;
        writeln!(
            f,
            r#"  <text x="{}" y="{}" text-anchor="middle" dominant-baseline="middle" font-size="8">Center</text>"#,
            c.x,
            c.y + 15.0
        )?;

        if let Some(zone) = entrance_zone {
            let p = marker_position(zone, c, r + MARKER_OFFSET);
            writeln!(
                f,
                r#"  <g id="entrance" transform="translate({}, {}) rotate({})">"#,
                p.x, p.y, zone.center_deg
            )?;
            writeln!(f, r#"    <polygon points="0,-10 8,5 -8,5" fill="{ENTRANCE_COLOR}"/>"#)?;
            writeln!(
                f,
                r#"    <text y="15" text-anchor="middle" font-size="10" font-weight="bold">ENTRY</text>"#
            )?;
            writeln!(f, "  </g>")?;
        }

        writeln!(f, "</svg>")
    }
}
