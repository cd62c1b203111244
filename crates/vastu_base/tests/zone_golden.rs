//! Integration tests for the zone catalog and compass geometry.

use vastu_base::{
    ALL_DIRECTIONS, Direction, Point, SECTOR_SPAN, all_zones, entrance_marker_position,
    find_by_name, is_auspicious_entrance, label_position, marker_position,
    sector_boundary_angles, zone_for, zone_from_bearing,
};

#[test]
fn ne_zone_bounds() {
    let z = find_by_name("NE").expect("NE is canonical");
    assert!((z.center_deg - 45.0).abs() < 1e-12);
    let (s, e) = sector_boundary_angles(z);
    assert!((s - 33.75).abs() < 1e-12);
    assert!((e - 56.25).abs() < 1e-12);
}

#[test]
fn bogus_label_not_found_anywhere() {
    assert!(find_by_name("bogus").is_none());
    assert!(!is_auspicious_entrance("bogus"));
    assert!(entrance_marker_position("bogus", Point::new(160.0, 160.0), 150.0).is_none());
}

#[test]
fn zone_sweep_all_16() {
    for (i, d) in ALL_DIRECTIONS.iter().enumerate() {
        let mid = i as f64 * SECTOR_SPAN;
        assert_eq!(zone_from_bearing(mid).direction, *d, "center {mid}");
        assert_eq!(zone_from_bearing(mid + 11.0).direction, *d, "upper half {mid}");
        assert_eq!(zone_from_bearing(mid - 11.0).direction, *d, "lower half {mid}");
    }
}

#[test]
fn sectors_tile_the_circle() {
    let zones = all_zones();
    let (first_start, _) = sector_boundary_angles(&zones[0]);
    let mut prev_end = first_start;
    for z in zones.iter() {
        let (s, e) = sector_boundary_angles(z);
        assert!((s - prev_end).abs() < 1e-9, "gap before {}", z.name());
        assert!((e - s - SECTOR_SPAN).abs() < 1e-12);
        prev_end = e;
    }
    assert!((prev_end - (first_start + 360.0)).abs() < 1e-9);
}

#[test]
fn compass_geometry_for_320px_view() {
    // 320 px canvas, radius 150, centered at (160, 160).
    let c = Point::new(160.0, 160.0);

    let e = marker_position(zone_for(Direction::E), c, 150.0);
    assert!((e.x - 310.0).abs() < 1e-9 && (e.y - 160.0).abs() < 1e-9);

    let w_label = label_position(zone_for(Direction::W), c, 150.0);
    assert!((w_label.x - 47.5).abs() < 1e-9 && (w_label.y - 160.0).abs() < 1e-9);

    let ne_marker = entrance_marker_position("NE", c, 150.0).unwrap();
    let r = 165.0 / 2f64.sqrt();
    assert!((ne_marker.x - (160.0 + r)).abs() < 1e-9);
    assert!((ne_marker.y - (160.0 - r)).abs() < 1e-9);
}

#[test]
fn zone_serializes_with_name() {
    let json = serde_json::to_value(zone_for(Direction::SE)).unwrap();
    assert_eq!(json["name"], "SE");
    assert_eq!(json["center_deg"], 135.0);
    assert_eq!(json["element"], "Fire");
}
