use approx::{assert_abs_diff_eq, assert_relative_eq};
use geoplane::{
    cartesian_distance, cartesian_to_lat_lng, d_latitude_for_distance, d_longitude_for_distance,
    degrees_to_radians, distance_for_d_latitude, distance_for_d_longitude, lat_lng_to_cartesian,
    radians_to_degrees, spherical_distance, GeoPoint, PlanarPoint,
};
use proptest::prelude::*;

fn geo_point() -> impl Strategy<Value = GeoPoint> {
    (-90.0..=90.0_f64, -180.0..=180.0_f64).prop_map(|(lat, lng)| GeoPoint::new(lat, lng))
}

/// Centers away from the poles, where the longitude scale is well defined
fn center() -> impl Strategy<Value = GeoPoint> {
    (-80.0..=80.0_f64, -180.0..=180.0_f64).prop_map(|(lat, lng)| GeoPoint::new(lat, lng))
}

fn planar_point() -> impl Strategy<Value = PlanarPoint> {
    (-1e7..1e7_f64, -1e7..1e7_f64).prop_map(|(x, y)| PlanarPoint::new(x, y))
}

proptest! {
    #[test]
    fn spherical_distance_to_self_is_zero(p in geo_point()) {
        prop_assert_eq!(spherical_distance(&p, &p), 0.0);
    }

    #[test]
    fn cartesian_distance_to_self_is_zero(p in planar_point()) {
        prop_assert_eq!(cartesian_distance(&p, &p), 0.0);
    }

    #[test]
    fn spherical_distance_is_symmetric(a in geo_point(), b in geo_point()) {
        prop_assert_eq!(spherical_distance(&a, &b), spherical_distance(&b, &a));
    }

    #[test]
    fn cartesian_distance_is_symmetric(a in planar_point(), b in planar_point()) {
        prop_assert_eq!(cartesian_distance(&a, &b), cartesian_distance(&b, &a));
    }

    #[test]
    fn angle_conversions_are_inverses(x in -1e4..1e4_f64) {
        assert_abs_diff_eq!(radians_to_degrees(degrees_to_radians(x)), x, epsilon = 1e-9);
    }

    #[test]
    fn latitude_conversions_are_inverses(x in -1e3..1e3_f64) {
        assert_abs_diff_eq!(d_latitude_for_distance(distance_for_d_latitude(x)), x, epsilon = 1e-9);
    }

    #[test]
    fn longitude_conversions_are_inverses(x in -1e3..1e3_f64, lat in -89.0..89.0_f64) {
        assert_abs_diff_eq!(d_longitude_for_distance(distance_for_d_longitude(x, lat), lat), x, epsilon = 1e-9);
    }

    #[test]
    fn center_projects_to_origin(c in geo_point()) {
        prop_assert_eq!(lat_lng_to_cartesian(&c, &c), PlanarPoint::ORIGIN);
    }

    #[test]
    fn origin_converts_to_center(c in geo_point()) {
        prop_assert_eq!(cartesian_to_lat_lng(&PlanarPoint::ORIGIN, &c), c);
    }

    #[test]
    fn geo_round_trip(p in geo_point(), c in center()) {
        let back = cartesian_to_lat_lng(&lat_lng_to_cartesian(&p, &c), &c);

        assert_abs_diff_eq!(back.latitude, p.latitude, epsilon = 1e-9);
        assert_abs_diff_eq!(back.longitude, p.longitude, epsilon = 1e-9);
    }

    #[test]
    fn planar_round_trip(p in planar_point(), c in center()) {
        let back = lat_lng_to_cartesian(&cartesian_to_lat_lng(&p, &c), &c);

        assert_relative_eq!(back.x, p.x, epsilon = 1e-6, max_relative = 1e-9);
        assert_relative_eq!(back.y, p.y, epsilon = 1e-6, max_relative = 1e-9);
    }

    #[test]
    fn short_hops_match_spherical_distance(c in center(), dx in -500.0..500.0_f64, dy in -500.0..500.0_f64) {
        let p = cartesian_to_lat_lng(&PlanarPoint::new(dx, dy), &c);
        let planar = cartesian_distance(&PlanarPoint::ORIGIN, &PlanarPoint::new(dx, dy));

        // Within a kilometer the plane and the sphere agree to well under a meter
        assert_abs_diff_eq!(spherical_distance(&c, &p), planar, epsilon = 0.5);
    }
}
