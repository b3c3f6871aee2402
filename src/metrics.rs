use crate::{
    constants::EARTH_RADIUS,
    latlng::GeoPoint,
    point::PlanarPoint,
    utility::{degrees_to_radians, sin_squared},
};

/// Returns the great circle distance in meters between two points using the
/// [haversine formula](https://en.wikipedia.org/wiki/Haversine_formula) on a
/// sphere of radius [`EARTH_RADIUS`](crate::EARTH_RADIUS).
///
/// Symmetric in its arguments, and exactly `0` for equal points.
///
/// # Usage
///
/// ```
/// use geoplane::{spherical_distance, GeoPoint};
///
/// let los_angeles = GeoPoint::new(34.0522, -118.2437);
/// let new_york = GeoPoint::new(40.7128, -74.0059);
///
/// let distance = spherical_distance(&los_angeles, &new_york);
/// assert!((distance - 3.944e6).abs() / 3.944e6 < 0.01);
/// assert_eq!(spherical_distance(&new_york, &new_york), 0.0);
/// ```
pub fn spherical_distance(from: &GeoPoint, to: &GeoPoint) -> f64 {
    let lat1 = degrees_to_radians(from.latitude);
    let lat2 = degrees_to_radians(to.latitude);
    let d_lat = degrees_to_radians(to.latitude - from.latitude);
    let d_lng = degrees_to_radians(to.longitude - from.longitude);

    let a = sin_squared(d_lat / 2.) + lat1.cos() * lat2.cos() * sin_squared(d_lng / 2.);
    let c = 2. * a.sqrt().atan2((1. - a).sqrt());

    EARTH_RADIUS * c
}

/// Returns the Euclidean distance between two planar points.
///
/// # Usage
///
/// ```
/// use geoplane::{cartesian_distance, PlanarPoint};
///
/// let distance = cartesian_distance(&PlanarPoint::new(1.0, 1.0), &PlanarPoint::new(4.0, -3.0));
/// assert_eq!(distance, 5.0);
/// ```
pub fn cartesian_distance(from: &PlanarPoint, to: &PlanarPoint) -> f64 {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    (dx * dx + dy * dy).sqrt()
}
